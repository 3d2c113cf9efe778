use chrono::NaiveDateTime;
use uuid::Uuid;

/// A comment on a single post. Comments are never edited or deleted on
/// their own; they go away when their post does.
#[derive(Debug, Clone)]
pub struct Comment {
    pub id: Uuid,
    pub post_id: Uuid,
    pub name: String,
    pub email: String,
    pub content: String,
    pub created_at: NaiveDateTime,
}

/// Validated field values for a new comment.
#[derive(Debug, Clone)]
pub struct NewComment {
    pub name: String,
    pub email: String,
    pub content: String,
}
