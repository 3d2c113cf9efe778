use chrono::NaiveDateTime;
use uuid::Uuid;

/// A stored blog post. `id` and `published` are assigned at insert and
/// never change afterwards.
#[derive(Debug, Clone)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: String,
    pub image_url: Option<String>,
    pub published: NaiveDateTime,
}

/// Validated field values for inserting or overwriting a post.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author: String,
    pub image_url: Option<String>,
}
