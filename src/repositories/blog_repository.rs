use async_trait::async_trait;
use chrono::Utc;
use deadpool_postgres::Pool;
use tokio_postgres::Row;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::comment::{Comment, NewComment};
use crate::models::post::{NewPost, Post};

/// Persistence seam for the handlers. One store covers both record types;
/// a comment never exists apart from its post.
#[async_trait]
pub trait BlogRepository: Send + Sync {
    /// All posts, newest first.
    async fn list_posts(&self) -> Result<Vec<Post>, AppError>;
    async fn get_post(&self, id: Uuid) -> Result<Post, AppError>;
    async fn create_post(&self, new: NewPost) -> Result<Post, AppError>;
    /// Overwrites title/content/author/image only. `id` and `published`
    /// never change.
    async fn update_post(&self, id: Uuid, new: NewPost) -> Result<Post, AppError>;
    /// Deletes the post and all of its comments as one unit.
    async fn delete_post(&self, id: Uuid) -> Result<(), AppError>;
    /// Comments for one post, oldest first.
    async fn comments_for_post(&self, post_id: Uuid) -> Result<Vec<Comment>, AppError>;
    async fn create_comment(&self, post_id: Uuid, new: NewComment) -> Result<Comment, AppError>;
}

pub struct PgBlogRepository {
    pool: Pool,
}

impl PgBlogRepository {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }
}

fn row_to_post(row: &Row) -> Post {
    Post {
        id: row.get("id"),
        title: row.get("title"),
        content: row.get("content"),
        author: row.get("author"),
        image_url: row.get("image_url"),
        published: row.get("published"),
    }
}

fn row_to_comment(row: &Row) -> Comment {
    Comment {
        id: row.get("id"),
        post_id: row.get("post_id"),
        name: row.get("name"),
        email: row.get("email"),
        content: row.get("content"),
        created_at: row.get("created_at"),
    }
}

#[async_trait]
impl BlogRepository for PgBlogRepository {
    async fn list_posts(&self) -> Result<Vec<Post>, AppError> {
        let client = self.pool.get().await?;
        let rows = client
            .query(
                "SELECT id, title, content, author, image_url, published \
                 FROM posts ORDER BY published DESC",
                &[],
            )
            .await?;
        Ok(rows.iter().map(row_to_post).collect())
    }

    async fn get_post(&self, id: Uuid) -> Result<Post, AppError> {
        let client = self.pool.get().await?;
        let row = client
            .query_opt(
                "SELECT id, title, content, author, image_url, published \
                 FROM posts WHERE id = $1",
                &[&id],
            )
            .await?;
        row.as_ref().map(row_to_post).ok_or(AppError::NotFound)
    }

    async fn create_post(&self, new: NewPost) -> Result<Post, AppError> {
        let client = self.pool.get().await?;
        let post = Post {
            id: Uuid::new_v4(),
            title: new.title,
            content: new.content,
            author: new.author,
            image_url: new.image_url,
            published: Utc::now().naive_utc(),
        };
        client
            .execute(
                "INSERT INTO posts (id, title, content, author, image_url, published) \
                 VALUES ($1, $2, $3, $4, $5, $6)",
                &[
                    &post.id,
                    &post.title,
                    &post.content,
                    &post.author,
                    &post.image_url,
                    &post.published,
                ],
            )
            .await?;
        Ok(post)
    }

    async fn update_post(&self, id: Uuid, new: NewPost) -> Result<Post, AppError> {
        let client = self.pool.get().await?;
        let row = client
            .query_opt(
                "UPDATE posts SET title = $2, content = $3, author = $4, image_url = $5 \
                 WHERE id = $1 \
                 RETURNING id, title, content, author, image_url, published",
                &[&id, &new.title, &new.content, &new.author, &new.image_url],
            )
            .await?;
        row.as_ref().map(row_to_post).ok_or(AppError::NotFound)
    }

    async fn delete_post(&self, id: Uuid) -> Result<(), AppError> {
        let mut client = self.pool.get().await?;
        // The comment sweep and the post delete commit together; a missing
        // post rolls the whole thing back.
        let tx = client.transaction().await?;
        tx.execute("DELETE FROM comments WHERE post_id = $1", &[&id])
            .await?;
        let deleted = tx.execute("DELETE FROM posts WHERE id = $1", &[&id]).await?;
        if deleted == 0 {
            return Err(AppError::NotFound);
        }
        tx.commit().await?;
        Ok(())
    }

    async fn comments_for_post(&self, post_id: Uuid) -> Result<Vec<Comment>, AppError> {
        let client = self.pool.get().await?;
        let rows = client
            .query(
                "SELECT id, post_id, name, email, content, created_at \
                 FROM comments WHERE post_id = $1 ORDER BY created_at ASC",
                &[&post_id],
            )
            .await?;
        Ok(rows.iter().map(row_to_comment).collect())
    }

    async fn create_comment(&self, post_id: Uuid, new: NewComment) -> Result<Comment, AppError> {
        let client = self.pool.get().await?;
        let comment = Comment {
            id: Uuid::new_v4(),
            post_id,
            name: new.name,
            email: new.email,
            content: new.content,
            created_at: Utc::now().naive_utc(),
        };
        client
            .execute(
                "INSERT INTO comments (id, post_id, name, email, content, created_at) \
                 VALUES ($1, $2, $3, $4, $5, $6)",
                &[
                    &comment.id,
                    &comment.post_id,
                    &comment.name,
                    &comment.email,
                    &comment.content,
                    &comment.created_at,
                ],
            )
            .await?;
        Ok(comment)
    }
}
