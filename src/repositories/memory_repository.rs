// In-memory BlogRepository for handler tests: same contract as the
// postgres store, backed by mutex-guarded vectors.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::comment::{Comment, NewComment};
use crate::models::post::{NewPost, Post};
use crate::repositories::BlogRepository;

#[derive(Default)]
struct Inner {
    posts: Vec<Post>,
    comments: Vec<Comment>,
}

#[derive(Default)]
pub struct MemoryBlogRepository {
    inner: Mutex<Inner>,
}

impl MemoryBlogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn post_count(&self) -> usize {
        self.inner.lock().unwrap().posts.len()
    }

    pub fn comment_count(&self, post_id: Uuid) -> usize {
        self.inner
            .lock()
            .unwrap()
            .comments
            .iter()
            .filter(|c| c.post_id == post_id)
            .count()
    }
}

#[async_trait]
impl BlogRepository for MemoryBlogRepository {
    async fn list_posts(&self) -> Result<Vec<Post>, AppError> {
        let mut posts = self.inner.lock().unwrap().posts.clone();
        posts.sort_by(|a, b| b.published.cmp(&a.published));
        Ok(posts)
    }

    async fn get_post(&self, id: Uuid) -> Result<Post, AppError> {
        self.inner
            .lock()
            .unwrap()
            .posts
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(AppError::NotFound)
    }

    async fn create_post(&self, new: NewPost) -> Result<Post, AppError> {
        let post = Post {
            id: Uuid::new_v4(),
            title: new.title,
            content: new.content,
            author: new.author,
            image_url: new.image_url,
            published: Utc::now().naive_utc(),
        };
        self.inner.lock().unwrap().posts.push(post.clone());
        Ok(post)
    }

    async fn update_post(&self, id: Uuid, new: NewPost) -> Result<Post, AppError> {
        let mut inner = self.inner.lock().unwrap();
        let post = inner
            .posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(AppError::NotFound)?;
        post.title = new.title;
        post.content = new.content;
        post.author = new.author;
        post.image_url = new.image_url;
        Ok(post.clone())
    }

    async fn delete_post(&self, id: Uuid) -> Result<(), AppError> {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.posts.len();
        inner.posts.retain(|p| p.id != id);
        if inner.posts.len() == before {
            return Err(AppError::NotFound);
        }
        inner.comments.retain(|c| c.post_id != id);
        Ok(())
    }

    async fn comments_for_post(&self, post_id: Uuid) -> Result<Vec<Comment>, AppError> {
        let mut comments: Vec<Comment> = self
            .inner
            .lock()
            .unwrap()
            .comments
            .iter()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect();
        comments.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(comments)
    }

    async fn create_comment(&self, post_id: Uuid, new: NewComment) -> Result<Comment, AppError> {
        let comment = Comment {
            id: Uuid::new_v4(),
            post_id,
            name: new.name,
            email: new.email,
            content: new.content,
            created_at: Utc::now().naive_utc(),
        };
        self.inner.lock().unwrap().comments.push(comment.clone());
        Ok(comment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_post(title: &str) -> NewPost {
        NewPost {
            title: title.into(),
            content: "content".into(),
            author: "Alice".into(),
            image_url: None,
        }
    }

    fn new_comment(name: &str) -> NewComment {
        NewComment {
            name: name.into(),
            email: format!("{}@example.com", name.to_lowercase()),
            content: "Nice post".into(),
        }
    }

    #[tokio::test]
    async fn get_unknown_post_is_not_found() {
        let repo = MemoryBlogRepository::new();
        assert!(matches!(
            repo.get_post(Uuid::new_v4()).await,
            Err(AppError::NotFound)
        ));
    }

    #[tokio::test]
    async fn update_keeps_id_and_published() {
        let repo = MemoryBlogRepository::new();
        let created = repo.create_post(new_post("A")).await.unwrap();
        let updated = repo
            .update_post(created.id, new_post("B"))
            .await
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.published, created.published);
        assert_eq!(updated.title, "B");
    }

    #[tokio::test]
    async fn delete_cascades_only_its_own_comments() {
        let repo = MemoryBlogRepository::new();
        let p1 = repo.create_post(new_post("one")).await.unwrap();
        let p2 = repo.create_post(new_post("two")).await.unwrap();
        repo.create_comment(p1.id, new_comment("Bob")).await.unwrap();
        repo.create_comment(p2.id, new_comment("Carol")).await.unwrap();

        repo.delete_post(p1.id).await.unwrap();

        assert!(matches!(repo.get_post(p1.id).await, Err(AppError::NotFound)));
        assert_eq!(repo.comment_count(p1.id), 0);
        assert_eq!(repo.comment_count(p2.id), 1);
        assert!(repo.get_post(p2.id).await.is_ok());
    }

    #[tokio::test]
    async fn second_delete_is_not_found() {
        let repo = MemoryBlogRepository::new();
        let post = repo.create_post(new_post("A")).await.unwrap();
        repo.delete_post(post.id).await.unwrap();
        assert!(matches!(
            repo.delete_post(post.id).await,
            Err(AppError::NotFound)
        ));
    }
}
