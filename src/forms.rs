// Form payloads and their per-field validation. Each form validates into
// the matching New* model, or returns the messages needed to re-render the
// page with the user's input intact.

use regex::Regex;
use serde::Deserialize;

use crate::models::comment::NewComment;
use crate::models::post::{NewPost, Post};

pub const TITLE_MAX: usize = 200;
pub const AUTHOR_MAX: usize = 100;
pub const NAME_MAX: usize = 100;

pub fn is_valid_email(email: &str) -> bool {
    let re = Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$").unwrap();
    re.is_match(email)
}

/// Field-level validation messages, in field order.
#[derive(Debug, Default)]
pub struct FormErrors {
    errors: Vec<(&'static str, String)>,
}

impl FormErrors {
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push((field, message.into()));
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, m)| m.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Fields default to empty so a missing key reads as "not filled in" and
/// gets a field error instead of failing form extraction outright.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub image_url: String,
}

impl PostForm {
    pub fn validate(&self) -> Result<NewPost, FormErrors> {
        let mut errors = FormErrors::default();

        let title = self.title.trim();
        if title.is_empty() {
            errors.push("title", "Title is required");
        } else if title.chars().count() > TITLE_MAX {
            errors.push("title", format!("Title must be at most {} characters", TITLE_MAX));
        }

        if self.content.trim().is_empty() {
            errors.push("content", "Content is required");
        }

        let author = self.author.trim();
        if author.is_empty() {
            errors.push("author", "Author is required");
        } else if author.chars().count() > AUTHOR_MAX {
            errors.push("author", format!("Author must be at most {} characters", AUTHOR_MAX));
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        let image_url = self.image_url.trim();
        Ok(NewPost {
            title: title.to_string(),
            content: self.content.trim().to_string(),
            author: author.to_string(),
            image_url: if image_url.is_empty() {
                None
            } else {
                Some(image_url.to_string())
            },
        })
    }

    /// Pre-fill the form from a stored post, for the update screen.
    pub fn from_post(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            content: post.content.clone(),
            author: post.author.clone(),
            image_url: post.image_url.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommentForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub content: String,
}

impl CommentForm {
    pub fn validate(&self) -> Result<NewComment, FormErrors> {
        let mut errors = FormErrors::default();

        let name = self.name.trim();
        if name.is_empty() {
            errors.push("name", "Name is required");
        } else if name.chars().count() > NAME_MAX {
            errors.push("name", format!("Name must be at most {} characters", NAME_MAX));
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.push("email", "Email is required");
        } else if !is_valid_email(email) {
            errors.push("email", "Enter a valid email address");
        }

        if self.content.trim().is_empty() {
            errors.push("content", "Comment content is required");
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(NewComment {
            name: name.to_string(),
            email: email.to_string(),
            content: self.content.trim().to_string(),
        })
    }
}
