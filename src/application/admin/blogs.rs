use std::sync::Arc;

use thiserror::Error;

use crate::application::admin::Confirmation;
use crate::application::repos::StorageError;
use crate::application::store::BlogStore;
use crate::domain::entities::{BlogDraft, BlogPatch, BlogPost, PLACEHOLDER_IMAGE_URL};
use crate::domain::types::BlogStatus;

pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all required fields";
pub const NOT_FOUND_MESSAGE: &str = "Blog post not found";

#[derive(Debug, Error)]
pub enum AdminBlogError {
    #[error("{}", MISSING_FIELDS_MESSAGE)]
    MissingFields,
    #[error("unknown blog status `{0}`")]
    InvalidStatus(String),
    #[error("{}", NOT_FOUND_MESSAGE)]
    NotFound,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Raw add/edit form values as submitted.
#[derive(Debug, Clone, Default)]
pub struct BlogForm {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
    pub status: String,
    pub image: String,
}

impl BlogForm {
    fn into_draft(self) -> Result<BlogDraft, AdminBlogError> {
        let title = self.title.trim().to_string();
        let excerpt = self.excerpt.trim().to_string();
        if title.is_empty() || excerpt.is_empty() || self.content.trim().is_empty() {
            return Err(AdminBlogError::MissingFields);
        }

        let status = BlogStatus::try_from(self.status.as_str())
            .map_err(|()| AdminBlogError::InvalidStatus(self.status.clone()))?;

        let image = match self.image.trim() {
            "" => PLACEHOLDER_IMAGE_URL.to_string(),
            url => url.to_string(),
        };

        Ok(BlogDraft {
            title,
            excerpt,
            content: self.content,
            category: self.category.trim().to_string(),
            status,
            image,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted(BlogPost),
    Declined,
    Missing,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlogStatusCounts {
    pub total: usize,
    pub published: usize,
    pub draft: usize,
}

#[derive(Clone)]
pub struct AdminBlogService {
    store: Arc<BlogStore>,
}

impl AdminBlogService {
    pub fn new(store: Arc<BlogStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Vec<BlogPost> {
        self.store.list().await
    }

    pub async fn load(&self, id: &str) -> Result<BlogPost, AdminBlogError> {
        self.store.get(id).await.ok_or(AdminBlogError::NotFound)
    }

    /// The last `limit` posts added, newest first.
    pub async fn recent(&self, limit: usize) -> Vec<BlogPost> {
        self.store.list().await.into_iter().rev().take(limit).collect()
    }

    pub async fn status_counts(&self) -> BlogStatusCounts {
        let posts = self.store.list().await;
        let published = posts.iter().filter(|post| post.is_published()).count();
        BlogStatusCounts {
            total: posts.len(),
            published,
            draft: posts.len() - published,
        }
    }

    pub async fn create(&self, form: BlogForm) -> Result<BlogPost, AdminBlogError> {
        let draft = form.into_draft()?;
        Ok(self.store.add(draft).await?)
    }

    /// Replace every editable field of post `id`; the id and date are kept.
    pub async fn update(&self, id: &str, form: BlogForm) -> Result<BlogPost, AdminBlogError> {
        let draft = form.into_draft()?;
        self.store
            .update(id, BlogPatch::from(draft))
            .await?
            .ok_or(AdminBlogError::NotFound)
    }

    pub async fn delete(
        &self,
        id: &str,
        confirmation: Confirmation,
    ) -> Result<DeleteOutcome, StorageError> {
        if !confirmation.is_accepted() {
            return Ok(DeleteOutcome::Declined);
        }

        Ok(match self.store.delete(id).await? {
            Some(post) => DeleteOutcome::Deleted(post),
            None => DeleteOutcome::Missing,
        })
    }
}
