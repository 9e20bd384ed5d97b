//! Domain entities mirrored from the persisted key-value documents.

use serde::{Deserialize, Serialize};

use crate::domain::types::BlogStatus;

/// Image used when a post is saved without one.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/400x200?text=Travel";

/// A single blog post. Field names match the persisted JSON exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
    /// ISO calendar date (`YYYY-MM-DD`) assigned when the post was created.
    pub date: String,
    pub status: BlogStatus,
    pub image: String,
}

impl BlogPost {
    pub fn is_published(&self) -> bool {
        self.status == BlogStatus::Published
    }

    /// Merge the supplied fields into this post. The id is never replaced.
    pub fn apply(&mut self, patch: BlogPatch) {
        let BlogPatch {
            title,
            excerpt,
            content,
            category,
            date,
            status,
            image,
        } = patch;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(excerpt) = excerpt {
            self.excerpt = excerpt;
        }
        if let Some(content) = content {
            self.content = content;
        }
        if let Some(category) = category {
            self.category = category;
        }
        if let Some(date) = date {
            self.date = date;
        }
        if let Some(status) = status {
            self.status = status;
        }
        if let Some(image) = image {
            self.image = image;
        }
    }
}

/// Caller-supplied fields for a new post; the store assigns `id` and `date`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogDraft {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
    pub status: BlogStatus,
    pub image: String,
}

impl BlogDraft {
    pub(crate) fn into_post(self, id: String, date: String) -> BlogPost {
        BlogPost {
            id,
            title: self.title,
            excerpt: self.excerpt,
            content: self.content,
            category: self.category,
            date,
            status: self.status,
            image: self.image,
        }
    }
}

/// Replacement values for an existing post; `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogPatch {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub date: Option<String>,
    pub status: Option<BlogStatus>,
    pub image: Option<String>,
}

impl From<BlogDraft> for BlogPatch {
    fn from(draft: BlogDraft) -> Self {
        Self {
            title: Some(draft.title),
            excerpt: Some(draft.excerpt),
            content: Some(draft.content),
            category: Some(draft.category),
            date: None,
            status: Some(draft.status),
            image: Some(draft.image),
        }
    }
}

/// Site-wide settings edited from the admin settings section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
    pub brand_title: String,
    pub tagline: String,
    pub contact_email: String,
    pub contact_phone: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            brand_title: "SN.SP Travel".to_string(),
            tagline: "Flights, hotels and visas, handled.".to_string(),
            contact_email: "info@snsp-travel.com".to_string(),
            contact_phone: "+1 (555) 010-2025".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BlogPost {
        BlogPost {
            id: "42".into(),
            title: "Original".into(),
            excerpt: "Short".into(),
            content: "<p>Body</p>".into(),
            category: "Hotels".into(),
            date: "2025-01-10".into(),
            status: BlogStatus::Draft,
            image: "https://example.com/a.jpg".into(),
        }
    }

    #[test]
    fn apply_only_touches_supplied_fields() {
        let mut post = sample();
        post.apply(BlogPatch {
            title: Some("Renamed".into()),
            status: Some(BlogStatus::Published),
            ..BlogPatch::default()
        });

        assert_eq!(post.id, "42");
        assert_eq!(post.title, "Renamed");
        assert_eq!(post.status, BlogStatus::Published);
        assert_eq!(post.excerpt, "Short");
        assert_eq!(post.date, "2025-01-10");
        assert_eq!(post.image, "https://example.com/a.jpg");
    }

    #[test]
    fn posts_use_the_original_json_field_names() {
        let value = serde_json::to_value(sample()).unwrap();
        let keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        for key in [
            "id", "title", "excerpt", "content", "category", "date", "status", "image",
        ] {
            assert!(keys.contains(&key), "missing `{key}`");
        }
        assert_eq!(value["status"], "draft");
    }

    #[test]
    fn settings_fill_missing_fields_with_defaults() {
        let settings: SiteSettings =
            serde_json::from_str(r#"{"brand_title":"Custom"}"#).unwrap();
        assert_eq!(settings.brand_title, "Custom");
        assert_eq!(settings.tagline, SiteSettings::default().tagline);
    }
}
