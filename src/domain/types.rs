//! Shared domain enumerations aligned with the persisted JSON documents.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlogStatus {
    Published,
    Draft,
}

impl BlogStatus {
    pub const ALL: [BlogStatus; 2] = [BlogStatus::Published, BlogStatus::Draft];

    pub fn as_str(self) -> &'static str {
        match self {
            BlogStatus::Published => "published",
            BlogStatus::Draft => "draft",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BlogStatus::Published => "Published",
            BlogStatus::Draft => "Draft",
        }
    }
}

impl TryFrom<&str> for BlogStatus {
    type Error = ();

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "published" => Ok(BlogStatus::Published),
            "draft" => Ok(BlogStatus::Draft),
            _ => Err(()),
        }
    }
}

/// Categories offered by the add and edit forms. Imported posts may carry others.
pub const BLOG_CATEGORIES: &[&str] = &["Flight Tips", "Hotels", "Visa"];
