//! Whole-collection export and import.

use std::{collections::HashSet, sync::Arc};

use metrics::counter;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use time::format_description::well_known::Rfc3339;
use tracing::{info, warn};

use crate::application::admin::Confirmation;
use crate::application::clock::Clock;
use crate::application::repos::StorageError;
use crate::application::store::BlogStore;
use crate::domain::entities::BlogPost;
use crate::domain::posts::iso_date;

pub const EXPORT_VERSION: &str = "1.0";

/// The document written by export and accepted (by its `blogs` field) on import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportDocument {
    pub blogs: Vec<BlogPost>,
    #[serde(rename = "exportDate")]
    pub export_date: String,
    pub version: String,
}

#[derive(Debug, Clone)]
pub struct ExportFile {
    pub file_name: String,
    pub contents: String,
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to format export timestamp: {0}")]
    Timestamp(#[from] time::error::Format),
    #[error("failed to encode export document: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("import file is not valid JSON: {0}")]
    Unreadable(String),
    #[error("import file has an invalid format: {0}")]
    InvalidFormat(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ImportError {
    /// Message shown to the operator.
    pub fn user_message(&self) -> &'static str {
        match self {
            ImportError::Unreadable(_) => "Error reading file",
            ImportError::InvalidFormat(_) => "Invalid data format",
            ImportError::Storage(_) => "Error saving imported data",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportOutcome {
    Declined,
    Imported { count: usize },
}

#[derive(Clone)]
pub struct AdminTransferService {
    store: Arc<BlogStore>,
    clock: Arc<dyn Clock>,
}

impl AdminTransferService {
    pub fn new(store: Arc<BlogStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub async fn document(&self) -> Result<ExportDocument, ExportError> {
        Ok(ExportDocument {
            blogs: self.store.list().await,
            export_date: self.clock.now().format(&Rfc3339)?,
            version: EXPORT_VERSION.to_string(),
        })
    }

    /// Pretty-printed export document plus its download file name.
    pub async fn export(&self) -> Result<ExportFile, ExportError> {
        let document = self.document().await?;
        let contents = serde_json::to_string_pretty(&document)?;
        let file_name = export_file_name(&self.clock.now());

        info!(
            target = "snsp::transfer",
            count = document.blogs.len(),
            file_name = %file_name,
            "blog data exported"
        );
        Ok(ExportFile {
            file_name,
            contents,
        })
    }

    /// Validate `text` and, once confirmed, replace the collection with its posts.
    /// Nothing is written unless validation passes and the operator accepted.
    pub async fn import(
        &self,
        text: &str,
        confirmation: Confirmation,
    ) -> Result<ImportOutcome, ImportError> {
        let posts = match parse_import(text) {
            Ok(posts) => posts,
            Err(err) => {
                warn!(target = "snsp::transfer", error = %err, "import rejected");
                counter!("snsp_import_total", "outcome" => "rejected").increment(1);
                return Err(err);
            }
        };

        if !confirmation.is_accepted() {
            counter!("snsp_import_total", "outcome" => "declined").increment(1);
            return Ok(ImportOutcome::Declined);
        }

        let count = posts.len();
        self.store.replace_all(posts).await?;
        counter!("snsp_import_total", "outcome" => "imported").increment(1);
        info!(target = "snsp::transfer", count, "blog data imported");
        Ok(ImportOutcome::Imported { count })
    }
}

pub fn export_file_name(at: &time::OffsetDateTime) -> String {
    format!("snsp-travel-data-{}.json", iso_date(*at))
}

/// Extract the post list from an import document. Only the `blogs` array is read.
pub fn parse_import(text: &str) -> Result<Vec<BlogPost>, ImportError> {
    let document: Value =
        serde_json::from_str(text).map_err(|err| ImportError::Unreadable(err.to_string()))?;

    let Some(blogs) = document.get("blogs").and_then(Value::as_array) else {
        return Err(ImportError::InvalidFormat(
            "expected an object with a `blogs` array".to_string(),
        ));
    };

    let posts = blogs
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            BlogPost::deserialize(entry).map_err(|err| {
                ImportError::InvalidFormat(format!("blogs[{index}] is not a blog post: {err}"))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut seen = HashSet::new();
    if let Some(duplicate) = posts.iter().find(|post| !seen.insert(post.id.as_str())) {
        return Err(ImportError::InvalidFormat(format!(
            "duplicate blog id `{}`",
            duplicate.id
        )));
    }

    Ok(posts)
}
