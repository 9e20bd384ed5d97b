//! Read-only blog access and contact handling for the public site.

use std::sync::Arc;

use metrics::counter;
use tracing::{info, warn};

use crate::application::admin::settings::AdminSettingsService;
use crate::application::store::BlogStore;
use crate::domain::contact::ContactSubmission;
use crate::domain::entities::{BlogPost, SiteSettings};
use crate::domain::error::DomainError;

#[derive(Clone)]
pub struct SiteService {
    store: Arc<BlogStore>,
    settings: AdminSettingsService,
}

impl SiteService {
    pub fn new(store: Arc<BlogStore>, settings: AdminSettingsService) -> Self {
        Self { store, settings }
    }

    /// Published posts, newest first.
    pub async fn published(&self) -> Vec<BlogPost> {
        let mut posts = self.store.published().await;
        posts.reverse();
        posts
    }

    pub async fn latest(&self, limit: usize) -> Vec<BlogPost> {
        let mut posts = self.published().await;
        posts.truncate(limit);
        posts
    }

    /// A published post by id. Drafts are not visible here.
    pub async fn post(&self, id: &str) -> Option<BlogPost> {
        self.store.get(id).await.filter(BlogPost::is_published)
    }

    /// Branding for the public pages; storage trouble falls back to the defaults.
    pub async fn settings(&self) -> SiteSettings {
        match self.settings.load().await {
            Ok(settings) => settings,
            Err(err) => {
                warn!(target = "snsp::site", error = %err, "falling back to default site settings");
                SiteSettings::default()
            }
        }
    }

    pub fn submit_contact(&self, submission: &ContactSubmission) -> Result<(), DomainError> {
        if let Err(err) = submission.validate() {
            counter!("snsp_contact_submissions_total", "outcome" => "invalid").increment(1);
            return Err(err);
        }

        counter!("snsp_contact_submissions_total", "outcome" => "accepted").increment(1);
        info!(
            target = "snsp::contact",
            name = %submission.name,
            email = %submission.email,
            service = %submission.service,
            "contact form submitted"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::admin::settings::DEFAULT_SETTINGS_KEY;
    use crate::application::clock::SystemClock;
    use crate::application::store::DEFAULT_BLOGS_KEY;
    use crate::infra::kv::MemoryKeyValueStore;

    async fn service() -> SiteService {
        let kv = Arc::new(MemoryKeyValueStore::new());
        let store = BlogStore::load(kv.clone(), DEFAULT_BLOGS_KEY, Arc::new(SystemClock))
            .await
            .unwrap();
        SiteService::new(
            Arc::new(store),
            AdminSettingsService::new(kv, DEFAULT_SETTINGS_KEY),
        )
    }

    #[tokio::test]
    async fn only_published_posts_are_visible() {
        let service = service().await;

        let ids: Vec<String> = service
            .published()
            .await
            .into_iter()
            .map(|post| post.id)
            .collect();
        assert_eq!(ids, ["2", "1"]);
        assert!(service.post("3").await.is_none());
        assert!(service.post("1").await.is_some());
        assert_eq!(service.latest(1).await.len(), 1);
    }

    #[tokio::test]
    async fn contact_submissions_are_validated() {
        let service = service().await;
        let err = service
            .submit_contact(&ContactSubmission::default())
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation { .. }));
    }
}
