use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use crate::application::repos::{KeyValueStore, StorageError};
use crate::domain::entities::SiteSettings;

pub const DEFAULT_SETTINGS_KEY: &str = "snsp_settings";

#[derive(Debug, Error)]
pub enum AdminSettingsError {
    #[error("{0} is required")]
    ConstraintViolation(&'static str),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(Debug, Clone, Default)]
pub struct UpdateSettingsCommand {
    pub brand_title: String,
    pub tagline: String,
    pub contact_email: String,
    pub contact_phone: String,
}

#[derive(Clone)]
pub struct AdminSettingsService {
    kv: Arc<dyn KeyValueStore>,
    key: String,
}

impl AdminSettingsService {
    pub fn new(kv: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            kv,
            key: key.into(),
        }
    }

    /// Stored settings, or the defaults when nothing usable is stored.
    pub async fn load(&self) -> Result<SiteSettings, AdminSettingsError> {
        let Some(raw) = self.kv.get(&self.key).await? else {
            return Ok(SiteSettings::default());
        };

        match serde_json::from_str(&raw) {
            Ok(settings) => Ok(settings),
            Err(err) => {
                warn!(
                    target = "snsp::settings",
                    key = %self.key,
                    error = %err,
                    "stored settings could not be decoded, using defaults"
                );
                Ok(SiteSettings::default())
            }
        }
    }

    pub async fn update(
        &self,
        command: UpdateSettingsCommand,
    ) -> Result<SiteSettings, AdminSettingsError> {
        let brand_title = command.brand_title.trim();
        if brand_title.is_empty() {
            return Err(AdminSettingsError::ConstraintViolation("Brand title"));
        }

        let settings = SiteSettings {
            brand_title: brand_title.to_string(),
            tagline: command.tagline.trim().to_string(),
            contact_email: command.contact_email.trim().to_string(),
            contact_phone: command.contact_phone.trim().to_string(),
        };

        let encoded = serde_json::to_string(&settings)
            .map_err(|err| StorageError::encode(&self.key, err))?;
        self.kv.set(&self.key, &encoded).await?;

        info!(target = "snsp::settings", brand_title = %settings.brand_title, "site settings updated");
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::kv::MemoryKeyValueStore;

    fn service() -> (AdminSettingsService, Arc<MemoryKeyValueStore>) {
        let kv = Arc::new(MemoryKeyValueStore::new());
        (AdminSettingsService::new(kv.clone(), DEFAULT_SETTINGS_KEY), kv)
    }

    #[tokio::test]
    async fn missing_or_corrupt_settings_use_defaults() {
        let (service, kv) = service();
        assert_eq!(service.load().await.unwrap(), SiteSettings::default());

        kv.set(DEFAULT_SETTINGS_KEY, "[]").await.unwrap();
        assert_eq!(service.load().await.unwrap(), SiteSettings::default());
    }

    #[tokio::test]
    async fn update_persists_trimmed_values() {
        let (service, _) = service();

        let saved = service
            .update(UpdateSettingsCommand {
                brand_title: "  Wanderlust  ".into(),
                tagline: "Go further".into(),
                contact_email: "hello@example.com".into(),
                contact_phone: "+1 555 000 1111".into(),
            })
            .await
            .unwrap();

        assert_eq!(saved.brand_title, "Wanderlust");
        assert_eq!(service.load().await.unwrap(), saved);
    }

    #[tokio::test]
    async fn brand_title_is_required() {
        let (service, kv) = service();
        let err = service
            .update(UpdateSettingsCommand::default())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Brand title is required");
        assert_eq!(kv.get(DEFAULT_SETTINGS_KEY).await.unwrap(), None);
    }
}
