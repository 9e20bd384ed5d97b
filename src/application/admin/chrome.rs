use axum::http::StatusCode;

use crate::application::admin::settings::{AdminSettingsError, AdminSettingsService};
use crate::application::error::HttpError;
use crate::presentation::admin::views::{
    AdminBrandView, AdminChrome, AdminMetaView, AdminNavigationItemView, AdminNavigationView,
};

const SOURCE: &str = "application::admin::chrome::AdminChromeService";
const NAV_ITEMS: &[(&str, &str)] = &[
    ("/", "Dashboard"),
    ("/blogs", "Blog Management"),
    ("/blogs/new", "Add New Blog"),
    ("/settings", "Settings"),
];

#[derive(Clone)]
pub struct AdminChromeService {
    settings: AdminSettingsService,
    public_site_url: String,
    toast_ttl_ms: u64,
}

impl AdminChromeService {
    pub fn new(
        settings: AdminSettingsService,
        public_site_url: impl Into<String>,
        toast_ttl_ms: u64,
    ) -> Self {
        Self {
            settings,
            public_site_url: public_site_url.into(),
            toast_ttl_ms,
        }
    }

    pub async fn load(&self, active_path: &str) -> Result<AdminChrome, HttpError> {
        let settings = self.settings.load().await.map_err(settings_failure)?;

        let brand = AdminBrandView {
            title: format!("{} Admin", settings.brand_title),
        };

        let mut items: Vec<AdminNavigationItemView> = NAV_ITEMS
            .iter()
            .map(|(href, label)| AdminNavigationItemView {
                label: (*label).to_string(),
                href: (*href).to_string(),
                is_active: *href == active_path,
                open_in_new_tab: false,
            })
            .collect();

        items.push(AdminNavigationItemView {
            label: "View site".to_string(),
            href: normalize_public_site_url(&self.public_site_url),
            is_active: false,
            open_in_new_tab: true,
        });

        let page_title = items
            .iter()
            .find(|item| item.is_active)
            .map(|item| item.label.clone())
            .unwrap_or_else(|| "Dashboard".to_string());

        let meta = AdminMetaView {
            title: format!("{} · {}", brand.title, page_title),
            page_title,
            description: "Manage the travel blog".to_string(),
        };

        Ok(AdminChrome {
            brand,
            navigation: AdminNavigationView { items },
            meta,
            toast_ttl_ms: self.toast_ttl_ms,
        })
    }
}

fn normalize_public_site_url(url: &str) -> String {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return "/".to_string();
    }
    if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    }
}

fn settings_failure(err: AdminSettingsError) -> HttpError {
    HttpError::from_error(
        SOURCE,
        StatusCode::SERVICE_UNAVAILABLE,
        "Failed to load admin chrome",
        &err,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::admin::settings::DEFAULT_SETTINGS_KEY;
    use crate::infra::kv::MemoryKeyValueStore;
    use std::sync::Arc;

    fn service() -> AdminChromeService {
        let settings = AdminSettingsService::new(
            Arc::new(MemoryKeyValueStore::new()),
            DEFAULT_SETTINGS_KEY,
        );
        AdminChromeService::new(settings, "http://localhost:3000", 3000)
    }

    #[tokio::test]
    async fn marks_the_active_section_and_titles_the_page() {
        let chrome = service().load("/blogs").await.unwrap();

        let active: Vec<&str> = chrome
            .navigation
            .items
            .iter()
            .filter(|item| item.is_active)
            .map(|item| item.label.as_str())
            .collect();
        assert_eq!(active, ["Blog Management"]);
        assert_eq!(chrome.meta.page_title, "Blog Management");
        assert_eq!(chrome.meta.title, "SN.SP Travel Admin · Blog Management");
    }

    #[tokio::test]
    async fn links_to_the_public_site() {
        let chrome = service().load("/").await.unwrap();
        let last = chrome.navigation.items.last().unwrap();
        assert_eq!(last.href, "http://localhost:3000/");
        assert!(last.open_in_new_tab);
    }
}
