use std::sync::Arc;

use crate::application::admin::{
    AdminBlogService, AdminTransferService, chrome::AdminChromeService,
    dashboard::AdminDashboardService, settings::AdminSettingsService,
};
use crate::application::chrome::ChromeService;
use crate::application::clock::Clock;
use crate::application::repos::{KeyValueStore, StorageError};
use crate::application::site::SiteService;
use crate::application::store::BlogStore;

/// Keys and presentation knobs the services are built with.
#[derive(Debug, Clone)]
pub struct ContextOptions {
    pub blogs_key: String,
    pub settings_key: String,
    pub public_site_url: String,
    pub toast_ttl_ms: u64,
}

/// Every service the HTTP surfaces and the CLI need, built once at startup.
#[derive(Clone)]
pub struct AppContext {
    pub store: Arc<BlogStore>,
    pub blogs: AdminBlogService,
    pub transfer: AdminTransferService,
    pub dashboard: AdminDashboardService,
    pub chrome: AdminChromeService,
    pub settings: AdminSettingsService,
    pub site: SiteService,
    pub site_chrome: ChromeService,
}

impl AppContext {
    pub async fn build(
        kv: Arc<dyn KeyValueStore>,
        clock: Arc<dyn Clock>,
        options: ContextOptions,
    ) -> Result<Self, StorageError> {
        let store = Arc::new(BlogStore::load(kv.clone(), options.blogs_key, clock.clone()).await?);

        let settings = AdminSettingsService::new(kv, options.settings_key);
        let blogs = AdminBlogService::new(store.clone());
        let transfer = AdminTransferService::new(store.clone(), clock);
        let dashboard = AdminDashboardService::new(blogs.clone());
        let chrome = AdminChromeService::new(
            settings.clone(),
            options.public_site_url,
            options.toast_ttl_ms,
        );
        let site = SiteService::new(store.clone(), settings.clone());
        let site_chrome = ChromeService::new(site.clone());

        Ok(Self {
            store,
            blogs,
            transfer,
            dashboard,
            chrome,
            settings,
            site,
            site_chrome,
        })
    }
}
