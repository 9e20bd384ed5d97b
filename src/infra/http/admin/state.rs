use std::{sync::Arc, time::Duration};

use crate::application::admin::{
    AdminBlogService, AdminTransferService, chrome::AdminChromeService,
    dashboard::AdminDashboardService, settings::AdminSettingsService,
};
use crate::application::context::AppContext;

#[derive(Clone)]
pub struct AdminState {
    pub chrome: Arc<AdminChromeService>,
    pub dashboard: Arc<AdminDashboardService>,
    pub blogs: Arc<AdminBlogService>,
    pub transfer: Arc<AdminTransferService>,
    pub settings: Arc<AdminSettingsService>,
    pub toast_ttl: Duration,
    pub require_session: bool,
}

impl AdminState {
    pub fn new(context: &AppContext, toast_ttl: Duration, require_session: bool) -> Self {
        Self {
            chrome: Arc::new(context.chrome.clone()),
            dashboard: Arc::new(context.dashboard.clone()),
            blogs: Arc::new(context.blogs.clone()),
            transfer: Arc::new(context.transfer.clone()),
            settings: Arc::new(context.settings.clone()),
            toast_ttl,
            require_session,
        }
    }
}
