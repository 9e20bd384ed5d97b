use askama::Template;

use super::AdminLayout;
use crate::domain::entities::SiteSettings;

#[derive(Clone)]
pub struct AdminSettingsView {
    pub heading: String,
    pub action: String,
    pub brand_title: String,
    pub tagline: String,
    pub contact_email: String,
    pub contact_phone: String,
}

impl AdminSettingsView {
    pub fn new(settings: &SiteSettings) -> Self {
        Self {
            heading: "Settings".to_string(),
            action: "/settings".to_string(),
            brand_title: settings.brand_title.clone(),
            tagline: settings.tagline.clone(),
            contact_email: settings.contact_email.clone(),
            contact_phone: settings.contact_phone.clone(),
        }
    }
}

#[derive(Template)]
#[template(path = "admin/settings.html")]
pub struct AdminSettingsTemplate {
    pub view: AdminLayout<AdminSettingsView>,
}

#[derive(Template)]
#[template(path = "admin/settings_panel.html")]
pub struct AdminSettingsPanelTemplate {
    pub content: AdminSettingsView,
}
