use askama::Template;

mod blogs;
mod settings;

pub use blogs::*;
pub use settings::*;

#[derive(Clone)]
pub struct AdminBrandView {
    pub title: String,
}

#[derive(Clone)]
pub struct AdminNavigationItemView {
    pub label: String,
    pub href: String,
    pub is_active: bool,
    pub open_in_new_tab: bool,
}

#[derive(Clone)]
pub struct AdminNavigationView {
    pub items: Vec<AdminNavigationItemView>,
}

#[derive(Clone)]
pub struct AdminMetaView {
    pub title: String,
    pub page_title: String,
    pub description: String,
}

#[derive(Clone)]
pub struct AdminChrome {
    pub brand: AdminBrandView,
    pub navigation: AdminNavigationView,
    pub meta: AdminMetaView,
    pub toast_ttl_ms: u64,
}

#[derive(Clone)]
pub struct AdminLayout<T> {
    pub chrome: AdminChrome,
    pub asset_version: String,
    pub content: T,
}

impl<T> AdminLayout<T> {
    pub fn new(chrome: AdminChrome, content: T) -> Self {
        Self {
            chrome,
            asset_version: asset_version(),
            content,
        }
    }
}

fn asset_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[derive(Clone)]
pub struct AdminStatView {
    pub label: &'static str,
    pub value: usize,
    pub icon: &'static str,
}

#[derive(Clone)]
pub struct AdminDashboardView {
    pub heading: String,
    pub stats: Vec<AdminStatView>,
    pub recent: Vec<AdminBlogRowView>,
    pub empty_message: String,
    pub export_href: String,
    pub import_action: String,
    pub import_prompt: &'static str,
    pub delete_prompt: &'static str,
}

impl AdminDashboardView {
    pub fn has_recent(&self) -> bool {
        !self.recent.is_empty()
    }
}

#[derive(Template)]
#[template(path = "admin/dashboard.html")]
pub struct AdminDashboardTemplate {
    pub view: AdminLayout<AdminDashboardView>,
}

#[derive(Template)]
#[template(path = "admin/dashboard_panel.html")]
pub struct AdminDashboardPanelTemplate {
    pub content: AdminDashboardView,
}

#[derive(Clone)]
pub struct AdminToastItem {
    pub id: String,
    pub kind: &'static str,
    pub icon: &'static str,
    pub text: String,
    pub ttl_ms: u64,
}

#[derive(Template)]
#[template(path = "admin/toast_stack.html")]
pub struct AdminToastStackTemplate {
    pub toasts: Vec<AdminToastItem>,
}

/// Empty modal container, sent to dismiss whatever the slot holds.
#[derive(Template)]
#[template(path = "admin/modal_slot.html")]
pub struct AdminModalSlotTemplate;

#[derive(Clone)]
pub struct AdminLoginView {
    pub brand_title: String,
    pub action: String,
    pub asset_version: String,
}

impl AdminLoginView {
    pub fn new(brand_title: impl Into<String>) -> Self {
        Self {
            brand_title: brand_title.into(),
            action: "/login".to_string(),
            asset_version: asset_version(),
        }
    }
}

#[derive(Template)]
#[template(path = "admin/login.html")]
pub struct AdminLoginTemplate {
    pub view: AdminLoginView,
}
