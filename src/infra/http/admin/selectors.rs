//! Shared CSS selectors used by admin Datastar responses.

pub const TOAST_STACK: &str = "[data-admin-toast=\"stack\"]";
pub const MODAL_SLOT: &str = "[data-admin-modal=\"slot\"]";

pub const DASHBOARD_PANEL: &str = "[data-admin-panel=\"dashboard\"]";
pub const BLOGS_PANEL: &str = "[data-admin-panel=\"blogs\"]";
pub const BLOG_FORM_PANEL: &str = "[data-admin-panel=\"blog-form\"]";
pub const SETTINGS_PANEL: &str = "[data-admin-panel=\"settings\"]";
