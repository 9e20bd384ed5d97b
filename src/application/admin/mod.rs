//! Application services for the administrative surface.

pub mod blogs;
pub mod chrome;
pub mod dashboard;
pub mod settings;
pub mod transfer;

pub use blogs::AdminBlogService;
pub use transfer::AdminTransferService;

/// Whether the operator agreed to a destructive action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Accepted,
    Declined,
}

impl Confirmation {
    pub const DELETE_PROMPT: &'static str =
        "Are you sure you want to delete this blog post? This action cannot be undone.";
    pub const IMPORT_PROMPT: &'static str =
        "This will replace all existing blog data. Are you sure?";

    /// Read a submitted `confirmed` flag. Anything other than an explicit yes declines.
    pub fn from_flag(value: Option<&str>) -> Self {
        match value.map(|raw| raw.trim().to_ascii_lowercase()).as_deref() {
            Some("true" | "1" | "yes" | "on") => Confirmation::Accepted,
            _ => Confirmation::Declined,
        }
    }

    pub fn is_accepted(self) -> bool {
        self == Confirmation::Accepted
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminView {
    Dashboard,
    Blogs,
}

impl AdminView {
    pub fn as_str(self) -> &'static str {
        match self {
            AdminView::Dashboard => "dashboard",
            AdminView::Blogs => "blogs",
        }
    }
}

/// The blog-derived views currently on the operator's screen. After a mutation
/// exactly these are re-rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayedViews {
    dashboard: bool,
    blogs: bool,
}

impl DisplayedViews {
    /// Parse a comma or whitespace separated list; unknown names are ignored.
    pub fn parse(raw: Option<&str>) -> Self {
        let mut views = Self::default();
        for name in raw
            .unwrap_or_default()
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|name| !name.is_empty())
        {
            match name {
                "dashboard" => views.dashboard = true,
                "blogs" => views.blogs = true,
                _ => {}
            }
        }
        views
    }

    pub fn contains(self, view: AdminView) -> bool {
        match view {
            AdminView::Dashboard => self.dashboard,
            AdminView::Blogs => self.blogs,
        }
    }

    pub fn is_empty(self) -> bool {
        !self.dashboard && !self.blogs
    }

    /// Render back into the form field value accepted by [`DisplayedViews::parse`].
    pub fn field_value(self) -> String {
        [AdminView::Dashboard, AdminView::Blogs]
            .into_iter()
            .filter(|view| self.contains(*view))
            .map(AdminView::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }
}
