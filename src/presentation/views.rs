use std::collections::HashSet;

use crate::application::error::{ErrorReport, HttpError};
use crate::domain::{entities::BlogPost, posts::display_date};
use askama::{Error as AskamaError, Template};
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use once_cell::sync::Lazy;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("{public_message}")]
pub struct TemplateRenderError {
    pub(crate) source: &'static str,
    pub(crate) public_message: &'static str,
    #[source]
    pub(crate) error: AskamaError,
}

impl TemplateRenderError {
    pub fn new(source: &'static str, public_message: &'static str, error: AskamaError) -> Self {
        Self {
            source,
            public_message,
            error,
        }
    }
}

impl From<TemplateRenderError> for HttpError {
    fn from(err: TemplateRenderError) -> Self {
        let TemplateRenderError {
            source,
            public_message,
            error,
        } = err;

        HttpError::from_error(
            source,
            StatusCode::INTERNAL_SERVER_ERROR,
            public_message,
            &error,
        )
    }
}

pub fn render_template<T: Template>(template: T) -> Result<Html<String>, HttpError> {
    template.render().map(Html).map_err(|err| {
        TemplateRenderError::new(
            "presentation::views::render_template",
            "Template rendering failed",
            err,
        )
        .into()
    })
}

pub fn render_template_response<T: Template>(template: T, status: StatusCode) -> Response {
    match render_template(template) {
        Ok(html) => (status, html).into_response(),
        Err(err) => err.into_response(),
    }
}

pub fn render_not_found_response(chrome: LayoutChrome) -> Response {
    let content = ErrorPageView::not_found();
    let view = LayoutContext::new(chrome, content);
    let mut response = render_template_response(ErrorTemplate { view }, StatusCode::NOT_FOUND);
    ErrorReport::from_message(
        "presentation::views::render_not_found_response",
        StatusCode::NOT_FOUND,
        "Resource not found",
    )
    .attach(&mut response);
    response
}

/// Tags and attributes post bodies may keep. Scripts, handlers and styles are dropped.
static CONTENT_SANITIZER: Lazy<ammonia::Builder<'static>> = Lazy::new(|| {
    let tags: HashSet<&'static str> = [
        "a", "b", "blockquote", "br", "code", "em", "h1", "h2", "h3", "h4", "h5", "h6", "hr",
        "i", "img", "li", "ol", "p", "pre", "strong", "u", "ul",
    ]
    .into_iter()
    .collect();
    let mut builder = ammonia::Builder::default();
    builder
        .tags(tags)
        .add_tag_attributes("img", &["src", "alt", "title"])
        .add_tag_attributes("a", &["href", "title"])
        .link_rel(Some("noopener noreferrer"));
    builder
});

/// Clean stored post HTML for display on the public site.
pub fn sanitize_content(html: &str) -> String {
    CONTENT_SANITIZER.clean(html).to_string()
}

#[derive(Clone)]
pub struct NavigationView {
    pub entries: Vec<NavigationLinkView>,
}

#[derive(Clone)]
pub struct FooterView {
    pub copy: String,
    pub contact_email: String,
    pub contact_phone: String,
}

#[derive(Clone)]
pub struct BrandView {
    pub title: String,
    pub href: String,
}

#[derive(Clone)]
pub struct NavigationLinkView {
    pub label: String,
    pub href: String,
    pub is_active: bool,
}

#[derive(Clone)]
pub struct PageMetaView {
    pub title: String,
    pub description: String,
}

#[derive(Clone)]
pub struct LayoutChrome {
    pub brand: BrandView,
    pub navigation: NavigationView,
    pub footer: FooterView,
    pub meta: PageMetaView,
}

impl LayoutChrome {
    /// Prefix the document title with a page name.
    pub fn with_page_title(self, page: &str) -> Self {
        let title = format!("{page} · {}", self.meta.title);
        Self {
            meta: PageMetaView { title, ..self.meta },
            ..self
        }
    }
}

#[derive(Clone)]
pub struct LayoutContext<T> {
    pub brand: BrandView,
    pub navigation: NavigationView,
    pub footer: FooterView,
    pub meta: PageMetaView,
    pub asset_version: String,
    pub content: T,
}

impl<T> LayoutContext<T> {
    pub fn new(chrome: LayoutChrome, content: T) -> Self {
        Self {
            brand: chrome.brand,
            navigation: chrome.navigation,
            footer: chrome.footer,
            meta: chrome.meta,
            asset_version: env!("CARGO_PKG_VERSION").to_string(),
            content,
        }
    }
}

#[derive(Clone)]
pub struct PostCard {
    pub href: String,
    pub title: String,
    pub excerpt: String,
    pub category: String,
    pub iso_date: String,
    pub published: String,
    pub image: String,
}

impl From<&BlogPost> for PostCard {
    fn from(post: &BlogPost) -> Self {
        Self {
            href: format!("/blog/{}", post.id),
            title: post.title.clone(),
            excerpt: post.excerpt.clone(),
            category: post.category.clone(),
            iso_date: post.date.clone(),
            published: display_date(&post.date),
            image: post.image.clone(),
        }
    }
}

#[derive(Clone)]
pub struct ServiceCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
}

const SERVICES: &[ServiceCard] = &[
    ServiceCard {
        icon: "fa-plane",
        title: "Flight Booking",
        summary: "Domestic and international fares compared across carriers, with flexible change options.",
    },
    ServiceCard {
        icon: "fa-hotel",
        title: "Hotel Reservations",
        summary: "Hand-picked stays from boutique guesthouses to business hotels at negotiated rates.",
    },
    ServiceCard {
        icon: "fa-passport",
        title: "Visa Assistance",
        summary: "Document checklists, application review and appointment scheduling for major destinations.",
    },
];

/// A select option on the contact form.
#[derive(Clone)]
pub struct ContactServiceOption {
    pub value: &'static str,
    pub label: &'static str,
}

const CONTACT_SERVICES: &[ContactServiceOption] = &[
    ContactServiceOption {
        value: "flight",
        label: "Flight Booking",
    },
    ContactServiceOption {
        value: "hotel",
        label: "Hotel Reservation",
    },
    ContactServiceOption {
        value: "visa",
        label: "Visa Assistance",
    },
    ContactServiceOption {
        value: "other",
        label: "Other",
    },
];

#[derive(Clone)]
pub struct ContactFormView {
    pub action: &'static str,
    pub services: Vec<ContactServiceOption>,
    pub contact_email: String,
    pub contact_phone: String,
}

impl ContactFormView {
    pub fn new(contact_email: impl Into<String>, contact_phone: impl Into<String>) -> Self {
        Self {
            action: "/contact",
            services: CONTACT_SERVICES.to_vec(),
            contact_email: contact_email.into(),
            contact_phone: contact_phone.into(),
        }
    }
}

pub struct IndexView {
    pub tagline: String,
    pub services: Vec<ServiceCard>,
    pub latest: Vec<PostCard>,
    pub contact: ContactFormView,
}

impl IndexView {
    pub fn new(tagline: impl Into<String>, latest: &[BlogPost], contact: ContactFormView) -> Self {
        Self {
            tagline: tagline.into(),
            services: SERVICES.to_vec(),
            latest: latest.iter().map(PostCard::from).collect(),
            contact,
        }
    }

    pub fn has_latest(&self) -> bool {
        !self.latest.is_empty()
    }
}

#[derive(Template)]
#[template(path = "site/index.html")]
pub struct IndexTemplate {
    pub view: LayoutContext<IndexView>,
}

pub struct BlogIndexView {
    pub posts: Vec<PostCard>,
}

impl BlogIndexView {
    pub fn new(posts: &[BlogPost]) -> Self {
        Self {
            posts: posts.iter().map(PostCard::from).collect(),
        }
    }

    pub fn has_posts(&self) -> bool {
        !self.posts.is_empty()
    }
}

#[derive(Template)]
#[template(path = "site/blog.html")]
pub struct BlogIndexTemplate {
    pub view: LayoutContext<BlogIndexView>,
}

pub struct PostDetailView {
    pub title: String,
    pub excerpt: String,
    pub category: String,
    pub iso_date: String,
    pub published: String,
    pub image: String,
    pub content_html: String,
}

impl From<&BlogPost> for PostDetailView {
    fn from(post: &BlogPost) -> Self {
        Self {
            title: post.title.clone(),
            excerpt: post.excerpt.clone(),
            category: post.category.clone(),
            iso_date: post.date.clone(),
            published: display_date(&post.date),
            image: post.image.clone(),
            content_html: sanitize_content(&post.content),
        }
    }
}

#[derive(Template)]
#[template(path = "site/post.html")]
pub struct PostTemplate {
    pub view: LayoutContext<PostDetailView>,
}

#[derive(Template)]
#[template(path = "site/contact_panel.html")]
pub struct ContactPanelTemplate {
    pub content: ContactFormView,
}

#[derive(Clone)]
pub struct SiteNoticeView {
    pub id: String,
    pub kind: &'static str,
    pub icon: &'static str,
    pub text: String,
    pub ttl_ms: u64,
}

#[derive(Template)]
#[template(path = "site/notice.html")]
pub struct SiteNoticeTemplate {
    pub notice: SiteNoticeView,
}

/// Full page shown when the contact form is posted without scripting.
pub struct ContactResultView {
    pub notice: SiteNoticeView,
    pub back_href: &'static str,
}

#[derive(Template)]
#[template(path = "site/contact_result.html")]
pub struct ContactResultTemplate {
    pub view: LayoutContext<ContactResultView>,
}

pub struct ErrorPageView {
    pub title: String,
    pub message: String,
    pub primary_action: Option<ErrorAction>,
}

impl ErrorPageView {
    pub fn not_found() -> Self {
        Self {
            title: "Page Not Found".to_string(),
            message: "The page you requested does not exist. Try returning to the homepage to continue exploring.".to_string(),
            primary_action: Some(ErrorAction::home()),
        }
    }
}

pub struct ErrorAction {
    pub href: String,
    pub label: String,
}

impl ErrorAction {
    pub fn home() -> Self {
        Self {
            href: "/".to_string(),
            label: "Back to home".to_string(),
        }
    }
}

#[derive(Template)]
#[template(path = "site/error.html")]
pub struct ErrorTemplate {
    pub view: LayoutContext<ErrorPageView>,
}
