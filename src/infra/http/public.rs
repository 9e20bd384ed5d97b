use std::sync::Arc;

use axum::{
    Form, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Deserialize;
use tracing::warn;
use uuid::Uuid;

use crate::{
    application::{
        chrome::ChromeService, context::AppContext, error::HttpError, site::SiteService,
        stream::StreamBuilder,
    },
    domain::contact::{ContactSubmission, THANK_YOU_MESSAGE},
    infra::assets,
    presentation::views::{
        BlogIndexTemplate, BlogIndexView, ContactFormView, ContactPanelTemplate,
        ContactResultTemplate, ContactResultView, IndexTemplate, IndexView, LayoutContext,
        PostDetailView, PostTemplate, SiteNoticeTemplate, SiteNoticeView, TemplateRenderError,
        render_not_found_response, render_template_response,
    },
};

use super::{
    DATASTAR_REQUEST_HEADER,
    middleware::{log_responses, set_request_context},
};

/// Published posts shown on the landing page.
const LANDING_POST_LIMIT: usize = 3;
const NOTICE_TTL_MS: u64 = 5000;

const NOTICE_SLOT: &str = "[data-site-notice=\"slot\"]";
const CONTACT_PANEL: &str = "[data-site-panel=\"contact\"]";

#[derive(Clone)]
pub struct HttpState {
    pub site: Arc<SiteService>,
    pub chrome: Arc<ChromeService>,
}

impl HttpState {
    pub fn new(context: &AppContext) -> Self {
        Self {
            site: Arc::new(context.site.clone()),
            chrome: Arc::new(context.site_chrome.clone()),
        }
    }
}

pub fn build_router(state: HttpState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/blog", get(blog_index))
        .route("/blog/{id}", get(post_detail))
        .route("/contact", post(contact))
        .route("/_health", get(|| async { StatusCode::NO_CONTENT }))
        .route("/static/public/{*path}", get(assets::serve_public))
        .fallback(fallback_router)
        .with_state(state)
        .layer(middleware::from_fn(log_responses))
        .layer(middleware::from_fn(set_request_context))
}

async fn index(State(state): State<HttpState>) -> Response {
    let chrome = state.chrome.load("/").await;
    let settings = state.site.settings().await;
    let latest = state.site.latest(LANDING_POST_LIMIT).await;

    let contact = ContactFormView::new(settings.contact_email, settings.contact_phone);
    let content = IndexView::new(settings.tagline, &latest, contact);
    let view = LayoutContext::new(chrome, content);
    render_template_response(IndexTemplate { view }, StatusCode::OK)
}

async fn blog_index(State(state): State<HttpState>) -> Response {
    let chrome = state.chrome.load("/blog").await.with_page_title("Blog");
    let posts = state.site.published().await;
    let view = LayoutContext::new(chrome, BlogIndexView::new(&posts));
    render_template_response(BlogIndexTemplate { view }, StatusCode::OK)
}

async fn post_detail(State(state): State<HttpState>, Path(id): Path<String>) -> Response {
    let chrome = state.chrome.load("/blog").await;

    match state.site.post(&id).await {
        Some(post) => {
            let chrome = chrome.with_page_title(&post.title);
            let view = LayoutContext::new(chrome, PostDetailView::from(&post));
            render_template_response(PostTemplate { view }, StatusCode::OK)
        }
        None => render_not_found_response(chrome),
    }
}

async fn fallback_router(State(state): State<HttpState>) -> Response {
    let chrome = state.chrome.load("").await;
    render_not_found_response(chrome)
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ContactForm {
    name: String,
    email: String,
    phone: String,
    service: String,
    message: String,
}

impl From<ContactForm> for ContactSubmission {
    fn from(form: ContactForm) -> Self {
        Self {
            name: form.name,
            email: form.email,
            phone: form.phone,
            service: form.service,
            message: form.message,
        }
    }
}

async fn contact(
    State(state): State<HttpState>,
    headers: HeaderMap,
    Form(form): Form<ContactForm>,
) -> Response {
    let submission = ContactSubmission::from(form);
    let outcome = state.site.submit_contact(&submission);

    let notice = match &outcome {
        Ok(()) => notice("success", "fa-check-circle", THANK_YOU_MESSAGE),
        Err(err) => {
            warn!(target = "snsp::http::public::contact", error = %err, "contact form rejected");
            notice("error", "fa-exclamation-circle", err.to_string())
        }
    };

    if headers.contains_key(DATASTAR_REQUEST_HEADER) {
        return match contact_stream(&state, notice, outcome.is_ok()).await {
            Ok(stream) => stream.into_response(),
            Err(err) => HttpError::from(err).into_response(),
        };
    }

    let status = if outcome.is_ok() {
        StatusCode::OK
    } else {
        StatusCode::UNPROCESSABLE_ENTITY
    };
    let chrome = state.chrome.load("/#contact").await.with_page_title("Contact");
    let view = LayoutContext::new(
        chrome,
        ContactResultView {
            notice,
            back_href: "/#contact",
        },
    );
    render_template_response(ContactResultTemplate { view }, status)
}

/// Patch the notice slot; a successful submission also resets the form.
async fn contact_stream(
    state: &HttpState,
    notice: SiteNoticeView,
    reset_form: bool,
) -> Result<StreamBuilder, TemplateRenderError> {
    let mut stream = StreamBuilder::new();

    if reset_form {
        let settings = state.site.settings().await;
        let html = askama::Template::render(&ContactPanelTemplate {
            content: ContactFormView::new(settings.contact_email, settings.contact_phone),
        })
        .map_err(|err| {
            TemplateRenderError::new(
                "infra::http::public::contact",
                "Template rendering failed",
                err,
            )
        })?;
        stream.replace(CONTACT_PANEL, html);
    }

    let html = askama::Template::render(&SiteNoticeTemplate { notice }).map_err(|err| {
        TemplateRenderError::new(
            "infra::http::public::contact",
            "Template rendering failed",
            err,
        )
    })?;
    stream.replace(NOTICE_SLOT, html);
    Ok(stream)
}

fn notice(kind: &'static str, icon: &'static str, text: impl Into<String>) -> SiteNoticeView {
    SiteNoticeView {
        id: Uuid::new_v4().to_string(),
        kind,
        icon,
        text: text.into(),
        ttl_ms: NOTICE_TTL_MS,
    }
}
