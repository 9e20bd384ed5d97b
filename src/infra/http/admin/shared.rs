use askama::{Error as AskamaError, Template};
use axum::response::{IntoResponse, Response};
use std::time::Duration;
use uuid::Uuid;

use super::AdminState;
use super::selectors::{BLOGS_PANEL, DASHBOARD_PANEL, TOAST_STACK};
use crate::{
    application::{
        admin::{AdminView, DisplayedViews},
        error::HttpError,
        stream::StreamBuilder,
    },
    presentation::{admin::views as admin_views, views::TemplateRenderError},
};

/// Field names shared by every mutating admin form.
pub(super) const VIEWS_FIELD: &str = "views";
pub(super) const CONFIRMED_FIELD: &str = "confirmed";

#[derive(Clone, Debug)]
pub(super) struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub text: String,
    pub ttl: Duration,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastKind {
    pub(super) fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "success" => Some(ToastKind::Success),
            "error" => Some(ToastKind::Error),
            "warning" => Some(ToastKind::Warning),
            "info" => Some(ToastKind::Info),
            _ => None,
        }
    }

    fn as_variant(self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Warning => "warning",
            ToastKind::Info => "info",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            ToastKind::Success => "fa-check-circle",
            ToastKind::Error => "fa-exclamation-circle",
            ToastKind::Warning => "fa-exclamation-triangle",
            ToastKind::Info => "fa-info-circle",
        }
    }
}

impl Toast {
    pub fn new(kind: ToastKind, text: impl Into<String>, ttl: Duration) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            text: text.into(),
            ttl,
        }
    }
}

impl AdminState {
    pub(super) fn toast(&self, kind: ToastKind, text: impl Into<String>) -> Toast {
        Toast::new(kind, text, self.toast_ttl)
    }

    pub(super) fn success(&self, text: impl Into<String>) -> Toast {
        self.toast(ToastKind::Success, text)
    }

    pub(super) fn error(&self, text: impl Into<String>) -> Toast {
        self.toast(ToastKind::Error, text)
    }
}

pub(super) fn push_toasts(stream: &mut StreamBuilder, toasts: &[Toast]) -> Result<(), HttpError> {
    let view_items = toasts
        .iter()
        .map(|toast| admin_views::AdminToastItem {
            id: toast.id.to_string(),
            kind: toast.kind.as_variant(),
            icon: toast.kind.icon(),
            text: toast.text.clone(),
            ttl_ms: u64::try_from(toast.ttl.as_millis()).unwrap_or(u64::MAX),
        })
        .collect::<Vec<_>>();

    let html = render_fragment(
        admin_views::AdminToastStackTemplate { toasts: view_items },
        "infra::http::admin::push_toasts",
    )?;
    stream.replace(TOAST_STACK, html);
    Ok(())
}

/// A response carrying only toasts.
pub(super) fn toast_response(toasts: &[Toast]) -> Response {
    let mut stream = StreamBuilder::new();
    if let Err(err) = push_toasts(&mut stream, toasts) {
        return err.into_response();
    }
    stream.into_response()
}

/// Re-render every blog-derived panel the operator currently has on screen.
pub(super) async fn push_displayed_views(
    stream: &mut StreamBuilder,
    state: &AdminState,
    views: DisplayedViews,
) -> Result<(), HttpError> {
    if views.contains(AdminView::Dashboard) {
        let content = state.dashboard.overview().await;
        let html = render_fragment(
            admin_views::AdminDashboardPanelTemplate { content },
            "infra::http::admin::push_displayed_views",
        )?;
        stream.replace(DASHBOARD_PANEL, html);
    }

    if views.contains(AdminView::Blogs) {
        let posts = state.blogs.list().await;
        let content = admin_views::AdminBlogListView::new(&posts);
        let html = render_fragment(
            admin_views::AdminBlogsPanelTemplate { content },
            "infra::http::admin::push_displayed_views",
        )?;
        stream.replace(BLOGS_PANEL, html);
    }

    Ok(())
}

/// Toasts plus refreshed panels, the standard reply to a mutation.
pub(super) async fn mutation_response(
    state: &AdminState,
    mut stream: StreamBuilder,
    views: DisplayedViews,
    toasts: &[Toast],
) -> Response {
    if let Err(err) = push_displayed_views(&mut stream, state, views).await {
        return err.into_response();
    }
    if let Err(err) = push_toasts(&mut stream, toasts) {
        return err.into_response();
    }
    stream.into_response()
}

pub(super) fn render_fragment<T: Template>(
    template: T,
    source: &'static str,
) -> Result<String, HttpError> {
    template
        .render()
        .map_err(|err| template_render_http_error(source, "Template rendering failed", err))
}

pub(super) fn template_render_http_error(
    source: &'static str,
    message: &'static str,
    err: AskamaError,
) -> HttpError {
    HttpError::from(TemplateRenderError::new(source, message, err))
}
