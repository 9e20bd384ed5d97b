use axum::{
    extract::{Form, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::{error, warn};

use crate::{
    application::{
        admin::{
            Confirmation, DisplayedViews,
            blogs::{AdminBlogError, BlogForm, DeleteOutcome, NOT_FOUND_MESSAGE},
        },
        stream::StreamBuilder,
    },
    presentation::{admin::views as admin_views, views::render_template_response},
};

use super::{
    AdminState,
    selectors::{BLOG_FORM_PANEL, MODAL_SLOT},
    shared::{Toast, mutation_response, push_toasts, render_fragment, toast_response},
};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(super) struct AdminBlogForm {
    title: String,
    excerpt: String,
    content: String,
    category: String,
    status: String,
    image: String,
    views: Option<String>,
}

impl AdminBlogForm {
    fn into_parts(self) -> (BlogForm, DisplayedViews) {
        let views = DisplayedViews::parse(self.views.as_deref());
        let form = BlogForm {
            title: self.title,
            excerpt: self.excerpt,
            content: self.content,
            category: self.category,
            status: self.status,
            image: self.image,
        };
        (form, views)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(super) struct AdminViewsQuery {
    views: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(super) struct AdminBlogDeleteForm {
    confirmed: Option<String>,
    views: Option<String>,
}

pub(super) async fn admin_blogs(State(state): State<AdminState>) -> Response {
    let chrome = match state.chrome.load("/blogs").await {
        Ok(chrome) => chrome,
        Err(err) => return err.into_response(),
    };

    let posts = state.blogs.list().await;
    let content = admin_views::AdminBlogListView::new(&posts);
    let view = admin_views::AdminLayout::new(chrome, content);
    render_template_response(admin_views::AdminBlogsTemplate { view }, StatusCode::OK)
}

pub(super) async fn admin_blog_new(State(state): State<AdminState>) -> Response {
    let chrome = match state.chrome.load("/blogs/new").await {
        Ok(chrome) => chrome,
        Err(err) => return err.into_response(),
    };

    let view = admin_views::AdminLayout::new(chrome, admin_views::AdminBlogFormView::create());
    render_template_response(admin_views::AdminBlogNewTemplate { view }, StatusCode::OK)
}

pub(super) async fn admin_blog_create(
    State(state): State<AdminState>,
    Form(form): Form<AdminBlogForm>,
) -> Response {
    let (form, views) = form.into_parts();

    let post = match state.blogs.create(form).await {
        Ok(post) => post,
        Err(err) => return blog_error_response(&state, err, "Error creating blog post"),
    };

    let form_html = match render_fragment(
        admin_views::AdminBlogFormPanelTemplate {
            content: admin_views::AdminBlogFormView::create(),
        },
        "infra::http::admin_blog_create",
    ) {
        Ok(html) => html,
        Err(err) => return err.into_response(),
    };

    let mut stream = StreamBuilder::new();
    stream.replace(BLOG_FORM_PANEL, form_html);

    tracing::debug!(target = "snsp::http::admin::blogs", id = %post.id, "rendered create response");
    mutation_response(
        &state,
        stream,
        views,
        &[state.success("Blog post created successfully!")],
    )
    .await
}

pub(super) async fn admin_blog_edit(
    State(state): State<AdminState>,
    Path(id): Path<String>,
    Query(query): Query<AdminViewsQuery>,
) -> Response {
    let post = match state.blogs.load(&id).await {
        Ok(post) => post,
        Err(err) => return blog_error_response(&state, err, "Error loading blog post"),
    };

    let content = admin_views::AdminBlogEditModalView::new(
        &post,
        DisplayedViews::parse(query.views.as_deref()),
    );
    let html = match render_fragment(
        admin_views::AdminBlogEditModalTemplate { content },
        "infra::http::admin_blog_edit",
    ) {
        Ok(html) => html,
        Err(err) => return err.into_response(),
    };

    let mut stream = StreamBuilder::new();
    stream.replace(MODAL_SLOT, html);
    stream.into_response()
}

pub(super) async fn admin_blog_update(
    State(state): State<AdminState>,
    Path(id): Path<String>,
    Form(form): Form<AdminBlogForm>,
) -> Response {
    let (form, views) = form.into_parts();

    let post = match state.blogs.update(&id, form).await {
        Ok(post) => post,
        Err(err) => return blog_error_response(&state, err, "Error updating blog post"),
    };

    let mut stream = StreamBuilder::new();
    if let Err(err) = push_empty_modal(&mut stream) {
        return err.into_response();
    }

    tracing::debug!(target = "snsp::http::admin::blogs", id = %post.id, "rendered update response");
    mutation_response(
        &state,
        stream,
        views,
        &[state.success("Blog post updated successfully!")],
    )
    .await
}

pub(super) async fn admin_blog_delete(
    State(state): State<AdminState>,
    Path(id): Path<String>,
    Form(form): Form<AdminBlogDeleteForm>,
) -> Response {
    let views = DisplayedViews::parse(form.views.as_deref());
    let confirmation = Confirmation::from_flag(form.confirmed.as_deref());

    match state.blogs.delete(&id, confirmation).await {
        Ok(DeleteOutcome::Deleted(_)) => {
            mutation_response(
                &state,
                StreamBuilder::new(),
                views,
                &[state.success("Blog post deleted successfully")],
            )
            .await
        }
        Ok(DeleteOutcome::Declined) => StreamBuilder::new().into_response(),
        Ok(DeleteOutcome::Missing) => {
            warn!(target = "snsp::http::admin::blogs", id = %id, "delete of unknown blog post");
            toast_response(&[state.error(NOT_FOUND_MESSAGE)])
        }
        Err(err) => {
            error!(target = "snsp::http::admin::blogs", id = %id, error = %err, "blog delete failed");
            toast_response(&[state.error("Error deleting blog post")])
        }
    }
}

pub(super) async fn admin_modal_close() -> Response {
    let mut stream = StreamBuilder::new();
    if let Err(err) = push_empty_modal(&mut stream) {
        return err.into_response();
    }
    stream.into_response()
}

fn push_empty_modal(stream: &mut StreamBuilder) -> Result<(), crate::application::error::HttpError> {
    let html = render_fragment(admin_views::AdminModalSlotTemplate, "infra::http::admin_modal")?;
    stream.replace(MODAL_SLOT, html);
    Ok(())
}

/// Validation and lookup failures become an error toast; nothing else on the page changes.
fn blog_error_response(state: &AdminState, err: AdminBlogError, storage_message: &str) -> Response {
    let toast: Toast = match &err {
        AdminBlogError::MissingFields | AdminBlogError::NotFound => {
            warn!(target = "snsp::http::admin::blogs", error = %err, "blog request rejected");
            state.error(err.to_string())
        }
        AdminBlogError::InvalidStatus(_) => {
            warn!(target = "snsp::http::admin::blogs", error = %err, "blog request rejected");
            state.error("Please choose a valid status")
        }
        AdminBlogError::Storage(inner) => {
            error!(target = "snsp::http::admin::blogs", error = %inner, "blog write failed");
            state.error(storage_message.to_string())
        }
    };

    let mut stream = StreamBuilder::new();
    if let Err(err) = push_toasts(&mut stream, &[toast]) {
        return err.into_response();
    }
    stream.into_response()
}
