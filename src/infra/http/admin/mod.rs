mod blogs;
mod dashboard;
mod selectors;
mod session;
mod settings;
mod shared;
mod state;
mod toasts;
mod transfer;

pub use session::SESSION_COOKIE;
pub use state::AdminState;

use axum::{
    Router,
    http::StatusCode,
    middleware,
    routing::{get, post},
};

use crate::infra::assets;

use super::middleware::{log_responses, set_request_context};

pub fn build_admin_router(state: AdminState) -> Router {
    let protected = Router::new()
        .route("/", get(dashboard::admin_dashboard))
        .route("/blogs", get(blogs::admin_blogs))
        .route("/blogs/new", get(blogs::admin_blog_new))
        .route("/blogs/create", post(blogs::admin_blog_create))
        .route("/blogs/{id}/edit", get(blogs::admin_blog_edit))
        .route("/blogs/{id}/update", post(blogs::admin_blog_update))
        .route("/blogs/{id}/delete", post(blogs::admin_blog_delete))
        .route("/modal/close", post(blogs::admin_modal_close))
        .route(
            "/settings",
            get(settings::admin_settings).post(settings::admin_settings_update),
        )
        .route("/export", get(transfer::admin_export))
        .route("/export/notify", post(transfer::admin_export_notify))
        .route("/import", post(transfer::admin_import))
        .route("/toasts", post(toasts::admin_toast))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            session::require_session,
        ));

    Router::new()
        .route(
            "/login",
            get(session::admin_login_page).post(session::admin_login),
        )
        .route("/logout", post(session::admin_logout))
        .route("/_health", get(|| async { StatusCode::NO_CONTENT }))
        .route("/static/admin/{*path}", get(assets::serve_admin))
        .merge(protected)
        .with_state(state)
        .layer(middleware::from_fn(log_responses))
        .layer(middleware::from_fn(set_request_context))
}
