use axum::{extract::State, http::StatusCode, response::Response};

use crate::{
    application::error::HttpError,
    presentation::{
        admin::views::{AdminDashboardTemplate, AdminLayout},
        views::render_template_response,
    },
};

use super::AdminState;

/// Post counts and the most recent posts.
pub(super) async fn admin_dashboard(
    State(state): State<AdminState>,
) -> Result<Response, HttpError> {
    let chrome = state.chrome.load("/").await?;
    let view = AdminLayout::new(chrome, state.dashboard.overview().await);
    Ok(render_template_response(
        AdminDashboardTemplate { view },
        StatusCode::OK,
    ))
}
