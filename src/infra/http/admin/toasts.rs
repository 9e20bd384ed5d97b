use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::application::error::HttpError;

use super::{
    AdminState,
    shared::{ToastKind, toast_response},
};

#[derive(Debug, Deserialize)]
pub(super) struct AdminToastForm {
    kind: String,
    message: String,
}

/// Show an arbitrary notification, used by client-side checks such as file pickers.
pub(super) async fn admin_toast(
    State(state): State<AdminState>,
    Form(form): Form<AdminToastForm>,
) -> Response {
    let Some(kind) = ToastKind::parse(&form.kind) else {
        return HttpError::new(
            "infra::http::admin_toasts",
            StatusCode::BAD_REQUEST,
            "Invalid toast kind",
            format!("Unsupported toast kind `{}`", form.kind),
        )
        .into_response();
    };

    toast_response(&[state.toast(kind, form.message)])
}
