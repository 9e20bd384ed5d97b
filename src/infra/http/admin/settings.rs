use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::{error, warn};

use crate::application::admin::settings::{AdminSettingsError, UpdateSettingsCommand};
use crate::application::error::HttpError;
use crate::application::stream::StreamBuilder;
use crate::presentation::{admin::views as admin_views, views::render_template_response};

use super::{
    AdminState,
    selectors::SETTINGS_PANEL,
    shared::{push_toasts, render_fragment, toast_response},
};

const SOURCE_BASE: &str = "infra::http::admin_settings";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(super) struct AdminSettingsForm {
    brand_title: String,
    tagline: String,
    contact_email: String,
    contact_phone: String,
}

impl From<AdminSettingsForm> for UpdateSettingsCommand {
    fn from(form: AdminSettingsForm) -> Self {
        Self {
            brand_title: form.brand_title,
            tagline: form.tagline,
            contact_email: form.contact_email,
            contact_phone: form.contact_phone,
        }
    }
}

pub(super) async fn admin_settings(State(state): State<AdminState>) -> Response {
    let chrome = match state.chrome.load("/settings").await {
        Ok(chrome) => chrome,
        Err(err) => return err.into_response(),
    };

    let settings = match state.settings.load().await {
        Ok(settings) => settings,
        Err(err) => return admin_settings_error(SOURCE_BASE, &err).into_response(),
    };

    let content = admin_views::AdminSettingsView::new(&settings);
    let view = admin_views::AdminLayout::new(chrome, content);
    render_template_response(admin_views::AdminSettingsTemplate { view }, StatusCode::OK)
}

pub(super) async fn admin_settings_update(
    State(state): State<AdminState>,
    Form(form): Form<AdminSettingsForm>,
) -> Response {
    let updated = match state.settings.update(form.into()).await {
        Ok(updated) => updated,
        Err(AdminSettingsError::ConstraintViolation(field)) => {
            warn!(target = "snsp::http::admin::settings", field, "settings update rejected");
            return toast_response(&[state.error(format!("{field} is required"))]);
        }
        Err(AdminSettingsError::Storage(err)) => {
            error!(target = "snsp::http::admin::settings", error = %err, "settings update failed");
            return toast_response(&[state.error("Error updating settings")]);
        }
    };

    let html = match render_fragment(
        admin_views::AdminSettingsPanelTemplate {
            content: admin_views::AdminSettingsView::new(&updated),
        },
        "infra::http::admin_settings_update",
    ) {
        Ok(html) => html,
        Err(err) => return err.into_response(),
    };

    let mut stream = StreamBuilder::new();
    stream.replace(SETTINGS_PANEL, html);
    if let Err(err) = push_toasts(&mut stream, &[state.success("Settings updated successfully!")]) {
        return err.into_response();
    }
    stream.into_response()
}

fn admin_settings_error(source: &'static str, err: &AdminSettingsError) -> HttpError {
    match err {
        AdminSettingsError::Storage(inner) => HttpError::storage(source, inner),
        AdminSettingsError::ConstraintViolation(_) => HttpError::from_error(
            source,
            StatusCode::BAD_REQUEST,
            "Invalid site settings",
            err,
        ),
    }
}
