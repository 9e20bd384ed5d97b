use axum::{
    extract::State,
    http::{
        HeaderValue, StatusCode,
        header::{CACHE_CONTROL, CONTENT_DISPOSITION, CONTENT_TYPE},
    },
    response::{IntoResponse, Response},
};
use axum_extra::extract::Multipart;
use tracing::{error, warn};

use crate::application::{
    admin::{
        Confirmation, DisplayedViews,
        transfer::{ImportError, ImportOutcome},
    },
    error::HttpError,
    stream::StreamBuilder,
};

use super::{
    AdminState,
    shared::{CONFIRMED_FIELD, VIEWS_FIELD, mutation_response, toast_response},
};

const SOURCE_BASE: &str = "infra::http::admin_transfer";
const FILE_FIELD: &str = "file";

pub(super) async fn admin_export(State(state): State<AdminState>) -> Response {
    let file = match state.transfer.export().await {
        Ok(file) => file,
        Err(err) => {
            return HttpError::from_error(
                SOURCE_BASE,
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to export blog data",
                &err,
            )
            .into_response();
        }
    };

    let disposition = match HeaderValue::from_str(&format!(
        "attachment; filename=\"{}\"",
        file.file_name
    )) {
        Ok(value) => value,
        Err(err) => {
            return HttpError::from_error(
                SOURCE_BASE,
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to export blog data",
                &err,
            )
            .into_response();
        }
    };

    (
        [
            (
                CONTENT_TYPE,
                HeaderValue::from_static("application/json; charset=utf-8"),
            ),
            (CACHE_CONTROL, HeaderValue::from_static("no-store")),
            (CONTENT_DISPOSITION, disposition),
        ],
        file.contents,
    )
        .into_response()
}

/// The parts of an import submission that were present.
#[derive(Debug, Default)]
struct ImportPayload {
    contents: Option<Vec<u8>>,
    confirmed: Option<String>,
    views: Option<String>,
}

async fn read_import_payload(multipart: &mut Multipart) -> Result<ImportPayload, HttpError> {
    let mut payload = ImportPayload::default();
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(err) => {
                let status = err.status();
                return Err(HttpError::new(
                    SOURCE_BASE,
                    status,
                    "Invalid import payload",
                    err.body_text(),
                ));
            }
        };

        let name = field.name().map(str::to_string);
        let value = field.bytes().await.map_err(|err| {
            HttpError::new(
                SOURCE_BASE,
                err.status(),
                "Invalid import payload",
                err.body_text(),
            )
        })?;

        match name.as_deref() {
            Some(FILE_FIELD) => payload.contents = Some(value.to_vec()),
            Some(CONFIRMED_FIELD) => {
                payload.confirmed = Some(String::from_utf8_lossy(&value).into_owned());
            }
            Some(VIEWS_FIELD) => payload.views = Some(String::from_utf8_lossy(&value).into_owned()),
            _ => {}
        }
    }
    Ok(payload)
}

pub(super) async fn admin_import(State(state): State<AdminState>, mut multipart: Multipart) -> Response {
    let payload = match read_import_payload(&mut multipart).await {
        Ok(payload) => payload,
        Err(err) => return err.into_response(),
    };

    let views = DisplayedViews::parse(payload.views.as_deref());
    let confirmation = Confirmation::from_flag(payload.confirmed.as_deref());

    let Some(bytes) = payload.contents.filter(|bytes| !bytes.is_empty()) else {
        return toast_response(&[state.error("Please choose a file to import")]);
    };

    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            warn!(target = "snsp::http::admin::transfer", error = %err, "import file is not UTF-8");
            return toast_response(&[state.error("Error reading file")]);
        }
    };

    match state.transfer.import(&text, confirmation).await {
        Ok(ImportOutcome::Imported { .. }) => {
            mutation_response(
                &state,
                StreamBuilder::new(),
                views,
                &[state.success("Data imported successfully!")],
            )
            .await
        }
        Ok(ImportOutcome::Declined) => StreamBuilder::new().into_response(),
        Err(err @ ImportError::Storage(_)) => {
            error!(
                target = "snsp::http::admin::transfer",
                error = %err,
                "import could not be saved"
            );
            toast_response(&[state.error(err.user_message())])
        }
        Err(err) => toast_response(&[state.error(err.user_message())]),
    }
}

/// Confirmation toast fired alongside the export download link.
pub(super) async fn admin_export_notify(State(state): State<AdminState>) -> Response {
    toast_response(&[state.success("Data exported successfully!")])
}
