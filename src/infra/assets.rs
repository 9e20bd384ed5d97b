//! Embedded static asset serving.

use axum::{
    body::Body,
    extract::Path,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use include_dir::{Dir, include_dir};
use mime_guess::Mime;

use crate::application::error::ErrorReport;

static STATIC_PUBLIC_ASSETS: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/static/public");
static STATIC_ADMIN_ASSETS: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/static/admin");

pub async fn serve_public(path: Option<Path<String>>) -> Response {
    serve_static(&STATIC_PUBLIC_ASSETS, path, "infra::assets::serve_public")
}

pub async fn serve_admin(path: Option<Path<String>>) -> Response {
    serve_static(&STATIC_ADMIN_ASSETS, path, "infra::assets::serve_admin")
}

fn serve_static(
    bundle: &'static Dir<'static>,
    path: Option<Path<String>>,
    source: &'static str,
) -> Response {
    let requested = path.map(|Path(value)| value).unwrap_or_default();
    match resolve_asset(bundle, &requested) {
        Some((contents, mime)) => build_response(Bytes::from_static(contents), mime),
        None => {
            let mut response = StatusCode::NOT_FOUND.into_response();
            ErrorReport::from_message(
                source,
                StatusCode::NOT_FOUND,
                format!("Static asset `{requested}` not found"),
            )
            .attach(&mut response);
            response
        }
    }
}

fn resolve_asset(bundle: &'static Dir<'static>, requested: &str) -> Option<(&'static [u8], Mime)> {
    let candidate = requested.trim_start_matches('/');

    // No directory listings, no traversal.
    if candidate.is_empty() || candidate.ends_with('/') || candidate.contains("..") {
        return None;
    }

    let file = bundle.get_file(candidate)?;
    let mime = mime_guess::from_path(candidate).first_or_octet_stream();
    Some((file.contents(), mime))
}

fn build_response(bytes: Bytes, mime: Mime) -> Response {
    let len = bytes.len();
    let mut response = Response::new(Body::from(bytes));

    let headers = response.headers_mut();
    if let Ok(value) = HeaderValue::from_str(mime.as_ref()) {
        headers.insert(header::CONTENT_TYPE, value);
    }
    if let Ok(value) = HeaderValue::from_str(&len.to_string()) {
        headers.insert(header::CONTENT_LENGTH, value);
    }
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static("public, max-age=3600"),
    );

    response
}
