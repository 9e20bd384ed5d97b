//! The admin session flag: a cookie set on sign-in and checked on every admin page.

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use tracing::info;

use super::AdminState;
use crate::application::error::HttpError;
use crate::presentation::{admin::views as admin_views, views::render_template_response};

pub const SESSION_COOKIE: &str = "snsp_admin_session";
const SESSION_VALUE: &str = "1";

pub(super) fn has_session(jar: &CookieJar) -> bool {
    jar.get(SESSION_COOKIE)
        .is_some_and(|cookie| cookie.value() == SESSION_VALUE)
}

pub(super) async fn admin_login_page(State(state): State<AdminState>, jar: CookieJar) -> Response {
    if has_session(&jar) {
        return Redirect::to("/").into_response();
    }

    let brand_title = match state.settings.load().await {
        Ok(settings) => settings.brand_title,
        Err(err) => {
            return HttpError::from_error(
                "infra::http::admin::admin_login_page",
                StatusCode::SERVICE_UNAVAILABLE,
                "Failed to load site settings",
                &err,
            )
            .into_response();
        }
    };

    let view = admin_views::AdminLoginView::new(brand_title);
    render_template_response(admin_views::AdminLoginTemplate { view }, StatusCode::OK)
}

pub(super) async fn admin_login(jar: CookieJar) -> (CookieJar, Redirect) {
    info!(target = "snsp::http::admin::session", "admin signed in");
    let cookie = Cookie::build((SESSION_COOKIE, SESSION_VALUE))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax);
    (jar.add(cookie), Redirect::to("/"))
}

pub(super) async fn admin_logout(jar: CookieJar) -> (CookieJar, Redirect) {
    info!(target = "snsp::http::admin::session", "admin signed out");
    (
        jar.remove(Cookie::build(SESSION_COOKIE).path("/")),
        Redirect::to("/login"),
    )
}

/// Send requests without the session flag to the login page.
pub(super) async fn require_session(
    State(state): State<AdminState>,
    jar: CookieJar,
    request: Request<Body>,
    next: Next,
) -> Response {
    if !state.require_session || has_session(&jar) {
        return next.run(request).await;
    }
    Redirect::to("/login").into_response()
}
