#![allow(dead_code)]

use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use http_body_util::BodyExt;
use snsp_site::{
    application::{
        clock::{Clock, FixedClock},
        context::{AppContext, ContextOptions},
    },
    infra::{
        http::{AdminState, HttpState, SESSION_COOKIE, build_admin_router, build_router},
        kv::MemoryKeyValueStore,
    },
};
use time::macros::datetime;
use tower::ServiceExt;

pub async fn context() -> AppContext {
    let clock: Arc<dyn Clock> = Arc::new(FixedClock::new(datetime!(2025-04-02 08:15:30 UTC)));
    AppContext::build(
        Arc::new(MemoryKeyValueStore::new()),
        clock,
        ContextOptions {
            blogs_key: "snsp_blogs".to_string(),
            settings_key: "snsp_settings".to_string(),
            public_site_url: "http://localhost:3000/".to_string(),
            toast_ttl_ms: 3000,
        },
    )
    .await
    .expect("context builds over an empty store")
}

pub fn admin_router(context: &AppContext) -> Router {
    build_admin_router(AdminState::new(context, Duration::from_millis(3000), true))
}

pub fn public_router(context: &AppContext) -> Router {
    build_router(HttpState::new(context))
}

pub fn session_cookie() -> String {
    format!("{SESSION_COOKIE}=1")
}

pub fn get(uri: &str) -> Request<Body> {
    Request::get(uri)
        .header(header::COOKIE, session_cookie())
        .body(Body::empty())
        .expect("request builds")
}

pub fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::post(uri)
        .header(header::COOKIE, session_cookie())
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

pub async fn send(router: &Router, request: Request<Body>) -> Response<Body> {
    router
        .clone()
        .oneshot(request)
        .await
        .expect("router is infallible")
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collects")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("body is utf-8")
}
