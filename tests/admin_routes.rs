mod support;

use std::sync::{Arc, Mutex};

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use snsp_site::domain::types::BlogStatus;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{
    Layer, layer,
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use support::{admin_router, body_text, context, get, post_form, send, session_cookie};

#[tokio::test]
async fn pages_without_a_session_redirect_to_login() {
    let ctx = context().await;
    let router = admin_router(&ctx);

    let request = Request::get("/blogs").body(Body::empty()).unwrap();
    let response = send(&router, request).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/login");
}

#[tokio::test]
async fn health_and_login_are_open() {
    let ctx = context().await;
    let router = admin_router(&ctx);

    let health = send(&router, Request::get("/_health").body(Body::empty()).unwrap()).await;
    assert_eq!(health.status(), StatusCode::NO_CONTENT);

    let login = send(&router, Request::get("/login").body(Body::empty()).unwrap()).await;
    assert_eq!(login.status(), StatusCode::OK);
    assert!(body_text(login).await.contains("SN.SP Travel Admin"));
}

#[tokio::test]
async fn signing_in_sets_the_session_cookie() {
    let ctx = context().await;
    let router = admin_router(&ctx);

    let response = send(&router, Request::post("/login").body(Body::empty()).unwrap()).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
    assert!(cookie.starts_with(&session_cookie()), "{cookie}");
    assert!(cookie.contains("HttpOnly"));
}

#[tokio::test]
async fn dashboard_shows_seed_counts_and_recent_posts() {
    let ctx = context().await;
    let router = admin_router(&ctx);

    let response = send(&router, get("/")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("data-admin-panel=\"dashboard\""));
    assert!(html.contains("Ultimate Guide to Hotel Bookings"));
    assert!(html.contains("Export Data"));
}

#[tokio::test]
async fn recent_posts_can_be_edited_and_deleted_from_the_dashboard() {
    let ctx = context().await;
    let router = admin_router(&ctx);

    let html = body_text(send(&router, get("/")).await).await;
    assert_eq!(html.matches("title=\"Edit\"").count(), 3);
    assert_eq!(html.matches("title=\"Delete\"").count(), 3);
    assert!(html.contains("?views=dashboard"));

    let modal = send(&router, get("/blogs/1/edit?views=dashboard")).await;
    assert!(body_text(modal).await.contains("name=\"views\" value=\"dashboard\""));

    let deleted = send(
        &router,
        post_form("/blogs/1/delete", "confirmed=true&views=dashboard"),
    )
    .await;
    let events = body_text(deleted).await;
    assert!(events.contains("Blog post deleted successfully"));
    assert!(events.contains("data-admin-panel=\"dashboard\""));
    assert!(!events.contains("How to Find the Best Flight Deals"));
    assert_eq!(events.matches("title=\"Delete\"").count(), 2);
    assert!(ctx.store.get("1").await.is_none());
}

#[tokio::test]
async fn create_with_missing_fields_changes_nothing() {
    let ctx = context().await;
    let router = admin_router(&ctx);

    let response = send(
        &router,
        post_form(
            "/blogs/create",
            "title=&excerpt=Short&content=Body&category=Travel%20Tips&status=published",
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Please fill in all required fields"));
    assert_eq!(ctx.store.len().await, 3);
}

#[tokio::test]
async fn create_then_delete_round_trips_the_collection() {
    let ctx = context().await;
    let router = admin_router(&ctx);

    let created = send(
        &router,
        post_form(
            "/blogs/create",
            "title=Test&excerpt=Short&content=Body&category=Travel%20Tips&status=draft&image=&views=blogs",
        ),
    )
    .await;
    let events = body_text(created).await;
    assert!(events.contains("Blog post created successfully!"));
    assert!(events.contains("data-admin-panel=\"blogs\""));
    assert!(events.contains("data-admin-panel=\"blog-form\""));

    let posts = ctx.store.list().await;
    assert_eq!(posts.len(), 4);
    let post = posts.last().unwrap().clone();
    assert_eq!(post.title, "Test");
    assert_eq!(post.status, BlogStatus::Draft);
    assert_eq!(post.date, "2025-04-02");

    let declined = send(
        &router,
        post_form(&format!("/blogs/{}/delete", post.id), "views=blogs"),
    )
    .await;
    assert_eq!(declined.status(), StatusCode::OK);
    assert_eq!(ctx.store.len().await, 4);

    let deleted = send(
        &router,
        post_form(
            &format!("/blogs/{}/delete", post.id),
            "confirmed=true&views=dashboard",
        ),
    )
    .await;
    let events = body_text(deleted).await;
    assert!(events.contains("Blog post deleted successfully"));
    assert!(events.contains("data-admin-panel=\"dashboard\""));
    assert!(!events.contains("data-admin-panel=\"blogs\""));
    assert_eq!(ctx.store.len().await, 3);
}

#[tokio::test]
async fn deleting_an_unknown_post_reports_not_found() {
    let ctx = context().await;
    let router = admin_router(&ctx);

    let response = send(&router, post_form("/blogs/missing/delete", "confirmed=true")).await;
    assert!(body_text(response).await.contains("Blog post not found"));
    assert_eq!(ctx.store.len().await, 3);
}

#[tokio::test]
async fn editing_opens_a_modal_and_updates_keep_the_id() {
    let ctx = context().await;
    let router = admin_router(&ctx);

    let modal = send(&router, get("/blogs/2/edit?views=blogs")).await;
    let events = body_text(modal).await;
    assert!(events.contains("data-admin-modal=\"slot\""));
    assert!(events.contains("Ultimate Guide to Hotel Bookings"));

    let updated = send(
        &router,
        post_form(
            "/blogs/2/update",
            "title=Renamed&excerpt=Still%20short&content=New%20body&category=Destinations&status=draft&views=blogs",
        ),
    )
    .await;
    assert!(body_text(updated).await.contains("Blog post updated successfully!"));

    let post = ctx.store.get("2").await.unwrap();
    assert_eq!(post.title, "Renamed");
    assert_eq!(post.status, BlogStatus::Draft);
    assert_eq!(ctx.store.len().await, 3);
}

#[tokio::test]
async fn export_is_served_as_a_json_attachment() {
    let ctx = context().await;
    let router = admin_router(&ctx);

    let response = send(&router, get("/export")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"snsp-travel-data-2025-04-02.json\""
    );
    assert_eq!(response.headers()[header::CACHE_CONTROL], "no-store");

    let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body["version"], "1.0");
    assert_eq!(body["blogs"].as_array().map(Vec::len), Some(3));
}

fn multipart_import(contents: &str, confirmed: bool) -> Request<Body> {
    const BOUNDARY: &str = "snsp-boundary";
    let mut body = format!(
        "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"data.json\"\r\nContent-Type: application/json\r\n\r\n{contents}\r\n"
    );
    if confirmed {
        body.push_str(&format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"confirmed\"\r\n\r\ntrue\r\n"
        ));
    }
    body.push_str(&format!(
        "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"views\"\r\n\r\ndashboard\r\n--{BOUNDARY}--\r\n"
    ));

    Request::post("/import")
        .header(header::COOKIE, session_cookie())
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn import_replaces_the_collection_once_confirmed() {
    let ctx = context().await;
    let router = admin_router(&ctx);

    let mut posts = ctx.store.list().await;
    posts.truncate(1);
    let document = serde_json::json!({ "blogs": posts }).to_string();

    let declined = send(&router, multipart_import(&document, false)).await;
    assert_eq!(declined.status(), StatusCode::OK);
    assert_eq!(ctx.store.len().await, 3);

    let imported = send(&router, multipart_import(&document, true)).await;
    assert!(body_text(imported).await.contains("Data imported successfully!"));
    assert_eq!(ctx.store.list().await, posts);
}

#[tokio::test]
async fn invalid_import_documents_are_reported() {
    let ctx = context().await;
    let router = admin_router(&ctx);

    let unreadable = send(&router, multipart_import("not json", true)).await;
    assert!(body_text(unreadable).await.contains("Error reading file"));

    let wrong_shape = send(&router, multipart_import(r#"{"posts": []}"#, true)).await;
    assert!(body_text(wrong_shape).await.contains("Invalid data format"));

    assert_eq!(ctx.store.len().await, 3);
}

#[tokio::test]
async fn settings_updates_require_a_brand_title() {
    let ctx = context().await;
    let router = admin_router(&ctx);

    let rejected = send(
        &router,
        post_form("/settings", "brand_title=&tagline=x&contact_email=&contact_phone="),
    )
    .await;
    assert!(body_text(rejected).await.contains("is required"));

    let saved = send(
        &router,
        post_form(
            "/settings",
            "brand_title=Wander%20Co&tagline=Go%20further&contact_email=hi%40wander.co&contact_phone=%2B1%20555%200100",
        ),
    )
    .await;
    assert!(body_text(saved).await.contains("Settings updated successfully!"));

    let settings = ctx.settings.load().await.unwrap();
    assert_eq!(settings.brand_title, "Wander Co");
    assert_eq!(settings.contact_email, "hi@wander.co");
}

#[tokio::test]
async fn toast_endpoint_rejects_unknown_kinds() {
    let ctx = context().await;
    let router = admin_router(&ctx);

    let ok = send(&router, post_form("/toasts", "kind=info&message=Hello")).await;
    assert!(body_text(ok).await.contains("Hello"));

    let bad = send(&router, post_form("/toasts", "kind=fatal&message=Hello")).await;
    assert_eq!(bad.status(), StatusCode::BAD_REQUEST);
}

#[derive(Clone, Default)]
struct EventLevels(Arc<Mutex<Vec<(String, Level)>>>);

impl<S: Subscriber> Layer<S> for EventLevels {
    fn on_event(&self, event: &Event<'_>, _ctx: layer::Context<'_, S>) {
        let metadata = event.metadata();
        self.0
            .lock()
            .unwrap()
            .push((metadata.target().to_string(), *metadata.level()));
    }
}

#[tokio::test]
async fn rejected_imports_are_warnings_not_errors() {
    let levels = EventLevels::default();
    let _guard = tracing_subscriber::registry()
        .with(levels.clone())
        .set_default();

    let ctx = context().await;
    let router = admin_router(&ctx);

    for contents in ["not json", r#"{"posts": []}"#] {
        let response = send(&router, multipart_import(contents, true)).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let events = levels.0.lock().unwrap().clone();
    assert!(
        !events.iter().any(|(_, level)| *level == Level::ERROR),
        "{events:?}"
    );
    let warnings = events
        .iter()
        .filter(|(target, level)| {
            target.ends_with("application::admin::transfer") && *level == Level::WARN
        })
        .count();
    assert_eq!(warnings, 2);
}
