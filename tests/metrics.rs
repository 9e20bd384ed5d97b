use std::sync::Arc;

use metrics_util::debugging::{DebugValue, DebuggingRecorder};
use snsp_site::{
    application::{
        admin::{Confirmation, blogs::BlogForm},
        clock::{Clock, FixedClock},
        context::{AppContext, ContextOptions},
        repos::KeyValueStore,
    },
    domain::contact::ContactSubmission,
    infra::kv::MemoryKeyValueStore,
};
use time::macros::datetime;

fn counter(
    entries: &[(
        metrics_util::CompositeKey,
        Option<metrics::Unit>,
        Option<metrics::SharedString>,
        DebugValue,
    )],
    name: &str,
    label: Option<(&str, &str)>,
) -> u64 {
    entries
        .iter()
        .filter(|(key, _, _, _)| key.key().name() == name)
        .filter(|(key, _, _, _)| match label {
            Some((label_key, label_value)) => key
                .key()
                .labels()
                .any(|label| label.key() == label_key && label.value() == label_value),
            None => true,
        })
        .map(|(_, _, _, value)| match value {
            DebugValue::Counter(count) => *count,
            _ => 0,
        })
        .sum()
}

#[tokio::test]
async fn site_operations_emit_counters() {
    let recorder = DebuggingRecorder::new();
    let snapshotter = recorder.snapshotter();
    recorder
        .install()
        .expect("debug metrics recorder should install in this test process");

    let kv = Arc::new(MemoryKeyValueStore::new());
    kv.set("snsp_blogs", "{not a list").await.unwrap();
    let clock: Arc<dyn Clock> = Arc::new(FixedClock::new(datetime!(2025-04-02 08:15:30 UTC)));
    let ctx = AppContext::build(
        kv,
        clock,
        ContextOptions {
            blogs_key: "snsp_blogs".to_string(),
            settings_key: "snsp_settings".to_string(),
            public_site_url: "http://localhost:3000/".to_string(),
            toast_ttl_ms: 3000,
        },
    )
    .await
    .expect("undecodable posts fall back to seed data");
    assert_eq!(ctx.store.len().await, 3);

    let post = ctx
        .blogs
        .create(BlogForm {
            title: "Counted".into(),
            excerpt: "Short".into(),
            content: "Body".into(),
            category: "Travel Tips".into(),
            status: "published".into(),
            image: String::new(),
        })
        .await
        .unwrap();
    ctx.blogs
        .delete(&post.id, Confirmation::Accepted)
        .await
        .unwrap();

    let _ = ctx.transfer.import("nope", Confirmation::Accepted).await;
    let _ = ctx.transfer.import(r#"{"blogs": []}"#, Confirmation::Declined).await;
    ctx.transfer
        .import(r#"{"blogs": []}"#, Confirmation::Accepted)
        .await
        .unwrap();

    let _ = ctx.site.submit_contact(&ContactSubmission::default());
    ctx.site
        .submit_contact(&ContactSubmission {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            phone: "+44 20 7946 0000".into(),
            service: "visa".into(),
            message: "Schengen visa help".into(),
        })
        .unwrap();

    let entries = snapshotter.snapshot().into_vec();

    assert_eq!(counter(&entries, "snsp_blog_store_fallback_total", None), 1);
    assert_eq!(counter(&entries, "snsp_blog_mutations_total", Some(("op", "add"))), 1);
    assert_eq!(counter(&entries, "snsp_blog_mutations_total", Some(("op", "delete"))), 1);
    assert_eq!(counter(&entries, "snsp_blog_mutations_total", Some(("op", "replace"))), 1);
    for outcome in ["rejected", "declined", "imported"] {
        assert_eq!(
            counter(&entries, "snsp_import_total", Some(("outcome", outcome))),
            1,
            "{outcome}"
        );
    }
    for outcome in ["invalid", "accepted"] {
        assert_eq!(
            counter(&entries, "snsp_contact_submissions_total", Some(("outcome", outcome))),
            1,
            "{outcome}"
        );
    }
    assert!(ctx.store.is_empty().await);
}
