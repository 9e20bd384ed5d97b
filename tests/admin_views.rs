use askama::Template;
use snsp_site::{
    application::admin::DisplayedViews,
    domain::{entities::SiteSettings, posts::seed_posts},
    presentation::admin::views::*,
};

#[test]
fn blogs_panel_renders_one_card_per_post_with_delete_confirmation() {
    let posts = seed_posts();
    let html = AdminBlogsPanelTemplate {
        content: AdminBlogListView::new(&posts),
    }
    .render()
    .unwrap();

    assert!(html.contains("<section class=\"panel\" data-admin-panel=\"blogs\">"));
    assert_eq!(html.matches("class=\"blog-card\"").count(), posts.len());
    assert!(html.contains("badge--draft"));
    assert!(html.contains("Are you sure you want to delete this blog post?"));
    assert!(html.contains("name=\"confirmed\" value=\"true\""));
}

#[test]
fn empty_blog_list_points_at_the_add_form() {
    let html = AdminBlogsPanelTemplate {
        content: AdminBlogListView::new(&[]),
    }
    .render()
    .unwrap();

    assert!(!html.contains("class=\"blog-card\""));
    assert!(html.contains("Add the first one."));
}

#[test]
fn edit_form_is_prefilled_and_remembers_displayed_views() {
    let post = &seed_posts()[2];
    let html = AdminBlogEditModalTemplate {
        content: AdminBlogEditModalView::new(post, DisplayedViews::parse(Some("blogs,dashboard"))),
    }
    .render()
    .unwrap();

    assert!(html.contains(&format!("action=\"/blogs/{}/update\"", post.id)));
    assert!(html.contains("Visa Application Success Stories"));
    assert!(html.contains("name=\"views\" value=\"dashboard,blogs\""));
    assert!(html.contains("value=\"draft\" checked"));
    assert!(!html.contains("value=\"published\" checked"));
}

#[test]
fn create_form_defaults_to_published_with_no_views() {
    let html = AdminBlogFormPanelTemplate {
        content: AdminBlogFormView::create(),
    }
    .render()
    .unwrap();

    assert!(html.contains("data-admin-panel=\"blog-form\""));
    assert!(html.contains("value=\"published\" checked"));
    assert!(html.contains("name=\"views\" value=\"\""));
}

#[test]
fn settings_panel_shows_current_values() {
    let settings = SiteSettings::default();
    let html = AdminSettingsPanelTemplate {
        content: AdminSettingsView::new(&settings),
    }
    .render()
    .unwrap();

    assert!(html.contains("data-admin-panel=\"settings\""));
    assert!(html.contains(&format!("value=\"{}\"", settings.contact_email)));
}

#[test]
fn toast_stack_carries_ttl_per_toast() {
    let html = AdminToastStackTemplate {
        toasts: vec![AdminToastItem {
            id: "t1".into(),
            kind: "success",
            icon: "fa-check-circle",
            text: "Saved".into(),
            ttl_ms: 3000,
        }],
    }
    .render()
    .unwrap();

    assert!(html.contains("data-admin-toast=\"stack\""));
    assert!(html.contains("toast--success"));
    assert!(html.contains("data-toast-ttl=\"3000\""));
    assert!(html.contains("Saved"));
}
