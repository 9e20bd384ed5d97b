use crate::application::admin::{AdminBlogService, Confirmation};
use crate::presentation::admin::views::{AdminBlogRowView, AdminDashboardView, AdminStatView};

const RECENT_LIMIT: usize = 5;

#[derive(Clone)]
pub struct AdminDashboardService {
    blogs: AdminBlogService,
}

impl AdminDashboardService {
    pub fn new(blogs: AdminBlogService) -> Self {
        Self { blogs }
    }

    pub async fn overview(&self) -> AdminDashboardView {
        let counts = self.blogs.status_counts().await;
        let recent = self.blogs.recent(RECENT_LIMIT).await;

        AdminDashboardView {
            heading: "Dashboard".to_string(),
            stats: vec![
                AdminStatView {
                    label: "Total Blogs",
                    value: counts.total,
                    icon: "fa-blog",
                },
                AdminStatView {
                    label: "Published",
                    value: counts.published,
                    icon: "fa-check-circle",
                },
                AdminStatView {
                    label: "Drafts",
                    value: counts.draft,
                    icon: "fa-edit",
                },
            ],
            recent: recent.iter().map(AdminBlogRowView::from).collect(),
            empty_message: "No blog posts yet.".to_string(),
            export_href: "/export".to_string(),
            import_action: "/import".to_string(),
            import_prompt: Confirmation::IMPORT_PROMPT,
            delete_prompt: Confirmation::DELETE_PROMPT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::clock::SystemClock;
    use crate::application::repos::KeyValueStore;
    use crate::application::store::{BlogStore, DEFAULT_BLOGS_KEY};
    use crate::infra::kv::MemoryKeyValueStore;
    use std::sync::Arc;

    async fn service_with(posts: Option<&str>) -> AdminDashboardService {
        let kv = Arc::new(MemoryKeyValueStore::new());
        if let Some(raw) = posts {
            kv.set(DEFAULT_BLOGS_KEY, raw).await.unwrap();
        }
        let store = BlogStore::load(kv, DEFAULT_BLOGS_KEY, Arc::new(SystemClock))
            .await
            .unwrap();
        AdminDashboardService::new(AdminBlogService::new(Arc::new(store)))
    }

    #[tokio::test]
    async fn counts_seed_posts_by_status() {
        let view = service_with(None).await.overview().await;
        let values: Vec<(&str, usize)> = view
            .stats
            .iter()
            .map(|stat| (stat.label, stat.value))
            .collect();
        assert_eq!(values, [("Total Blogs", 3), ("Published", 2), ("Drafts", 1)]);
        assert_eq!(view.recent.first().map(|row| row.id.as_str()), Some("3"));
    }

    #[tokio::test]
    async fn empty_collection_has_no_recent_rows() {
        let view = service_with(Some("[]")).await.overview().await;
        assert!(!view.has_recent());
        assert_eq!(view.stats[0].value, 0);
        assert_eq!(view.empty_message, "No blog posts yet.");
    }
}
