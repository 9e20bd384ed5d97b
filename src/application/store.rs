//! The blog collection: an ordered list of posts mirrored into a key-value entry.

use std::{collections::HashSet, sync::Arc};

use metrics::counter;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::application::clock::{Clock, unix_millis};
use crate::application::repos::{KeyValueStore, StorageError};
use crate::domain::entities::{BlogDraft, BlogPatch, BlogPost};
use crate::domain::posts::{iso_date, seed_posts};

pub const DEFAULT_BLOGS_KEY: &str = "snsp_blogs";

const TARGET: &str = "snsp::store";

/// Ordered, persisted blog collection.
///
/// Every mutation serializes the whole collection and writes it under one key.
/// Changes are staged on a copy and only become visible once the write has
/// succeeded, so a storage failure leaves the collection as it was.
pub struct BlogStore {
    kv: Arc<dyn KeyValueStore>,
    key: String,
    clock: Arc<dyn Clock>,
    posts: RwLock<Vec<BlogPost>>,
}

impl BlogStore {
    /// Read the collection from `key`, falling back to the seed posts when the
    /// entry is absent or cannot be decoded.
    pub async fn load(
        kv: Arc<dyn KeyValueStore>,
        key: impl Into<String>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, StorageError> {
        let key = key.into();
        let posts = match kv.get(&key).await? {
            None => {
                info!(target = TARGET, key = %key, "no stored blog posts, using seed data");
                seed_posts()
            }
            Some(raw) => match serde_json::from_str::<Vec<BlogPost>>(&raw) {
                Ok(posts) => posts,
                Err(err) => {
                    warn!(
                        target = TARGET,
                        key = %key,
                        error = %err,
                        "stored blog posts could not be decoded, using seed data"
                    );
                    counter!("snsp_blog_store_fallback_total").increment(1);
                    seed_posts()
                }
            },
        };

        Ok(Self {
            kv,
            key,
            clock,
            posts: RwLock::new(posts),
        })
    }

    /// All posts in insertion order.
    pub async fn list(&self) -> Vec<BlogPost> {
        self.posts.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.posts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.posts.read().await.is_empty()
    }

    pub async fn get(&self, id: &str) -> Option<BlogPost> {
        self.posts
            .read()
            .await
            .iter()
            .find(|post| post.id == id)
            .cloned()
    }

    /// Published posts in insertion order.
    pub async fn published(&self) -> Vec<BlogPost> {
        self.posts
            .read()
            .await
            .iter()
            .filter(|post| post.is_published())
            .cloned()
            .collect()
    }

    /// Append a new post with a fresh id and today's date.
    pub async fn add(&self, draft: BlogDraft) -> Result<BlogPost, StorageError> {
        let mut posts = self.posts.write().await;
        let now = self.clock.now();
        let post = draft.into_post(next_id(&posts, unix_millis(now)), iso_date(now));

        let mut staged = posts.clone();
        staged.push(post.clone());
        self.persist(&staged).await?;
        *posts = staged;

        counter!("snsp_blog_mutations_total", "op" => "add").increment(1);
        info!(target = TARGET, id = %post.id, title = %post.title, "blog post added");
        Ok(post)
    }

    /// Merge `patch` into the post with `id`. Returns `None` when no such post exists.
    pub async fn update(
        &self,
        id: &str,
        patch: BlogPatch,
    ) -> Result<Option<BlogPost>, StorageError> {
        let mut posts = self.posts.write().await;
        let Some(index) = posts.iter().position(|post| post.id == id) else {
            return Ok(None);
        };

        let mut staged = posts.clone();
        staged[index].apply(patch);
        let updated = staged[index].clone();
        self.persist(&staged).await?;
        *posts = staged;

        counter!("snsp_blog_mutations_total", "op" => "update").increment(1);
        info!(target = TARGET, id = %updated.id, "blog post updated");
        Ok(Some(updated))
    }

    /// Remove the post with `id`, returning it. Unknown ids leave storage untouched.
    pub async fn delete(&self, id: &str) -> Result<Option<BlogPost>, StorageError> {
        let mut posts = self.posts.write().await;
        let Some(index) = posts.iter().position(|post| post.id == id) else {
            return Ok(None);
        };

        let mut staged = posts.clone();
        let removed = staged.remove(index);
        self.persist(&staged).await?;
        *posts = staged;

        counter!("snsp_blog_mutations_total", "op" => "delete").increment(1);
        info!(target = TARGET, id = %removed.id, "blog post deleted");
        Ok(Some(removed))
    }

    /// Replace the whole collection.
    pub async fn replace_all(&self, replacement: Vec<BlogPost>) -> Result<(), StorageError> {
        let mut posts = self.posts.write().await;
        self.persist(&replacement).await?;
        let count = replacement.len();
        *posts = replacement;

        counter!("snsp_blog_mutations_total", "op" => "replace").increment(1);
        info!(target = TARGET, count, "blog collection replaced");
        Ok(())
    }

    async fn persist(&self, posts: &[BlogPost]) -> Result<(), StorageError> {
        let encoded =
            serde_json::to_string(posts).map_err(|err| StorageError::encode(&self.key, err))?;
        self.kv.set(&self.key, &encoded).await
    }
}

/// Timestamp-derived id, bumped past any id already in use.
fn next_id(posts: &[BlogPost], millis: i128) -> String {
    let taken: HashSet<&str> = posts.iter().map(|post| post.id.as_str()).collect();
    let mut candidate = millis;
    loop {
        let id = candidate.to_string();
        if !taken.contains(id.as_str()) {
            return id;
        }
        candidate += 1;
    }
}
