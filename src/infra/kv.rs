//! Key-value store adapters: a JSON file on disk and an in-process map.

use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
    sync::Arc,
};

use async_trait::async_trait;
use tempfile::NamedTempFile;
use tokio::sync::{Mutex, RwLock};
use tracing::debug;

use crate::application::repos::{KeyValueStore, StorageError};

type Entries = BTreeMap<String, String>;

/// All entries in a single JSON object file, rewritten atomically on every change.
pub struct FileKeyValueStore {
    path: Arc<PathBuf>,
    entries: Mutex<Entries>,
}

impl FileKeyValueStore {
    /// Open (or start) the store at `path`. Missing parent directories are created;
    /// a missing file is an empty store, an unreadable one is an error.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = Arc::new(path.into());
        let entries = {
            let path = path.clone();
            tokio::task::spawn_blocking(move || read_entries(&path))
                .await
                .map_err(|err| StorageError::Unavailable(err.to_string()))??
        };

        debug!(
            target = "snsp::kv",
            path = %path.display(),
            entries = entries.len(),
            "opened key-value file"
        );
        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn commit(&self, entries: &mut Entries, staged: Entries) -> Result<(), StorageError> {
        let path = self.path.clone();
        let snapshot = staged.clone();
        tokio::task::spawn_blocking(move || write_entries(&path, &snapshot))
            .await
            .map_err(|err| StorageError::Unavailable(err.to_string()))??;
        *entries = staged;
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().await;
        let mut staged = entries.clone();
        staged.insert(key.to_string(), value.to_string());
        self.commit(&mut entries, staged).await
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().await;
        if !entries.contains_key(key) {
            return Ok(());
        }
        let mut staged = entries.clone();
        staged.remove(key);
        self.commit(&mut entries, staged).await
    }
}

fn read_entries(path: &Path) -> Result<Entries, StorageError> {
    if let Some(parent) = parent_dir(path) {
        fs::create_dir_all(parent)?;
    }

    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Entries::new()),
        Err(err) => return Err(err.into()),
    };

    if text.trim().is_empty() {
        return Ok(Entries::new());
    }

    serde_json::from_str(&text)
        .map_err(|err| StorageError::corrupt(format!("{}: {err}", path.display())))
}

fn write_entries(path: &Path, entries: &Entries) -> Result<(), StorageError> {
    let dir = parent_dir(path).unwrap_or_else(|| Path::new("."));
    let mut file = NamedTempFile::new_in(dir)?;
    serde_json::to_writer_pretty(&mut file, entries)
        .map_err(|err| StorageError::encode(&path.display().to_string(), err))?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|err| StorageError::Io(err.error))?;
    Ok(())
}

fn parent_dir(path: &Path) -> Option<&Path> {
    path.parent().filter(|parent| !parent.as_os_str().is_empty())
}

/// Process-local store; nothing survives a restart.
#[derive(Default)]
pub struct MemoryKeyValueStore {
    entries: RwLock<Entries>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}
