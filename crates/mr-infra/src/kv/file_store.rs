//! File-backed key-value store
//!
//! All keys live in a single JSON object file in the application data
//! directory. Every write rewrites the whole file atomically. A file that no
//! longer parses is renamed to `<file>.corrupt` and the store reads as empty.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use mr_core::ports::KeyValueStorePort;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, warn};

pub const DEFAULT_STORE_FILE: &str = "storage.json";

type Entries = BTreeMap<String, String>;

pub struct FileKeyValueStore {
    path: PathBuf,
    /// Serializes read-modify-write cycles.
    write_lock: Mutex<()>,
}

impl FileKeyValueStore {
    /// Creates a store backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Creates a store using [`DEFAULT_STORE_FILE`] inside `base_dir`.
    pub fn with_defaults(base_dir: PathBuf) -> Self {
        Self::new(base_dir.join(DEFAULT_STORE_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_entries(&self) -> Result<Entries> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Entries::new()),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("read store failed: {}", self.path.display()))
            }
        };

        if content.trim().is_empty() {
            return Ok(Entries::new());
        }

        match serde_json::from_str(&content) {
            Ok(entries) => Ok(entries),
            Err(err) => {
                self.quarantine(&err).await;
                Ok(Entries::new())
            }
        }
    }

    fn corrupt_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".corrupt");
        PathBuf::from(name)
    }

    /// Moves an unparseable store out of the way so the next write starts
    /// from an empty object.
    async fn quarantine(&self, err: &serde_json::Error) {
        let target = self.corrupt_path();
        warn!(
            path = %self.path.display(),
            moved_to = %target.display(),
            error = %err,
            "store file is not valid JSON, starting empty"
        );
        if let Err(rename_err) = fs::rename(&self.path, &target).await {
            warn!(error = %rename_err, "failed to move corrupt store aside");
        }
    }

    /// Writes to a sibling temp file, then renames it over the target.
    async fn write_entries(&self, entries: &Entries) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .await
                .with_context(|| format!("create store dir failed: {}", dir.display()))?;
        }

        let content = serde_json::to_string_pretty(entries).context("serialize store failed")?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content)
            .await
            .with_context(|| format!("write temp store failed: {}", tmp_path.display()))?;
        fs::rename(&tmp_path, &self.path).await.with_context(|| {
            format!(
                "rename temp store to target failed: {} -> {}",
                tmp_path.display(),
                self.path.display()
            )
        })?;
        Ok(())
    }
}

#[async_trait]
impl KeyValueStorePort for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_entries().await?.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.read_entries().await?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries).await?;
        debug!(key, path = %self.path.display(), "store key written");
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.read_entries().await?;
        if entries.remove(key).is_none() {
            return Ok(());
        }
        self.write_entries(&entries).await?;
        debug!(key, path = %self.path.display(), "store key deleted");
        Ok(())
    }
}
