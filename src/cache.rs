// Persistent snapshot cache.
// One JSON file per repository key, stamped with the fetch time.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{RepoCardError, Result};
use crate::models::Repo;

/// Snapshots older than this are refetched on activation.
pub const CACHE_TTL_MS: i64 = 24 * 60 * 60 * 1000;

/// Timestamped snapshot of the last successful fetch for one key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CacheEntry {
    /// Unix epoch milliseconds of the write; 0 means never cached.
    pub cached_at: i64,
    pub data: Option<Repo>,
}

impl CacheEntry {
    /// Whether this entry should be refetched at `now_ms`.
    ///
    /// An entry aged exactly `ttl_ms` is still fresh; the comparison is
    /// strict.
    pub fn is_expired(&self, now_ms: i64, ttl_ms: i64) -> bool {
        self.data.is_none() || self.cached_at < now_ms - ttl_ms
    }
}

/// Cache key for a repository identifier.
pub fn cache_key(owner_repo: &str) -> String {
    format!("repocard_{owner_repo}_cache")
}

pub(crate) fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// File-backed store, one entry per key.
#[derive(Debug, Clone)]
pub struct CacheStore {
    dir: PathBuf,
}

impl CacheStore {
    /// Open the store in the platform cache directory, creating it if needed.
    pub fn open() -> Result<Self> {
        let dirs = ProjectDirs::from("", "", "repocard").ok_or(RepoCardError::CacheDir)?;
        let store = Self::at(dirs.cache_dir());
        fs::create_dir_all(&store.dir)?;
        Ok(store)
    }

    /// Open the store in an explicit directory.
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Read the entry for `key`. Missing or unparseable content is a miss,
    /// never an error.
    pub fn read(&self, key: &str) -> CacheEntry {
        match fs::read(self.entry_path(key)) {
            Ok(bytes) => serde_json::from_slice(&bytes).unwrap_or_else(|err| {
                debug!(%key, %err, "discarding unparseable cache entry");
                CacheEntry::default()
            }),
            Err(_) => CacheEntry::default(),
        }
    }

    /// Store `data` under `key`, stamped with the current time. `None`
    /// leaves any existing entry untouched.
    pub fn write(&self, key: &str, data: Option<&Repo>) -> Result<()> {
        let Some(data) = data else { return Ok(()) };
        let entry = CacheEntry {
            cached_at: now_ms(),
            data: Some(data.clone()),
        };
        self.write_entry(key, &entry)
    }

    pub(crate) fn write_entry(&self, key: &str, entry: &CacheEntry) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.entry_path(key), serde_json::to_vec(entry)?)?;
        Ok(())
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key.replace('/', "_")))
    }
}
