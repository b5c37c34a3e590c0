// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::cache::{CacheEntry, CacheStore, KEY_PREFIX, md5_hex};
use crate::error::{GitEmbedError, Result};
use log::{debug, warn};
use serde_json::Value;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::NamedTempFile;

const ENTRY_EXTENSION: &str = "json";

/// Directory-backed store holding one JSON file per key.
///
/// File names are the md5 of the key; the key itself is kept inside the
/// entry so prefix sweeps can match on it.
#[derive(Debug, Clone)]
pub struct FileStore {
    directory: PathBuf,
}

impl FileStore {
    pub fn new(directory: PathBuf) -> Self {
        Self { directory }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.directory
            .join(format!("{}.{ENTRY_EXTENSION}", md5_hex(key)))
    }

    fn ensure_directory(&self) -> Result<()> {
        fs::create_dir_all(&self.directory).map_err(|e| {
            GitEmbedError::CacheStorage(format!("Failed to create cache directory: {e}"))
        })
    }

    fn entry_files(&self) -> Result<Vec<PathBuf>> {
        if !self.directory.exists() {
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        for dir_entry in fs::read_dir(&self.directory)? {
            let path = dir_entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) == Some(ENTRY_EXTENSION) {
                files.push(path);
            }
        }
        Ok(files)
    }
}

/// Load a cache entry from a file
fn load_entry(path: &Path) -> Result<CacheEntry> {
    let contents = fs::read_to_string(path)
        .map_err(|e| GitEmbedError::CacheStorage(format!("Failed to read cache entry: {e}")))?;

    serde_json::from_str(&contents)
        .map_err(|e| GitEmbedError::CacheStorage(format!("Corrupt cache entry: {e}")))
}

/// Write a cache entry through a temporary file so readers never see a partial entry
fn save_entry(entry: &CacheEntry, directory: &Path, path: &Path) -> Result<()> {
    let json = serde_json::to_string(entry)?;

    let mut temp_file = NamedTempFile::new_in(directory).map_err(|e| {
        GitEmbedError::CacheStorage(format!("Failed to create temporary cache file: {e}"))
    })?;
    temp_file
        .write_all(json.as_bytes())
        .map_err(|e| GitEmbedError::CacheStorage(format!("Failed to write cache entry: {e}")))?;
    temp_file.persist(path).map_err(|e| {
        GitEmbedError::CacheStorage(format!("Failed to rename cache entry: {}", e.error))
    })?;

    Ok(())
}

fn remove_if_exists(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(GitEmbedError::CacheStorage(format!(
            "Failed to remove cache entry {}: {e}",
            path.display()
        ))),
    }
}

impl CacheStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        let path = self.entry_path(key);
        if !path.exists() {
            return Ok(None);
        }

        let entry = match load_entry(&path) {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Discarding unreadable cache entry for {key}: {e}");
                remove_if_exists(&path)?;
                return Ok(None);
            }
        };

        if entry.key != key {
            debug!("Cache file {} belongs to another key", path.display());
            return Ok(None);
        }

        if entry.is_expired() {
            debug!("Cache entry {key} expired at {}", entry.expires_at);
            remove_if_exists(&path)?;
            return Ok(None);
        }

        Ok(Some(entry.value))
    }

    fn set(&self, key: &str, value: Value, ttl: Duration) -> Result<()> {
        self.ensure_directory()?;
        let entry = CacheEntry::new(key, value, ttl)?;
        save_entry(&entry, &self.directory, &self.entry_path(key))
    }

    fn delete(&self, key: &str) -> Result<()> {
        remove_if_exists(&self.entry_path(key))
    }

    fn delete_by_prefix(&self, prefix: &str) -> Result<usize> {
        let mut removed = 0;
        for path in self.entry_files()? {
            match load_entry(&path) {
                Ok(entry) if entry.key.starts_with(prefix) => {
                    remove_if_exists(&path)?;
                    removed += 1;
                }
                Ok(_) => {}
                // A full sweep owns every entry file, readable or not
                Err(e) if prefix == KEY_PREFIX => {
                    warn!("Removing unreadable cache entry {}: {e}", path.display());
                    remove_if_exists(&path)?;
                    removed += 1;
                }
                Err(e) => warn!("Skipping {}: {e}", path.display()),
            }
        }
        Ok(removed)
    }
}
