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

//! TTL-keyed blob cache used by the resolver.
//!
//! The store itself is an injected capability (`CacheStore`); the resolver
//! never reaches for ambient global state. Keys all live under
//! [`KEY_PREFIX`] so that a single prefix sweep removes everything.

mod avatar;
mod memory;
mod storage;


use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

use crate::error::{GitEmbedError, Result};
use crate::models::RepositoryTarget;

pub use avatar::prewarm_avatar;
pub use memory::MemoryStore;
pub use storage::FileStore;

pub const KEY_PREFIX: &str = "git_embed_";
pub const SITE_NAME_PREFIX: &str = "git_embed_site_name_";
pub const AVATAR_PREFIX: &str = "git_embed_avatar_";

/// Key/value store with per-entry expiry.
///
/// A missing or expired key reads as `Ok(None)`.
pub trait CacheStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<Value>>;

    fn set(&self, key: &str, value: Value, ttl: Duration) -> Result<()>;

    fn delete(&self, key: &str) -> Result<()>;

    /// Remove every entry whose key starts with `prefix`, returning how many went away.
    fn delete_by_prefix(&self, prefix: &str) -> Result<usize>;
}

/// One stored blob together with the key it was written under.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CacheEntry {
    pub key: String,
    pub expires_at: DateTime<Utc>,
    pub value: Value,
}

impl CacheEntry {
    pub fn new(key: &str, value: Value, ttl: Duration) -> Result<Self> {
        let ttl = chrono::Duration::from_std(ttl)
            .map_err(|e| GitEmbedError::CacheStorage(format!("Invalid TTL: {e}")))?;
        Ok(Self {
            key: key.to_string(),
            expires_at: Utc::now() + ttl,
            value,
        })
    }

    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}

/// Key for a repository record.
///
/// Every field of the request tuple takes part, the display-name override
/// included, so two requests differing only in site name are cached apart.
pub fn repository_key(target: &RepositoryTarget) -> String {
    let mut key = format!(
        "{KEY_PREFIX}{}_{}_{}",
        target.platform.id(),
        target.owner,
        target.repo
    );
    if let Some(domain) = &target.custom_domain {
        key.push('_');
        key.push_str(domain);
    }
    if let Some(site_name) = &target.custom_site_name {
        key.push('_');
        key.push_str(site_name);
    }
    key
}

pub fn site_name_key(domain: &str) -> String {
    format!("{SITE_NAME_PREFIX}{}", md5_hex(domain))
}

pub fn avatar_key(avatar_url: &str) -> String {
    format!("{AVATAR_PREFIX}{}", md5_hex(avatar_url))
}

pub(crate) fn md5_hex(input: &str) -> String {
    format!("{:x}", md5::compute(input.as_bytes()))
}
