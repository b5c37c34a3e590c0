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

//! Read-through cached repository resolution.
//!
//! [`RepositoryResolver`] owns the two injected capabilities, an
//! [`HttpClient`] and a [`CacheStore`], and runs the whole pipeline:
//!
//! 1. validate the request (no I/O for bad input),
//! 2. return the cached record on a hit,
//! 3. build the platform config, probing the site name when needed,
//! 4. fetch and normalize repository metadata,
//! 5. pick a release or branch and build its archive URL,
//! 6. store the record and pre-warm the avatar marker.
//!
//! Only step 4 can fail a resolution once the request is valid. Cache trouble
//! is logged and otherwise ignored.

use crate::api::RepositoryApi;
use crate::cache::{
    AVATAR_PREFIX, CacheStore, FileStore, KEY_PREFIX, prewarm_avatar, repository_key,
    site_name_key,
};
use crate::config::GitEmbedConfig;
use crate::download::{build_download_info, resolve_download_ref};
use crate::error::Result;
use crate::http::{AttohttpcClient, HttpClient};
use crate::models::{CanonicalRepository, DownloadKind, RepositoryRequest, RepositoryTarget};
use crate::normalize::normalize;
use crate::platform::{SiteNameProber, get_config, normalize_domain};
use log::{debug, info, warn};
use std::time::Duration;

/// TTLs and timeouts used by one resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverSettings {
    pub repository_ttl: Duration,
    pub site_name_ttl: Duration,
    pub site_name_fallback_ttl: Duration,
    pub avatar_ttl: Duration,
    pub api_timeout: Duration,
    pub probe_timeout: Duration,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            repository_ttl: Duration::from_secs(24 * 60 * 60),
            site_name_ttl: Duration::from_secs(24 * 60 * 60),
            site_name_fallback_ttl: Duration::from_secs(60 * 60),
            avatar_ttl: Duration::from_secs(7 * 24 * 60 * 60),
            api_timeout: Duration::from_secs(15),
            probe_timeout: Duration::from_secs(10),
        }
    }
}

impl ResolverSettings {
    pub fn from_config(config: &GitEmbedConfig) -> Self {
        Self {
            repository_ttl: config.cache.repository_ttl(),
            site_name_ttl: config.cache.site_name_ttl(),
            site_name_fallback_ttl: config.cache.site_name_fallback_ttl(),
            avatar_ttl: config.cache.avatar_ttl(),
            api_timeout: config.http.api_timeout(),
            probe_timeout: config.http.probe_timeout(),
        }
    }
}

pub struct RepositoryResolver {
    http: Box<dyn HttpClient>,
    cache: Box<dyn CacheStore>,
    settings: ResolverSettings,
}

impl RepositoryResolver {
    pub fn new(http: Box<dyn HttpClient>, cache: Box<dyn CacheStore>) -> Self {
        Self {
            http,
            cache,
            settings: ResolverSettings::default(),
        }
    }

    /// Live resolver: attohttpc for the network and a file store under the cache directory.
    pub fn from_config(config: &GitEmbedConfig) -> Self {
        Self::new(
            Box::new(AttohttpcClient::new()),
            Box::new(FileStore::new(config.cache_dir())),
        )
        .with_settings(ResolverSettings::from_config(config))
    }

    pub fn with_settings(mut self, settings: ResolverSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn fetch_repository(&self, request: &RepositoryRequest) -> Result<CanonicalRepository> {
        let target = request.validate()?;
        self.fetch_target(&target)
    }

    /// Resolve an already validated target, going to the network only on a cache miss.
    pub fn fetch_target(&self, target: &RepositoryTarget) -> Result<CanonicalRepository> {
        let key = repository_key(target);

        if let Some(cached) = self.cached_repository(&key) {
            debug!("Cache hit for {key}");
            return Ok(cached);
        }
        debug!("Cache miss for {key}");

        let repository = self.resolve(target)?;
        self.store_repository(&key, &repository);

        prewarm_avatar(
            self.http.as_ref(),
            self.cache.as_ref(),
            repository.display_avatar_url(),
            self.settings.avatar_ttl,
            self.settings.probe_timeout,
        );

        Ok(repository)
    }

    /// Drop one repository record, every avatar marker and the probed site name of its host.
    pub fn clear_repository_cache(&self, request: &RepositoryRequest) -> Result<()> {
        let target = request.validate()?;
        let key = repository_key(&target);

        self.cache.delete(&key)?;
        let avatars = self.cache.delete_by_prefix(AVATAR_PREFIX)?;
        debug!("Removed {key} and {avatars} avatar markers");

        if let Some(domain) = target.custom_domain.as_deref() {
            let domain = normalize_domain(domain);
            if !domain.is_empty() {
                self.cache.delete(&site_name_key(&domain))?;
            }
        }

        info!("Cleared cache for {}/{}", target.owner, target.repo);
        Ok(())
    }

    /// Remove every entry this crate ever wrote.
    pub fn clear_all_cache(&self) -> Result<usize> {
        let removed = self.cache.delete_by_prefix(KEY_PREFIX)?;
        info!("Cleared {removed} cache entries");
        Ok(removed)
    }

    fn resolve(&self, target: &RepositoryTarget) -> Result<CanonicalRepository> {
        let prober = SiteNameProber::new(self.http.as_ref(), self.cache.as_ref())
            .with_timeout(self.settings.probe_timeout)
            .with_ttls(
                self.settings.site_name_ttl,
                self.settings.site_name_fallback_ttl,
            );
        let config = get_config(
            target.platform,
            target.custom_domain.as_deref(),
            target.custom_site_name.as_deref(),
            &prober,
        )?;

        let api = RepositoryApi::new(self.http.as_ref()).with_timeout(self.settings.api_timeout);
        let raw = api.fetch_repository(&config, &target.owner, &target.repo)?;
        let repository = normalize(raw, target.platform, &config)?;

        let download_ref = resolve_download_ref(
            &api,
            &config,
            &target.owner,
            &target.repo,
            repository.default_branch.as_deref(),
        );
        let probed_branch = (download_ref.kind == DownloadKind::Branch)
            .then(|| download_ref.reference.clone());
        let download_info =
            build_download_info(&config, &target.owner, &target.repo, &download_ref);

        Ok(repository
            .with_default_branch(probed_branch)
            .with_download_info(download_info))
    }

    fn cached_repository(&self, key: &str) -> Option<CanonicalRepository> {
        let value = match self.cache.get(key) {
            Ok(value) => value?,
            Err(e) => {
                warn!("Cache read failed for {key}: {e}");
                return None;
            }
        };

        match serde_json::from_value(value) {
            Ok(repository) => Some(repository),
            Err(e) => {
                warn!("Ignoring unreadable cache entry {key}: {e}");
                None
            }
        }
    }

    fn store_repository(&self, key: &str, repository: &CanonicalRepository) {
        let value = match serde_json::to_value(repository) {
            Ok(value) => value,
            Err(e) => {
                warn!("Failed to serialize {key}: {e}");
                return;
            }
        };

        if let Err(e) = self.cache.set(key, value, self.settings.repository_ttl) {
            warn!("Failed to cache {key}: {e}");
        }
    }
}
