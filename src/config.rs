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

use crate::error::{GitEmbedError, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE_NAME: &str = "config.toml";
const HOME_ENV_VAR: &str = "GIT_EMBED_HOME";
const DEFAULT_HOME_DIR: &str = ".git-embed";
const CACHE_DIR: &str = "cache";
const ENV_PREFIX: &str = "GIT_EMBED";

const HOUR_SECS: u64 = 3_600;
const DAY_SECS: u64 = 24 * HOUR_SECS;
const WEEK_SECS: u64 = 7 * DAY_SECS;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitEmbedConfig {
    #[serde(skip)]
    pub home: PathBuf,

    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub http: HttpConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Overrides `{home}/cache`
    #[serde(default)]
    pub directory: Option<PathBuf>,

    #[serde(default = "default_repository_ttl_secs")]
    pub repository_ttl_secs: u64,

    #[serde(default = "default_site_name_ttl_secs")]
    pub site_name_ttl_secs: u64,

    #[serde(default = "default_site_name_fallback_ttl_secs")]
    pub site_name_fallback_ttl_secs: u64,

    #[serde(default = "default_avatar_ttl_secs")]
    pub avatar_ttl_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Repository, release and branch requests
    #[serde(default = "default_api_timeout_secs")]
    pub api_timeout_secs: u64,

    /// Site title and avatar requests
    #[serde(default = "default_probe_timeout_secs")]
    pub probe_timeout_secs: u64,
}

fn default_repository_ttl_secs() -> u64 {
    DAY_SECS
}

fn default_site_name_ttl_secs() -> u64 {
    DAY_SECS
}

fn default_site_name_fallback_ttl_secs() -> u64 {
    HOUR_SECS
}

fn default_avatar_ttl_secs() -> u64 {
    WEEK_SECS
}

fn default_api_timeout_secs() -> u64 {
    15
}

fn default_probe_timeout_secs() -> u64 {
    10
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            directory: None,
            repository_ttl_secs: default_repository_ttl_secs(),
            site_name_ttl_secs: default_site_name_ttl_secs(),
            site_name_fallback_ttl_secs: default_site_name_fallback_ttl_secs(),
            avatar_ttl_secs: default_avatar_ttl_secs(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            api_timeout_secs: default_api_timeout_secs(),
            probe_timeout_secs: default_probe_timeout_secs(),
        }
    }
}

impl CacheConfig {
    pub fn repository_ttl(&self) -> Duration {
        Duration::from_secs(self.repository_ttl_secs)
    }

    pub fn site_name_ttl(&self) -> Duration {
        Duration::from_secs(self.site_name_ttl_secs)
    }

    pub fn site_name_fallback_ttl(&self) -> Duration {
        Duration::from_secs(self.site_name_fallback_ttl_secs)
    }

    pub fn avatar_ttl(&self) -> Duration {
        Duration::from_secs(self.avatar_ttl_secs)
    }
}

impl HttpConfig {
    pub fn api_timeout(&self) -> Duration {
        Duration::from_secs(self.api_timeout_secs)
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }
}

impl GitEmbedConfig {
    /// Defaults rooted at `home`, without reading any file or environment.
    pub fn new(home: PathBuf) -> Self {
        Self {
            home,
            cache: CacheConfig::default(),
            http: HttpConfig::default(),
        }
    }

    /// Layer `{home}/config.toml` and `GIT_EMBED_*` variables over the defaults.
    pub fn load(home: &Path) -> Result<Self> {
        let config_path = home.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            log::debug!("Loading config from {config_path:?}");
        } else {
            log::debug!("Config file not found at {config_path:?}, using defaults");
        }

        let settings = Config::builder()
            .add_source(File::from(config_path).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut config: GitEmbedConfig = settings.try_deserialize()?;
        config.home = home.to_path_buf();
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.http.api_timeout_secs == 0 {
            return Err(GitEmbedError::InvalidConfig(
                "http.api_timeout_secs must be greater than zero".to_string(),
            ));
        }
        if self.http.probe_timeout_secs == 0 {
            return Err(GitEmbedError::InvalidConfig(
                "http.probe_timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn cache_dir(&self) -> PathBuf {
        self.cache
            .directory
            .clone()
            .unwrap_or_else(|| self.home.join(CACHE_DIR))
    }
}

/// Resolve the home directory: `GIT_EMBED_HOME`, else `~/.git-embed`.
pub fn resolve_home() -> Result<PathBuf> {
    if let Ok(home) = std::env::var(HOME_ENV_VAR) {
        if !home.trim().is_empty() {
            return Ok(PathBuf::from(home));
        }
    }

    dirs::home_dir()
        .map(|dir| dir.join(DEFAULT_HOME_DIR))
        .ok_or_else(|| {
            GitEmbedError::ConfigError(format!(
                "Unable to determine home directory; set {HOME_ENV_VAR}"
            ))
        })
}

/// Load configuration once at startup.
pub fn new_git_embed_config() -> Result<GitEmbedConfig> {
    let home = resolve_home()?;
    GitEmbedConfig::load(&home)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = GitEmbedConfig::new(PathBuf::from("/tmp/git-embed"));
        assert_eq!(config.cache.repository_ttl(), Duration::from_secs(86_400));
        assert_eq!(config.cache.site_name_ttl(), Duration::from_secs(86_400));
        assert_eq!(
            config.cache.site_name_fallback_ttl(),
            Duration::from_secs(3_600)
        );
        assert_eq!(config.cache.avatar_ttl(), Duration::from_secs(604_800));
        assert_eq!(config.http.api_timeout(), Duration::from_secs(15));
        assert_eq!(config.http.probe_timeout(), Duration::from_secs(10));
        assert_eq!(config.cache_dir(), PathBuf::from("/tmp/git-embed/cache"));
    }

    #[test]
    #[serial]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config = GitEmbedConfig::load(temp_dir.path()).unwrap();

        assert_eq!(config.home, temp_dir.path());
        assert_eq!(config.cache.repository_ttl_secs, DAY_SECS);
    }

    #[test]
    #[serial]
    fn test_partial_config_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            r#"
[cache]
repository_ttl_secs = 600
directory = "/var/cache/git-embed"

[http]
api_timeout_secs = 5
"#,
        )
        .unwrap();

        let config = GitEmbedConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config.cache.repository_ttl_secs, 600);
        assert_eq!(config.cache.avatar_ttl_secs, WEEK_SECS);
        assert_eq!(config.http.api_timeout_secs, 5);
        assert_eq!(config.http.probe_timeout_secs, 10);
        assert_eq!(config.cache_dir(), PathBuf::from("/var/cache/git-embed"));
    }

    #[test]
    #[serial]
    fn test_environment_overrides_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "[http]\nprobe_timeout_secs = 3\n",
        )
        .unwrap();

        unsafe {
            std::env::set_var("GIT_EMBED_HTTP__PROBE_TIMEOUT_SECS", "7");
        }
        let config = GitEmbedConfig::load(temp_dir.path());
        unsafe {
            std::env::remove_var("GIT_EMBED_HTTP__PROBE_TIMEOUT_SECS");
        }

        assert_eq!(config.unwrap().http.probe_timeout_secs, 7);
    }

    #[test]
    #[serial]
    fn test_zero_timeout_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "[http]\napi_timeout_secs = 0\n",
        )
        .unwrap();

        let result = GitEmbedConfig::load(temp_dir.path());
        assert!(matches!(result, Err(GitEmbedError::InvalidConfig(_))));
    }

    #[test]
    #[serial]
    fn test_resolve_home_from_env() {
        unsafe {
            std::env::set_var(HOME_ENV_VAR, "/opt/git-embed");
        }
        let home = resolve_home();
        unsafe {
            std::env::remove_var(HOME_ENV_VAR);
        }

        assert_eq!(home.unwrap(), PathBuf::from("/opt/git-embed"));
    }
}
