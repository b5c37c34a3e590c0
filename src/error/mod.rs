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

mod context;
mod exit_codes;
mod format;

pub use context::ErrorContext;
pub use exit_codes::get_exit_code;
pub use format::{format_error_chain, format_error_with_color};

use crate::models::platform::Platform;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitEmbedError {
    #[error("Repository owner and name are required")]
    MissingRepositoryIdentity,

    #[error("A custom domain is required for {}", .0.display_name())]
    MissingCustomDomain(Platform),

    #[error("Platform '{0}' is not supported")]
    UnsupportedPlatform(String),

    #[error("Upstream repository request failed: {0}")]
    UpstreamUnavailable(String),

    #[error("Upstream returned an unusable payload: {0}")]
    UpstreamMalformed(String),

    #[error("Cache storage error: {0}")]
    CacheStorage(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Http(#[from] attohttpc::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl From<config::ConfigError> for GitEmbedError {
    fn from(error: config::ConfigError) -> Self {
        GitEmbedError::ConfigError(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GitEmbedError>;
