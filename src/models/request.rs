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
use crate::models::platform::Platform;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Inbound fetch/clear request as the host hands it over.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RepositoryRequest {
    pub platform: String,
    pub owner: String,
    pub repo: String,
    pub custom_domain: String,
    pub custom_site_name: String,
}

/// A request that passed validation; no I/O happens before this exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryTarget {
    pub platform: Platform,
    pub owner: String,
    pub repo: String,
    pub custom_domain: Option<String>,
    pub custom_site_name: Option<String>,
}

impl RepositoryRequest {
    pub fn new(platform: &str, owner: &str, repo: &str) -> Self {
        Self {
            platform: platform.to_string(),
            owner: owner.to_string(),
            repo: repo.to_string(),
            ..Default::default()
        }
    }

    pub fn with_custom_domain(mut self, domain: &str) -> Self {
        self.custom_domain = domain.to_string();
        self
    }

    pub fn with_custom_site_name(mut self, site_name: &str) -> Self {
        self.custom_site_name = site_name.to_string();
        self
    }

    pub fn validate(&self) -> Result<RepositoryTarget> {
        let owner = self.owner.trim();
        let repo = self.repo.trim();
        if owner.is_empty() || repo.is_empty() {
            return Err(GitEmbedError::MissingRepositoryIdentity);
        }

        let platform = if self.platform.trim().is_empty() {
            Platform::GitHub
        } else {
            Platform::from_str(&self.platform)?
        };

        let custom_domain = non_empty(&self.custom_domain);
        if platform.requires_domain() && custom_domain.is_none() {
            return Err(GitEmbedError::MissingCustomDomain(platform));
        }

        Ok(RepositoryTarget {
            platform,
            owner: owner.to_string(),
            repo: repo.to_string(),
            custom_domain,
            custom_site_name: non_empty(&self.custom_site_name),
        })
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
