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
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Supported Git hosting service families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[serde(rename = "github")]
    GitHub,
    #[serde(rename = "gitlab")]
    GitLab,
    Gitea,
    Forgejo,
    Custom,
}

/// Shape of the REST API a platform speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiFamily {
    /// `api.github.com` style paths and payloads
    GitHub,
    /// `/api/v4/projects/...`
    GitLab,
    /// Gitea compatible `/api/v1/repos/...`, shared by Forgejo and custom hosts
    Gitea,
}

impl Platform {
    pub const ALL: [Platform; 5] = [
        Platform::GitHub,
        Platform::GitLab,
        Platform::Gitea,
        Platform::Forgejo,
        Platform::Custom,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Platform::GitHub => "github",
            Platform::GitLab => "gitlab",
            Platform::Gitea => "gitea",
            Platform::Forgejo => "forgejo",
            Platform::Custom => "custom",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::GitHub => "GitHub",
            Platform::GitLab => "GitLab",
            Platform::Gitea => "Gitea",
            Platform::Forgejo => "Forgejo",
            Platform::Custom => "Custom",
        }
    }

    /// Site name used when neither an override nor a probed page title is available.
    pub fn fallback_site_name(&self) -> &'static str {
        match self {
            Platform::Custom => "Git Service",
            other => other.display_name(),
        }
    }

    pub fn api_family(&self) -> ApiFamily {
        match self {
            Platform::GitHub => ApiFamily::GitHub,
            Platform::GitLab => ApiFamily::GitLab,
            Platform::Gitea | Platform::Forgejo | Platform::Custom => ApiFamily::Gitea,
        }
    }

    /// Every platform except github.com is self-hosted and needs a domain.
    pub fn requires_domain(&self) -> bool {
        !matches!(self, Platform::GitHub)
    }

    pub fn badge_label(&self) -> String {
        self.id().to_uppercase()
    }
}

impl FromStr for Platform {
    type Err = GitEmbedError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "github" => Ok(Platform::GitHub),
            "gitlab" => Ok(Platform::GitLab),
            "gitea" => Ok(Platform::Gitea),
            "forgejo" => Ok(Platform::Forgejo),
            "custom" => Ok(Platform::Custom),
            _ => Err(GitEmbedError::UnsupportedPlatform(s.to_string())),
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}
