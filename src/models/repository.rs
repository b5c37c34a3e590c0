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

use crate::models::platform::Platform;
use serde::{Deserialize, Serialize};

/// Canonical account kind, whatever vocabulary the upstream uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OwnerType {
    User,
    Organization,
}

impl OwnerType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OwnerType::User => "User",
            OwnerType::Organization => "Organization",
        }
    }
}

impl std::fmt::Display for OwnerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub login: String,
    pub avatar_url: String,
    pub html_url: String,
    #[serde(rename = "type")]
    pub owner_type: OwnerType,
}

/// Display fields of the hosting site, copied from its `PlatformConfig`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteInfo {
    pub name: String,
    pub url: String,
    pub favicon_url: String,
    pub accent_color: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DownloadKind {
    Release,
    Branch,
}

impl DownloadKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DownloadKind::Release => "release",
            DownloadKind::Branch => "branch",
        }
    }
}

/// The release tag or branch picked as archive download target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRef {
    pub kind: DownloadKind,
    pub reference: String,
    pub display_name: String,
}

impl DownloadRef {
    pub fn is_release(&self) -> bool {
        self.kind == DownloadKind::Release
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadInfo {
    pub kind: DownloadKind,
    #[serde(rename = "ref")]
    pub reference: String,
    pub display_name: String,
    /// Fully qualified https URL, or empty when no archive could be built
    pub url: String,
    pub filename: String,
}

impl DownloadInfo {
    /// Placeholder carried by a freshly normalized record until a ref is resolved.
    pub fn unresolved() -> Self {
        Self {
            kind: DownloadKind::Branch,
            reference: String::new(),
            display_name: String::new(),
            url: String::new(),
            filename: String::new(),
        }
    }

    pub fn is_resolved(&self) -> bool {
        !self.url.is_empty()
    }
}

/// Platform independent repository record, the only thing that gets cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalRepository {
    pub name: String,
    pub full_name: String,
    pub platform: Platform,
    pub description: Option<String>,
    pub language: Option<String>,
    pub html_url: String,
    pub star_count: u64,
    pub fork_count: u64,
    pub open_issue_count: u64,
    pub clone_url: String,
    pub owner: Owner,
    pub repo_avatar_url: Option<String>,
    pub default_branch: Option<String>,
    pub download_info: DownloadInfo,
    pub site_info: SiteInfo,
}

impl CanonicalRepository {
    pub fn with_download_info(mut self, download_info: DownloadInfo) -> Self {
        self.download_info = download_info;
        self
    }

    pub fn with_default_branch(mut self, branch: Option<String>) -> Self {
        if branch.is_some() {
            self.default_branch = branch;
        }
        self
    }

    /// Repository avatar when the host has one, otherwise the owner's.
    pub fn display_avatar_url(&self) -> &str {
        match self.repo_avatar_url.as_deref() {
            Some(url) if !url.is_empty() => url,
            _ => &self.owner.avatar_url,
        }
    }

    pub fn issues_url(&self) -> String {
        format!("{}/issues", self.html_url.trim_end_matches('/'))
    }

    pub fn forks_url(&self) -> String {
        format!("{}/forks", self.html_url.trim_end_matches('/'))
    }
}
