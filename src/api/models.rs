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

//! Upstream payload shapes.
//!
//! Only the fields the normalizer reads are modelled, and every one of them is
//! optional: self-hosted forks of the Gitea API in particular drop or rename
//! fields freely.

use serde::{Deserialize, Serialize};

/// `GET /repos/{owner}/{repo}` as answered by GitHub, Gitea and Forgejo.
///
/// The counters come under two names depending on the server, so both are
/// kept and the normalizer picks whichever is present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GitHubRepository {
    pub name: Option<String>,
    pub full_name: Option<String>,
    pub description: Option<String>,
    pub language: Option<String>,
    pub html_url: Option<String>,
    pub clone_url: Option<String>,
    pub stargazers_count: Option<u64>,
    pub stars_count: Option<u64>,
    pub forks_count: Option<u64>,
    pub forks: Option<u64>,
    pub open_issues_count: Option<u64>,
    pub open_issues: Option<u64>,
    pub default_branch: Option<String>,
    /// Repository level avatar (Gitea/Forgejo only)
    pub avatar_url: Option<String>,
    pub owner: Option<GitHubOwner>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GitHubOwner {
    pub login: Option<String>,
    /// Gitea sends `username` alongside `login`
    pub username: Option<String>,
    pub avatar_url: Option<String>,
    pub html_url: Option<String>,
    #[serde(rename = "type")]
    pub owner_type: Option<String>,
}

/// `GET /projects/{id}` on a GitLab instance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GitLabProject {
    pub name: Option<String>,
    pub path: Option<String>,
    pub path_with_namespace: Option<String>,
    pub description: Option<String>,
    pub language: Option<String>,
    pub web_url: Option<String>,
    pub http_url_to_repo: Option<String>,
    pub star_count: Option<u64>,
    pub forks_count: Option<u64>,
    pub open_issues_count: Option<u64>,
    pub default_branch: Option<String>,
    pub avatar_url: Option<String>,
    pub namespace: Option<GitLabNamespace>,
    pub owner: Option<GitLabOwner>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GitLabNamespace {
    pub name: Option<String>,
    pub path: Option<String>,
    /// `user` or `group`
    pub kind: Option<String>,
    pub avatar_url: Option<String>,
    pub web_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GitLabOwner {
    pub username: Option<String>,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub web_url: Option<String>,
    #[serde(rename = "type")]
    pub owner_type: Option<String>,
}

/// Repository metadata in the shape of the API family that produced it.
#[derive(Debug, Clone)]
pub enum RawRepoPayload {
    GitHub(GitHubRepository),
    GitLab(GitLabProject),
}

/// A release entry; GitLab has no drafts so the flag defaults to false.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Release {
    #[serde(default)]
    pub tag_name: String,
    pub name: Option<String>,
    #[serde(default)]
    pub draft: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Branch {
    pub name: String,
}
