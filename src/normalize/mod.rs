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

//! Repository Data Normalizer.
//!
//! Every piece of field-presence logic for upstream payloads lives here. Each
//! API family gets one mapping function from its raw shape into
//! [`CanonicalRepository`]; the rest of the crate only ever sees the canonical
//! record.
//!
//! The download info of a freshly normalized record is
//! [`DownloadInfo::unresolved`]; the download module fills it in.

use crate::api::models::{GitHubRepository, GitLabProject, RawRepoPayload};
use crate::error::{GitEmbedError, Result};
use crate::models::{CanonicalRepository, DownloadInfo, Owner, OwnerType, Platform};
use crate::platform::PlatformConfig;
use log::trace;

/// Map a raw payload to the canonical record.
///
/// Fails with `UpstreamMalformed` only when the payload does not even name the
/// repository or its owner.
pub fn normalize(
    raw: RawRepoPayload,
    platform: Platform,
    config: &PlatformConfig,
) -> Result<CanonicalRepository> {
    let repository = match raw {
        RawRepoPayload::GitHub(data) => normalize_github(data, platform, config)?,
        RawRepoPayload::GitLab(data) => normalize_gitlab(data, platform, config)?,
    };
    trace!("Normalized {} on {platform}", repository.full_name);
    Ok(repository)
}

/// Collapse upstream account vocabulary onto the two canonical owner kinds.
///
/// When the upstream says nothing, self-hosted Gitea-style platforms default to
/// `Organization` and github.com/GitLab to `User`.
pub fn normalize_owner_type(value: Option<&str>, platform: Platform) -> OwnerType {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => match v.to_ascii_lowercase().as_str() {
            "organization" | "org" | "group" | "team" => OwnerType::Organization,
            _ => OwnerType::User,
        },
        None => match platform {
            Platform::Gitea | Platform::Forgejo | Platform::Custom => OwnerType::Organization,
            Platform::GitHub | Platform::GitLab => OwnerType::User,
        },
    }
}

fn normalize_github(
    data: GitHubRepository,
    platform: Platform,
    config: &PlatformConfig,
) -> Result<CanonicalRepository> {
    let owner_data = data.owner.unwrap_or_default();
    let upstream_full_name = non_empty(data.full_name);

    let login = non_empty(owner_data.login)
        .or_else(|| non_empty(owner_data.username))
        .or_else(|| upstream_full_name.as_deref().and_then(owner_segment))
        .ok_or_else(|| malformed("repository owner login is missing"))?;
    let name = non_empty(data.name)
        .or_else(|| upstream_full_name.as_deref().and_then(name_segment))
        .ok_or_else(|| malformed("repository name is missing"))?;

    let full_name = canonical_full_name(upstream_full_name, &login, &name);
    let html_url = non_empty(data.html_url)
        .unwrap_or_else(|| format!("{}/{full_name}", config.web_base_url));
    let clone_url = non_empty(data.clone_url).unwrap_or_else(|| format!("{html_url}.git"));

    let owner = Owner {
        avatar_url: non_empty(owner_data.avatar_url).unwrap_or_default(),
        html_url: non_empty(owner_data.html_url)
            .unwrap_or_else(|| format!("{}/{login}", config.web_base_url)),
        owner_type: normalize_owner_type(owner_data.owner_type.as_deref(), platform),
        login,
    };

    Ok(CanonicalRepository {
        name,
        full_name,
        platform,
        description: non_empty(data.description),
        language: non_empty(data.language),
        html_url,
        star_count: data.stargazers_count.or(data.stars_count).unwrap_or(0),
        fork_count: data.forks_count.or(data.forks).unwrap_or(0),
        open_issue_count: data.open_issues_count.or(data.open_issues).unwrap_or(0),
        clone_url,
        owner,
        repo_avatar_url: non_empty(data.avatar_url),
        default_branch: non_empty(data.default_branch),
        download_info: DownloadInfo::unresolved(),
        site_info: config.site.clone(),
    })
}

fn normalize_gitlab(
    data: GitLabProject,
    platform: Platform,
    config: &PlatformConfig,
) -> Result<CanonicalRepository> {
    let namespace = data.namespace.unwrap_or_default();
    let owner_data = data.owner.unwrap_or_default();
    let upstream_full_name = non_empty(data.path_with_namespace);

    let namespace_path = non_empty(namespace.path);

    let login = non_empty(namespace.name)
        .or_else(|| non_empty(owner_data.username))
        .or_else(|| namespace_path.clone())
        .or_else(|| upstream_full_name.as_deref().and_then(owner_segment))
        .ok_or_else(|| malformed("project namespace is missing"))?;
    let name = non_empty(data.name)
        .or_else(|| non_empty(data.path))
        .or_else(|| upstream_full_name.as_deref().and_then(name_segment))
        .ok_or_else(|| malformed("project name is missing"))?;

    let web_path = match (&upstream_full_name, &namespace_path) {
        (Some(path), _) => path.clone(),
        (None, Some(namespace)) => format!("{namespace}/{name}"),
        (None, None) => format!("{login}/{name}"),
    };
    let full_name = canonical_full_name(upstream_full_name, &login, &name);
    let html_url =
        non_empty(data.web_url).unwrap_or_else(|| format!("{}/{web_path}", config.web_base_url));
    let clone_url = non_empty(data.http_url_to_repo).unwrap_or_else(|| format!("{html_url}.git"));

    let owner_kind = non_empty(namespace.kind).or(non_empty(owner_data.owner_type));
    let owner = Owner {
        avatar_url: non_empty(namespace.avatar_url)
            .or_else(|| non_empty(owner_data.avatar_url))
            .unwrap_or_default(),
        html_url: non_empty(namespace.web_url)
            .or_else(|| non_empty(owner_data.web_url))
            .unwrap_or_else(|| {
                let segment = namespace_path.as_deref().unwrap_or(login.as_str());
                format!("{}/{segment}", config.web_base_url)
            }),
        owner_type: normalize_owner_type(owner_kind.as_deref(), platform),
        login,
    };

    Ok(CanonicalRepository {
        name,
        full_name,
        platform,
        description: non_empty(data.description),
        language: non_empty(data.language),
        html_url,
        star_count: data.star_count.unwrap_or(0),
        fork_count: data.forks_count.unwrap_or(0),
        open_issue_count: data.open_issues_count.unwrap_or(0),
        clone_url,
        owner,
        repo_avatar_url: non_empty(data.avatar_url),
        default_branch: non_empty(data.default_branch),
        download_info: DownloadInfo::unresolved(),
        site_info: config.site.clone(),
    })
}

/// Keep the upstream `owner/name` when it has exactly one separator, else rebuild it.
fn canonical_full_name(upstream: Option<String>, login: &str, name: &str) -> String {
    match upstream {
        Some(full_name) if is_owner_slash_name(&full_name) => full_name,
        _ => format!("{}/{name}", last_segment(login)),
    }
}

fn is_owner_slash_name(value: &str) -> bool {
    match value.split_once('/') {
        Some((owner, name)) => !owner.is_empty() && !name.is_empty() && !name.contains('/'),
        None => false,
    }
}

fn last_segment(value: &str) -> &str {
    value.rsplit('/').next().unwrap_or(value)
}

fn owner_segment(full_name: &str) -> Option<String> {
    let (owner, _) = full_name.rsplit_once('/')?;
    Some(owner.to_string()).filter(|o| !o.is_empty())
}

fn name_segment(full_name: &str) -> Option<String> {
    let (_, name) = full_name.rsplit_once('/')?;
    Some(name.to_string()).filter(|n| !n.is_empty())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn malformed(reason: &str) -> GitEmbedError {
    GitEmbedError::UpstreamMalformed(reason.to_string())
}
