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

use crate::api::RepositoryApi;
use crate::models::{DownloadKind, DownloadRef};
use crate::platform::PlatformConfig;
use log::debug;

/// Branch assumed when nothing better can be found.
pub const FALLBACK_BRANCH: &str = "main";

/// Display name for branch downloads.
pub const LATEST_CODE_LABEL: &str = "Latest Code";

const PREFERRED_BRANCHES: [&str; 2] = ["main", "master"];

/// Pick the archive target: the latest published release, else a branch.
///
/// Never fails. Release and branch lookups that error out just move on to the
/// next candidate. `known_default_branch` comes from the repository payload
/// and saves the branch listing call when present.
pub fn resolve_download_ref(
    api: &RepositoryApi<'_>,
    config: &PlatformConfig,
    owner: &str,
    repo: &str,
    known_default_branch: Option<&str>,
) -> DownloadRef {
    if let Some(release) = latest_release_ref(api, config, owner, repo) {
        return release;
    }

    let branch = match known_default_branch.map(str::trim).filter(|b| !b.is_empty()) {
        Some(branch) => branch.to_string(),
        None => probe_branch(api, config, owner, repo),
    };

    DownloadRef {
        kind: DownloadKind::Branch,
        reference: branch,
        display_name: LATEST_CODE_LABEL.to_string(),
    }
}

fn latest_release_ref(
    api: &RepositoryApi<'_>,
    config: &PlatformConfig,
    owner: &str,
    repo: &str,
) -> Option<DownloadRef> {
    let release = match api.latest_release(config, owner, repo) {
        Ok(Some(release)) => release,
        Ok(None) => {
            debug!("No releases for {owner}/{repo}");
            return None;
        }
        Err(e) => {
            debug!("Release lookup for {owner}/{repo} failed: {e}");
            return None;
        }
    };

    let tag = release.tag_name.trim();
    if release.draft || tag.is_empty() {
        debug!("Ignoring unpublished release of {owner}/{repo}");
        return None;
    }

    let display_name = release
        .name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(tag)
        .to_string();

    Some(DownloadRef {
        kind: DownloadKind::Release,
        reference: tag.to_string(),
        display_name,
    })
}

fn probe_branch(api: &RepositoryApi<'_>, config: &PlatformConfig, owner: &str, repo: &str) -> String {
    let branches = match api.branches(config, owner, repo) {
        Ok(branches) => branches,
        Err(e) => {
            debug!("Branch listing for {owner}/{repo} failed: {e}");
            return FALLBACK_BRANCH.to_string();
        }
    };

    PREFERRED_BRANCHES
        .iter()
        .find(|preferred| branches.iter().any(|b| b.name == **preferred))
        .map(|preferred| preferred.to_string())
        .or_else(|| branches.into_iter().map(|b| b.name).find(|name| !name.is_empty()))
        .unwrap_or_else(|| FALLBACK_BRANCH.to_string())
}
