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

use crate::models::{ApiFamily, DownloadInfo, DownloadRef};
use crate::platform::PlatformConfig;

const REFS_HEADS: &str = "refs/heads/";
const REFS_TAGS: &str = "refs/tags/";

/// Drop a fully qualified `refs/heads/` or `refs/tags/` prefix.
pub fn strip_ref_prefix(reference: &str) -> &str {
    reference
        .strip_prefix(REFS_HEADS)
        .or_else(|| reference.strip_prefix(REFS_TAGS))
        .unwrap_or(reference)
}

/// Archive URL for `reference`, or an empty string when there is no ref to point at.
pub fn build_archive_url(
    config: &PlatformConfig,
    owner: &str,
    repo: &str,
    reference: &str,
    is_release: bool,
) -> String {
    let reference = strip_ref_prefix(reference.trim());
    if reference.is_empty() {
        return String::new();
    }

    match config.api_family() {
        ApiFamily::GitHub => {
            let kind = if is_release { "tags" } else { "heads" };
            format!(
                "{}/{owner}/{repo}/archive/refs/{kind}/{reference}.zip",
                config.web_base_url
            )
        }
        ApiFamily::GitLab => format!(
            "{}/{owner}/{repo}/-/archive/{reference}/{repo}-{reference}.zip",
            config.web_base_url
        ),
        ApiFamily::Gitea => format!(
            "{}/repos/{owner}/{repo}/archive/{reference}.zip",
            config.api_base_url
        ),
    }
}

/// `{repo}-{ref}.zip` with both parts reduced to filename-safe characters.
///
/// Release tags lose one leading `v`.
pub fn archive_filename(repo: &str, reference: &str, is_release: bool) -> String {
    let mut reference = strip_ref_prefix(reference.trim());
    if is_release {
        reference = strip_version_prefix(reference);
    }
    format!("{}-{}.zip", sanitize(repo), sanitize(reference))
}

pub fn build_download_info(
    config: &PlatformConfig,
    owner: &str,
    repo: &str,
    download_ref: &DownloadRef,
) -> DownloadInfo {
    let is_release = download_ref.is_release();
    let url = build_archive_url(config, owner, repo, &download_ref.reference, is_release);
    let filename = if url.is_empty() {
        String::new()
    } else {
        archive_filename(repo, &download_ref.reference, is_release)
    };

    DownloadInfo {
        kind: download_ref.kind,
        reference: download_ref.reference.clone(),
        display_name: download_ref.display_name.clone(),
        url,
        filename,
    }
}

fn strip_version_prefix(tag: &str) -> &str {
    tag.strip_prefix('v').unwrap_or(tag)
}

fn sanitize(segment: &str) -> String {
    segment
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '-'
            }
        })
        .collect()
}
