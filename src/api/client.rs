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

use crate::api::models::{Branch, GitHubRepository, GitLabProject, RawRepoPayload, Release};
use crate::error::{GitEmbedError, Result};
use crate::http::{HttpClient, read_body};
use crate::models::ApiFamily;
use crate::platform::PlatformConfig;
use log::{debug, trace};
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::form_urlencoded;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);
const ACCEPT_JSON: (&str, &str) = ("Accept", "application/json");

/// Read-only client for the repository REST endpoints of every supported host.
///
/// No retries: a failed call is reported once and the caller decides how to degrade.
pub struct RepositoryApi<'a> {
    http: &'a dyn HttpClient,
    timeout: Duration,
}

impl<'a> RepositoryApi<'a> {
    pub fn new(http: &'a dyn HttpClient) -> Self {
        Self {
            http,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Fetch repository metadata, parsed in the shape of the host's API family.
    pub fn fetch_repository(
        &self,
        config: &PlatformConfig,
        owner: &str,
        repo: &str,
    ) -> Result<RawRepoPayload> {
        let url = repository_url(config, owner, repo);
        match config.api_family() {
            ApiFamily::GitLab => self.get_json::<GitLabProject>(&url).map(RawRepoPayload::GitLab),
            ApiFamily::GitHub | ApiFamily::Gitea => self
                .get_json::<GitHubRepository>(&url)
                .map(RawRepoPayload::GitHub),
        }
    }

    /// Latest release, or `None` when the host answers 404.
    ///
    /// GitLab has no "latest" endpoint; its release list is newest first.
    pub fn latest_release(
        &self,
        config: &PlatformConfig,
        owner: &str,
        repo: &str,
    ) -> Result<Option<Release>> {
        let url = releases_url(config, owner, repo);
        match config.api_family() {
            ApiFamily::GitLab => {
                let releases: Option<Vec<Release>> = self.get_optional_json(&url)?;
                Ok(releases.and_then(|list| list.into_iter().next()))
            }
            ApiFamily::GitHub | ApiFamily::Gitea => self.get_optional_json(&url),
        }
    }

    pub fn branches(&self, config: &PlatformConfig, owner: &str, repo: &str) -> Result<Vec<Branch>> {
        self.get_json(&branches_url(config, owner, repo))
    }

    fn get_optional_json<T: DeserializeOwned>(&self, url: &str) -> Result<Option<T>> {
        match self.get_body(url, true)? {
            Some(body) => parse_json(url, &body).map(Some),
            None => Ok(None),
        }
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let body = self.get_body(url, false)?.ok_or_else(|| {
            GitEmbedError::UpstreamUnavailable(format!("HTTP 404 from {url}"))
        })?;
        parse_json(url, &body)
    }

    /// `Ok(None)` only for a 404 when `missing_ok` is set; any other non-200 is an error.
    fn get_body(&self, url: &str, missing_ok: bool) -> Result<Option<String>> {
        debug!("GET {url}");

        let mut response = self
            .http
            .get(url, &[ACCEPT_JSON], self.timeout)
            .map_err(|e| match e {
                GitEmbedError::UpstreamUnavailable(_) => e,
                other => GitEmbedError::UpstreamUnavailable(format!("{url}: {other}")),
            })?;

        let status = response.status();
        if status == 404 && missing_ok {
            debug!("{url} not found, treating as absent");
            return Ok(None);
        }
        if status != 200 {
            return Err(GitEmbedError::UpstreamUnavailable(format!(
                "HTTP {status} from {url}"
            )));
        }

        let body = read_body(response.as_mut())
            .map_err(|e| GitEmbedError::UpstreamUnavailable(format!("{url}: {e}")))?;
        trace!("Response from {url}: {body}");
        Ok(Some(body))
    }
}

fn parse_json<T: DeserializeOwned>(url: &str, body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| {
        GitEmbedError::UpstreamMalformed(format!("Failed to parse response from {url}: {e}"))
    })
}

/// GitLab addresses a project by its URL-encoded `namespace/name` path.
fn gitlab_project_id(owner: &str, repo: &str) -> String {
    let path = format!("{owner}/{repo}");
    form_urlencoded::byte_serialize(path.as_bytes()).collect()
}

fn repository_base(config: &PlatformConfig, owner: &str, repo: &str) -> String {
    match config.api_family() {
        ApiFamily::GitLab => format!(
            "{}/projects/{}",
            config.api_base_url,
            gitlab_project_id(owner, repo)
        ),
        ApiFamily::GitHub | ApiFamily::Gitea => {
            format!("{}/repos/{owner}/{repo}", config.api_base_url)
        }
    }
}

pub fn repository_url(config: &PlatformConfig, owner: &str, repo: &str) -> String {
    repository_base(config, owner, repo)
}

pub fn releases_url(config: &PlatformConfig, owner: &str, repo: &str) -> String {
    let base = repository_base(config, owner, repo);
    match config.api_family() {
        ApiFamily::GitLab => format!("{base}/releases"),
        ApiFamily::GitHub | ApiFamily::Gitea => format!("{base}/releases/latest"),
    }
}

pub fn branches_url(config: &PlatformConfig, owner: &str, repo: &str) -> String {
    let base = repository_base(config, owner, repo);
    match config.api_family() {
        ApiFamily::GitLab => format!("{base}/repository/branches"),
        ApiFamily::GitHub | ApiFamily::Gitea => format!("{base}/branches"),
    }
}
