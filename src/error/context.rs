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

use crate::error::GitEmbedError;
use std::fmt;

pub const MSG_REPOSITORY_REQUIRED: &str = "Repository information required";
pub const MSG_FETCH_FAILED: &str = "Failed to fetch repository data";

/// Caller-facing view of an error.
///
/// `user_message` is the only text meant to leave the process boundary (JSON
/// relay, rendered card). `details` carries transport or parse specifics and
/// is only surfaced through debug logging.
pub struct ErrorContext<'a> {
    pub error: &'a GitEmbedError,
    pub user_message: String,
    pub suggestion: Option<String>,
    pub details: Option<String>,
}

impl<'a> ErrorContext<'a> {
    pub fn new(error: &'a GitEmbedError) -> Self {
        let (user_message, suggestion, details) = match error {
            GitEmbedError::MissingRepositoryIdentity => (
                MSG_REPOSITORY_REQUIRED.to_string(),
                Some("Provide both the repository owner and the repository name.".to_string()),
                None,
            ),
            GitEmbedError::MissingCustomDomain(platform) => (
                format!("Custom domain required for {}", platform.display_name()),
                Some(format!(
                    "Pass the host of your {} instance with --domain (e.g., --domain \
                     git.example.com).",
                    platform.display_name()
                )),
                None,
            ),
            GitEmbedError::UnsupportedPlatform(name) => (
                MSG_FETCH_FAILED.to_string(),
                Some("Supported platforms: github, gitlab, gitea, forgejo, custom.".to_string()),
                Some(format!("Unknown platform: {name}")),
            ),
            GitEmbedError::UpstreamUnavailable(msg) => (
                MSG_FETCH_FAILED.to_string(),
                Some(
                    "Check that the repository exists and is public, and that the host is \
                     reachable."
                        .to_string(),
                ),
                Some(format!("Upstream request failed: {msg}")),
            ),
            GitEmbedError::UpstreamMalformed(msg) => (
                MSG_FETCH_FAILED.to_string(),
                Some(
                    "The host did not answer like a GitHub, GitLab or Gitea compatible API. \
                     Check the selected platform."
                        .to_string(),
                ),
                Some(format!("Unusable payload: {msg}")),
            ),
            GitEmbedError::Http(http_err) => {
                let error_string = http_err.to_string();
                let suggestion = if error_string.contains("timeout")
                    || error_string.contains("Timeout")
                {
                    Some("The host took too long to answer. Try again later.".to_string())
                } else {
                    Some("Check your internet connection and try again.".to_string())
                };
                (
                    MSG_FETCH_FAILED.to_string(),
                    suggestion,
                    Some(format!("HTTP error: {http_err}")),
                )
            }
            GitEmbedError::Json(json_err) => (
                MSG_FETCH_FAILED.to_string(),
                None,
                Some(format!("JSON error: {json_err}")),
            ),
            GitEmbedError::CacheStorage(msg) => (
                error.to_string(),
                Some("Run 'git-embed cache clear-all' to reset the cache directory.".to_string()),
                Some(msg.clone()),
            ),
            GitEmbedError::ConfigError(_) | GitEmbedError::InvalidConfig(_) => (
                error.to_string(),
                Some(
                    "Check config.toml in GIT_EMBED_HOME and any GIT_EMBED_* environment \
                     variables."
                        .to_string(),
                ),
                None,
            ),
            GitEmbedError::Io(io_err) => {
                let suggestion = match io_err.kind() {
                    std::io::ErrorKind::PermissionDenied => {
                        Some("Check permissions on the cache directory.".to_string())
                    }
                    _ => None,
                };
                (
                    error.to_string(),
                    suggestion,
                    Some(format!("I/O error: {io_err}")),
                )
            }
        };

        ErrorContext {
            error,
            user_message,
            suggestion,
            details,
        }
    }
}

impl<'a> fmt::Display for ErrorContext<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error: {}", self.user_message)?;

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}
