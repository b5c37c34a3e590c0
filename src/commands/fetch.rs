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

use crate::config::GitEmbedConfig;
use crate::error::{ErrorContext, Result};
use crate::models::{CanonicalRepository, RepositoryRequest};
use crate::resolver::RepositoryResolver;
use colored::*;
use serde_json::{Value, json};

pub struct FetchCommand {
    resolver: RepositoryResolver,
}

impl FetchCommand {
    pub fn new(config: &GitEmbedConfig) -> Self {
        Self {
            resolver: RepositoryResolver::from_config(config),
        }
    }

    pub fn with_resolver(resolver: RepositoryResolver) -> Self {
        Self { resolver }
    }

    pub fn execute(&self, request: &RepositoryRequest, json: bool) -> Result<()> {
        let result = self.resolver.fetch_repository(request);

        if json {
            println!("{}", serde_json::to_string_pretty(&json_envelope(&result))?);
            return result.map(|_| ());
        }

        let repository = result?;
        print!("{}", render_repository(&repository));
        Ok(())
    }
}

/// `{"success": true, "data": record}` or `{"success": false, "data": message}`.
///
/// Failures carry only the caller-facing message.
pub fn json_envelope(result: &Result<CanonicalRepository>) -> Value {
    match result {
        Ok(repository) => json!({ "success": true, "data": repository }),
        Err(e) => json!({ "success": false, "data": ErrorContext::new(e).user_message }),
    }
}

/// Human readable card.
pub fn render_repository(repo: &CanonicalRepository) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{} {}\n",
        repo.full_name.bold(),
        format!("[{}]", repo.platform.badge_label()).dimmed()
    ));
    if let Some(description) = &repo.description {
        out.push_str(&format!("{description}\n"));
    }
    out.push('\n');

    out.push_str(&format!(
        "  {:<10} @{} ({})\n",
        "Owner:",
        repo.owner.login,
        repo.owner.owner_type
    ));
    if let Some(language) = &repo.language {
        out.push_str(&format!("  {:<10} {language}\n", "Language:"));
    }
    out.push_str(&format!(
        "  {:<10} {}\n",
        "Stars:",
        repo.star_count.to_string().yellow()
    ));
    out.push_str(&format!(
        "  {:<10} {} {}\n",
        "Forks:",
        repo.fork_count.to_string().cyan(),
        repo.forks_url().dimmed()
    ));
    out.push_str(&format!(
        "  {:<10} {} {}\n",
        "Issues:",
        repo.open_issue_count.to_string().cyan(),
        repo.issues_url().dimmed()
    ));
    out.push_str(&format!("  {:<10} {}\n", "URL:", repo.html_url));
    out.push_str(&format!("  {:<10} {}\n", "Clone:", repo.clone_url));

    let download = &repo.download_info;
    if download.is_resolved() {
        out.push_str(&format!(
            "  {:<10} {} ({} {})\n",
            "Download:",
            download.url.green(),
            download.kind.as_str(),
            download.display_name
        ));
        out.push_str(&format!("  {:<10} {}\n", "Filename:", download.filename));
    } else {
        out.push_str(&format!("  {:<10} {}\n", "Download:", "unavailable".red()));
    }

    out.push_str(&format!(
        "  {:<10} {} ({})\n",
        "Site:",
        repo.site_info.name,
        repo.site_info.url
    ));

    out
}
