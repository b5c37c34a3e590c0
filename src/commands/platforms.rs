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

use crate::error::Result;
use crate::models::{ApiFamily, Platform};
use colored::*;

pub struct PlatformsCommand;

impl PlatformsCommand {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self) -> Result<()> {
        println!("Supported platforms:");
        for platform in Platform::ALL {
            println!("{}", describe(platform));
        }
        Ok(())
    }
}

impl Default for PlatformsCommand {
    fn default() -> Self {
        Self::new()
    }
}

fn describe(platform: Platform) -> String {
    let api = match platform.api_family() {
        ApiFamily::GitHub => "GitHub REST API",
        ApiFamily::GitLab => "GitLab API v4",
        ApiFamily::Gitea => "Gitea API v1",
    };
    let domain = if platform.requires_domain() {
        "--domain required".yellow().to_string()
    } else {
        "github.com".to_string()
    };
    format!(
        "  {:<8} {:<12} {:<16} {domain}",
        platform.id().bold(),
        platform.fallback_site_name(),
        api
    )
}
