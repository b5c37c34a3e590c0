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

pub mod cache;
pub mod fetch;
pub mod platforms;

use crate::models::RepositoryRequest;
use clap::Args;

/// Repository coordinates shared by every command that targets one repository.
#[derive(Args, Debug, Clone)]
pub struct RepositoryArgs {
    /// Hosting platform (github, gitlab, gitea, forgejo, custom)
    pub platform: String,

    /// Repository owner, user or organization
    pub owner: String,

    /// Repository name
    pub repo: String,

    /// Host of a self-hosted instance (e.g., git.example.com)
    #[arg(long, value_name = "DOMAIN")]
    pub domain: Option<String>,

    /// Display name to use instead of the probed site title
    #[arg(long, value_name = "NAME")]
    pub site_name: Option<String>,
}

impl RepositoryArgs {
    pub fn to_request(&self) -> RepositoryRequest {
        let mut request = RepositoryRequest::new(&self.platform, &self.owner, &self.repo);
        if let Some(domain) = &self.domain {
            request = request.with_custom_domain(domain);
        }
        if let Some(site_name) = &self.site_name {
            request = request.with_custom_site_name(site_name);
        }
        request
    }
}
