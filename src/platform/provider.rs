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

use crate::error::{GitEmbedError, Result};
use crate::models::{ApiFamily, Platform, SiteInfo};
use crate::platform::site_name::SiteNameProbe;

const GITHUB_API_BASE: &str = "https://api.github.com";
const GITHUB_WEB_BASE: &str = "https://github.com";

/// Endpoints and display metadata for one hosting site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformConfig {
    pub platform: Platform,
    pub api_base_url: String,
    pub web_base_url: String,
    pub site: SiteInfo,
}

impl PlatformConfig {
    pub fn api_family(&self) -> ApiFamily {
        self.platform.api_family()
    }

    pub fn site_display_name(&self) -> &str {
        &self.site.name
    }
}

/// Strip surrounding whitespace, an `http://`/`https://` scheme and trailing slashes.
pub fn normalize_domain(domain: &str) -> String {
    let trimmed = domain.trim();
    let lower = trimmed.to_ascii_lowercase();
    let without_scheme = if lower.starts_with("https://") {
        &trimmed["https://".len()..]
    } else if lower.starts_with("http://") {
        &trimmed["http://".len()..]
    } else {
        trimmed
    };
    without_scheme.trim_end_matches('/').to_string()
}

/// Build the config for `platform`.
///
/// Self-hosted platforms need `custom_domain`. The site name is the explicit
/// override when given, else whatever `probe` comes up with.
pub fn get_config(
    platform: Platform,
    custom_domain: Option<&str>,
    custom_site_name: Option<&str>,
    probe: &dyn SiteNameProbe,
) -> Result<PlatformConfig> {
    if platform == Platform::GitHub {
        return Ok(github_config());
    }

    let domain = custom_domain
        .map(normalize_domain)
        .filter(|domain| !domain.is_empty())
        .ok_or(GitEmbedError::MissingCustomDomain(platform))?;

    let site_name = match custom_site_name.map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => probe.site_name(&domain, platform.fallback_site_name()),
    };

    let web_base_url = format!("https://{domain}");
    let (api_base_url, favicon_url, accent_color) = match platform {
        Platform::GitLab => (
            format!("{web_base_url}/api/v4"),
            format!("{web_base_url}/assets/favicon.ico"),
            "#fc6d26",
        ),
        Platform::Gitea => (
            format!("{web_base_url}/api/v1"),
            format!("{web_base_url}/assets/img/favicon.png"),
            "#609926",
        ),
        Platform::Forgejo => (
            format!("{web_base_url}/api/v1"),
            format!("{web_base_url}/assets/img/favicon.png"),
            "#fb923c",
        ),
        Platform::Custom | Platform::GitHub => (
            format!("{web_base_url}/api/v1"),
            format!("{web_base_url}/favicon.ico"),
            "#6366f1",
        ),
    };

    Ok(PlatformConfig {
        platform,
        api_base_url,
        web_base_url: web_base_url.clone(),
        site: SiteInfo {
            name: site_name,
            url: web_base_url,
            favicon_url,
            accent_color: accent_color.to_string(),
        },
    })
}

fn github_config() -> PlatformConfig {
    PlatformConfig {
        platform: Platform::GitHub,
        api_base_url: GITHUB_API_BASE.to_string(),
        web_base_url: GITHUB_WEB_BASE.to_string(),
        site: SiteInfo {
            name: Platform::GitHub.fallback_site_name().to_string(),
            url: GITHUB_WEB_BASE.to_string(),
            favicon_url: format!("{GITHUB_WEB_BASE}/favicon.ico"),
            accent_color: "#24292f".to_string(),
        },
    }
}
