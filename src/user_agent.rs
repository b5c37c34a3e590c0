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

//! User-Agent strings for outbound HTTP requests.
//!
//! Every client in the crate identifies itself through these helpers so that
//! upstream hosts see one consistent product token per feature.

/// The package version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// User-Agent for repository API calls (metadata, releases, branches)
pub fn api_client() -> String {
    format!("git-embed/api/{VERSION}")
}

/// User-Agent for the site title probe
pub fn site_probe_client() -> String {
    format!("git-embed/site-probe/{VERSION}")
}

/// User-Agent for avatar pre-warming
pub fn avatar_client() -> String {
    format!("git-embed/avatar/{VERSION}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_agents() {
        assert_eq!(api_client(), format!("git-embed/api/{VERSION}"));
        assert_eq!(site_probe_client(), format!("git-embed/site-probe/{VERSION}"));
        assert_eq!(avatar_client(), format!("git-embed/avatar/{VERSION}"));
    }

    #[test]
    fn test_version_format() {
        let parts: Vec<&str> = VERSION.split('.').collect();
        assert_eq!(
            parts.len(),
            3,
            "Version should have 3 parts (major.minor.patch)"
        );

        for part in parts {
            assert!(
                part.parse::<u32>().is_ok(),
                "Version part should be a number"
            );
        }
    }
}
