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

use crate::cache::{CacheStore, site_name_key};
use crate::http::{HttpClient, read_body};
use crate::platform::html::extract_title;
use crate::user_agent;
use log::debug;
use serde_json::Value;
use std::time::Duration;

/// Titles this long or longer are treated as noise rather than a site name.
const MAX_TITLE_CHARS: usize = 100;

/// Source of human-readable names for self-hosted sites.
///
/// Implementations must always hand back something displayable.
pub trait SiteNameProbe {
    fn site_name(&self, domain: &str, fallback: &str) -> String;
}

/// Scrapes `https://{domain}/` for its `<title>`, behind the cache.
pub struct SiteNameProber<'a> {
    http: &'a dyn HttpClient,
    cache: &'a dyn CacheStore,
    timeout: Duration,
    success_ttl: Duration,
    fallback_ttl: Duration,
}

impl<'a> SiteNameProber<'a> {
    pub fn new(http: &'a dyn HttpClient, cache: &'a dyn CacheStore) -> Self {
        Self {
            http,
            cache,
            timeout: Duration::from_secs(10),
            success_ttl: Duration::from_secs(86_400),
            fallback_ttl: Duration::from_secs(3_600),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_ttls(mut self, success_ttl: Duration, fallback_ttl: Duration) -> Self {
        self.success_ttl = success_ttl;
        self.fallback_ttl = fallback_ttl;
        self
    }

    fn fetch_title(&self, domain: &str) -> Option<String> {
        let url = format!("https://{domain}/");
        let agent = user_agent::site_probe_client();

        let mut response = match self
            .http
            .get(&url, &[("User-Agent", agent.as_str())], self.timeout)
        {
            Ok(response) => response,
            Err(e) => {
                debug!("Site name probe for {domain} failed: {e}");
                return None;
            }
        };

        if response.status() != 200 {
            debug!(
                "Site name probe for {domain} returned HTTP {}",
                response.status()
            );
            return None;
        }

        let body = match read_body(response.as_mut()) {
            Ok(body) => body,
            Err(e) => {
                debug!("Failed to read {url}: {e}");
                return None;
            }
        };

        extract_title(&body).filter(|title| title.chars().count() < MAX_TITLE_CHARS)
    }

    fn remember(&self, key: &str, name: &str, ttl: Duration) {
        if let Err(e) = self.cache.set(key, Value::String(name.to_string()), ttl) {
            debug!("Failed to cache site name under {key}: {e}");
        }
    }
}

impl SiteNameProbe for SiteNameProber<'_> {
    fn site_name(&self, domain: &str, fallback: &str) -> String {
        let key = site_name_key(domain);

        match self.cache.get(&key) {
            Ok(Some(Value::String(cached))) => return cached,
            Ok(_) => {}
            Err(e) => debug!("Site name cache lookup failed for {domain}: {e}"),
        }

        match self.fetch_title(domain) {
            Some(title) => {
                self.remember(&key, &title, self.success_ttl);
                title
            }
            None => {
                // Shorter TTL so a transient failure is retried soon
                self.remember(&key, fallback, self.fallback_ttl);
                fallback.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoryStore;
    use crate::test::mock_http::MockHttpClient;

    const DOMAIN: &str = "git.example.com";
    const URL: &str = "https://git.example.com/";

    #[test]
    fn test_probe_uses_page_title() {
        let http = MockHttpClient::new().respond(
            URL,
            200,
            "<html><head><title>Example &amp; Co Git</title></head></html>",
        );
        let cache = MemoryStore::new();
        let prober = SiteNameProber::new(&http, &cache);

        assert_eq!(prober.site_name(DOMAIN, "Gitea"), "Example & Co Git");
        assert_eq!(
            cache.get(&site_name_key(DOMAIN)).unwrap(),
            Some(Value::String("Example & Co Git".to_string()))
        );
    }

    #[test]
    fn test_probe_is_cached() {
        let http = MockHttpClient::new().respond(URL, 200, "<title>Forge</title>");
        let cache = MemoryStore::new();
        let prober = SiteNameProber::new(&http, &cache);

        assert_eq!(prober.site_name(DOMAIN, "Gitea"), "Forge");
        assert_eq!(prober.site_name(DOMAIN, "Gitea"), "Forge");
        assert_eq!(http.request_count(URL), 1);
    }

    #[test]
    fn test_probe_falls_back_on_http_error() {
        let http = MockHttpClient::new().respond(URL, 503, "<title>Down</title>");
        let cache = MemoryStore::new();
        let prober = SiteNameProber::new(&http, &cache);

        assert_eq!(prober.site_name(DOMAIN, "Forgejo"), "Forgejo");
        // Fallback is cached too
        assert_eq!(
            cache.get(&site_name_key(DOMAIN)).unwrap(),
            Some(Value::String("Forgejo".to_string()))
        );
    }

    #[test]
    fn test_probe_falls_back_on_transport_error() {
        let http = MockHttpClient::new();
        let cache = MemoryStore::new();
        let prober = SiteNameProber::new(&http, &cache);

        assert_eq!(prober.site_name(DOMAIN, "Git Service"), "Git Service");
        assert_eq!(http.requests(), vec![URL.to_string()]);
    }

    #[test]
    fn test_probe_rejects_missing_or_long_titles() {
        let long_title = format!("<title>{}</title>", "x".repeat(100));
        let http = MockHttpClient::new()
            .respond(URL, 200, &long_title)
            .respond("https://plain.example.com/", 200, "<body>hi</body>");
        let cache = MemoryStore::new();
        let prober = SiteNameProber::new(&http, &cache);

        assert_eq!(prober.site_name(DOMAIN, "Gitea"), "Gitea");
        assert_eq!(prober.site_name("plain.example.com", "GitLab"), "GitLab");
    }

    #[test]
    fn test_title_just_under_limit_is_accepted() {
        let title = "y".repeat(99);
        let http = MockHttpClient::new().respond(URL, 200, &format!("<title>{title}</title>"));
        let cache = MemoryStore::new();
        let prober = SiteNameProber::new(&http, &cache);

        assert_eq!(prober.site_name(DOMAIN, "Gitea"), title);
    }

    #[test]
    fn test_expired_fallback_is_retried() {
        let http = MockHttpClient::new();
        let cache = MemoryStore::new();
        let prober =
            SiteNameProber::new(&http, &cache).with_ttls(Duration::from_secs(60), Duration::ZERO);

        prober.site_name(DOMAIN, "Gitea");
        prober.site_name(DOMAIN, "Gitea");
        assert_eq!(http.request_count(URL), 2);
    }
}
