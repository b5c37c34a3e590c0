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

use crate::cache::{CacheStore, avatar_key};
use crate::http::HttpClient;
use crate::user_agent;
use log::debug;
use serde_json::Value;
use std::time::Duration;

/// Record that an avatar URL answered, so renderers can trust it for a while.
///
/// Best effort: returns whether a marker is present afterwards and never
/// reports failure to the caller. A URL that already has a marker is not
/// requested again.
pub fn prewarm_avatar(
    http: &dyn HttpClient,
    cache: &dyn CacheStore,
    avatar_url: &str,
    ttl: Duration,
    timeout: Duration,
) -> bool {
    if avatar_url.is_empty() {
        return false;
    }

    let key = avatar_key(avatar_url);
    match cache.get(&key) {
        Ok(Some(_)) => return true,
        Ok(None) => {}
        Err(e) => debug!("Avatar marker lookup failed for {avatar_url}: {e}"),
    }

    let agent = user_agent::avatar_client();
    let response = match http.get(avatar_url, &[("User-Agent", agent.as_str())], timeout) {
        Ok(response) => response,
        Err(e) => {
            debug!("Avatar pre-warm request failed for {avatar_url}: {e}");
            return false;
        }
    };

    if response.status() != 200 {
        debug!(
            "Avatar pre-warm got HTTP {} for {avatar_url}",
            response.status()
        );
        return false;
    }

    match cache.set(&key, Value::Bool(true), ttl) {
        Ok(()) => true,
        Err(e) => {
            debug!("Failed to store avatar marker for {avatar_url}: {e}");
            false
        }
    }
}
