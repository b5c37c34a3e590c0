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

//! Page title extraction for the site name probe.

use regex::Regex;
use std::sync::OnceLock;

static TITLE_PATTERN: OnceLock<Option<Regex>> = OnceLock::new();

fn title_pattern() -> Option<&'static Regex> {
    TITLE_PATTERN
        .get_or_init(|| Regex::new(r"(?i)<title[^>]*>([^<]+)</title>").ok())
        .as_ref()
}

/// Text of the first `<title>` element, entity-decoded and trimmed.
pub fn extract_title(html: &str) -> Option<String> {
    let captures = title_pattern()?.captures(html)?;
    let raw = captures.get(1)?.as_str();
    let title = html_escape::decode_html_entities(raw).trim().to_string();
    if title.is_empty() { None } else { Some(title) }
}
