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

//! Canned upstream payloads for integration tests

#[allow(dead_code)]
pub const GITHUB_REPO: &str = r#"{
    "name": "widget",
    "full_name": "octo/widget",
    "description": "A tiny widget",
    "html_url": "https://github.com/octo/widget",
    "clone_url": "https://github.com/octo/widget.git",
    "language": "Rust",
    "stargazers_count": 42,
    "forks_count": 7,
    "forks": 7,
    "open_issues_count": 3,
    "open_issues": 3,
    "default_branch": "main",
    "owner": {
        "login": "octo",
        "avatar_url": "https://avatars.githubusercontent.com/u/1?v=4",
        "html_url": "https://github.com/octo",
        "type": "Organization"
    }
}"#;

#[allow(dead_code)]
pub const GITHUB_RELEASE: &str = r#"{
    "tag_name": "v2.3.0",
    "name": "Widget 2.3",
    "draft": false,
    "prerelease": false
}"#;

#[allow(dead_code)]
pub const GITLAB_PROJECT: &str = r#"{
    "id": 99,
    "name": "proj",
    "path": "proj",
    "path_with_namespace": "group/proj",
    "description": null,
    "web_url": "https://gitlab.example.com/group/proj",
    "http_url_to_repo": "https://gitlab.example.com/group/proj.git",
    "star_count": 7,
    "forks_count": 1,
    "open_issues_count": 0,
    "default_branch": "main",
    "namespace": {
        "name": "Group",
        "path": "group",
        "kind": "group",
        "avatar_url": "https://gitlab.example.com/uploads/group.png",
        "web_url": "https://gitlab.example.com/groups/group"
    }
}"#;

#[allow(dead_code)]
pub const GITLAB_RELEASES: &str = r#"[
    {"tag_name": "v1.4.0", "name": ""},
    {"tag_name": "v1.3.0", "name": "Older"}
]"#;
