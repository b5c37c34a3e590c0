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

use crate::api::client::{RepositoryApi, branches_url, releases_url, repository_url};
use crate::api::models::RawRepoPayload;
use crate::error::GitEmbedError;
use crate::models::Platform;
use crate::test::fixtures::{
    github_repo_json, gitlab_project_json, platform_config,
};
use crate::test::mock_http::MockHttpClient;

#[test]
fn test_github_family_urls() {
    let github = platform_config(Platform::GitHub, None);
    assert_eq!(
        repository_url(&github, "octo", "widget"),
        "https://api.github.com/repos/octo/widget"
    );
    assert_eq!(
        releases_url(&github, "octo", "widget"),
        "https://api.github.com/repos/octo/widget/releases/latest"
    );
    assert_eq!(
        branches_url(&github, "octo", "widget"),
        "https://api.github.com/repos/octo/widget/branches"
    );

    let forgejo = platform_config(Platform::Forgejo, Some("codeberg.org"));
    assert_eq!(
        repository_url(&forgejo, "team", "tool"),
        "https://codeberg.org/api/v1/repos/team/tool"
    );
    assert_eq!(
        releases_url(&forgejo, "team", "tool"),
        "https://codeberg.org/api/v1/repos/team/tool/releases/latest"
    );
}

#[test]
fn test_gitlab_urls_encode_project_path() {
    let gitlab = platform_config(Platform::GitLab, Some("gitlab.example.com"));
    assert_eq!(
        repository_url(&gitlab, "group", "proj"),
        "https://gitlab.example.com/api/v4/projects/group%2Fproj"
    );
    assert_eq!(
        releases_url(&gitlab, "group/sub", "proj"),
        "https://gitlab.example.com/api/v4/projects/group%2Fsub%2Fproj/releases"
    );
    assert_eq!(
        branches_url(&gitlab, "group", "proj"),
        "https://gitlab.example.com/api/v4/projects/group%2Fproj/repository/branches"
    );
}

#[test]
fn test_fetch_repository_parses_per_family() {
    let github = platform_config(Platform::GitHub, None);
    let gitlab = platform_config(Platform::GitLab, Some("gitlab.example.com"));
    let http = MockHttpClient::new()
        .respond(
            "https://api.github.com/repos/octo/widget",
            200,
            &github_repo_json(),
        )
        .respond(
            "https://gitlab.example.com/api/v4/projects/group%2Fproj",
            200,
            &gitlab_project_json(),
        );
    let api = RepositoryApi::new(&http);

    match api.fetch_repository(&github, "octo", "widget").unwrap() {
        RawRepoPayload::GitHub(repo) => {
            assert_eq!(repo.stargazers_count, Some(42));
            assert_eq!(repo.full_name.as_deref(), Some("octo/widget"));
        }
        other => panic!("expected GitHub payload, got {other:?}"),
    }

    match api.fetch_repository(&gitlab, "group", "proj").unwrap() {
        RawRepoPayload::GitLab(project) => {
            assert_eq!(project.star_count, Some(7));
            assert_eq!(
                project.namespace.and_then(|ns| ns.kind).as_deref(),
                Some("group")
            );
        }
        other => panic!("expected GitLab payload, got {other:?}"),
    }
}

#[test]
fn test_fetch_repository_non_200_is_unavailable() {
    let github = platform_config(Platform::GitHub, None);
    let http = MockHttpClient::new().respond(
        "https://api.github.com/repos/octo/missing",
        404,
        r#"{"message":"Not Found"}"#,
    );
    let api = RepositoryApi::new(&http);

    let result = api.fetch_repository(&github, "octo", "missing");
    assert!(matches!(result, Err(GitEmbedError::UpstreamUnavailable(_))));

    let result = api.fetch_repository(&github, "octo", "unrouted");
    assert!(matches!(result, Err(GitEmbedError::UpstreamUnavailable(_))));
}

#[test]
fn test_fetch_repository_bad_json_is_malformed() {
    let github = platform_config(Platform::GitHub, None);
    let http = MockHttpClient::new().respond(
        "https://api.github.com/repos/octo/widget",
        200,
        "<html>rate limited</html>",
    );
    let api = RepositoryApi::new(&http);

    let result = api.fetch_repository(&github, "octo", "widget");
    assert!(matches!(result, Err(GitEmbedError::UpstreamMalformed(_))));
}

#[test]
fn test_latest_release_404_is_none() {
    let github = platform_config(Platform::GitHub, None);
    let http = MockHttpClient::new().respond(
        "https://api.github.com/repos/octo/widget/releases/latest",
        404,
        r#"{"message":"Not Found"}"#,
    );
    let api = RepositoryApi::new(&http);

    assert!(api.latest_release(&github, "octo", "widget").unwrap().is_none());
}

#[test]
fn test_latest_release_github_shape() {
    let github = platform_config(Platform::GitHub, None);
    let http = MockHttpClient::new().respond(
        "https://api.github.com/repos/octo/widget/releases/latest",
        200,
        r#"{"tag_name":"v2.3.0","name":"Release 2.3","draft":false,"prerelease":false}"#,
    );
    let api = RepositoryApi::new(&http);

    let release = api.latest_release(&github, "octo", "widget").unwrap().unwrap();
    assert_eq!(release.tag_name, "v2.3.0");
    assert_eq!(release.name.as_deref(), Some("Release 2.3"));
    assert!(!release.draft);
}

#[test]
fn test_latest_release_gitlab_takes_first() {
    let gitlab = platform_config(Platform::GitLab, Some("gitlab.example.com"));
    let http = MockHttpClient::new()
        .respond(
            "https://gitlab.example.com/api/v4/projects/group%2Fproj/releases",
            200,
            r#"[{"tag_name":"v3.0.0","name":"Three"},{"tag_name":"v2.0.0","name":"Two"}]"#,
        )
        .respond(
            "https://gitlab.example.com/api/v4/projects/group%2Fempty/releases",
            200,
            "[]",
        );
    let api = RepositoryApi::new(&http);

    let release = api.latest_release(&gitlab, "group", "proj").unwrap().unwrap();
    assert_eq!(release.tag_name, "v3.0.0");
    assert!(!release.draft);

    assert!(api.latest_release(&gitlab, "group", "empty").unwrap().is_none());
}

#[test]
fn test_branches() {
    let gitea = platform_config(Platform::Gitea, Some("git.example.com"));
    let http = MockHttpClient::new().respond(
        "https://git.example.com/api/v1/repos/team/tool/branches",
        200,
        r#"[{"name":"feature","commit":{}},{"name":"master"}]"#,
    );
    let api = RepositoryApi::new(&http);

    let names: Vec<String> = api
        .branches(&gitea, "team", "tool")
        .unwrap()
        .into_iter()
        .map(|b| b.name)
        .collect();
    assert_eq!(names, vec!["feature", "master"]);
}
