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
use crate::user_agent;
use attohttpc::Session;
use attohttpc::header::HeaderName;
use std::io::{self, Read};
use std::time::Duration;

/// Minimal blocking GET capability used for every upstream call.
pub trait HttpClient: Send + Sync {
    fn get(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        timeout: Duration,
    ) -> Result<Box<dyn HttpResponse>>;
}

pub trait HttpResponse: Read + Send {
    fn status(&self) -> u16;
}

/// Read the whole response body as UTF-8 text.
pub fn read_body(response: &mut dyn HttpResponse) -> Result<String> {
    let mut body = String::new();
    response.read_to_string(&mut body)?;
    Ok(body)
}

pub struct AttohttpcClient {
    user_agent: String,
}

impl AttohttpcClient {
    pub fn new() -> Self {
        Self {
            user_agent: user_agent::api_client(),
        }
    }
}

impl Default for AttohttpcClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient for AttohttpcClient {
    fn get(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        timeout: Duration,
    ) -> Result<Box<dyn HttpResponse>> {
        let mut session = Session::new();
        session.proxy_settings(attohttpc::ProxySettings::from_env());

        let mut request_builder = session.get(url).timeout(timeout).follow_redirects(true);

        let has_user_agent = headers
            .iter()
            .any(|(name, _)| name.eq_ignore_ascii_case("user-agent"));
        if !has_user_agent {
            request_builder = request_builder.header("User-Agent", self.user_agent.as_str());
        }

        for (name, value) in headers {
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                GitEmbedError::UpstreamUnavailable(format!("Invalid header name '{name}': {e}"))
            })?;
            request_builder = request_builder.header(header_name, *value);
        }

        let response = request_builder.send()?;
        Ok(Box::new(AttohttpcResponse { response }))
    }
}

struct AttohttpcResponse {
    response: attohttpc::Response,
}

impl Read for AttohttpcResponse {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.response.read(buf)
    }
}

impl HttpResponse for AttohttpcResponse {
    fn status(&self) -> u16 {
        self.response.status().as_u16()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    const TIMEOUT: Duration = Duration::from_secs(5);

    #[test]
    fn test_get_returns_status_and_body() {
        let mut server = Server::new();
        let mock = server
            .mock("GET", "/repos/octo/widget")
            .match_header("accept", "application/json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"name":"widget"}"#)
            .create();

        let client = AttohttpcClient::new();
        let url = format!("{}/repos/octo/widget", server.url());
        let mut response = client
            .get(&url, &[("Accept", "application/json")], TIMEOUT)
            .unwrap();

        assert_eq!(response.status(), 200);
        assert_eq!(read_body(response.as_mut()).unwrap(), r#"{"name":"widget"}"#);
        mock.assert();
    }

    #[test]
    fn test_default_user_agent_is_sent() {
        let mut server = Server::new();
        let mock = server
            .mock("GET", "/")
            .match_header("user-agent", user_agent::api_client().as_str())
            .with_status(200)
            .create();

        let client = AttohttpcClient::new();
        let response = client.get(&server.url(), &[], TIMEOUT).unwrap();

        assert_eq!(response.status(), 200);
        mock.assert();
    }

    #[test]
    fn test_explicit_user_agent_overrides_default() {
        let mut server = Server::new();
        let probe_agent = user_agent::site_probe_client();
        let mock = server
            .mock("GET", "/")
            .match_header("user-agent", probe_agent.as_str())
            .with_status(200)
            .create();

        let client = AttohttpcClient::new();
        client
            .get(&server.url(), &[("User-Agent", probe_agent.as_str())], TIMEOUT)
            .unwrap();

        mock.assert();
    }

    #[test]
    fn test_non_success_status_is_not_an_error() {
        let mut server = Server::new();
        let _m = server.mock("GET", "/missing").with_status(404).create();

        let client = AttohttpcClient::new();
        let url = format!("{}/missing", server.url());
        let response = client.get(&url, &[], TIMEOUT).unwrap();

        assert_eq!(response.status(), 404);
    }

    #[test]
    fn test_connection_failure_is_an_error() {
        let client = AttohttpcClient::new();
        let result = client.get("http://127.0.0.1:1/", &[], Duration::from_secs(1));

        assert!(result.is_err());
    }
}
