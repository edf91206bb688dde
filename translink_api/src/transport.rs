//! Generic HTTPS GET/POST helper used by the API client.
//!
//! No retries, pooling policy, or streaming: each call sends one request and
//! returns the status code together with the raw body.

use std::borrow::Cow;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_LENGTH};
use reqwest::redirect::Policy;

use crate::errors::TransportError;

/// Connect timeout applied to every request.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

const MAX_REDIRECTS: usize = 10;

/// Settings shared by every request a transport sends.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Time allowed for establishing the connection. Defaults to 10 seconds.
    pub connect_timeout: Duration,
    /// Verify TLS certificates and host names. Keep this on outside of tests.
    pub verify_tls: bool,
    /// Value of the `User-Agent` header.
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            connect_timeout: CONNECT_TIMEOUT,
            verify_tls: true,
            user_agent: format!("translink-rtti/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Status code and raw body of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status_code: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

/// HTTP transport with a fixed connect timeout that follows redirects.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    config: TransportConfig,
    client: reqwest::Client,
}

impl HttpTransport {
    /// Creates a transport with the default configuration.
    pub fn new() -> Result<Self, TransportError> {
        Self::with_config(TransportConfig::default())
    }

    pub fn with_config(config: TransportConfig) -> Result<Self, TransportError> {
        let client = build_client(&config, config.verify_tls)?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &TransportConfig {
        &self.config
    }

    /// Sends a GET request with the given headers.
    ///
    /// `ssl_verify = false` disables certificate checks for this call only.
    /// Any failure to obtain a response is returned as a [`TransportError`].
    pub async fn get(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        ssl_verify: bool,
    ) -> Result<HttpResponse, TransportError> {
        let headers = header_map(headers)?;
        let client = self.client_for(ssl_verify)?;
        send(client.get(url).headers(headers)).await
    }

    /// Sends a POST request with `data` as the body. `Content-Length` is set
    /// from the body size.
    pub async fn post(
        &self,
        url: &str,
        data: &str,
        headers: &[(&str, &str)],
        ssl_verify: bool,
    ) -> Result<HttpResponse, TransportError> {
        let mut headers = header_map(headers)?;
        headers.insert(CONTENT_LENGTH, HeaderValue::from(data.len()));
        let client = self.client_for(ssl_verify)?;
        send(client.post(url).headers(headers).body(data.to_owned())).await
    }

    fn client_for(&self, ssl_verify: bool) -> Result<Cow<'_, reqwest::Client>, TransportError> {
        let verify = self.config.verify_tls && ssl_verify;
        if verify == self.config.verify_tls {
            Ok(Cow::Borrowed(&self.client))
        } else {
            tracing::warn!("TLS verification disabled for this request");
            Ok(Cow::Owned(build_client(&self.config, verify)?))
        }
    }
}

fn build_client(config: &TransportConfig, verify_tls: bool) -> Result<reqwest::Client, TransportError> {
    reqwest::Client::builder()
        .user_agent(config.user_agent.as_str())
        .connect_timeout(config.connect_timeout)
        .redirect(Policy::limited(MAX_REDIRECTS))
        .danger_accept_invalid_certs(!verify_tls)
        .build()
        .map_err(|e| {
            tracing::error!("Failed to build HTTP client: {}", e);
            TransportError::Build(e)
        })
}

fn header_map(headers: &[(&str, &str)]) -> Result<HeaderMap, TransportError> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| TransportError::InvalidHeader(name.to_string()))?;
        let value = HeaderValue::from_str(value)
            .map_err(|_| TransportError::InvalidHeader(format!("{}: {}", name, value)))?;
        map.insert(name, value);
    }
    Ok(map)
}

async fn send(request: reqwest::RequestBuilder) -> Result<HttpResponse, TransportError> {
    let resp = request.send().await.map_err(|e| {
        tracing::error!("Failed to complete request: {}", e);
        TransportError::Request(e)
    })?;

    let status_code = resp.status().as_u16();
    let body = resp.text().await.map_err(|e| {
        tracing::error!("Failed to read response body: {}", e);
        TransportError::Body(e)
    })?;

    Ok(HttpResponse { status_code, body })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_string, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn get_returns_status_and_body() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/ping"))
            .and(header("Accept", "application/json"))
            .respond_with(ResponseTemplate::new(202).set_body_string("{\"ok\":true}"))
            .mount(&server)
            .await;

        let transport = HttpTransport::new().unwrap();
        let resp = transport
            .get(
                &format!("{}/ping", server.uri()),
                &[("Accept", "application/json")],
                true,
            )
            .await
            .unwrap();

        assert_eq!(resp.status_code, 202);
        assert_eq!(resp.body, "{\"ok\":true}");
        assert!(resp.is_success());
    }

    #[tokio::test]
    async fn get_does_not_treat_error_status_as_failure() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_string("missing"))
            .mount(&server)
            .await;

        let transport = HttpTransport::new().unwrap();
        let resp = transport.get(&server.uri(), &[], true).await.unwrap();

        assert_eq!(resp.status_code, 404);
        assert_eq!(resp.body, "missing");
        assert!(!resp.is_success());
    }

    #[tokio::test]
    async fn get_follows_redirects() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/old"))
            .respond_with(
                ResponseTemplate::new(302).insert_header("location", format!("{}/new", server.uri())),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/new"))
            .respond_with(ResponseTemplate::new(200).set_body_string("moved"))
            .mount(&server)
            .await;

        let transport = HttpTransport::new().unwrap();
        let resp = transport
            .get(&format!("{}/old", server.uri()), &[], true)
            .await
            .unwrap();

        assert_eq!(resp.status_code, 200);
        assert_eq!(resp.body, "moved");
    }

    #[tokio::test]
    async fn post_sends_body_with_content_length() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/submit"))
            .and(header("Content-Length", "11"))
            .and(header("Content-Type", "text/plain"))
            .and(body_string("hello=world"))
            .respond_with(ResponseTemplate::new(201).set_body_string("created"))
            .mount(&server)
            .await;

        let transport = HttpTransport::new().unwrap();
        let resp = transport
            .post(
                &format!("{}/submit", server.uri()),
                "hello=world",
                &[("Content-Type", "text/plain")],
                true,
            )
            .await
            .unwrap();

        assert_eq!(resp.status_code, 201);
        assert_eq!(resp.body, "created");
    }

    #[tokio::test]
    async fn unreachable_host_is_a_transport_failure() {
        let transport = HttpTransport::new().unwrap();
        let result = transport.get("http://127.0.0.1:1/", &[], true).await;

        assert!(matches!(result, Err(TransportError::Request(_))));
    }

    #[tokio::test]
    async fn invalid_header_name_is_rejected() {
        let transport = HttpTransport::new().unwrap();
        let result = transport
            .get("http://127.0.0.1:1/", &[("bad header", "x")], true)
            .await;

        assert!(matches!(result, Err(TransportError::InvalidHeader(_))));
    }

    #[test]
    fn default_config() {
        let config = TransportConfig::default();
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert!(config.verify_tls);
        assert!(config.user_agent.starts_with("translink-rtti/"));
    }

    #[test]
    fn per_call_verification_toggle_builds_client() {
        let transport = HttpTransport::new().unwrap();
        assert!(matches!(transport.client_for(true), Ok(Cow::Borrowed(_))));
        assert!(matches!(transport.client_for(false), Ok(Cow::Owned(_))));
    }
}
