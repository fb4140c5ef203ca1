//! Main GreyNoise API client implementation.

use crate::api::{NoiseApi, ResearchApi};
use crate::config::{Config, DEFAULT_API_SERVER, DEFAULT_TIMEOUT_SECS};
use greynoise_core::{GreyNoiseError, Result};
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn, Instrument, Span};
use url::Url;

/// API version prefix for every endpoint
pub const API_VERSION: &str = "v2";

const REQUEST_CLIENT_HEADER: &str = "X-Request-Client";
const API_KEY_HEADER: &str = "key";

/// Main GreyNoise API client
#[derive(Clone)]
pub struct GreyNoiseClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: HttpClient,
    api_key: String,
    base_url: Url,
    timeout: Duration,
    request_client: String,
    span: Span,
}

impl GreyNoiseClient {
    /// Create a new client with the given API key using default settings
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        GreyNoiseClientBuilder::new(api_key).build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder(api_key: impl Into<String>) -> GreyNoiseClientBuilder {
        GreyNoiseClientBuilder::new(api_key)
    }

    /// Create a client from an already loaded configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        GreyNoiseClientBuilder::new(&config.api_key)
            .base_url(&config.api_server)
            .timeout(Duration::from_secs(config.timeout))
            .build()
    }

    /// Load the configuration file and environment, then create a client from it
    pub fn from_default_config() -> Result<Self> {
        Self::from_config(&Config::load()?)
    }

    /// Access noise endpoints (bulk dump, quick checks, context)
    #[must_use]
    pub fn noise(&self) -> NoiseApi<'_> {
        NoiseApi::new(self)
    }

    /// Access research endpoints
    #[must_use]
    pub fn research(&self) -> ResearchApi<'_> {
        ResearchApi::new(self)
    }

    /// Base URL requests are sent to
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Per-request timeout
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.inner.timeout
    }

    /// Perform a GET request
    pub(crate) async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        self.send(endpoint, &[], None::<&()>).await
    }

    /// Perform a GET request with query parameters
    pub(crate) async fn get_with_query<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<T> {
        self.send(endpoint, params, None::<&()>).await
    }

    /// Perform a GET request carrying a JSON body
    pub(crate) async fn get_with_json<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T> {
        self.send(endpoint, &[], Some(body)).await
    }

    async fn send<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<T> {
        let url = self.build_url(endpoint)?;

        let mut request = self
            .inner
            .http
            .get(url.clone())
            .header(REQUEST_CLIENT_HEADER, &self.inner.request_client)
            .header(API_KEY_HEADER, &self.inner.api_key);
        if !params.is_empty() {
            request = request.query(params);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        async move {
            debug!(url = %url, "GET request");

            let response = request
                .send()
                .await
                .map_err(|e| GreyNoiseError::Http(e.to_string()))?;

            Self::handle_response(response).await
        }
        .instrument(self.inner.span.clone())
        .await
    }

    /// Build `{base_url}/{API_VERSION}/{endpoint}`
    fn build_url(&self, endpoint: &str) -> Result<Url> {
        self.inner
            .base_url
            .join(&format!("{API_VERSION}/{endpoint}"))
            .map_err(|e| GreyNoiseError::Config(format!("invalid endpoint {endpoint:?}: {e}")))
    }

    /// Handle an API response that returns JSON
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    warn!(error = %e, "Could not read error response body");
                    String::new()
                }
            };
            warn!(status = status.as_u16(), "Request failed");
            return Err(GreyNoiseError::RequestFailure {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| GreyNoiseError::Http(e.to_string()))?;
        serde_json::from_str(&body).map_err(GreyNoiseError::Json)
    }
}

/// Builder for configuring a [`GreyNoiseClient`]
pub struct GreyNoiseClientBuilder {
    api_key: String,
    base_url: String,
    timeout: Duration,
    request_client: String,
    span: Option<Span>,
}

impl GreyNoiseClientBuilder {
    /// Create a new builder with the given API key
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_API_SERVER.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            request_client: format!("greynoise-rust v{}", env!("CARGO_PKG_VERSION")),
            span: None,
        }
    }

    /// Set the API server (useful for testing)
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the `X-Request-Client` header value
    #[must_use]
    pub fn request_client(mut self, client: impl Into<String>) -> Self {
        self.request_client = client.into();
        self
    }

    /// Set the span every request is recorded under.
    ///
    /// Defaults to a `greynoise` span carrying the API server.
    #[must_use]
    pub fn span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Build the client
    pub fn build(self) -> Result<GreyNoiseClient> {
        let mut base_url = Url::parse(&self.base_url).map_err(|e| {
            GreyNoiseError::Config(format!("invalid API server {:?}: {e}", self.base_url))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(GreyNoiseError::Config(format!(
                "invalid API server {:?}: not a base URL",
                self.base_url
            )));
        }
        // Url::join replaces the last segment unless the path ends with '/'
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let http = HttpClient::builder()
            .timeout(self.timeout)
            .gzip(true)
            .build()
            .map_err(|e| GreyNoiseError::Http(e.to_string()))?;

        let span = self
            .span
            .unwrap_or_else(|| tracing::info_span!("greynoise", api_server = %base_url));

        Ok(GreyNoiseClient {
            inner: Arc::new(ClientInner {
                http,
                api_key: self.api_key,
                base_url,
                timeout: self.timeout,
                request_client: self.request_client,
                span,
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_builder_defaults() {
        let client = GreyNoiseClient::new("key").unwrap();
        assert_eq!(
            client.base_url().as_str(),
            "https://enterprise.api.greynoise.io/"
        );
        assert_eq!(client.timeout(), Duration::from_secs(60));
    }

    #[test]
    fn test_from_config() {
        let config = Config {
            api_key: "key".into(),
            api_server: "http://localhost:8080/proxy".into(),
            timeout: 7,
        };
        let client = GreyNoiseClient::from_config(&config).unwrap();
        assert_eq!(client.base_url().as_str(), "http://localhost:8080/proxy/");
        assert_eq!(client.timeout(), Duration::from_secs(7));
        assert_eq!(
            client.build_url("noise/bulk").unwrap().as_str(),
            "http://localhost:8080/proxy/v2/noise/bulk"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let err = GreyNoiseClient::builder("key")
            .base_url("not a url")
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, GreyNoiseError::Config(_)));

        let err = GreyNoiseClient::builder("key")
            .base_url("mailto:someone@example.com")
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, GreyNoiseError::Config(_)));
    }

    #[tokio::test]
    async fn test_request_headers_and_path() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/research/actors"))
            .and(header("key", "test-key"))
            .and(header("X-Request-Client", "tests v1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let client = GreyNoiseClient::builder("test-key")
            .base_url(server.uri())
            .request_client("tests v1")
            .build()
            .unwrap();

        let actors = client.research().actors().await.unwrap();
        assert!(actors.is_empty());
    }

    #[tokio::test]
    async fn test_non_success_status_is_request_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_string("{\"error\":\"bad key\"}"))
            .mount(&server)
            .await;

        let client = GreyNoiseClient::builder("wrong")
            .base_url(server.uri())
            .build()
            .unwrap();

        let err = client.research().actors().await.unwrap_err();
        match err {
            GreyNoiseError::RequestFailure { status, body } => {
                assert_eq!(status, 401);
                assert_eq!(body, "{\"error\":\"bad key\"}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_server_error_is_request_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
            .mount(&server)
            .await;

        let client = GreyNoiseClient::builder("key")
            .base_url(server.uri())
            .build()
            .unwrap();

        let err = client.noise().context("8.8.8.8").await.unwrap_err();
        assert_eq!(err.status_code(), Some(503));
        assert!(err.to_string().contains("maintenance"));
    }

    #[tokio::test]
    async fn test_undecodable_body_is_json_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let client = GreyNoiseClient::builder("key")
            .base_url(server.uri())
            .build()
            .unwrap();

        let err = client.research().actors().await.unwrap_err();
        assert!(matches!(err, GreyNoiseError::Json(_)));
    }

    #[tokio::test]
    async fn test_slow_response_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!([]))
                    .set_delay(Duration::from_secs(3)),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = GreyNoiseClient::builder("key")
            .base_url(server.uri())
            .timeout(Duration::from_secs(1))
            .build()
            .unwrap();

        let err = client.research().actors().await.unwrap_err();
        assert!(matches!(err, GreyNoiseError::Http(_)));
        assert_eq!(server.received_requests().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_truncated_error_body_keeps_status() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            // Promise more body than is sent, then hang up
            socket
                .write_all(
                    b"HTTP/1.1 500 Internal Server Error\r\nContent-Length: 100\r\n\r\npartial",
                )
                .await
                .unwrap();
            socket.shutdown().await.unwrap();
        });

        let client = GreyNoiseClient::builder("key")
            .base_url(format!("http://{addr}"))
            .build()
            .unwrap();

        let err = client.research().actors().await.unwrap_err();
        match err {
            GreyNoiseError::RequestFailure { status, body } => {
                assert_eq!(status, 500);
                assert!(body.is_empty());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
