use std::time::Duration;

use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response};
use slotguard_domain::constants::DEFAULT_REQUEST_TIMEOUT_SECS;
use slotguard_domain::SlotGuardError;
use tracing::debug;

use crate::errors::{status_error, InfraError};

/// HTTP client with timeout support.
///
/// Requests are sent exactly once. Failures surface to the caller, which
/// decides whether to try again.
#[derive(Clone)]
pub struct HttpClient {
    client: ReqwestClient,
}

impl HttpClient {
    /// Start building a new HTTP client.
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Convenience constructor with default configuration.
    pub fn new() -> Result<Self, SlotGuardError> {
        Self::builder().build()
    }

    /// Create a request builder using the underlying reqwest client.
    pub fn request<U>(&self, method: Method, url: U) -> RequestBuilder
    where
        U: reqwest::IntoUrl,
    {
        self.client.request(method, url)
    }

    /// Execute the provided request builder. Any HTTP status is returned as
    /// a response; only transport failures are errors.
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response, SlotGuardError> {
        let request = builder.build().map_err(|err| SlotGuardError::from(InfraError::from(err)))?;

        let method = request.method().clone();
        let url = redacted(request.url());
        debug!(%method, %url, "sending HTTP request");

        match self.client.execute(request).await {
            Ok(response) => {
                debug!(%method, %url, status = %response.status(), "received HTTP response");
                Ok(response)
            }
            Err(err) => {
                debug!(%method, %url, error = %err, "HTTP request failed");
                Err(InfraError::from(err).into())
            }
        }
    }

    /// Like [`send`](Self::send), but non-success statuses become domain
    /// errors carrying the provider's message.
    pub async fn send_checked(&self, builder: RequestBuilder) -> Result<Response, SlotGuardError> {
        let response = self.send(builder).await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.ok();
        Err(status_error(status, body.as_deref()))
    }
}

/// Query strings carry page tokens; keep them out of logs.
fn redacted(url: &reqwest::Url) -> String {
    let mut clean = url.clone();
    clean.set_query(None);
    clean.to_string()
}

/// Builder for [`HttpClient`].
#[derive(Debug)]
pub struct HttpClientBuilder {
    timeout: Duration,
    user_agent: Option<String>,
    default_headers: Option<reqwest::header::HeaderMap>,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            user_agent: Some(concat!("slotguard/", env!("CARGO_PKG_VERSION")).to_string()),
            default_headers: None,
        }
    }
}

impl HttpClientBuilder {
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    pub fn default_headers(mut self, headers: reqwest::header::HeaderMap) -> Self {
        self.default_headers = Some(headers);
        self
    }

    pub fn build(self) -> Result<HttpClient, SlotGuardError> {
        let mut builder = ReqwestClient::builder().timeout(self.timeout).no_proxy();

        if let Some(agent) = self.user_agent {
            builder = builder.user_agent(agent);
        }

        if let Some(headers) = self.default_headers {
            builder = builder.default_headers(headers);
        }

        let client = builder.build().map_err(|err| {
            let infra: InfraError = err.into();
            SlotGuardError::from(infra)
        })?;

        Ok(HttpClient { client })
    }
}

#[cfg(test)]
mod tests {
    use reqwest::{Method, StatusCode};
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[tokio::test]
    async fn server_errors_are_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .expect(1)
            .mount(&server)
            .await;

        let client = HttpClient::new().expect("http client");
        let response =
            client.send(client.request(Method::GET, server.uri())).await.expect("response");

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(server.received_requests().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn send_checked_maps_status_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(429)
                    .set_body_string(r#"{"error": {"message": "Quota exceeded"}}"#),
            )
            .mount(&server)
            .await;

        let client = HttpClient::new().expect("http client");
        let err = client
            .send_checked(client.request(Method::GET, server.uri()))
            .await
            .expect_err("429 should fail");

        assert_eq!(err.http_status(), Some(429));
        assert!(err.to_string().contains("Quota exceeded"));
    }

    #[tokio::test]
    async fn times_out_slow_responses() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
            .mount(&server)
            .await;

        let client =
            HttpClient::builder().timeout(Duration::from_millis(50)).build().expect("http client");
        let err = client
            .send(client.request(Method::GET, server.uri()))
            .await
            .expect_err("request should time out");

        assert!(matches!(err, SlotGuardError::Provider { status: None, .. }));
    }

    #[test]
    fn redacts_query_strings() {
        let url = reqwest::Url::parse("https://example.com/events?pageToken=secret").unwrap();
        assert_eq!(redacted(&url), "https://example.com/events");
    }
}
