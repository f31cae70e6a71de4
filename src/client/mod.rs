// src/client/mod.rs
// =============================================================================
// HTTP client for the Katana REST API.
//
// One reqwest::Client is built up front and reused for every call (connection
// pooling). Requests carry the API key as a Bearer token.
//
// Call styles, all generic over crate::client::Endpoint:
//   send            -> Option<ApiResponse<T>>   (None = undocumented status)
//   send_detailed   -> Response<T>              (status, headers, raw body too)
//   fetch           -> T                        (error payloads become Err)
//   fetch_all       -> Collected<T>             (walks the pages of a list)
// BlockingKatanaClient offers the same for non-async callers.
// =============================================================================

mod blocking;
mod endpoint;
mod response;

pub use blocking::BlockingKatanaClient;
pub(crate) use endpoint::impl_paginated;
pub use endpoint::{Endpoint, Paginated};
pub use response::{parse_response, ApiResponse, Pagination, Response};

use std::fmt;
use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::config::{Settings, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, REDACTED};
use crate::error::{KatanaError, Result};
use crate::models::ListResponse;

/// Page size Katana uses when `limit` isn't given
pub const DEFAULT_PAGE_LIMIT: u32 = 50;

/// Items gathered by `fetch_all`
#[derive(Debug, Clone, PartialEq)]
pub struct Collected<T> {
    pub items: Vec<T>,
    /// The page budget ran out before the API reported a last page
    pub truncated: bool,
}

#[derive(Clone)]
pub struct KatanaClientBuilder {
    base_url: String,
    api_key: Option<String>,
    timeout: Duration,
    raise_on_unexpected_status: bool,
}

impl fmt::Debug for KatanaClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KatanaClientBuilder")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| REDACTED))
            .field("timeout", &self.timeout)
            .field("raise_on_unexpected_status", &self.raise_on_unexpected_status)
            .finish()
    }
}

impl Default for KatanaClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            raise_on_unexpected_status: false,
        }
    }
}

impl KatanaClientBuilder {
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Turn undocumented status codes into `KatanaError::UnexpectedStatus`
    /// instead of `Ok(None)`
    pub fn raise_on_unexpected_status(mut self, raise: bool) -> Self {
        self.raise_on_unexpected_status = raise;
        self
    }

    pub fn build(self) -> Result<KatanaClient> {
        let api_key = self
            .api_key
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| KatanaError::Config("an API key is required".into()))?;

        // Validate once here so request building can't fail on the base part
        let base_url = self.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url)?;

        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("katana-client/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(KatanaClient {
            http,
            base_url,
            api_key,
            raise_on_unexpected_status: self.raise_on_unexpected_status,
        })
    }
}

#[derive(Clone)]
pub struct KatanaClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    raise_on_unexpected_status: bool,
}

impl fmt::Debug for KatanaClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KatanaClient")
            .field("base_url", &self.base_url)
            .field("api_key", &REDACTED)
            .field("raise_on_unexpected_status", &self.raise_on_unexpected_status)
            .finish_non_exhaustive()
    }
}

impl KatanaClient {
    pub fn builder() -> KatanaClientBuilder {
        KatanaClientBuilder::default()
    }

    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Self::builder()
            .base_url(&settings.base_url)
            .api_key(&settings.api_key)
            .timeout(settings.timeout)
            .raise_on_unexpected_status(settings.raise_on_unexpected_status)
            .build()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // The base URL carries a path prefix (/v1), so Url::join would drop it;
    // plain concatenation keeps it.
    fn url_for(&self, path: &str) -> Result<Url> {
        let path = path.trim_start_matches('/');
        Ok(Url::parse(&format!("{}/{}", self.base_url, path))?)
    }

    /// Sends the request and returns status, headers, raw body and the
    /// parsed value
    pub async fn send_detailed<E: Endpoint>(&self, endpoint: &E) -> Result<Response<E::Output>> {
        let method = endpoint.method();
        let path = endpoint.path();
        let url = self.url_for(&path)?;

        let mut request = self
            .http
            .request(method.clone(), url)
            .bearer_auth(&self.api_key);

        let query = endpoint.query();
        if !query.is_empty() {
            request = request.query(query.pairs());
        }
        if let Some(body) = endpoint.body()? {
            request = request.json(&body);
        }

        debug!(%method, %path, "sending Katana request");
        let response = request.send().await?;

        let status = response.status();
        let headers = response.headers().clone();
        let content = response.bytes().await?.to_vec();
        debug!(%method, %path, status = status.as_u16(), bytes = content.len(), "Katana response");

        let parsed = parse_response(
            status,
            endpoint.success_status(),
            &content,
            self.raise_on_unexpected_status,
        )?;
        if parsed.is_none() {
            warn!(%method, %path, status = status.as_u16(), "undocumented status code");
        }

        Ok(Response {
            status,
            headers,
            content,
            parsed,
        })
    }

    /// Parsed value only; None for undocumented status codes
    pub async fn send<E: Endpoint>(&self, endpoint: &E) -> Result<Option<ApiResponse<E::Output>>> {
        Ok(self.send_detailed(endpoint).await?.parsed)
    }

    /// Success value, with every error payload or odd status turned into Err
    pub async fn fetch<E: Endpoint>(&self, endpoint: &E) -> Result<E::Output> {
        self.send_detailed(endpoint).await?.into_result()
    }

    /// Collects the items of a list endpoint, starting at the endpoint's own
    /// page (or 1) and stopping at the last page, an empty or short page, or
    /// after `max_pages` requests. Hitting the `max_pages` limit on a full
    /// page sets `truncated`.
    pub async fn fetch_all<E, T>(&self, endpoint: &E, max_pages: u32) -> Result<Collected<T>>
    where
        E: Paginated<Output = ListResponse<T>>,
        T: DeserializeOwned,
    {
        let limit = endpoint.limit().unwrap_or(DEFAULT_PAGE_LIMIT) as usize;
        let mut page = endpoint.page().unwrap_or(1);
        let mut items = Vec::new();
        let mut truncated = true;

        for _ in 0..max_pages.max(1) {
            let response = self.send_detailed(&endpoint.with_page(page)).await?;
            let last_page = response.pagination().and_then(|p| p.is_last_page());
            let batch = response.into_result()?;
            let count = batch.data.len();
            items.extend(batch.data);

            debug!(page, count, "fetched page");
            if count == 0 || count < limit || last_page == Some(true) {
                truncated = false;
                break;
            }
            page += 1;
        }

        if truncated {
            warn!(pages = max_pages.max(1), items = items.len(), "stopped at page limit");
        }
        Ok(Collected { items, truncated })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ListCustomers;
    use crate::models::Customer;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer, raise: bool) -> KatanaClient {
        KatanaClient::builder()
            .base_url(format!("{}/v1/", server.uri()))
            .api_key("test-key")
            .raise_on_unexpected_status(raise)
            .build()
            .unwrap()
    }

    #[test]
    fn test_builder_requires_api_key() {
        let err = KatanaClient::builder().build().unwrap_err();
        assert!(matches!(err, KatanaError::Config(_)));
    }

    #[test]
    fn test_debug_never_shows_api_key() {
        let builder = KatanaClient::builder().api_key("sk-live-secret");
        let shown = format!("{:?}", builder);
        assert!(!shown.contains("sk-live-secret"));
        assert!(shown.contains("***"));

        let client = builder.build().unwrap();
        let shown = format!("{:?}", client);
        assert!(!shown.contains("sk-live-secret"));
        assert!(shown.contains(DEFAULT_BASE_URL));

        let blocking = BlockingKatanaClient::new(client).unwrap();
        assert!(!format!("{:?}", blocking).contains("sk-live-secret"));
    }

    #[test]
    fn test_builder_rejects_bad_base_url() {
        let err = KatanaClient::builder()
            .base_url("not a url")
            .api_key("k")
            .build()
            .unwrap_err();
        assert!(matches!(err, KatanaError::Url(_)));
    }

    #[tokio::test]
    async fn test_send_keeps_base_path_and_auth() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/customers"))
            .and(header("authorization", "Bearer test-key"))
            .and(query_param("name", "Rey"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "data": [{ "id": 7, "name": "Rey" }] })),
            )
            .mount(&server)
            .await;

        let client = client_for(&server, false);
        let params = ListCustomers {
            name: Some("Rey".into()),
            ..Default::default()
        };
        let customers = client.fetch(&params).await.unwrap();
        assert_eq!(customers.data.len(), 1);
        assert_eq!(customers.data[0].id, 7);
    }

    #[tokio::test]
    async fn test_send_detailed_exposes_raw_response() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/customers"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({
                    "statusCode": 401,
                    "name": "UnauthorizedError",
                    "message": "Unauthorized"
                })),
            )
            .mount(&server)
            .await;

        let client = client_for(&server, false);
        let response = client
            .send_detailed(&ListCustomers::default())
            .await
            .unwrap();
        assert_eq!(response.status.as_u16(), 401);
        assert!(!response.content.is_empty());
        assert!(matches!(response.parsed, Some(ApiResponse::Unauthorized(_))));

        let err = client.fetch(&ListCustomers::default()).await.unwrap_err();
        assert!(matches!(err, KatanaError::Api { .. }));
    }

    #[tokio::test]
    async fn test_unexpected_status_flag() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_string("gone"))
            .mount(&server)
            .await;

        let lenient = client_for(&server, false);
        assert!(lenient.send(&ListCustomers::default()).await.unwrap().is_none());

        let strict = client_for(&server, true);
        let err = strict.send(&ListCustomers::default()).await.unwrap_err();
        assert!(matches!(err, KatanaError::UnexpectedStatus { .. }));
    }

    #[tokio::test]
    async fn test_fetch_all_walks_pages() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/customers"))
            .and(query_param("page", "1"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("x-pagination", r#"{"page":"1","last_page":"false"}"#)
                    .set_body_json(json!({ "data": [{ "id": 1, "name": "A" }, { "id": 2, "name": "B" }] })),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/v1/customers"))
            .and(query_param("page", "2"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("x-pagination", r#"{"page":"2","last_page":"true"}"#)
                    .set_body_json(json!({ "data": [{ "id": 3, "name": "C" }, { "id": 4, "name": "D" }] })),
            )
            .mount(&server)
            .await;

        let client = client_for(&server, false);
        let params = ListCustomers {
            limit: Some(2),
            ..Default::default()
        };
        let all: Collected<Customer> = client.fetch_all(&params, 10).await.unwrap();
        let ids: Vec<i64> = all.items.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert!(!all.truncated);
    }

    #[tokio::test]
    async fn test_fetch_all_respects_max_pages() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/customers"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "data": [{ "id": 1, "name": "A" }] })),
            )
            .expect(3)
            .mount(&server)
            .await;

        let client = client_for(&server, false);
        let params = ListCustomers {
            limit: Some(1),
            ..Default::default()
        };
        let all: Collected<Customer> = client.fetch_all(&params, 3).await.unwrap();
        assert_eq!(all.items.len(), 3);
        assert!(all.truncated);
    }

    #[tokio::test]
    async fn test_fetch_all_last_page_within_budget_is_not_truncated() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/customers"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("x-pagination", r#"{"page":"1","last_page":"true"}"#)
                    .set_body_json(json!({ "data": [{ "id": 1, "name": "A" }] })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, false);
        let params = ListCustomers {
            limit: Some(1),
            ..Default::default()
        };
        let all: Collected<Customer> = client.fetch_all(&params, 1).await.unwrap();
        assert_eq!(all.items.len(), 1);
        assert!(!all.truncated);
    }
}
