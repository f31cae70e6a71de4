// src/client/blocking.rs
// =============================================================================
// Blocking twin of KatanaClient for scripts and other non-async callers.
//
// It owns a small current-thread tokio runtime and drives the async client on
// it. Must not be used from inside another tokio runtime (block_on panics
// there); async code should use KatanaClient directly.
// =============================================================================

use serde::de::DeserializeOwned;
use tokio::runtime::{Builder, Runtime};

use super::{ApiResponse, Collected, Endpoint, KatanaClient, Paginated, Response};
use crate::config::Settings;
use crate::error::Result;
use crate::models::ListResponse;

#[derive(Debug)]
pub struct BlockingKatanaClient {
    inner: KatanaClient,
    runtime: Runtime,
}

impl BlockingKatanaClient {
    pub fn new(inner: KatanaClient) -> Result<Self> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        Ok(Self { inner, runtime })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Self::new(KatanaClient::from_settings(settings)?)
    }

    /// The async client underneath
    pub fn inner(&self) -> &KatanaClient {
        &self.inner
    }

    pub fn send<E: Endpoint>(&self, endpoint: &E) -> Result<Option<ApiResponse<E::Output>>> {
        self.runtime.block_on(self.inner.send(endpoint))
    }

    pub fn send_detailed<E: Endpoint>(&self, endpoint: &E) -> Result<Response<E::Output>> {
        self.runtime.block_on(self.inner.send_detailed(endpoint))
    }

    pub fn fetch<E: Endpoint>(&self, endpoint: &E) -> Result<E::Output> {
        self.runtime.block_on(self.inner.fetch(endpoint))
    }

    pub fn fetch_all<E, T>(&self, endpoint: &E, max_pages: u32) -> Result<Collected<T>>
    where
        E: Paginated<Output = ListResponse<T>>,
        T: DeserializeOwned,
    {
        self.runtime
            .block_on(self.inner.fetch_all(endpoint, max_pages))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{GetCustomer, ListCustomers};
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    // The mock server needs a runtime of its own; the client brings its own
    // current-thread runtime.
    fn blocking_client_for(server: &MockServer) -> BlockingKatanaClient {
        let inner = KatanaClient::builder()
            .base_url(format!("{}/v1", server.uri()))
            .api_key("k")
            .build()
            .unwrap();
        BlockingKatanaClient::new(inner).unwrap()
    }

    #[test]
    fn test_blocking_fetch() {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let server = rt.block_on(MockServer::start());
        rt.block_on(
            Mock::given(method("GET"))
                .and(path("/v1/customers/9"))
                .respond_with(
                    ResponseTemplate::new(200).set_body_json(json!({ "id": 9, "name": "Finn" })),
                )
                .mount(&server),
        );

        let client = blocking_client_for(&server);

        let customer = client.fetch(&GetCustomer { id: 9 }).unwrap();
        assert_eq!(customer.name, "Finn");

        let parsed = client.send(&GetCustomer { id: 9 }).unwrap();
        assert!(matches!(parsed, Some(ApiResponse::Ok(_))));
    }

    #[test]
    fn test_blocking_send_detailed() {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let server = rt.block_on(MockServer::start());
        rt.block_on(
            Mock::given(method("GET"))
                .and(path("/v1/customers/3"))
                .respond_with(
                    ResponseTemplate::new(429)
                        .insert_header("retry-after", "5")
                        .set_body_json(json!({
                            "statusCode": 429,
                            "name": "TooManyRequests",
                            "message": "slow down"
                        })),
                )
                .mount(&server),
        );

        let client = blocking_client_for(&server);
        let response = client.send_detailed(&GetCustomer { id: 3 }).unwrap();
        assert_eq!(response.status.as_u16(), 429);
        assert_eq!(
            response.headers.get("retry-after").and_then(|v| v.to_str().ok()),
            Some("5")
        );
        assert!(!response.content.is_empty());
        assert!(matches!(response.parsed, Some(ApiResponse::TooManyRequests(_))));
    }

    #[test]
    fn test_blocking_fetch_all() {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let server = rt.block_on(MockServer::start());
        rt.block_on(async {
            Mock::given(method("GET"))
                .and(path("/v1/customers"))
                .and(query_param("page", "1"))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                    "data": [{ "id": 1, "name": "A" }, { "id": 2, "name": "B" }]
                })))
                .mount(&server)
                .await;
            Mock::given(method("GET"))
                .and(path("/v1/customers"))
                .and(query_param("page", "2"))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                    "data": [{ "id": 3, "name": "C" }]
                })))
                .mount(&server)
                .await;
        });

        let client = blocking_client_for(&server);
        let params = ListCustomers {
            limit: Some(2),
            ..Default::default()
        };
        let all = client.fetch_all(&params, 5).unwrap();
        let ids: Vec<i64> = all.items.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(!all.truncated);
    }
}
