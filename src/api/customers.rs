// src/api/customers.rs
// =============================================================================
// /customers operations: list, get, create, update, delete.
// =============================================================================

use reqwest::{Method, StatusCode};
use serde_json::Value;

use super::{push_paging, DateFilters};
use crate::client::{impl_paginated, Endpoint};
use crate::error::Result;
use crate::models::{CreateCustomerRequest, Customer, ListResponse, UpdateCustomerRequest};
use crate::types::QueryParams;

/// GET /customers
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListCustomers {
    pub ids: Vec<i64>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub currency: Option<String>,
    pub reference_id: Option<String>,
    pub category: Option<String>,
    pub include_deleted: Option<bool>,
    pub dates: DateFilters,
    pub limit: Option<u32>,
    pub page: Option<u32>,
}

impl Endpoint for ListCustomers {
    type Output = ListResponse<Customer>;

    fn path(&self) -> String {
        "/customers".to_string()
    }

    fn query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query
            .push_all("ids", &self.ids)
            .push_opt("name", self.name.as_deref())
            .push_opt("email", self.email.as_deref())
            .push_opt("phone", self.phone.as_deref())
            .push_opt("currency", self.currency.as_deref())
            .push_opt("reference_id", self.reference_id.as_deref())
            .push_opt("category", self.category.as_deref())
            .push_opt("include_deleted", self.include_deleted);
        self.dates.apply(&mut query);
        push_paging(&mut query, self.limit, self.page);
        query
    }
}

impl_paginated!(ListCustomers);

/// GET /customers/{id}
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetCustomer {
    pub id: i64,
}

impl Endpoint for GetCustomer {
    type Output = Customer;

    fn path(&self) -> String {
        format!("/customers/{}", self.id)
    }
}

/// POST /customers
#[derive(Debug, Clone, PartialEq)]
pub struct CreateCustomer {
    pub body: CreateCustomerRequest,
}

impl Endpoint for CreateCustomer {
    type Output = Customer;

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> String {
        "/customers".to_string()
    }

    fn body(&self) -> Result<Option<Value>> {
        Ok(Some(serde_json::to_value(&self.body)?))
    }
}

/// PATCH /customers/{id}
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateCustomer {
    pub id: i64,
    pub body: UpdateCustomerRequest,
}

impl Endpoint for UpdateCustomer {
    type Output = Customer;

    fn method(&self) -> Method {
        Method::PATCH
    }

    fn path(&self) -> String {
        format!("/customers/{}", self.id)
    }

    fn body(&self) -> Result<Option<Value>> {
        Ok(Some(serde_json::to_value(&self.body)?))
    }
}

/// DELETE /customers/{id}; answers 204 with no body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteCustomer {
    pub id: i64,
}

impl Endpoint for DeleteCustomer {
    type Output = ();

    fn method(&self) -> Method {
        Method::DELETE
    }

    fn path(&self) -> String {
        format!("/customers/{}", self.id)
    }

    fn success_status(&self) -> StatusCode {
        StatusCode::NO_CONTENT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{ApiResponse, KatanaClient};
    use crate::types::Field;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_list_query_drops_unset_filters() {
        let params = ListCustomers {
            ids: vec![1, 2],
            email: Some("a@b.c".into()),
            limit: Some(25),
            ..Default::default()
        };
        let query = params.query();
        let keys: Vec<&str> = query.pairs().iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["ids", "ids", "email", "limit"]);
    }

    #[test]
    fn test_paths() {
        assert_eq!(GetCustomer { id: 4 }.path(), "/customers/4");
        assert_eq!(DeleteCustomer { id: 4 }.method(), Method::DELETE);
    }

    #[tokio::test]
    async fn test_create_customer_posts_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/customers"))
            .and(body_json(json!({ "name": "Poe", "currency": "EUR" })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "id": 77, "name": "Poe", "currency": "EUR" })),
            )
            .mount(&server)
            .await;

        let client = KatanaClient::builder()
            .base_url(server.uri())
            .api_key("k")
            .build()
            .unwrap();
        let created = client
            .fetch(&CreateCustomer {
                body: CreateCustomerRequest {
                    name: "Poe".into(),
                    currency: Field::Value("EUR".into()),
                    ..Default::default()
                },
            })
            .await
            .unwrap();
        assert_eq!(created.id, 77);
    }

    #[tokio::test]
    async fn test_create_customer_validation_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/customers"))
            .respond_with(ResponseTemplate::new(422).set_body_json(json!({
                "statusCode": 422,
                "name": "UnprocessableEntityError",
                "message": "The request body is invalid.",
                "details": [{ "path": ".email", "code": "format", "message": "must be an email" }]
            })))
            .mount(&server)
            .await;

        let client = KatanaClient::builder()
            .base_url(server.uri())
            .api_key("k")
            .build()
            .unwrap();
        let parsed = client
            .send(&CreateCustomer {
                body: CreateCustomerRequest {
                    name: "Poe".into(),
                    email: Field::Value("poe".into()),
                    ..Default::default()
                },
            })
            .await
            .unwrap();
        match parsed {
            Some(ApiResponse::UnprocessableEntity(err)) => {
                assert_eq!(err.details()[0].path, ".email")
            }
            other => panic!("expected 422 payload, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_delete_customer_no_content() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/customers/5"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let client = KatanaClient::builder()
            .base_url(server.uri())
            .api_key("k")
            .build()
            .unwrap();
        client.fetch(&DeleteCustomer { id: 5 }).await.unwrap();
    }
}
