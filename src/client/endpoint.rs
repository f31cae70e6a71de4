// src/client/endpoint.rs
// =============================================================================
// The Endpoint trait: one implementation per API operation.
//
// An endpoint is a plain struct holding the operation's parameters. It knows
// how to turn itself into a request (method, path, query, body) and which
// type a successful response decodes into. The client does the rest, so every
// operation gets the plain, detailed and blocking call styles for free.
// =============================================================================

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::Result;
use crate::types::QueryParams;

pub trait Endpoint {
    /// What a successful response body decodes into
    type Output: DeserializeOwned;

    fn method(&self) -> Method {
        Method::GET
    }

    /// Path relative to the base URL, starting with '/'
    fn path(&self) -> String;

    /// Query parameters; unset values must already be dropped
    fn query(&self) -> QueryParams {
        QueryParams::new()
    }

    /// JSON request body, if the operation takes one
    fn body(&self) -> Result<Option<Value>> {
        Ok(None)
    }

    /// The status code that means "success" for this operation
    fn success_status(&self) -> StatusCode {
        StatusCode::OK
    }
}

/// List endpoints that accept `page` / `limit`
pub trait Paginated: Endpoint + Sized {
    fn page(&self) -> Option<u32>;

    fn limit(&self) -> Option<u32>;

    /// Copy of this request pointing at another page
    fn with_page(&self, page: u32) -> Self;
}

// Implements Paginated for list parameter structs that have `page` and
// `limit` fields and derive Clone.
macro_rules! impl_paginated {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::client::Paginated for $ty {
                fn page(&self) -> Option<u32> {
                    self.page
                }

                fn limit(&self) -> Option<u32> {
                    self.limit
                }

                fn with_page(&self, page: u32) -> Self {
                    let mut next = self.clone();
                    next.page = Some(page);
                    next
                }
            }
        )+
    };
}

pub(crate) use impl_paginated;
