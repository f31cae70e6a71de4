// src/lib.rs
// =============================================================================
// Typed client for the Katana MRP REST API.
//
// Layout:
//   client  -> HTTP plumbing: auth, status dispatch, pagination, blocking twin
//   api     -> one parameter struct per endpoint (implements client::Endpoint)
//   models  -> request/response bodies
//   types   -> Field<T> (unset/null/value), Quantity, QueryParams
//   mcp     -> tool server wrapping a few client calls
//   docs    -> offline crawler for the API reference
//
// Quick start:
//
//   let client = KatanaClient::builder().api_key(key).build()?;
//   let products = client.fetch(&api::ListProducts::default()).await?;
// =============================================================================

pub mod api;
pub mod client;
pub mod config;
pub mod docs;
pub mod error;
pub mod logging;
pub mod mcp;
pub mod models;
pub mod types;

pub use client::{
    ApiResponse, BlockingKatanaClient, Collected, Endpoint, KatanaClient, KatanaClientBuilder,
    Paginated, Pagination, Response,
};
pub use config::Settings;
pub use error::{KatanaError, Result};
pub use types::{Field, QueryParams, Quantity};
