//! HTTP and GraphQL client types for Admin API communication.
//!
//! # Overview
//!
//! - [`HttpClient`]: the async HTTP client, one authenticated `POST` per call
//! - [`HttpRequest`]: a JSON request to be sent to the API
//! - [`HttpResponse`]: a successful response with its raw body
//! - [`HttpError`]: transport-level failures
//! - [`graphql::GraphqlClient`]: GraphQL queries and cursor pagination
//! - [`graphql::GraphqlError`]: GraphQL-specific error types
//!
//! There is no retry logic: a failed request fails the operation.

mod errors;
pub mod graphql;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, ACCESS_TOKEN_HEADER, SDK_VERSION};
pub use http_request::{HttpRequest, HttpRequestBuilder, JSON_CONTENT_TYPE};
pub use http_response::HttpResponse;

pub use graphql::{GraphqlClient, GraphqlError};
