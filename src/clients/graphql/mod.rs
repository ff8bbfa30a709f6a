//! GraphQL client for the Shopify Admin API.
//!
//! # Overview
//!
//! - [`GraphqlClient`]: sends queries and follows cursor pagination
//! - [`GraphqlError`]: error type for GraphQL operations
//! - [`Connection`], [`Edge`], [`PageInfo`]: the connection wire shape
//! - [`Paginated`]: selects which connection of a `data` payload to follow
//!
//! # Response Handling
//!
//! A 2xx response body has the shape `{ "data": ..., "errors": [...] }`.
//! The presence of an `errors` list alone decides failure: the call fails
//! with [`GraphqlError::Api`] even if the list is empty or `data` is
//! populated. `"errors": null` counts as absent.
//! Otherwise `data` is decoded strictly into the caller's type, and a
//! mismatch surfaces as [`GraphqlError::Decode`].
//!
//! # Pagination
//!
//! [`GraphqlClient::pages`] yields one page per request, lazily.
//! [`GraphqlClient::fetch_all`] drains it into a single `Vec`, preserving
//! page order. Only the top-level connection is followed.

mod client;
mod connection;
mod errors;

pub use client::{GraphqlClient, GRAPHQL_PATH};
pub use connection::{Connection, Edge, PageInfo, Paginated};
pub use errors::GraphqlError;
