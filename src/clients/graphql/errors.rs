//! GraphQL-specific error types.
//!
//! - [`GraphqlError::Http`]: transport failures, including non-2xx statuses
//! - [`GraphqlError::Api`]: the response body carried an `errors` list
//! - [`GraphqlError::Decode`]: the body did not match the expected shape
//! - [`GraphqlError::MissingData`]: a 2xx body with neither `data` nor `errors`
//! - [`GraphqlError::MissingCursor`]: `hasNextPage` without an `endCursor`

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for GraphQL API operations.
///
/// # Example
///
/// ```rust
/// use shopify_product_search::clients::graphql::GraphqlError;
///
/// let error = GraphqlError::Api {
///     messages: vec!["Throttled".to_string(), "Field 'x' doesn't exist".to_string()],
/// };
/// assert_eq!(error.to_string(), "GraphQL error: Throttled, Field 'x' doesn't exist");
/// ```
#[derive(Debug, Error)]
pub enum GraphqlError {
    /// The request failed at the HTTP level.
    #[error("GraphQL request failed: {0}")]
    Http(#[from] HttpError),

    /// The response reported one or more GraphQL errors.
    #[error("GraphQL error: {}", .messages.join(", "))]
    Api {
        /// Every reported `message`, in response order.
        messages: Vec<String>,
    },

    /// The response body was not valid JSON or did not match the schema.
    #[error("Failed to decode GraphQL response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The response had neither `data` nor `errors`.
    #[error("GraphQL response contained no data")]
    MissingData,

    /// The server reported another page without a cursor to reach it.
    #[error("GraphQL response reported another page but no end cursor")]
    MissingCursor,
}
