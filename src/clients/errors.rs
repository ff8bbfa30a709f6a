//! HTTP-specific error types.
//!
//! - [`HttpResponseError`]: non-2xx HTTP responses
//! - [`InvalidHttpRequestError`]: a request that fails validation before sending
//! - [`HttpError`]: unified error type encompassing all HTTP-related errors
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_product_search::clients::HttpError;
//!
//! match client.request(request).await {
//!     Ok(response) => println!("{}", response.body),
//!     Err(HttpError::Response(e)) => println!("{} {}", e.code, e.status_text),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {e}"),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when a request receives a non-successful status.
///
/// The response body is never decoded for these responses; only the status
/// line and the `X-Request-Id` header are kept.
///
/// # Example
///
/// ```rust
/// use shopify_product_search::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     status_text: "Not Found".to_string(),
///     error_reference: Some("abc-123".to_string()),
/// };
///
/// assert_eq!(error.to_string(), "Not Found");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{status_text}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Canonical reason phrase for the status code.
    pub status_text: String,
    /// Reference ID for error reporting (from X-Request-Id header).
    pub error_reference: Option<String>,
}

/// Error returned when an HTTP request fails validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST request was built without a body.
    #[error("Cannot post to {path} without specifying data.")]
    MissingBody {
        /// The request path.
        path: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error, including client construction failure.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
