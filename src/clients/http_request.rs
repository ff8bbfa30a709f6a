//! HTTP request type and builder.
//!
//! Every call to the Admin GraphQL endpoint is a JSON `POST`, so a request
//! only carries a path and a JSON body.

use crate::clients::errors::InvalidHttpRequestError;

/// Content type sent with every request body.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// A JSON `POST` request to be sent to the Admin API.
///
/// # Example
///
/// ```rust
/// use shopify_product_search::clients::HttpRequest;
/// use serde_json::json;
///
/// let request = HttpRequest::builder("graphql.json")
///     .body(json!({ "query": "{ shop { name } }", "variables": {} }))
///     .build()
///     .unwrap();
///
/// assert_eq!(request.path, "graphql.json");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    /// The path (relative to the client's base path).
    pub path: String,
    /// The JSON request body.
    pub body: serde_json::Value,
}

impl HttpRequest {
    /// Creates a new builder for a request to `path`.
    #[must_use]
    pub fn builder(path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(path)
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    path: String,
    body: Option<serde_json::Value>,
}

impl HttpRequestBuilder {
    fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            body: None,
        }
    }

    /// Sets the JSON request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Builds the [`HttpRequest`].
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::MissingBody`] if no body was set.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let body = self
            .body
            .ok_or_else(|| InvalidHttpRequestError::MissingBody {
                path: self.path.clone(),
            })?;

        Ok(HttpRequest {
            path: self.path,
            body,
        })
    }
}
