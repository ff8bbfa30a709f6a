//! HTTP client for Admin API communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! JSON `POST` requests. Requests are sent once: there is no retry, no
//! timeout and no rate limiting.

use std::collections::HashMap;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::{HttpRequest, JSON_CONTENT_TYPE};
use crate::clients::http_response::HttpResponse;
use crate::config::AppConfig;

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Header carrying the Admin API access token.
pub const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

/// HTTP client for making requests to the Admin API.
///
/// The client handles:
/// - Base URI construction from the shop domain or the API host override
/// - Default headers including User-Agent and access token
/// - Mapping non-2xx responses to [`HttpResponseError`] without reading the body
///
/// `HttpClient` is `Send + Sync`.
///
/// # Example
///
/// ```rust,ignore
/// use shopify_product_search::clients::{HttpClient, HttpRequest};
///
/// let client = HttpClient::new("/admin/api/2025-10", &config)?;
/// let request = HttpRequest::builder("graphql.json")
///     .body(serde_json::json!({ "query": "{ shop { name } }" }))
///     .build()?;
///
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    /// Base URI (e.g., `https://my-store.myshopify.com`).
    base_uri: String,
    /// Base path (e.g., "/admin/api/2025-10").
    base_path: String,
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the configured shop.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client
    /// cannot be created (e.g. TLS initialization failure).
    pub fn new(base_path: impl Into<String>, config: &AppConfig) -> Result<Self, HttpError> {
        let base_path = base_path.into();
        let shop = config.shop().as_ref();

        let base_uri = config.api_host().map_or_else(
            || format!("https://{shop}"),
            |host| host.origin().to_string(),
        );

        let mut default_headers = HashMap::new();
        default_headers.insert(
            "User-Agent".to_string(),
            format!("shopify-product-search v{SDK_VERSION}"),
        );
        default_headers.insert("Accept".to_string(), JSON_CONTENT_TYPE.to_string());
        default_headers.insert(
            ACCESS_TOKEN_HEADER.to_string(),
            config.access_token().as_ref().to_string(),
        );

        // A forwarding proxy routes on the shop's own host name
        if config.api_host().is_some() {
            default_headers.insert("Host".to_string(), shop.to_string());
        }

        let client = reqwest::Client::builder().use_rustls_tls().build()?;

        Ok(Self {
            client,
            base_uri,
            base_path,
            default_headers,
        })
    }

    /// Returns the full URL a request to `path` is sent to.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}/{}", self.base_uri, self.base_path, path)
    }

    /// Sends a JSON `POST` request.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - A network error occurs (`Network`)
    /// - A non-2xx response is received (`Response`); the body is not read
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        let url = self.url_for(&request.path);

        let mut req_builder = self
            .client
            .post(&url)
            .header("Content-Type", JSON_CONTENT_TYPE);
        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        let res = req_builder.body(request.body.to_string()).send().await?;

        let status = res.status();
        let headers = Self::parse_response_headers(res.headers());

        if !status.is_success() {
            let error_reference = headers
                .get("x-request-id")
                .and_then(|values| values.first())
                .cloned();
            tracing::debug!(code = status.as_u16(), url = %url, "Request failed");
            return Err(HttpError::Response(HttpResponseError {
                code: status.as_u16(),
                status_text: status
                    .canonical_reason()
                    .unwrap_or("Unknown Status")
                    .to_string(),
                error_reference,
            }));
        }

        let body = res.text().await?;
        let response = HttpResponse::new(status.as_u16(), headers, body);

        if let Some(reason) = response.deprecation_reason() {
            tracing::warn!(
                "Deprecated request to Shopify API at {}, received reason: {}",
                request.path,
                reason
            );
        }

        Ok(response)
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}
