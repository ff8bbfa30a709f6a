//! Configuration error types.
//!
//! Everything that can go wrong while assembling an [`AppConfig`] is reported
//! through [`ConfigError`]. These errors are raised at startup, before any
//! request is sent, and are fatal to the process.
//!
//! # Example
//!
//! ```rust
//! use shopify_product_search::{AccessToken, ConfigError};
//!
//! let result = AccessToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAccessToken)));
//! ```
//!
//! [`AppConfig`]: crate::AppConfig

use thiserror::Error;

/// Errors that can occur while building the application configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required environment variable is unset or empty.
    #[error("Environment variable {var} is required")]
    MissingEnvVar {
        /// Name of the missing variable.
        var: &'static str,
    },

    /// Access token cannot be empty.
    #[error("Access token cannot be empty. Please provide a valid Admin API access token.")]
    EmptyAccessToken,

    /// Shop domain is invalid.
    #[error("Invalid shop domain '{domain}'. Expected format: 'shop-name' or 'shop-name.myshopify.com'.")]
    InvalidShopDomain {
        /// The invalid domain that was provided.
        domain: String,
    },

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected format: 'YYYY-MM' (e.g., '2024-01') or 'unstable'.")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// API host override is invalid.
    #[error("Invalid API host '{url}'. Please provide a URL with scheme (e.g., 'https://proxy.example.com').")]
    InvalidHostUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Page size is not a positive integer.
    #[error("Invalid page size '{value}'. Expected a positive integer.")]
    InvalidPageSize {
        /// The rejected value.
        value: String,
    },

    /// A required builder field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
