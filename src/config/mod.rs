//! Configuration types.
//!
//! This module provides the configuration value that is built once at
//! startup and passed by reference into the API client.
//!
//! # Overview
//!
//! - [`AppConfig`]: shop domain, access token and request settings
//! - [`AppConfigBuilder`]: a builder for constructing [`AppConfig`] explicitly
//! - [`ShopDomain`], [`AccessToken`], [`HostUrl`]: validated newtypes
//! - [`ApiVersion`]: the Admin API version to call
//!
//! # Environment
//!
//! [`AppConfig::from_env`] reads these variables, after loading a `.env`
//! file from the working directory if one exists:
//!
//! | Variable              | Required | Default            |
//! |-----------------------|----------|--------------------|
//! | `SHOP`                | yes      |                    |
//! | `ADMIN_TOKEN`         | yes      |                    |
//! | `SHOPIFY_API_VERSION` | no       | latest stable      |
//! | `SHOPIFY_API_HOST`    | no       | `https://{SHOP}`   |
//! | `SHOPIFY_PAGE_SIZE`   | no       | `5`                |
//!
//! # Example
//!
//! ```rust
//! use shopify_product_search::{AppConfig, AccessToken, ShopDomain, ApiVersion};
//!
//! let config = AppConfig::builder()
//!     .shop(ShopDomain::new("my-store").unwrap())
//!     .access_token(AccessToken::new("shpat_123").unwrap())
//!     .api_version(ApiVersion::V2025_07)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.page_size(), 5);
//! ```

mod newtypes;
mod version;

pub use newtypes::{AccessToken, HostUrl, ShopDomain};
pub use version::ApiVersion;

use std::env::VarError;

use crate::error::ConfigError;

/// Environment variable holding the shop domain.
pub const SHOP_VAR: &str = "SHOP";
/// Environment variable holding the Admin API access token.
pub const ADMIN_TOKEN_VAR: &str = "ADMIN_TOKEN";
/// Environment variable overriding the API version.
pub const API_VERSION_VAR: &str = "SHOPIFY_API_VERSION";
/// Environment variable overriding the request origin.
pub const API_HOST_VAR: &str = "SHOPIFY_API_HOST";
/// Environment variable overriding the page size.
pub const PAGE_SIZE_VAR: &str = "SHOPIFY_PAGE_SIZE";

/// Number of items requested per page when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: u32 = 5;

/// Application configuration.
///
/// Constructed once, either from the environment or through the builder,
/// and then borrowed by [`GraphqlClient::new`](crate::GraphqlClient::new).
/// `AppConfig` is `Clone + Send + Sync`.
#[derive(Clone, Debug)]
pub struct AppConfig {
    shop: ShopDomain,
    access_token: AccessToken,
    api_version: ApiVersion,
    api_host: Option<HostUrl>,
    page_size: u32,
}

impl AppConfig {
    /// Creates a new builder for constructing an `AppConfig`.
    #[must_use]
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::new()
    }

    /// Loads configuration from the process environment.
    ///
    /// A `.env` file in the working directory is loaded first; a missing
    /// file is not an error. Variables already set in the environment take
    /// precedence over the file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] if `SHOP` or `ADMIN_TOKEN` is
    /// unset or empty, or a validation error for malformed values.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key))
    }

    /// Builds configuration from an arbitrary variable lookup.
    ///
    /// This holds all parsing and validation, decoupled from the real
    /// environment so it can be driven by a `HashMap` in tests.
    ///
    /// # Errors
    ///
    /// Same as [`AppConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let optional = |var: &str| lookup(var).ok().filter(|value| !value.trim().is_empty());
        let require = |var: &'static str| -> Result<String, ConfigError> {
            optional(var).ok_or(ConfigError::MissingEnvVar { var })
        };

        let shop = require(SHOP_VAR)?;
        let access_token = require(ADMIN_TOKEN_VAR)?;

        let mut builder = Self::builder()
            .shop(ShopDomain::new(shop)?)
            .access_token(AccessToken::new(access_token)?);

        if let Some(version) = optional(API_VERSION_VAR) {
            builder = builder.api_version(version.parse()?);
        }
        if let Some(host) = optional(API_HOST_VAR) {
            builder = builder.api_host(HostUrl::new(host)?);
        }
        if let Some(page_size) = optional(PAGE_SIZE_VAR) {
            builder = builder.page_size(parse_page_size(&page_size)?);
        }

        builder.build()
    }

    /// Returns the shop domain.
    #[must_use]
    pub const fn shop(&self) -> &ShopDomain {
        &self.shop
    }

    /// Returns the access token.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the API host override, if configured.
    #[must_use]
    pub const fn api_host(&self) -> Option<&HostUrl> {
        self.api_host.as_ref()
    }

    /// Returns the number of items requested per page.
    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }
}

// Verify AppConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AppConfig>();
};

fn parse_page_size(raw: &str) -> Result<u32, ConfigError> {
    match raw.trim().parse::<u32>() {
        Ok(size) if size > 0 => Ok(size),
        _ => Err(ConfigError::InvalidPageSize {
            value: raw.to_string(),
        }),
    }
}

/// Builder for constructing [`AppConfig`] instances.
///
/// `shop` and `access_token` are required.
///
/// # Defaults
///
/// - `api_version`: Latest stable version
/// - `api_host`: `None`
/// - `page_size`: [`DEFAULT_PAGE_SIZE`]
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    shop: Option<ShopDomain>,
    access_token: Option<AccessToken>,
    api_version: Option<ApiVersion>,
    api_host: Option<HostUrl>,
    page_size: Option<u32>,
}

impl AppConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the shop domain (required).
    #[must_use]
    pub fn shop(mut self, shop: ShopDomain) -> Self {
        self.shop = Some(shop);
        self
    }

    /// Sets the access token (required).
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Routes requests to `host` instead of `https://{shop}`.
    #[must_use]
    pub fn api_host(mut self, host: HostUrl) -> Self {
        self.api_host = Some(host);
        self
    }

    /// Sets the page size. Zero is rejected by [`build`](Self::build).
    #[must_use]
    pub const fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Builds the [`AppConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `shop` or
    /// `access_token` is not set, and [`ConfigError::InvalidPageSize`] for
    /// a zero page size.
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let shop = self
            .shop
            .ok_or(ConfigError::MissingRequiredField { field: "shop" })?;
        let access_token = self
            .access_token
            .ok_or(ConfigError::MissingRequiredField {
                field: "access_token",
            })?;

        let page_size = self.page_size.unwrap_or(DEFAULT_PAGE_SIZE);
        if page_size == 0 {
            return Err(ConfigError::InvalidPageSize {
                value: page_size.to_string(),
            });
        }

        Ok(AppConfig {
            shop,
            access_token,
            api_version: self.api_version.unwrap_or_else(ApiVersion::latest),
            api_host: self.api_host,
            page_size,
        })
    }
}
