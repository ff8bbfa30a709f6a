//! # Shopify product search
//!
//! Searches a Shopify store's product catalog through the Admin GraphQL API
//! and prints every matching product/variant pair.
//!
//! ## Overview
//!
//! - [`AppConfig`]: shop domain and access token, read once from the
//!   environment and passed by reference
//! - [`GraphqlClient`]: authenticated GraphQL requests with strict response
//!   decoding and cursor pagination
//! - [`catalog`]: typed [`Product`](catalog::Product) and
//!   [`Variant`](catalog::Variant) plus the search query
//! - [`App`]: the command-line driver behind the `shopify-product-search` binary
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use shopify_product_search::{AppConfig, GraphqlClient};
//! use shopify_product_search::catalog::{self, ProductsData};
//!
//! let config = AppConfig::from_env()?;
//! let client = GraphqlClient::new(&config)?;
//!
//! let products = client
//!     .fetch_all::<ProductsData>(
//!         catalog::PRODUCTS_QUERY,
//!         catalog::search_variables("shirt"),
//!         config.page_size(),
//!     )
//!     .await?;
//!
//! for product in &products {
//!     for variant in product.variants() {
//!         println!("{} - {} - price ${}", product.title, variant.title, variant.price);
//!     }
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is a value passed explicitly
//! - **Fail-fast validation**: newtypes validate on construction
//! - **Sequential**: one request in flight at a time, no retries
//! - **Strict decoding**: responses that do not match the documented shape
//!   fail with a dedicated decode error

pub mod app;
pub mod catalog;
pub mod cli;
pub mod clients;
pub mod config;
pub mod error;

pub use app::{App, RunOutcome};
pub use cli::ArgumentParser;
pub use config::{
    AccessToken, ApiVersion, AppConfig, AppConfigBuilder, HostUrl, ShopDomain, DEFAULT_PAGE_SIZE,
};
pub use error::ConfigError;

pub use clients::graphql::{Connection, Edge, PageInfo, Paginated};
pub use clients::{
    GraphqlClient, GraphqlError, HttpClient, HttpError, HttpRequest, HttpResponse,
    HttpResponseError,
};
