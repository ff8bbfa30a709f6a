//! GraphQL client implementation for the Admin API.
//!
//! This module provides the [`GraphqlClient`] type: single queries through
//! [`GraphqlClient::query`] and cursor pagination through
//! [`GraphqlClient::pages`] and [`GraphqlClient::fetch_all`].

use futures::stream::{self, Stream, TryStreamExt};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::clients::graphql::{GraphqlError, Paginated};
use crate::clients::{HttpClient, HttpRequest};
use crate::config::{ApiVersion, AppConfig};

/// Path of the GraphQL endpoint below `/admin/api/{version}`.
pub const GRAPHQL_PATH: &str = "graphql.json";

/// The response envelope. `data` stays untyped until `errors` has been
/// checked, so a partial or null `data` next to errors still reports them.
#[derive(Debug, Deserialize)]
struct GraphqlResponse {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Option<Vec<GraphqlErrorEntry>>,
}

#[derive(Debug, Deserialize)]
struct GraphqlErrorEntry {
    message: String,
}

enum PageState {
    Next(Option<String>),
    Done,
}

/// GraphQL API client for the Admin API.
///
/// Requests are issued one at a time; nothing is retried.
/// `GraphqlClient` is `Send + Sync`.
///
/// # Example
///
/// ```rust,ignore
/// use shopify_product_search::{AppConfig, GraphqlClient};
/// use shopify_product_search::catalog::{self, ProductsData};
///
/// let config = AppConfig::from_env()?;
/// let client = GraphqlClient::new(&config)?;
///
/// let products = client
///     .fetch_all::<ProductsData>(catalog::PRODUCTS_QUERY, catalog::search_variables("shirt"), 5)
///     .await?;
/// ```
#[derive(Debug)]
pub struct GraphqlClient {
    http_client: HttpClient,
    api_version: ApiVersion,
    page_size: u32,
}

// Verify GraphqlClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GraphqlClient>();
};

impl GraphqlClient {
    /// Creates a new GraphQL client using the configured API version.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &AppConfig) -> Result<Self, GraphqlError> {
        Self::with_version(config, config.api_version().clone())
    }

    /// Creates a new GraphQL client with a specific API version override.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::Http`] if the HTTP client cannot be built.
    pub fn with_version(config: &AppConfig, version: ApiVersion) -> Result<Self, GraphqlError> {
        if &version != config.api_version() {
            tracing::debug!(
                "GraphQL client overriding default API version {} with {}",
                config.api_version(),
                version
            );
        }

        let base_path = format!("/admin/api/{version}");
        let http_client = HttpClient::new(base_path, config)?;

        Ok(Self {
            http_client,
            api_version: version,
            page_size: config.page_size(),
        })
    }

    /// Returns the API version being used by this client.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the configured page size.
    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Returns the endpoint URL requests are sent to.
    #[must_use]
    pub fn endpoint(&self) -> String {
        self.http_client.url_for(GRAPHQL_PATH)
    }

    /// Executes one GraphQL request and decodes its `data` into `T`.
    ///
    /// # Errors
    ///
    /// - [`GraphqlError::Http`] for network errors and non-2xx statuses
    /// - [`GraphqlError::Api`] if the body contains an `errors` list,
    ///   even an empty one, whatever the rest of the body holds
    /// - [`GraphqlError::Decode`] if the body or `data` does not match
    /// - [`GraphqlError::MissingData`] if `data` is absent or null
    pub async fn query<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: Value,
    ) -> Result<T, GraphqlError> {
        let body = serde_json::json!({
            "query": query,
            "variables": variables,
        });

        let request = HttpRequest::builder(GRAPHQL_PATH)
            .body(body)
            .build()
            .map_err(|e| GraphqlError::Http(e.into()))?;
        let response = self.http_client.request(request).await?;

        let envelope: GraphqlResponse = response.json()?;
        if let Some(errors) = envelope.errors {
            return Err(GraphqlError::Api {
                messages: errors.into_iter().map(|e| e.message).collect(),
            });
        }

        match envelope.data {
            Some(data) if !data.is_null() => Ok(serde_json::from_value(data)?),
            _ => Err(GraphqlError::MissingData),
        }
    }

    /// Streams the pages of the connection selected by `D`.
    ///
    /// Each poll issues at most one request with `variables` plus
    /// `first = page_size` and `after = <cursor>` (null on the first page),
    /// and yields that page's nodes in order. The stream ends after the
    /// page whose `hasNextPage` is false. An error ends the stream.
    pub fn pages<'a, D>(
        &'a self,
        query: &'a str,
        variables: Map<String, Value>,
        page_size: u32,
    ) -> impl Stream<Item = Result<Vec<D::Node>, GraphqlError>> + 'a
    where
        D: Paginated + 'a,
    {
        stream::try_unfold(
            (PageState::Next(None), 1_usize),
            move |(state, page)| {
                let page_variables = variables.clone();
                async move {
                    match state {
                        PageState::Done => Ok(None),
                        PageState::Next(after) => self
                            .next_page::<D>(query, page_variables, page_size, page, after)
                            .await
                            .map(|(nodes, next)| Some((nodes, (next, page + 1)))),
                    }
                }
            },
        )
    }

    /// Requests one page and works out where the next one starts.
    async fn next_page<D: Paginated>(
        &self,
        query: &str,
        mut variables: Map<String, Value>,
        page_size: u32,
        page: usize,
        after: Option<String>,
    ) -> Result<(Vec<D::Node>, PageState), GraphqlError> {
        tracing::debug!(page, after = ?after, first = page_size, "Fetching page");

        variables.insert("first".to_string(), Value::from(page_size));
        variables.insert("after".to_string(), after.map_or(Value::Null, Value::String));

        let data: D = self.query(query, Value::Object(variables)).await?;
        let (nodes, page_info) = data.into_connection().into_parts();

        let next = match (page_info.has_next_page, page_info.end_cursor) {
            (false, _) => PageState::Done,
            (true, Some(cursor)) => PageState::Next(Some(cursor)),
            (true, None) => return Err(GraphqlError::MissingCursor),
        };

        Ok((nodes, next))
    }

    /// Fetches every page of the connection selected by `D` and returns all
    /// nodes in arrival order.
    ///
    /// There is no page limit. Any failure discards what was already
    /// collected and returns the error.
    ///
    /// # Errors
    ///
    /// Any error from [`query`](Self::query), or
    /// [`GraphqlError::MissingCursor`] if a page claims a successor but
    /// carries no cursor.
    pub async fn fetch_all<D: Paginated>(
        &self,
        query: &str,
        variables: Map<String, Value>,
        page_size: u32,
    ) -> Result<Vec<D::Node>, GraphqlError> {
        let pages = self.pages::<D>(query, variables, page_size);
        futures::pin_mut!(pages);

        let mut all_nodes = Vec::new();
        while let Some(nodes) = pages.try_next().await? {
            all_nodes.extend(nodes);
        }

        tracing::debug!(count = all_nodes.len(), "Fetched all pages");
        Ok(all_nodes)
    }
}
