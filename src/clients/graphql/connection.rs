//! Relay-style connection types and the [`Paginated`] seam.
//!
//! Shopify exposes every list as a connection: a set of `edges`, each
//! wrapping one `node`, plus a `pageInfo` telling the caller whether more
//! pages exist and where to resume.

use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Pagination metadata attached to a connection.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Whether another page follows this one.
    pub has_next_page: bool,
    /// Cursor to pass as `after` to fetch the next page.
    pub end_cursor: Option<String>,
}

/// One entry of a connection.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Edge<T> {
    /// The wrapped item.
    pub node: T,
}

/// A single page of a connection.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection<T> {
    /// Items in arrival order.
    pub edges: Vec<Edge<T>>,
    /// Where this page ends.
    pub page_info: PageInfo,
}

impl<T> Connection<T> {
    /// Iterates over the nodes of this page in order.
    pub fn nodes(&self) -> impl Iterator<Item = &T> {
        self.edges.iter().map(|edge| &edge.node)
    }

    /// Consumes the page, returning its nodes and page info.
    #[must_use]
    pub fn into_parts(self) -> (Vec<T>, PageInfo) {
        let nodes = self.edges.into_iter().map(|edge| edge.node).collect();
        (nodes, self.page_info)
    }
}

/// A GraphQL `data` payload that carries one paginated connection.
///
/// [`GraphqlClient::pages`](crate::GraphqlClient::pages) decodes each
/// response's `data` into `Self` and follows the connection returned by
/// [`into_connection`](Self::into_connection). Nested connections inside
/// the nodes are not followed.
pub trait Paginated: DeserializeOwned {
    /// The item type of the paginated connection.
    type Node;

    /// Extracts the connection to paginate.
    fn into_connection(self) -> Connection<Self::Node>;
}
