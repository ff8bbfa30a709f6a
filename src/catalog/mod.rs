//! Product catalog types and the product search query.
//!
//! Decoded from the Admin API `products` connection. Every value is built
//! fresh from a response and never mutated afterwards.
//!
//! # Variant truncation
//!
//! Each [`Product`] holds only the first page of its variants, as returned
//! alongside the product. Pagination follows the product cursor only;
//! [`Product::has_more_variants`] reports when variants were cut off.

mod query;

pub use query::{search_variables, title_filter, PRODUCTS_QUERY};

use serde::Deserialize;

use crate::clients::graphql::{Connection, Paginated};

/// A product variant. `price` is passed through exactly as received.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Variant {
    /// Global ID, e.g. `gid://shopify/ProductVariant/1`.
    pub id: String,
    /// Variant title, e.g. `Small`.
    pub title: String,
    /// Price as a decimal string, e.g. `19.99`.
    pub price: String,
}

/// A product with the first page of its variants.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Product {
    /// Global ID, e.g. `gid://shopify/Product/1`.
    pub id: String,
    /// Product title.
    pub title: String,
    /// First page of variants and its page info.
    pub variants: Connection<Variant>,
}

impl Product {
    /// Iterates over the variants returned with this product.
    pub fn variants(&self) -> impl Iterator<Item = &Variant> {
        self.variants.nodes()
    }

    /// Returns `true` if the product has variants beyond the first page.
    #[must_use]
    pub const fn has_more_variants(&self) -> bool {
        self.variants.page_info.has_next_page
    }
}

/// The `data` payload of [`PRODUCTS_QUERY`].
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ProductsData {
    /// One page of matching products.
    pub products: Connection<Product>,
}

impl Paginated for ProductsData {
    type Node = Product;

    fn into_connection(self) -> Connection<Product> {
        self.products
    }
}
