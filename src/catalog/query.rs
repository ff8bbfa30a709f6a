use serde_json::{Map, Value};

/// Products matching a search string, each with its first page of variants.
///
/// `$first` bounds both the product page and each product's variant page.
pub const PRODUCTS_QUERY: &str = r"
query ($first: Int, $after: String, $name: String) {
    products(first: $first, after: $after, query: $name) {
        edges {
            node {
                id
                title
                variants(first: $first) {
                    edges {
                        node {
                            id
                            title
                            price
                        }
                    }
                    pageInfo {
                        hasNextPage
                        endCursor
                    }
                }
            }
        }
        pageInfo {
            hasNextPage
            endCursor
        }
    }
}
";

/// Builds the Shopify search syntax for a title substring match.
///
/// ```rust
/// use shopify_product_search::catalog::title_filter;
///
/// assert_eq!(title_filter("shirt"), "title:*shirt*");
/// ```
#[must_use]
pub fn title_filter(name: &str) -> String {
    format!("title:*{name}*")
}

/// Variables for [`PRODUCTS_QUERY`], without the pagination pair.
#[must_use]
pub fn search_variables(name: &str) -> Map<String, Value> {
    let mut variables = Map::new();
    variables.insert("name".to_string(), Value::String(title_filter(name)));
    variables
}
