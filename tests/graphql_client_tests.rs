//! Integration tests for the GraphQL client against a mock Admin API.
//!
//! These tests verify request shape, response decoding, error mapping and
//! the cursor pagination loop.

use futures::StreamExt;
use serde_json::{json, Value};
use shopify_product_search::catalog::{self, Product, ProductsData};
use shopify_product_search::clients::graphql::{GraphqlClient, GraphqlError};
use shopify_product_search::clients::HttpError;
use shopify_product_search::{AccessToken, AppConfig, HostUrl, ShopDomain};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GRAPHQL_ENDPOINT: &str = "/admin/api/2025-10/graphql.json";

fn create_test_config(server: &MockServer) -> AppConfig {
    AppConfig::builder()
        .shop(ShopDomain::new("test-shop").unwrap())
        .access_token(AccessToken::new("test-token").unwrap())
        .api_host(HostUrl::new(server.uri()).unwrap())
        .build()
        .unwrap()
}

fn create_test_client(server: &MockServer) -> GraphqlClient {
    GraphqlClient::new(&create_test_config(server)).unwrap()
}

/// Builds a `products` response page holding one single-variant product per title.
fn products_page(titles: &[&str], end_cursor: Option<&str>) -> Value {
    let edges: Vec<Value> = titles
        .iter()
        .map(|title| {
            json!({
                "node": {
                    "id": format!("gid://shopify/Product/{title}"),
                    "title": title,
                    "variants": {
                        "edges": [{
                            "node": {
                                "id": format!("gid://shopify/ProductVariant/{title}"),
                                "title": "Default Title",
                                "price": "10.00"
                            }
                        }],
                        "pageInfo": { "hasNextPage": false, "endCursor": null }
                    }
                }
            })
        })
        .collect();

    json!({
        "data": {
            "products": {
                "edges": edges,
                "pageInfo": { "hasNextPage": end_cursor.is_some(), "endCursor": end_cursor }
            }
        }
    })
}

async fn mount_page(server: &MockServer, after: Value, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path(GRAPHQL_ENDPOINT))
        .and(body_partial_json(json!({ "variables": { "after": after } })))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

fn titles(products: &[Product]) -> Vec<&str> {
    products.iter().map(|p| p.title.as_str()).collect()
}

async fn request_count(server: &MockServer) -> usize {
    server.received_requests().await.map_or(0, |requests| requests.len())
}

// ============================================================================
// Pagination Tests
// ============================================================================

#[tokio::test]
async fn test_fetch_all_follows_cursor_until_last_page() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        Value::Null,
        ResponseTemplate::new(200).set_body_json(products_page(&["A", "B"], Some("c1"))),
    )
    .await;
    mount_page(
        &server,
        json!("c1"),
        ResponseTemplate::new(200).set_body_json(products_page(&["C", "D"], Some("c2"))),
    )
    .await;
    mount_page(
        &server,
        json!("c2"),
        ResponseTemplate::new(200).set_body_json(products_page(&["E"], None)),
    )
    .await;

    let client = create_test_client(&server);
    let products = client
        .fetch_all::<ProductsData>(catalog::PRODUCTS_QUERY, catalog::search_variables("x"), 2)
        .await
        .unwrap();

    assert_eq!(titles(&products), ["A", "B", "C", "D", "E"]);
    assert_eq!(request_count(&server).await, 3);
}

#[tokio::test]
async fn test_fetch_all_single_page_issues_one_request() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        Value::Null,
        ResponseTemplate::new(200).set_body_json(products_page(&["Only"], None)),
    )
    .await;

    let client = create_test_client(&server);
    let products = client
        .fetch_all::<ProductsData>(catalog::PRODUCTS_QUERY, catalog::search_variables("x"), 5)
        .await
        .unwrap();

    assert_eq!(titles(&products), ["Only"]);
    assert_eq!(request_count(&server).await, 1);
}

#[tokio::test]
async fn test_fetch_all_with_no_matches_returns_empty() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        Value::Null,
        ResponseTemplate::new(200).set_body_json(products_page(&[], None)),
    )
    .await;

    let client = create_test_client(&server);
    let products = client
        .fetch_all::<ProductsData>(catalog::PRODUCTS_QUERY, catalog::search_variables("x"), 5)
        .await
        .unwrap();

    assert!(products.is_empty());
}

#[tokio::test]
async fn test_request_carries_query_variables_and_headers() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GRAPHQL_ENDPOINT))
        .and(header("X-Shopify-Access-Token", "test-token"))
        .and(header("Content-Type", "application/json"))
        .and(body_partial_json(json!({
            "query": catalog::PRODUCTS_QUERY,
            "variables": { "name": "title:*shirt*", "first": 5, "after": null }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(products_page(&["Shirt"], None)))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let products = client
        .fetch_all::<ProductsData>(catalog::PRODUCTS_QUERY, catalog::search_variables("shirt"), 5)
        .await
        .unwrap();

    assert_eq!(titles(&products), ["Shirt"]);
}

#[tokio::test]
async fn test_pagination_variables_override_caller_values() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GRAPHQL_ENDPOINT))
        .and(body_partial_json(json!({
            "variables": { "name": "title:*x*", "first": 3, "after": null }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(products_page(&["A"], None)))
        .expect(1)
        .mount(&server)
        .await;

    let mut variables = catalog::search_variables("x");
    variables.insert("first".to_string(), json!(100));
    variables.insert("after".to_string(), json!("stale"));

    let client = create_test_client(&server);
    let products = client
        .fetch_all::<ProductsData>(catalog::PRODUCTS_QUERY, variables, 3)
        .await
        .unwrap();

    assert_eq!(products.len(), 1);
}

#[tokio::test]
async fn test_pages_stream_is_lazy() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        Value::Null,
        ResponseTemplate::new(200).set_body_json(products_page(&["A"], Some("c1"))),
    )
    .await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({ "variables": { "after": "c1" } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(products_page(&["B"], None)))
        .expect(0)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let pages = client.pages::<ProductsData>(catalog::PRODUCTS_QUERY, catalog::search_variables("x"), 1);
    futures::pin_mut!(pages);

    let first = pages.next().await.unwrap().unwrap();

    assert_eq!(titles(&first), ["A"]);
    assert_eq!(request_count(&server).await, 1);
}

#[tokio::test]
async fn test_next_page_without_cursor_is_an_error() {
    let server = MockServer::start().await;
    let mut body = products_page(&["A"], None);
    body["data"]["products"]["pageInfo"]["hasNextPage"] = json!(true);
    mount_page(&server, Value::Null, ResponseTemplate::new(200).set_body_json(body)).await;

    let client = create_test_client(&server);
    let result = client
        .fetch_all::<ProductsData>(catalog::PRODUCTS_QUERY, catalog::search_variables("x"), 5)
        .await;

    assert!(matches!(result, Err(GraphqlError::MissingCursor)));
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[tokio::test]
async fn test_api_errors_on_later_page_abort_whole_fetch() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        Value::Null,
        ResponseTemplate::new(200).set_body_json(products_page(&["A", "B"], Some("c1"))),
    )
    .await;
    mount_page(
        &server,
        json!("c1"),
        ResponseTemplate::new(200).set_body_json(json!({
            "errors": [
                { "message": "Throttled", "extensions": { "code": "THROTTLED" } },
                { "message": "Try again later" }
            ]
        })),
    )
    .await;

    let client = create_test_client(&server);
    let result = client
        .fetch_all::<ProductsData>(catalog::PRODUCTS_QUERY, catalog::search_variables("x"), 2)
        .await;

    match result {
        Err(error @ GraphqlError::Api { .. }) => {
            assert_eq!(error.to_string(), "GraphQL error: Throttled, Try again later");
        }
        other => panic!("Expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_errors_fail_even_when_data_is_present() {
    let server = MockServer::start().await;
    let mut body = products_page(&["A"], None);
    body["errors"] = json!([{ "message": "Access denied for variants field" }]);
    mount_page(&server, Value::Null, ResponseTemplate::new(200).set_body_json(body)).await;

    let client = create_test_client(&server);
    let result = client
        .fetch_all::<ProductsData>(catalog::PRODUCTS_QUERY, catalog::search_variables("x"), 5)
        .await;

    match result {
        Err(GraphqlError::Api { messages }) => {
            assert_eq!(messages, ["Access denied for variants field"]);
        }
        other => panic!("Expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_success_status_is_transport_error_without_decoding() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        Value::Null,
        ResponseTemplate::new(500).set_body_string("<html>upstream exploded</html>"),
    )
    .await;

    let client = create_test_client(&server);
    let result = client
        .fetch_all::<ProductsData>(catalog::PRODUCTS_QUERY, catalog::search_variables("x"), 5)
        .await;

    match result {
        Err(error @ GraphqlError::Http(HttpError::Response(_))) => {
            assert_eq!(error.to_string(), "GraphQL request failed: Internal Server Error");
        }
        other => panic!("Expected Http response error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_success_status_ignores_errors_in_body() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        Value::Null,
        ResponseTemplate::new(401)
            .insert_header("X-Request-Id", "req-42")
            .set_body_json(json!({ "errors": "[API] Invalid API key or access token" })),
    )
    .await;

    let client = create_test_client(&server);
    let result = client
        .fetch_all::<ProductsData>(catalog::PRODUCTS_QUERY, catalog::search_variables("x"), 5)
        .await;

    match result {
        Err(GraphqlError::Http(HttpError::Response(e))) => {
            assert_eq!(e.code, 401);
            assert_eq!(e.status_text, "Unauthorized");
            assert_eq!(e.error_reference.as_deref(), Some("req-42"));
        }
        other => panic!("Expected Http response error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_transport_error_on_later_page_discards_earlier_pages() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        Value::Null,
        ResponseTemplate::new(200).set_body_json(products_page(&["A"], Some("c1"))),
    )
    .await;
    mount_page(&server, json!("c1"), ResponseTemplate::new(503)).await;

    let client = create_test_client(&server);
    let result = client
        .fetch_all::<ProductsData>(catalog::PRODUCTS_QUERY, catalog::search_variables("x"), 1)
        .await;

    assert!(matches!(
        result,
        Err(GraphqlError::Http(HttpError::Response(ref e))) if e.code == 503
    ));
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        Value::Null,
        ResponseTemplate::new(200).set_body_string("this is not json"),
    )
    .await;

    let client = create_test_client(&server);
    let result = client
        .fetch_all::<ProductsData>(catalog::PRODUCTS_QUERY, catalog::search_variables("x"), 5)
        .await;

    assert!(matches!(result, Err(GraphqlError::Decode(_))));
}

#[tokio::test]
async fn test_schema_mismatch_is_decode_error() {
    let server = MockServer::start().await;
    let mut body = products_page(&["A"], None);
    body["data"]["products"]["edges"][0]["node"]["variants"]["edges"][0]["node"]["price"] =
        json!(10.0);
    mount_page(&server, Value::Null, ResponseTemplate::new(200).set_body_json(body)).await;

    let client = create_test_client(&server);
    let result = client
        .fetch_all::<ProductsData>(catalog::PRODUCTS_QUERY, catalog::search_variables("x"), 5)
        .await;

    assert!(matches!(result, Err(GraphqlError::Decode(_))));
}

// ============================================================================
// Single Query Tests
// ============================================================================

#[tokio::test]
async fn test_query_decodes_typed_data() {
    #[derive(serde::Deserialize)]
    struct ShopData {
        shop: Shop,
    }
    #[derive(serde::Deserialize)]
    struct Shop {
        name: String,
    }

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GRAPHQL_ENDPOINT))
        .and(body_partial_json(json!({ "query": "{ shop { name } }", "variables": {} })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "data": { "shop": { "name": "Test Shop" } } })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let data: ShopData = client.query("{ shop { name } }", json!({})).await.unwrap();

    assert_eq!(data.shop.name, "Test Shop");
}

#[tokio::test]
async fn test_query_with_null_data_is_missing_data() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": null })))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let result = client.query::<Value>("{ shop { name } }", json!({})).await;

    assert!(matches!(result, Err(GraphqlError::MissingData)));
}

#[tokio::test]
async fn test_empty_errors_list_still_fails() {
    let server = MockServer::start().await;
    let mut body = products_page(&["A"], None);
    body["errors"] = json!([]);
    mount_page(&server, Value::Null, ResponseTemplate::new(200).set_body_json(body)).await;

    let client = create_test_client(&server);
    let result = client
        .fetch_all::<ProductsData>(catalog::PRODUCTS_QUERY, catalog::search_variables("x"), 5)
        .await;

    match result {
        Err(GraphqlError::Api { messages }) => assert!(messages.is_empty()),
        other => panic!("Expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_null_errors_is_not_a_failure() {
    let server = MockServer::start().await;
    let mut body = products_page(&["A"], None);
    body["errors"] = Value::Null;
    mount_page(&server, Value::Null, ResponseTemplate::new(200).set_body_json(body)).await;

    let client = create_test_client(&server);
    let products = client
        .fetch_all::<ProductsData>(catalog::PRODUCTS_QUERY, catalog::search_variables("x"), 5)
        .await
        .unwrap();

    assert_eq!(titles(&products), ["A"]);
}
