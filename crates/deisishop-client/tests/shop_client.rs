//! Integration tests for the catalog read path of `ShopClient`.
//!
//! Uses `wiremock` to stand up a local HTTP server per test so no real
//! network traffic is made. The read endpoints must never surface an error:
//! every failure mode degrades to an empty list.

use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use deisishop_client::{ShopClient, PLACEHOLDER_IMAGE};

fn test_client(base_url: &str) -> ShopClient {
    ShopClient::with_base_url(base_url, 5, "deisishop-test/0.1")
        .expect("client construction should not fail")
}

/// A client pointed at a port nothing listens on, to exercise transport
/// failures without slow timeouts.
fn unreachable_client() -> ShopClient {
    test_client("http://127.0.0.1:9")
}

// ---------------------------------------------------------------------------
// fetch_products – happy path and normalization
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fetch_products_normalizes_well_formed_catalog() {
    let server = MockServer::start().await;

    let body = json!([
        {
            "id": 1,
            "title": "Caneca DEISI",
            "price": 9.5,
            "description": "Caneca de cerâmica",
            "category": "merchandising",
            "image": "https://example.test/caneca.png",
            "rating": { "rate": 4.1, "count": 33 }
        },
        {
            "id": 2,
            "title": "Sweatshirt",
            "price": 24.9,
            "description": "Com capuz",
            "category": "roupa",
            "image": "https://example.test/sweat.png",
            "rating": { "rate": 4.7, "count": 12 }
        }
    ]);

    Mock::given(method("GET"))
        .and(path("/products/"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let products = test_client(&server.uri()).fetch_products().await;

    assert_eq!(products.len(), 2);
    assert_eq!(products[0].id, 1);
    assert_eq!(products[0].title, "Caneca DEISI");
    assert_eq!(products[0].price, 9.5);
    assert_eq!(products[1].category, "roupa");
    assert_eq!(products[1].rating.count, 12);
}

#[tokio::test]
async fn fetch_products_defaults_malformed_records() {
    let server = MockServer::start().await;

    // One record with every field missing, one with wrong-typed fields.
    let body = json!([
        {},
        {
            "id": 9,
            "title": "Lápis",
            "price": "not-a-price",
            "image": "",
            "rating": "five stars"
        }
    ]);

    Mock::given(method("GET"))
        .and(path("/products/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let products = test_client(&server.uri()).fetch_products().await;

    assert_eq!(products.len(), 2);
    assert_eq!(products[0].id, 0);
    assert_eq!(products[0].title, "");
    assert_eq!(products[0].price, 0.0);
    assert_eq!(products[0].description, "");
    assert_eq!(products[0].category, "");
    assert_eq!(products[0].image, PLACEHOLDER_IMAGE);
    assert_eq!(products[0].rating.rate, 0.0);
    assert_eq!(products[0].rating.count, 0);

    assert_eq!(products[1].price, 0.0);
    assert_eq!(products[1].image, PLACEHOLDER_IMAGE);
    assert_eq!(products[1].rating.count, 0);
}

#[tokio::test]
async fn fetch_products_drops_non_object_entries() {
    let server = MockServer::start().await;

    let body = json!([{"id": 1, "title": "A"}, "stray string", 17, null]);

    Mock::given(method("GET"))
        .and(path("/products/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let products = test_client(&server.uri()).fetch_products().await;

    assert_eq!(products.len(), 1);
    assert_eq!(products[0].id, 1);
}

// ---------------------------------------------------------------------------
// fetch_products – degradation to empty
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fetch_products_returns_empty_on_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let products = test_client(&server.uri()).fetch_products().await;
    assert!(products.is_empty(), "5xx must degrade to an empty catalog");
}

#[tokio::test]
async fn fetch_products_returns_empty_on_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products/"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let products = test_client(&server.uri()).fetch_products().await;
    assert!(products.is_empty());
}

#[tokio::test]
async fn fetch_products_returns_empty_on_non_array_payload() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({"products": []})))
        .mount(&server)
        .await;

    let products = test_client(&server.uri()).fetch_products().await;
    assert!(products.is_empty(), "non-array payload must count as empty");
}

#[tokio::test]
async fn fetch_products_returns_empty_on_malformed_json() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("this is not json"))
        .mount(&server)
        .await;

    let products = test_client(&server.uri()).fetch_products().await;
    assert!(products.is_empty());
}

#[tokio::test]
async fn fetch_products_returns_empty_on_connection_failure() {
    let products = unreachable_client().fetch_products().await;
    assert!(
        products.is_empty(),
        "transport failure must degrade to an empty catalog"
    );
}

// ---------------------------------------------------------------------------
// fetch_categories
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fetch_categories_coerces_entries_and_filters_empties() {
    let server = MockServer::start().await;

    let body = json!(["roupa", "", "merchandising", 3, null, ["livros"]]);

    Mock::given(method("GET"))
        .and(path("/categories/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let categories = test_client(&server.uri()).fetch_categories().await;
    assert_eq!(categories, vec!["roupa", "merchandising", "3"]);
}

#[tokio::test]
async fn fetch_categories_returns_empty_on_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/categories/"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let categories = test_client(&server.uri()).fetch_categories().await;
    assert!(categories.is_empty());
}

#[tokio::test]
async fn fetch_categories_returns_empty_on_connection_failure() {
    let categories = unreachable_client().fetch_categories().await;
    assert!(categories.is_empty());
}
