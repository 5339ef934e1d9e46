//! Integration tests for `StorefrontClient` and `QuickViewLoader`.
//!
//! Each test stands up a local `wiremock` server, so no real network traffic
//! is made.

use std::time::Duration;

use pinteya_client::{ClientError, ModalLifecycle, QuickViewLoader, StorefrontClient};
use pinteya_core::{AliasTable, ProductId};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> StorefrontClient {
    StorefrontClient::new(base_url, 5, "pinteya-test/0.1")
        .expect("failed to build test StorefrontClient")
}

fn id(raw: i64) -> ProductId {
    ProductId::new(raw).unwrap()
}

fn product_json(id: i64) -> serde_json::Value {
    json!({
        "success": true,
        "data": {
            "id": id,
            "name": "Látex Interior Mate",
            "category": { "name": "Pinturas" },
            "price": "3500",
            "discounted_price": null,
            "stock": 12,
            "images": ["/img/latex.webp"]
        }
    })
}

fn variants_json(product_id: i64) -> serde_json::Value {
    json!({
        "success": true,
        "data": [
            {
                "id": 501, "product_id": product_id, "color_name": "Blanco", "measure": "4L",
                "finish": "Mate", "price_list": 3500, "price_sale": 3000, "stock": 3,
                "is_active": true, "is_default": true
            },
            {
                "id": 502, "product_id": product_id, "color_name": "Blanco", "measure": "20L",
                "finish": "Mate", "price_list": "14000", "stock": 1, "is_active": true
            }
        ]
    })
}

fn related_json() -> serde_json::Value {
    json!({
        "success": true,
        "data": {
            "base_name": "Látex Interior Mate",
            "products": [
                { "id": 40, "name": "Látex Interior Mate 10L", "price": 9000, "measure": "10L", "stock": 2 }
            ]
        }
    })
}

async fn mount_json(server: &MockServer, route: &str, status: u16, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_json(&body))
        .mount(server)
        .await;
}

// ---------------------------------------------------------------------------
// StorefrontClient
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fetch_product_returns_normalized_product() {
    let server = MockServer::start().await;
    mount_json(&server, "/api/products/12", 200, product_json(12)).await;

    let product = test_client(&server.uri())
        .fetch_product(id(12))
        .await
        .expect("should parse product");

    assert_eq!(product.id, id(12));
    assert_eq!(product.name, "Látex Interior Mate");
    assert_eq!(product.price.to_string(), "3500");
    assert_eq!(product.stock, Some(12));
    assert_eq!(product.images, vec!["/img/latex.webp"]);
}

#[tokio::test]
async fn fetch_product_maps_404_to_not_found() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/api/products/99",
        404,
        json!({ "success": false, "data": null, "error": "Producto no encontrado" }),
    )
    .await;

    let err = test_client(&server.uri())
        .fetch_product(id(99))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::NotFound { ref url } if url.ends_with("/api/products/99")));
}

#[tokio::test]
async fn fetch_product_maps_5xx_to_unexpected_status() {
    let server = MockServer::start().await;
    mount_json(&server, "/api/products/12", 503, json!({ "success": false })).await;

    let err = test_client(&server.uri())
        .fetch_product(id(12))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::UnexpectedStatus { status: 503, .. }));
}

#[tokio::test]
async fn unsuccessful_envelope_is_api_error() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/api/products/12",
        200,
        json!({ "success": false, "data": null, "error": "Servicio no disponible" }),
    )
    .await;

    let err = test_client(&server.uri())
        .fetch_product(id(12))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Api(ref msg) if msg == "Servicio no disponible"));
}

#[tokio::test]
async fn malformed_body_is_deserialize_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products/12"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = test_client(&server.uri())
        .fetch_product(id(12))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Deserialize { .. }));
}

#[tokio::test]
async fn fetch_variants_reads_rows_and_null_data() {
    let server = MockServer::start().await;
    mount_json(&server, "/api/products/34/variants", 200, variants_json(34)).await;
    mount_json(
        &server,
        "/api/products/35/variants",
        200,
        json!({ "success": true, "data": null }),
    )
    .await;

    let client = test_client(&server.uri());
    let variants = client.fetch_variants(id(34)).await.unwrap();
    assert_eq!(variants.len(), 2);
    assert_eq!(variants[0].price_sale.map(|p| p.to_string()), Some("3000".to_owned()));
    assert!(variants[0].is_default);

    assert!(client.fetch_variants(id(35)).await.unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// QuickViewLoader
// ---------------------------------------------------------------------------

#[tokio::test]
async fn loader_fetches_variants_through_alias() {
    let server = MockServer::start().await;
    mount_json(&server, "/api/products/38", 200, product_json(38)).await;
    mount_json(&server, "/api/products/38/related", 200, related_json()).await;
    Mock::given(method("GET"))
        .and(path("/api/products/34/variants"))
        .respond_with(ResponseTemplate::new(200).set_body_json(variants_json(34)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/products/38/variants"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true, "data": [] })))
        .expect(0)
        .mount(&server)
        .await;

    let loader = QuickViewLoader::new(test_client(&server.uri()), AliasTable::builtin());
    let lifecycle = ModalLifecycle::new();
    let data = loader.load("38", &lifecycle.open()).await.unwrap();

    assert_eq!(data.product.map(|p| p.id), Some(id(38)));
    assert_eq!(data.variants.len(), 2);
    assert_eq!(data.related.products.len(), 1);
}

#[tokio::test]
async fn loader_degrades_failed_parts_to_empty() {
    let server = MockServer::start().await;
    mount_json(&server, "/api/products/12", 200, product_json(12)).await;
    mount_json(&server, "/api/products/12/variants", 500, json!({})).await;
    mount_json(
        &server,
        "/api/products/12/related",
        200,
        json!({ "success": false, "error": "boom" }),
    )
    .await;

    let loader = QuickViewLoader::new(test_client(&server.uri()), AliasTable::default());
    let lifecycle = ModalLifecycle::new();
    let data = loader.load("12", &lifecycle.open()).await.unwrap();

    assert!(data.product.is_some());
    assert!(data.variants.is_empty());
    assert!(data.related.is_empty());
}

#[tokio::test]
async fn loader_with_invalid_id_makes_no_requests() {
    let server = MockServer::start().await;
    let loader = QuickViewLoader::new(test_client(&server.uri()), AliasTable::builtin());
    let lifecycle = ModalLifecycle::new();

    for raw in ["", "abc", "0", "-4"] {
        let data = loader.load(raw, &lifecycle.open()).await.unwrap();
        assert!(data.product.is_none());
        assert!(data.variants.is_empty());
    }

    let requests = server.received_requests().await.unwrap_or_default();
    assert!(requests.is_empty());
}

#[tokio::test]
async fn closing_the_modal_cancels_the_load() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(product_json(12))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let loader = QuickViewLoader::new(test_client(&server.uri()), AliasTable::default());
    let lifecycle = ModalLifecycle::new();
    let token = lifecycle.open();

    let load = loader.load("12", &token);
    let close = async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        lifecycle.close();
    };
    let (result, ()) = tokio::join!(load, close);
    assert!(matches!(result, Err(ClientError::Cancelled)));
}
