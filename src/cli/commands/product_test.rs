use std::collections::HashMap;

use axum::Json;
use axum::Router;
use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use tokio::net::TcpListener;

use crate::catalog::models::{Product, ProductCategory};
use crate::cli::api_client::ApiClient;
use crate::cli::commands::product::*;
use crate::cli::error::CliError;

fn sample_product(id: i64) -> Product {
    Product {
        id,
        category: ProductCategory::Fruit,
        name: "Apple".to_string(),
        description: "Crisp red apple".to_string(),
        calories: 52.0,
        fats: 0.2,
        protein: 0.3,
        carbs: 14.0,
    }
}

async fn products_handler(Query(params): Query<HashMap<String, String>>) -> Response {
    match params.get("filter").map(String::as_str) {
        Some("apple") => Json(vec![sample_product(7)]).into_response(),
        Some("zzz no match") => Json(Vec::<Product>::new()).into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn product_handler(Path(id): Path<i64>) -> Response {
    if id == 7 {
        Json(sample_product(7)).into_response()
    } else {
        StatusCode::NOT_FOUND.into_response()
    }
}

async fn create_handler(Json(product): Json<Product>) -> Response {
    if product.name.is_empty() {
        StatusCode::BAD_REQUEST.into_response()
    } else {
        Json(serde_json::json!({ "id": 15 })).into_response()
    }
}

/// Spawn a stub catalog service on an ephemeral port
async fn spawn_catalog_stub() -> (String, tokio::task::JoinHandle<()>) {
    let app = Router::new()
        .route("/products", get(products_handler))
        .route("/product/{id}", get(product_handler))
        .route("/dishes", post(create_handler));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let url = format!("http://{}", addr);

    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    // Give server time to start
    tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

    (url, handle)
}

#[tokio::test(flavor = "multi_thread")]
async fn test_product_round_trip_by_id() {
    let (url, _handle) = spawn_catalog_stub().await;
    let api_client = ApiClient::new(Some(url));

    let fetched = lookup_product_by_id(&api_client, 7)
        .await
        .expect("lookup should succeed")
        .expect("product 7 exists on the stub");

    // Field-for-field equality with what the service stores
    assert_eq!(fetched, sample_product(7));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_product_lookup_absent() {
    let (url, _handle) = spawn_catalog_stub().await;
    let api_client = ApiClient::new(Some(url));

    let result = lookup_product_by_id(&api_client, 404).await;
    assert!(matches!(result, Ok(None)), "404 maps to absent, not error");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_filter_absent_distinct_from_empty() {
    let (url, _handle) = spawn_catalog_stub().await;
    let api_client = ApiClient::new(Some(url));

    let matched = lookup_products_by_filter(&api_client, "apple")
        .await
        .unwrap();
    assert_eq!(matched, Some(vec![sample_product(7)]));

    // Service found the resource, zero matches: an empty sequence
    let empty = lookup_products_by_filter(&api_client, "zzz no match")
        .await
        .unwrap();
    assert_eq!(empty, Some(Vec::new()));

    // Service reported not-found: absent, not an empty sequence
    let absent = lookup_products_by_filter(&api_client, "missing")
        .await
        .unwrap();
    assert_eq!(absent, None);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_filter_with_spaces_is_encoded() {
    let (url, _handle) = spawn_catalog_stub().await;
    let api_client = ApiClient::new(Some(url));

    // The stub matches the decoded filter verbatim, so this only passes if
    // the query parameter survives URL encoding intact.
    let empty = lookup_products_by_filter(&api_client, "zzz no match")
        .await
        .unwrap();
    assert_eq!(empty, Some(Vec::new()));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_create_product_returns_id() {
    let (url, _handle) = spawn_catalog_stub().await;
    let api_client = ApiClient::new(Some(url));

    let id = add_product(&api_client, &sample_product(0)).await.unwrap();
    assert_eq!(id, Some(15));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_create_product_rejected_is_absent() {
    let (url, _handle) = spawn_catalog_stub().await;
    let api_client = ApiClient::new(Some(url));

    let mut nameless = sample_product(0);
    nameless.name = String::new();

    let id = add_product(&api_client, &nameless).await.unwrap();
    assert_eq!(id, None);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_transport_failure_is_error_not_absent() {
    // Nothing listens here; the connection is refused.
    let api_client = ApiClient::new(Some("http://127.0.0.1:9".to_string()));

    let result = lookup_products_by_filter(&api_client, "apple").await;
    assert!(matches!(
        result,
        Err(CliError::ConnectionFailed { .. }) | Err(CliError::InvalidResponse { .. })
    ));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_search_products_rendering() {
    let (url, _handle) = spawn_catalog_stub().await;
    let api_client = ApiClient::new(Some(url));

    let table = search_products(&api_client, "apple", "table").await.unwrap();
    assert!(table.contains("Apple"));
    assert!(table.contains("fruit"));

    let empty = search_products(&api_client, "zzz no match", "table")
        .await
        .unwrap();
    assert_eq!(empty, "No products matched.");

    let absent = search_products(&api_client, "missing", "table")
        .await
        .unwrap();
    assert_eq!(absent, "Not found.");

    let json = search_products(&api_client, "apple", "json").await.unwrap();
    let parsed: Vec<Product> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, vec![sample_product(7)]);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_show_product_rendering() {
    let (url, _handle) = spawn_catalog_stub().await;
    let api_client = ApiClient::new(Some(url));

    let detail = show_product(&api_client, 7, "table").await.unwrap();
    assert!(detail.contains("Apple"));
    assert!(detail.contains("52.0 kcal/100g"));

    let missing = show_product(&api_client, 404, "table").await.unwrap();
    assert_eq!(missing, "Not found.");
}
