use std::fmt;

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use pantry::catalog::models::{Dish, Product};

/// Compile-time override for the catalog service endpoint.
fn api_base() -> &'static str {
    option_env!("PANTRY_API_URL").unwrap_or("http://localhost:8080")
}

/// API client error type
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogError {
    Network(String),
    Server { status: u16, message: String },
    Deserialization(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Network(msg) => write!(f, "Network error: {}", msg),
            CatalogError::Server { status, message } => {
                write!(f, "Service error ({}): {}", status, message)
            }
            CatalogError::Deserialization(msg) => write!(f, "Deserialization error: {}", msg),
        }
    }
}

type Result<T> = std::result::Result<T, CatalogError>;

async fn send(request: RequestBuilder) -> Result<Response> {
    request
        .send()
        .await
        .map_err(|e| CatalogError::Network(e.to_string()))
}

/// Decode a catalog response, normalizing explicit not-found to `None`.
///
/// 2xx parses the body; 4xx means the service reports the resource absent
/// and never becomes an error. Transport failures are handled by `send`.
async fn decode_optional<T: DeserializeOwned>(response: Response) -> Result<Option<T>> {
    let status = response.status();

    if (200..300).contains(&status) {
        response
            .json::<T>()
            .await
            .map(Some)
            .map_err(|e| CatalogError::Deserialization(e.to_string()))
    } else if (400..500).contains(&status) {
        Ok(None)
    } else {
        let message = response.text().await.unwrap_or_default();
        Err(CatalogError::Server { status, message })
    }
}

/// Query products matching the filter text. `None` means the service
/// reported not-found, distinct from a successful query with no matches.
pub async fn products_by_filter(filter: &str) -> Result<Option<Vec<Product>>> {
    let url = format!("{}/products", api_base());
    let response = send(Request::get(&url).query([("filter", filter)])).await?;
    decode_optional(response).await
}

/// Fetch a single product by id
pub async fn product_by_id(id: i64) -> Result<Option<Product>> {
    let url = format!("{}/product/{}", api_base(), id);
    let response = send(Request::get(&url)).await?;
    decode_optional(response).await
}

/// Fetch a dish with its embedded ingredients
pub async fn dish_by_id(id: i64) -> Result<Option<Dish>> {
    let url = format!("{}/dish/{}", api_base(), id);
    let response = send(Request::get(&url)).await?;
    decode_optional(response).await
}
