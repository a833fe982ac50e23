use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::env;
use tracing::debug;

use crate::cli::error::{CliError, CliResult};

/// HTTP client for the remote catalog service.
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    /// Create a new API client.
    ///
    /// Priority for base URL:
    /// 1. Explicit `api_url` parameter
    /// 2. PANTRY_API_URL environment variable
    /// 3. Default: http://localhost:8080
    pub fn new(api_url: Option<String>) -> Self {
        let base_url = api_url
            .or_else(|| env::var("PANTRY_API_URL").ok())
            .unwrap_or_else(|| "http://localhost:8080".to_string());

        Self {
            base_url,
            client: Client::new(),
        }
    }

    /// Get the base URL being used
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a GET request builder
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "GET");
        self.client.get(&url)
    }

    /// Create a POST request builder
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "POST");
        self.client.post(&url)
    }

    /// Decode a response from the catalog service, normalizing explicit
    /// not-found to `None`.
    ///
    /// 2xx parses the body; any 4xx means the service reports the resource
    /// absent and maps to `Ok(None)` rather than an error. Everything else
    /// surfaces as `CliError::ApiError`. Transport failures never reach
    /// here — they fail the `send` itself and propagate as errors.
    pub async fn handle_optional<T: DeserializeOwned>(response: Response) -> CliResult<Option<T>> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map(Some)
                .map_err(|e| CliError::InvalidResponse {
                    message: e.to_string(),
                })
        } else if status.is_client_error() {
            debug!(status = status.as_u16(), "service reported absent");
            Ok(None)
        } else {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(CliError::ApiError {
                status: status.as_u16(),
                message,
            })
        }
    }
}
