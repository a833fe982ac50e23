use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum CliError {
    #[error("Failed to connect to the catalog service")]
    #[diagnostic(
        code(pantry::cli::connection_failed),
        help(
            "Is the catalog service running? It is expected at http://localhost:8080 by default.\nSet PANTRY_API_URL or pass --api-url to point at a different endpoint."
        )
    )]
    ConnectionFailed {
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid response from the catalog service: {message}")]
    #[diagnostic(
        code(pantry::cli::invalid_response),
        help(
            "The service returned data in an unexpected format. This might indicate a version mismatch."
        )
    )]
    InvalidResponse { message: String },

    #[error("Catalog service error ({status}): {message}")]
    #[diagnostic(code(pantry::cli::api_error))]
    ApiError { status: u16, message: String },
}

impl From<reqwest::Error> for CliError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() || e.is_timeout() {
            CliError::ConnectionFailed { source: e }
        } else {
            CliError::InvalidResponse {
                message: e.to_string(),
            }
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::InvalidResponse {
            message: e.to_string(),
        }
    }
}

pub type CliResult<T> = Result<T, CliError>;
