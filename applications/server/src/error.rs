/// Server error types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::templates::TemplateError;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Schema construction failed: {0}")]
    SchemaConstruction(String),

    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ServerError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ServerError::Template(ref e) => {
                tracing::error!("Template error: {}", e);
                // Pages are HTML; answer with the plain-text 500 browsers show as-is.
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "500 - Internal Server Error",
                )
                    .into_response();
            }
            ServerError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Configuration error".to_string(),
                )
            }
            ServerError::SchemaConstruction(ref msg) => {
                tracing::error!("Schema error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Schema error".to_string(),
                )
            }
            ServerError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
