#![allow(dead_code)]

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type — the failure half of the result envelope.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every internal failure is recovered here and turned into a structured
/// `{error, received_keys?}` body; nothing propagates to the transport layer.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {reason}")]
    Validation {
        reason: String,
        /// Top-level keys the client actually sent, for debugging malformed requests.
        received_keys: Vec<String>,
    },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Generation error: {0}")]
    Generation(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Validation {
                reason,
                received_keys,
            } => {
                let mut body = json!({ "error": reason });
                if !received_keys.is_empty() {
                    body["received_keys"] = json!(received_keys);
                }
                (StatusCode::BAD_REQUEST, body)
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, json!({ "error": msg })),
            AppError::Generation(msg) => {
                // Full detail goes to the log; the client gets a generic message.
                tracing::error!("Generation error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Server error: counterfactual generation failed" }),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Server error: an internal failure occurred" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
