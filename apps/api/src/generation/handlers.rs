//! Axum route handler for the generation API.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::generation::validation::validate_request;
use crate::state::AppState;

/// Success half of the result envelope.
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub result: String,
}

/// POST /api/generate
///
/// Validator → Composer → generator backend → Normalizer → envelope.
/// The body is taken as raw JSON so validation failures can report the
/// top-level keys the client actually sent.
pub async fn handle_generate(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<GenerateResponse>, AppError> {
    let Json(body) = payload.map_err(|e| AppError::Validation {
        reason: format!("Request body must be valid JSON: {e}"),
        received_keys: vec![],
    })?;

    let input = validate_request(&body)?;

    info!(
        "Generating counterfactual ({}) for fact: {}...",
        state.generator.backend(),
        input.fact.chars().take(50).collect::<String>()
    );

    let result = state.generator.generate(&input).await?;

    Ok(Json(GenerateResponse { result }))
}
