use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::generation::validation::MAX_FIELD_LEN;
use crate::state::AppState;

/// GET /api/health
/// Returns a simple status object with service version and epoch timestamp.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "elsewhere-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().timestamp(),
    }))
}

/// GET /api/status
/// Service metadata: endpoint map plus generator info.
pub async fn status_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "service": "elsewhere-api",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running",
        "endpoints": {
            "/": "Main interface",
            "/api/generate": "Generate a counterfactual (POST)",
            "/api/health": "Health check (GET)",
            "/api/status": "Server status (GET)",
        },
        "generator_info": {
            "backend": state.generator.backend(),
            "max_input_length": MAX_FIELD_LEN,
        },
    }))
}
