pub mod health;
pub mod index;

use axum::{
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::generation::handlers;
use crate::state::AppState;

async fn endpoint_not_found() -> Result<(), AppError> {
    Err(AppError::NotFound("Endpoint not found".to_string()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index::index_handler))
        .route("/api/generate", post(handlers::handle_generate))
        .route("/api/health", get(health::health_handler))
        .route("/api/status", get(health::status_handler))
        .fallback(endpoint_not_found)
        .with_state(state)
}
