use std::sync::Arc;

use crate::config::Config;
use crate::generation::generator::ScenarioGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// No durable state lives here: the generator is stateless across requests
/// (the template backend's RNG position is the only thing that advances).
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable scenario backend. Default: Claude. Swap via GENERATOR_MODE env.
    pub generator: Arc<dyn ScenarioGenerator>,
}
