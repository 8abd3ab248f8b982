mod config;
mod errors;
mod generation;
mod llm_client;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, GeneratorMode};
use crate::generation::generator::{ClaudeScenarioGenerator, ScenarioGenerator};
use crate::generation::templates::TemplateGenerator;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("elsewhere_api={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting elsewhere-api v{}", env!("CARGO_PKG_VERSION"));

    // Select generator backend
    let generator: Arc<dyn ScenarioGenerator> = match config.generator_mode {
        GeneratorMode::Claude => {
            if config.anthropic_api_key.is_none() {
                warn!(
                    "ANTHROPIC_API_KEY is not set — /api/generate will return 500 \
                     until it is configured"
                );
            }
            let llm = LlmClient::new(config.anthropic_api_key.clone());
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Arc::new(ClaudeScenarioGenerator::new(llm))
        }
        GeneratorMode::Template => Arc::new(TemplateGenerator::new()),
    };
    info!("Generator backend: {}", generator.backend());

    // Build app state
    let state = AppState {
        config: config.clone(),
        generator,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // CORS open for all routes, as the front-end expects

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");
    info!("Main interface: http://localhost:{}/", config.port);
    info!("Generate:       http://localhost:{}/api/generate (POST)", config.port);
    info!("Health check:   http://localhost:{}/api/health", config.port);
    info!("Status:         http://localhost:{}/api/status", config.port);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
