//! Scenario generation — pluggable, trait-based backend behind /api/generate.
//!
//! Default: `ClaudeScenarioGenerator` (prompt composition + Messages API).
//! Alternative: `TemplateGenerator` (local, no network) — see templates.rs.
//!
//! `AppState` holds an `Arc<dyn ScenarioGenerator>`, swapped at startup via config.

use async_trait::async_trait;
use tracing::debug;

use crate::errors::AppError;
use crate::generation::prompts::compose_prompt;
use crate::generation::validation::ScenarioInput;
use crate::llm_client::LlmClient;

/// The generator trait. Implement this to swap backends without touching
/// the endpoint, handler, or caller code.
#[async_trait]
pub trait ScenarioGenerator: Send + Sync {
    /// Produces the counterfactual narrative for a validated request.
    async fn generate(&self, input: &ScenarioInput) -> Result<String, AppError>;

    /// Backend name surfaced by /api/status.
    fn backend(&self) -> &'static str;
}

/// Claude-backed generator: compose → call → normalize.
///
/// A missing API key fails here per request with a 500-class error; it is
/// never reported as a successful response carrying error text.
pub struct ClaudeScenarioGenerator {
    llm: LlmClient,
}

impl ClaudeScenarioGenerator {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl ScenarioGenerator for ClaudeScenarioGenerator {
    async fn generate(&self, input: &ScenarioInput) -> Result<String, AppError> {
        let prompt = compose_prompt(input);
        debug!(
            "Composed prompt: {} system chars, {} user chars",
            prompt.system.chars().count(),
            prompt.user.chars().count()
        );

        let response = self
            .llm
            .call(&prompt.user, &prompt.system)
            .await
            .map_err(|e| AppError::Generation(format!("Counterfactual LLM call failed: {e}")))?;

        Ok(response.joined_text())
    }

    fn backend(&self) -> &'static str {
        "claude"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_api_key_is_a_generation_error() {
        let generator = ClaudeScenarioGenerator::new(LlmClient::new(None));
        let input = ScenarioInput {
            fact: "f".to_string(),
            analysis: None,
            mutation: "m".to_string(),
        };
        let err = generator.generate(&input).await.unwrap_err();
        assert!(
            matches!(err, AppError::Generation(_)),
            "missing credential must surface through the error envelope, got {err:?}"
        );
    }

    #[test]
    fn test_backend_name() {
        let generator = ClaudeScenarioGenerator::new(LlmClient::new(None));
        assert_eq!(generator.backend(), "claude");
    }
}
