// All LLM prompt constants for the generation module.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::generation::validation::ScenarioInput;
use crate::llm_client::prompts::PROSE_ONLY_SYSTEM;

/// System persona for the counterfactual rewrite task.
pub const SCENARIO_SYSTEM: &str = "You are a senior analyst who reasons about \
    factual scenarios under counterfactual assumptions. \
    You REWRITE the baseline analysis as it would read if the stated change were \
    true — you never merely summarize it. \
    When no baseline analysis is given, first infer the most plausible baseline \
    from the stated facts, then apply the change.";

/// Substituted for the analysis section when the client provided none.
pub const INFER_ANALYSIS_PLACEHOLDER: &str = "No baseline analysis was provided. \
    Infer the baseline treatment from the stated facts before applying the change.";

/// User prompt template. Replace `{fact}`, `{analysis}`, `{mutation}` before sending.
pub const SCENARIO_PROMPT_TEMPLATE: &str = r#"BASE FACTS:
{fact}

BASELINE ANALYSIS:
{analysis}

COUNTERFACTUAL CHANGE:
{mutation}

Task: Rewrite the analysis as it would read if the counterfactual change above were true. Keep every stated fact the change does not contradict, and work the consequences of the change through the full narrative."#;

/// An immutable (system, user) instruction pair ready for the Messages API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedPrompt {
    pub system: String,
    pub user: String,
}

/// Builds the prompt pair for a validated request.
/// Deterministic: identical inputs produce byte-identical prompts.
pub fn compose_prompt(input: &ScenarioInput) -> ComposedPrompt {
    let analysis = input
        .analysis
        .as_deref()
        .unwrap_or(INFER_ANALYSIS_PLACEHOLDER);

    ComposedPrompt {
        system: format!("{SCENARIO_SYSTEM}\n\n{PROSE_ONLY_SYSTEM}"),
        user: SCENARIO_PROMPT_TEMPLATE
            .replace("{fact}", &input.fact)
            .replace("{analysis}", analysis)
            .replace("{mutation}", &input.mutation),
    }
}
