//! Local template generation — the no-network backend.
//!
//! Picks one of 5 narrative templates and one of 8 alternative phrases
//! uniformly at random per scenario and emits 3 scenarios per request.
//! The RNG is injected at construction so tests can pin a seed; beyond a
//! fixed seed there is no ordering guarantee across calls.

use std::sync::Mutex;

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::errors::AppError;
use crate::generation::generator::ScenarioGenerator;
use crate::generation::validation::ScenarioInput;

const TEMPLATES: [&str; 5] = [
    "If {original} had not happened, then {alternative} might have occurred instead.",
    "Imagine if {original} were different - perhaps {alternative} would be the case.",
    "In an alternate reality where {original} is false, we might see {alternative}.",
    "What if {original} never existed? Then {alternative} could be possible.",
    "Consider the scenario where {original} is reversed - {alternative} becomes likely.",
];

const ALTERNATIVES: [&str; 8] = [
    "technology would have developed differently",
    "society would be organized in another way",
    "different cultural norms would emerge",
    "alternative solutions would be discovered",
    "unexpected opportunities would arise",
    "different relationships would form",
    "new perspectives would be valued",
    "alternative paths would be taken",
];

const SCENARIO_COUNT: usize = 3;

/// Template-based generator. Substitutes the request's fact into randomly
/// drawn templates; the mutation field only drives the Claude backend.
pub struct TemplateGenerator {
    rng: Mutex<StdRng>,
}

impl TemplateGenerator {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Fixed-seed constructor: output is fully determined by the seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn render(&self, fact: &str) -> String {
        let mut rng = self.rng.lock().expect("rng mutex poisoned");
        (0..SCENARIO_COUNT)
            .map(|_| {
                let template = TEMPLATES[rng.gen_range(0..TEMPLATES.len())];
                let alternative = ALTERNATIVES[rng.gen_range(0..ALTERNATIVES.len())];
                template
                    .replace("{original}", fact)
                    .replace("{alternative}", alternative)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for TemplateGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ScenarioGenerator for TemplateGenerator {
    async fn generate(&self, input: &ScenarioInput) -> Result<String, AppError> {
        Ok(self.render(&input.fact))
    }

    fn backend(&self) -> &'static str {
        "template"
    }
}
