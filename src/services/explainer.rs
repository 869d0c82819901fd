use std::sync::Arc;

use crate::{
    models::{ExplanationRequest, ExplanationResult},
    services::providers::TextGenerator,
};

const PROMPT_INSTRUCTIONS: &str = "Please provide a short, friendly, and concise explanation (2-3 sentences) for the user about why this is a good recommendation for them. Speak directly to the user (e.g., \"Because you liked...\").";

/// Orchestrates one generation call per explanation, falling back to a default text
///
/// Holds no per-request state: concurrent calls share only the provider handle.
/// Results are never cached, so identical requests each reach the provider.
#[derive(Clone)]
pub struct Explainer {
    generator: Arc<dyn TextGenerator>,
}

impl Explainer {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Explains why `request.target` suits a user who viewed `request.history`
    ///
    /// Never fails. Any provider failure yields [`ExplanationResult::fallback`].
    /// The caller guarantees the target is not part of the history.
    pub async fn explain(&self, request: &ExplanationRequest) -> ExplanationResult {
        let prompt = render_prompt(request);

        match self.generator.generate(&prompt).await {
            Ok(text) if !text.trim().is_empty() => ExplanationResult::generated(text),
            Ok(_) => {
                tracing::warn!(
                    provider = self.generator.name(),
                    target_id = %request.target.id,
                    reason = "empty_response",
                    "Using default explanation"
                );
                ExplanationResult::fallback(&request.target)
            }
            Err(e) => {
                tracing::warn!(
                    provider = self.generator.name(),
                    target_id = %request.target.id,
                    reason = e.reason(),
                    error = %e,
                    "Using default explanation"
                );
                ExplanationResult::fallback(&request.target)
            }
        }
    }
}

/// Renders the generation prompt: viewed items, then the target, then the instructions
pub fn render_prompt(request: &ExplanationRequest) -> String {
    let viewed: Vec<String> = request
        .history
        .iter()
        .map(|item| item.summary_line())
        .collect();

    format!(
        "A user has shown interest in the following products:\n{}\n\nBased on this history, we are recommending this product:\n{}\n\n{}",
        viewed.join("\n"),
        request.target.summary_line(),
        PROMPT_INSTRUCTIONS
    )
}
