use serde::{Deserialize, Serialize};

use super::CatalogItem;

/// Input to the explainer: the resolved viewing history and the recommended item
#[derive(Debug, Clone, PartialEq)]
pub struct ExplanationRequest {
    pub history: Vec<CatalogItem>,
    pub target: CatalogItem,
}

/// Justification text for a recommendation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExplanationResult {
    pub text: String,
    /// False when the default text was substituted for a live generation
    pub was_generated: bool,
}

impl ExplanationResult {
    pub fn generated(text: String) -> Self {
        Self {
            text,
            was_generated: true,
        }
    }

    /// Default explanation used whenever generation is unavailable
    pub fn fallback(target: &CatalogItem) -> Self {
        Self {
            text: format!(
                "Sorry, we couldn't generate an explanation at this time. {} seems like a good fit based on items you've previously viewed.",
                target.name
            ),
            was_generated: false,
        }
    }
}
