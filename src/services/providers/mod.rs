//! Text generation provider abstraction
//!
//! The explainer depends only on [`TextGenerator`], so the Gemini client can be
//! swapped for another provider (or a mock in tests) without touching the
//! explanation logic.

use thiserror::Error;

pub mod gemini;

pub use gemini::GeminiProvider;

/// Failure of a single generation call
///
/// Every variant is recovered by the explainer into the same fallback
/// explanation. The variants exist so logs can tell the causes apart.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("no API key configured")]
    MissingCredential,

    #[error("request timed out")]
    Timeout,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("provider returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed response body: {0}")]
    MalformedResponse(String),

    #[error("response contained no text")]
    EmptyResponse,
}

impl GenerationError {
    /// Short label for the `reason` log field
    pub fn reason(&self) -> &'static str {
        match self {
            GenerationError::MissingCredential => "missing_credential",
            GenerationError::Timeout => "timeout",
            GenerationError::Transport(_) => "transport",
            GenerationError::Status { .. } => "status",
            GenerationError::MalformedResponse(_) => "malformed_response",
            GenerationError::EmptyResponse => "empty_response",
        }
    }
}

impl From<reqwest::Error> for GenerationError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            GenerationError::Timeout
        } else {
            GenerationError::Transport(e.to_string())
        }
    }
}

/// Trait for text generation providers
///
/// Implementations issue exactly one outbound request per call and never retry.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generates text for a single prompt
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
