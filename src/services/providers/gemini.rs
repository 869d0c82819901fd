//! Google Gemini provider
//!
//! Calls `models/{model}:generateContent` with a single text prompt and reads
//! the reply from `candidates[0].content.parts[0].text`.

use std::time::Duration;

use reqwest::Client as HttpClient;

use crate::{
    models::gemini::{GenerateContentRequest, GenerateContentResponse},
    services::providers::{GenerationError, TextGenerator},
};

#[derive(Clone)]
pub struct GeminiProvider {
    http_client: HttpClient,
    api_key: Option<String>,
    api_url: String,
    model: String,
}

impl GeminiProvider {
    /// Creates a provider whose requests are bounded by `timeout`
    pub fn new(
        api_key: Option<String>,
        api_url: String,
        model: String,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;
        let api_key = api_key.filter(|key| !key.trim().is_empty());

        if api_key.is_none() {
            tracing::warn!("GEMINI_API_KEY not set, explanations will use the default text");
        }

        Ok(Self {
            http_client,
            api_key,
            api_url: api_url.trim_end_matches('/').to_string(),
            model,
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_url, self.model
        )
    }
}

#[async_trait::async_trait]
impl TextGenerator for GeminiProvider {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(GenerationError::MissingCredential)?;

        let response = self
            .http_client
            .post(self.endpoint())
            .query(&[("key", api_key)])
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    tracing::debug!(
                        error = %e,
                        status = %status,
                        "Failed to read Gemini error response body"
                    );
                    String::new()
                }
            };
            return Err(GenerationError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let response_text = response.text().await?;
        let parsed: GenerateContentResponse =
            serde_json::from_str(&response_text).map_err(|e| {
                tracing::debug!(
                    error = %e,
                    response = %response_text,
                    "Failed to deserialize Gemini response"
                );
                GenerationError::MalformedResponse(e.to_string())
            })?;

        let text = parsed.first_text().ok_or(GenerationError::EmptyResponse)?;

        tracing::info!(
            provider = "gemini",
            model = %self.model,
            chars = text.len(),
            "Explanation generated"
        );

        Ok(text)
    }

    fn name(&self) -> &'static str {
        "gemini"
    }
}
