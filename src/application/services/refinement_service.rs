use std::sync::Arc;

use crate::application::ports::{LlmClient, LlmClientError};
use crate::domain::RefinementRequest;

use super::prompt_builder::build_prompt;
use super::response_normalizer::normalize_response;

pub struct RefinementService {
    llm_client: Arc<dyn LlmClient>,
}

impl RefinementService {
    pub fn new(llm_client: Arc<dyn LlmClient>) -> Self {
        Self { llm_client }
    }

    pub fn model(&self) -> &str {
        self.llm_client.model()
    }

    /// One attempt, no retries. The request is expected to be validated by the
    /// caller.
    #[tracing::instrument(
        skip(self, request),
        fields(
            model = %self.llm_client.model(),
            language = request.params.language.key(),
            purpose = request.params.purpose.key(),
            tone = request.params.tone.key(),
            length = request.params.length.key(),
        )
    )]
    pub async fn refine(&self, request: &RefinementRequest) -> Result<String, RefinementError> {
        let prompt = build_prompt(
            &request.original_text,
            &request.params,
            request.effective_suggestions(),
        );
        tracing::debug!(prompt_chars = prompt.chars().count(), "Dispatching refinement prompt");

        let raw = self.llm_client.complete(&prompt).await.map_err(|e| {
            tracing::error!(error = %e, "Refinement request failed");
            RefinementError::from(e)
        })?;

        let refined = normalize_response(&raw);
        if refined.is_empty() {
            tracing::warn!(raw_chars = raw.len(), "Model returned no usable text");
            return Err(RefinementError::Service(LlmClientError::InvalidResponse(
                "the model returned no text".to_string(),
            )));
        }

        tracing::info!(
            original_chars = request.original_text.chars().count(),
            refined_chars = refined.chars().count(),
            "Refinement complete"
        );
        Ok(refined)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RefinementError {
    #[error("{0}")]
    Validation(String),
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("{0}")]
    Service(#[source] LlmClientError),
}

impl From<LlmClientError> for RefinementError {
    fn from(error: LlmClientError) -> Self {
        match error {
            LlmClientError::MissingCredential(message) => RefinementError::Configuration(message),
            other => RefinementError::Service(other),
        }
    }
}
