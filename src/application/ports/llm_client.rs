use async_trait::async_trait;

/// A generative model that turns a prompt into plain text.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Sends `prompt` and returns the raw text of the first answer.
    ///
    /// Implementations that need a credential must fail with
    /// [`LlmClientError::MissingCredential`] before touching the network.
    async fn complete(&self, prompt: &str) -> Result<String, LlmClientError>;

    fn model(&self) -> &str;
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("missing credential: {0}")]
    MissingCredential(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("{0}")]
    ServiceReported(String),
}
