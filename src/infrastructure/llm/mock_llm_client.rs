use std::time::Duration;

use crate::application::ports::{LlmClient, LlmClientError};
use crate::application::services::TEXT_HEADER;

/// Offline stand-in used by the `mock` provider.
///
/// Echoes back the text under refinement unless a fixed reply is set.
pub struct MockLlmClient {
    reply: Option<String>,
    delay: Duration,
}

impl MockLlmClient {
    pub fn echo() -> Self {
        Self {
            reply: None,
            delay: Duration::ZERO,
        }
    }

    pub fn with_reply(reply: impl Into<String>) -> Self {
        Self {
            reply: Some(reply.into()),
            delay: Duration::ZERO,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[async_trait::async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, prompt: &str) -> Result<String, LlmClientError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let text = match &self.reply {
            Some(reply) => reply.clone(),
            None => prompt
                .rsplit_once(TEXT_HEADER)
                .map(|(_, text)| text)
                .unwrap_or(prompt)
                .to_string(),
        };
        Ok(text)
    }

    fn model(&self) -> &str {
        "mock"
    }
}
