use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;

use crate::application::ports::{LlmClient, LlmClientError};
use crate::presentation::config::{LlmProvider, LlmSettings};

use super::gemini_client::{GEMINI_BASE_URL, GeminiClient};
use super::mock_llm_client::MockLlmClient;
use super::openai_client::OpenAiClient;
use super::proxy_client::AskProxyClient;

pub fn create_llm_client(settings: &LlmSettings) -> Result<Arc<dyn LlmClient>, LlmClientError> {
    let api_key = settings.api_key.clone().unwrap_or_default();

    let client: Arc<dyn LlmClient> = match settings.provider {
        LlmProvider::Gemini => Arc::new(
            GeminiClient::new(
                http_client(settings.request_timeout_secs)?,
                settings.base_url.as_deref().unwrap_or(GEMINI_BASE_URL),
                api_key,
                settings.model.clone(),
            )
            .with_generation_config(settings.temperature, settings.max_tokens),
        ),
        LlmProvider::OpenAi => Arc::new(
            OpenAiClient::new(
                http_client(settings.request_timeout_secs)?,
                settings.base_url.as_deref(),
                settings.api_key.clone(),
                settings.model.clone(),
            )
            .with_sampling(settings.temperature, settings.max_tokens),
        ),
        LlmProvider::Proxy => {
            let base_url = settings.base_url.as_deref().ok_or_else(|| {
                LlmClientError::MissingCredential(
                    "llm.base_url is required for the proxy provider".to_string(),
                )
            })?;
            Arc::new(AskProxyClient::new(
                http_client(settings.request_timeout_secs)?,
                base_url,
                settings.model.clone(),
            ))
        }
        LlmProvider::Mock => Arc::new(MockLlmClient::echo()),
    };

    tracing::info!(
        provider = settings.provider.as_str(),
        model = client.model(),
        "LLM client ready"
    );
    Ok(client)
}

fn http_client(timeout_secs: Option<u64>) -> Result<Client, LlmClientError> {
    let mut builder = Client::builder();
    if let Some(secs) = timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    builder
        .build()
        .map_err(|e| LlmClientError::ApiRequestFailed(format!("failed to build HTTP client: {e}")))
}
