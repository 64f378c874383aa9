use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::ports::{LlmClient, LlmClientError};

/// Sends prompts to an `/ask` relay that holds the provider credential
/// itself. The relay answers `{"response": "..."}` or `{"error": "..."}`.
pub struct AskProxyClient {
    client: Client,
    endpoint: String,
    model: String,
}

#[derive(Serialize)]
struct AskRequest<'a> {
    prompt: &'a str,
}

#[derive(Deserialize)]
struct AskResponse {
    #[serde(default)]
    response: Option<Value>,
    #[serde(default)]
    error: Option<String>,
}

impl AskProxyClient {
    pub fn new(client: Client, base_url: &str, model: String) -> Self {
        Self {
            client,
            endpoint: format!("{}/ask", base_url.trim_end_matches('/')),
            model,
        }
    }
}

#[async_trait]
impl LlmClient for AskProxyClient {
    #[tracing::instrument(skip(self, prompt), fields(endpoint = %self.endpoint))]
    async fn complete(&self, prompt: &str) -> Result<String, LlmClientError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&AskRequest { prompt })
            .send()
            .await
            .map_err(|e| LlmClientError::ApiRequestFailed(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| LlmClientError::ApiRequestFailed(e.to_string()))?;

        let parsed = serde_json::from_str::<AskResponse>(&body);

        if let Ok(AskResponse {
            error: Some(message),
            ..
        }) = &parsed
        {
            return Err(LlmClientError::ServiceReported(message.clone()));
        }

        if !status.is_success() {
            return Err(LlmClientError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        match parsed {
            Ok(AskResponse {
                response: Some(Value::String(text)),
                ..
            }) => Ok(text),
            Ok(_) => Err(LlmClientError::InvalidResponse(
                "relay response has no text `response` field".to_string(),
            )),
            Err(e) => Err(LlmClientError::InvalidResponse(e.to_string())),
        }
    }

    fn model(&self) -> &str {
        &self.model
    }
}
