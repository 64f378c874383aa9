use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;
use crate::application::services::DEFAULT_FILENAME_STEM;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_LOG_FILTER: &str = "info,text_refiner=debug,tower_http=debug";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub llm: LlmSettings,
    pub logging: LoggingSettings,
    pub extraction: ExtractionSettings,
    pub export: ExportSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    #[default]
    Gemini,
    #[serde(rename = "openai")]
    OpenAi,
    Proxy,
    Mock,
}

impl LlmProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            LlmProvider::Gemini => "gemini",
            LlmProvider::OpenAi => "openai",
            LlmProvider::Proxy => "proxy",
            LlmProvider::Mock => "mock",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    pub provider: LlmProvider,
    pub model: String,
    pub api_key: Option<String>,
    /// Overrides the provider endpoint. Required for `proxy`.
    pub base_url: Option<String>,
    pub temperature: Option<f32>,
    pub max_tokens: Option<usize>,
    pub request_timeout_secs: Option<u64>,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            provider: LlmProvider::default(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            base_url: None,
            temperature: None,
            max_tokens: None,
            request_timeout_secs: Some(60),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub json: bool,
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            json: false,
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExtractionSettings {
    pub max_file_size_mb: usize,
}

impl ExtractionSettings {
    pub fn max_file_size_bytes(&self) -> usize {
        self.max_file_size_mb.saturating_mul(1024 * 1024)
    }
}

impl Default for ExtractionSettings {
    fn default() -> Self {
        Self {
            max_file_size_mb: 10,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    pub filename_stem: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            filename_stem: DEFAULT_FILENAME_STEM.to_string(),
        }
    }
}

impl Settings {
    /// Layers `appsettings.toml`, `appsettings.{environment}.toml` and `APP_*`
    /// variables (`__` between sections, e.g. `APP_LLM__MODEL`).
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        let configuration = Config::builder()
            .add_source(File::with_name("appsettings").required(false))
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        let mut settings: Settings = configuration.try_deserialize()?;
        settings.apply_env_overrides();
        Ok(settings)
    }

    fn apply_env_overrides(&mut self) {
        let key_missing = self
            .llm
            .api_key
            .as_deref()
            .is_none_or(|k| k.trim().is_empty());
        if key_missing {
            if let Ok(key) = std::env::var("GEMINI_API_KEY") {
                if !key.trim().is_empty() {
                    self.llm.api_key = Some(key);
                }
            }
        }

        if let Some(port) = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|p| p.trim().parse::<u16>().ok())
        {
            self.server.port = port;
        }
    }
}
