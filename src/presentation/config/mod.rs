mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    DEFAULT_LOG_FILTER, DEFAULT_MODEL, ExportSettings, ExtractionSettings, LlmProvider,
    LlmSettings, LoggingSettings, ServerSettings, Settings,
};
