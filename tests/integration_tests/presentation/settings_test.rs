use config::{Config, File, FileFormat};

use text_refiner::presentation::config::{
    DEFAULT_LOG_FILTER, DEFAULT_MODEL, Environment, LlmProvider, Settings,
};

fn settings_from_toml(toml: &str) -> Settings {
    Config::builder()
        .add_source(File::from_str(toml, FileFormat::Toml))
        .build()
        .unwrap()
        .try_deserialize()
        .unwrap()
}

#[test]
fn given_empty_configuration_when_deserializing_then_uses_defaults() {
    let settings = settings_from_toml("");

    assert_eq!(settings.server.port, 5000);
    assert_eq!(settings.llm.provider, LlmProvider::Gemini);
    assert_eq!(settings.llm.model, DEFAULT_MODEL);
    assert_eq!(settings.llm.api_key, None);
    assert_eq!(settings.logging.filter, DEFAULT_LOG_FILTER);
    assert!(!settings.logging.json);
    assert_eq!(settings.extraction.max_file_size_mb, 10);
    assert_eq!(settings.export.filename_stem, "refined_text");
}

#[test]
fn given_partial_sections_when_deserializing_then_merges_with_defaults() {
    let settings = settings_from_toml(
        r#"
        [llm]
        provider = "openai"
        model = "gpt-4o-mini"
        base_url = "http://localhost:1234/v1"

        [logging]
        json = true
        "#,
    );

    assert_eq!(settings.llm.provider, LlmProvider::OpenAi);
    assert_eq!(settings.llm.model, "gpt-4o-mini");
    assert_eq!(settings.llm.base_url.as_deref(), Some("http://localhost:1234/v1"));
    assert_eq!(settings.llm.request_timeout_secs, Some(60));
    assert!(settings.logging.json);
    assert_eq!(settings.server.host, "0.0.0.0");
}

#[test]
fn given_extraction_limit_when_asking_for_bytes_then_converts_megabytes() {
    let settings = settings_from_toml("[extraction]\nmax_file_size_mb = 2\n");
    assert_eq!(settings.extraction.max_file_size_bytes(), 2 * 1024 * 1024);
}

#[test]
fn given_environment_names_when_parsing_then_accepts_known_values() {
    assert_eq!(Environment::try_from("LOCAL".to_string()), Ok(Environment::Local));
    assert_eq!(Environment::try_from("production".to_string()), Ok(Environment::Prod));
    assert!(Environment::try_from("staging".to_string()).is_err());
}

#[test]
fn given_provider_when_printed_then_matches_configuration_key() {
    assert_eq!(LlmProvider::OpenAi.as_str(), "openai");
    assert_eq!(LlmProvider::Mock.as_str(), "mock");
}
