pub mod clipboard;
pub mod diff;
pub mod export;
pub mod llm;
pub mod observability;
pub mod text_processing;
