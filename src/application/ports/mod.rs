mod clipboard;
mod diff_renderer;
mod exporter;
mod file_loader;
mod llm_client;

pub use clipboard::{Clipboard, ClipboardError};
pub use diff_renderer::DiffRenderer;
pub use exporter::{ExportArtifact, ExportError, Exporter};
pub use file_loader::{FileLoader, FileLoaderError};
pub use llm_client::{LlmClient, LlmClientError};
