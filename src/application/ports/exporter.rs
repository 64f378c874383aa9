use crate::domain::ExportFormat;

/// Renders text into the bytes of one downloadable file format.
pub trait Exporter: Send + Sync {
    fn format(&self) -> ExportFormat;

    fn render(&self, content: &str) -> Result<Vec<u8>, ExportError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub filename: String,
    pub format: ExportFormat,
    pub bytes: Vec<u8>,
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("no exporter registered for {0}")]
    UnsupportedFormat(ExportFormat),
    #[error("rendering {format} failed: {message}")]
    RenderFailed {
        format: ExportFormat,
        message: String,
    },
}
