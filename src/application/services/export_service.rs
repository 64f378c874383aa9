use std::collections::HashMap;
use std::sync::Arc;

use crate::application::ports::{ExportArtifact, ExportError, Exporter};
use crate::domain::ExportFormat;

pub const DEFAULT_FILENAME_STEM: &str = "refined_text";

pub struct ExportService {
    exporters: HashMap<ExportFormat, Arc<dyn Exporter>>,
}

impl ExportService {
    pub fn new(exporters: Vec<Arc<dyn Exporter>>) -> Self {
        Self {
            exporters: exporters.into_iter().map(|e| (e.format(), e)).collect(),
        }
    }

    /// Returns `Ok(None)` without rendering anything when `content` is blank.
    ///
    /// A failed DOCX render is retried once as plain text.
    #[tracing::instrument(skip(self, content), fields(content_chars = content.chars().count()))]
    pub fn export(
        &self,
        content: &str,
        filename_stem: &str,
        format: ExportFormat,
    ) -> Result<Option<ExportArtifact>, ExportError> {
        if content.trim().is_empty() {
            tracing::debug!("Nothing to export");
            return Ok(None);
        }

        let stem = sanitize_filename_stem(filename_stem);

        match self.render(content, format) {
            Ok(bytes) => Ok(Some(artifact(&stem, format, bytes))),
            Err(e) if format == ExportFormat::Docx => {
                tracing::warn!(error = %e, "DOCX export failed, exporting as plain text");
                let bytes = self.render(content, ExportFormat::Txt)?;
                Ok(Some(artifact(&stem, ExportFormat::Txt, bytes)))
            }
            Err(e) => {
                tracing::error!(error = %e, "Export failed");
                Err(e)
            }
        }
    }

    fn render(&self, content: &str, format: ExportFormat) -> Result<Vec<u8>, ExportError> {
        let exporter = self
            .exporters
            .get(&format)
            .ok_or(ExportError::UnsupportedFormat(format))?;
        exporter.render(content)
    }
}

fn artifact(stem: &str, format: ExportFormat, bytes: Vec<u8>) -> ExportArtifact {
    tracing::info!(format = %format, bytes = bytes.len(), "Export rendered");
    ExportArtifact {
        filename: format!("{}.{}", stem, format.extension()),
        format,
        bytes,
    }
}

/// Restricts a user supplied stem to ASCII letters, digits, `-` and `_` so it
/// is safe both on disk and inside a `Content-Disposition` header.
pub fn sanitize_filename_stem(stem: &str) -> String {
    let cleaned: String = stem
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    let cleaned = cleaned.trim_matches('_');

    if cleaned.is_empty() {
        DEFAULT_FILENAME_STEM.to_string()
    } else {
        cleaned.to_string()
    }
}
