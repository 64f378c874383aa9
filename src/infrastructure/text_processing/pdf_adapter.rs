use std::io::Write;
use std::time::Duration;

use async_trait::async_trait;
use pdf_oxide::PdfDocument;
use tempfile::NamedTempFile;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, Document};

use super::text_cleanup::tidy_extracted_text;

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

/// Reads the text layer of an uploaded PDF. Scanned pages without one
/// contribute nothing.
#[derive(Default)]
pub struct PdfAdapter;

fn extraction_failed(context: &str, error: impl std::fmt::Display) -> FileLoaderError {
    FileLoaderError::ExtractionFailed(format!("{context}: {error}"))
}

impl PdfAdapter {
    pub fn new() -> Self {
        Self
    }

    // pdf_oxide only opens paths.
    fn stage(data: &[u8]) -> Result<NamedTempFile, FileLoaderError> {
        let mut staged =
            NamedTempFile::new().map_err(|e| extraction_failed("cannot stage upload", e))?;
        staged
            .write_all(data)
            .map_err(|e| extraction_failed("cannot stage upload", e))?;
        Ok(staged)
    }

    /// Blocking. The staged file is removed when this returns.
    fn read_text_layer(staged: NamedTempFile) -> Result<String, FileLoaderError> {
        let mut pdf = PdfDocument::open(staged.path())
            .map_err(|e| extraction_failed("unreadable PDF", e))?;
        let total = pdf
            .page_count()
            .map_err(|e| extraction_failed("unreadable page tree", e))?;

        let mut sections = Vec::new();
        let mut skipped = 0usize;
        for index in 0..total {
            match pdf.extract_text(index) {
                Ok(raw) => {
                    let section = tidy_extracted_text(&raw);
                    if !section.is_empty() {
                        sections.push(section);
                    }
                }
                Err(e) => {
                    skipped += 1;
                    tracing::debug!(page = index + 1, error = %e, "Unreadable PDF page");
                }
            }
        }

        if skipped > 0 {
            tracing::warn!(skipped, total, "Skipped unreadable PDF pages");
        }
        Ok(sections.join("\n\n"))
    }
}

#[async_trait]
impl FileLoader for PdfAdapter {
    #[tracing::instrument(skip(self, data), fields(filename = %document.filename, bytes = data.len()))]
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        if document.content_type != ContentType::Pdf {
            return Err(FileLoaderError::UnsupportedContentType(
                document.content_type.as_mime().to_string(),
            ));
        }

        let staged = Self::stage(data)?;
        let job = tokio::task::spawn_blocking(move || Self::read_text_layer(staged));

        let text = match tokio::time::timeout(EXTRACTION_TIMEOUT, job).await {
            Ok(Ok(result)) => result?,
            Ok(Err(join_error)) => return Err(extraction_failed("PDF reader crashed", join_error)),
            Err(_) => {
                return Err(FileLoaderError::ExtractionFailed(format!(
                    "PDF extraction exceeded {}s",
                    EXTRACTION_TIMEOUT.as_secs()
                )));
            }
        };

        if text.is_empty() {
            return Err(FileLoaderError::NoTextFound(document.filename.clone()));
        }

        tracing::info!(chars = text.chars().count(), "PDF text extraction complete");
        Ok(text)
    }
}
