use crate::application::ports::{ExportError, Exporter};
use crate::domain::ExportFormat;

pub struct PlainTextExporter;

impl Exporter for PlainTextExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Txt
    }

    fn render(&self, content: &str) -> Result<Vec<u8>, ExportError> {
        Ok(content.as_bytes().to_vec())
    }
}
