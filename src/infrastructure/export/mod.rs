mod docx_exporter;
mod pdf_exporter;
mod plain_text_exporter;

use std::sync::Arc;

use crate::application::ports::Exporter;

pub use docx_exporter::DocxExporter;
pub use pdf_exporter::{PdfExporter, wrap_line};
pub use plain_text_exporter::PlainTextExporter;

/// Text, PDF and DOCX exporters, ready for `ExportService::new`.
pub fn default_exporters(document_title: &str) -> Vec<Arc<dyn Exporter>> {
    let text: Arc<dyn Exporter> = Arc::new(PlainTextExporter);
    let pdf: Arc<dyn Exporter> = Arc::new(PdfExporter::new(document_title));
    let docx: Arc<dyn Exporter> = Arc::new(DocxExporter);
    vec![text, pdf, docx]
}
