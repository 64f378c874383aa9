mod composite_file_loader;
mod docx_adapter;
mod pdf_adapter;
mod plain_text_adapter;
mod text_cleanup;

pub use composite_file_loader::CompositeFileLoader;
pub use docx_adapter::DocxAdapter;
pub use pdf_adapter::PdfAdapter;
pub use plain_text_adapter::PlainTextAdapter;
pub use text_cleanup::tidy_extracted_text;
