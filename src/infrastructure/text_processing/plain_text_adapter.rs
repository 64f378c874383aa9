use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, Document};

const UTF8_BOM: &str = "\u{feff}";

pub struct PlainTextAdapter;

#[async_trait]
impl FileLoader for PlainTextAdapter {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        if document.content_type != ContentType::Text {
            return Err(FileLoaderError::UnsupportedContentType(
                document.content_type.as_mime().to_string(),
            ));
        }

        // Undecodable bytes become U+FFFD instead of failing the upload.
        let text = String::from_utf8_lossy(data);
        if text.contains(char::REPLACEMENT_CHARACTER) {
            tracing::warn!(filename = %document.filename, "Text upload is not valid UTF-8");
        }

        Ok(text.strip_prefix(UTF8_BOM).unwrap_or(&text).to_string())
    }
}
