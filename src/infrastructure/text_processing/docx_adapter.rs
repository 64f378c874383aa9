use std::io::{Cursor, Read};

use async_trait::async_trait;
use quick_xml::Reader;
use quick_xml::events::Event;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, Document};

use super::text_cleanup::tidy_extracted_text;

const DOCUMENT_PART: &str = "word/document.xml";

/// Pulls the raw paragraph text out of a `.docx` package.
///
/// Only the main document part is read; headers, footers and comments are
/// ignored. Tabs and explicit line breaks inside a paragraph are kept.
#[derive(Default)]
pub struct DocxAdapter;

impl DocxAdapter {
    pub fn new() -> Self {
        Self
    }

    fn read_document_xml(data: &[u8]) -> Result<String, FileLoaderError> {
        let mut archive = zip::ZipArchive::new(Cursor::new(data)).map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("not a valid .docx package: {e}"))
        })?;

        let mut part = archive.by_name(DOCUMENT_PART).map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("missing {DOCUMENT_PART}: {e}"))
        })?;

        let mut xml = String::new();
        part.read_to_string(&mut xml)
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("failed to read {DOCUMENT_PART}: {e}")))?;
        Ok(xml)
    }

    fn paragraphs_text(xml: &str) -> Result<String, FileLoaderError> {
        let mut reader = Reader::from_str(xml);
        let mut text = String::new();
        let mut in_text_run = false;
        // `w:tab` inside `w:tabs` declares a tab stop, not a tab character.
        let mut tab_stops_depth = 0usize;

        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) => match e.name().as_ref() {
                    b"w:t" => in_text_run = true,
                    b"w:tabs" => tab_stops_depth += 1,
                    _ => {}
                },
                Ok(Event::End(e)) => match e.name().as_ref() {
                    b"w:t" => in_text_run = false,
                    b"w:tabs" => tab_stops_depth = tab_stops_depth.saturating_sub(1),
                    b"w:p" => text.push('\n'),
                    _ => {}
                },
                Ok(Event::Empty(e)) => match e.name().as_ref() {
                    b"w:tab" if tab_stops_depth == 0 => text.push('\t'),
                    b"w:br" | b"w:cr" | b"w:p" => text.push('\n'),
                    _ => {}
                },
                Ok(Event::Text(t)) if in_text_run => {
                    let unescaped = t.unescape().map_err(|e| {
                        FileLoaderError::ExtractionFailed(format!("invalid document text: {e}"))
                    })?;
                    text.push_str(&unescaped);
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(e) => {
                    return Err(FileLoaderError::ExtractionFailed(format!(
                        "malformed {DOCUMENT_PART} at position {}: {e}",
                        reader.buffer_position()
                    )));
                }
            }
        }

        Ok(text)
    }
}

#[async_trait]
impl FileLoader for DocxAdapter {
    #[tracing::instrument(skip(self, data), fields(filename = %document.filename, bytes = data.len()))]
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        if document.content_type != ContentType::Docx {
            return Err(FileLoaderError::UnsupportedContentType(
                document.content_type.as_mime().to_string(),
            ));
        }

        let xml = Self::read_document_xml(data)?;
        let text = tidy_extracted_text(&Self::paragraphs_text(&xml)?);

        if text.is_empty() {
            return Err(FileLoaderError::NoTextFound(document.filename.clone()));
        }

        tracing::info!(chars = text.chars().count(), "DOCX text extraction complete");
        Ok(text)
    }
}
