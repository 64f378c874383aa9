use std::io::{Cursor, Write};

use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use text_refiner::application::ports::{Exporter, FileLoader, FileLoaderError};
use text_refiner::domain::{ContentType, Document};
use text_refiner::infrastructure::export::DocxExporter;
use text_refiner::infrastructure::text_processing::DocxAdapter;

fn docx_with_body(body: &str) -> Vec<u8> {
    let xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{body}</w:body></w:document>"#
    );
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    writer
        .start_file("word/document.xml", SimpleFileOptions::default())
        .unwrap();
    writer.write_all(xml.as_bytes()).unwrap();
    writer.finish().unwrap().into_inner()
}

fn docx_document() -> Document {
    Document::new("letter.docx".to_string(), ContentType::Docx, 0)
}

#[tokio::test]
async fn given_paragraphs_when_extracting_then_returns_one_line_per_paragraph() {
    let data = docx_with_body(
        "<w:p><w:r><w:t>Dear </w:t></w:r><w:r><w:t>Client,</w:t></w:r></w:p>\
         <w:p><w:r><w:t>Thanks &amp; regards</w:t></w:r></w:p>",
    );

    let text = DocxAdapter::new()
        .extract_text(&data, &docx_document())
        .await
        .unwrap();

    assert_eq!(text, "Dear Client,\nThanks & regards");
}

#[tokio::test]
async fn given_tabs_and_breaks_when_extracting_then_keeps_them() {
    let data = docx_with_body(
        "<w:p><w:r><w:t>A</w:t><w:tab/><w:t>B</w:t><w:br/><w:t>C</w:t></w:r></w:p>",
    );

    let text = DocxAdapter::new()
        .extract_text(&data, &docx_document())
        .await
        .unwrap();

    assert_eq!(text, "A\tB\nC");
}

#[tokio::test]
async fn given_custom_tab_stops_when_extracting_then_only_run_tabs_are_kept() {
    let data = docx_with_body(
        "<w:p><w:pPr><w:tabs><w:tab w:val=\"left\" w:pos=\"720\"/><w:tab w:val=\"right\" w:pos=\"9000\"/></w:tabs></w:pPr>\
         <w:r><w:t>Name</w:t><w:tab/><w:t>Value</w:t></w:r></w:p>",
    );

    let text = DocxAdapter::new()
        .extract_text(&data, &docx_document())
        .await
        .unwrap();

    assert_eq!(text, "Name\tValue");
}

#[tokio::test]
async fn given_exported_docx_when_extracting_then_recovers_text() {
    let data = DocxExporter.render("First line\n\nThird <line>").unwrap();

    let text = DocxAdapter::new()
        .extract_text(&data, &docx_document())
        .await
        .unwrap();

    assert_eq!(text, "First line\n\nThird <line>");
}

#[tokio::test]
async fn given_empty_body_when_extracting_then_returns_no_text_found() {
    let data = docx_with_body("<w:p/>");

    let result = DocxAdapter::new().extract_text(&data, &docx_document()).await;

    assert!(matches!(result, Err(FileLoaderError::NoTextFound(_))));
}

#[tokio::test]
async fn given_non_zip_bytes_when_extracting_then_returns_extraction_failed() {
    let result = DocxAdapter::new()
        .extract_text(b"not a zip", &docx_document())
        .await;

    assert!(matches!(result, Err(FileLoaderError::ExtractionFailed(_))));
}
