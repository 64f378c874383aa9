use std::io::{Cursor, Read};

use text_refiner::application::ports::Exporter;
use text_refiner::domain::ExportFormat;
use text_refiner::infrastructure::export::{DocxExporter, PlainTextExporter};

fn read_part(bytes: &[u8], name: &str) -> String {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut part = archive.by_name(name).unwrap();
    let mut content = String::new();
    part.read_to_string(&mut content).unwrap();
    content
}

#[test]
fn given_text_when_rendering_docx_then_package_has_required_parts() {
    let bytes = DocxExporter.render("Hello").unwrap();

    let archive = zip::ZipArchive::new(Cursor::new(bytes.as_slice())).unwrap();
    let names: Vec<&str> = archive.file_names().collect();

    assert!(names.contains(&"[Content_Types].xml"));
    assert!(names.contains(&"_rels/.rels"));
    assert!(names.contains(&"word/document.xml"));
}

#[test]
fn given_markup_characters_when_rendering_docx_then_escapes_them() {
    let bytes = DocxExporter.render("Tom & Jerry <3").unwrap();

    let document = read_part(&bytes, "word/document.xml");

    assert!(document.contains("Tom &amp; Jerry &lt;3"));
}

#[test]
fn given_three_lines_when_rendering_docx_then_writes_three_paragraphs() {
    let bytes = DocxExporter.render("one\n\nthree").unwrap();

    let document = read_part(&bytes, "word/document.xml");

    assert_eq!(document.matches("<w:p>").count(), 2);
    assert_eq!(document.matches("<w:p/>").count(), 1);
}

#[test]
fn given_text_when_rendering_plain_text_then_bytes_are_utf8_text() {
    let bytes = PlainTextExporter.render("Zażółć").unwrap();

    assert_eq!(bytes, "Zażółć".as_bytes());
    assert_eq!(PlainTextExporter.format(), ExportFormat::Txt);
}
