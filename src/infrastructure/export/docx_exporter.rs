use std::io::{Cursor, Write};

use quick_xml::escape::escape;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::application::ports::{ExportError, Exporter};
use crate::domain::ExportFormat;

const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/></Types>"#;

const PACKAGE_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/></Relationships>"#;

const DOCUMENT_OPEN: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>"#;

const DOCUMENT_CLOSE: &str = "<w:sectPr/></w:body></w:document>";

/// Minimal WordprocessingML package: one paragraph per line of text.
pub struct DocxExporter;

impl DocxExporter {
    fn document_xml(content: &str) -> String {
        let mut xml = String::from(DOCUMENT_OPEN);
        for line in content.lines() {
            if line.is_empty() {
                xml.push_str("<w:p/>");
            } else {
                xml.push_str(r#"<w:p><w:r><w:t xml:space="preserve">"#);
                xml.push_str(&escape(line));
                xml.push_str("</w:t></w:r></w:p>");
            }
        }
        xml.push_str(DOCUMENT_CLOSE);
        xml
    }

    fn failed(message: impl std::fmt::Display) -> ExportError {
        ExportError::RenderFailed {
            format: ExportFormat::Docx,
            message: message.to_string(),
        }
    }
}

impl Exporter for DocxExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Docx
    }

    fn render(&self, content: &str) -> Result<Vec<u8>, ExportError> {
        let parts = [
            ("[Content_Types].xml", CONTENT_TYPES_XML.to_string()),
            ("_rels/.rels", PACKAGE_RELS_XML.to_string()),
            ("word/document.xml", Self::document_xml(content)),
        ];

        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default();

        for (name, body) in parts {
            writer.start_file(name, options).map_err(Self::failed)?;
            writer.write_all(body.as_bytes()).map_err(Self::failed)?;
        }

        let cursor = writer.finish().map_err(Self::failed)?;
        Ok(cursor.into_inner())
    }
}
