use printpdf::{BuiltinFont, Mm, PdfDocument};

use crate::application::ports::{ExportError, Exporter};
use crate::domain::ExportFormat;

const PAGE_WIDTH: Mm = Mm(210.0);
const PAGE_HEIGHT: Mm = Mm(297.0);
const MARGIN_MM: f32 = 15.0;
const FONT_SIZE_PT: f32 = 11.0;
const LINE_HEIGHT_MM: f32 = 5.5;
/// Roughly 180 mm of 11 pt Helvetica.
const MAX_LINE_CHARS: usize = 90;
const LAYER_NAME: &str = "text";

/// A4 document set in a built-in Helvetica face.
///
/// Built-in PDF fonts only cover WinAnsi, so characters outside Latin-1 may
/// not render in every viewer.
pub struct PdfExporter {
    title: String,
}

impl PdfExporter {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    fn failed(message: impl std::fmt::Display) -> ExportError {
        ExportError::RenderFailed {
            format: ExportFormat::Pdf,
            message: message.to_string(),
        }
    }
}

impl Exporter for PdfExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Pdf
    }

    fn render(&self, content: &str) -> Result<Vec<u8>, ExportError> {
        let (doc, first_page, first_layer) =
            PdfDocument::new(&self.title, PAGE_WIDTH, PAGE_HEIGHT, LAYER_NAME);
        let font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(Self::failed)?;

        let top = PAGE_HEIGHT.0 - MARGIN_MM;
        let mut layer = doc.get_page(first_page).get_layer(first_layer);
        let mut y = top;

        for line in content.lines().flat_map(|l| wrap_line(l, MAX_LINE_CHARS)) {
            if y < MARGIN_MM {
                let (page, page_layer) = doc.add_page(PAGE_WIDTH, PAGE_HEIGHT, LAYER_NAME);
                layer = doc.get_page(page).get_layer(page_layer);
                y = top;
            }
            if !line.is_empty() {
                layer.use_text(line, FONT_SIZE_PT, Mm(MARGIN_MM), Mm(y), &font);
            }
            y -= LINE_HEIGHT_MM;
        }

        doc.save_to_bytes().map_err(Self::failed)
    }
}

/// Greedy word wrap; words longer than `width` are split.
pub fn wrap_line(line: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in line.split_whitespace() {
        let mut word = word.to_string();

        while word.chars().count() > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let split_at = word
                .char_indices()
                .nth(width)
                .map(|(i, _)| i)
                .unwrap_or(word.len());
            let rest = word.split_off(split_at);
            lines.push(word);
            word = rest;
        }

        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&word);
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}
