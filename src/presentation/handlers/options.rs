use axum::Json;
use serde::Serialize;

use crate::domain::{DesiredLength, ExportFormat, Language, Purpose, RefinementParams, Tone};

#[derive(Serialize)]
pub struct OptionItem {
    pub key: &'static str,
    pub label: &'static str,
}

#[derive(Serialize)]
pub struct OptionsResponse {
    pub languages: Vec<OptionItem>,
    pub purposes: Vec<OptionItem>,
    pub tones: Vec<OptionItem>,
    pub lengths: Vec<OptionItem>,
    pub export_formats: Vec<&'static str>,
    pub defaults: RefinementParams,
}

/// Everything a client needs to render the parameter selectors.
pub async fn options_handler() -> Json<OptionsResponse> {
    Json(OptionsResponse {
        languages: Language::ALL
            .iter()
            .map(|l| OptionItem {
                key: l.key(),
                label: l.label(),
            })
            .collect(),
        purposes: Purpose::ALL
            .iter()
            .map(|p| OptionItem {
                key: p.key(),
                label: p.label(),
            })
            .collect(),
        tones: Tone::ALL
            .iter()
            .map(|t| OptionItem {
                key: t.key(),
                label: t.label(),
            })
            .collect(),
        lengths: DesiredLength::ALL
            .iter()
            .map(|d| OptionItem {
                key: d.key(),
                label: d.label(),
            })
            .collect(),
        export_formats: [ExportFormat::Txt, ExportFormat::Pdf, ExportFormat::Docx]
            .iter()
            .map(|f| f.extension())
            .collect(),
        defaults: RefinementParams::default(),
    })
}
