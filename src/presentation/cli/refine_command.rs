use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, bail};

use super::RefineArgs;
use crate::application::ports::{DiffRenderer, FileLoader, LlmClient};
use crate::application::services::{ExportService, RefinementController, RefinementService};
use crate::domain::{
    ContentType, DiffKind, DiffSegment, Document, RefinementParams, RefinementRequest, UiState,
};
use crate::infrastructure::clipboard::SystemClipboard;
use crate::infrastructure::diff::WordDiffRenderer;
use crate::infrastructure::export::default_exporters;
use crate::infrastructure::text_processing::CompositeFileLoader;
use crate::presentation::config::Settings;

#[derive(Debug)]
pub struct RefineOutcome {
    pub state: UiState,
    /// Word diff rendered with `[-removed-]` and `{+added+}` markers.
    pub diff: Option<String>,
    pub exported: Option<PathBuf>,
    pub copied: bool,
}

/// One-shot refinement for the command line. Runs the same controller
/// transitions as the HTTP session, then performs the requested follow-ups.
pub async fn run_refine(
    args: &RefineArgs,
    settings: &Settings,
    llm_client: Arc<dyn LlmClient>,
) -> anyhow::Result<RefineOutcome> {
    let original_text = match (&args.input, &args.text) {
        (Some(path), _) => read_input(path, &CompositeFileLoader::with_default_adapters()).await?,
        (None, Some(text)) => text.clone(),
        (None, None) => bail!("either --input or --text is required"),
    };

    let params = RefinementParams::new(args.language, args.purpose, args.tone, args.length);
    let mut request = RefinementRequest::new(original_text, params);
    if let Some(suggestions) = &args.suggestions {
        request = request.with_suggestions(suggestions.clone());
    }

    let service = RefinementService::new(llm_client);
    let mut controller = RefinementController::new();
    let state = controller.refine(&service, &request).await?.clone();

    if let Some(error) = &state.error {
        bail!("{}", error);
    }

    let diff = args
        .diff
        .then(|| render_diff(&WordDiffRenderer.diff(&state.original_text, &state.refined_text)));

    let exported = match args.export {
        Some(format) => {
            let stem = args
                .output
                .as_deref()
                .unwrap_or(&settings.export.filename_stem);
            let export_service = ExportService::new(default_exporters(stem));
            match export_service.export(&state.refined_text, stem, format)? {
                Some(artifact) => {
                    let path = args.out_dir.join(&artifact.filename);
                    tokio::fs::write(&path, &artifact.bytes)
                        .await
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    tracing::info!(path = %path.display(), "Refined text exported");
                    Some(path)
                }
                None => None,
            }
        }
        None => None,
    };

    let copied = args.copy && controller.copy_refined_text(&SystemClipboard::new());

    Ok(RefineOutcome {
        state,
        diff,
        exported,
        copied,
    })
}

async fn read_input(path: &Path, loader: &dyn FileLoader) -> anyhow::Result<String> {
    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string();
    let content_type = ContentType::from_filename(&filename)
        .with_context(|| format!("unsupported file type: {}", path.display()))?;
    let data = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;

    let document = Document::new(filename, content_type, data.len() as u64);
    let text = loader.extract_text(&data, &document).await?;
    Ok(text)
}

pub fn render_diff(segments: &[DiffSegment]) -> String {
    segments
        .iter()
        .map(|segment| match segment.kind {
            DiffKind::Unchanged => segment.value.clone(),
            DiffKind::Added => format!("{{+{}+}}", segment.value),
            DiffKind::Removed => format!("[-{}-]", segment.value),
        })
        .collect()
}
