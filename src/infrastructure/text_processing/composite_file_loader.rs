use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, Document};

use super::{DocxAdapter, PdfAdapter, PlainTextAdapter};

/// Dispatches uploads by [`ContentType`]. The last registration for a type wins.
#[derive(Default)]
pub struct CompositeFileLoader {
    routes: HashMap<ContentType, Arc<dyn FileLoader>>,
}

impl CompositeFileLoader {
    pub fn new(adapters: Vec<(ContentType, Arc<dyn FileLoader>)>) -> Self {
        adapters
            .into_iter()
            .fold(Self::default(), |loader, (content_type, adapter)| {
                loader.register(content_type, adapter)
            })
    }

    pub fn with_default_adapters() -> Self {
        Self::default()
            .register(ContentType::Text, Arc::new(PlainTextAdapter))
            .register(ContentType::Pdf, Arc::new(PdfAdapter::new()))
            .register(ContentType::Docx, Arc::new(DocxAdapter::new()))
    }

    pub fn register(mut self, content_type: ContentType, adapter: Arc<dyn FileLoader>) -> Self {
        self.routes.insert(content_type, adapter);
        self
    }

    fn route(&self, content_type: ContentType) -> Result<&dyn FileLoader, FileLoaderError> {
        self.routes
            .get(&content_type)
            .map(|adapter| adapter.as_ref())
            .ok_or_else(|| FileLoaderError::UnsupportedContentType(content_type.as_mime().to_string()))
    }
}

#[async_trait]
impl FileLoader for CompositeFileLoader {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        let adapter = self.route(document.content_type)?;
        tracing::debug!(content_type = document.content_type.as_mime(), "Routing upload to extractor");
        adapter.extract_text(data, document).await
    }
}
