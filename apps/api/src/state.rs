use std::sync::Arc;

use sqlx::PgPool;

use crate::export::rasterizer::PdfRasterizer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// HTML-to-PDF collaborator. Default: `BrowserRasterizer`.
    pub rasterizer: Arc<dyn PdfRasterizer>,
}
