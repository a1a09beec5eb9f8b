//! Axum route handlers for PDF export.

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use uuid::Uuid;

use crate::errors::AppError;
use crate::export::{export_pdf, PdfExport};
use crate::models::resume::ResumeDocument;
use crate::render::handlers::RenderOverrides;
use crate::resumes::handlers::UserIdQuery;
use crate::resumes::store;
use crate::state::AppState;

impl IntoResponse for PdfExport {
    fn into_response(self) -> Response {
        let disposition = HeaderValue::from_str(&self.content_disposition())
            .unwrap_or_else(|_| HeaderValue::from_static("attachment; filename=\"resume.pdf\""));

        (
            [
                (header::CONTENT_TYPE, HeaderValue::from_static("application/pdf")),
                (header::CONTENT_DISPOSITION, disposition),
            ],
            self.pdf,
        )
            .into_response()
    }
}

/// POST /api/v1/render/pdf
///
/// Exports an unsaved draft straight from the builder.
pub async fn handle_export_draft(
    State(state): State<AppState>,
    Query(overrides): Query<RenderOverrides>,
    Json(document): Json<ResumeDocument>,
) -> Result<PdfExport, AppError> {
    let (template, color_theme) = overrides.resolve(&document);
    export_pdf(state.rasterizer.as_ref(), &document, template, color_theme).await
}

/// GET /api/v1/resumes/:id/pdf
pub async fn handle_export_stored(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
    Query(overrides): Query<RenderOverrides>,
) -> Result<PdfExport, AppError> {
    let row = store::get_resume(&state.db, params.user_id, id).await?;
    let (template, color_theme) = overrides.resolve(&row.document);
    export_pdf(state.rasterizer.as_ref(), &row.document, template, color_theme).await
}
