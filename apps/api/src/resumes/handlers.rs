//! Axum route handlers for the Resume API.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Html,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::{ResumeDocument, ResumeRow};
use crate::render::handlers::RenderOverrides;
use crate::render::render;
use crate::resumes::slug::slug_for_publish;
use crate::resumes::store;
use crate::resumes::validation::validate_document;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

// Request bodies and query strings use camelCase, like the document itself.

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateResumeRequest {
    pub user_id: Uuid,
    #[serde(flatten)]
    pub document: ResumeDocument,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishRequest {
    pub user_id: Uuid,
    pub is_published: bool,
    #[serde(default, alias = "customUrl")]
    pub custom_slug: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ResumeListResponse {
    pub count: usize,
    pub resumes: Vec<ResumeRow>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes
pub async fn handle_create(
    State(state): State<AppState>,
    Json(req): Json<CreateResumeRequest>,
) -> Result<(StatusCode, Json<ResumeRow>), AppError> {
    validate_document(&req.document)?;

    let row = store::insert_resume(&state.db, req.user_id, &req.document).await?;
    info!("Created resume {} for user {}", row.id, row.user_id);

    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/v1/resumes
pub async fn handle_list(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<ResumeListResponse>, AppError> {
    let resumes = store::list_resumes(&state.db, params.user_id).await?;
    Ok(Json(ResumeListResponse {
        count: resumes.len(),
        resumes,
    }))
}

/// GET /api/v1/resumes/:id
pub async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<ResumeRow>, AppError> {
    let row = store::get_resume(&state.db, params.user_id, id).await?;
    Ok(Json(row))
}

/// PUT /api/v1/resumes/:id
///
/// Replaces the whole document; the wizard always submits every step.
pub async fn handle_update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
    Json(document): Json<ResumeDocument>,
) -> Result<Json<ResumeRow>, AppError> {
    validate_document(&document)?;

    let row = store::update_resume(&state.db, params.user_id, id, &document).await?;
    Ok(Json(row))
}

/// DELETE /api/v1/resumes/:id
pub async fn handle_delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<StatusCode, AppError> {
    store::delete_resume(&state.db, params.user_id, id).await?;
    info!("Deleted resume {id} for user {}", params.user_id);
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/resumes/:id/publish
pub async fn handle_publish(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<PublishRequest>,
) -> Result<Json<ResumeRow>, AppError> {
    let existing = store::get_resume(&state.db, req.user_id, id).await?;

    let slug = slug_for_publish(
        existing.portfolio_slug.as_deref(),
        req.is_published,
        req.custom_slug.as_deref(),
        &existing.document.personal_info.name,
    );

    let row = store::set_published(
        &state.db,
        req.user_id,
        id,
        req.is_published,
        slug.as_deref(),
    )
    .await?;

    info!(
        "Resume {id} {} (slug: {})",
        if row.is_published { "published" } else { "unpublished" },
        row.portfolio_slug.as_deref().unwrap_or("-")
    );
    Ok(Json(row))
}

/// GET /api/v1/resumes/:id/preview
///
/// Stored resume rendered as a standalone HTML page.
pub async fn handle_stored_preview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
    Query(overrides): Query<RenderOverrides>,
) -> Result<Html<String>, AppError> {
    let row = store::get_resume(&state.db, params.user_id, id).await?;
    let (template, color_theme) = overrides.resolve(&row.document);
    Ok(Html(render(&row.document, template, color_theme).html))
}

/// GET /api/v1/portfolio/:slug
pub async fn handle_portfolio(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ResumeRow>, AppError> {
    let row = store::get_published(&state.db, &slug).await?;
    Ok(Json(row))
}
