//! PostgreSQL access for stored resumes. Every query is scoped by `user_id`
//! except the public portfolio lookup.

use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::{ResumeDocument, ResumeRow};

pub async fn insert_resume(
    db: &PgPool,
    user_id: Uuid,
    document: &ResumeDocument,
) -> Result<ResumeRow, AppError> {
    let row = sqlx::query_as::<_, ResumeRow>(
        r#"
        INSERT INTO resumes (id, user_id, title, document)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(document.title.trim())
    .bind(Json(document))
    .fetch_one(db)
    .await?;

    Ok(row)
}

/// Most recently updated first.
pub async fn list_resumes(db: &PgPool, user_id: Uuid) -> Result<Vec<ResumeRow>, AppError> {
    let rows = sqlx::query_as::<_, ResumeRow>(
        "SELECT * FROM resumes WHERE user_id = $1 ORDER BY updated_at DESC",
    )
    .bind(user_id)
    .fetch_all(db)
    .await?;

    Ok(rows)
}

pub async fn get_resume(db: &PgPool, user_id: Uuid, id: Uuid) -> Result<ResumeRow, AppError> {
    sqlx::query_as::<_, ResumeRow>("SELECT * FROM resumes WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))
}

pub async fn update_resume(
    db: &PgPool,
    user_id: Uuid,
    id: Uuid,
    document: &ResumeDocument,
) -> Result<ResumeRow, AppError> {
    sqlx::query_as::<_, ResumeRow>(
        r#"
        UPDATE resumes
        SET title = $1, document = $2, updated_at = NOW()
        WHERE id = $3 AND user_id = $4
        RETURNING *
        "#,
    )
    .bind(document.title.trim())
    .bind(Json(document))
    .bind(id)
    .bind(user_id)
    .fetch_optional(db)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))
}

pub async fn delete_resume(db: &PgPool, user_id: Uuid, id: Uuid) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM resumes WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .execute(db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("Resume {id} not found")));
    }
    Ok(())
}

/// Sets the published flag. `slug` is only written when `Some`; an existing
/// slug is never cleared.
pub async fn set_published(
    db: &PgPool,
    user_id: Uuid,
    id: Uuid,
    is_published: bool,
    slug: Option<&str>,
) -> Result<ResumeRow, AppError> {
    let result = sqlx::query_as::<_, ResumeRow>(
        r#"
        UPDATE resumes
        SET is_published = $1,
            portfolio_slug = COALESCE($2, portfolio_slug),
            updated_at = NOW()
        WHERE id = $3 AND user_id = $4
        RETURNING *
        "#,
    )
    .bind(is_published)
    .bind(slug)
    .bind(id)
    .bind(user_id)
    .fetch_optional(db)
    .await;

    match result {
        Ok(row) => row.ok_or_else(|| AppError::NotFound(format!("Resume {id} not found"))),
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => Err(AppError::Conflict(
            "That portfolio URL is already taken".to_string(),
        )),
        Err(e) => Err(e.into()),
    }
}

pub async fn get_published(db: &PgPool, slug: &str) -> Result<ResumeRow, AppError> {
    sqlx::query_as::<_, ResumeRow>(
        "SELECT * FROM resumes WHERE portfolio_slug = $1 AND is_published = TRUE",
    )
    .bind(slug)
    .fetch_optional(db)
    .await?
    .ok_or_else(|| AppError::NotFound("Portfolio not found".to_string()))
}
