//! Axum route handlers for the template catalog and live preview.

use axum::{
    extract::Query,
    response::Html,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::models::resume::{ColorThemeId, ResumeDocument, TemplateId};
use crate::render::palette::Palette;
use crate::render::presets::presets;
use crate::render::{render, RenderedResume};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Optional overrides for the document's own template and color theme.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderOverrides {
    pub template: Option<String>,
    pub color_theme: Option<String>,
}

impl RenderOverrides {
    pub fn resolve(&self, document: &ResumeDocument) -> (TemplateId, ColorThemeId) {
        let template = self
            .template
            .as_deref()
            .map(TemplateId::parse)
            .unwrap_or(document.template);
        let color_theme = self
            .color_theme
            .as_deref()
            .map(ColorThemeId::parse)
            .unwrap_or(document.color_theme);
        (template, color_theme)
    }
}

#[derive(Debug, Serialize)]
pub struct TemplateSummary {
    pub id: TemplateId,
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorThemeSummary {
    pub id: ColorThemeId,
    pub palette: Palette,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResponse {
    pub templates: Vec<TemplateSummary>,
    pub color_themes: Vec<ColorThemeSummary>,
    pub default_template: TemplateId,
    pub default_color_theme: ColorThemeId,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/templates
pub async fn handle_catalog() -> Json<CatalogResponse> {
    Json(CatalogResponse {
        templates: presets()
            .iter()
            .map(|preset| TemplateSummary {
                id: preset.id,
                name: preset.name,
                description: preset.description,
            })
            .collect(),
        color_themes: ColorThemeId::ALL
            .into_iter()
            .map(|id| ColorThemeSummary {
                id,
                palette: *id.palette(),
            })
            .collect(),
        default_template: TemplateId::default(),
        default_color_theme: ColorThemeId::default(),
    })
}

/// POST /api/v1/render/preview
///
/// Renders an unsaved draft. Called on every edit in the builder, so it does
/// no I/O and never fails on partial input.
pub async fn handle_preview(
    Query(overrides): Query<RenderOverrides>,
    Json(document): Json<ResumeDocument>,
) -> Json<RenderedResume> {
    let (template, color_theme) = overrides.resolve(&document);
    Json(render(&document, template, color_theme))
}

/// POST /api/v1/render/html
///
/// Same as preview, but returns the bare document for iframes.
pub async fn handle_preview_html(
    Query(overrides): Query<RenderOverrides>,
    Json(document): Json<ResumeDocument>,
) -> Html<String> {
    let (template, color_theme) = overrides.resolve(&document);
    Html(render(&document, template, color_theme).html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_take_precedence() {
        let document = ResumeDocument {
            template: TemplateId::Classic,
            color_theme: ColorThemeId::Red,
            ..Default::default()
        };
        let overrides = RenderOverrides {
            template: Some("tech".into()),
            color_theme: None,
        };
        assert_eq!(
            overrides.resolve(&document),
            (TemplateId::Tech, ColorThemeId::Red)
        );
    }

    #[test]
    fn test_unknown_override_falls_back_to_default_not_document() {
        let document = ResumeDocument {
            template: TemplateId::Classic,
            ..Default::default()
        };
        let overrides = RenderOverrides {
            template: Some("bogus".into()),
            color_theme: None,
        };
        assert_eq!(overrides.resolve(&document).0, TemplateId::Modern);
    }

    #[tokio::test]
    async fn test_catalog_lists_every_combination_axis() {
        let Json(catalog) = handle_catalog().await;
        assert_eq!(catalog.templates.len(), 6);
        assert_eq!(catalog.color_themes.len(), 5);
        assert_eq!(catalog.default_template, TemplateId::Modern);
        assert_eq!(catalog.default_color_theme, ColorThemeId::Blue);
    }
}
