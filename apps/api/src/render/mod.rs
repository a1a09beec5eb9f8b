// Resume Document Renderer
// Pure, synchronous: (document, template, color theme) -> HTML + preview styles.
// Both the preview and the PDF export surfaces go through `render`.

pub mod handlers;
pub mod html;
pub mod normalize;
pub mod palette;
pub mod presets;
pub mod preview;

use serde::Serialize;

use crate::models::resume::{ColorThemeId, ResumeDocument, TemplateId};
use crate::render::normalize::NormalizedResume;
use crate::render::preview::{preview_styles, PreviewStyles};

/// Output of a single render: the export-ready document and the matching
/// preview style description, tagged with the ids actually applied.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedResume {
    pub template: TemplateId,
    pub color_theme: ColorThemeId,
    pub html: String,
    pub styles: PreviewStyles,
}

pub fn render(
    document: &ResumeDocument,
    template: TemplateId,
    color_theme: ColorThemeId,
) -> RenderedResume {
    let preset = template.preset();
    let palette = color_theme.palette();
    let normalized = NormalizedResume::from(document);

    RenderedResume {
        template,
        color_theme,
        html: html::render_document(&normalized, preset, palette),
        styles: preview_styles(preset, palette),
    }
}
