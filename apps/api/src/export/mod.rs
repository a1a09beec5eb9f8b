// PDF export adapter
// Renders a resume, hands the HTML to the rasterizer, and returns the PDF bytes
// untouched together with a download filename derived from the resume title.

pub mod handlers;
pub mod rasterizer;

use bytes::Bytes;
use tracing::{error, info};

use crate::errors::AppError;
use crate::models::resume::{ColorThemeId, ResumeDocument, TemplateId};
use crate::render::render;
use crate::export::rasterizer::PdfRasterizer;

const DEFAULT_FILENAME: &str = "resume";

/// Page configuration handed to the rasterizer with every export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfOptions {
    pub format: &'static str,
    pub print_background: bool,
    /// Applied to all four sides.
    pub margin: &'static str,
    pub viewport_width: u32,
    pub viewport_height: u32,
}

impl Default for PdfOptions {
    /// A4 with backgrounds preserved, 1cm margins, A4 viewport at 96 dpi.
    fn default() -> Self {
        Self {
            format: "A4",
            print_background: true,
            margin: "1cm",
            viewport_width: 794,
            viewport_height: 1123,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PdfExport {
    pub filename: String,
    pub pdf: Bytes,
}

impl PdfExport {
    /// ASCII `filename` plus an RFC 5987 `filename*` when the name is not ASCII.
    pub fn content_disposition(&self) -> String {
        if self.filename.is_ascii() {
            return format!("attachment; filename=\"{}\"", self.filename);
        }
        let fallback: String = self
            .filename
            .chars()
            .map(|c| if c.is_ascii() { c } else { '_' })
            .collect();
        format!(
            "attachment; filename=\"{fallback}\"; filename*=UTF-8''{}",
            percent_encode(&self.filename)
        )
    }
}

fn percent_encode(value: &str) -> String {
    let mut out = String::with_capacity(value.len() * 3);
    for byte in value.bytes() {
        if byte.is_ascii_alphanumeric() || b"-._~".contains(&byte) {
            out.push(byte as char);
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}

/// `<title>.pdf` with path separators, control and quote characters removed.
/// Falls back to `resume.pdf` when nothing usable is left.
pub fn export_filename(title: &str) -> String {
    let cleaned: String = sanitize_filename::sanitize(title.trim())
        .chars()
        .filter(|c| *c != '"' && *c != '\\')
        .collect();
    let stem = cleaned.trim().trim_matches('.');
    let stem = if stem.is_empty() { DEFAULT_FILENAME } else { stem };
    format!("{stem}.pdf")
}

pub async fn export_pdf(
    rasterizer: &dyn PdfRasterizer,
    document: &ResumeDocument,
    template: TemplateId,
    color_theme: ColorThemeId,
) -> Result<PdfExport, AppError> {
    let html = render(document, template, color_theme).html;
    let options = PdfOptions::default();

    let pdf = rasterizer.rasterize(&html, &options).await.map_err(|e| {
        error!("PDF export failed: {e}");
        AppError::Rasterizer(e.to_string())
    })?;

    let filename = export_filename(&document.title);
    info!(
        "Exported {} ({} template, {} theme, {} bytes)",
        filename,
        template.as_str(),
        color_theme.as_str(),
        pdf.len()
    );

    Ok(PdfExport { filename, pdf })
}
