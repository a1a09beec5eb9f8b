/// Rasterizer client — hands rendered HTML to a headless-browser PDF service.
///
/// The service is an external collaborator (browserless-compatible `/pdf`
/// endpoint). It receives the HTML plus page options and returns PDF bytes,
/// which are forwarded unmodified.
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::export::PdfOptions;

const MAX_RETRIES: u32 = 3;

#[derive(Debug, Error)]
pub enum RasterizerError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Rasterizer error (status {status}): {message}")]
    Service { status: u16, message: String },

    #[error("Rasterizer unavailable after {retries} retries")]
    Unavailable { retries: u32 },

    #[error("Rasterizer returned an empty document")]
    EmptyDocument,
}

/// Converts HTML into paginated PDF bytes.
///
/// Carried in `AppState` as `Arc<dyn PdfRasterizer>` so tests can swap in a fake.
#[async_trait]
pub trait PdfRasterizer: Send + Sync {
    async fn rasterize(&self, html: &str, options: &PdfOptions) -> Result<Bytes, RasterizerError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Wire format
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct RasterizeRequest<'a> {
    html: &'a str,
    options: PdfPageOptions<'a>,
    viewport: Viewport,
    #[serde(rename = "gotoOptions")]
    goto_options: GotoOptions,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PdfPageOptions<'a> {
    format: &'a str,
    print_background: bool,
    margin: Margin<'a>,
}

#[derive(Debug, Serialize)]
struct Margin<'a> {
    top: &'a str,
    right: &'a str,
    bottom: &'a str,
    left: &'a str,
}

#[derive(Debug, Serialize)]
struct Viewport {
    width: u32,
    height: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GotoOptions {
    wait_until: &'static str,
}

impl<'a> RasterizeRequest<'a> {
    fn new(html: &'a str, options: &'a PdfOptions) -> Self {
        Self {
            html,
            options: PdfPageOptions {
                format: options.format,
                print_background: options.print_background,
                margin: Margin {
                    top: options.margin,
                    right: options.margin,
                    bottom: options.margin,
                    left: options.margin,
                },
            },
            viewport: Viewport {
                width: options.viewport_width,
                height: options.viewport_height,
            },
            goto_options: GotoOptions {
                wait_until: "networkidle0",
            },
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// BrowserRasterizer — HTTP client for the headless-browser service
// ────────────────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct BrowserRasterizer {
    client: Client,
    endpoint: String,
    token: Option<String>,
}

impl BrowserRasterizer {
    pub fn new(endpoint: String, token: Option<String>, timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .expect("Failed to build HTTP client"),
            endpoint,
            token,
        }
    }
}

#[async_trait]
impl PdfRasterizer for BrowserRasterizer {
    /// Retries on 429 and 5xx with exponential backoff.
    async fn rasterize(&self, html: &str, options: &PdfOptions) -> Result<Bytes, RasterizerError> {
        let request_body = RasterizeRequest::new(html, options);
        let mut last_error: Option<RasterizerError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // 500ms, 1s
                let delay = Duration::from_millis(500 * (1 << (attempt - 1)));
                warn!(
                    "Rasterize attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let mut request = self.client.post(&self.endpoint).json(&request_body);
            if let Some(token) = &self.token {
                request = request.bearer_auth(token);
            }

            let response = match request.send().await {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(RasterizerError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("Rasterizer returned {}: {}", status, body);
                last_error = Some(RasterizerError::Service {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let message = response.text().await.unwrap_or_default();
                return Err(RasterizerError::Service {
                    status: status.as_u16(),
                    message,
                });
            }

            let pdf = response.bytes().await?;
            if pdf.is_empty() {
                return Err(RasterizerError::EmptyDocument);
            }

            debug!("Rasterized {} bytes of HTML into {} bytes of PDF", html.len(), pdf.len());
            return Ok(pdf);
        }

        Err(last_error.unwrap_or(RasterizerError::Unavailable {
            retries: MAX_RETRIES,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_carries_page_options() {
        let options = PdfOptions::default();
        let body = serde_json::to_value(RasterizeRequest::new("<html></html>", &options)).unwrap();
        assert_eq!(
            body,
            json!({
                "html": "<html></html>",
                "options": {
                    "format": "A4",
                    "printBackground": true,
                    "margin": { "top": "1cm", "right": "1cm", "bottom": "1cm", "left": "1cm" }
                },
                "viewport": { "width": 794, "height": 1123 },
                "gotoOptions": { "waitUntil": "networkidle0" }
            })
        );
    }
}
