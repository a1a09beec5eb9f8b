//! Structural style description for live on-screen preview.
//!
//! Built from the same merged declarations as the exported stylesheet, with
//! custom-property references resolved to concrete colors so a client can
//! apply each entry as an inline `style` attribute. Compact (media query)
//! overrides are export-only.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::render::palette::Palette;
use crate::render::presets::{Slot, StylePreset};

/// Slot → resolved CSS declaration list. Serializes as a flat object keyed by
/// the camelCase slot name.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PreviewStyles(pub BTreeMap<Slot, String>);

pub fn preview_styles(preset: &StylePreset, palette: &Palette) -> PreviewStyles {
    PreviewStyles(
        preset
            .declarations()
            .into_iter()
            .map(|(slot, decl)| (slot, palette.resolve(&decl)))
            .collect(),
    )
}
