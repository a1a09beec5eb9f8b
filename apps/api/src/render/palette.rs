//! Color palettes — one plain data record per `ColorThemeId`.

use serde::Serialize;

use crate::models::resume::ColorThemeId;

/// Concrete accent colors for a color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    pub primary: &'static str,
    pub primary_bg: &'static str,
    pub accent: &'static str,
}

/// CSS custom properties through which style presets reference the palette.
pub const VAR_PRIMARY: &str = "var(--primary)";
pub const VAR_PRIMARY_BG: &str = "var(--primary-bg)";
pub const VAR_ACCENT: &str = "var(--accent)";

// Indexed by `ColorThemeId` discriminant; order must match `ColorThemeId::ALL`.
static PALETTES: [Palette; 5] = [
    // blue
    Palette {
        primary: "#3B82F6",
        primary_bg: "#DBEAFE",
        accent: "#3B82F6",
    },
    // green
    Palette {
        primary: "#10B981",
        primary_bg: "#D1FAE5",
        accent: "#10B981",
    },
    // purple
    Palette {
        primary: "#8B5CF6",
        primary_bg: "#E9D5FF",
        accent: "#8B5CF6",
    },
    // red
    Palette {
        primary: "#EF4444",
        primary_bg: "#FEE2E2",
        accent: "#EF4444",
    },
    // indigo
    Palette {
        primary: "#6366F1",
        primary_bg: "#E0E7FF",
        accent: "#6366F1",
    },
];

impl ColorThemeId {
    pub fn palette(self) -> &'static Palette {
        &PALETTES[self as usize]
    }
}

impl Palette {
    /// `:root` block declaring the custom properties used by every preset.
    pub fn root_rule(&self) -> String {
        format!(
            ":root {{ --primary: {}; --primary-bg: {}; --accent: {}; }}",
            self.primary, self.primary_bg, self.accent
        )
    }

    /// Substitutes palette colors for the custom-property references in a
    /// declaration list. Used where CSS variables are not available.
    pub fn resolve(&self, declarations: &str) -> String {
        declarations
            .replace(VAR_PRIMARY_BG, self.primary_bg)
            .replace(VAR_PRIMARY, self.primary)
            .replace(VAR_ACCENT, self.accent)
    }
}
