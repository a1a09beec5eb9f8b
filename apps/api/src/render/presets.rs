//! Style presets — one plain data record per `TemplateId`.
//!
//! Presets never name a palette color directly; accent colors go through the
//! `--primary`, `--primary-bg` and `--accent` custom properties so any preset
//! pairs with any palette.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::resume::TemplateId;

/// A styled structural element of the rendered document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Slot {
    Body,
    Container,
    Header,
    Name,
    Title,
    Contact,
    ContactItem,
    Links,
    LinkAnchor,
    Summary,
    Section,
    SectionTitle,
    Item,
    ItemTitle,
    ItemSubtitle,
    ItemDate,
    ItemDescription,
    Skills,
    Skill,
    ItemHeading,
    ContactLabel,
    TechList,
    Tech,
    LinkGlyph,
}

impl Slot {
    /// Class attribute value used in the markup. `Body` and `LinkAnchor` are
    /// addressed by element selectors and have no class of their own.
    pub fn class_name(self) -> &'static str {
        match self {
            Slot::Body => "",
            Slot::Container => "container",
            Slot::Header => "header",
            Slot::Name => "name",
            Slot::Title => "title",
            Slot::Contact => "contact",
            Slot::ContactItem => "contact-item",
            Slot::Links => "links",
            Slot::LinkAnchor => "",
            Slot::Summary => "summary",
            Slot::Section => "section",
            Slot::SectionTitle => "section-title",
            Slot::Item => "item",
            Slot::ItemTitle => "item-title",
            Slot::ItemSubtitle => "item-subtitle",
            Slot::ItemDate => "item-date",
            Slot::ItemDescription => "item-description",
            Slot::Skills => "skills",
            Slot::Skill => "skill",
            Slot::ItemHeading => "item-heading",
            Slot::ContactLabel => "contact-label",
            Slot::TechList => "tech-list",
            Slot::Tech => "tech",
            Slot::LinkGlyph => "link-glyph",
        }
    }

    pub fn selector(self) -> String {
        match self {
            Slot::Body => "body".to_string(),
            Slot::LinkAnchor => ".links a".to_string(),
            other => format!(".{}", other.class_name()),
        }
    }
}

/// Declarations every preset starts from. A preset rule for the same slot is
/// appended after these, so its declarations win.
///
/// Headings and paragraphs (`name`, `title`, `summary`, `section-title`,
/// `item-*` text) drop the user-agent top margin.
pub const SHARED_RULES: &[(Slot, &str)] = &[
    (Slot::Container, "box-sizing: border-box;"),
    (Slot::Name, "margin-top: 0;"),
    (Slot::Title, "margin-top: 0;"),
    (Slot::Summary, "margin-top: 0;"),
    (Slot::SectionTitle, "margin-top: 0;"),
    (Slot::ItemTitle, "margin-top: 0;"),
    (Slot::ItemSubtitle, "margin-top: 0;"),
    (Slot::ItemDescription, "margin-top: 0;"),
    (
        Slot::ItemHeading,
        "display: flex; justify-content: space-between; align-items: flex-start; gap: 10px; margin-bottom: 5px;",
    ),
    (Slot::ContactLabel, "font-weight: 600;"),
    (
        Slot::TechList,
        "display: flex; flex-wrap: wrap; gap: 5px; margin-bottom: 10px;",
    ),
    (
        Slot::Tech,
        "font-size: 11px; background: #f0f0f0; color: #666; padding: 2px 6px; border-radius: 3px;",
    ),
    (Slot::LinkGlyph, "color: var(--primary); text-decoration: none;"),
];

/// Typography, spacing, section decoration and skill-chip style for a template.
#[derive(Debug)]
pub struct StylePreset {
    pub id: TemplateId,
    pub name: &'static str,
    pub description: &'static str,
    pub rules: &'static [(Slot, &'static str)],
    /// Overrides applied below `COMPACT_BREAKPOINT_PX`.
    pub compact: &'static [(Slot, &'static str)],
}

pub const COMPACT_BREAKPOINT_PX: u32 = 600;

impl StylePreset {
    /// Effective declarations per slot: the shared rule, then this preset's.
    /// The stylesheet and the preview description are both built from this.
    pub fn declarations(&self) -> BTreeMap<Slot, String> {
        let mut merged: BTreeMap<Slot, String> = BTreeMap::new();
        for (slot, decl) in SHARED_RULES.iter().chain(self.rules) {
            merged
                .entry(*slot)
                .and_modify(|existing| {
                    existing.push(' ');
                    existing.push_str(decl);
                })
                .or_insert_with(|| (*decl).to_string());
        }
        merged
    }
}

impl TemplateId {
    pub fn preset(self) -> &'static StylePreset {
        &PRESETS[self as usize]
    }
}

/// Every preset, in `TemplateId::ALL` order.
pub fn presets() -> &'static [StylePreset] {
    &PRESETS
}

// Indexed by `TemplateId` discriminant; order must match `TemplateId::ALL`.
static PRESETS: [StylePreset; 6] = [
    StylePreset {
        id: TemplateId::Modern,
        name: "Modern",
        description: "Clean and professional design with accent-colored rules",
        rules: &[
            (Slot::Body, "font-family: Arial, sans-serif; margin: 0; padding: 10px; background: white; color: #333; font-size: 12px;"),
            (Slot::Container, "max-width: 800px; margin: 0 auto; display: flex; flex-direction: column;"),
            (Slot::Header, "border-bottom: 2px solid var(--primary); padding-bottom: 10px; margin-bottom: 15px;"),
            (Slot::Name, "font-size: 24px; font-weight: bold; margin-bottom: 4px;"),
            (Slot::Title, "font-size: 14px; color: var(--primary); font-weight: 500; margin-bottom: 10px;"),
            (Slot::Contact, "display: flex; flex-wrap: wrap; gap: 10px; margin-bottom: 10px; font-size: 10px;"),
            (Slot::ContactItem, "display: flex; align-items: center; gap: 3px;"),
            (Slot::Links, "display: flex; gap: 8px; margin-bottom: 10px;"),
            (Slot::LinkAnchor, "color: var(--primary); text-decoration: none; font-size: 10px;"),
            (Slot::Summary, "margin-top: 10px; line-height: 1.4; font-size: 11px;"),
            (Slot::Section, "margin-bottom: 15px;"),
            (Slot::SectionTitle, "font-size: 16px; font-weight: bold; color: #333; margin-bottom: 8px; padding-bottom: 3px; border-bottom: 1px solid var(--primary);"),
            (Slot::Item, "margin-bottom: 10px;"),
            (Slot::ItemTitle, "font-weight: bold; font-size: 12px; margin-bottom: 3px;"),
            (Slot::ItemSubtitle, "color: var(--primary); font-weight: 500; margin-bottom: 3px; font-size: 11px;"),
            (Slot::ItemDate, "font-size: 10px; color: #666; margin-bottom: 5px; white-space: nowrap;"),
            (Slot::ItemDescription, "line-height: 1.3; margin-top: 5px; font-size: 10px;"),
            (Slot::Skills, "display: flex; flex-wrap: wrap; gap: 5px; margin-top: 5px;"),
            (Slot::Skill, "background: var(--primary-bg); color: var(--accent); padding: 3px 6px; border-radius: 10px; font-size: 9px; font-weight: 500;"),
        ],
        compact: &[
            (Slot::Body, "padding: 5px; font-size: 10px;"),
            (Slot::Name, "font-size: 20px;"),
            (Slot::Title, "font-size: 12px;"),
            (Slot::Contact, "font-size: 8px; gap: 5px;"),
            (Slot::SectionTitle, "font-size: 14px;"),
            (Slot::ItemTitle, "font-size: 10px;"),
            (Slot::ItemDescription, "font-size: 8px;"),
            (Slot::Skill, "font-size: 7px; padding: 2px 4px;"),
        ],
    },
    StylePreset {
        id: TemplateId::Classic,
        name: "Classic",
        description: "Traditional resume layout with serif fonts",
        rules: &[
            (Slot::Body, "font-family: 'Times New Roman', serif; margin: 0; padding: 20px; background: white; color: #333;"),
            (Slot::Container, "max-width: 800px; margin: 0 auto;"),
            (Slot::Header, "text-align: center; border-bottom: 2px solid #333; padding-bottom: 20px; margin-bottom: 30px;"),
            (Slot::Name, "font-size: 36px; font-weight: bold; margin-bottom: 8px;"),
            (Slot::Title, "font-size: 18px; color: var(--primary); font-weight: 500; margin-bottom: 20px;"),
            (Slot::Contact, "display: flex; flex-wrap: wrap; justify-content: center; gap: 20px; margin-bottom: 20px; font-size: 14px;"),
            (Slot::ContactItem, "display: flex; align-items: center; gap: 5px;"),
            (Slot::Links, "display: flex; justify-content: center; gap: 15px; margin-bottom: 20px;"),
            (Slot::LinkAnchor, "color: var(--primary); text-decoration: none; font-size: 14px;"),
            (Slot::Summary, "margin: 20px auto; max-width: 600px; text-align: justify; line-height: 1.6;"),
            (Slot::Section, "margin-bottom: 30px;"),
            (Slot::SectionTitle, "font-size: 20px; font-weight: bold; color: #333; margin-bottom: 15px; text-transform: uppercase; letter-spacing: 1px;"),
            (Slot::Item, "margin-bottom: 20px;"),
            (Slot::ItemTitle, "font-weight: bold; font-size: 16px; margin-bottom: 5px;"),
            (Slot::ItemSubtitle, "color: var(--primary); font-weight: 500; margin-bottom: 5px;"),
            (Slot::ItemDate, "font-size: 14px; color: #666; margin-bottom: 10px; white-space: nowrap;"),
            (Slot::ItemDescription, "line-height: 1.6; margin-top: 10px;"),
            (Slot::Skills, "display: flex; flex-wrap: wrap; gap: 10px; margin-top: 10px; justify-content: center;"),
            (Slot::Skill, "background: #f0f0f0; color: #333; padding: 3px 8px; font-size: 12px; border: 1px solid #ccc; border-bottom: 2px solid var(--accent);"),
        ],
        compact: &[
            (Slot::Body, "padding: 10px;"),
            (Slot::Name, "font-size: 28px;"),
            (Slot::Title, "font-size: 14px;"),
            (Slot::Contact, "font-size: 12px; gap: 10px;"),
            (Slot::SectionTitle, "font-size: 16px;"),
            (Slot::ItemTitle, "font-size: 14px;"),
            (Slot::ItemDescription, "font-size: 13px;"),
            (Slot::Skill, "font-size: 10px; padding: 2px 6px;"),
        ],
    },
    StylePreset {
        id: TemplateId::Minimal,
        name: "Minimal",
        description: "Simple and elegant design focusing on content",
        rules: &[
            (Slot::Body, "font-family: Arial, sans-serif; margin: 0; padding: 20px; background: white; color: #333;"),
            (Slot::Container, "max-width: 800px; margin: 0 auto;"),
            (Slot::Header, "margin-bottom: 40px;"),
            (Slot::Name, "font-size: 28px; font-weight: 300; margin-bottom: 5px;"),
            (Slot::Title, "font-size: 16px; color: var(--primary); font-weight: 300; margin-bottom: 30px;"),
            (Slot::Contact, "display: flex; flex-wrap: wrap; gap: 20px; margin-bottom: 20px; font-size: 14px;"),
            (Slot::ContactItem, "display: flex; align-items: center; gap: 5px;"),
            (Slot::Links, "display: flex; gap: 15px; margin-bottom: 20px;"),
            (Slot::LinkAnchor, "color: var(--primary); text-decoration: none; font-size: 14px;"),
            (Slot::Summary, "margin-top: 20px; line-height: 1.6;"),
            (Slot::Section, "margin-bottom: 30px;"),
            (Slot::SectionTitle, "font-size: 18px; font-weight: 500; color: #333; margin-bottom: 15px; padding-bottom: 5px; border-bottom: 1px solid #ddd;"),
            (Slot::Item, "margin-bottom: 15px;"),
            (Slot::ItemTitle, "font-weight: 500; font-size: 16px; margin-bottom: 5px;"),
            (Slot::ItemSubtitle, "color: var(--primary); margin-bottom: 5px;"),
            (Slot::ItemDate, "font-size: 14px; color: #666; margin-bottom: 10px; white-space: nowrap;"),
            (Slot::ItemDescription, "line-height: 1.6; margin-top: 10px;"),
            (Slot::Skills, "display: flex; flex-wrap: wrap; gap: 5px; margin-top: 10px;"),
            (Slot::Skill, "background: #f5f5f5; color: #333; padding: 5px 8px; font-size: 11px; border-left: 2px solid var(--accent);"),
        ],
        compact: &[
            (Slot::Body, "padding: 10px;"),
            (Slot::Name, "font-size: 24px;"),
            (Slot::Title, "font-size: 14px;"),
            (Slot::Contact, "font-size: 12px; gap: 10px;"),
            (Slot::SectionTitle, "font-size: 16px;"),
            (Slot::ItemTitle, "font-size: 14px;"),
            (Slot::ItemDescription, "font-size: 13px;"),
            (Slot::Skill, "font-size: 9px; padding: 3px 6px;"),
        ],
    },
    StylePreset {
        id: TemplateId::Creative,
        name: "Creative",
        description: "Bold design for creative professionals",
        rules: &[
            (Slot::Body, "font-family: Arial, sans-serif; margin: 0; padding: 20px; background: linear-gradient(135deg, #faf5ff 0%, #fdf2f8 100%); color: #333;"),
            (Slot::Container, "max-width: 800px; margin: 0 auto;"),
            (Slot::Header, "text-align: center; margin-bottom: 40px; position: relative;"),
            (Slot::Name, "font-size: 36px; font-weight: bold; background: linear-gradient(135deg, var(--primary) 0%, #EC4899 100%); -webkit-background-clip: text; -webkit-text-fill-color: transparent; margin-bottom: 8px;"),
            (Slot::Title, "font-size: 20px; color: var(--primary); font-weight: 500; margin-bottom: 20px;"),
            (Slot::Contact, "display: flex; flex-wrap: wrap; justify-content: center; gap: 20px; margin-bottom: 20px; font-size: 14px;"),
            (Slot::ContactItem, "display: flex; align-items: center; gap: 5px;"),
            (Slot::Links, "display: flex; justify-content: center; gap: 15px; margin-bottom: 20px;"),
            (Slot::LinkAnchor, "color: var(--primary); text-decoration: none; font-size: 14px;"),
            (Slot::Summary, "margin: 20px auto; max-width: 600px; text-align: justify; line-height: 1.6;"),
            (Slot::Section, "margin-bottom: 40px;"),
            (Slot::SectionTitle, "font-size: 24px; font-weight: bold; color: var(--primary); margin-bottom: 20px; text-align: center; position: relative;"),
            (Slot::Item, "margin-bottom: 30px; padding: 20px; background: white; border-radius: 10px; box-shadow: 0 2px 10px rgba(0,0,0,0.1);"),
            (Slot::ItemTitle, "font-weight: bold; font-size: 18px; margin-bottom: 5px;"),
            (Slot::ItemSubtitle, "color: var(--primary); font-weight: 600; font-size: 16px; margin-bottom: 5px;"),
            (Slot::ItemDate, "font-size: 14px; color: #666; margin-bottom: 10px; background: #f0f0f0; padding: 3px 8px; border-radius: 5px; display: inline-block; white-space: nowrap;"),
            (Slot::ItemDescription, "line-height: 1.6; margin-top: 10px;"),
            (Slot::Skills, "display: flex; flex-wrap: wrap; gap: 15px; margin-top: 10px; justify-content: center;"),
            (Slot::Skill, "background: var(--primary-bg); color: var(--accent); padding: 8px 15px; border-radius: 20px; font-size: 12px; font-weight: bold; box-shadow: 0 2px 5px rgba(0,0,0,0.1);"),
        ],
        compact: &[
            (Slot::Body, "padding: 10px;"),
            (Slot::Name, "font-size: 28px;"),
            (Slot::Title, "font-size: 16px;"),
            (Slot::Contact, "font-size: 12px; gap: 10px;"),
            (Slot::SectionTitle, "font-size: 20px;"),
            (Slot::Item, "padding: 15px;"),
            (Slot::ItemTitle, "font-size: 16px;"),
            (Slot::ItemDescription, "font-size: 14px;"),
            (Slot::Skill, "font-size: 10px; padding: 6px 12px;"),
        ],
    },
    StylePreset {
        id: TemplateId::Professional,
        name: "Professional",
        description: "Structured corporate layout with a two-column skill grid",
        rules: &[
            (Slot::Body, "font-family: Arial, sans-serif; margin: 0; padding: 20px; background: #f9fafb; color: #333;"),
            (Slot::Container, "max-width: 800px; margin: 0 auto; padding: 30px; background: white; box-shadow: 0 0 20px rgba(0,0,0,0.1);"),
            (Slot::Header, "margin-bottom: 40px; padding-bottom: 30px; border-bottom: 1px solid #e5e7eb;"),
            (Slot::Name, "font-size: 32px; font-weight: bold; margin-bottom: 8px;"),
            (Slot::Title, "font-size: 18px; color: var(--primary); font-weight: 500; margin-bottom: 20px;"),
            (Slot::Contact, "display: flex; flex-wrap: wrap; gap: 20px; margin-bottom: 20px; font-size: 14px;"),
            (Slot::ContactItem, "display: flex; align-items: center; gap: 5px;"),
            (Slot::Links, "display: flex; gap: 15px; margin-bottom: 20px;"),
            (Slot::LinkAnchor, "color: var(--primary); text-decoration: none; font-size: 14px;"),
            (Slot::Summary, "margin-top: 20px; line-height: 1.6;"),
            (Slot::Section, "margin-bottom: 30px;"),
            (Slot::SectionTitle, "font-size: 20px; font-weight: bold; color: #333; margin-bottom: 15px; padding-left: 10px; border-left: 4px solid var(--primary);"),
            (Slot::Item, "margin-bottom: 20px; padding-left: 20px; border-left: 2px solid #e5e7eb;"),
            (Slot::ItemTitle, "font-weight: bold; font-size: 16px; margin-bottom: 5px;"),
            (Slot::ItemSubtitle, "color: var(--primary); font-weight: 500; margin-bottom: 5px;"),
            (Slot::ItemDate, "font-size: 14px; color: #666; margin-bottom: 10px; background: #f3f4f6; padding: 3px 8px; border-radius: 5px; white-space: nowrap;"),
            (Slot::ItemDescription, "line-height: 1.6; margin-top: 10px;"),
            (Slot::Skills, "display: grid; grid-template-columns: repeat(2, 1fr); gap: 10px; margin-top: 10px;"),
            (Slot::Skill, "background: white; color: #333; padding: 5px 10px; font-size: 12px; border: 1px solid #d1d5db; border-left: 3px solid var(--accent); border-radius: 5px;"),
        ],
        compact: &[
            (Slot::Container, "padding: 15px;"),
            (Slot::Name, "font-size: 26px;"),
            (Slot::Skills, "grid-template-columns: 1fr;"),
        ],
    },
    StylePreset {
        id: TemplateId::Tech,
        name: "Tech",
        description: "Dark, monospaced layout for engineers",
        rules: &[
            (Slot::Body, "font-family: 'Courier New', monospace; margin: 0; padding: 20px; background: #0f172a; color: #e2e8f0;"),
            (Slot::Container, "max-width: 800px; margin: 0 auto; background: #1e293b; padding: 30px; border-radius: 10px;"),
            (Slot::Header, "margin-bottom: 40px; padding-bottom: 30px; border-bottom: 1px solid #475569;"),
            (Slot::Name, "font-size: 32px; font-weight: bold; color: white; margin-bottom: 8px;"),
            (Slot::Title, "font-size: 18px; color: var(--primary); font-weight: 500; margin-bottom: 20px;"),
            (Slot::Contact, "display: flex; flex-wrap: wrap; gap: 20px; margin-bottom: 20px; font-size: 14px;"),
            (Slot::ContactItem, "display: flex; align-items: center; gap: 5px;"),
            (Slot::Links, "display: flex; gap: 15px; margin-bottom: 20px;"),
            (Slot::LinkAnchor, "color: var(--primary); text-decoration: none; font-size: 14px;"),
            (Slot::Summary, "margin-top: 20px; line-height: 1.6;"),
            (Slot::Section, "margin-bottom: 30px;"),
            (Slot::SectionTitle, "font-size: 20px; font-weight: bold; color: var(--primary); margin-bottom: 15px;"),
            (Slot::Item, "margin-bottom: 20px; padding: 15px; background: #334155; border-radius: 5px; border-left: 4px solid var(--primary);"),
            (Slot::ItemTitle, "font-weight: bold; font-size: 16px; color: white; margin-bottom: 5px;"),
            (Slot::ItemSubtitle, "color: var(--primary); font-weight: 500; margin-bottom: 5px;"),
            (Slot::ItemDate, "font-size: 14px; color: #94a3b8; margin-bottom: 10px; background: #475569; padding: 3px 8px; border-radius: 5px; white-space: nowrap;"),
            (Slot::ItemDescription, "line-height: 1.6; margin-top: 10px;"),
            (Slot::Skills, "display: flex; flex-wrap: wrap; gap: 10px; margin-top: 10px;"),
            (Slot::Skill, "background: var(--accent); color: white; padding: 5px 10px; border-radius: 5px; font-size: 12px; font-family: monospace;"),
        ],
        compact: &[
            (Slot::Body, "padding: 10px;"),
            (Slot::Container, "padding: 20px;"),
            (Slot::Name, "font-size: 28px;"),
            (Slot::Title, "font-size: 16px;"),
            (Slot::Contact, "font-size: 12px; gap: 10px;"),
            (Slot::SectionTitle, "font-size: 18px;"),
            (Slot::Item, "padding: 10px;"),
            (Slot::ItemTitle, "font-size: 14px;"),
            (Slot::ItemDescription, "font-size: 13px;"),
            (Slot::Skill, "font-size: 10px; padding: 3px 8px;"),
        ],
    },
];

/// Full stylesheet for a preset: palette variables, one rule per slot, then
/// the compact media block.
pub fn stylesheet(preset: &StylePreset, palette_root: &str) -> String {
    let mut css = String::with_capacity(4096);
    css.push_str(palette_root);
    css.push('\n');

    for (slot, decl) in preset.declarations() {
        css.push_str(&format!("{} {{ {decl} }}\n", slot.selector()));
    }

    if !preset.compact.is_empty() {
        css.push_str(&format!(
            "@media (max-width: {COMPACT_BREAKPOINT_PX}px) {{\n"
        ));
        for (slot, decl) in preset.compact {
            css.push_str(&format!("  {} {{ {decl} }}\n", slot.selector()));
        }
        css.push_str("}\n");
    }

    css
}

#[cfg(test)]
mod tests {
    use super::*;

    const SLOTS: [Slot; 24] = [
        Slot::Body,
        Slot::Container,
        Slot::Header,
        Slot::Name,
        Slot::Title,
        Slot::Contact,
        Slot::ContactItem,
        Slot::Links,
        Slot::LinkAnchor,
        Slot::Summary,
        Slot::Section,
        Slot::SectionTitle,
        Slot::Item,
        Slot::ItemTitle,
        Slot::ItemSubtitle,
        Slot::ItemDate,
        Slot::ItemDescription,
        Slot::Skills,
        Slot::Skill,
        Slot::ItemHeading,
        Slot::ContactLabel,
        Slot::TechList,
        Slot::Tech,
        Slot::LinkGlyph,
    ];

    #[test]
    fn test_table_order_matches_template_ids() {
        for (preset, id) in presets().iter().zip(TemplateId::ALL) {
            assert_eq!(preset.id, id);
            assert_eq!(id.preset().id, id);
        }
    }

    #[test]
    fn test_every_preset_styles_every_slot() {
        for preset in presets() {
            let declarations = preset.declarations();
            for slot in SLOTS {
                assert!(
                    declarations.contains_key(&slot),
                    "{} is missing a rule for {:?}",
                    preset.name,
                    slot
                );
            }
        }
    }

    #[test]
    fn test_preset_rule_follows_shared_rule() {
        let name = &TemplateId::Modern.preset().declarations()[&Slot::Name];
        assert!(name.starts_with("margin-top: 0; font-size: 24px;"));

        let tech = &TemplateId::Modern.preset().declarations()[&Slot::Tech];
        assert!(tech.starts_with("font-size: 11px;"));
    }

    #[test]
    fn test_skill_chip_uses_palette() {
        for preset in presets() {
            let chip = &preset.declarations()[&Slot::Skill];
            assert!(
                chip.contains("var(--accent)") || chip.contains("var(--primary"),
                "{} skill chip ignores the palette",
                preset.name
            );
        }
    }

    #[test]
    fn test_no_hardcoded_palette_colors() {
        // Every primary and background color of the five palettes.
        let palette_hex = [
            "#3B82F6", "#DBEAFE", "#10B981", "#D1FAE5", "#8B5CF6", "#E9D5FF", "#EF4444",
            "#FEE2E2", "#6366F1", "#E0E7FF",
        ];
        for preset in presets() {
            let css = stylesheet(preset, "");
            for hex in palette_hex {
                assert!(
                    !css.to_uppercase().contains(hex),
                    "{} hardcodes {hex}",
                    preset.name
                );
            }
        }
    }

    #[test]
    fn test_stylesheet_has_one_rule_per_slot() {
        for preset in presets() {
            let css = stylesheet(preset, "");
            let (base, _) = css.split_once("@media").unwrap_or((css.as_str(), ""));
            for slot in SLOTS {
                let opening = format!("\n{} {{ ", slot.selector());
                assert_eq!(
                    base.matches(&opening).count(),
                    1,
                    "{} has no single rule for {:?}",
                    preset.name,
                    slot
                );
            }
        }
    }

    #[test]
    fn test_stylesheet_wraps_compact_rules_in_media_query() {
        let css = stylesheet(TemplateId::Tech.preset(), ":root {}");
        assert!(css.starts_with(":root {}"));
        assert!(css.contains("@media (max-width: 600px)"));
        assert!(css.contains(".links a {"));
        assert!(css.contains("body { font-family: 'Courier New'"));
    }
}
