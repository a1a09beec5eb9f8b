use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

// ────────────────────────────────────────────────────────────────────────────
// Template and color theme identifiers
// ────────────────────────────────────────────────────────────────────────────

/// Visual style preset. Unknown or missing identifiers resolve to `Modern`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "Option<String>")]
pub enum TemplateId {
    #[default]
    Modern,
    Classic,
    Minimal,
    Creative,
    Professional,
    Tech,
}

impl TemplateId {
    pub const ALL: [TemplateId; 6] = [
        TemplateId::Modern,
        TemplateId::Classic,
        TemplateId::Minimal,
        TemplateId::Creative,
        TemplateId::Professional,
        TemplateId::Tech,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TemplateId::Modern => "modern",
            TemplateId::Classic => "classic",
            TemplateId::Minimal => "minimal",
            TemplateId::Creative => "creative",
            TemplateId::Professional => "professional",
            TemplateId::Tech => "tech",
        }
    }

    /// Lossy parse: never fails, falls back to the default template.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(raw))
            .unwrap_or_default()
    }
}

impl From<Option<String>> for TemplateId {
    fn from(raw: Option<String>) -> Self {
        raw.as_deref().map(Self::parse).unwrap_or_default()
    }
}

/// Accent color palette. Unknown or missing identifiers resolve to `Blue`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "Option<String>")]
pub enum ColorThemeId {
    #[default]
    Blue,
    Green,
    Purple,
    Red,
    Indigo,
}

impl ColorThemeId {
    pub const ALL: [ColorThemeId; 5] = [
        ColorThemeId::Blue,
        ColorThemeId::Green,
        ColorThemeId::Purple,
        ColorThemeId::Red,
        ColorThemeId::Indigo,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ColorThemeId::Blue => "blue",
            ColorThemeId::Green => "green",
            ColorThemeId::Purple => "purple",
            ColorThemeId::Red => "red",
            ColorThemeId::Indigo => "indigo",
        }
    }

    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(raw))
            .unwrap_or_default()
    }
}

impl From<Option<String>> for ColorThemeId {
    fn from(raw: Option<String>) -> Self {
        raw.as_deref().map(Self::parse).unwrap_or_default()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Resume document (wire shape, camelCase JSON)
// ────────────────────────────────────────────────────────────────────────────

/// Treats an explicit JSON `null` the same as a missing field.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub title: String,
    pub phone: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub email: String,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub location: Option<String>,
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    #[serde(deserialize_with = "nullable")]
    pub degree: String,
    #[serde(deserialize_with = "nullable")]
    pub school: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceEntry {
    #[serde(deserialize_with = "nullable")]
    pub company: String,
    #[serde(deserialize_with = "nullable")]
    pub role: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub description: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub is_current_role: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectEntry {
    #[serde(deserialize_with = "nullable")]
    pub title: String,
    pub description: Option<String>,
    pub link: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CertificateEntry {
    #[serde(deserialize_with = "nullable")]
    pub title: String,
    #[serde(deserialize_with = "nullable")]
    pub issuer: String,
    pub date: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
}

/// The structured resume record assembled by the builder wizard.
/// Every field is optional on the wire; list fields default to empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeDocument {
    #[serde(deserialize_with = "nullable")]
    pub title: String,
    #[serde(deserialize_with = "nullable")]
    pub personal_info: PersonalInfo,
    #[serde(deserialize_with = "nullable")]
    pub education: Vec<EducationEntry>,
    #[serde(deserialize_with = "nullable")]
    pub experience: Vec<ExperienceEntry>,
    #[serde(deserialize_with = "nullable")]
    pub skills: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub projects: Vec<ProjectEntry>,
    #[serde(deserialize_with = "nullable")]
    pub certificates: Vec<CertificateEntry>,
    pub template: TemplateId,
    pub color_theme: ColorThemeId,
}

// ────────────────────────────────────────────────────────────────────────────
// Persistence rows
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ResumeRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub document: Json<ResumeDocument>,
    pub is_published: bool,
    pub portfolio_slug: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_template_falls_back_to_modern() {
        assert_eq!(TemplateId::parse("nonexistent"), TemplateId::Modern);
        assert_eq!(TemplateId::parse(" Tech "), TemplateId::Tech);
    }

    #[test]
    fn test_unknown_theme_falls_back_to_blue() {
        assert_eq!(ColorThemeId::parse("magenta"), ColorThemeId::Blue);
        assert_eq!(ColorThemeId::parse("INDIGO"), ColorThemeId::Indigo);
    }

    #[test]
    fn test_missing_fields_default() {
        let doc: ResumeDocument = serde_json::from_value(json!({})).unwrap();
        assert_eq!(doc.template, TemplateId::Modern);
        assert_eq!(doc.color_theme, ColorThemeId::Blue);
        assert!(doc.experience.is_empty());
        assert!(doc.personal_info.name.is_empty());
    }

    #[test]
    fn test_null_fields_are_treated_as_missing() {
        let doc: ResumeDocument = serde_json::from_value(json!({
            "title": null,
            "personalInfo": { "name": null, "email": "a@b.io" },
            "skills": null,
            "template": null,
            "colorTheme": "nope"
        }))
        .unwrap();
        assert_eq!(doc.title, "");
        assert_eq!(doc.personal_info.email, "a@b.io");
        assert!(doc.skills.is_empty());
        assert_eq!(doc.template, TemplateId::Modern);
        assert_eq!(doc.color_theme, ColorThemeId::Blue);
    }

    #[test]
    fn test_camel_case_wire_names() {
        let doc: ResumeDocument = serde_json::from_value(json!({
            "experience": [{
                "company": "Acme",
                "role": "Engineer",
                "startDate": "2021-03-01",
                "isCurrentRole": true
            }],
            "template": "classic"
        }))
        .unwrap();
        assert!(doc.experience[0].is_current_role);
        assert_eq!(doc.experience[0].start_date.as_deref(), Some("2021-03-01"));
        assert_eq!(doc.template, TemplateId::Classic);

        let out = serde_json::to_value(&doc).unwrap();
        assert_eq!(out["template"], "classic");
        assert_eq!(out["colorTheme"], "blue");
    }

    #[test]
    fn test_row_serializes_in_camel_case() {
        let row = ResumeRow {
            id: Uuid::nil(),
            user_id: Uuid::nil(),
            title: "SRE".into(),
            document: Json(ResumeDocument::default()),
            is_published: true,
            portfolio_slug: Some("ada-1".into()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let out = serde_json::to_value(&row).unwrap();
        assert_eq!(out["isPublished"], true);
        assert_eq!(out["portfolioSlug"], "ada-1");
        assert!(out.get("userId").is_some());
        assert_eq!(out["document"]["template"], "modern");
    }
}
