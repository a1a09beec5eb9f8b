//! Input normalization — resolves every rendering default exactly once.
//!
//! The markup builder only ever sees a `NormalizedResume`: blank optional
//! strings are already `None`, dates are already reduced to calendar years,
//! and links that are not plain http(s) URLs have been dropped.

use std::fmt;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

use crate::models::resume::ResumeDocument;

/// End of a year range: a concrete year or an ongoing role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanEnd {
    Year(i32),
    Present,
}

/// A "{start} – {end}" year range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearSpan {
    pub start: i32,
    pub end: SpanEnd,
}

impl fmt::Display for YearSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.end {
            SpanEnd::Year(end) => write!(f, "{} – {}", self.start, end),
            SpanEnd::Present => write!(f, "{} – Present", self.start),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Header<'a> {
    pub name: &'a str,
    pub title: &'a str,
    pub email: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub location: Option<&'a str>,
    pub linkedin: Option<&'a str>,
    pub github: Option<&'a str>,
    pub summary: Option<&'a str>,
}

impl Header<'_> {
    pub fn has_contact(&self) -> bool {
        self.email.is_some() || self.phone.is_some() || self.location.is_some()
    }

    pub fn has_links(&self) -> bool {
        self.linkedin.is_some() || self.github.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExperienceItem<'a> {
    pub role: &'a str,
    pub company: &'a str,
    pub span: Option<YearSpan>,
    pub description: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EducationItem<'a> {
    pub degree: &'a str,
    pub school: &'a str,
    pub span: Option<YearSpan>,
    pub description: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectItem<'a> {
    pub title: &'a str,
    pub link: Option<&'a str>,
    pub technologies: Vec<&'a str>,
    pub description: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CertificateItem<'a> {
    pub title: &'a str,
    pub issuer: &'a str,
    pub link: Option<&'a str>,
    pub year: Option<i32>,
    pub description: Option<&'a str>,
}

/// Render-ready view over a `ResumeDocument`. Borrows from the source document.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedResume<'a> {
    /// Used for the `<title>` element only; never rendered into the body.
    pub title: &'a str,
    pub header: Header<'a>,
    pub experience: Vec<ExperienceItem<'a>>,
    pub education: Vec<EducationItem<'a>>,
    pub skills: Vec<&'a str>,
    pub projects: Vec<ProjectItem<'a>>,
    pub certificates: Vec<CertificateItem<'a>>,
}

const DEFAULT_DOCUMENT_TITLE: &str = "Resume";

impl<'a> From<&'a ResumeDocument> for NormalizedResume<'a> {
    fn from(doc: &'a ResumeDocument) -> Self {
        let info = &doc.personal_info;

        let header = Header {
            name: info.name.trim(),
            title: info.title.trim(),
            email: present(Some(&info.email)),
            phone: present(info.phone.as_ref()),
            location: present(info.location.as_ref()),
            linkedin: http_link(info.linkedin.as_ref()),
            github: http_link(info.github.as_ref()),
            summary: present(info.summary.as_ref()),
        };

        let experience = doc
            .experience
            .iter()
            .map(|exp| {
                let end = if exp.is_current_role {
                    Some(SpanEnd::Present)
                } else {
                    extract_year(exp.end_date.as_deref()).map(SpanEnd::Year)
                };
                ExperienceItem {
                    role: exp.role.trim(),
                    company: exp.company.trim(),
                    span: year_span(extract_year(exp.start_date.as_deref()), end),
                    description: present(exp.description.as_ref()),
                }
            })
            .collect();

        let education = doc
            .education
            .iter()
            .map(|edu| EducationItem {
                degree: edu.degree.trim(),
                school: edu.school.trim(),
                span: year_span(
                    extract_year(edu.start_date.as_deref()),
                    extract_year(edu.end_date.as_deref()).map(SpanEnd::Year),
                ),
                description: present(edu.description.as_ref()),
            })
            .collect();

        let projects = doc
            .projects
            .iter()
            .map(|project| ProjectItem {
                title: project.title.trim(),
                link: http_link(project.link.as_ref()),
                technologies: project
                    .technologies
                    .iter()
                    .filter_map(|t| present(Some(t)))
                    .collect(),
                description: present(project.description.as_ref()),
            })
            .collect();

        let certificates = doc
            .certificates
            .iter()
            .map(|cert| CertificateItem {
                title: cert.title.trim(),
                issuer: cert.issuer.trim(),
                link: http_link(cert.link.as_ref()),
                year: extract_year(cert.date.as_deref()),
                description: present(cert.description.as_ref()),
            })
            .collect();

        NormalizedResume {
            title: present(Some(&doc.title)).unwrap_or(DEFAULT_DOCUMENT_TITLE),
            header,
            experience,
            education,
            skills: doc.skills.iter().map(String::as_str).collect(),
            projects,
            certificates,
        }
    }
}

/// Trimmed value, or `None` when absent or blank.
fn present(value: Option<&String>) -> Option<&str> {
    value.map(|v| v.trim()).filter(|v| !v.is_empty())
}

/// Only plain http(s) URLs are rendered as links.
fn http_link(value: Option<&String>) -> Option<&str> {
    present(value).filter(|url| {
        let lower = url.to_ascii_lowercase();
        lower.starts_with("http://") || lower.starts_with("https://")
    })
}

fn year_span(start: Option<i32>, end: Option<SpanEnd>) -> Option<YearSpan> {
    Some(YearSpan {
        start: start?,
        end: end?,
    })
}

/// Extracts the calendar year from a date string.
///
/// Accepts RFC 3339 timestamps, `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM:SS[.f]` and
/// `YYYY-MM` (month pickers). Anything else yields `None`.
pub fn extract_year(raw: Option<&str>) -> Option<i32> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.year());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date.year());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.year());
    }
    NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d")
        .ok()
        .map(|date| date.year())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{ExperienceEntry, PersonalInfo, ProjectEntry};

    #[test]
    fn test_extract_year_ignores_day_and_month() {
        assert_eq!(extract_year(Some("2020-09-01")), Some(2020));
        assert_eq!(extract_year(Some("2020-12-31")), Some(2020));
    }

    #[test]
    fn test_extract_year_from_timestamp() {
        assert_eq!(extract_year(Some("2019-06-01T00:00:00.000Z")), Some(2019));
        assert_eq!(extract_year(Some("2019-06-01T08:30:00")), Some(2019));
    }

    #[test]
    fn test_extract_year_from_month_picker_value() {
        assert_eq!(extract_year(Some("2018-04")), Some(2018));
    }

    #[test]
    fn test_extract_year_malformed() {
        assert_eq!(extract_year(Some("last spring")), None);
        assert_eq!(extract_year(Some("2020-13-45")), None);
        assert_eq!(extract_year(Some("   ")), None);
        assert_eq!(extract_year(None), None);
    }

    #[test]
    fn test_current_role_ends_in_present_despite_end_date() {
        let doc = ResumeDocument {
            experience: vec![ExperienceEntry {
                role: "Engineer".into(),
                company: "Acme".into(),
                start_date: Some("2021-01-15".into()),
                end_date: Some("2023-01-01".into()),
                is_current_role: true,
                ..Default::default()
            }],
            ..Default::default()
        };
        let normalized = NormalizedResume::from(&doc);
        let span = normalized.experience[0].span.unwrap();
        assert_eq!(span.end, SpanEnd::Present);
        assert_eq!(span.to_string(), "2021 – Present");
    }

    #[test]
    fn test_malformed_end_date_drops_span() {
        let doc = ResumeDocument {
            experience: vec![ExperienceEntry {
                start_date: Some("2021-01-15".into()),
                end_date: Some("not a date".into()),
                ..Default::default()
            }],
            ..Default::default()
        };
        assert_eq!(NormalizedResume::from(&doc).experience[0].span, None);
    }

    #[test]
    fn test_blank_optionals_become_none() {
        let doc = ResumeDocument {
            personal_info: PersonalInfo {
                name: "  Ada  ".into(),
                phone: Some("   ".into()),
                summary: Some(String::new()),
                ..Default::default()
            },
            ..Default::default()
        };
        let header = NormalizedResume::from(&doc).header;
        assert_eq!(header.name, "Ada");
        assert_eq!(header.phone, None);
        assert_eq!(header.summary, None);
        assert_eq!(header.email, None);
        assert!(!header.has_contact());
    }

    #[test]
    fn test_non_http_links_dropped() {
        let doc = ResumeDocument {
            personal_info: PersonalInfo {
                linkedin: Some("javascript:alert(1)".into()),
                github: Some("HTTPS://github.com/ada".into()),
                ..Default::default()
            },
            projects: vec![ProjectEntry {
                link: Some("ftp://example.com".into()),
                ..Default::default()
            }],
            ..Default::default()
        };
        let normalized = NormalizedResume::from(&doc);
        assert_eq!(normalized.header.linkedin, None);
        assert_eq!(normalized.header.github, Some("HTTPS://github.com/ada"));
        assert_eq!(normalized.projects[0].link, None);
    }

    #[test]
    fn test_blank_title_falls_back() {
        let doc = ResumeDocument::default();
        assert_eq!(NormalizedResume::from(&doc).title, "Resume");
    }
}
