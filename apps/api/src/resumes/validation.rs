//! Write-side validation for stored resumes.
//!
//! Rendering never validates; it degrades. These rules only gate what the
//! store accepts, and every failing field is reported at once.

use std::sync::OnceLock;

use regex::Regex;

use crate::errors::{AppError, FieldError};
use crate::models::resume::ResumeDocument;
use crate::render::normalize::extract_year;

const MAX_TITLE_CHARS: usize = 100;
const MAX_SUMMARY_CHARS: usize = 500;
const MAX_EDUCATION_DESCRIPTION_CHARS: usize = 500;
const MAX_EXPERIENCE_DESCRIPTION_CHARS: usize = 1000;
const MAX_PROJECT_DESCRIPTION_CHARS: usize = 1000;
const MAX_CERTIFICATE_DESCRIPTION_CHARS: usize = 500;

fn email_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$").expect("valid email regex")
    })
}

fn phone_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\+?[\d\s\-()]+$").expect("valid phone regex"))
}

fn linkedin_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^https?://(www\.)?linkedin\.com/.+").expect("valid linkedin regex")
    })
}

fn github_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^https?://(www\.)?github\.com/.+").expect("valid github regex")
    })
}

fn http_url_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)^https?://.+").expect("valid url regex"))
}

/// Collects field errors while walking a document.
#[derive(Default)]
struct Checker {
    errors: Vec<FieldError>,
}

impl Checker {
    fn required(&mut self, field: &str, value: &str, label: &str) {
        if value.trim().is_empty() {
            self.errors
                .push(FieldError::new(field, format!("{label} is required")));
        }
    }

    fn max_chars(&mut self, field: &str, value: Option<&str>, max: usize, label: &str) {
        if value.is_some_and(|v| v.trim().chars().count() > max) {
            self.errors.push(FieldError::new(
                field,
                format!("{label} cannot exceed {max} characters"),
            ));
        }
    }

    /// Blank optional values are accepted; present ones must match.
    fn pattern(&mut self, field: &str, value: Option<&str>, re: &Regex, message: &str) {
        if let Some(v) = value.map(str::trim).filter(|v| !v.is_empty()) {
            if !re.is_match(v) {
                self.errors.push(FieldError::new(field, message));
            }
        }
    }

    fn date(&mut self, field: &str, value: Option<&str>, label: &str) {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            None => self
                .errors
                .push(FieldError::new(field, format!("{label} is required"))),
            Some(v) if extract_year(Some(v)).is_none() => self
                .errors
                .push(FieldError::new(field, format!("{label} is not a valid date"))),
            Some(_) => {}
        }
    }
}

/// Validates a document before it is stored.
pub fn validate_document(doc: &ResumeDocument) -> Result<(), AppError> {
    let mut c = Checker::default();
    let info = &doc.personal_info;

    c.required("title", &doc.title, "Resume title");
    c.max_chars("title", Some(doc.title.as_str()), MAX_TITLE_CHARS, "Title");

    c.required("personalInfo.name", &info.name, "Name");
    if info.email.trim().is_empty() {
        c.required("personalInfo.email", &info.email, "Email");
    } else {
        c.pattern(
            "personalInfo.email",
            Some(info.email.as_str()),
            email_re(),
            "Valid email is required",
        );
    }
    c.pattern(
        "personalInfo.phone",
        info.phone.as_deref(),
        phone_re(),
        "Please enter a valid phone number",
    );
    c.pattern(
        "personalInfo.linkedin",
        info.linkedin.as_deref(),
        linkedin_re(),
        "Please enter a valid LinkedIn URL",
    );
    c.pattern(
        "personalInfo.github",
        info.github.as_deref(),
        github_re(),
        "Please enter a valid GitHub URL",
    );
    c.max_chars(
        "personalInfo.summary",
        info.summary.as_deref(),
        MAX_SUMMARY_CHARS,
        "Summary",
    );

    for (i, edu) in doc.education.iter().enumerate() {
        let at = |f: &str| format!("education[{i}].{f}");
        c.required(&at("degree"), &edu.degree, "Degree");
        c.required(&at("school"), &edu.school, "School/Institution");
        c.date(&at("startDate"), edu.start_date.as_deref(), "Start date");
        c.date(&at("endDate"), edu.end_date.as_deref(), "End date");
        c.max_chars(
            &at("description"),
            edu.description.as_deref(),
            MAX_EDUCATION_DESCRIPTION_CHARS,
            "Description",
        );
    }

    for (i, exp) in doc.experience.iter().enumerate() {
        let at = |f: &str| format!("experience[{i}].{f}");
        c.required(&at("company"), &exp.company, "Company name");
        c.required(&at("role"), &exp.role, "Role/Position");
        c.date(&at("startDate"), exp.start_date.as_deref(), "Start date");
        if !exp.is_current_role {
            c.date(&at("endDate"), exp.end_date.as_deref(), "End date");
        }
        c.max_chars(
            &at("description"),
            exp.description.as_deref(),
            MAX_EXPERIENCE_DESCRIPTION_CHARS,
            "Description",
        );
    }

    for (i, project) in doc.projects.iter().enumerate() {
        let at = |f: &str| format!("projects[{i}].{f}");
        c.required(&at("title"), &project.title, "Project title");
        c.required(
            &at("description"),
            project.description.as_deref().unwrap_or_default(),
            "Project description",
        );
        c.max_chars(
            &at("description"),
            project.description.as_deref(),
            MAX_PROJECT_DESCRIPTION_CHARS,
            "Description",
        );
        c.pattern(
            &at("link"),
            project.link.as_deref(),
            http_url_re(),
            "Please enter a valid URL",
        );
    }

    for (i, cert) in doc.certificates.iter().enumerate() {
        let at = |f: &str| format!("certificates[{i}].{f}");
        c.required(&at("title"), &cert.title, "Certificate title");
        c.required(&at("issuer"), &cert.issuer, "Issuer");
        c.date(&at("date"), cert.date.as_deref(), "Date");
        c.max_chars(
            &at("description"),
            cert.description.as_deref(),
            MAX_CERTIFICATE_DESCRIPTION_CHARS,
            "Description",
        );
        c.pattern(
            &at("link"),
            cert.link.as_deref(),
            http_url_re(),
            "Please enter a valid URL",
        );
    }

    if c.errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(c.errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{ExperienceEntry, PersonalInfo, ProjectEntry};

    fn valid_document() -> ResumeDocument {
        ResumeDocument {
            title: "Platform roles".into(),
            personal_info: PersonalInfo {
                name: "Grace Hopper".into(),
                title: "Compiler Engineer".into(),
                email: "grace@example.com".into(),
                phone: Some("+1 (555) 010-2030".into()),
                linkedin: Some("https://www.linkedin.com/in/grace".into()),
                github: Some("https://github.com/grace".into()),
                ..Default::default()
            },
            experience: vec![ExperienceEntry {
                company: "Navy".into(),
                role: "Rear Admiral".into(),
                start_date: Some("1943-01-01".into()),
                end_date: None,
                is_current_role: true,
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    fn field_names(result: Result<(), AppError>) -> Vec<String> {
        match result {
            Err(AppError::Validation(fields)) => fields.into_iter().map(|f| f.field).collect(),
            Err(other) => panic!("unexpected error: {other}"),
            Ok(()) => vec![],
        }
    }

    #[test]
    fn test_valid_document_passes() {
        assert!(validate_document(&valid_document()).is_ok());
    }

    #[test]
    fn test_missing_identity_fields_all_reported() {
        let doc = ResumeDocument::default();
        let fields = field_names(validate_document(&doc));
        assert!(fields.contains(&"title".to_string()));
        assert!(fields.contains(&"personalInfo.name".to_string()));
        assert!(fields.contains(&"personalInfo.email".to_string()));
    }

    #[test]
    fn test_bad_email_rejected() {
        let mut doc = valid_document();
        doc.personal_info.email = "grace-at-example".into();
        assert_eq!(
            field_names(validate_document(&doc)),
            vec!["personalInfo.email".to_string()]
        );
    }

    #[test]
    fn test_wrong_profile_hosts_rejected() {
        let mut doc = valid_document();
        doc.personal_info.linkedin = Some("https://example.com/grace".into());
        doc.personal_info.github = Some("github.com/grace".into());
        let fields = field_names(validate_document(&doc));
        assert_eq!(fields.len(), 2);
    }

    #[test]
    fn test_blank_optional_fields_accepted() {
        let mut doc = valid_document();
        doc.personal_info.phone = Some("   ".into());
        doc.personal_info.linkedin = Some(String::new());
        assert!(validate_document(&doc).is_ok());
    }

    #[test]
    fn test_end_date_required_unless_current_role() {
        let mut doc = valid_document();
        doc.experience[0].is_current_role = false;
        assert_eq!(
            field_names(validate_document(&doc)),
            vec!["experience[0].endDate".to_string()]
        );
    }

    #[test]
    fn test_unparseable_date_rejected() {
        let mut doc = valid_document();
        doc.experience[0].start_date = Some("the forties".into());
        assert_eq!(
            field_names(validate_document(&doc)),
            vec!["experience[0].startDate".to_string()]
        );
    }

    #[test]
    fn test_title_length_limit() {
        let mut doc = valid_document();
        doc.title = "x".repeat(101);
        assert_eq!(field_names(validate_document(&doc)), vec!["title".to_string()]);
    }

    #[test]
    fn test_project_requires_description_and_http_link() {
        let mut doc = valid_document();
        doc.projects.push(ProjectEntry {
            title: "COBOL".into(),
            description: None,
            link: Some("javascript:void(0)".into()),
            technologies: vec![],
        });
        assert_eq!(
            field_names(validate_document(&doc)),
            vec![
                "projects[0].description".to_string(),
                "projects[0].link".to_string()
            ]
        );
    }
}
