//! Markup builder — turns a `NormalizedResume` into a self-contained HTML document.
//!
//! Section order is fixed: header, Experience, Education, Skills, Projects,
//! Certificates. A section is emitted only when its list is non-empty.

use std::borrow::Cow;

use crate::render::normalize::{
    CertificateItem, EducationItem, ExperienceItem, Header, NormalizedResume, ProjectItem,
};
use crate::render::palette::Palette;
use crate::render::presets::{stylesheet, StylePreset};

const LINK_GLYPH: &str = "\u{1F517}";

/// Escapes text for use in element content and double-quoted attributes.
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    Cow::Owned(out)
}

/// Builds the full document: shell, embedded stylesheet, and body sections.
pub fn render_document(
    resume: &NormalizedResume<'_>,
    preset: &StylePreset,
    palette: &Palette,
) -> String {
    let mut html = String::with_capacity(16 * 1024);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape(resume.title)));
    html.push_str("<style>\n");
    html.push_str(&stylesheet(preset, &palette.root_rule()));
    html.push_str("</style>\n</head>\n<body>\n<div class=\"container\">\n");

    push_header(&mut html, &resume.header);

    if !resume.experience.is_empty() {
        open_section(&mut html, "Experience");
        resume
            .experience
            .iter()
            .for_each(|exp| push_experience(&mut html, exp));
        close_section(&mut html);
    }

    if !resume.education.is_empty() {
        open_section(&mut html, "Education");
        resume
            .education
            .iter()
            .for_each(|edu| push_education(&mut html, edu));
        close_section(&mut html);
    }

    if !resume.skills.is_empty() {
        open_section(&mut html, "Skills");
        html.push_str("<div class=\"skills\">");
        for skill in &resume.skills {
            html.push_str(&format!("<span class=\"skill\">{}</span>", escape(skill)));
        }
        html.push_str("</div>\n");
        close_section(&mut html);
    }

    if !resume.projects.is_empty() {
        open_section(&mut html, "Projects");
        resume
            .projects
            .iter()
            .for_each(|project| push_project(&mut html, project));
        close_section(&mut html);
    }

    if !resume.certificates.is_empty() {
        open_section(&mut html, "Certificates");
        resume
            .certificates
            .iter()
            .for_each(|cert| push_certificate(&mut html, cert));
        close_section(&mut html);
    }

    html.push_str("</div>\n</body>\n</html>\n");
    html
}

fn push_header(html: &mut String, header: &Header<'_>) {
    html.push_str("<header class=\"header\">\n");
    html.push_str(&format!("<h1 class=\"name\">{}</h1>\n", escape(header.name)));
    html.push_str(&format!("<p class=\"title\">{}</p>\n", escape(header.title)));

    if header.has_contact() {
        html.push_str("<div class=\"contact\">");
        let items = [
            ("Email", header.email),
            ("Phone", header.phone),
            ("Location", header.location),
        ];
        for (label, value) in items {
            if let Some(value) = value {
                html.push_str(&format!(
                    "<span class=\"contact-item\"><span class=\"contact-label\">{label}:</span> {}</span>",
                    escape(value)
                ));
            }
        }
        html.push_str("</div>\n");
    }

    if header.has_links() {
        html.push_str("<div class=\"links\">");
        for (label, url) in [("LinkedIn", header.linkedin), ("GitHub", header.github)] {
            if let Some(url) = url {
                html.push_str(&format!(
                    "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{label}</a>",
                    escape(url)
                ));
            }
        }
        html.push_str("</div>\n");
    }

    if let Some(summary) = header.summary {
        html.push_str(&format!("<p class=\"summary\">{}</p>\n", escape(summary)));
    }

    html.push_str("</header>\n");
}

fn open_section(html: &mut String, heading: &str) {
    html.push_str(&format!(
        "<section class=\"section\">\n<h2 class=\"section-title\">{heading}</h2>\n"
    ));
}

fn close_section(html: &mut String) {
    html.push_str("</section>\n");
}

/// Item heading row: title on the left, optional date span on the right.
fn push_item_heading(html: &mut String, title: &str, link: Option<&str>, date: Option<String>) {
    html.push_str("<div class=\"item-heading\"><h3 class=\"item-title\">");
    html.push_str(&escape(title));
    if let Some(url) = link {
        html.push_str(&format!(
            " <a class=\"link-glyph\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{LINK_GLYPH}</a>",
            escape(url)
        ));
    }
    html.push_str("</h3>");
    if let Some(date) = date {
        html.push_str(&format!("<span class=\"item-date\">{date}</span>"));
    }
    html.push_str("</div>\n");
}

fn push_subtitle(html: &mut String, subtitle: &str) {
    html.push_str(&format!(
        "<p class=\"item-subtitle\">{}</p>\n",
        escape(subtitle)
    ));
}

fn push_description(html: &mut String, description: Option<&str>) {
    if let Some(text) = description {
        html.push_str(&format!(
            "<p class=\"item-description\">{}</p>\n",
            escape(text)
        ));
    }
}

fn push_experience(html: &mut String, exp: &ExperienceItem<'_>) {
    html.push_str("<div class=\"item\">\n");
    push_item_heading(html, exp.role, None, exp.span.map(|s| s.to_string()));
    push_subtitle(html, exp.company);
    push_description(html, exp.description);
    html.push_str("</div>\n");
}

fn push_education(html: &mut String, edu: &EducationItem<'_>) {
    html.push_str("<div class=\"item\">\n");
    push_item_heading(html, edu.degree, None, edu.span.map(|s| s.to_string()));
    push_subtitle(html, edu.school);
    push_description(html, edu.description);
    html.push_str("</div>\n");
}

fn push_project(html: &mut String, project: &ProjectItem<'_>) {
    html.push_str("<div class=\"item\">\n");
    push_item_heading(html, project.title, project.link, None);
    if !project.technologies.is_empty() {
        html.push_str("<div class=\"tech-list\">");
        for tech in &project.technologies {
            html.push_str(&format!("<span class=\"tech\">{}</span>", escape(tech)));
        }
        html.push_str("</div>\n");
    }
    push_description(html, project.description);
    html.push_str("</div>\n");
}

fn push_certificate(html: &mut String, cert: &CertificateItem<'_>) {
    html.push_str("<div class=\"item\">\n");
    push_item_heading(html, cert.title, cert.link, cert.year.map(|y| y.to_string()));
    push_subtitle(html, cert.issuer);
    push_description(html, cert.description);
    html.push_str("</div>\n");
}
