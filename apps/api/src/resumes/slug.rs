//! Portfolio URL slugs.

use uuid::Uuid;

const MAX_SLUG_CHARS: usize = 60;
const FALLBACK_STEM: &str = "portfolio";

/// Lowercase ASCII alphanumerics separated by single hyphens.
pub fn slugify(raw: &str) -> String {
    let mut slug = String::with_capacity(raw.len());
    for c in raw.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let capped: String = slug.chars().take(MAX_SLUG_CHARS).collect();
    capped.trim_end_matches('-').to_string()
}

/// `<slugified-name>-<8 hex>`; the suffix keeps generated slugs unique.
pub fn generate_slug(name: &str) -> String {
    let stem = slugify(name);
    let stem = if stem.is_empty() { FALLBACK_STEM } else { &stem };
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{stem}-{}", &suffix[..8])
}

/// Slug to write when publishing. Returns `None` when the stored slug should
/// be left as is: unpublishing, or republishing a resume that already has one.
pub fn slug_for_publish(
    existing: Option<&str>,
    is_published: bool,
    custom: Option<&str>,
    name: &str,
) -> Option<String> {
    if !is_published || existing.is_some() {
        return None;
    }
    let custom = custom.map(slugify).filter(|s| !s.is_empty());
    Some(custom.unwrap_or_else(|| generate_slug(name)))
}
