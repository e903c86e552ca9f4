//! Schema validation rules for parsed MAKO documents.

use chrono::NaiveDate;
use serde::Serialize;
use url::Url;

use crate::document::{Document, Frontmatter};

/// Spec version this validator accepts.
pub const SPEC_VERSION: &str = "1.0";

/// Token counts above this trigger a warning.
pub const RECOMMENDED_MAX_TOKENS: i64 = 2000;

/// Freshness policies the schema recognizes.
const FRESHNESS_POLICIES: [&str; 5] = ["daily", "weekly", "monthly", "yearly", "static"];

/// HTTP methods the schema recognizes for actions.
const KNOWN_METHODS: [&str; 5] = ["GET", "POST", "PUT", "DELETE", "PATCH"];

/// Outcome of validating a parsed document.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    /// True when no errors were found.
    pub valid: bool,
    /// Schema violations, in field order.
    pub errors: Vec<String>,
    /// Advisory findings that do not invalidate the document.
    pub warnings: Vec<String>,
}

/// Validate a parsed document against the MAKO schema.
///
/// Pure over the document. Errors invalidate the document; warnings never do.
pub fn validate(document: &Document) -> ValidationReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    collect_field_errors(&document.frontmatter, &mut errors);
    collect_field_warnings(&document.frontmatter, &mut warnings);
    if document.body.trim().is_empty() {
        warnings.push("document body is empty".to_string());
    }

    ValidationReport {
        valid: errors.is_empty(),
        errors,
        warnings,
    }
}

/// Report hard schema violations, in field order.
fn collect_field_errors(frontmatter: &Frontmatter, errors: &mut Vec<String>) {
    match &frontmatter.mako {
        None => errors.push("missing required field 'mako'".to_string()),
        Some(version) if version != SPEC_VERSION => errors.push(format!(
            "unsupported mako version '{version}', expected '{SPEC_VERSION}'"
        )),
        Some(_) => {}
    }
    if frontmatter.content_type.is_none() {
        errors.push("missing required field 'type'".to_string());
    }
    match &frontmatter.entity {
        None => errors.push("missing required field 'entity'".to_string()),
        Some(entity) if entity.trim().is_empty() => {
            errors.push("field 'entity' must not be empty".to_string());
        }
        Some(_) => {}
    }
    match frontmatter.tokens {
        None => errors.push("missing required field 'tokens'".to_string()),
        Some(tokens) if tokens < 0 => {
            errors.push(format!("field 'tokens' must not be negative, got {tokens}"));
        }
        Some(_) => {}
    }
    if frontmatter.language.is_none() {
        errors.push("missing required field 'language'".to_string());
    }
    match &frontmatter.updated {
        None => errors.push("missing required field 'updated'".to_string()),
        Some(updated) if !is_date_stamp(updated) => errors.push(format!(
            "field 'updated' must be a YYYY-MM-DD date, got '{updated}'"
        )),
        Some(_) => {}
    }
}

/// Report advisory findings that leave the document valid.
fn collect_field_warnings(frontmatter: &Frontmatter, warnings: &mut Vec<String>) {
    if let Some(tokens) = frontmatter.tokens
        && tokens > RECOMMENDED_MAX_TOKENS
    {
        warnings.push(format!(
            "token count {tokens} exceeds the recommended maximum of {RECOMMENDED_MAX_TOKENS}"
        ));
    }
    if let Some(language) = &frontmatter.language
        && !is_language_tag(language)
    {
        warnings.push(format!("'{language}' does not look like a language code"));
    }
    if let Some(freshness) = &frontmatter.freshness
        && !FRESHNESS_POLICIES.contains(&freshness.as_str())
    {
        warnings.push(format!("unknown freshness policy '{freshness}'"));
    }
    if let Some(canonical) = &frontmatter.canonical
        && !is_absolute_http_url(canonical)
    {
        warnings.push(format!(
            "canonical URL '{canonical}' is not an absolute http(s) URL"
        ));
    }
    for action in &frontmatter.actions {
        if !KNOWN_METHODS.contains(&action.method.as_str()) {
            warnings.push(format!(
                "action '{}' uses unknown HTTP method '{}'",
                action.name, action.method
            ));
        }
    }
}

/// Check a date stamp: a real calendar date written as YYYY-MM-DD.
fn is_date_stamp(value: &str) -> bool {
    value.len() == 10 && NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}

/// Check a language tag: a two or three letter lowercase primary subtag,
/// optionally followed by short alphanumeric subtags ("en", "en-US", "pt-BR").
fn is_language_tag(tag: &str) -> bool {
    let mut subtags = tag.split('-');
    let Some(primary) = subtags.next() else {
        return false;
    };
    if !(2..=3).contains(&primary.len()) || !primary.chars().all(|c| c.is_ascii_lowercase()) {
        return false;
    }
    subtags.all(|subtag| {
        (1..=8).contains(&subtag.len()) && subtag.chars().all(|c| c.is_ascii_alphanumeric())
    })
}

/// Check that a URL is absolute with an http or https scheme.
fn is_absolute_http_url(candidate: &str) -> bool {
    match Url::parse(candidate) {
        Ok(url) => matches!(url.scheme(), "http" | "https"),
        Err(_) => false,
    }
}
