//! Implementation of the `mako inspect` command.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use mako_spec::{Action, Document, Frontmatter, Link, Media, ValidationReport};
use serde::Serialize;

use crate::{
    commands::ColorChoice,
    error::{Error, Result},
    palette,
};

/// Machine-readable inspection report.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    /// Path of the inspected file.
    file: String,
    /// Lossless front-matter structure.
    frontmatter: &'a serde_json::Value,
    /// Body length in characters.
    body_length: usize,
    /// Body line count.
    body_lines: usize,
    /// Validation outcome.
    validation: &'a ValidationReport,
}

/// Execute the inspect command.
///
/// Validation problems never fail this command; only unreadable or
/// unparsable files do.
pub async fn run(color: ColorChoice, file: PathBuf, json: bool) -> Result<()> {
    let contents = tokio::fs::read_to_string(&file)
        .await
        .map_err(|_| Error::FileNotFound { path: file.clone() })?;
    let document = mako_spec::parse(&contents).map_err(|error| Error::Parse { source: error })?;
    let report = mako_spec::validate(&document);

    if json {
        print_json(&file, &document, &report)?;
    } else {
        print_report(&file, &document, &report, color.enabled());
    }
    Ok(())
}

/// Emit the lossless JSON report.
fn print_json(file: &Path, document: &Document, report: &ValidationReport) -> Result<()> {
    let payload = JsonReport {
        file: file.display().to_string(),
        frontmatter: &document.raw,
        body_length: document.body.chars().count(),
        body_lines: body_lines(&document.body),
        validation: report,
    };
    let rendered = serde_json::to_string_pretty(&payload)
        .map_err(|error| Error::JsonSerialize { source: error })?;
    println!("{rendered}");
    Ok(())
}

/// Render the human-readable report in fixed section order.
fn print_report(file: &Path, document: &Document, report: &ValidationReport, use_color: bool) {
    let frontmatter = &document.frontmatter;

    println!();
    println!(
        "  {}",
        palette::fmt_heading(&file.display().to_string(), use_color)
    );
    println!("{}", palette::fmt_detail(&"  ─".repeat(30), use_color));

    print_core(frontmatter, use_color);
    print_optional(frontmatter, use_color);
    if let Some(media) = &frontmatter.media {
        print_media(media, use_color);
    }
    print_related(&frontmatter.related, use_color);
    print_actions(&frontmatter.actions, use_color);
    print_links(&frontmatter.links, use_color);
    print_body_stats(&document.body, use_color);
    print_validation(report, use_color);
    println!();
}

/// Print a top-level labeled line.
fn field(label: &str, value: &str, use_color: bool) {
    println!(
        "  {}{value}",
        palette::fmt_label(&format!("{label:<12} "), use_color)
    );
}

/// Print an indented labeled line inside a section.
fn sub_field(label: &str, value: &str, use_color: bool) {
    println!(
        "    {}{value}",
        palette::fmt_label(&format!("{label:<10} "), use_color)
    );
}

/// Print the core metadata fields. Missing values render as a dash.
fn print_core(frontmatter: &Frontmatter, use_color: bool) {
    field(
        "Version",
        &display_or_dash(frontmatter.mako.as_deref()),
        use_color,
    );
    field(
        "Type",
        &palette::fmt_accent(
            &display_or_dash(frontmatter.content_type.as_deref()),
            use_color,
        ),
        use_color,
    );
    field(
        "Entity",
        &palette::fmt_entity(&display_or_dash(frontmatter.entity.as_deref()), use_color),
        use_color,
    );
    field(
        "Language",
        &display_or_dash(frontmatter.language.as_deref()),
        use_color,
    );
    let tokens = frontmatter
        .tokens
        .map_or_else(|| "-".to_string(), |tokens| tokens.to_string());
    field(
        "Tokens",
        &palette::fmt_count(&tokens, use_color),
        use_color,
    );
    field(
        "Updated",
        &display_or_dash(frontmatter.updated.as_deref()),
        use_color,
    );
}

/// Print the optional scalar fields that are present.
fn print_optional(frontmatter: &Frontmatter, use_color: bool) {
    if let Some(summary) = &frontmatter.summary {
        field("Summary", summary, use_color);
    }
    if let Some(freshness) = &frontmatter.freshness {
        field("Freshness", freshness, use_color);
    }
    if let Some(audience) = &frontmatter.audience {
        field("Audience", audience, use_color);
    }
    if !frontmatter.tags.is_empty() {
        field("Tags", &frontmatter.tags.join(", "), use_color);
    }
    if let Some(canonical) = &frontmatter.canonical {
        field(
            "Canonical",
            &palette::fmt_url(canonical, use_color),
            use_color,
        );
    }
    if let Some(model) = &frontmatter.embedding_model {
        field("Emb. Model", model, use_color);
    }
}

/// Print the media section: cover details, then non-zero counts.
fn print_media(media: &Media, use_color: bool) {
    println!();
    println!("  {}", palette::fmt_heading("Media", use_color));
    if let Some(cover) = &media.cover {
        sub_field("Cover", &palette::fmt_url(&cover.url, use_color), use_color);
        if let Some(alt) = &cover.alt {
            sub_field("Alt", alt, use_color);
        }
    }
    for (label, count) in [
        ("Images", media.images),
        ("Video", media.video),
        ("Audio", media.audio),
        ("Interactive", media.interactive),
        ("Downloads", media.downloads),
    ] {
        if let Some(count) = count
            && count > 0
        {
            sub_field(
                label,
                &palette::fmt_count(&count.to_string(), use_color),
                use_color,
            );
        }
    }
}

/// Print the related-entities section when non-empty.
fn print_related(related: &[String], use_color: bool) {
    if related.is_empty() {
        return;
    }
    println!();
    println!(
        "  {} {}",
        palette::fmt_heading("Related", use_color),
        palette::fmt_detail(&format!("({})", related.len()), use_color)
    );
    for path in related {
        println!("    {}", palette::fmt_url(path, use_color));
    }
}

/// Print the actions section when non-empty.
fn print_actions(actions: &[Action], use_color: bool) {
    if actions.is_empty() {
        return;
    }
    println!();
    println!(
        "  {} {}",
        palette::fmt_heading("Actions", use_color),
        palette::fmt_detail(&format!("({})", actions.len()), use_color)
    );
    for action in actions {
        println!(
            "    {} {} {} {} {}",
            palette::fmt_detail("→", use_color),
            palette::fmt_accent(&action.name, use_color),
            palette::fmt_detail("—", use_color),
            palette::fmt_url(&action.endpoint, use_color),
            palette::fmt_detail(&format!("[{}]", action.method), use_color),
        );
        for param in &action.params {
            let marker = if param.required {
                palette::fmt_fail("*", use_color)
            } else {
                String::new()
            };
            println!(
                "      {}{marker}: {}",
                param.name,
                palette::fmt_detail(&param.kind, use_color)
            );
        }
    }
}

/// Print every link category that has entries.
fn print_links(links: &BTreeMap<String, Vec<Link>>, use_color: bool) {
    let total: usize = links.values().map(Vec::len).sum();
    if total == 0 {
        return;
    }
    println!();
    println!(
        "  {} {}",
        palette::fmt_heading("Links", use_color),
        palette::fmt_detail(&format!("({total})"), use_color)
    );
    for (category, group) in links {
        if group.is_empty() {
            continue;
        }
        println!(
            "    {}",
            palette::fmt_label(&format!("{category}:"), use_color)
        );
        for link in group {
            let tag = link.kind.as_ref().map_or_else(String::new, |kind| {
                format!(" {}", palette::fmt_detail(&format!("[{kind}]"), use_color))
            });
            println!(
                "      {} {} {}{tag}",
                palette::fmt_url(&link.url, use_color),
                palette::fmt_detail("—", use_color),
                link.context,
            );
        }
    }
}

/// Print body statistics.
fn print_body_stats(body: &str, use_color: bool) {
    println!();
    println!("  {}", palette::fmt_heading("Body", use_color));
    sub_field(
        "Lines",
        &palette::fmt_count(&body_lines(body).to_string(), use_color),
        use_color,
    );
    sub_field(
        "Chars",
        &palette::fmt_count(&body.chars().count().to_string(), use_color),
        use_color,
    );
    let headings = body.lines().filter(|line| line.starts_with('#')).count();
    sub_field(
        "Headings",
        &palette::fmt_count(&headings.to_string(), use_color),
        use_color,
    );
}

/// Print the validation outcome.
fn print_validation(report: &ValidationReport, use_color: bool) {
    println!();
    if report.valid {
        println!("  {}", palette::fmt_pass("✓ Valid", use_color));
        for warning in &report.warnings {
            println!("    {} {warning}", palette::fmt_warning("→", use_color));
        }
    } else {
        println!("  {}", palette::fmt_fail("✗ Invalid", use_color));
        for error in &report.errors {
            println!("    {} {error}", palette::fmt_fail("→", use_color));
        }
    }
}

/// Count newline-separated segments of the body.
fn body_lines(body: &str) -> usize {
    body.split('\n').count()
}

/// Show a value or a dash when absent.
fn display_or_dash(value: Option<&str>) -> String {
    value.unwrap_or("-").to_string()
}

#[cfg(test)]
mod tests {
    use super::{JsonReport, body_lines, display_or_dash};

    #[test]
    fn counts_newline_segments() {
        assert_eq!(body_lines(""), 1);
        assert_eq!(body_lines("a\nb"), 2);
        assert_eq!(body_lines("a\nb\n"), 3);
    }

    #[test]
    fn dashes_absent_values() {
        assert_eq!(display_or_dash(None), "-");
        assert_eq!(display_or_dash(Some("en")), "en");
    }

    #[test]
    fn renders_camel_case_json_keys() {
        let document =
            mako_spec::parse("---\nmako: \"1.0\"\n---\nBody\n").expect("parse should succeed");
        let report = mako_spec::validate(&document);
        let payload = JsonReport {
            file: "x.mako.md".to_string(),
            frontmatter: &document.raw,
            body_length: document.body.chars().count(),
            body_lines: body_lines(&document.body),
            validation: &report,
        };
        let value = serde_json::to_value(&payload).expect("serialize should succeed");
        assert_eq!(value["file"], "x.mako.md");
        assert_eq!(value["frontmatter"]["mako"], "1.0");
        assert_eq!(value["bodyLength"], 5);
        assert_eq!(value["bodyLines"], 2);
        assert_eq!(value["validation"]["valid"], false);
    }
}
