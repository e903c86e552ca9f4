//! Front-matter extraction and YAML decoding for MAKO documents.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::document::{Document, Frontmatter};

/// Errors produced when a MAKO document cannot be parsed.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The text does not begin with a front-matter block.
    #[error("missing front-matter block")]
    MissingFrontmatter,
    /// The front-matter decodes to something other than a mapping.
    #[error("front-matter is not a YAML mapping")]
    NotAMapping,
    /// The front-matter is not well-formed YAML.
    #[error("invalid YAML in front-matter: {source}")]
    Yaml {
        /// Decoder failure describing the syntax problem.
        source: serde_yaml::Error,
    },
    /// The mapping is well-formed YAML but a known field has the wrong shape.
    #[error("front-matter does not fit the MAKO schema: {source}")]
    Schema {
        /// Decoder failure naming the mismatched field.
        source: serde_json::Error,
    },
}

/// Parse a MAKO document into front-matter and body.
///
/// The front-matter mapping is decoded twice from the same text: losslessly
/// into [`Document::raw`] and selectively into the typed
/// [`Frontmatter`](crate::Frontmatter) view.
pub fn parse(text: &str) -> Result<Document, ParseError> {
    let bounds = frontmatter_bounds(text).ok_or(ParseError::MissingFrontmatter)?;
    // An empty block decodes to null. Treat it as an empty mapping so
    // validation can report the missing fields.
    let raw = match serde_yaml::from_str::<Value>(&text[bounds.start..bounds.end])
        .map_err(|error| ParseError::Yaml { source: error })?
    {
        Value::Null => Value::Object(Map::new()),
        value => value,
    };
    if !raw.is_object() {
        return Err(ParseError::NotAMapping);
    }
    let frontmatter: Frontmatter =
        serde_json::from_value(raw.clone()).map_err(|error| ParseError::Schema { source: error })?;

    Ok(Document {
        frontmatter,
        raw,
        body: text[bounds.body..].to_string(),
    })
}

/// Byte range bounds for front-matter in a document.
#[derive(Debug, Clone, Copy)]
struct FrontmatterBounds {
    /// Start byte index of the YAML payload.
    start: usize,
    /// End byte index of the YAML payload.
    end: usize,
    /// Start byte index of the body, past the closing delimiter line.
    body: usize,
}

/// Locate the byte range containing front-matter in a document.
fn frontmatter_bounds(text: &str) -> Option<FrontmatterBounds> {
    let mut offset = 0;
    let mut lines = text.split_inclusive('\n');
    let first = lines.next()?;
    if trim_line_endings(first) != "---" {
        return None;
    }
    offset += first.len();
    let start = offset;

    for line in lines {
        if trim_line_endings(line) == "---" {
            return Some(FrontmatterBounds {
                start,
                end: offset,
                body: offset + line.len(),
            });
        }
        offset += line.len();
    }

    None
}

/// Trim CRLF and LF suffixes from a line fragment.
fn trim_line_endings(line: &str) -> &str {
    line.trim_end_matches(['\r', '\n'])
}

#[cfg(test)]
mod tests {
    use super::{ParseError, parse};

    fn parse_error(text: &str) -> ParseError {
        parse(text).expect_err("parse should fail")
    }

    #[test]
    fn rejects_text_without_frontmatter() {
        let error = parse_error("# Title\n\nJust Markdown.\n");
        assert!(matches!(error, ParseError::MissingFrontmatter));
    }

    #[test]
    fn rejects_unterminated_frontmatter() {
        let error = parse_error("---\nmako: \"1.0\"\n");
        assert!(matches!(error, ParseError::MissingFrontmatter));
    }

    #[test]
    fn rejects_non_mapping_frontmatter() {
        let error = parse_error("---\n- just\n- a list\n---\n");
        assert!(matches!(error, ParseError::NotAMapping));
    }

    #[test]
    fn treats_empty_frontmatter_as_empty_mapping() {
        let document = parse("---\n---\nBody\n").expect("parse should succeed");
        assert!(document.frontmatter.mako.is_none());
        assert_eq!(document.raw, serde_json::json!({}));
    }

    #[test]
    fn rejects_malformed_yaml() {
        let error = parse_error("---\nmako: \"1.0\ntype: product\n---\n");
        assert!(matches!(error, ParseError::Yaml { .. }));
    }

    #[test]
    fn rejects_mistyped_known_fields() {
        let error = parse_error("---\ntokens: lots\n---\n");
        assert!(matches!(error, ParseError::Schema { .. }));
    }

    #[test]
    fn reads_typed_fields() {
        let text = "---\nmako: \"1.0\"\ntype: product\nentity: \"Widget\"\ntokens: 42\nlanguage: en\nupdated: \"2026-01-05\"\n---\nBody\n";
        let document = parse(text).expect("parse should succeed");
        assert_eq!(document.frontmatter.mako.as_deref(), Some("1.0"));
        assert_eq!(document.frontmatter.content_type.as_deref(), Some("product"));
        assert_eq!(document.frontmatter.entity.as_deref(), Some("Widget"));
        assert_eq!(document.frontmatter.tokens, Some(42));
    }

    #[test]
    fn extracts_body_after_closing_delimiter() {
        let document = parse("---\nmako: \"1.0\"\n---\n\n# Title\n").expect("parse should succeed");
        assert_eq!(document.body, "\n# Title\n");
    }

    #[test]
    fn treats_missing_body_as_empty() {
        let document = parse("---\nmako: \"1.0\"\n---").expect("parse should succeed");
        assert_eq!(document.body, "");
    }

    #[test]
    fn tolerates_crlf_line_endings() {
        let document = parse("---\r\nmako: \"1.0\"\r\n---\r\nBody\r\n").expect("parse should succeed");
        assert_eq!(document.frontmatter.mako.as_deref(), Some("1.0"));
        assert_eq!(document.body, "Body\r\n");
    }

    #[test]
    fn defaults_action_method_to_post() {
        let text = "---\nactions:\n  - name: add\n    endpoint: /api/add\n---\n";
        let document = parse(text).expect("parse should succeed");
        assert_eq!(document.frontmatter.actions[0].method, "POST");
        assert!(document.frontmatter.actions[0].params.is_empty());
    }

    #[test]
    fn preserves_unknown_fields_in_raw_view() {
        let text = "---\nmako: \"1.0\"\ncustom-field: 7\n---\n";
        let document = parse(text).expect("parse should succeed");
        assert_eq!(document.raw["custom-field"], 7);
        assert_eq!(document.raw["mako"], "1.0");
    }

    #[test]
    fn groups_links_by_category() {
        let text = "---\nlinks:\n  internal:\n    - url: /a\n      context: \"In here\"\n  api:\n    - url: /api\n      context: \"Reference\"\n      type: docs\n---\n";
        let document = parse(text).expect("parse should succeed");
        let links = &document.frontmatter.links;
        assert_eq!(links.len(), 2);
        assert_eq!(links["internal"][0].url, "/a");
        assert_eq!(links["api"][0].kind.as_deref(), Some("docs"));
    }
}
