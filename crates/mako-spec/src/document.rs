//! Typed document model for MAKO front-matter.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A parsed MAKO file.
#[derive(Debug, Clone)]
pub struct Document {
    /// Typed view of the schema fields.
    pub frontmatter: Frontmatter,
    /// The full front-matter mapping, preserved without loss for machine
    /// output. Unknown fields survive here even though the typed view skips
    /// them.
    pub raw: serde_json::Value,
    /// Everything after the closing front-matter delimiter line.
    pub body: String,
}

/// Schema fields of a MAKO front-matter block.
///
/// Core fields are optional at this level: their absence is a validation
/// error rather than a parse error, so a structurally sound file can always
/// be inspected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Frontmatter {
    /// Spec version tag.
    pub mako: Option<String>,
    /// Content type, e.g. "product" or "article".
    #[serde(rename = "type")]
    pub content_type: Option<String>,
    /// Name of the entity the document describes.
    pub entity: Option<String>,
    /// Approximate token count of the body.
    pub tokens: Option<i64>,
    /// Language code, e.g. "en".
    pub language: Option<String>,
    /// Last-updated date in YYYY-MM-DD form.
    pub updated: Option<String>,
    /// One-line summary of the document.
    pub summary: Option<String>,
    /// Refresh policy, e.g. "weekly".
    pub freshness: Option<String>,
    /// Intended audience, e.g. "developers".
    pub audience: Option<String>,
    /// Topic tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Canonical URL for the entity.
    pub canonical: Option<String>,
    /// Identifier of the embedding model applied to the content.
    #[serde(rename = "embedding-model")]
    pub embedding_model: Option<String>,
    /// Attached media.
    pub media: Option<Media>,
    /// Paths of related MAKO documents.
    #[serde(default)]
    pub related: Vec<String>,
    /// Machine-invokable operations.
    #[serde(default)]
    pub actions: Vec<Action>,
    /// Link groups keyed by category name (internal, external, api, ...).
    #[serde(default)]
    pub links: BTreeMap<String, Vec<Link>>,
}

/// Media attachments described by the front-matter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Media {
    /// Cover image.
    pub cover: Option<MediaCover>,
    /// Number of attached images.
    pub images: Option<u64>,
    /// Number of attached videos.
    pub video: Option<u64>,
    /// Number of attached audio clips.
    pub audio: Option<u64>,
    /// Number of interactive embeds.
    pub interactive: Option<u64>,
    /// Number of downloadable assets.
    pub downloads: Option<u64>,
}

/// Cover image reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaCover {
    /// Image URL.
    pub url: String,
    /// Alternative text.
    pub alt: Option<String>,
}

/// A machine-invokable operation exposed by the entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Action {
    /// Operation name.
    pub name: String,
    /// What the operation does.
    pub description: Option<String>,
    /// Endpoint URL or path.
    pub endpoint: String,
    /// HTTP method. POST when unspecified.
    #[serde(default = "default_method")]
    pub method: String,
    /// Operation parameters.
    #[serde(default)]
    pub params: Vec<ActionParam>,
}

/// Default HTTP method for actions.
fn default_method() -> String {
    "POST".to_string()
}

/// A single action parameter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionParam {
    /// Parameter name.
    pub name: String,
    /// Value type, e.g. "string" or "integer".
    #[serde(rename = "type")]
    pub kind: String,
    /// Whether the parameter must be supplied.
    #[serde(default)]
    pub required: bool,
    /// What the parameter means.
    pub description: Option<String>,
}

/// A link to related content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    /// Target URL or path.
    pub url: String,
    /// Why the link is relevant.
    pub context: String,
    /// Optional link-kind tag, e.g. "canonical".
    #[serde(rename = "type")]
    pub kind: Option<String>,
}
