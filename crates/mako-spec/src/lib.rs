#![warn(missing_docs)]
//! Parsing and schema validation for MAKO documents.
//!
//! A MAKO file is a Markdown document that opens with a YAML front-matter
//! block describing a content entity: what it is, how fresh it is, which
//! operations a machine may invoke on it, and how it links to related
//! content. This crate owns the file grammar and the schema rule set.
//! Callers get two entry points, [`parse`] and [`validate`].

/// Typed front-matter model.
mod document;
/// Front-matter extraction and YAML decoding.
mod parse;
/// Schema rule set.
mod validate;

pub use crate::document::{Action, ActionParam, Document, Frontmatter, Link, Media, MediaCover};
pub use crate::parse::{ParseError, parse};
pub use crate::validate::{RECOMMENDED_MAX_TOKENS, SPEC_VERSION, ValidationReport, validate};
