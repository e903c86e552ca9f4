//! Color palette and styling for CLI output.
//!
//! This module defines a consistent visual style for all CLI output.
//! Colors are designed for modern terminals with full color support.

use owo_colors::{OwoColorize, Style};

/// Style for pass markers and success lines.
pub fn pass() -> Style {
    Style::new().green()
}

/// Style for warning markers and warning detail lines.
pub fn warning() -> Style {
    Style::new().yellow()
}

/// Style for failure markers and error detail lines.
pub fn fail() -> Style {
    Style::new().red()
}

/// Style for headers and the batch summary line.
pub fn heading() -> Style {
    Style::new().white().bold()
}

/// Style for field labels like "Entity" or "Tokens".
pub fn label() -> Style {
    Style::new().dimmed()
}

/// Style for entity names - the primary identifier, visually prominent.
pub fn entity() -> Style {
    Style::new().cyan().bold()
}

/// Style for content-type values and action names.
pub fn accent() -> Style {
    Style::new().cyan()
}

/// Style for numeric values like token counts.
pub fn count() -> Style {
    Style::new().yellow()
}

/// Style for URLs and endpoints.
pub fn url() -> Style {
    Style::new().blue()
}

/// Style for link contexts, kind tags, and hint text.
pub fn detail() -> Style {
    Style::new().dimmed()
}

/// Format a pass marker or success line with styling.
pub fn fmt_pass(text: &str, use_color: bool) -> String {
    if use_color {
        text.style(pass()).to_string()
    } else {
        text.to_string()
    }
}

/// Format a warning with styling.
pub fn fmt_warning(text: &str, use_color: bool) -> String {
    if use_color {
        text.style(warning()).to_string()
    } else {
        text.to_string()
    }
}

/// Format a failure marker or error line with styling.
pub fn fmt_fail(text: &str, use_color: bool) -> String {
    if use_color {
        text.style(fail()).to_string()
    } else {
        text.to_string()
    }
}

/// Format a header or summary line with styling.
pub fn fmt_heading(text: &str, use_color: bool) -> String {
    if use_color {
        text.style(heading()).to_string()
    } else {
        text.to_string()
    }
}

/// Format a field label with styling.
pub fn fmt_label(text: &str, use_color: bool) -> String {
    if use_color {
        text.style(label()).to_string()
    } else {
        text.to_string()
    }
}

/// Format an entity name with styling.
pub fn fmt_entity(text: &str, use_color: bool) -> String {
    if use_color {
        text.style(entity()).to_string()
    } else {
        text.to_string()
    }
}

/// Format a content type or action name with styling.
pub fn fmt_accent(text: &str, use_color: bool) -> String {
    if use_color {
        text.style(accent()).to_string()
    } else {
        text.to_string()
    }
}

/// Format a numeric value with styling.
pub fn fmt_count(text: &str, use_color: bool) -> String {
    if use_color {
        text.style(count()).to_string()
    } else {
        text.to_string()
    }
}

/// Format a URL or endpoint with styling.
pub fn fmt_url(text: &str, use_color: bool) -> String {
    if use_color {
        text.style(url()).to_string()
    } else {
        text.to_string()
    }
}

/// Format secondary detail text with styling.
pub fn fmt_detail(text: &str, use_color: bool) -> String {
    if use_color {
        text.style(detail()).to_string()
    } else {
        text.to_string()
    }
}
