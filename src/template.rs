//! Document templates for scaffolding new MAKO files.

use std::sync::LazyLock;

use chrono::Local;
use minijinja::{Environment, UndefinedBehavior, context};

use crate::error::{Error, Result};

/// Name of the fallback template for unregistered content types.
const GENERIC: &str = "default";

/// Template for product entities, with a sample cart action.
const PRODUCT: &str = r#"---
mako: "1.0"
type: product
entity: "{{ entity }}"
tokens: 0
language: {{ lang }}
updated: "{{ date }}"

actions:
  - name: add_to_cart
    description: "Add this product to the shopping cart"
    endpoint: /api/cart/add
    method: POST
    params:
      - name: product_id
        type: string
        required: true
        description: "Product identifier"
      - name: quantity
        type: integer
        required: false
        description: "Number of items"

links:
  internal:
    - url: /category/example
      context: "Browse related products"
---

# {{ entity }}

Short description of the product.

## Key Facts

- Price: 0.00 EUR
- Rating: 0/5
- Availability: In stock
"#;

/// Template for article entities.
const ARTICLE: &str = r#"---
mako: "1.0"
type: article
entity: "{{ entity }}"
tokens: 0
language: {{ lang }}
updated: "{{ date }}"
freshness: weekly

links:
  internal:
    - url: /related-article
      context: "Related reading"
---

# {{ entity }}

Introduction paragraph.

## Section 1

Content here.

## Section 2

More content.
"#;

/// Template for documentation entities.
const DOCS: &str = r#"---
mako: "1.0"
type: docs
entity: "{{ entity }}"
tokens: 0
language: {{ lang }}
updated: "{{ date }}"
audience: developers

links:
  api:
    - url: /api/reference
      context: "Full API reference"
---

# {{ entity }}

Overview of the documentation.

## Getting Started

Setup instructions.

## API Reference

Endpoint documentation.
"#;

/// Generic template for any other content type.
const DEFAULT: &str = r#"---
mako: "1.0"
type: {{ content_type }}
entity: "{{ entity }}"
tokens: 0
language: {{ lang }}
updated: "{{ date }}"
---

# {{ entity }}

Content here.
"#;

/// The template registry, compiled once at startup.
static REGISTRY: LazyLock<Environment<'static>> = LazyLock::new(|| {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    for (name, source) in [
        ("product", PRODUCT),
        ("article", ARTICLE),
        ("docs", DOCS),
        (GENERIC, DEFAULT),
    ] {
        env.add_template(name, source).expect("template compiles");
    }
    env
});

/// Render the scaffold document for a content type.
///
/// Unknown types fall back to the generic template. The `updated` field is
/// stamped with the current local date, so output is time-dependent.
pub fn render(content_type: &str, entity: &str, lang: &str) -> Result<String> {
    let template = REGISTRY
        .get_template(content_type)
        .or_else(|_| REGISTRY.get_template(GENERIC))
        .map_err(|error| Error::TemplateRender {
            message: error.to_string(),
        })?;
    let date = Local::now().format("%Y-%m-%d").to_string();
    template
        .render(context! { content_type, entity, lang, date })
        .map_err(|error| Error::TemplateRender {
            message: error.to_string(),
        })
}
