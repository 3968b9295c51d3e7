//! Rendering of font definitions as CSS, HTML, plain lists and JSON

pub mod css;
pub mod html;

pub use css::{minify_css, render_css, style_tag};
pub use html::render_test_page;

use crate::error::Result;
use crate::registry::FontRegistry;

/// One family name per line
pub fn render_families(registry: &FontRegistry) -> String {
    registry
        .families()
        .iter()
        .map(|family| format!("{}\n", family.name))
        .collect()
}

/// JSON object of family -> "weight/style" -> extension -> URL
pub fn render_definitions(registry: &FontRegistry) -> Result<String> {
    Ok(serde_json::to_string_pretty(registry)?)
}
