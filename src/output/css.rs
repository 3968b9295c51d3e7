use std::fmt::Write;

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::FontExtension;
use crate::registry::{FontFiles, FontRegistry};
use crate::utils::{escape_css_string, escape_html};

lazy_static! {
    static ref LINE_BREAK: Regex = Regex::new(r"\r?\n *").unwrap();
}

/// Render one `@font-face` block per family and weight/style group
pub fn render_css(registry: &FontRegistry, minify: bool) -> String {
    let mut css = String::new();
    for family in registry.families() {
        let name = escape_css_string(&family.name, '"');
        for (key, files) in &family.groups {
            css.push_str("@font-face{\n");
            let _ = writeln!(css, "  font-family:\"{}\";", name);
            let _ = writeln!(css, "  font-weight:{};", key.weight.css_value());
            let _ = writeln!(css, "  font-style:{};", key.style);
            push_sources(&mut css, files);
            css.push_str("  font-display: swap;\n");
            css.push_str("}\n");
        }
    }

    if minify {
        minify_css(&css)
    } else {
        css
    }
}

/// Remove every line break together with the indentation after it
pub fn minify_css(css: &str) -> String {
    LINE_BREAK.replace_all(css, "").into_owned()
}

/// Wrap CSS for embedding in an HTML document
pub fn style_tag(css: &str, id: &str) -> String {
    format!("<style id=\"{}\">{}</style>", escape_html(id), css)
}

fn push_sources(css: &mut String, files: &FontFiles) {
    // IE9 compatibility mode only reads a lone src
    if let Some(eot) = files.get(&FontExtension::Eot) {
        let _ = writeln!(css, "  src:url(\"{}\");", eot.url);
    }

    let urls: Vec<String> = files
        .iter()
        .map(|(ext, file)| {
            // IE6-IE8 need the query/fragment hack to load eot from a list
            let suffix = if *ext == FontExtension::Eot { "?#iefix" } else { "" };
            format!("url(\"{}{}\") format(\"{}\")", file.url, suffix, ext.css_format())
        })
        .collect();
    let _ = writeln!(css, "  src:{};", urls.join(",\n      "));
}
