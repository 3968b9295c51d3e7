use std::fmt::Write;

use crate::models::{FontStyle, FontWeight};
use crate::registry::FontRegistry;
use crate::utils::{escape_css_string, escape_html};

/// Render a page showing a sample line for every family, weight and style.
///
/// Variable fonts get one sample per weight class from 100 to 900.
pub fn render_test_page(registry: &FontRegistry) -> String {
    let mut html = String::from("<h2>Custom Font Test</h2>");
    for family in registry.families() {
        let name = escape_html(&family.name);
        // quoted for CSS first; the attribute's entities are decoded before CSS parsing
        let css_name = escape_html(&escape_css_string(&family.name, '\''));
        let _ = write!(html, "<h3 style=\"font-family:'{}';\">{}</h3>", css_name, name);

        for key in family.groups.keys() {
            match key.weight {
                FontWeight::Numeric(weight) => push_sample(&mut html, &css_name, &name, weight, key.style),
                FontWeight::Variable => {
                    for weight in FontWeight::CLASSES {
                        push_sample(&mut html, &css_name, &name, weight, key.style);
                    }
                }
            }
        }
    }
    html
}

fn push_sample(html: &mut String, css_name: &str, name: &str, weight: u16, style: FontStyle) {
    let _ = write!(
        html,
        "<span style=\"font-family:'{0}'; font-weight:{2};font-style:{3}\">{1} {2} {3}</span><br/>",
        css_name, name, weight, style
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::NameParser;
    use crate::models::Config;
    use crate::registry::FontCandidate;
    use url::Url;

    fn registry(paths: &[&str]) -> FontRegistry {
        let base = Url::parse("https://example.com/fonts/").unwrap();
        let candidates: Vec<FontCandidate> = paths
            .iter()
            .map(|p| FontCandidate::new(format!("/fonts/{}", p), base.join(p).unwrap()))
            .collect();
        FontRegistry::from_candidates(&candidates, &NameParser::new(), &Config::default())
    }

    #[test]
    fn one_sample_per_group() {
        let html = render_test_page(&registry(&["Lato-Bold.ttf", "Lato-Italic.woff"]));
        assert_eq!(
            html,
            concat!(
                "<h2>Custom Font Test</h2>",
                "<h3 style=\"font-family:'Lato';\">Lato</h3>",
                "<span style=\"font-family:'Lato'; font-weight:400;font-style:italic\">Lato 400 italic</span><br/>",
                "<span style=\"font-family:'Lato'; font-weight:700;font-style:normal\">Lato 700 normal</span><br/>",
            )
        );
    }

    #[test]
    fn variable_fonts_sample_every_weight() {
        let html = render_test_page(&registry(&["Inter-VariableFont_wght.woff2"]));
        assert_eq!(html.matches("<span").count(), 9);
        assert!(html.contains(">Inter 100 normal<"));
        assert!(html.contains(">Inter 900 normal<"));
    }

    #[test]
    fn family_names_are_escaped() {
        let html = render_test_page(&registry(&["Tom&Jerry.ttf"]));
        assert!(html.contains("<h3 style=\"font-family:'Tom&amp;Jerry';\">Tom&amp;Jerry</h3>"));
    }

    #[test]
    fn apostrophes_stay_inside_the_css_string() {
        let html = render_test_page(&registry(&["O'Brien-Bold.ttf"]));
        assert!(html.contains("<h3 style=\"font-family:'O\\&#39;Brien';\">O&#39;Brien</h3>"));
        assert!(html.contains(
            "<span style=\"font-family:'O\\&#39;Brien'; font-weight:700;font-style:normal\">O&#39;Brien 700 normal</span>"
        ));
    }

    #[test]
    fn empty_registry_has_only_heading() {
        assert_eq!(render_test_page(&FontRegistry::default()), "<h2>Custom Font Test</h2>");
    }
}
