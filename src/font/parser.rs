use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use log::{debug, trace};

use crate::models::{FontNameInfo, FontWeight};
use super::weight::{default_weight_rules, strip_italic, strip_variable_axes, WeightRule};

/// Infers family name, weight and style from font file names.
///
/// Results are memoized by the exact input string. Repeated lookups hand out
/// the same `Arc`, so callers can rely on pointer equality as well as value
/// equality.
#[derive(Debug)]
pub struct NameParser {
    rules: Vec<WeightRule>,
    enabled: bool,
    cache: Mutex<HashMap<String, Arc<FontNameInfo>>>,
}

impl Default for NameParser {
    fn default() -> Self {
        Self::with_rules(default_weight_rules())
    }
}

impl NameParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parser evaluating `rules` in order, first match wins
    pub fn with_rules(rules: Vec<WeightRule>) -> Self {
        Self {
            rules,
            enabled: true,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Parser that keeps every file name as the family name, 400 normal
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn rules(&self) -> &[WeightRule] {
        &self.rules
    }

    /// Parse a file name with its extension already removed
    pub fn parse(&self, filename: &str) -> Arc<FontNameInfo> {
        if let Some(cached) = self.cache().get(filename) {
            return Arc::clone(cached);
        }

        // computed outside the lock; a concurrent duplicate yields the same value
        let parsed = Arc::new(self.classify(filename));
        Arc::clone(
            self.cache()
                .entry(filename.to_string())
                .or_insert(parsed),
        )
    }

    /// Number of memoized file names
    pub fn cached_len(&self) -> usize {
        self.cache().len()
    }

    pub fn clear_cache(&self) {
        self.cache().clear();
    }

    fn cache(&self) -> std::sync::MutexGuard<'_, HashMap<String, Arc<FontNameInfo>>> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn classify(&self, filename: &str) -> FontNameInfo {
        let mut info = FontNameInfo::fallback(filename);
        if !self.enabled {
            return info;
        }

        trace!("Parsing font name \"{}\"", filename);

        let (name, style) = strip_italic(&info.name);
        if style != info.style {
            debug!("Detected {} in \"{}\", new name: \"{}\"", style, filename, name);
        }
        info.name = name;
        info.style = style;

        for rule in &self.rules {
            if let Some(name) = rule.strip(&info.name) {
                debug!(
                    "Detected weight {} ({}) in \"{}\", new name: \"{}\"",
                    rule.weight, rule.label, filename, name
                );
                info.name = name;
                info.weight = rule.weight;
                break;
            }
        }

        if info.weight == FontWeight::Variable {
            info.name = strip_variable_axes(&info.name);
        }

        trace!(
            "Parsed \"{}\" -> name: \"{}\", weight: {}, style: {}",
            filename, info.name, info.weight, info.style
        );
        info
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FontStyle;

    fn parse(filename: &str) -> Arc<FontNameInfo> {
        NameParser::new().parse(filename)
    }

    #[test]
    fn unmatched_name_falls_back_to_regular() {
        let info = parse("Arial");
        assert_eq!(info.name, "Arial");
        assert_eq!(info.weight, FontWeight::Numeric(400));
        assert_eq!(info.style, FontStyle::Normal);
    }

    #[test]
    fn specific_weights_win_over_generic_ones() {
        let info = parse("Foo-ExtraLight");
        assert_eq!(info.name, "Foo");
        assert_eq!(info.weight, FontWeight::Numeric(200));

        assert_eq!(parse("Foo-UltraBold").weight, FontWeight::Numeric(800));
        assert_eq!(parse("Foo-SemiBold").weight, FontWeight::Numeric(600));
        assert_eq!(parse("Foo-Light").weight, FontWeight::Numeric(300));
    }

    #[test]
    fn italic_is_stripped_before_weight() {
        let info = parse("Foo-BoldItalic");
        assert_eq!(info.name, "Foo");
        assert_eq!(info.weight, FontWeight::Numeric(700));
        assert_eq!(info.style, FontStyle::Italic);

        let info = parse("Foo-ItalicBold");
        assert_eq!(info.name, "Foo");
        assert_eq!(info.weight, FontWeight::Numeric(700));
        assert_eq!(info.style, FontStyle::Italic);
    }

    #[test]
    fn italic_alone_keeps_regular_weight() {
        let info = parse("Foo-Italic");
        assert_eq!(info.name, "Foo");
        assert_eq!(info.weight, FontWeight::Numeric(400));
        assert_eq!(info.style, FontStyle::Italic);
    }

    #[test]
    fn numeric_weights() {
        let info = parse("Lato-900");
        assert_eq!(info.name, "Lato");
        assert_eq!(info.weight, FontWeight::Numeric(900));
    }

    #[test]
    fn variable_fonts_lose_their_axis_suffix() {
        let info = parse("Inter_opsz,wght");
        assert_eq!(info.name, "Inter");
        assert_eq!(info.weight, FontWeight::Variable);

        let info = parse("Inter-VariableFont_opsz,wght");
        assert_eq!(info.name, "Inter");
        assert_eq!(info.weight, FontWeight::Variable);

        let info = parse("Roboto-Italic-VariableFont_wght");
        assert_eq!(info.name, "Roboto");
        assert_eq!(info.weight, FontWeight::Variable);
        assert_eq!(info.style, FontStyle::Italic);
    }

    #[test]
    fn weight_only_name_is_kept() {
        let info = parse("Bold");
        assert_eq!(info.name, "Bold");
        assert_eq!(info.weight, FontWeight::Numeric(400));
    }

    #[test]
    fn repeated_lookups_share_one_result() {
        let parser = NameParser::new();
        let first = parser.parse("Roboto-Bold");
        let second = parser.parse("Roboto-Bold");
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(parser.cached_len(), 1);

        parser.clear_cache();
        assert_eq!(parser.cached_len(), 0);
        assert_eq!(*parser.parse("Roboto-Bold"), *first);
    }

    #[test]
    fn cache_is_keyed_by_exact_input() {
        let parser = NameParser::new();
        parser.parse("Roboto-Bold");
        parser.parse("roboto-bold");
        assert_eq!(parser.cached_len(), 2);
    }

    #[test]
    fn disabled_parser_keeps_file_name() {
        let parser = NameParser::disabled();
        let info = parser.parse("Roboto-BoldItalic");
        assert_eq!(*info, FontNameInfo::fallback("Roboto-BoldItalic"));
        assert!(!parser.is_enabled());
    }

    #[test]
    fn injected_rules_replace_the_table() {
        let rules = vec![WeightRule::new(FontWeight::Numeric(350), "book", r"(?i)-?book")];
        let parser = NameParser::with_rules(rules);
        assert_eq!(parser.rules().len(), 1);

        let info = parser.parse("Foo-Book");
        assert_eq!(info.name, "Foo");
        assert_eq!(info.weight, FontWeight::Numeric(350));
        assert_eq!(parser.parse("Foo-Bold").weight, FontWeight::Numeric(400));
    }
}
