use lazy_static::lazy_static;
use regex::Regex;

use crate::models::{FontStyle, FontWeight};

/// Pattern detecting an italic token, optionally preceded by a hyphen
const ITALIC_PATTERN: &str = r"(?i)-?italic";

/// Axis suffix left behind on variable font names, e.g. `Inter_opsz,wght`
const VARIABLE_AXES_PATTERN: &str = r"(?i)_(opsz,wght|opsz|wght)$";

lazy_static! {
    static ref ITALIC: Regex = Regex::new(ITALIC_PATTERN).unwrap();
    static ref VARIABLE_AXES: Regex = Regex::new(VARIABLE_AXES_PATTERN).unwrap();

    // must match from more to less specific
    static ref DEFAULT_WEIGHT_RULES: Vec<WeightRule> = vec![
        WeightRule::new(FontWeight::Numeric(200), "extra-light", r"(?i)-?(200|(extra|ultra)-?light)"),
        WeightRule::new(FontWeight::Numeric(800), "extra-bold", r"(?i)-?(800|(extra|ultra)-?bold)"),
        WeightRule::new(FontWeight::Numeric(600), "semi-bold", r"(?i)-?(600|[ds]emi-?bold)"),
        WeightRule::new(FontWeight::Numeric(100), "thin", r"(?i)-?(100|thin)"),
        WeightRule::new(FontWeight::Numeric(300), "light", r"(?i)-?(300|light)"),
        WeightRule::new(FontWeight::Numeric(400), "regular", r"(?i)-?(400|normal|regular)"),
        WeightRule::new(FontWeight::Numeric(500), "medium", r"(?i)-?(500|medium)"),
        WeightRule::new(FontWeight::Numeric(700), "bold", r"(?i)-?(700|bold)"),
        WeightRule::new(FontWeight::Numeric(900), "black", r"(?i)-?(900|black|heavy)"),
        // a bare axis suffix marks a variable font even without "VariableFont"
        WeightRule::new(FontWeight::Variable, "variable", r"(?i)-?VariableFont|_(opsz,wght|opsz|wght)$"),
    ];
}

/// One entry of the ordered weight table
#[derive(Debug, Clone)]
pub struct WeightRule {
    pub weight: FontWeight,
    /// Human readable name, used in logs
    pub label: &'static str,
    pub pattern: Regex,
}

impl WeightRule {
    /// Build a rule from a pattern known to be valid
    ///
    /// # Panics
    /// Panics if `pattern` is not a valid regular expression.
    pub fn new(weight: FontWeight, label: &'static str, pattern: &str) -> Self {
        Self {
            weight,
            label,
            pattern: Regex::new(pattern).unwrap(),
        }
    }

    pub fn try_new(weight: FontWeight, label: &'static str, pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            weight,
            label,
            pattern: Regex::new(pattern)?,
        })
    }

    /// Remove the first match of this rule from `name`
    ///
    /// Returns `None` when nothing matched or nothing would be left of the name.
    pub fn strip(&self, name: &str) -> Option<String> {
        strip_first(&self.pattern, name)
    }
}

/// The built-in weight table, most specific rule first
pub fn default_weight_rules() -> Vec<WeightRule> {
    DEFAULT_WEIGHT_RULES.clone()
}

/// Detect and remove an italic token
pub fn strip_italic(name: &str) -> (String, FontStyle) {
    match strip_first(&ITALIC, name) {
        Some(stripped) => (stripped, FontStyle::Italic),
        None => (name.to_string(), FontStyle::Normal),
    }
}

/// Remove a trailing variable axis suffix, if any
pub fn strip_variable_axes(name: &str) -> String {
    VARIABLE_AXES.replace(name, "").into_owned()
}

fn strip_first(pattern: &Regex, name: &str) -> Option<String> {
    let found = pattern.find(name)?;
    if found.as_str().is_empty() {
        return None;
    }
    let mut stripped = String::with_capacity(name.len() - found.len());
    stripped.push_str(&name[..found.start()]);
    stripped.push_str(&name[found.end()..]);
    if stripped.is_empty() {
        return None;
    }
    Some(stripped)
}
