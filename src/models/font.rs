use std::cmp::Ordering;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use url::Url;

use crate::error::Error;

/// Font container formats recognized by the scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontExtension {
    Eot,
    Otf,
    Svg,
    Ttf,
    Woff,
    Woff2,
}

impl FontExtension {
    pub const ALL: [FontExtension; 6] = [
        FontExtension::Eot,
        FontExtension::Otf,
        FontExtension::Svg,
        FontExtension::Ttf,
        FontExtension::Woff,
        FontExtension::Woff2,
    ];

    /// Match a file extension case-insensitively
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "eot" => Some(FontExtension::Eot),
            "otf" => Some(FontExtension::Otf),
            "svg" => Some(FontExtension::Svg),
            "ttf" => Some(FontExtension::Ttf),
            "woff" => Some(FontExtension::Woff),
            "woff2" => Some(FontExtension::Woff2),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FontExtension::Eot => "eot",
            FontExtension::Otf => "otf",
            FontExtension::Svg => "svg",
            FontExtension::Ttf => "ttf",
            FontExtension::Woff => "woff",
            FontExtension::Woff2 => "woff2",
        }
    }

    /// Value for the CSS `format()` hint
    pub fn css_format(&self) -> &'static str {
        match self {
            FontExtension::Eot => "embedded-opentype",
            FontExtension::Otf => "opentype",
            FontExtension::Ttf => "truetype",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for FontExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FontExtension {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_start_matches('.');
        FontExtension::from_extension(trimmed)
            .ok_or_else(|| Error::Config(format!("unknown font extension '{}'", s)))
    }
}

/// CSS font weight class, or the whole range for variable fonts
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FontWeight {
    Numeric(u16),
    Variable,
}

impl FontWeight {
    pub const REGULAR: FontWeight = FontWeight::Numeric(400);

    /// The nine discrete weight classes
    pub const CLASSES: [u16; 9] = [100, 200, 300, 400, 500, 600, 700, 800, 900];

    /// Value for the CSS `font-weight` descriptor
    pub fn css_value(&self) -> String {
        match self {
            FontWeight::Numeric(weight) => weight.to_string(),
            FontWeight::Variable => "100 900".to_string(),
        }
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontWeight::Numeric(weight) => write!(f, "{}", weight),
            FontWeight::Variable => write!(f, "var"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

impl FontStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            FontStyle::Normal => "normal",
            FontStyle::Italic => "italic",
        }
    }
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Family name, weight and style inferred from a file name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontNameInfo {
    /// Cleaned family name
    pub name: String,
    pub weight: FontWeight,
    pub style: FontStyle,
}

impl FontNameInfo {
    /// Result used when nothing in the file name is recognized
    pub fn fallback(name: &str) -> Self {
        Self {
            name: name.to_string(),
            weight: FontWeight::REGULAR,
            style: FontStyle::Normal,
        }
    }

    pub fn group_key(&self) -> GroupKey {
        GroupKey {
            weight: self.weight,
            style: self.style,
        }
    }
}

/// Weight/style pair identifying one `@font-face` block within a family.
///
/// Keys order like their `weight/style` text: numeric weights ascending,
/// `var` last, and `italic` before `normal` for the same weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupKey {
    pub weight: FontWeight,
    pub style: FontStyle,
}

impl Ord for GroupKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then_with(|| self.style.as_str().cmp(other.style.as_str()))
    }
}

impl PartialOrd for GroupKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.weight, self.style)
    }
}

impl Serialize for GroupKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A located font file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontFileRef {
    pub extension: FontExtension,
    /// Location on disk
    pub path: PathBuf,
    /// Location as referenced from CSS and HTML
    pub url: Url,
}

impl Serialize for FontFileRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.url.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extensions_match_case_insensitively() {
        assert_eq!(FontExtension::from_extension("WOFF2"), Some(FontExtension::Woff2));
        assert_eq!(FontExtension::from_extension("Ttf"), Some(FontExtension::Ttf));
        assert_eq!(FontExtension::from_extension("pdf"), None);
        assert_eq!(".otf".parse::<FontExtension>().unwrap(), FontExtension::Otf);
        assert!("doc".parse::<FontExtension>().is_err());
    }

    #[test]
    fn css_format_names() {
        assert_eq!(FontExtension::Eot.css_format(), "embedded-opentype");
        assert_eq!(FontExtension::Otf.css_format(), "opentype");
        assert_eq!(FontExtension::Ttf.css_format(), "truetype");
        assert_eq!(FontExtension::Svg.css_format(), "svg");
        assert_eq!(FontExtension::Woff.css_format(), "woff");
        assert_eq!(FontExtension::Woff2.css_format(), "woff2");
    }

    #[test]
    fn group_keys_order_like_their_text() {
        let key = |weight, style| GroupKey { weight, style };
        let mut keys = vec![
            key(FontWeight::Variable, FontStyle::Normal),
            key(FontWeight::Numeric(700), FontStyle::Normal),
            key(FontWeight::Numeric(700), FontStyle::Italic),
            key(FontWeight::Numeric(100), FontStyle::Normal),
        ];
        keys.sort();
        let rendered: Vec<String> = keys.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, ["100/normal", "700/italic", "700/normal", "var/normal"]);
    }

    #[test]
    fn variable_weight_spans_full_range() {
        assert_eq!(FontWeight::Variable.css_value(), "100 900");
        assert_eq!(FontWeight::Numeric(300).css_value(), "300");
    }
}
