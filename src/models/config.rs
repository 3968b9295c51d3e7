use url::Url;

use crate::error::{Error, Result};
use crate::models::FontExtension;

/// Configuration for scanning fonts and emitting definitions
#[derive(Debug, Clone)]
pub struct Config {
    /// Enable debug output
    pub debug_mode: bool,
    /// Log how long scanning and emitting take
    pub timing: bool,
    /// Descend into subdirectories of the font root
    pub recursive: bool,
    /// Infer weight and style from file names
    pub parse_names: bool,
    /// Extensions picked up by the registry
    pub extensions: Vec<FontExtension>,
    /// URL the font root is served from. `file://` URLs are used when unset.
    pub base_url: Option<Url>,
    /// Strip newlines and indentation from emitted CSS
    pub minify: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::new(false)
    }
}

impl Config {
    /// Create a new configuration with default settings
    pub fn new(debug_mode: bool) -> Self {
        Self {
            debug_mode,
            timing: false,
            recursive: true,
            parse_names: true,
            extensions: FontExtension::ALL.to_vec(),
            base_url: None,
            // readable output while debugging, compact otherwise
            minify: !debug_mode,
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        let url = Url::parse(base_url).map_err(|e| Error::BaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if url.cannot_be_a_base() {
            return Err(Error::BaseUrl {
                url: base_url.to_string(),
                reason: "URL cannot carry path segments".to_string(),
            });
        }
        self.base_url = Some(url);
        Ok(self)
    }

    /// Restrict the registry to the given comma separated extensions
    pub fn with_extension_list(mut self, list: &str) -> Result<Self> {
        let mut extensions = Vec::new();
        for item in list.split(',').filter(|item| !item.trim().is_empty()) {
            let ext = item.parse::<FontExtension>()?;
            if !extensions.contains(&ext) {
                extensions.push(ext);
            }
        }
        if extensions.is_empty() {
            return Err(Error::Config("extension list is empty".to_string()));
        }
        self.extensions = extensions;
        Ok(self)
    }

    pub fn accepts(&self, ext: FontExtension) -> bool {
        self.extensions.contains(&ext)
    }
}
