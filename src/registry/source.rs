use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use url::Url;

use crate::error::Result;
use crate::models::Config;
use crate::utils::{file_url, sorted_entries};

/// A file offered to the registry, not yet known to be a font
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontCandidate {
    /// File name including its extension
    pub file_name: String,
    /// Extension as found on disk, without the dot
    pub extension: String,
    pub parent: PathBuf,
    pub path: PathBuf,
    pub url: Url,
}

impl FontCandidate {
    pub fn new(path: impl Into<PathBuf>, url: Url) -> Self {
        let path = path.into();
        let name_of = |p: Option<&std::ffi::OsStr>| {
            p.map(|s| s.to_string_lossy().into_owned()).unwrap_or_default()
        };
        Self {
            file_name: name_of(path.file_name()),
            extension: name_of(path.extension()),
            parent: path.parent().map(Path::to_path_buf).unwrap_or_default(),
            path,
            url,
        }
    }

    /// File name with the extension removed
    pub fn stem(&self) -> &str {
        if self.extension.is_empty() {
            return &self.file_name;
        }
        self.file_name
            .strip_suffix(&self.extension)
            .and_then(|rest| rest.strip_suffix('.'))
            .unwrap_or(&self.file_name)
    }
}

/// Provides the files a registry is built from
pub trait FontSource: Send + Sync {
    /// List candidates in enumeration order
    fn candidates(&self) -> Vec<FontCandidate>;
}

impl FontSource for Vec<FontCandidate> {
    fn candidates(&self) -> Vec<FontCandidate> {
        self.clone()
    }
}

/// Lists files below a root directory
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
    recursive: bool,
    base_url: Option<Url>,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>, recursive: bool, base_url: Option<Url>) -> Self {
        Self {
            root: root.into(),
            recursive,
            base_url,
        }
    }

    pub fn from_config(root: impl Into<PathBuf>, config: &Config) -> Self {
        Self::new(root, config.recursive, config.base_url.clone())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn scan(&self, root: &Path, dir: &Path, found: &mut Vec<FontCandidate>) -> Result<()> {
        for (path, file_type) in sorted_entries(dir)? {
            if file_type.is_dir() {
                if self.recursive {
                    if let Err(e) = self.scan(root, &path, found) {
                        warn!("Skipping unreadable directory {}: {}", path.display(), e);
                    }
                }
                continue;
            }
            // linked directories may point back up the tree
            if file_type.is_symlink() && path.is_dir() {
                debug!("Not following linked directory {}", path.display());
                continue;
            }

            match file_url(root, &path, self.base_url.as_ref()) {
                Ok(url) => found.push(FontCandidate::new(path, url)),
                Err(e) => warn!("Skipping {}: {}", path.display(), e),
            }
        }
        Ok(())
    }
}

impl FontSource for DirectorySource {
    fn candidates(&self) -> Vec<FontCandidate> {
        if !self.root.is_dir() {
            info!("Font directory {} does not exist, no fonts found", self.root.display());
            return Vec::new();
        }

        // file:// URLs need an absolute root
        let root = match self.root.canonicalize() {
            Ok(root) => root,
            Err(e) => {
                warn!("Cannot resolve font directory {}: {}", self.root.display(), e);
                return Vec::new();
            }
        };

        let mut found = Vec::new();
        if let Err(e) = self.scan(&root, &root, &mut found) {
            warn!("Cannot read font directory {}: {}", root.display(), e);
            return Vec::new();
        }
        debug!("Found {} files below {}", found.len(), root.display());
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url() -> Url {
        Url::parse("https://example.com/fonts/x").unwrap()
    }

    #[test]
    fn candidate_splits_its_path() {
        let candidate = FontCandidate::new("/fonts/Roboto/Roboto-Bold.WOFF2", url());
        assert_eq!(candidate.file_name, "Roboto-Bold.WOFF2");
        assert_eq!(candidate.extension, "WOFF2");
        assert_eq!(candidate.parent, PathBuf::from("/fonts/Roboto"));
        assert_eq!(candidate.stem(), "Roboto-Bold");
    }

    #[test]
    fn stem_keeps_inner_dots() {
        let candidate = FontCandidate::new("/fonts/Font.v2.ttf", url());
        assert_eq!(candidate.stem(), "Font.v2");
        let candidate = FontCandidate::new("/fonts/README", url());
        assert_eq!(candidate.stem(), "README");
    }

    #[test]
    fn missing_root_yields_nothing() {
        let source = DirectorySource::new("/definitely/not/here/fonts", true, None);
        assert!(source.candidates().is_empty());
    }
}
