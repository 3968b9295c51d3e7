use std::fs::{self, FileType};
use std::path::{Component, Path, PathBuf};

use log::warn;
use url::Url;

use crate::error::{Error, Result};

/// List the entries of a directory with their unfollowed file types, sorted by path
///
/// Entries that cannot be read are logged and left out.
pub fn sorted_entries(dir: &Path) -> Result<Vec<(PathBuf, FileType)>> {
    let mut entries: Vec<(PathBuf, FileType)> = fs::read_dir(dir)?
        .filter_map(|entry| {
            let entry = entry
                .map_err(|e| warn!("Skipping unreadable entry in {}: {}", dir.display(), e))
                .ok()?;
            match entry.file_type() {
                Ok(file_type) => Some((entry.path(), file_type)),
                Err(e) => {
                    warn!("Skipping {}: {}", entry.path().display(), e);
                    None
                }
            }
        })
        .collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(entries)
}

/// Build the URL a font file is served from
///
/// With a base URL each path element below `root` becomes one
/// percent-encoded URL segment. Without one, a `file://` URL is produced,
/// which requires `path` to be absolute.
pub fn file_url(root: &Path, path: &Path, base_url: Option<&Url>) -> Result<Url> {
    let Some(base) = base_url else {
        return Url::from_file_path(path).map_err(|_| Error::InvalidPath(path.to_path_buf()));
    };

    let relative = path
        .strip_prefix(root)
        .map_err(|_| Error::InvalidPath(path.to_path_buf()))?;

    let mut url = base.clone();
    {
        let mut segments = url.path_segments_mut().map_err(|_| Error::BaseUrl {
            url: base.to_string(),
            reason: "URL cannot carry path segments".to_string(),
        })?;
        segments.pop_if_empty();
        for component in relative.components() {
            match component {
                Component::Normal(part) => {
                    segments.push(&part.to_string_lossy());
                }
                _ => return Err(Error::InvalidPath(path.to_path_buf())),
            }
        }
    }
    Ok(url)
}
