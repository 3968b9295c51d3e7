use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Instant;

use log::{debug, info, warn};
use rayon::prelude::*;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::font::NameParser;
use crate::models::{Config, FontExtension, FontFileRef, FontNameInfo, GroupKey};
use crate::utils::natural_cmp;
use super::source::{FontCandidate, FontSource};

/// Files of one weight/style group, one per container format
pub type FontFiles = BTreeMap<FontExtension, FontFileRef>;

/// All groups of one family
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontFamily {
    pub name: String,
    pub groups: BTreeMap<GroupKey, FontFiles>,
}

/// Font families keyed by name, in natural case-insensitive order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FontRegistry {
    families: Vec<FontFamily>,
}

impl FontRegistry {
    /// Group candidates into families
    ///
    /// Candidates with unsupported extensions are ignored. When two files
    /// land on the same family, weight, style and extension, the one listed
    /// later replaces the earlier one.
    pub fn from_candidates(candidates: &[FontCandidate], parser: &NameParser, config: &Config) -> Self {
        let fonts: Vec<(&FontCandidate, FontExtension)> = candidates
            .iter()
            .filter_map(|candidate| {
                FontExtension::from_extension(&candidate.extension)
                    .filter(|ext| config.accepts(*ext))
                    .map(|ext| (candidate, ext))
            })
            .collect();

        // parse in parallel, insert in enumeration order
        let parsed: Vec<Arc<FontNameInfo>> = fonts
            .par_iter()
            .map(|(candidate, _)| parser.parse(candidate.stem()))
            .collect();

        let mut by_name: HashMap<String, BTreeMap<GroupKey, FontFiles>> = HashMap::new();
        for ((candidate, extension), info) in fonts.into_iter().zip(parsed) {
            let files = by_name
                .entry(info.name.clone())
                .or_default()
                .entry(info.group_key())
                .or_default();

            let file = FontFileRef {
                extension,
                path: candidate.path.clone(),
                url: candidate.url.clone(),
            };
            if let Some(previous) = files.insert(extension, file) {
                debug!(
                    "{} replaces {} for {} {}",
                    candidate.path.display(),
                    previous.path.display(),
                    info.name,
                    info.group_key()
                );
            }
        }

        let mut families: Vec<FontFamily> = by_name
            .into_iter()
            .map(|(name, groups)| FontFamily { name, groups })
            .collect();
        families.sort_by(|a, b| natural_cmp(&a.name, &b.name));

        Self { families }
    }

    pub fn families(&self) -> &[FontFamily] {
        &self.families
    }

    pub fn family_names(&self) -> Vec<String> {
        self.families.iter().map(|family| family.name.clone()).collect()
    }

    pub fn family(&self, name: &str) -> Option<&FontFamily> {
        self.families.iter().find(|family| family.name == name)
    }

    pub fn len(&self) -> usize {
        self.families.len()
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }

    /// Total number of font files across all families
    pub fn file_count(&self) -> usize {
        self.families
            .iter()
            .flat_map(|family| family.groups.values())
            .map(BTreeMap::len)
            .sum()
    }
}

impl Serialize for FontRegistry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.families.len()))?;
        for family in &self.families {
            map.serialize_entry(&family.name, &family.groups)?;
        }
        map.end()
    }
}

/// Lazily builds and caches the registry for one font source
pub struct FontRegistryBuilder {
    config: Config,
    parser: NameParser,
    source: Box<dyn FontSource>,
    registry: Mutex<Option<Arc<FontRegistry>>>,
}

impl FontRegistryBuilder {
    pub fn new(config: Config, source: impl FontSource + 'static) -> Self {
        let parser = if config.parse_names {
            NameParser::new()
        } else {
            NameParser::disabled()
        };
        Self::with_parser(config, parser, source)
    }

    pub fn with_parser(config: Config, parser: NameParser, source: impl FontSource + 'static) -> Self {
        Self {
            config,
            parser,
            source: Box::new(source),
            registry: Mutex::new(None),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn parser(&self) -> &NameParser {
        &self.parser
    }

    /// Build the registry on first call, return the cached one afterwards
    pub fn build(&self) -> Arc<FontRegistry> {
        if let Some(registry) = self.cached() {
            return registry;
        }

        let mut slot = self.registry.lock().unwrap_or_else(PoisonError::into_inner);
        // another thread may have built it while we waited
        if let Some(registry) = slot.as_ref() {
            return Arc::clone(registry);
        }

        let started = Instant::now();
        let candidates = self.source.candidates();
        let registry = Arc::new(FontRegistry::from_candidates(&candidates, &self.parser, &self.config));

        if registry.is_empty() && !candidates.is_empty() {
            warn!("None of {} scanned files is a supported font", candidates.len());
        }
        debug!(
            "Registry holds {} families from {} font files",
            registry.len(),
            registry.file_count()
        );
        if self.config.timing {
            info!("Scanning fonts took {:.5} sec.", started.elapsed().as_secs_f64());
        }

        *slot = Some(Arc::clone(&registry));
        registry
    }

    /// Family names in natural order
    pub fn list_families(&self) -> Vec<String> {
        self.build().family_names()
    }

    /// Snapshot of all font definitions
    pub fn definitions(&self) -> Arc<FontRegistry> {
        self.build()
    }

    pub fn is_built(&self) -> bool {
        self.cached().is_some()
    }

    /// Drop the cached registry and parse results; the next access rescans
    pub fn reset(&self) {
        *self.registry.lock().unwrap_or_else(PoisonError::into_inner) = None;
        self.parser.clear_cache();
    }

    fn cached(&self) -> Option<Arc<FontRegistry>> {
        self.registry
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(Arc::clone)
    }
}
