//! Font discovery and aggregation into families

pub mod builder;
pub mod source;

pub use builder::{FontFamily, FontFiles, FontRegistry, FontRegistryBuilder};
pub use source::{DirectorySource, FontCandidate, FontSource};
