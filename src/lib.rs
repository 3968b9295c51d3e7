//! Scan a folder of font files, infer family, weight and style from their
//! file names, and emit `@font-face` CSS, a test page, or a family list.

pub mod cli;
pub mod error;
pub mod font;
pub mod models;
pub mod output;
pub mod registry;
pub mod utils;

pub use error::{Error, Result};
pub use font::{NameParser, WeightRule};
pub use models::{Config, FontExtension, FontFileRef, FontNameInfo, FontStyle, FontWeight, GroupKey};
pub use registry::{DirectorySource, FontCandidate, FontRegistry, FontRegistryBuilder, FontSource};
