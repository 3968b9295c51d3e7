//! Data types shared by the parser, the registry and the emitters

pub mod config;
pub mod font;

pub use config::Config;
pub use font::{FontExtension, FontFileRef, FontNameInfo, FontStyle, FontWeight, GroupKey};
