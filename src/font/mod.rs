//! File name classification: family name, weight and style

pub mod parser;
pub mod weight;

pub use parser::NameParser;
pub use weight::{default_weight_rules, strip_italic, strip_variable_axes, WeightRule};
