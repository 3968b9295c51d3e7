//! Command-line interface handling

mod args;
mod run;

pub use args::{Cli, Commands};
pub use run::{run, write_output};
