use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::error::Result;
use crate::models::Config;

#[derive(Debug, Parser)]
#[command(name = "fontface")]
#[command(about = "Generate @font-face CSS and test pages from a folder of font files")]
#[command(after_help = "Family names, weights and styles are taken from the font file names, \
e.g. Roboto-BoldItalic.woff2 becomes family \"Roboto\", weight 700, style italic.")]
pub struct Cli {
    /// Enable debug output (also disables CSS minification)
    #[arg(long, global = true)]
    pub debug: bool,

    /// Log how long scanning and rendering take
    #[arg(long, global = true)]
    pub timing: bool,

    /// Only scan the top level of the font directory
    #[arg(long, global = true)]
    pub flat: bool,

    /// Use file names as family names without detecting weight and style
    #[arg(long, global = true)]
    pub no_parse: bool,

    /// URL the font directory is served from (default: file:// URLs)
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    /// Comma separated font extensions to include
    #[arg(long = "ext", global = true, value_name = "LIST")]
    pub extensions: Option<String>,

    /// Write to a file instead of stdout
    #[arg(short, long, global = true, value_name = "FILE")]
    pub output: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Emit @font-face declarations
    Css {
        /// Directory containing font files
        #[arg(default_value = "fonts")]
        root: PathBuf,
        /// Keep line breaks and indentation
        #[arg(long)]
        pretty: bool,
        /// Wrap the CSS in a <style> element with this id
        #[arg(long, value_name = "ID")]
        style_tag: Option<String>,
    },
    /// Emit an HTML page with a sample for every font
    Html {
        #[arg(default_value = "fonts")]
        root: PathBuf,
    },
    /// List family names
    Families {
        #[arg(default_value = "fonts")]
        root: PathBuf,
    },
    /// Dump all font definitions as JSON
    Definitions {
        #[arg(default_value = "fonts")]
        root: PathBuf,
    },
}

impl Commands {
    pub fn root(&self) -> &PathBuf {
        match self {
            Commands::Css { root, .. }
            | Commands::Html { root }
            | Commands::Families { root }
            | Commands::Definitions { root } => root,
        }
    }
}

impl Cli {
    /// Create a configuration from the parsed arguments
    pub fn config(&self) -> Result<Config> {
        let mut config = Config::new(self.debug);
        config.timing = self.timing;
        config.recursive = !self.flat;
        config.parse_names = !self.no_parse;

        if let Some(base_url) = &self.base_url {
            config = config.with_base_url(base_url)?;
        }
        if let Some(list) = &self.extensions {
            config = config.with_extension_list(list)?;
        }
        if let Commands::Css { pretty: true, .. } = self.command {
            config.minify = false;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FontExtension;

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["fontface", "css"]);
        let config = cli.config().unwrap();
        assert_eq!(cli.command.root(), &PathBuf::from("fonts"));
        assert!(config.recursive);
        assert!(config.parse_names);
        assert!(config.minify);
        assert!(config.base_url.is_none());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "fontface",
            "families",
            "/srv/fonts",
            "--flat",
            "--no-parse",
            "--ext",
            "woff,woff2",
            "--base-url",
            "https://example.com/fonts/",
        ]);
        let config = cli.config().unwrap();
        assert_eq!(cli.command.root(), &PathBuf::from("/srv/fonts"));
        assert!(!config.recursive);
        assert!(!config.parse_names);
        assert_eq!(config.extensions, vec![FontExtension::Woff, FontExtension::Woff2]);
        assert_eq!(config.base_url.unwrap().as_str(), "https://example.com/fonts/");
    }

    #[test]
    fn pretty_and_debug_keep_line_breaks() {
        let cli = Cli::parse_from(["fontface", "css", "--pretty"]);
        assert!(!cli.config().unwrap().minify);
        let cli = Cli::parse_from(["fontface", "--debug", "html"]);
        assert!(!cli.config().unwrap().minify);
    }

    #[test]
    fn invalid_extension_is_an_error() {
        let cli = Cli::parse_from(["fontface", "css", "--ext", "zip"]);
        assert!(cli.config().is_err());
    }
}
