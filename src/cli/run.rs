use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::time::Instant;

use log::{debug, info};

use crate::error::Result;
use crate::models::Config;
use crate::output::{render_css, render_definitions, render_families, render_test_page, style_tag};
use crate::registry::{DirectorySource, FontRegistryBuilder};
use super::args::{Cli, Commands};

/// Execute the parsed command line
pub fn run(cli: &Cli, config: Config) -> Result<()> {
    let root = cli.command.root();
    debug!("Scanning {} ({})", root.display(), if config.recursive { "recursive" } else { "flat" });

    let source = DirectorySource::from_config(root, &config);
    let builder = FontRegistryBuilder::new(config, source);
    let registry = builder.definitions();

    let started = Instant::now();
    let rendered = match &cli.command {
        Commands::Css { style_tag: id, .. } => {
            let css = render_css(&registry, builder.config().minify);
            match id {
                Some(id) => style_tag(&css, id),
                None => css,
            }
        }
        Commands::Html { .. } => render_test_page(&registry),
        Commands::Families { .. } => render_families(&registry),
        Commands::Definitions { .. } => render_definitions(&registry)?,
    };
    if builder.config().timing {
        info!("Rendering took {:.5} sec.", started.elapsed().as_secs_f64());
    }

    write_output(cli.output.as_deref(), &rendered)
}

/// Write to `path`, or to stdout when no path is given
pub fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, content)?;
            debug!("Wrote {} bytes to {}", content.len(), path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            if !content.is_empty() && !content.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
            stdout.flush()?;
        }
    }
    Ok(())
}
