use anyhow::Result;
use clap::Parser;

use fontface::cli::{run, Cli};
use fontface::utils::init_logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config()?;
    init_logging(&config);

    if config.debug_mode {
        log::debug!("Debug mode enabled");
    }

    run(&cli, config)?;
    Ok(())
}
