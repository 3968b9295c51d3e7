use log::LevelFilter;

use crate::models::Config;

/// Initialize the global logger
///
/// Debug mode raises the default level to `debug`, timing to `info`.
/// `RUST_LOG` still wins.
pub fn init_logging(config: &Config) {
    let default_level = if config.debug_mode {
        LevelFilter::Debug
    } else if config.timing {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    };

    let _ = env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .try_init();
}
