//! Logger setup for the `memo` binary.

use log::LevelFilter;

/// Maps the `-v` count to a log level.
pub fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Installs `env_logger` on stderr. `RUST_LOG` overrides the `-v` level.
pub fn init_logging(verbose: u8) {
    let result = env_logger::Builder::new()
        .filter_level(level_for(verbose))
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .try_init();
    if result.is_err() {
        log::debug!("logger already installed");
    }
}
