//! Logger setup for the binary

use log::LevelFilter;

/// Map a `-v` count to a level filter
#[must_use]
pub const fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install `env_logger` at the level given by `verbosity`
///
/// `RUST_LOG`, when set, overrides the level.
///
/// # Errors
/// Fails if a logger has already been installed.
pub fn init(verbosity: u8) -> Result<(), log::SetLoggerError> {
    env_logger::Builder::new()
        .filter_level(level_for(verbosity))
        .parse_default_env()
        .format_timestamp(None)
        .try_init()
}
