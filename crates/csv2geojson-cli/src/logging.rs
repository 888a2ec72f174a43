//! Logger initialization.

use log::LevelFilter;

/// Initializes `env_logger` on stderr.
///
/// `RUST_LOG` is read first; `level` then overrides its global level.
pub fn init_logger(level: LevelFilter) {
    let mut builder = env_logger::Builder::from_default_env();
    builder.filter_level(level);
    builder.format_timestamp(None);
    let _ = builder.try_init();
}
