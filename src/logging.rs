use std::env;

use log::{LevelFilter, Log, Metadata, Record};

use crate::config::LOG_ENV;

/// Writes `LEVEL target: message` lines to stderr; stdout belongs to the game.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} {}: {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Level named by `BATTLESHIP_LOG`, or `fallback` when unset or unparsable.
pub fn level_from_env(fallback: LevelFilter) -> LevelFilter {
    env::var(LOG_ENV)
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(fallback)
}

/// Install the stderr logger at the level from `BATTLESHIP_LOG` (default `info`).
/// Calling it again is harmless.
pub fn init_logging() {
    let level = level_from_env(LevelFilter::Info);
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
