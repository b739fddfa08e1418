// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Minimal stderr logger for the `modes` binary.
//!
//! Lines look like `[INFO mode_search::enumerate] enumerated 72 descriptors`.
//! The level comes from `MODE_SEARCH_LOG` (`error`, `warn`, `info`, `debug`,
//! `trace` or `off`), defaulting to `info`.

use crate::error::{ModeError, ModeResult};
use log::{LevelFilter, Log, Metadata, Record};
use std::str::FromStr;

/// Environment variable holding the log level.
pub const LOG_ENV: &str = "MODE_SEARCH_LOG";

struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{} {}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

/// Parse a level name; `None` or an empty string means `info`.
pub fn parse_level(value: Option<&str>) -> ModeResult<LevelFilter> {
    match value.map(str::trim) {
        None | Some("") => Ok(LevelFilter::Info),
        Some(name) => LevelFilter::from_str(name)
            .map_err(|_| ModeError::Config(format!("unknown log level {:?} in {}", name, LOG_ENV))),
    }
}

/// Install the stderr logger at `level`. Installing twice is an error.
pub fn init(level: LevelFilter) -> ModeResult<()> {
    log::set_logger(&LOGGER).map_err(|e| ModeError::Config(format!("logger: {e}")))?;
    log::set_max_level(level);
    Ok(())
}

/// Install the stderr logger at the level named by `MODE_SEARCH_LOG`.
pub fn init_from_env() -> ModeResult<()> {
    let value = std::env::var(LOG_ENV).ok();
    init(parse_level(value.as_deref())?)
}
