// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! `modes`: print the configured range and selection of mode patterns.
//!
//! Configuration is read from the JSON file named by `MODE_SEARCH_CONFIG`
//! when set; otherwise the defaults are used. Log level from
//! `MODE_SEARCH_LOG`.

use mode_search::{logging, Enumerator, ModeResult, SearchConfig};
use std::process::ExitCode;

const CONFIG_ENV: &str = "MODE_SEARCH_CONFIG";

fn load_config() -> ModeResult<SearchConfig> {
    match std::env::var(CONFIG_ENV) {
        Ok(path) => {
            log::info!("loading configuration from {}", path);
            SearchConfig::from_file(path)
        }
        Err(_) => {
            let config = SearchConfig::default();
            config.validate()?;
            Ok(config)
        }
    }
}

fn run() -> ModeResult<()> {
    let config = load_config()?;
    let enumerator = Enumerator::from(&config);

    for descriptor in enumerator.range(config.start, config.end)? {
        println!("{}", descriptor.label());
    }
    if !config.selected.is_empty() {
        println!();
        for descriptor in enumerator.select(&config.selected)? {
            println!("{}", descriptor.label());
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    if let Err(e) = logging::init_from_env() {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
