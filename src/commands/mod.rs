// Command handlers module
pub mod config;
pub mod daemon;
pub mod notify;

use anyhow::{Context, Result};
use clap::ArgMatches;
use std::path::PathBuf;

use crate::core::Config;

/// Load the config file (default location or `--config`) and apply the
/// path flags on top.
pub fn load_config(matches: &ArgMatches) -> Result<Config> {
    let config = match matches.get_one::<PathBuf>("config") {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::load().context("Failed to load config")?,
    };

    Ok(config.with_overrides(
        matches.get_one::<PathBuf>("socket").cloned(),
        matches.get_one::<PathBuf>("fifo-dir").cloned(),
    ))
}
