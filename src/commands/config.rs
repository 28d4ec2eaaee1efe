use anyhow::{Context, Result};

use crate::core::Config;

/// Print the effective configuration as JSON
pub fn execute(config: &Config) -> Result<()> {
    let json = serde_json::to_string_pretty(config).context("Failed to serialize config")?;
    println!("{}", json);
    Ok(())
}
