//! Client mode: send the positional arguments as the override message.

use anyhow::{Context, Result};
use clap::ArgMatches;

use crate::core::control::ControlClient;
use crate::core::Config;
use crate::ui;

/// Words joined with single spaces. No words clears the override.
pub fn message_from(matches: &ArgMatches) -> String {
    matches
        .get_many::<String>("message")
        .map(|words| words.map(String::as_str).collect::<Vec<_>>().join(" "))
        .unwrap_or_default()
}

pub fn execute(matches: &ArgMatches, config: &Config) -> Result<()> {
    let message = message_from(matches);
    let client = ControlClient::new(&config.socket_path);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start the async runtime")?;

    runtime
        .block_on(client.send(&message))
        .with_context(|| {
            format!(
                "Could not update status via {}",
                config.socket_path.display()
            )
        })?;

    if matches.get_flag("verbose") {
        if message.is_empty() {
            ui::success("Status message cleared");
        } else {
            ui::success(&format!("Status message set: {}", message));
        }
    }
    Ok(())
}
