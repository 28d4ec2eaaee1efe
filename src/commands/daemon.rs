//! Daemon command handler.

use anyhow::{Context, Result};

use crate::core::daemon::{run_until, shutdown_signal};
use crate::core::Config;

/// Run the aggregator and control endpoint until signalled.
pub fn execute(config: &Config) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .thread_name("statline-worker")
        .build()
        .context("Failed to start the async runtime")?;

    log::info!(
        "Starting statline daemon (socket: {}, fifos: {})",
        config.socket_path.display(),
        config.fifo_dir.display()
    );

    runtime
        .block_on(run_until(config, shutdown_signal()))
        .context("statline daemon stopped")
}
