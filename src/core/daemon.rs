//! Daemon wiring: control endpoint plus scheduler, sharing one override store.

use std::future::Future;

use crate::core::config::Config;
use crate::core::control;
use crate::core::status::{build_sources, OverrideStore, Publisher, Scheduler};
use crate::error::Result;
use crate::platform::{display_for, FifoDirectory};

/// Run until `shutdown` resolves or a fatal error occurs.
///
/// The control socket is removed on every return path.
pub async fn run_until<F>(config: &Config, shutdown: F) -> Result<()>
where
    F: Future<Output = ()>,
{
    let store = OverrideStore::new();

    let fifos = FifoDirectory::new(&config.fifo_dir);
    fifos.ensure_exists()?;

    let (listener, _guard) = control::bind(&config.socket_path)?;

    let publisher = Publisher::new(display_for(&config.display_command), Box::new(fifos));
    let scheduler = Scheduler::new(store.clone(), build_sources(config), publisher);

    log::info!(
        "Publishing to subscribers in {}",
        config.fifo_dir.display()
    );

    let mut scheduler_task = tokio::spawn(scheduler.run());
    let mut server_task = tokio::spawn(control::serve(listener, store));

    let result = tokio::select! {
        joined = &mut scheduler_task => joined.map_err(Into::into).and_then(|r| r),
        joined = &mut server_task => joined.map_err(Into::into).and_then(|r| r),
        _ = shutdown => {
            log::info!("Shutting down");
            Ok(())
        }
    };

    scheduler_task.abort();
    server_task.abort();

    if let Err(e) = &result {
        log::error!("{}", e);
    }
    result
}

/// Resolves on SIGINT or SIGTERM.
pub async fn shutdown_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    match signal(SignalKind::terminate()) {
        Ok(mut terminate) => {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => {}
                _ = terminate.recv() => {}
            }
        }
        Err(e) => {
            log::warn!("Could not listen for SIGTERM: {}", e);
            let _ = tokio::signal::ctrl_c().await;
        }
    }
}
