//! Second-aligned sampling loop.
//!
//! Each tick snapshots the override, samples every source in order, composes
//! the line and publishes it, then sleeps until the next wall-clock second.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use super::line::StatusLine;
use super::override_store::OverrideStore;
use super::publisher::Publisher;
use super::sources::MetricSource;
use crate::error::Result;

pub struct Scheduler {
    store: OverrideStore,
    sources: Vec<Box<dyn MetricSource>>,
    publisher: Publisher,
}

impl Scheduler {
    pub fn new(
        store: OverrideStore,
        sources: Vec<Box<dyn MetricSource>>,
        publisher: Publisher,
    ) -> Self {
        Self {
            store,
            sources,
            publisher,
        }
    }

    /// Compose the line for this instant without publishing it.
    pub fn compose(&mut self) -> StatusLine {
        let message = self.store.get();
        let fragments = self.sources.iter_mut().map(|source| source.fragment());
        StatusLine::compose(&message, fragments)
    }

    /// One sample-compose-publish cycle.
    ///
    /// Fails only when the subscriber list cannot be read.
    pub fn tick(&mut self) -> Result<StatusLine> {
        let line = self.compose();
        self.publisher.publish(&line)?;
        Ok(line)
    }

    /// Tick forever. Returns only on a fatal publish error.
    pub async fn run(mut self) -> Result<()> {
        let names: Vec<_> = self.sources.iter().map(|s| s.name()).collect();
        log::info!("Scheduler started with sources: {}", names.join(", "));

        loop {
            let started = SystemTime::now();
            self.tick()?;

            if let Some(delay) = sleep_duration(started, SystemTime::now()) {
                tokio::time::sleep(delay).await;
            }
        }
    }
}

/// The first whole second strictly after `at`.
pub fn next_second_boundary(at: SystemTime) -> SystemTime {
    let since_epoch = at.duration_since(UNIX_EPOCH).unwrap_or_default();
    UNIX_EPOCH + Duration::from_secs(since_epoch.as_secs() + 1)
}

/// Time left until the boundary following `tick_start`, or `None` when the
/// tick already ran past it and the next one should start right away.
///
/// If the wall clock stepped backwards during the tick, the boundary is
/// taken from `now` instead, so the wait never exceeds one second.
pub fn sleep_duration(tick_start: SystemTime, now: SystemTime) -> Option<Duration> {
    let anchor = tick_start.min(now);
    next_second_boundary(anchor)
        .duration_since(now)
        .ok()
        .filter(|d| !d.is_zero())
        .map(|d| d.min(Duration::from_secs(1)))
}
