//! Status line pipeline: sources, formatting, composition and fan-out.
//!
//! The scheduler owns the sources and the publisher; the override store is
//! the only piece shared with the control endpoint.

pub mod formatter;
mod line;
mod override_store;
mod publisher;
mod scheduler;
pub mod sources;

pub use formatter::Formatter;
pub use line::{StatusLine, SEPARATOR};
pub use override_store::OverrideStore;
pub use publisher::{DisplaySink, PublishReport, Publisher, SubscriberTransport};
pub use scheduler::{next_second_boundary, sleep_duration, Scheduler};
pub use sources::{build_sources, MetricSource};
