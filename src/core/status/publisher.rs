//! Fan-out of a composed line to the display sink and every subscriber.

use super::line::StatusLine;
use crate::error::Result;

/// Something that shows the line as a visible title. Fire-and-forget.
pub trait DisplaySink: Send + Sync {
    fn set_title(&self, title: &str);
}

/// Discovery and delivery of subscribers.
///
/// Listing is re-done on every publish so subscribers may come and go
/// between ticks. A listing failure is fatal to the caller; a delivery
/// failure only concerns that one subscriber.
pub trait SubscriberTransport: Send + Sync {
    fn list_subscribers(&self) -> Result<Vec<String>>;
    fn deliver(&self, subscriber: &str, bytes: &[u8]) -> Result<()>;
}

/// Outcome of one publish.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublishReport {
    pub delivered: Vec<String>,
    pub failed: Vec<String>,
}

pub struct Publisher {
    display: Box<dyn DisplaySink>,
    subscribers: Box<dyn SubscriberTransport>,
}

impl Publisher {
    pub fn new(display: Box<dyn DisplaySink>, subscribers: Box<dyn SubscriberTransport>) -> Self {
        Self {
            display,
            subscribers,
        }
    }

    /// Sets the title, then writes `line + "\n"` to each subscriber.
    ///
    /// Returns an error only when the subscriber list itself is unavailable.
    pub fn publish(&self, line: &StatusLine) -> Result<PublishReport> {
        self.display.set_title(line.as_str());

        let subscribers = self.subscribers.list_subscribers()?;
        let bytes = line.to_delivery_bytes();
        let mut report = PublishReport::default();

        for subscriber in subscribers {
            match self.subscribers.deliver(&subscriber, &bytes) {
                Ok(()) => report.delivered.push(subscriber),
                Err(e) => {
                    log::warn!("Could not report to {}: {}", subscriber, e);
                    report.failed.push(subscriber);
                }
            }
        }

        log::trace!(
            "Published to {} subscriber(s), {} failed",
            report.delivered.len(),
            report.failed.len()
        );
        Ok(report)
    }
}
