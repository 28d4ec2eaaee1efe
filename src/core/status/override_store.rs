use parking_lot::RwLock;
use std::sync::Arc;

/// Single shared slot for the operator-supplied override message.
///
/// Written by the control endpoint, read once per tick by the scheduler.
/// Values are swapped whole behind the lock, so a reader always sees one
/// complete message. Cloning the store shares the slot.
#[derive(Debug, Clone)]
pub struct OverrideStore {
    current: Arc<RwLock<Arc<str>>>,
}

impl Default for OverrideStore {
    fn default() -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::from(""))),
        }
    }
}

impl OverrideStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current message. An empty message clears the override.
    pub fn set(&self, message: impl Into<Arc<str>>) {
        let message = message.into();
        log::debug!("Override message set ({} bytes)", message.len());
        *self.current.write() = message;
    }

    /// Snapshot of the most recent message, empty if never set.
    pub fn get(&self) -> Arc<str> {
        let current = self.current.read();
        Arc::clone(&*current)
    }
}
