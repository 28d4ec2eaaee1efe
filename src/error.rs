use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for statline
#[derive(Error, Debug)]
pub enum StatusError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Could not bind control socket {}: {source}", path.display())]
    Bind {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not list subscribers in {}: {source}", path.display())]
    SubscriberEnumeration {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not report to {subscriber}: {source}")]
    Delivery {
        subscriber: String,
        #[source]
        source: io::Error,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] hyper::Error),

    #[error("Control request failed: {0}")]
    Client(String),

    #[error("Timed out while {0}")]
    Timeout(&'static str),

    #[error("Task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    #[error("Metric read failed: {0}")]
    Metric(String),
}

/// Result type alias for statline
pub type Result<T> = std::result::Result<T, StatusError>;

impl StatusError {
    /// Create a config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        StatusError::Config(msg.into())
    }

    /// Create a control client error
    pub fn client<S: Into<String>>(msg: S) -> Self {
        StatusError::Client(msg.into())
    }

    pub fn metric<S: Into<String>>(msg: S) -> Self {
        StatusError::Metric(msg.into())
    }
}
