//! Subscribers discovered as files in a directory.
//!
//! Every non-directory entry is a target. Targets are usually named pipes
//! read by a bar or a terminal multiplexer, but plain files work too.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::core::status::SubscriberTransport;
use crate::error::{Result, StatusError};

#[derive(Debug, Clone)]
pub struct FifoDirectory {
    dir: PathBuf,
}

impl FifoDirectory {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Create the directory if it does not exist yet.
    pub fn ensure_exists(&self) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        Ok(())
    }

    fn open_truncated(path: &Path) -> std::io::Result<fs::File> {
        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);

        // A pipe without a reader fails with ENXIO instead of blocking the tick
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.custom_flags(libc::O_NONBLOCK);
        }

        options.open(path)
    }
}

impl SubscriberTransport for FifoDirectory {
    fn list_subscribers(&self) -> Result<Vec<String>> {
        let enumeration_error = |source| StatusError::SubscriberEnumeration {
            path: self.dir.clone(),
            source,
        };

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.dir).map_err(enumeration_error)? {
            let entry = entry.map_err(enumeration_error)?;
            let is_dir = entry
                .file_type()
                .map(|t| t.is_dir())
                .map_err(enumeration_error)?;
            if is_dir {
                continue;
            }
            names.push(entry.file_name().to_string_lossy().into_owned());
        }

        names.sort();
        Ok(names)
    }

    fn deliver(&self, subscriber: &str, bytes: &[u8]) -> Result<()> {
        let delivery_error = |source| StatusError::Delivery {
            subscriber: subscriber.to_string(),
            source,
        };

        let mut file = Self::open_truncated(&self.dir.join(subscriber)).map_err(delivery_error)?;
        file.write_all(bytes).map_err(delivery_error)
    }
}
