//! Memory pressure from `/proc/meminfo`.

use std::fs;
use std::path::{Path, PathBuf};

use super::MetricSource;
use crate::core::status::formatter::{err_fragment, Formatter};
use crate::error::{Result, StatusError};

const ICON: &str = "ram";

/// Memory used by applications: total minus free, buffers and page cache.
pub struct MemorySource {
    path: PathBuf,
    formatter: Formatter,
}

impl MemorySource {
    pub fn new(proc_root: &Path, formatter: Formatter) -> Self {
        Self {
            path: proc_root.join("meminfo"),
            formatter,
        }
    }

    fn read(&self) -> Result<i64> {
        let content = fs::read_to_string(&self.path)?;
        used_percent(&content)
    }
}

impl MetricSource for MemorySource {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn fragment(&mut self) -> String {
        match self.read() {
            Ok(percent) => self.formatter.colorize(ICON, percent),
            Err(e) => {
                log::debug!("memory: {}", e);
                err_fragment(ICON)
            }
        }
    }
}

fn used_percent(meminfo: &str) -> Result<i64> {
    let mut total = None;
    let mut free = None;
    let mut buffers = None;
    let mut cached = None;

    for line in meminfo.lines() {
        let mut parts = line.split_whitespace();
        let slot = match parts.next() {
            Some("MemTotal:") => &mut total,
            Some("MemFree:") => &mut free,
            Some("Buffers:") => &mut buffers,
            Some("Cached:") => &mut cached,
            _ => continue,
        };

        let value: i64 = parts
            .next()
            .ok_or_else(|| StatusError::metric(format!("no value in {:?}", line)))?
            .parse()
            .map_err(|e| StatusError::metric(format!("bad value in {:?}: {}", line, e)))?;
        *slot = Some(value);

        if total.is_some() && free.is_some() && buffers.is_some() && cached.is_some() {
            break;
        }
    }

    let (Some(total), Some(free), Some(buffers), Some(cached)) = (total, free, buffers, cached)
    else {
        return Err(StatusError::metric("incomplete meminfo"));
    };
    if total <= 0 {
        return Err(StatusError::metric("MemTotal is zero"));
    }

    let used = total - free - buffers - cached;
    Ok(used * 100 / total)
}
