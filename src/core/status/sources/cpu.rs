//! CPU load from `/proc/loadavg`, scaled to the logical core count.

use std::fs;
use std::path::{Path, PathBuf};
use sysinfo::{CpuRefreshKind, RefreshKind, System};

use super::MetricSource;
use crate::core::status::formatter::{err_fragment, Formatter};
use crate::error::{Result, StatusError};

const ICON: &str = "cpu";

pub struct CpuSource {
    path: PathBuf,
    cores: usize,
    formatter: Formatter,
}

impl CpuSource {
    pub fn new(proc_root: &Path, formatter: Formatter) -> Self {
        Self::with_cores(proc_root, logical_cores(), formatter)
    }

    pub fn with_cores(proc_root: &Path, cores: usize, formatter: Formatter) -> Self {
        Self {
            path: proc_root.join("loadavg"),
            cores: cores.max(1),
            formatter,
        }
    }

    fn read(&self) -> Result<i64> {
        let content = fs::read_to_string(&self.path)?;
        let load: f64 = content
            .split_whitespace()
            .next()
            .ok_or_else(|| StatusError::metric("empty loadavg"))?
            .parse()
            .map_err(|e| StatusError::metric(format!("bad loadavg: {}", e)))?;

        Ok((load * 100.0 / self.cores as f64) as i64)
    }
}

impl MetricSource for CpuSource {
    fn name(&self) -> &'static str {
        "cpu"
    }

    fn fragment(&mut self) -> String {
        match self.read() {
            Ok(percent) => self.formatter.colorize(ICON, percent),
            Err(e) => {
                log::debug!("cpu: {}", e);
                err_fragment(ICON)
            }
        }
    }
}

fn logical_cores() -> usize {
    let system =
        System::new_with_specifics(RefreshKind::nothing().with_cpu(CpuRefreshKind::nothing()));
    system.cpus().len()
}
