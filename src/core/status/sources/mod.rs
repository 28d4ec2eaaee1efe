//! Metric sources feeding the status line.
//!
//! Each source reads one kernel-exposed file (or directory) per tick and
//! renders a single fragment. Read failures never escape a source: they are
//! logged and rendered as `<icon> ERR`.

mod clock;
mod cpu;
mod hostname;
mod memory;
mod network;
mod power;

pub use clock::ClockSource;
pub use cpu::CpuSource;
pub use hostname::HostnameSource;
pub use memory::MemorySource;
pub use network::NetworkSource;
pub use power::PowerSource;

use super::formatter::Formatter;
use crate::core::config::{Config, SourceKind};

/// One producer of a status line fragment.
pub trait MetricSource: Send {
    fn name(&self) -> &'static str;

    /// Sample and render. Must not fail; errors degrade to an ERR fragment.
    fn fragment(&mut self) -> String;
}

/// Build the configured sources in display order, with the clock last.
pub fn build_sources(config: &Config) -> Vec<Box<dyn MetricSource>> {
    let formatter = Formatter::new(config.highlight.clone());

    let mut sources: Vec<Box<dyn MetricSource>> = config
        .sources
        .iter()
        .map(|kind| -> Box<dyn MetricSource> {
            match kind {
                SourceKind::Hostname => Box::new(HostnameSource::new()),
                SourceKind::Network => Box::new(NetworkSource::new(
                    &config.proc_root,
                    &config.interfaces,
                    formatter.clone(),
                )),
                SourceKind::Cpu => Box::new(CpuSource::new(&config.proc_root, formatter.clone())),
                SourceKind::Memory => {
                    Box::new(MemorySource::new(&config.proc_root, formatter.clone()))
                }
                SourceKind::Power => Box::new(PowerSource::new(&config.sys_root)),
            }
        })
        .collect();

    sources.push(Box::new(ClockSource::new(&config.clock_format)));
    sources
}
