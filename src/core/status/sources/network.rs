//! Network throughput from `/proc/net/dev`.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use super::MetricSource;
use crate::core::status::formatter::Formatter;
use crate::error::{Result, StatusError};

/// Sums the receive/transmit counters of the configured interfaces and
/// reports the rate since the previous sample.
///
/// The previous counters are the only state carried across ticks.
pub struct NetworkSource {
    path: PathBuf,
    interfaces: HashSet<String>,
    formatter: Formatter,
    last: Option<Counters>,
}

#[derive(Debug, Clone, Copy)]
struct Counters {
    at: Instant,
    rx: u64,
    tx: u64,
}

impl NetworkSource {
    pub fn new(proc_root: &Path, interfaces: &[String], formatter: Formatter) -> Self {
        Self {
            path: proc_root.join("net").join("dev"),
            interfaces: interfaces.iter().cloned().collect(),
            formatter,
            last: None,
        }
    }

    fn fragment_at(&mut self, now: Instant) -> String {
        let (rx, tx) = match fs::read_to_string(&self.path)
            .map_err(StatusError::from)
            .and_then(|content| sum_counters(&content, &self.interfaces))
        {
            Ok(totals) => totals,
            Err(e) => {
                log::debug!("network: {}", e);
                return "down ERR up ERR".to_string();
            }
        };

        // No baseline on the first sample
        let previous = self.last.unwrap_or(Counters { at: now, rx, tx });
        self.last = Some(Counters { at: now, rx, tx });

        let elapsed = now.duration_since(previous.at).as_secs_f64();
        let rx_rate = rate(previous.rx, rx, elapsed);
        let tx_rate = rate(previous.tx, tx, elapsed);

        format!(
            "{} {}",
            self.formatter.fixed("down", rx_rate),
            self.formatter.fixed("up", tx_rate)
        )
    }
}

impl MetricSource for NetworkSource {
    fn name(&self) -> &'static str {
        "network"
    }

    fn fragment(&mut self) -> String {
        self.fragment_at(Instant::now())
    }
}

/// Negative when a counter went backwards (interface reset).
fn rate(previous: u64, current: u64, elapsed_secs: f64) -> i64 {
    let delta = current as i64 - previous as i64;
    if elapsed_secs > 0.0 {
        (delta as f64 / elapsed_secs).round() as i64
    } else {
        delta
    }
}

/// Total (rx, tx) bytes over the given interfaces.
fn sum_counters(content: &str, interfaces: &HashSet<String>) -> Result<(u64, u64)> {
    let mut rx_total = 0u64;
    let mut tx_total = 0u64;

    for line in content.lines() {
        let Some((name, fields)) = line.split_once(':') else {
            continue; // header lines
        };
        if !interfaces.contains(name.trim()) {
            continue;
        }

        let fields: Vec<&str> = fields.split_whitespace().collect();
        if fields.len() < 9 {
            return Err(StatusError::metric(format!(
                "short /proc/net/dev line for {}",
                name.trim()
            )));
        }

        let parse = |s: &str| {
            s.parse::<u64>()
                .map_err(|e| StatusError::metric(format!("bad counter {:?}: {}", s, e)))
        };
        rx_total += parse(fields[0])?;
        tx_total += parse(fields[8])?;
    }

    Ok((rx_total, tx_total))
}
