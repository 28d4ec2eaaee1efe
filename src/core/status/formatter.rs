//! Fixed-width fragment formatting.
//!
//! Rates are scaled to B/s, KiB/s or MiB/s and percentages get wrapped in
//! highlight markers once they cross the warning threshold.

use crate::core::config::Highlight;

pub const WARNING_PERCENT: i64 = 70;
pub const CRITICAL_PERCENT: i64 = 100;

const KIB: f64 = 1024.0;
const MIB: f64 = 1024.0 * 1024.0;

/// Turns raw readings into display strings.
#[derive(Debug, Clone, Default)]
pub struct Formatter {
    highlight: Highlight,
}

impl Formatter {
    pub fn new(highlight: Highlight) -> Self {
        Self { highlight }
    }

    /// Formats a byte rate behind `prefix`, e.g. `down 12.5KiB/s`.
    ///
    /// Negative rates (counter reset) and rates of 1000 MiB/s or more yield
    /// `"<prefix> ERR"`.
    pub fn fixed(&self, prefix: &str, rate: i64) -> String {
        if rate < 0 {
            return err_fragment(prefix);
        }

        let mut speed = rate as f64;
        let mut prefix = prefix.to_string();
        let suffix = if speed >= 1000.0 * MIB {
            return err_fragment(&prefix);
        } else if speed >= 1000.0 * KIB {
            speed /= MIB;
            prefix = format!("{}{}{}", self.highlight.warning, prefix, self.highlight.reset);
            "MiB/s"
        } else if speed >= 1000.0 {
            speed /= KIB;
            "KiB/s"
        } else {
            "B/s"
        };

        let number = if speed >= 100.0 {
            format!("{:.0}", speed)
        } else {
            format!("{:.1}", speed)
        };

        format!("{} {:>4}{}", prefix, number, suffix)
    }

    /// Formats a percentage behind `icon`, highlighted from 70 upwards.
    pub fn colorize(&self, icon: &str, percentage: i64) -> String {
        if percentage >= CRITICAL_PERCENT {
            format!(
                "{}{} {:3}{}",
                self.highlight.critical, icon, percentage, self.highlight.reset
            )
        } else if percentage >= WARNING_PERCENT {
            format!(
                "{}{} {:3}{}",
                self.highlight.warning, icon, percentage, self.highlight.reset
            )
        } else {
            format!("{}{:3}", icon, percentage)
        }
    }
}

/// The fragment a source emits when its reading is unavailable.
pub fn err_fragment(icon: &str) -> String {
    format!("{} ERR", icon)
}
