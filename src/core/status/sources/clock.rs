use chrono::{DateTime, Local};
use std::fmt::Write;

use super::MetricSource;
use crate::core::status::formatter::err_fragment;

/// Local wall-clock time, always the last fragment of a line.
pub struct ClockSource {
    format: String,
}

impl ClockSource {
    pub fn new(format: &str) -> Self {
        Self {
            format: format.to_string(),
        }
    }

    fn render(&self, now: DateTime<Local>) -> String {
        // Invalid strftime patterns surface as fmt errors, not panics
        let mut out = String::new();
        match write!(out, "{}", now.format(&self.format)) {
            Ok(()) => out,
            Err(_) => err_fragment("clock"),
        }
    }
}

impl MetricSource for ClockSource {
    fn name(&self) -> &'static str {
        "clock"
    }

    fn fragment(&mut self) -> String {
        self.render(Local::now())
    }
}
