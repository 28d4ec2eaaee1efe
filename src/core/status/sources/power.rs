//! Battery charge and AC state from `/sys/class/power_supply`.

use std::fs;
use std::path::{Path, PathBuf};

use super::MetricSource;
use crate::core::status::formatter::err_fragment;
use crate::error::{Result, StatusError};

/// Upper-case icon while plugged in.
const ICON_AC: &str = "BAT";
const ICON_BATTERY: &str = "bat";

pub struct PowerSource {
    dir: PathBuf,
}

impl PowerSource {
    pub fn new(sys_root: &Path) -> Self {
        Self {
            dir: sys_root.join("class").join("power_supply"),
        }
    }

    fn read(&self) -> Result<String> {
        let plugged = fs::read_to_string(self.dir.join("AC").join("online"))?;

        let mut full = 0i64;
        let mut now = 0i64;
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            if !name.starts_with("BAT") {
                continue;
            }

            let battery = entry.path();
            full += read_value(&battery, "full");
            now += read_value(&battery, "now");
        }

        if full == 0 {
            return Err(StatusError::metric("no battery with a readable full level"));
        }

        let icon = if plugged.trim() == "1" {
            ICON_AC
        } else {
            ICON_BATTERY
        };
        Ok(format!("{} {:3}", icon, now * 100 / full))
    }
}

impl MetricSource for PowerSource {
    fn name(&self) -> &'static str {
        "power"
    }

    fn fragment(&mut self) -> String {
        self.read().unwrap_or_else(|e| {
            log::debug!("power: {}", e);
            err_fragment(ICON_BATTERY)
        })
    }
}

/// Reads `energy_<field>`, falling back to `charge_<field>`; 0 if neither parses.
fn read_value(battery: &Path, field: &str) -> i64 {
    ["energy", "charge"]
        .iter()
        .find_map(|kind| fs::read_to_string(battery.join(format!("{}_{}", kind, field))).ok())
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(0)
}
