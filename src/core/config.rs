use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, StatusError};

/// Metric sources that can appear in the status line, in the order listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Hostname,
    Network,
    Cpu,
    Memory,
    Power,
}

/// Escape sequences wrapped around percentages that cross a threshold
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Highlight {
    pub warning: String,  // p >= 70
    pub critical: String, // p >= 100
    pub reset: String,
}

impl Default for Highlight {
    fn default() -> Self {
        Self {
            warning: "\x1b[33m".to_string(),
            critical: "\x1b[31m".to_string(),
            reset: "\x1b[0m".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where the control endpoint binds
    pub socket_path: PathBuf,
    /// Where subscribers are discovered
    pub fifo_dir: PathBuf,
    pub sources: Vec<SourceKind>,
    /// Interfaces summed by the network source
    pub interfaces: Vec<String>,
    /// Command prefix receiving the line as its last argument; empty disables it
    pub display_command: Vec<String>,
    pub clock_format: String,
    pub highlight: Highlight,
    pub proc_root: PathBuf,
    pub sys_root: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        let state_dir = default_state_dir();
        Self {
            socket_path: state_dir.join("status.sock"),
            fifo_dir: state_dir.join("fifos"),
            sources: vec![
                SourceKind::Network,
                SourceKind::Cpu,
                SourceKind::Memory,
                SourceKind::Power,
            ],
            interfaces: ["eth0", "eth1", "wlan0", "ppp0"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            display_command: vec!["xsetroot".to_string(), "-name".to_string()],
            clock_format: "%a %d %H:%M".to_string(),
            highlight: Highlight::default(),
            proc_root: PathBuf::from("/proc"),
            sys_root: PathBuf::from("/sys"),
        }
    }
}

impl Config {
    /// Load the config from its default location, falling back to defaults
    /// when the file does not exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let data = fs::read_to_string(path)?;
        if data.trim().is_empty() {
            return Ok(Config::default());
        }

        serde_json::from_str(&data).map_err(|e| {
            StatusError::config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    pub fn default_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| StatusError::config("Could not determine config directory"))?;

        Ok(config_dir.join("statline").join("config.json"))
    }

    /// Apply command line overrides on top of the loaded values.
    pub fn with_overrides(
        mut self,
        socket_path: Option<PathBuf>,
        fifo_dir: Option<PathBuf>,
    ) -> Self {
        if let Some(path) = socket_path {
            self.socket_path = path;
        }
        if let Some(dir) = fifo_dir {
            self.fifo_dir = dir;
        }
        self
    }
}

fn default_state_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("statline")
}
