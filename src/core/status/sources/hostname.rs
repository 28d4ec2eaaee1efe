use sysinfo::System;

use super::MetricSource;
use crate::core::status::formatter::err_fragment;

/// Short host name, resolved once at startup.
pub struct HostnameSource {
    name: Option<String>,
}

impl HostnameSource {
    pub fn new() -> Self {
        Self::with_name(System::host_name())
    }

    pub fn with_name(name: Option<String>) -> Self {
        let name = name
            .map(|n| n.split('.').next().unwrap_or_default().to_string())
            .filter(|n| !n.is_empty());
        Self { name }
    }
}

impl Default for HostnameSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricSource for HostnameSource {
    fn name(&self) -> &'static str {
        "hostname"
    }

    fn fragment(&mut self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => err_fragment("host"),
        }
    }
}
