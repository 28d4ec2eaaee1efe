//! Display sinks: an external title-setting command, or nothing.

use parking_lot::Mutex;
use std::process::{Child, Command, Stdio};

use crate::core::status::DisplaySink;

/// Runs `program args... <title>`, e.g. `xsetroot -name <title>`.
///
/// The command is spawned and never waited on by the caller. Its exit is
/// collected on the next update; while a previous run is still alive the
/// update is skipped so a hung command cannot pile up processes.
#[derive(Debug)]
pub struct CommandDisplay {
    program: String,
    args: Vec<String>,
    running: Mutex<Option<Child>>,
}

impl CommandDisplay {
    /// `None` when the command line is empty.
    pub fn from_argv(argv: &[String]) -> Option<Self> {
        let (program, args) = argv.split_first()?;
        Some(Self {
            program: program.clone(),
            args: args.to_vec(),
            running: Mutex::new(None),
        })
    }

    /// Reap the previous run. `false` while it is still going.
    fn previous_finished(&self, child: &mut Child) -> bool {
        match child.try_wait() {
            Ok(Some(status)) => {
                if !status.success() {
                    log::debug!("{} exited with {}", self.program, status);
                }
                true
            }
            Ok(None) => false,
            Err(e) => {
                log::debug!("Could not check on {}: {}", self.program, e);
                true
            }
        }
    }
}

impl DisplaySink for CommandDisplay {
    fn set_title(&self, title: &str) {
        let mut running = self.running.lock();

        if let Some(child) = running.as_mut() {
            if !self.previous_finished(child) {
                log::debug!("{} still running, title update skipped", self.program);
                return;
            }
        }

        *running = match Command::new(&self.program)
            .args(&self.args)
            .arg(title)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        {
            Ok(child) => Some(child),
            Err(e) => {
                log::debug!("Could not run {}: {}", self.program, e);
                None
            }
        };
    }
}

/// Used when no display command is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDisplay;

impl DisplaySink for NoDisplay {
    fn set_title(&self, _title: &str) {}
}

/// Pick the sink for a configured command line.
pub fn display_for(argv: &[String]) -> Box<dyn DisplaySink> {
    match CommandDisplay::from_argv(argv) {
        Some(display) => Box::new(display),
        None => Box::new(NoDisplay),
    }
}
