//! Diagnostic file logger.
//!
//! stdout belongs to the protocol, so diagnostics go to a plain-text file in
//! the user's home directory instead. The logger is an explicit object passed
//! to whoever needs it; a disabled instance is the no-op variant.

use std::env;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

/// Log file name, created under `$HOME`.
pub const LOG_FILE_NAME: &str = "dualview_bridge_out.txt";

/// Append-only log file handle, opened lazily on first write.
#[derive(Debug, Default)]
pub struct Logger {
    enabled: bool,
    file: Option<File>,
}

impl Logger {
    /// Logger whose enablement comes from the config `logging` flag.
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            file: None,
        }
    }

    /// The no-op variant, for before the config is available and for tests.
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Append one line and flush. Best effort: the log is diagnostic only,
    /// so an open or write failure disables logging rather than aborting a
    /// run the host is waiting on.
    pub fn log(&mut self, line: &str) {
        if !self.enabled {
            return;
        }
        if self.file.is_none() {
            match OpenOptions::new().create(true).append(true).open(log_path()) {
                Ok(file) => self.file = Some(file),
                Err(_) => {
                    self.enabled = false;
                    return;
                }
            }
        }
        if let Some(file) = &mut self.file {
            if writeln!(file, "{line}").and_then(|()| file.flush()).is_err() {
                self.enabled = false;
                self.file = None;
            }
        }
    }
}

fn log_path() -> PathBuf {
    match env::var_os("HOME") {
        Some(home) => PathBuf::from(home).join(LOG_FILE_NAME),
        None => PathBuf::from(LOG_FILE_NAME),
    }
}
