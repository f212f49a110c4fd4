//! Accumulates human-readable status lines and flushes them as one frame.

use std::io::{self, Write};

use serde::Serialize;

use crate::host;

/// Outbound envelope: `{"length": <byte length of content>, "content": ...}`.
#[derive(Serialize)]
struct ResponseEnvelope<'a> {
    length: usize,
    content: &'a str,
}

/// Status lines collected over the whole run.
///
/// Appended to from anywhere (fork branches, error paths, the success path)
/// and flushed exactly once at the end of the run. If nothing was ever
/// appended, nothing is sent.
#[derive(Debug, Default)]
pub struct ResponsePool {
    content: String,
}

impl ResponsePool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one status line. A trailing newline is part of the convention.
    pub fn append(&mut self, line: &str) {
        self.content.push_str(line);
        self.content.push('\n');
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Emit the accumulated lines as a single framed JSON envelope, then
    /// reset. No-op when nothing was appended.
    pub fn flush_to<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        if self.content.is_empty() {
            return Ok(());
        }
        let envelope = ResponseEnvelope {
            length: self.content.len(),
            content: &self.content,
        };
        let payload = serde_json::to_vec(&envelope)?;
        host::write_frame(out, &payload)?;
        self.content.clear();
        Ok(())
    }
}
