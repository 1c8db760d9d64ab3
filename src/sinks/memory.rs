//! In-memory sink for capturing output in tests

use super::Sink;
use parking_lot::Mutex;
use std::io;
use std::sync::Arc;

/// Sink appending into a shared string buffer.
///
/// Cloning yields a handle onto the same buffer, so a test keeps one clone
/// to read from and hands the other to the configuration.
#[derive(Clone, Default)]
pub struct MemorySink {
    buffer: Arc<Mutex<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far.
    pub fn contents(&self) -> String {
        self.buffer.lock().clone()
    }

    /// Discard everything written so far.
    pub fn clear(&self) {
        self.buffer.lock().clear();
    }

    /// Everything written so far, leaving the buffer empty.
    pub fn take(&self) -> String {
        std::mem::take(&mut *self.buffer.lock())
    }
}

impl Sink for MemorySink {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.buffer.lock().push_str(line);
        Ok(())
    }
}
