//! Output sinks
//!
//! A sink receives finished, newline-terminated JSON lines. There is no
//! flush or acknowledgement contract; the emitter writes fire-and-forget
//! and ignores sink errors.

mod memory;
mod writer;

pub use memory::MemorySink;
pub use writer::WriterSink;

use std::io;

/// Line-oriented output destination.
pub trait Sink: Send {
    /// Append one finished line (terminator included).
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}
