//! # linelog
//!
//! Hierarchical structured logging to single-line JSON records.
//!
//! ## Features
//!
//! - **Immutable Loggers**: a logger is a name plus bound context; children
//!   extend the name and overlay the context, copy-on-derive
//! - **One Line Per Call**: every emission is one insertion-ordered JSON
//!   object, newline-terminated
//! - **Fail-Open Emission**: a malformed logging call produces a salvaged
//!   error record instead of panicking or returning an error
//! - **Pluggable Collaborators**: sink, clock, error handlers and per-field
//!   formatters are injected through a shared configuration handle
//!
//! ## Example
//!
//! ```
//! use linelog::{LogConfig, Logger};
//! use linelog::sinks::MemorySink;
//! use serde_json::json;
//!
//! let config = LogConfig::new();
//! let sink = MemorySink::new();
//! config.set_sink(sink.clone());
//!
//! let root = Logger::create(&config, "server").unwrap();
//! let conn = root.derive(("conn", json!({"peer": "10.0.0.7"}))).unwrap();
//!
//! conn.info("accepted");
//! conn.info(("closed", json!({"bytes": 4096})));
//!
//! let output = sink.contents();
//! assert!(output.contains("\"name\":\"server:conn\""));
//! assert!(output.contains("\"peer\":\"10.0.0.7\""));
//! assert!(output.contains("\"bytes\":4096"));
//! ```

pub mod core;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        Arg, Clock, ErrorHandler, ErrorValue, FieldFormatter, Fields, FixedClock, LogArgs,
        LogConfig, Logger, LoggerError, Result, Severity, SystemClock,
    };
    pub use crate::sinks::{MemorySink, Sink, WriterSink};
}

pub use crate::core::{
    Arg, Clock, ErrorHandler, ErrorValue, FieldFormatter, Fields, FixedClock, LogArgs, LogConfig,
    Logger, LoggerError, Result, Severity, SystemClock,
};
pub use crate::sinks::{MemorySink, Sink, WriterSink};
