//! Shared logging configuration
//!
//! A `LogConfig` owns everything emission consults besides the logger
//! itself: the output sink, the clock, the error handlers and the per-field
//! formatters. Loggers hold a cheap clone of the handle, so every logger
//! derived from one root shares the same configuration for the life of the
//! process.
//!
//! Setters replace their piece wholesale; `reset` returns the configuration
//! to quiescent (no sink, no handlers). There are no transactional semantics
//! across setters.
//!
//! # Examples
//!
//! ```
//! use linelog::{LogConfig, Logger};
//! use linelog::sinks::MemorySink;
//!
//! let config = LogConfig::new();
//! let sink = MemorySink::new();
//! config.set_sink(sink.clone());
//!
//! let log = Logger::create(&config, "api").unwrap();
//! log.info("started");
//! assert!(sink.contents().contains("\"name\":\"api\""));
//! ```

use super::arg::ErrorValue;
use super::timestamp::{Clock, SystemClock};
use crate::sinks::Sink;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Callback invoked with the error value of an error-level emission.
pub type ErrorHandler = Arc<dyn Fn(&ErrorValue) + Send + Sync>;

/// Pure per-field transform applied to a record value just before
/// serialization. Looked up by field name.
pub type FieldFormatter = Arc<dyn Fn(Value) -> Value + Send + Sync>;

struct ConfigState {
    sink: Option<Box<dyn Sink>>,
    clock: Arc<dyn Clock>,
    error_handlers: Vec<ErrorHandler>,
    formatters: HashMap<String, FieldFormatter>,
}

/// Shared handle to the emission configuration.
///
/// Cloning is cheap and yields a handle onto the same state. All methods
/// take `&self`; interior state is lock-protected so calls may come from
/// any thread. Handlers, formatters and the clock are invoked outside the
/// lock, so they may themselves reconfigure the same `LogConfig`.
#[derive(Clone)]
pub struct LogConfig {
    state: Arc<RwLock<ConfigState>>,
}

impl LogConfig {
    /// A quiescent configuration: no sink, system clock, no handlers,
    /// no formatters. Without a sink, emission is a silent no-op.
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(ConfigState {
                sink: None,
                clock: Arc::new(SystemClock),
                error_handlers: Vec::new(),
                formatters: HashMap::new(),
            })),
        }
    }

    /// Replace the output sink.
    pub fn set_sink(&self, sink: impl Sink + 'static) {
        self.state.write().sink = Some(Box::new(sink));
    }

    /// Remove the output sink; emission becomes a silent no-op.
    pub fn clear_sink(&self) {
        self.state.write().sink = None;
    }

    /// Replace the clock records take their timestamp from.
    pub fn set_clock(&self, clock: impl Clock + 'static) {
        self.state.write().clock = Arc::new(clock);
    }

    /// Register a handler for error-level emissions of an error value.
    ///
    /// Handlers run synchronously, in registration order. Panics inside a
    /// handler are not contained by this layer.
    pub fn add_error_handler(&self, handler: impl Fn(&ErrorValue) + Send + Sync + 'static) {
        self.state.write().error_handlers.push(Arc::new(handler));
    }

    /// Register or replace the formatter for one field name.
    pub fn set_formatter(
        &self,
        field: impl Into<String>,
        formatter: impl Fn(Value) -> Value + Send + Sync + 'static,
    ) {
        self.state
            .write()
            .formatters
            .insert(field.into(), Arc::new(formatter));
    }

    /// Remove the formatter for one field name, if any.
    pub fn clear_formatter(&self, field: &str) {
        self.state.write().formatters.remove(field);
    }

    /// Return to quiescent: drop the sink and all error handlers.
    /// The clock and the formatters are untouched.
    pub fn reset(&self) {
        let mut state = self.state.write();
        state.sink = None;
        state.error_handlers.clear();
    }

    pub(crate) fn now(&self) -> DateTime<Utc> {
        let clock = Arc::clone(&self.state.read().clock);
        clock.now()
    }

    pub(crate) fn error_handlers(&self) -> Vec<ErrorHandler> {
        self.state.read().error_handlers.clone()
    }

    pub(crate) fn formatters(&self) -> HashMap<String, FieldFormatter> {
        self.state.read().formatters.clone()
    }

    /// Write one finished line through the sink, if one is set.
    /// Sink failures are ignored; the write is fire-and-forget.
    pub(crate) fn write_line(&self, line: &str) {
        let mut state = self.state.write();
        if let Some(sink) = state.sink.as_mut() {
            let _ = sink.write_line(line);
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LogConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.read();
        f.debug_struct("LogConfig")
            .field("sink", &state.sink.is_some())
            .field("error_handlers", &state.error_handlers.len())
            .field("formatters", &state.formatters.len())
            .finish_non_exhaustive()
    }
}
