//! Record construction and write-out
//!
//! One logging call becomes one ordered record: `timestamp`, `name` (when
//! the logger has one), `severity`, the bound context in chain order, then
//! the call-site fields in dispatch order, then any `err` block. The record
//! is serialized to a single line and handed to the sink.
//!
//! Failures inside dispatch or formatting never reach the caller. The
//! record is salvaged: `severity` is relabeled to `error` in place, an
//! `err` block is attached, and the line still goes through the normal
//! write path.

use super::arg::{Arg, ErrorValue, Fields};
use super::config::LogConfig;
use super::error::{LoggerError, Result};
use super::logger::Logger;
use super::serializer;
use super::severity::Severity;
use super::timestamp;
use serde_json::Value;
use std::panic::{self, AssertUnwindSafe};

const SECOND_AFTER_MESSAGE: &str =
    "when logging a string message, the second argument must be an object if provided";
const SECOND_AFTER_ERROR: &str =
    "when logging an error, the second argument must be a string or object if provided";
const OBJECT_ALONE: &str = "when logging an object, there can be no other arguments";
const NOTHING_PROVIDED: &str = "log message, object or error not provided";
const UNSUPPORTED: &str = "unsupported argument";

pub(crate) fn emit(logger: &Logger, severity: Severity, a1: Option<Arg>, a2: Option<Arg>) {
    let config = logger.config();

    let mut record = Fields::new();
    record.insert(
        "timestamp".to_owned(),
        Value::String(timestamp::format_timestamp(&config.now())),
    );
    if let Some(name) = logger.name() {
        record.insert("name".to_owned(), Value::String(name.to_owned()));
    }
    record.insert(
        "severity".to_owned(),
        Value::String(severity.as_str().to_owned()),
    );
    for (key, value) in logger.context() {
        record.insert(key.clone(), value.clone());
    }

    let built = dispatch(&mut record, severity, a1, a2, config)
        .and_then(|()| apply_formatters(&mut record, config));
    if let Err(fault) = built {
        // Relabeling through insert keeps the severity key in its slot;
        // fields merged before the fault stay in the record.
        record.insert(
            "severity".to_owned(),
            Value::String(Severity::Error.as_str().to_owned()),
        );
        record.insert("err".to_owned(), ErrorValue::from(&fault).to_value());
    }

    config.write_line(&serializer::to_line(&record));
}

/// Merge call-site arguments into the record, by classified shape.
fn dispatch(
    record: &mut Fields,
    severity: Severity,
    a1: Option<Arg>,
    a2: Option<Arg>,
    config: &LogConfig,
) -> Result<()> {
    match a1 {
        Some(Arg::Message(message)) => {
            record.insert("message".to_owned(), Value::String(message));
            match a2 {
                Some(Arg::Fields(fields)) => merge(record, fields),
                Some(_) => return Err(LoggerError::usage(SECOND_AFTER_MESSAGE)),
                None => {}
            }
        }
        Some(Arg::Failure(failure)) => {
            match a2 {
                Some(Arg::Message(message)) => {
                    record.insert("message".to_owned(), Value::String(message));
                }
                Some(Arg::Fields(fields)) => merge(record, fields),
                Some(_) => return Err(LoggerError::usage(SECOND_AFTER_ERROR)),
                None => {}
            }
            // Message and fields land before the error block so it reads last.
            record.insert("err".to_owned(), failure.to_value());
            if severity == Severity::Error {
                for handler in config.error_handlers() {
                    handler(&failure);
                }
            }
        }
        Some(Arg::Fields(fields)) => {
            if a2.is_some() {
                return Err(LoggerError::usage(OBJECT_ALONE));
            }
            merge(record, fields);
        }
        Some(Arg::Scalar(_)) => return Err(LoggerError::usage(UNSUPPORTED)),
        None => return Err(LoggerError::usage(NOTHING_PROVIDED)),
    }
    Ok(())
}

fn merge(record: &mut Fields, fields: Fields) {
    for (key, value) in fields {
        record.insert(key, value);
    }
}

/// Replace each record value whose key has a registered formatter, in
/// record order. Formatter panics must not cross the logging boundary;
/// each application is contained separately.
fn apply_formatters(record: &mut Fields, config: &LogConfig) -> Result<()> {
    let formatters = config.formatters();
    if formatters.is_empty() {
        return Ok(());
    }

    let keys: Vec<String> = record.keys().cloned().collect();
    for key in keys {
        let Some(formatter) = formatters.get(&key) else {
            continue;
        };
        let Some(current) = record.get(&key).cloned() else {
            continue;
        };
        let formatted = panic::catch_unwind(AssertUnwindSafe(|| formatter(current)))
            .map_err(|_| LoggerError::formatter_panic(key.clone()))?;
        record.insert(key, formatted);
    }
    Ok(())
}
