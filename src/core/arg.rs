//! Call-site argument classification
//!
//! This module provides:
//! - `Fields`: the ordered string-to-JSON map used for contexts and records
//! - `ErrorValue`: a loggable error with name, message, code and stack
//! - `Arg`: the tagged union every call-site argument is classified into
//! - `LogArgs`: bundling of the supported call shapes into an `(a1, a2)` pair
//!
//! The factory and the emitter never probe runtime types; they pattern-match
//! on `Arg` tags produced by the `From` conversions here.

use serde_json::{Map, Value};
use std::error::Error as StdError;

/// Ordered string-to-JSON field map.
///
/// Iteration order is insertion order, and re-inserting an existing key
/// keeps its original position while replacing the value. Contexts, records
/// and error blocks are all built on this type.
pub type Fields = Map<String, Value>;

/// A loggable error value.
///
/// Serialized as the `err` block of a record, in the key order `name`,
/// `message`, `code` (only if present), `stack`. A missing stack is rendered
/// as `"{name}: {message}"` so the block shape never varies.
///
/// # Examples
///
/// ```
/// use linelog::ErrorValue;
///
/// let err = ErrorValue::new("Error", "an error").with_code(500);
/// assert_eq!(err.name(), "Error");
/// assert_eq!(err.message(), "an error");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorValue {
    name: String,
    message: String,
    code: Option<Value>,
    stack: Option<String>,
}

impl ErrorValue {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            code: None,
            stack: None,
        }
    }

    /// Attach a code (status code, errno, application code).
    #[must_use]
    pub fn with_code(mut self, code: impl Into<Value>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Attach an explicit stack rendering.
    #[must_use]
    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = Some(stack.into());
        self
    }

    /// Build from any [`std::error::Error`].
    ///
    /// The message comes from `Display`; the stack renders the `source()`
    /// chain, which is the provenance a Rust error actually carries.
    pub fn from_error<E: StdError + ?Sized>(err: &E) -> Self {
        let message = err.to_string();
        let mut stack = format!("Error: {}", message);
        let mut source = err.source();
        while let Some(cause) = source {
            stack.push_str("\n    caused by: ");
            stack.push_str(&cause.to_string());
            source = cause.source();
        }
        Self {
            name: "Error".to_owned(),
            message,
            code: None,
            stack: Some(stack),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn code(&self) -> Option<&Value> {
        self.code.as_ref()
    }

    /// The stack rendering, synthesized if none was attached.
    pub fn stack(&self) -> String {
        match &self.stack {
            Some(stack) => stack.clone(),
            None => format!("{}: {}", self.name, self.message),
        }
    }

    /// The `err` block this value serializes to.
    #[must_use]
    pub fn to_value(&self) -> Value {
        let mut block = Fields::new();
        block.insert("name".to_owned(), Value::String(self.name.clone()));
        block.insert("message".to_owned(), Value::String(self.message.clone()));
        if let Some(code) = &self.code {
            block.insert("code".to_owned(), code.clone());
        }
        block.insert("stack".to_owned(), Value::String(self.stack()));
        Value::Object(block)
    }
}

impl From<&super::error::LoggerError> for ErrorValue {
    fn from(err: &super::error::LoggerError) -> Self {
        ErrorValue::new(err.class_name(), err.to_string())
    }
}

/// A classified call-site argument.
#[derive(Debug, Clone)]
pub enum Arg {
    /// A text message
    Message(String),
    /// A plain object of structured fields
    Fields(Fields),
    /// An error value
    Failure(ErrorValue),
    /// Any other JSON shape (number, boolean, array, null); never loggable
    Scalar(Value),
}

impl From<&str> for Arg {
    fn from(s: &str) -> Self {
        Arg::Message(s.to_owned())
    }
}

impl From<String> for Arg {
    fn from(s: String) -> Self {
        Arg::Message(s)
    }
}

impl From<Fields> for Arg {
    fn from(fields: Fields) -> Self {
        Arg::Fields(fields)
    }
}

impl From<ErrorValue> for Arg {
    fn from(err: ErrorValue) -> Self {
        Arg::Failure(err)
    }
}

impl From<Value> for Arg {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => Arg::Message(s),
            Value::Object(fields) => Arg::Fields(fields),
            other => Arg::Scalar(other),
        }
    }
}

impl From<bool> for Arg {
    fn from(b: bool) -> Self {
        Arg::Scalar(Value::from(b))
    }
}

impl From<i32> for Arg {
    fn from(i: i32) -> Self {
        Arg::Scalar(Value::from(i))
    }
}

impl From<i64> for Arg {
    fn from(i: i64) -> Self {
        Arg::Scalar(Value::from(i))
    }
}

impl From<u64> for Arg {
    fn from(i: u64) -> Self {
        Arg::Scalar(Value::from(i))
    }
}

impl From<f64> for Arg {
    fn from(f: f64) -> Self {
        Arg::Scalar(Value::from(f))
    }
}

/// Bundling of the supported call shapes into the `(a1, a2)` pair the
/// classification routines run on.
///
/// A single value is `(Some(a1), None)`, a two-tuple is `(Some, Some)`, and
/// the unit value is the absent call `(None, None)`.
pub trait LogArgs {
    fn into_args(self) -> (Option<Arg>, Option<Arg>);
}

impl LogArgs for () {
    fn into_args(self) -> (Option<Arg>, Option<Arg>) {
        (None, None)
    }
}

impl<A: Into<Arg>, B: Into<Arg>> LogArgs for (A, B) {
    fn into_args(self) -> (Option<Arg>, Option<Arg>) {
        (Some(self.0.into()), Some(self.1.into()))
    }
}

impl LogArgs for Arg {
    fn into_args(self) -> (Option<Arg>, Option<Arg>) {
        (Some(self), None)
    }
}

impl LogArgs for &str {
    fn into_args(self) -> (Option<Arg>, Option<Arg>) {
        (Some(self.into()), None)
    }
}

impl LogArgs for String {
    fn into_args(self) -> (Option<Arg>, Option<Arg>) {
        (Some(self.into()), None)
    }
}

impl LogArgs for Fields {
    fn into_args(self) -> (Option<Arg>, Option<Arg>) {
        (Some(self.into()), None)
    }
}

impl LogArgs for ErrorValue {
    fn into_args(self) -> (Option<Arg>, Option<Arg>) {
        (Some(self.into()), None)
    }
}

impl LogArgs for Value {
    fn into_args(self) -> (Option<Arg>, Option<Arg>) {
        (Some(self.into()), None)
    }
}

impl LogArgs for bool {
    fn into_args(self) -> (Option<Arg>, Option<Arg>) {
        (Some(self.into()), None)
    }
}

impl LogArgs for i32 {
    fn into_args(self) -> (Option<Arg>, Option<Arg>) {
        (Some(self.into()), None)
    }
}

impl LogArgs for i64 {
    fn into_args(self) -> (Option<Arg>, Option<Arg>) {
        (Some(self.into()), None)
    }
}

impl LogArgs for f64 {
    fn into_args(self) -> (Option<Arg>, Option<Arg>) {
        (Some(self.into()), None)
    }
}
