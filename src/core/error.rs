//! Error types for the logging façade

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Misuse of the factory surface or of a logging call
    #[error("{0}")]
    Usage(String),

    /// A registered field formatter panicked while transforming a value
    #[error("formatter for field '{field}' panicked")]
    FormatterPanic { field: String },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error from a sink
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LoggerError {
    /// Create a usage error
    pub fn usage(message: impl Into<String>) -> Self {
        LoggerError::Usage(message.into())
    }

    /// Create a formatter panic error
    pub fn formatter_panic(field: impl Into<String>) -> Self {
        LoggerError::FormatterPanic {
            field: field.into(),
        }
    }

    /// Short class name, used as `err.name` in salvaged records
    pub fn class_name(&self) -> &'static str {
        match self {
            LoggerError::Usage(_) => "UsageError",
            LoggerError::FormatterPanic { .. } => "FormatterError",
            LoggerError::Json(_) => "SerializeError",
            LoggerError::Io(_) => "IoError",
        }
    }
}
