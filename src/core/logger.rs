//! Logger values and the factory surface
//!
//! A `Logger` is an immutable pair of an optional colon-joined name and an
//! ordered context map, plus a handle to the shared configuration. New
//! loggers come from [`Logger::create`]; children come from
//! [`Logger::derive`], which extends the name and overlays the context.
//! Both funnel through one classification routine, so the argument rules
//! are identical.

use super::arg::{Arg, Fields, LogArgs};
use super::config::LogConfig;
use super::error::{LoggerError, Result};
use super::severity::Severity;

const TWO_ARG_FIRST: &str = "first argument must be a string or undefined";
const TWO_ARG_SECOND: &str = "second argument must be an object";
const ONE_ARG: &str = "argument must be a name or object";

/// Immutable named logger with bound context.
///
/// Never mutated after creation; deriving a child copies this logger's
/// context and overlays the new keys. Cloning and sharing across threads
/// is cheap and safe.
///
/// # Examples
///
/// ```
/// use linelog::{LogConfig, Logger};
/// use serde_json::json;
///
/// let config = LogConfig::new();
/// let root = Logger::create(&config, "server").unwrap();
/// let conn = root.derive(("conn", json!({"peer": "10.0.0.7"}))).unwrap();
///
/// assert_eq!(conn.name(), Some("server:conn"));
/// assert_eq!(conn.context()["peer"], json!("10.0.0.7"));
/// ```
#[derive(Debug, Clone)]
pub struct Logger {
    config: LogConfig,
    name: Option<String>,
    context: Fields,
}

impl Logger {
    /// Build a root logger from an optional name and/or context object.
    ///
    /// Accepted shapes: `()` (anonymous, empty context), a name, a context
    /// object, or a `(name, context)` pair. Anything else is a usage error,
    /// returned synchronously; misuse of the factory is a programming
    /// mistake and never deferred to emission.
    pub fn create(config: &LogConfig, args: impl LogArgs) -> Result<Logger> {
        let (a1, a2) = args.into_args();
        let (part, overlay) = classify(a1, a2)?;
        Ok(Logger {
            config: config.clone(),
            name: join_name(None, part.as_deref()),
            context: overlay,
        })
    }

    /// Derive a child logger, extending the name and overlaying context.
    ///
    /// Takes the same argument shapes as [`Logger::create`]. The child's
    /// name is `parent:part` (absent or empty parts are dropped, not
    /// joined). Its context is the parent's with the new keys overlaid:
    /// parent keys keep their positions, and reintroduced keys take the
    /// new value in place.
    pub fn derive(&self, args: impl LogArgs) -> Result<Logger> {
        let (a1, a2) = args.into_args();
        let (part, overlay) = classify(a1, a2)?;
        let mut context = self.context.clone();
        for (key, value) in overlay {
            context.insert(key, value);
        }
        Ok(Logger {
            config: self.config.clone(),
            name: join_name(self.name.as_deref(), part.as_deref()),
            context,
        })
    }

    /// The colon-joined hierarchical name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The bound context merged into every record.
    pub fn context(&self) -> &Fields {
        &self.context
    }

    pub(crate) fn config(&self) -> &LogConfig {
        &self.config
    }

    /// Emit a debug-severity record.
    pub fn debug(&self, args: impl LogArgs) {
        self.emit(Severity::Debug, args);
    }

    /// Emit an info-severity record.
    pub fn info(&self, args: impl LogArgs) {
        self.emit(Severity::Info, args);
    }

    /// Emit a warn-severity record.
    pub fn warn(&self, args: impl LogArgs) {
        self.emit(Severity::Warn, args);
    }

    /// Emit an error-severity record.
    ///
    /// When the argument is an error value, every registered error handler
    /// is invoked with it.
    pub fn error(&self, args: impl LogArgs) {
        self.emit(Severity::Error, args);
    }

    /// Emit one record at the given severity.
    ///
    /// Never panics and never returns an error: malformed arguments are
    /// downgraded into a salvaged error record and written through the
    /// normal path.
    pub fn emit(&self, severity: Severity, args: impl LogArgs) {
        let (a1, a2) = args.into_args();
        super::emitter::emit(self, severity, a1, a2);
    }
}

/// Classify an `(a1, a2)` argument pair into a name part and a context
/// overlay. Shared by `create` and `derive`.
fn classify(a1: Option<Arg>, a2: Option<Arg>) -> Result<(Option<String>, Fields)> {
    match (a1, a2) {
        (a1, Some(a2)) => {
            let part = match a1 {
                Some(Arg::Message(name)) => Some(name),
                None => None,
                Some(_) => return Err(LoggerError::usage(TWO_ARG_FIRST)),
            };
            match a2 {
                Arg::Fields(overlay) => Ok((part, overlay)),
                _ => Err(LoggerError::usage(TWO_ARG_SECOND)),
            }
        }
        (Some(Arg::Message(name)), None) => Ok((Some(name), Fields::new())),
        (Some(Arg::Fields(overlay)), None) => Ok((None, overlay)),
        (Some(_), None) => Err(LoggerError::usage(ONE_ARG)),
        (None, None) => Ok((None, Fields::new())),
    }
}

/// Join name segments with `:`, dropping absent or empty segments.
/// Both absent yields no name.
fn join_name(parent: Option<&str>, part: Option<&str>) -> Option<String> {
    let segments: Vec<&str> = [parent, part]
        .into_iter()
        .flatten()
        .filter(|segment| !segment.is_empty())
        .collect();
    if segments.is_empty() {
        None
    } else {
        Some(segments.join(":"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::arg::ErrorValue;
    use serde_json::json;

    fn fields(value: serde_json::Value) -> Fields {
        value.as_object().expect("object literal").clone()
    }

    #[test]
    fn test_classify_two_argument_form() {
        let (part, overlay) =
            classify(Some("alpha".into()), Some(json!({"beta": "gamma"}).into())).expect("valid");
        assert_eq!(part.as_deref(), Some("alpha"));
        assert_eq!(overlay, fields(json!({"beta": "gamma"})));

        let (part, overlay) =
            classify(None, Some(json!({"beta": "gamma"}).into())).expect("valid");
        assert_eq!(part, None);
        assert_eq!(overlay, fields(json!({"beta": "gamma"})));
    }

    #[test]
    fn test_classify_two_argument_misuse() {
        let err = classify(Some(json!({}).into()), Some(json!({}).into())).unwrap_err();
        assert_eq!(err.to_string(), TWO_ARG_FIRST);

        let err = classify(Some("".into()), Some("".into())).unwrap_err();
        assert_eq!(err.to_string(), TWO_ARG_SECOND);
    }

    #[test]
    fn test_classify_single_argument_forms() {
        let (part, overlay) = classify(Some("alpha".into()), None).expect("valid");
        assert_eq!(part.as_deref(), Some("alpha"));
        assert!(overlay.is_empty());

        let (part, overlay) = classify(Some(json!({"a": 1}).into()), None).expect("valid");
        assert_eq!(part, None);
        assert_eq!(overlay, fields(json!({"a": 1})));

        let (part, overlay) = classify(None, None).expect("valid");
        assert_eq!(part, None);
        assert!(overlay.is_empty());
    }

    #[test]
    fn test_classify_rejects_other_shapes() {
        let err = classify(Some(1_i64.into()), None).unwrap_err();
        assert_eq!(err.to_string(), ONE_ARG);

        let err = classify(Some(ErrorValue::new("Error", "boom").into()), None).unwrap_err();
        assert_eq!(err.to_string(), ONE_ARG);
    }

    #[test]
    fn test_join_name_algebra() {
        assert_eq!(join_name(None, None), None);
        assert_eq!(join_name(Some("alpha"), None), Some("alpha".to_owned()));
        assert_eq!(join_name(None, Some("beta")), Some("beta".to_owned()));
        assert_eq!(
            join_name(Some("alpha"), Some("beta")),
            Some("alpha:beta".to_owned())
        );
        assert_eq!(join_name(None, Some("")), None);
        assert_eq!(join_name(Some("alpha"), Some("")), Some("alpha".to_owned()));
    }

    #[test]
    fn test_create_shapes() {
        let config = LogConfig::new();

        let anonymous = Logger::create(&config, ()).expect("valid");
        assert_eq!(anonymous.name(), None);
        assert!(anonymous.context().is_empty());

        let named = Logger::create(&config, "alpha").expect("valid");
        assert_eq!(named.name(), Some("alpha"));
        assert!(named.context().is_empty());

        let contextual = Logger::create(&config, json!({"beta": "gamma"})).expect("valid");
        assert_eq!(contextual.name(), None);
        assert_eq!(contextual.context(), &fields(json!({"beta": "gamma"})));

        let both = Logger::create(&config, ("alpha", json!({"beta": "gamma"}))).expect("valid");
        assert_eq!(both.name(), Some("alpha"));
        assert_eq!(both.context(), &fields(json!({"beta": "gamma"})));
    }

    #[test]
    fn test_create_misuse_is_synchronous() {
        let config = LogConfig::new();
        assert!(Logger::create(&config, 1_i64).is_err());
        assert!(Logger::create(&config, (json!({}), json!({}))).is_err());
        assert!(Logger::create(&config, ("", "")).is_err());
    }

    #[test]
    fn test_derive_chains_names_and_context() {
        let config = LogConfig::new();
        let l1 = Logger::create(&config, "alpha").expect("valid");
        let l2 = l1.derive("beta").expect("valid");
        let l3 = l2.derive("gamma").expect("valid");
        let l4 = l3.derive(json!({"delta": "epsilon"})).expect("valid");
        let l5 = l4.derive(json!({"delta": "zeta"})).expect("valid");
        let l6 = l5.derive(json!({"eta": "theta"})).expect("valid");

        assert_eq!(l2.name(), Some("alpha:beta"));
        assert_eq!(l3.name(), Some("alpha:beta:gamma"));
        assert_eq!(l4.name(), Some("alpha:beta:gamma"));
        assert_eq!(l4.context(), &fields(json!({"delta": "epsilon"})));
        assert_eq!(l5.context(), &fields(json!({"delta": "zeta"})));
        assert_eq!(l6.context(), &fields(json!({"delta": "zeta", "eta": "theta"})));
    }

    #[test]
    fn test_derive_does_not_mutate_parent() {
        let config = LogConfig::new();
        let parent = Logger::create(&config, ("alpha", json!({"a": 1}))).expect("valid");
        let child = parent
            .derive(("beta", json!({"a": 2, "b": 3})))
            .expect("valid");

        assert_eq!(parent.name(), Some("alpha"));
        assert_eq!(parent.context(), &fields(json!({"a": 1})));
        assert_eq!(child.name(), Some("alpha:beta"));
        assert_eq!(child.context(), &fields(json!({"a": 2, "b": 3})));
    }

    #[test]
    fn test_overlay_keeps_parent_key_positions() {
        let config = LogConfig::new();
        let parent =
            Logger::create(&config, json!({"a": 1, "b": 2, "c": 3})).expect("valid");
        let child = parent.derive(json!({"b": 20, "d": 4})).expect("valid");

        let keys: Vec<&String> = child.context().keys().collect();
        assert_eq!(keys, ["a", "b", "c", "d"]);
        assert_eq!(child.context()["b"], json!(20));
    }

    #[test]
    fn test_empty_name_part_is_dropped() {
        let config = LogConfig::new();
        let root = Logger::create(&config, "").expect("valid");
        assert_eq!(root.name(), None);

        let named = Logger::create(&config, "alpha").expect("valid");
        let child = named.derive("").expect("valid");
        assert_eq!(child.name(), Some("alpha"));
    }
}
