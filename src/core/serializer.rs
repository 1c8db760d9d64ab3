//! Total JSON line serialization
//!
//! Serializing a record must always produce one valid line: keys stay in
//! insertion order, subtrees nested past the depth cap are replaced with a
//! placeholder instead of risking unbounded recursion, and a `serde_json`
//! failure degrades to a handwritten error line rather than propagating.

use super::arg::Fields;
use serde_json::Value;

/// Nesting depth at which subtrees are elided.
const MAX_DEPTH: usize = 64;

/// Placeholder written in place of an over-deep subtree.
pub const ELIDED: &str = "[Elided]";

/// Serialize a record to one newline-terminated JSON line.
///
/// This function cannot fail; see the module docs for how the failure
/// modes degrade.
#[must_use]
pub fn to_line(record: &Fields) -> String {
    let bounded = bound(&Value::Object(record.clone()), 0);
    match serde_json::to_string(&bounded) {
        Ok(mut line) => {
            line.push('\n');
            line
        }
        Err(_) => fallback_line(),
    }
}

/// Clamp a value tree to `MAX_DEPTH`, eliding anything deeper.
fn bound(value: &Value, depth: usize) -> Value {
    if depth >= MAX_DEPTH {
        return Value::String(ELIDED.to_owned());
    }
    match value {
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, nested)| (key.clone(), bound(nested, depth + 1)))
                .collect(),
        ),
        Value::Array(items) => {
            Value::Array(items.iter().map(|item| bound(item, depth + 1)).collect())
        }
        other => other.clone(),
    }
}

fn fallback_line() -> String {
    concat!(
        "{\"severity\":\"error\",\"err\":{\"name\":\"SerializeError\",",
        "\"message\":\"record could not be serialized\",",
        "\"stack\":\"SerializeError: record could not be serialized\"}}\n"
    )
    .to_owned()
}
