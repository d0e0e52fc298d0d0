//! Gates that turn pre-generated security scan reports into a pass/fail exit status.
//!
//! Reading the report is best-effort: a missing or unparsable report lets the build pass.

#![cfg(feature = "gates")]

use std::{fs, io, path::Path};

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{info, warn};

pub mod bandit;
pub mod safety;

/// Loads a JSON report, or [`None`] if it is absent or cannot be parsed.
pub fn load_report<T: DeserializeOwned>(path: &Path) -> Option<T> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            info!("no {} found; skipping", path.display());
            return None;
        }
        Err(err) => {
            warn!("error reading {}: {err}", path.display());
            return None;
        }
    };

    match serde_json::from_str(&contents) {
        Ok(report) => Some(report),
        Err(err) => {
            warn!("error parsing {}: {err}", path.display());
            None
        }
    }
}

/// Renders a report field for logs: strings as-is, other values as JSON, absent ones as `?`.
pub(crate) fn describe(field: Option<&Value>) -> String {
    match field {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => "?".to_owned(),
        Some(other) => other.to_string(),
    }
}

/// Whether a JSON value counts as present: not null, false, zero or empty.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn describes_fields_of_any_type() {
        assert_eq!(describe(Some(&json!("app.py"))), "app.py");
        assert_eq!(describe(Some(&json!(3))), "3");
        assert_eq!(describe(Some(&Value::Null)), "?");
        assert_eq!(describe(None), "?");
    }

    #[test]
    fn follows_json_truthiness() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!([])));
        assert!(!is_truthy(&json!({})));
        assert!(!is_truthy(&json!(0)));
        assert!(is_truthy(&json!([{}])));
        assert!(is_truthy(&json!({"CVE-1": {}})));
    }
}
