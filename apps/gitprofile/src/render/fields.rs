//! Field Accessor — safe dotted-path lookup into semi-structured resume JSON.
//!
//! The structuring model returns a loosely shaped data bag. Everything that
//! reads it goes through this module instead of hand-rolled null checks:
//! absent intermediate keys, `null` leaves, and empty-string leaves all
//! resolve to the caller's default. Only paths declared required (currently
//! just the person's name) produce an error.

use serde_json::Value;

use crate::errors::ProfileError;

/// Walks a dotted path from `root`. Returns `None` when any intermediate
/// key is absent, or when the leaf is `null` or an empty string.
pub fn lookup<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = root;
    for key in path.split('.') {
        current = current.get(key)?;
    }
    match current {
        Value::Null => None,
        Value::String(s) if s.trim().is_empty() => None,
        other => Some(other),
    }
}

/// String at `path`, trimmed, or `None` when absent/empty/not a string.
pub fn string_opt(root: &Value, path: &str) -> Option<String> {
    lookup(root, path)
        .and_then(Value::as_str)
        .map(|s| s.trim().to_string())
}

/// String at `path`, or `default` when absent.
pub fn string_or(root: &Value, path: &str, default: &str) -> String {
    string_opt(root, path).unwrap_or_else(|| default.to_string())
}

/// Scalar at `path` stringified. Numbers are common where the model returns
/// graduation years or durations unquoted.
pub fn scalar_or(root: &Value, path: &str, default: &str) -> String {
    match lookup(root, path) {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        _ => default.to_string(),
    }
}

/// String elements of the array at `path`; empty when absent or not an
/// array. Non-string elements are skipped.
pub fn string_list(root: &Value, path: &str) -> Vec<String> {
    lookup(root, path)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

/// Object elements of the array at `path`; empty when absent.
pub fn objects<'a>(root: &'a Value, path: &str) -> Vec<&'a Value> {
    lookup(root, path)
        .and_then(Value::as_array)
        .map(|items| items.iter().filter(|v| v.is_object()).collect())
        .unwrap_or_default()
}

/// String at `path`, required. Fails with `MissingRequiredField` when the
/// path is absent or empty.
pub fn require_str(root: &Value, path: &str) -> Result<String, ProfileError> {
    string_opt(root, path).ok_or_else(|| ProfileError::MissingRequiredField {
        path: path.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "personal_info": {
                "name": "Ada Lovelace",
                "email": null,
                "location": "  "
            },
            "skills": {
                "technical_skills": ["Rust", "", "SQL", 42]
            },
            "education": [{"degree": "BSc"}, "stray string"]
        })
    }

    #[test]
    fn test_lookup_walks_nested_paths() {
        let root = sample();
        assert_eq!(
            lookup(&root, "personal_info.name").and_then(Value::as_str),
            Some("Ada Lovelace")
        );
    }

    #[test]
    fn test_lookup_treats_null_and_blank_leaves_as_absent() {
        let root = sample();
        assert!(lookup(&root, "personal_info.email").is_none());
        assert!(lookup(&root, "personal_info.location").is_none());
        assert!(lookup(&root, "personal_info.phone").is_none());
        assert!(lookup(&root, "no.such.path").is_none());
    }

    #[test]
    fn test_string_or_falls_back_to_default() {
        let root = sample();
        assert_eq!(string_or(&root, "personal_info.phone", "n/a"), "n/a");
        assert_eq!(
            string_or(&root, "personal_info.name", "n/a"),
            "Ada Lovelace"
        );
    }

    #[test]
    fn test_scalar_or_stringifies_numbers() {
        let root = json!({"education": {"graduation_year": 2021}});
        assert_eq!(scalar_or(&root, "education.graduation_year", ""), "2021");
    }

    #[test]
    fn test_string_list_skips_non_strings_and_blanks() {
        let root = sample();
        assert_eq!(
            string_list(&root, "skills.technical_skills"),
            vec!["Rust".to_string(), "SQL".to_string()]
        );
        assert!(string_list(&root, "skills.soft_skills").is_empty());
    }

    #[test]
    fn test_objects_keeps_only_object_elements() {
        let root = sample();
        assert_eq!(objects(&root, "education").len(), 1);
        assert!(objects(&root, "certifications").is_empty());
    }

    #[test]
    fn test_require_str_errors_on_absent_path() {
        let root = sample();
        let err = require_str(&root, "personal_info.phone").unwrap_err();
        assert!(matches!(
            err,
            ProfileError::MissingRequiredField { path } if path == "personal_info.phone"
        ));
    }
}
