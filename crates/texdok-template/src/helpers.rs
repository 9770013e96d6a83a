//! Template helpers
//!
//! Registered on every [`TemplateRenderer`](crate::TemplateRenderer):
//!
//! - `{{date value "%d %B %Y"}}` formats an RFC 3339 timestamp or a
//!   `YYYY-MM-DD` date; anything unparsable passes through unchanged
//! - `{{default value "fallback"}}` yields `fallback` when `value` is falsy
//! - `{{length value}}` counts array/object entries or string characters

use std::fmt::Write;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use handlebars::{handlebars_helper, Handlebars};
use serde_json::Value;

handlebars_helper!(date_helper: |value: str, format: str| format_date(value, format));

handlebars_helper!(default_helper: |value: Json, fallback: Json| {
    if is_truthy(value) {
        value.clone()
    } else {
        fallback.clone()
    }
});

handlebars_helper!(length_helper: |value: Json| json_length(value));

/// Register all texdok helpers on a registry
pub fn register(registry: &mut Handlebars<'_>) {
    registry.register_helper("date", Box::new(date_helper));
    registry.register_helper("default", Box::new(default_helper));
    registry.register_helper("length", Box::new(length_helper));
}

/// Format a date or timestamp with a strftime pattern
pub fn format_date(value: &str, format: &str) -> String {
    let formatted = if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        write_formatted(dt.format(format))
    } else if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        write_formatted(dt.format(format))
    } else if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        write_formatted(date.format(format))
    } else {
        None
    };
    formatted.unwrap_or_else(|| value.to_string())
}

/// Invalid format strings surface as a `fmt::Error` rather than a panic
fn write_formatted(display: impl std::fmt::Display) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", display).ok()?;
    Some(out)
}

/// Jinja-style truthiness: empty strings, collections, zero, false and null are falsy
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Number of elements in a collection, or characters in a string
pub fn json_length(value: &Value) -> usize {
    match value {
        Value::String(s) => s.chars().count(),
        Value::Array(a) => a.len(),
        Value::Object(o) => o.len(),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_date_variants() {
        assert_eq!(format_date("2024-03-05", "%d.%m.%Y"), "05.03.2024");
        assert_eq!(
            format_date("2024-03-05T10:30:00+01:00", "%H:%M"),
            "10:30"
        );
        assert_eq!(format_date("2024-03-05T10:30:00", "%Y"), "2024");
    }

    #[test]
    fn test_format_date_passthrough() {
        assert_eq!(format_date("yesterday", "%Y"), "yesterday");
    }

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&json!([])));
        assert!(!is_truthy(&json!(0)));
        assert!(is_truthy(&json!("x")));
        assert!(is_truthy(&json!({"a": 1})));
    }

    #[test]
    fn test_json_length() {
        assert_eq!(json_length(&json!([1, 2, 3])), 3);
        assert_eq!(json_length(&json!("héllo")), 5);
        assert_eq!(json_length(&json!(12)), 0);
    }
}
