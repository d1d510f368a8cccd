//! Shared text normalization helpers for behavioural test suites.

use super_compose::Value;

/// Strips one layer of matching single or double quotes from a value.
#[must_use]
pub fn unquote(value: &str) -> &str {
    let trimmed = value.trim();
    if let Some(stripped) = trimmed.strip_prefix('"').and_then(|v| v.strip_suffix('"')) {
        return stripped;
    }
    if let Some(stripped) = trimmed
        .strip_prefix('\'')
        .and_then(|v| v.strip_suffix('\''))
    {
        return stripped;
    }
    trimmed
}

/// Normalizes a scalar placeholder by trimming and unquoting one outer layer.
#[must_use]
pub fn normalize_scalar(value: &str) -> String {
    unquote(value).trim().to_owned()
}

/// Interprets a step placeholder as an attribute value.
///
/// Text that parses as JSON (`[1, 2]`, `{"A": 1}`, `0`, `null`) becomes the
/// corresponding value; anything else is treated as a string after one
/// layer of quotes is removed.
#[must_use]
pub fn parse_value(value: &str) -> Value {
    let trimmed = value.trim();
    serde_json::from_str::<serde_json::Value>(trimmed)
        .map_or_else(|_| Value::from(normalize_scalar(trimmed)), Value::from)
}

/// Splits a comma separated placeholder into trimmed, unquoted names.
#[must_use]
pub fn parse_names(value: &str) -> Vec<String> {
    unquote(value)
        .split(',')
        .map(normalize_scalar)
        .filter(|name| !name.is_empty())
        .collect()
}
