//! Rendering of loosely-typed JSON values into display strings

use finex_domain::cell::is_not_available;
use finex_domain::{NOT_AVAILABLE, NOT_MENTIONED};
use serde_json::Value;

/// Render a per-period value; absent data collapses to `N/A`
pub(crate) fn render_cell(value: &Value) -> String {
    match value {
        Value::Null => NOT_AVAILABLE.to_string(),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() || is_not_available(trimmed) {
                NOT_AVAILABLE.to_string()
            } else {
                trimmed.to_string()
            }
        }
        other => other.to_string(),
    }
}

/// Render a free-text note; absent notes are empty
pub(crate) fn render_notes(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.trim().to_string(),
        Some(other) => other.to_string(),
    }
}

/// A per-period value list; a scalar becomes a one-element list
pub(crate) fn cell_values(value: Option<&Value>) -> Vec<String> {
    match value {
        None => Vec::new(),
        Some(Value::Array(items)) => items.iter().map(render_cell).collect(),
        Some(scalar) => vec![render_cell(scalar)],
    }
}

/// Period labels, one per entry; blank or null entries are `None`
pub(crate) fn labels(value: Option<&Value>) -> Vec<Option<String>> {
    let items: Vec<&Value> = match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.iter().collect(),
        Some(scalar) => vec![scalar],
    };

    items
        .into_iter()
        .map(|item| match item {
            Value::Null => None,
            Value::String(s) if s.trim().is_empty() => None,
            Value::String(s) => Some(s.trim().to_string()),
            other => Some(other.to_string()),
        })
        .collect()
}

/// Render a text field; absent or blank becomes `Not mentioned`
pub(crate) fn render_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => NOT_MENTIONED.to_string(),
        Some(Value::String(s)) if s.trim().is_empty() => NOT_MENTIONED.to_string(),
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Array(_)) => {
            let items = coerce_list(value);
            items.join("; ")
        }
        Some(other) => other.to_string(),
    }
}

/// Coerce a list field
///
/// A bare string becomes a one-element list; an absent, null or empty value
/// becomes `["Not mentioned"]`. Blank and null entries are dropped.
pub(crate) fn coerce_list(value: Option<&Value>) -> Vec<String> {
    let items: Vec<String> = match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Vec::new()
            } else {
                vec![trimmed.to_string()]
            }
        }
        Some(Value::Array(entries)) => entries
            .iter()
            .filter_map(|entry| match entry {
                Value::Null => None,
                Value::String(s) if s.trim().is_empty() => None,
                Value::String(s) => Some(s.trim().to_string()),
                other => Some(other.to_string()),
            })
            .collect(),
        Some(other) => vec![other.to_string()],
    };

    if items.is_empty() {
        vec![NOT_MENTIONED.to_string()]
    } else {
        items
    }
}
