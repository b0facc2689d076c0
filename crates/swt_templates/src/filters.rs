//! Built-in template filters

use once_cell::sync::Lazy;
use regex::Regex;
use swt_core::{Result, SwtError, Value};

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Filters whose output is already markup and must not be auto-escaped.
pub const SAFE_OUTPUT_FILTERS: &[&str] = &["safe", "force_escape"];

/// Escape text for HTML element content and quoted attribute values.
pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn apply_filter(name: &str, value: &Value, arg: Option<&str>) -> Result<Value> {
    match name {
        // Auto-escaping handles `escape`; `safe` only changes how the result is emitted
        "safe" | "escape" => Ok(value.clone()),
        "force_escape" => Ok(Value::String(html_escape(&value.to_string()))),
        "default" => {
            if value.is_truthy() {
                Ok(value.clone())
            } else {
                Ok(Value::String(arg.unwrap_or_default().to_string()))
            }
        }
        "join" => match value {
            Value::List(items) => {
                let sep = arg.unwrap_or("");
                let joined = items
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(sep);
                Ok(Value::String(joined))
            }
            other => Ok(other.clone()),
        },
        "length" => {
            let len = match value {
                Value::List(items) => items.len(),
                Value::Object(map) => map.len(),
                Value::String(s) => s.chars().count(),
                _ => 0,
            };
            Ok(Value::Integer(len as i64))
        }
        "lower" => Ok(Value::String(value.to_string().to_lowercase())),
        "upper" => Ok(Value::String(value.to_string().to_uppercase())),
        "yesno" => {
            let choices: Vec<&str> = arg.unwrap_or("yes,no,maybe").split(',').collect();
            if choices.len() < 2 {
                return Err(SwtError::TemplateError(format!(
                    "yesno filter needs at least two choices, got '{}'",
                    arg.unwrap_or_default()
                )));
            }
            let choice = match value {
                Value::Null if choices.len() > 2 => choices[2],
                v if v.is_truthy() => choices[0],
                _ => choices[1],
            };
            Ok(Value::String(choice.to_string()))
        }
        "striptags" => Ok(Value::String(
            TAG_RE.replace_all(&value.to_string(), "").into_owned(),
        )),
        "add" => {
            let arg = arg.unwrap_or_default();
            // Overflowing sums fall back to concatenation, as non-numbers do
            let sum = match (value, arg.parse::<i64>()) {
                (Value::Integer(i), Ok(n)) => i.checked_add(n),
                (Value::String(s), Ok(n)) => s.parse::<i64>().ok().and_then(|i| i.checked_add(n)),
                _ => None,
            };
            match sum {
                Some(total) => Ok(Value::Integer(total)),
                None => Ok(Value::String(format!("{value}{arg}"))),
            }
        }
        _ => Err(SwtError::TemplateError(format!("Unknown filter: {name}"))),
    }
}
