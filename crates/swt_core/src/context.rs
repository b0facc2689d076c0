//! Template context: the variables a template sees while rendering

use crate::{SafeString, Value};
use ahash::{AHashMap, AHashSet};
use std::collections::HashMap;

/// Variables available to a template, plus the set of keys whose values are
/// trusted markup and must not be auto-escaped.
#[derive(Debug, Clone, Default)]
pub struct Context {
    values: AHashMap<String, Value>,
    safe_keys: AHashSet<String>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_dict(dict: HashMap<String, Value>) -> Self {
        Self {
            values: dict.into_iter().collect(),
            safe_keys: AHashSet::new(),
        }
    }

    /// Resolve a variable, following dotted paths (`card.header.id`).
    pub fn get(&self, path: &str) -> Option<&Value> {
        let mut parts = path.split('.');
        let first = parts.next()?;
        let mut current = self.values.get(first)?;
        for part in parts {
            current = current.get_attr(part)?;
        }
        Some(current)
    }

    /// Store a plain value; a safe mark left on `key` is cleared.
    pub fn set(&mut self, key: String, value: Value) {
        self.safe_keys.remove(&key);
        self.values.insert(key, value);
    }

    /// Builder form of [`Context::set`].
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.set(key.to_string(), value.into());
        self
    }

    /// Store trusted markup; the renderer outputs it without escaping.
    pub fn set_safe(&mut self, key: String, markup: SafeString) {
        self.safe_keys.insert(key.clone());
        self.values.insert(key, Value::String(markup.into_string()));
    }

    /// Builder form of [`Context::set_safe`].
    pub fn with_safe(mut self, key: &str, markup: impl Into<SafeString>) -> Self {
        self.set_safe(key.to_string(), markup.into());
        self
    }

    pub fn mark_safe(&mut self, key: &str) {
        self.safe_keys.insert(key.to_string());
    }

    pub fn is_safe(&self, key: &str) -> bool {
        self.safe_keys.contains(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn to_hashmap(&self) -> HashMap<String, Value> {
        self.values
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dotted_lookup() {
        let mut header = HashMap::new();
        header.insert("id".to_string(), Value::String("id_1".to_string()));
        let mut card = HashMap::new();
        card.insert("header".to_string(), Value::Object(header));

        let mut context = Context::new();
        context.set("card".to_string(), Value::Object(card));

        assert_eq!(
            context.get("card.header.id"),
            Some(&Value::String("id_1".to_string()))
        );
        assert!(context.get("card.footer").is_none());
        assert!(context.get("missing").is_none());
    }

    #[test]
    fn test_safe_keys() {
        let context = Context::new()
            .with("title", "plain")
            .with_safe("body", "<b>bold</b>");

        assert!(context.is_safe("body"));
        assert!(!context.is_safe("title"));
        assert_eq!(context.get("body").map(ToString::to_string).as_deref(), Some("<b>bold</b>"));
    }

    #[test]
    fn test_plain_set_clears_safe_mark() {
        let mut context = Context::new().with_safe("body", "<b>bold</b>");
        context.set("body".to_string(), Value::String("<i>".to_string()));
        assert!(!context.is_safe("body"));
    }
}
