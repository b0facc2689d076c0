//! Ordered, duplicate-free attribute map for HTML elements

use indexmap::IndexMap;
use smallvec::SmallVec;
use swt_templates::filters::html_escape;

type Values = SmallVec<[String; 2]>;

/// Attributes holding the id of another element; markup needs a selector.
const ID_REFERENCE_ATTRIBUTES: &[&str] = &["data-target", "data-parent"];

/// Attribute name -> ordered list of values.
///
/// Names keep their first-insertion order and every value list is
/// duplicate-free in first-seen order, so output is deterministic. Flags set
/// with [`Attributes::set_flag`] render as bare boolean attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: IndexMap<String, Values>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append each value not yet present for `name`, creating the entry if
    /// needed. Idempotent for values already present; an empty `values`
    /// leaves the map untouched (use [`Attributes::set_flag`] for boolean
    /// attributes).
    pub fn update<I, V>(&mut self, name: &str, values: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let mut values = values.into_iter().peekable();
        if values.peek().is_none() {
            return;
        }
        let entry = self.entries.entry(name.to_string()).or_default();
        for value in values {
            let value = value.into();
            if !entry.contains(&value) {
                entry.push(value);
            }
        }
    }

    /// Add a valueless attribute such as `disabled`.
    pub fn set_flag(&mut self, name: &str) {
        self.entries.entry(name.to_string()).or_default();
    }

    /// [`Attributes::update`] for every pair of `mapping`, in mapping order.
    pub fn update_all<I, K, V, S>(&mut self, mapping: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for (name, values) in mapping {
            self.update(name.as_ref(), values);
        }
    }

    /// Replace all values of `name` with a single value.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let mut values = Values::new();
        values.push(value.into());
        self.entries.insert(name.to_string(), values);
    }

    /// Swap one value for another, keeping the position of `old` if present.
    pub fn replace_value(&mut self, name: &str, old: Option<&str>, new: &str) {
        if let Some(values) = self.entries.get_mut(name) {
            if let Some(pos) = old.and_then(|old| values.iter().position(|v| v == old)) {
                values.remove(pos);
                if !values.iter().any(|v| v == new) {
                    values.insert(pos, new.to_string());
                }
                return;
            }
        }
        self.update(name, [new]);
    }

    pub fn remove(&mut self, name: &str) -> Option<Vec<String>> {
        self.entries.shift_remove(name).map(|v| v.into_vec())
    }

    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.entries.get(name).map(|v| v.as_slice())
    }

    /// First value of `name`; the natural accessor for single-valued
    /// attributes like `id` and `href`.
    pub fn first(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(|v| v.first()).map(String::as_str)
    }

    pub fn contains(&self, name: &str, value: &str) -> bool {
        self.get(name).is_some_and(|values| values.iter().any(|v| v == value))
    }

    pub fn has(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize as ` name="v1 v2" flag` (each attribute prefixed by a space).
    ///
    /// Bare ids stored in `data-target`/`data-parent` are written as `#id`
    /// selectors; values that already are selectors are left alone.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for (name, values) in &self.entries {
            out.push(' ');
            out.push_str(name);
            if values.is_empty() {
                continue;
            }
            let joined = if ID_REFERENCE_ATTRIBUTES.contains(&name.as_str()) {
                values
                    .iter()
                    .map(|v| as_selector(v))
                    .collect::<Vec<_>>()
                    .join(" ")
            } else {
                values.join(" ")
            };
            out.push_str("=\"");
            out.push_str(&html_escape(&joined));
            out.push('"');
        }
        out
    }
}

fn as_selector(value: &str) -> String {
    if value.starts_with(['#', '.', '[']) {
        value.to_string()
    } else {
        format!("#{value}")
    }
}

impl<K, V, S> FromIterator<(K, V)> for Attributes
where
    K: AsRef<str>,
    V: IntoIterator<Item = S>,
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut attrs = Attributes::new();
        attrs.update_all(iter);
        attrs
    }
}
