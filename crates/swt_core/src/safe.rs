//! Markup that has already been rendered and must not be escaped again

use std::fmt;
use std::ops::{Add, Deref};

/// Rendered markup trusted by the template layer.
///
/// Carries exactly the same characters as the plain `String` rendering of a
/// component; the type only tells downstream code not to re-escape it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SafeString(String);

impl SafeString {
    pub fn new(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Deref for SafeString {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SafeString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for SafeString {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for SafeString {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<SafeString> for String {
    fn from(s: SafeString) -> Self {
        s.0
    }
}

/// Concatenating trusted markup keeps it trusted.
impl Add<&SafeString> for SafeString {
    type Output = SafeString;

    fn add(mut self, other: &SafeString) -> SafeString {
        self.0.push_str(&other.0);
        self
    }
}

/// Mixing in arbitrary text yields a plain `String`.
impl Add<&str> for SafeString {
    type Output = String;

    fn add(self, other: &str) -> String {
        self.0 + other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_content_as_plain_string() {
        let safe = SafeString::new("<span>x</span>");
        assert_eq!(safe.as_str(), "<span>x</span>");
        assert_eq!(String::from(safe.clone()), "<span>x</span>");
        assert_eq!(safe.to_string(), "<span>x</span>");
    }

    #[test]
    fn test_concatenation() {
        let a = SafeString::new("<a>");
        let b = SafeString::new("</a>");
        assert_eq!(a.clone() + &b, SafeString::new("<a></a>"));
        assert_eq!(a + "text", "<a>text".to_string());
    }
}
