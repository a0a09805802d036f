use std::{
    fmt::{self, Write},
    hash::{Hash, Hasher},
    sync::{Arc, OnceLock},
};

use serde::{Serialize, Serializer};

struct SerializedInner {
    value: Box<str>,
    quoted: OnceLock<Box<str>>,
}

/// An external token in compiled form.
///
/// Holds the raw text of the token and, once requested, its JSON-escaped form (without the
/// surrounding quotes). The escaped form is computed on first use and reused afterwards, so a
/// token that is written many times pays the escaping cost once. Clones share the same
/// storage.
///
/// Equality and hashing only consider the raw value.
#[derive(Clone)]
pub struct SerializedString {
    inner: Arc<SerializedInner>,
}

impl SerializedString {
    /// Create a new token from its raw text
    pub fn new(value: impl Into<Box<str>>) -> Self {
        SerializedString {
            inner: Arc::new(SerializedInner {
                value: value.into(),
                quoted: OnceLock::new(),
            }),
        }
    }

    /// The raw, unescaped text of this token
    #[must_use]
    pub fn value(&self) -> &str {
        &self.inner.value
    }

    /// Number of characters (not bytes) of the raw text
    #[must_use]
    pub fn char_length(&self) -> usize {
        self.inner.value.chars().count()
    }

    /// The JSON-escaped form of this token, without surrounding quotes
    #[must_use]
    pub fn as_quoted(&self) -> &str {
        self.inner
            .quoted
            .get_or_init(|| escape_json(&self.inner.value).into_boxed_str())
    }

    /// UTF-8 bytes of the escaped form
    #[must_use]
    pub fn as_quoted_utf8(&self) -> &[u8] {
        self.as_quoted().as_bytes()
    }

    /// UTF-8 bytes of the raw text
    #[must_use]
    pub fn as_unquoted_utf8(&self) -> &[u8] {
        self.inner.value.as_bytes()
    }

    /// Append the escaped form to `out`, returning the number of bytes written
    pub fn append_quoted(&self, out: &mut String) -> usize {
        let quoted = self.as_quoted();
        out.push_str(quoted);
        quoted.len()
    }

    /// Returns true if both tokens share the same storage
    #[must_use]
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Arc::ptr_eq(&this.inner, &other.inner)
    }
}

fn escape_json(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len() + 2);
    for c in raw.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            '\u{08}' => escaped.push_str("\\b"),
            '\u{0C}' => escaped.push_str("\\f"),
            c if (c as u32) < 0x20 => {
                // Writing to a String is infallible
                let _ = write!(escaped, "\\u{:04X}", c as u32);
            }
            c => escaped.push(c),
        }
    }
    escaped
}

impl PartialEq for SerializedString {
    fn eq(&self, other: &Self) -> bool {
        self.inner.value == other.inner.value
    }
}

impl Eq for SerializedString {}

impl PartialEq<str> for SerializedString {
    fn eq(&self, other: &str) -> bool {
        &*self.inner.value == other
    }
}

impl PartialEq<&str> for SerializedString {
    fn eq(&self, other: &&str) -> bool {
        &*self.inner.value == *other
    }
}

impl Hash for SerializedString {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.value.hash(state);
    }
}

impl AsRef<str> for SerializedString {
    fn as_ref(&self) -> &str {
        self.value()
    }
}

impl From<&str> for SerializedString {
    fn from(value: &str) -> Self {
        SerializedString::new(value)
    }
}

impl From<String> for SerializedString {
    fn from(value: String) -> Self {
        SerializedString::new(value)
    }
}

impl fmt::Display for SerializedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner.value)
    }
}

impl fmt::Debug for SerializedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SerializedString({:?})", self.inner.value)
    }
}

impl Serialize for SerializedString {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.inner.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_value_is_unchanged() {
        let token = SerializedString::new("green");
        assert_eq!(token.value(), "green");
        assert_eq!(token.as_quoted(), "green");
        assert_eq!(token.as_unquoted_utf8(), b"green");
        assert_eq!(token.char_length(), 5);
        assert_eq!(token, "green");
    }

    #[test]
    fn escapes_json_specials() {
        let token = SerializedString::new("a\"b\\c\nd\u{1}");
        assert_eq!(token.as_quoted(), "a\\\"b\\\\c\\nd\\u0001");
        assert_eq!(token.as_quoted_utf8(), b"a\\\"b\\\\c\\nd\\u0001");

        let mut out = String::from("\"");
        let written = token.append_quoted(&mut out);
        out.push('"');
        assert_eq!(written, token.as_quoted().len());
        assert_eq!(out, "\"a\\\"b\\\\c\\nd\\u0001\"");
    }

    #[test]
    fn char_length_counts_characters() {
        let token = SerializedString::new("grün");
        assert_eq!(token.char_length(), 4);
        assert_eq!(token.as_unquoted_utf8().len(), 5);
    }

    #[test]
    fn quoted_form_is_cached() {
        let token = SerializedString::new("tab\there");
        let first = token.as_quoted().as_ptr();
        let clone = token.clone();
        assert_eq!(clone.as_quoted().as_ptr(), first);
        assert!(SerializedString::ptr_eq(&token, &clone));
    }

    #[test]
    fn equality_ignores_storage() {
        let a = SerializedString::new("x");
        let b = SerializedString::from("x".to_string());
        assert_eq!(a, b);
        assert!(!SerializedString::ptr_eq(&a, &b));
        assert_eq!(format!("{a}"), "x");
        assert_eq!(format!("{a:?}"), "SerializedString(\"x\")");
    }
}
