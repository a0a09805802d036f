use strum::{EnumIter, EnumString, IntoStaticStr};

use crate::Result;

/// Maps the declared name of an enum constant to its external name.
///
/// A strategy is authoritative: when a table is built with one, neither per-constant overrides
/// nor the lowercase feature are applied to its output.
pub trait EnumNamingStrategy: Send + Sync {
    /// Translate `enum_name` into the external name
    ///
    /// # Errors
    /// Implementation specific; forwarded as-is to the caller of the table construction
    fn convert_enum_to_external_name(&self, enum_name: &str) -> Result<String>;
}

impl<F> EnumNamingStrategy for F
where
    F: Fn(&str) -> Result<String> + Send + Sync,
{
    fn convert_enum_to_external_name(&self, enum_name: &str) -> Result<String> {
        self(enum_name)
    }
}

/// Built-in naming strategies.
///
/// All of them split the declared name into words first: on `_`, `-`, `.` and whitespace, on a
/// lowercase letter or digit followed by an uppercase letter, and before the last letter of an
/// uppercase run that is followed by a lowercase letter (`HTTPServer` is `HTTP` + `Server`).
///
/// | Strategy | `SOME_VALUE` | `httpServerError` |
/// |---|---|---|
/// | `LowerCamelCase` | `someValue` | `httpServerError` |
/// | `UpperCamelCase` | `SomeValue` | `HttpServerError` |
/// | `SnakeCase` | `some_value` | `http_server_error` |
/// | `UpperSnakeCase` | `SOME_VALUE` | `HTTP_SERVER_ERROR` |
/// | `KebabCase` | `some-value` | `http-server-error` |
/// | `LowerDotCase` | `some.value` | `http.server.error` |
/// | `LowerCase` | `somevalue` | `httpservererror` |
/// | `UpperCase` | `SOMEVALUE` | `HTTPSERVERERROR` |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum EnumNamingStrategies {
    /// `someValue`
    LowerCamelCase,
    /// `SomeValue`
    UpperCamelCase,
    /// `some_value`
    SnakeCase,
    /// `SOME_VALUE`
    UpperSnakeCase,
    /// `some-value`
    KebabCase,
    /// `some.value`
    LowerDotCase,
    /// `somevalue`
    LowerCase,
    /// `SOMEVALUE`
    UpperCase,
}

impl EnumNamingStrategies {
    /// Apply this strategy; built-in strategies can not fail
    #[must_use]
    pub fn translate(self, enum_name: &str) -> String {
        let words = split_words(enum_name);
        match self {
            EnumNamingStrategies::LowerCamelCase => words
                .iter()
                .enumerate()
                .map(|(index, word)| {
                    if index == 0 {
                        word.to_lowercase()
                    } else {
                        capitalize(word)
                    }
                })
                .collect(),
            EnumNamingStrategies::UpperCamelCase => words.iter().map(|w| capitalize(w)).collect(),
            EnumNamingStrategies::SnakeCase => join_lower(&words, "_"),
            EnumNamingStrategies::UpperSnakeCase => join_upper(&words, "_"),
            EnumNamingStrategies::KebabCase => join_lower(&words, "-"),
            EnumNamingStrategies::LowerDotCase => join_lower(&words, "."),
            EnumNamingStrategies::LowerCase => join_lower(&words, ""),
            EnumNamingStrategies::UpperCase => join_upper(&words, ""),
        }
    }
}

impl EnumNamingStrategy for EnumNamingStrategies {
    fn convert_enum_to_external_name(&self, enum_name: &str) -> Result<String> {
        Ok(self.translate(enum_name))
    }
}

fn is_separator(c: char) -> bool {
    matches!(c, '_' | '-' | '.') || c.is_whitespace()
}

fn split_words(name: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = name.char_indices().collect();
    let mut words = Vec::new();
    let mut start: Option<usize> = None;

    for (pos, &(offset, c)) in chars.iter().enumerate() {
        if is_separator(c) {
            if let Some(begin) = start.take() {
                words.push(&name[begin..offset]);
            }
            continue;
        }

        match start {
            None => start = Some(offset),
            Some(begin) => {
                // start is only set after a non-separator, so pos > 0 here
                let prev = chars[pos - 1].1;
                let next = chars.get(pos + 1).map(|&(_, n)| n);
                let boundary = c.is_uppercase()
                    && (prev.is_lowercase()
                        || prev.is_ascii_digit()
                        || (prev.is_uppercase() && next.is_some_and(char::is_lowercase)));
                if boundary {
                    words.push(&name[begin..offset]);
                    start = Some(offset);
                }
            }
        }
    }

    if let Some(begin) = start {
        words.push(&name[begin..]);
    }
    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

fn join_lower(words: &[&str], separator: &str) -> String {
    words
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join(separator)
}

fn join_upper(words: &[&str], separator: &str) -> String {
    words
        .iter()
        .map(|w| w.to_uppercase())
        .collect::<Vec<_>>()
        .join(separator)
}
