use serde::{Deserialize, Serialize};

/// One unit of a tokenized search query.
///
/// The tokenizer runs upstream of this crate. Its contract: a leading `-`
/// sets `negated`, `key:value` syntax sets `key`, plain text has no key,
/// and quoting keeps embedded separators inside `value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub key: Option<String>,
    pub value: String,
    pub negated: bool,
}

impl Token {
    /// A keyless token, e.g. the `landscape` in `landscape tag_count:3..`.
    pub fn plain(value: impl Into<String>) -> Self {
        Self {
            key: None,
            value: value.into(),
            negated: false,
        }
    }

    /// A `key:value` token.
    pub fn named(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            value: value.into(),
            negated: false,
        }
    }

    /// Marks the token negated, as the tokenizer does for a `-` prefix.
    pub fn negate(mut self) -> Self {
        self.negated = true;
        self
    }
}
