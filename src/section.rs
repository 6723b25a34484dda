use std::collections::HashMap;
use std::collections::hash_map::{Iter, Keys, Values};
use std::fmt;

/// A named group of key/value pairs. Keys are unique; iteration order is unspecified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    name: String,
    pairs: HashMap<String, String>,
}

impl Section {
    #[must_use]
    pub(crate) fn new(name: String, pairs: HashMap<String, String>) -> Self {
        Self { name, pairs }
    }

    /// The bracketed header text, or the empty string for pairs that appeared before any header.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn value(&self, key: &str) -> Option<&str> {
        self.pairs.get(key).map(String::as_str)
    }

    /// Like [`Section::value`], but falls back to `default` when the key is missing.
    #[must_use]
    pub fn value_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.value(key).unwrap_or(default)
    }

    #[must_use]
    pub fn key_exists(&self, key: &str) -> bool {
        self.pairs.contains_key(key)
    }

    #[must_use]
    pub fn value_exists(&self, value: &str) -> bool {
        self.pairs.values().any(|v| v == value)
    }

    #[must_use]
    pub fn keys(&self) -> Keys<'_, String, String> {
        self.pairs.keys()
    }

    #[must_use]
    pub fn values(&self) -> Values<'_, String, String> {
        self.pairs.values()
    }

    #[must_use]
    pub fn iter(&self) -> SectionIter<'_> {
        SectionIter {
            inner: self.pairs.iter(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{}]", self.name)?;

        for (key, value) in self {
            writeln!(f, "{key}={value}")?;
        }

        Ok(())
    }
}

/// Iterator over the `(key, value)` pairs of a [`Section`].
#[derive(Debug, Clone)]
pub struct SectionIter<'a> {
    inner: Iter<'a, String, String>,
}

impl<'a> Iterator for SectionIter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> IntoIterator for &'a Section {
    type Item = (&'a str, &'a str);
    type IntoIter = SectionIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
