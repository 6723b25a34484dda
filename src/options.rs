use encoding_rs::{Encoding, UTF_8};

/// Controls how raw input is decoded and how values are normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Strip one enclosing `'` or `"` from each side of a value.
    pub handle_quotes: bool,
    /// Character encoding used when the input carries no byte order mark.
    pub encoding: &'static Encoding,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            handle_quotes: true,
            encoding: UTF_8,
        }
    }
}

impl ParseOptions {
    #[must_use]
    pub fn with_quotes(mut self, handle_quotes: bool) -> Self {
        self.handle_quotes = handle_quotes;
        self
    }

    #[must_use]
    pub fn with_encoding(mut self, encoding: &'static Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Selects the encoding by its WHATWG label (e.g. `"latin1"`, `"utf-16le"`).
    ///
    /// Returns `None` if the label is unknown.
    #[must_use]
    pub fn with_encoding_label(self, label: &str) -> Option<Self> {
        Encoding::for_label(label.as_bytes()).map(|encoding| self.with_encoding(encoding))
    }
}
