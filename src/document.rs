use std::collections::HashMap;
use std::collections::hash_map::Values;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::options::ParseOptions;
use crate::parser::Parser;
use crate::section::Section;
use crate::util::split_lines;

/// The result of one parse: every section, keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    sections: HashMap<String, Section>,
}

impl Document {
    #[must_use]
    pub(crate) fn new(sections: HashMap<String, Section>) -> Self {
        Self { sections }
    }

    /// Parse text that has already been decoded.
    #[must_use]
    pub fn parse(text: &str, options: &ParseOptions) -> Self {
        Self::from_lines(&split_lines(text), options)
    }

    #[must_use]
    pub(crate) fn from_lines(lines: &[String], options: &ParseOptions) -> Self {
        Parser::new(lines, *options).into_document()
    }

    #[must_use]
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    #[must_use]
    pub fn section_exists(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    #[must_use]
    pub fn sections(&self) -> Values<'_, String, Section> {
        self.sections.values()
    }

    #[must_use]
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl FromStr for Document {
    type Err = Infallible;

    /// Parse with [`ParseOptions::default`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s, &ParseOptions::default()))
    }
}

/// Renders each section followed by a blank line. Comments, blank-line positions and ordering
/// from the input are not preserved.
impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for section in self.sections() {
            writeln!(f, "{section}")?;
        }

        Ok(())
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Section;
    type IntoIter = Values<'a, String, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections()
    }
}
