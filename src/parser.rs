use std::collections::HashMap;
use std::mem;

use crate::document::Document;
use crate::options::ParseOptions;
use crate::section::Section;
use crate::util::strip_quotes;

/// How a single line takes part in segmentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    Blank,
    Comment,
    Header,
    Content,
}

/// Segmenter state. `SeekHeader` means nothing has been accumulated yet, so a header line opens
/// the current block instead of closing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    SeekHeader,
    InBlock,
}

/// A header line together with the content lines that follow it. Blank and comment lines are
/// never part of a block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Block<'a> {
    header: Option<&'a str>,
    lines: Vec<&'a str>,
}

impl<'a> Block<'a> {
    fn with_header(header: &'a str) -> Self {
        Self {
            header: Some(header),
            lines: Vec::with_capacity(16),
        }
    }
}

/// Represents an on-going parse.
#[derive(Debug, Clone)]
pub struct Parser<'a> {
    lines: &'a [String],
    options: ParseOptions,
}

impl<'a> Parser<'a> {
    #[must_use]
    pub fn new(lines: &'a [String], options: ParseOptions) -> Self {
        Self { lines, options }
    }
}

impl<'a> Parser<'a> {
    /// Run both stages: split the lines into blocks, then decode every block into a section.
    /// A later section with the same name replaces the earlier one.
    #[must_use]
    pub fn into_document(self) -> Document {
        let blocks = self.segment();
        let mut sections = HashMap::<String, Section>::with_capacity(blocks.len());

        for block in &blocks {
            let section = decode_block(block, self.options.handle_quotes);
            log::trace!(
                "decoded section {:?} with {} pairs",
                section.name(),
                section.len()
            );

            if let Some(previous) = sections.insert(section.name().to_owned(), section) {
                log::debug!(
                    "section {:?} is declared more than once; dropping {} earlier pairs",
                    previous.name(),
                    previous.len()
                );
            }
        }

        log::debug!(
            "parsed {} lines into {} sections",
            self.lines.len(),
            sections.len()
        );

        Document::new(sections)
    }

    fn segment(&self) -> Vec<Block<'a>> {
        let mut blocks = Vec::<Block<'a>>::with_capacity(16);
        let mut current = Block::default();
        let mut state = State::SeekHeader;

        for line in self.lines.iter().map(String::as_str) {
            match (classify(line), state) {
                (LineKind::Blank | LineKind::Comment, _) => {}
                (LineKind::Header, State::SeekHeader) => {
                    current.header = Some(line);
                    state = State::InBlock;
                }
                (LineKind::Header, State::InBlock) => {
                    blocks.push(mem::replace(&mut current, Block::with_header(line)));
                }
                (LineKind::Content, _) => {
                    current.lines.push(line);
                    state = State::InBlock;
                }
            }
        }

        if state == State::InBlock {
            blocks.push(current);
        }

        blocks
    }
}

fn classify(line: &str) -> LineKind {
    let trimmed = line.trim_start();

    match trimmed.chars().next() {
        None => LineKind::Blank,
        Some('#' | ';') => LineKind::Comment,
        Some('[') if is_header(trimmed) => LineKind::Header,
        Some('[') => {
            log::warn!("malformed section header, reading it as content: {line:?}");
            LineKind::Content
        }
        Some(_) => LineKind::Content,
    }
}

/// `[`, at least one character, then a `]` anywhere after it. Trailing text is allowed.
fn is_header(trimmed: &str) -> bool {
    trimmed
        .strip_prefix('[')
        .is_some_and(|rest| rest.char_indices().skip(1).any(|(_, c)| c == ']'))
}

fn decode_block(block: &Block<'_>, handle_quotes: bool) -> Section {
    let name = block.header.map_or("", section_name);
    let mut pairs = HashMap::<String, String>::with_capacity(block.lines.len());

    // The header line is not in `lines`, so it can never turn into a key.
    for &line in &block.lines {
        match parse_pair(line, handle_quotes) {
            Some((key, value)) => {
                _ = pairs.insert(key.to_owned(), value.to_owned());
            }
            None => log::trace!("section {name:?}: ignoring line without a key: {line:?}"),
        }
    }

    Section::new(name.to_owned(), pairs)
}

/// Text between the first `[` and the first `]` after it, trimmed. Only called on lines that
/// [`is_header`] accepted.
fn section_name(header: &str) -> &str {
    header
        .split_once('[')
        .and_then(|(_, rest)| rest.split_once(']'))
        .map_or("", |(name, _)| name.trim())
}

/// Split a line at its first `=`. Lines without `=` or with an empty key are not pairs.
fn parse_pair(line: &str, handle_quotes: bool) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    let key = key.trim();

    if key.is_empty() {
        return None;
    }

    let value = value.trim();
    let value = if handle_quotes {
        strip_quotes(value)
    } else {
        value
    };

    Some((key, value))
}
