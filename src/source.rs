//! Input collaborators that supply decoded lines to the parser.

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

use encoding_rs::Encoding;

use crate::error::{Error, Result};
use crate::util::{decode_bytes, split_lines};

/// Something that yields decoded text lines and may be able to start over.
pub trait Source: Send {
    /// Read everything that remains and return it as lines without terminators.
    fn read_lines(&mut self, encoding: &'static Encoding) -> Result<Vec<String>>;

    /// Move back to the beginning so the next [`Source::read_lines`] returns the whole input again.
    fn rewind(&mut self) -> Result<()> {
        Err(Error::ReloadUnsupported)
    }
}

/// Text that is already in memory.
#[derive(Debug, Clone)]
pub struct TextSource {
    text: String,
}

impl TextSource {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Source for TextSource {
    fn read_lines(&mut self, _encoding: &'static Encoding) -> Result<Vec<String>> {
        Ok(split_lines(&self.text))
    }

    fn rewind(&mut self) -> Result<()> {
        Ok(())
    }
}

/// A byte stream that can only be read once.
#[derive(Debug)]
pub struct StreamSource<R> {
    reader: R,
}

impl<R> StreamSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: Read + Send> Source for StreamSource<R> {
    fn read_lines(&mut self, encoding: &'static Encoding) -> Result<Vec<String>> {
        read_all_lines(&mut self.reader, encoding)
    }
}

/// A byte stream that rewinds by seeking to offset zero.
#[derive(Debug)]
pub struct SeekableSource<R> {
    reader: R,
}

impl<R> SeekableSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl SeekableSource<File> {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("opening {}", path.display());

        Ok(Self::new(File::open(path)?))
    }
}

impl<R: Read + Seek + Send> Source for SeekableSource<R> {
    fn read_lines(&mut self, encoding: &'static Encoding) -> Result<Vec<String>> {
        read_all_lines(&mut self.reader, encoding)
    }

    fn rewind(&mut self) -> Result<()> {
        _ = self.reader.seek(SeekFrom::Start(0))?;
        Ok(())
    }
}

fn read_all_lines<R: Read>(reader: &mut R, encoding: &'static Encoding) -> Result<Vec<String>> {
    let mut buffer = Vec::with_capacity(4096);
    _ = reader.read_to_end(&mut buffer)?;

    let text = decode_bytes(&buffer, encoding);
    Ok(split_lines(&text))
}
