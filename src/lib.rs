#![warn(
    clippy::correctness,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::style,
    clippy::pedantic
)]

//! Parse INI-style text into named sections of key/value strings.
//!
//! ```
//! use inidoc::Document;
//!
//! let document: Document = "[server]\nhost = \"localhost\"\n".parse().unwrap();
//! assert_eq!(document.section("server").and_then(|s| s.value("host")), Some("localhost"));
//! ```

mod document;
mod error;
mod options;
mod parser;
mod section;
pub mod source;
mod util;

use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;
use std::sync::{Arc, Mutex, RwLock};

pub use document::Document;
pub use error::{Error, Result};
pub use options::ParseOptions;
pub use section::{Section, SectionIter};

use source::{SeekableSource, Source, StreamSource};

/// A parsed document bound to the source it came from, so it can be reloaded.
///
/// Readers take a snapshot with [`Ini::document`]. [`Ini::reload`] builds a complete new
/// [`Document`] before publishing it, so a snapshot is always either entirely old or entirely new.
pub struct Ini {
    source: Mutex<Box<dyn Source>>,
    options: ParseOptions,
    document: RwLock<Arc<Document>>,
}

impl Ini {
    /// Open and parse a file with [`ParseOptions::default`].
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with(path, ParseOptions::default())
    }

    pub fn open_with(path: impl AsRef<Path>, options: ParseOptions) -> Result<Self> {
        Self::from_source(SeekableSource::<File>::open(path)?, options)
    }

    /// Parse a one-shot stream. [`Ini::reload`] on the result fails with
    /// [`Error::ReloadUnsupported`].
    pub fn from_reader<R>(reader: R, options: ParseOptions) -> Result<Self>
    where
        R: Read + Send + 'static,
    {
        Self::from_source(StreamSource::new(reader), options)
    }

    pub fn from_seekable<R>(reader: R, options: ParseOptions) -> Result<Self>
    where
        R: Read + Seek + Send + 'static,
    {
        Self::from_source(SeekableSource::new(reader), options)
    }

    pub fn from_source<S>(mut source: S, options: ParseOptions) -> Result<Self>
    where
        S: Source + 'static,
    {
        let document = parse_source(&mut source, &options)?;

        Ok(Self {
            source: Mutex::new(Box::new(source)),
            options,
            document: RwLock::new(Arc::new(document)),
        })
    }

    /// Rewind the source and parse it again. On failure the current document stays in place.
    pub fn reload(&self) -> Result<()> {
        // Holding the source lock for the whole parse serializes concurrent reloads.
        let mut source = self.source.lock().map_err(|_| Error::LockPoisoned)?;

        source.rewind()?;
        let document = Arc::new(parse_source(&mut **source, &self.options)?);

        *self.document.write().map_err(|_| Error::LockPoisoned)? = document;
        log::debug!("reload complete");

        Ok(())
    }

    /// The current document. The snapshot is unaffected by later reloads.
    pub fn document(&self) -> Result<Arc<Document>> {
        self.document
            .read()
            .map(|document| Arc::clone(&*document))
            .map_err(|_| Error::LockPoisoned)
    }

    pub fn section(&self, name: &str) -> Result<Option<Section>> {
        Ok(self.document()?.section(name).cloned())
    }

    pub fn section_exists(&self, name: &str) -> Result<bool> {
        Ok(self.document()?.section_exists(name))
    }

    #[must_use]
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }
}

impl std::fmt::Debug for Ini {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ini")
            .field("options", &self.options)
            .field("document", &self.document)
            .finish_non_exhaustive()
    }
}

fn parse_source<S>(source: &mut S, options: &ParseOptions) -> Result<Document>
where
    S: Source + ?Sized,
{
    let lines = source.read_lines(options.encoding)?;
    Ok(Document::from_lines(&lines, options))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::source::TextSource;

    #[test]
    fn reload_from_text_is_idempotent() {
        let ini = Ini::from_source(TextSource::new("[a]\nk = v\n"), ParseOptions::default())
            .expect("text sources cannot fail");
        let before = ini.document().expect("lock is healthy");

        ini.reload().expect("text sources can rewind");
        let after = ini.document().expect("lock is healthy");

        assert_eq!(before, after);
        assert!(!Arc::ptr_eq(&before, &after));
    }

    #[test]
    fn reload_of_stream_is_unsupported_and_keeps_document() {
        let ini = Ini::from_reader(Cursor::new(b"[a]\nk=v".to_vec()), ParseOptions::default())
            .expect("reading from memory cannot fail");

        assert!(matches!(ini.reload(), Err(Error::ReloadUnsupported)));
        assert_eq!(
            ini.section("a")
                .expect("lock is healthy")
                .and_then(|s| s.value("k").map(str::to_owned)),
            Some("v".to_owned())
        );
    }

    #[test]
    fn reload_keeps_construction_options() {
        let options = ParseOptions::default().with_quotes(false);
        let ini = Ini::from_source(TextSource::new("[a]\nk = \"v\"\n"), options)
            .expect("text sources cannot fail");

        ini.reload().expect("text sources can rewind");

        assert_eq!(ini.options(), &options);
        assert_eq!(
            ini.section("a")
                .expect("lock is healthy")
                .and_then(|s| s.value("k").map(str::to_owned)),
            Some("\"v\"".to_owned())
        );
    }

    #[test]
    fn seekable_reload_parses_again() {
        let ini = Ini::from_seekable(Cursor::new(b"[a]\nk=v".to_vec()), ParseOptions::default())
            .expect("reading from memory cannot fail");

        ini.reload().expect("cursor is seekable");
        assert!(ini.section_exists("a").expect("lock is healthy"));
        assert!(!ini.section_exists("b").expect("lock is healthy"));
    }
}
