use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The underlying file or stream could not be opened or read.
    #[error("failed to read source")]
    SourceUnavailable {
        #[source]
        source: io::Error,
    },

    /// The source cannot be rewound, so it cannot be parsed a second time.
    #[error("reload is not supported by this source")]
    ReloadUnsupported,

    #[error("lock poisoned by a panicking thread")]
    LockPoisoned,
}

impl From<io::Error> for Error {
    fn from(source: io::Error) -> Self {
        Self::SourceUnavailable { source }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn source_unavailable_exposes_io_error() {
        let err = Error::from(io::Error::new(io::ErrorKind::NotFound, "missing.ini"));

        assert_eq!(err.to_string(), "failed to read source");
        assert_eq!(
            err.source().map(ToString::to_string),
            Some("missing.ini".to_owned())
        );
    }

    #[test]
    fn reload_unsupported_has_no_source() {
        assert!(Error::ReloadUnsupported.source().is_none());
    }
}
