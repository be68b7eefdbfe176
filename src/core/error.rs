//! Error types for cardpack operations.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for cardpack operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading, rendering or saving a cardpack.
#[derive(Error, Debug)]
pub enum Error {
    /// The directory has no `cards.json`.
    #[error("{0} is not a valid cardpack: it must contain a cards.json file")]
    NotACardpack(PathBuf),

    /// Filesystem failure.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `cards.json` could not be parsed or written.
    #[error("invalid card records in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A texture could not be encoded.
    #[error("failed to encode texture {path}: {source}")]
    Png {
        path: PathBuf,
        #[source]
        source: png::EncodingError,
    },

    /// An editing operation needs at least one selected card.
    #[error("no cards are selected")]
    EmptySelection,

    /// A card index does not exist in the pack.
    #[error("card index {index} is out of range for a pack of {len} cards")]
    IndexOutOfRange { index: usize, len: usize },
}

impl Error {
    pub(crate) fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub(crate) fn json(path: impl AsRef<Path>, source: serde_json::Error) -> Self {
        Error::Json {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub(crate) fn png(path: impl AsRef<Path>, source: png::EncodingError) -> Self {
        Error::Png {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_a_cardpack_message() {
        let err = Error::NotACardpack(PathBuf::from("/tmp/pack"));
        let msg = err.to_string();
        assert!(msg.contains("/tmp/pack"));
        assert!(msg.contains("cards.json"));
    }

    #[test]
    fn test_io_error_keeps_source() {
        let err = Error::io("x.png", std::io::Error::new(std::io::ErrorKind::Other, "disk full"));
        assert!(err.to_string().contains("disk full"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
