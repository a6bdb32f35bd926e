//! Error types for the unlayout library.

use std::io;
use thiserror::Error;

/// Result type alias for unlayout operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while reconstructing a document.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The source document cannot be read at all.
    ///
    /// This is the only condition that aborts the whole pipeline; everything
    /// else degrades to empty per-page results.
    #[error("Unreadable source: {0}")]
    UnreadableSource(String),

    /// Input primitives are structurally invalid.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Error during JSON rendering.
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

/// Outcome of a best-effort extraction stage.
///
/// Distinguishes "the stage ran and legitimately produced nothing" from "the
/// collaborator failed". The pipeline treats both as empty output, but a
/// failure carries its reason so diagnostics can tell the two apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction<T> {
    /// The stage completed; the payload may still be empty.
    Complete(T),
    /// The stage failed with a reason.
    Failed(String),
}

impl<T> Extraction<T> {
    /// Check whether the stage failed.
    pub fn is_failed(&self) -> bool {
        matches!(self, Extraction::Failed(_))
    }

    /// Get the payload, substituting a default and logging on failure.
    pub fn unwrap_or_log(self, stage: &str, page: u32) -> T
    where
        T: Default,
    {
        match self {
            Extraction::Complete(value) => value,
            Extraction::Failed(reason) => {
                log::warn!("{} failed on page {}: {}", stage, page, reason);
                T::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnreadableSource("truncated file".to_string());
        assert_eq!(err.to_string(), "Unreadable source: truncated file");

        let err = Error::Render("bad value".to_string());
        assert_eq!(err.to_string(), "Rendering error: bad value");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_extraction_unwrap_or_log() {
        let ok: Extraction<Vec<u32>> = Extraction::Complete(vec![1, 2]);
        assert_eq!(ok.unwrap_or_log("stage", 1), vec![1, 2]);

        let failed: Extraction<Vec<u32>> = Extraction::Failed("boom".to_string());
        assert!(failed.is_failed());
        assert!(failed.unwrap_or_log("stage", 1).is_empty());
    }
}
