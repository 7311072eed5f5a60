//! Error types for the catalographer library.

use std::io;
use thiserror::Error;

/// Result type alias for catalographer operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during catalog processing.
///
/// File-level errors never abort a batch and page-level errors never abort
/// a file; callers log them and continue. A file that yields zero records
/// is not an error at all — it produces a valid empty JSON array.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file format is not recognized as PDF.
    #[error("Unknown file format: not a valid PDF")]
    UnknownFormat,

    /// The PDF file could not be loaded at all.
    #[error("Unreadable PDF: {0}")]
    UnreadablePdf(String),

    /// The PDF document is encrypted.
    #[error("Document is encrypted")]
    Encrypted,

    /// Error extracting text or structure from a single page.
    #[error("Page extraction error: {0}")]
    PageExtract(String),

    /// Error extracting an embedded image from a page.
    #[error("Image extraction error: {0}")]
    ImageExtract(String),

    /// Error serializing records to JSON.
    #[error("Serialization error: {0}")]
    Serialize(String),
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::UnreadablePdf(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialize(err.to_string())
    }
}
