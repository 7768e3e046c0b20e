//! Error types for resumekit.

use std::io;
use thiserror::Error;

/// Result type alias for resumekit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading, extracting, tailoring or rendering a resume.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is neither plain text nor a PDF document.
    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    /// No text could be extracted from the document.
    #[error(
        "No text could be extracted from the PDF. The file may be empty, image-based, or encrypted."
    )]
    EmptyDocument,

    /// The document could not be opened or decoded.
    #[error("Failed to read PDF file: {0}")]
    ExtractionFailure(String),

    /// The PDF writer faulted while producing the output document.
    #[error("Rendering error: {0}")]
    RenderFailure(String),

    /// Caller-supplied input was rejected before processing.
    #[error("{0}")]
    InvalidInput(String),

    /// The tailoring collaborator failed.
    #[error("{0}")]
    Tailoring(String),

    /// Resume JSON could not be read or written.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            lopdf::Error::Decryption(_) => {
                Error::ExtractionFailure("document is encrypted".to_string())
            }
            _ => Error::ExtractionFailure(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnsupportedFileType("image/png".to_string());
        assert_eq!(err.to_string(), "Unsupported file type: image/png");

        let err = Error::ExtractionFailure("invalid file header".to_string());
        assert_eq!(err.to_string(), "Failed to read PDF file: invalid file header");

        assert!(Error::EmptyDocument.to_string().starts_with("No text could be extracted"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }
}
