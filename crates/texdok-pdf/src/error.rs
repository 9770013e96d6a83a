//! Error types for PDF generation

use thiserror::Error;

/// Result type for PDF operations
pub type Result<T> = std::result::Result<T, PdfError>;

/// Errors that can occur during PDF generation
///
/// A typesetting run that fails is reported through
/// [`CompileOutcome`](crate::CompileOutcome), not as an error.
#[derive(Error, Debug)]
pub enum PdfError {
    /// The external program could not be started
    #[error("Failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
