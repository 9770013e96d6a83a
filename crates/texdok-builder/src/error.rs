//! Error types for document building

use thiserror::Error;

/// Result type for builder operations
pub type Result<T> = std::result::Result<T, BuildError>;

/// Errors raised while assembling a document tree
///
/// All structural errors surface at mutation time; rendering never fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// A value did not satisfy the component kind required at the call site
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: String,
    },

    /// A table row did not have one cell per header
    #[error("Row length mismatch: expected {expected} cells, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    /// A document description could not be decoded
    #[error("Invalid document description: {0}")]
    Parse(String),
}

impl BuildError {
    /// Create a type mismatch error
    pub fn type_mismatch(expected: &'static str, found: impl Into<String>) -> Self {
        Self::TypeMismatch {
            expected,
            found: found.into(),
        }
    }
}

impl From<toml::de::Error> for BuildError {
    fn from(err: toml::de::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<serde_json::Error> for BuildError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
