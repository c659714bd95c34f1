//! Error types for lexspan.

use thiserror::Error;

/// Result type for lexspan operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for lexspan operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A training annotation does not align to a token boundary.
    ///
    /// Annotations must span whole tokens; this is a data-validation
    /// failure surfaced to the caller of `train`.
    #[error("Invalid annotation {annotation} in example '{text}': entities must span whole tokens")]
    InvalidAnnotation {
        /// The offending annotation, rendered as `entity@start..end`.
        annotation: String,
        /// The example text the annotation points into.
        text: String,
    },

    /// A labeled token range could not be re-located in the source text.
    ///
    /// Indicates the tokenizer is not offset-consistent with the text.
    /// Extraction aborts rather than emit a fabricated span.
    #[error("Alignment failed: {0}")]
    Alignment(String),

    /// Model training failed.
    #[error("Training failed: {0}")]
    Training(String),

    /// Serialization/deserialization of a persisted artifact failed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an invalid-annotation error naming the annotation and text.
    pub fn invalid_annotation(annotation: impl Into<String>, text: impl Into<String>) -> Self {
        Error::InvalidAnnotation {
            annotation: annotation.into(),
            text: text.into(),
        }
    }

    /// Create an alignment error.
    pub fn alignment(msg: impl Into<String>) -> Self {
        Error::Alignment(msg.into())
    }

    /// Create a training error.
    pub fn training(msg: impl Into<String>) -> Self {
        Error::Training(msg.into())
    }

    /// Create a serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Error::Serialization(msg.into())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
