//! Codec error types.

use thiserror::Error;

use crate::domain::foundation::{RegistryError, UnknownQuestionType};

/// Errors raised while encoding or decoding tagged payloads.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The discriminator is missing or names no supported type.
    #[error("Unsupported question type: {raw}")]
    UnsupportedQuestionType { raw: String },

    /// The discriminator is fine but a variant field is missing or mis-shaped.
    #[error("Malformed payload: field '{field}' {reason}")]
    MalformedPayload { field: String, reason: String },

    /// The codec's own registry is misconfigured.
    #[error(transparent)]
    Registry(RegistryError),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl CodecError {
    pub fn unsupported(raw: impl Into<String>) -> Self {
        CodecError::UnsupportedQuestionType { raw: raw.into() }
    }

    pub fn malformed(field: impl Into<String>, reason: impl Into<String>) -> Self {
        CodecError::MalformedPayload {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl From<UnknownQuestionType> for CodecError {
    fn from(err: UnknownQuestionType) -> Self {
        CodecError::UnsupportedQuestionType { raw: err.raw }
    }
}

impl From<RegistryError> for CodecError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::UnsupportedQuestionType { raw } | RegistryError::NotSupported { raw, .. } => {
                CodecError::UnsupportedQuestionType { raw }
            }
            other => CodecError::Registry(other),
        }
    }
}
