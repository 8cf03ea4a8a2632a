//! Error types for `$ref` handling

use super::kind::ReferenceKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RefError {
    #[error("{kind} refs can not be internal references")]
    InvalidKindForInternalFormat { kind: ReferenceKind },

    #[error("No internal prefix rule for ref kind {kind}")]
    UnmappedKindForPrefix { kind: ReferenceKind },

    #[error("Internal ref '{reference}' does not start with the {kind} prefix")]
    PrefixMismatch {
        kind: ReferenceKind,
        reference: String,
    },

    #[error("Empty {kind} ref")]
    EmptyReference { kind: ReferenceKind },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RefError>;
