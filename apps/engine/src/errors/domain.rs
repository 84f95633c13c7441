//! Domain-level error type for the engine's parsing boundaries.
//!
//! Game transitions themselves are infallible (illegal intents are silent
//! no-ops, see `domain::transitions`); this type only surfaces at the seams
//! where external text enters the system: card id tokens and seed values.

use thiserror::Error;

/// Validation kinds to distinguish parse failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    ParseCard,
    ParseSeed,
    Other,
}

/// Central domain error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input validation failure at a parsing boundary
    #[error("validation error {kind:?}: {detail}")]
    Validation {
        kind: ValidationKind,
        detail: String,
    },
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation {
            kind,
            detail: detail.into(),
        }
    }

    pub fn validation_other(detail: impl Into<String>) -> Self {
        Self::Validation {
            kind: ValidationKind::Other,
            detail: detail.into(),
        }
    }
}
