//! Error types for the advice service.

use kind_words_core::AdviceId;
use std::fmt;

/// Errors from loading the advice catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The seed file could not be read.
    ReadFailed { path: String, reason: String },
    /// The seed is not a valid list of advice records.
    InvalidSeed { reason: String },
    /// An advice text is below the minimum length.
    TextTooShort { id: AdviceId, min_chars: usize },
    /// Two records share an ID.
    DuplicateId { id: AdviceId },
    /// ID `0` is reserved for the default filler item.
    ReservedId,
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReadFailed { path, reason } => {
                write!(f, "failed to read seed file '{path}': {reason}")
            }
            Self::InvalidSeed { reason } => write!(f, "invalid advice seed: {reason}"),
            Self::TextTooShort { id, min_chars } => {
                write!(f, "advice {id} is shorter than {min_chars} characters")
            }
            Self::DuplicateId { id } => write!(f, "duplicate advice id {id}"),
            Self::ReservedId => write!(f, "advice id 0 is reserved"),
        }
    }
}

impl std::error::Error for CatalogError {}
