//! Error type for the Fiat-Shamir transcript.

use core::fmt;

/// Errors emitted while drawing challenges from a transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranscriptError {
    /// An index was requested from an empty range.
    EmptyRange,
}

impl fmt::Display for TranscriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranscriptError::EmptyRange => write!(f, "cannot sample an index from a zero bound"),
        }
    }
}

impl std::error::Error for TranscriptError {}
