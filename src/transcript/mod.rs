//! Fiat-Shamir transcript for non-interactive challenge derivation.

pub mod core;
pub mod types;

pub use self::core::Transcript;
pub use types::TranscriptError;
