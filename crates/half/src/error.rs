//! Error type for the slice and wire helpers.

use thiserror::Error;

/// Shape errors reported by the batch helpers.
///
/// The scalar conversions are total and never fail.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HalfError {
    #[error("length mismatch: source has {src} elements, destination has {dst}")]
    LengthMismatch { src: usize, dst: usize },
    #[error("half buffer must have an even byte length, got {0}")]
    OddByteLength(usize),
}
