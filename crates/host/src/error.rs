//! Host staging error type.

use halfcl_half::HalfError;
use thiserror::Error;

/// Errors raised while staging host data for a device.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid float {token:?} at element {index}")]
    Parse { index: usize, token: String },
    #[error("expected {expected} values, found {found}")]
    ShortInput { expected: usize, found: usize },
    #[error("tensor {dims} needs {expected} elements, got {found}")]
    ElementCount {
        dims: String,
        expected: usize,
        found: usize,
    },
    #[error("invalid dims {0:?}, expected NxCxHxW")]
    InvalidDims(String),
    #[error("invalid half bit pattern {0:?}")]
    InvalidHex(String),
    #[error("invalid config: {0}")]
    Config(String),
    #[error(transparent)]
    Half(#[from] HalfError),
}

impl HostError {
    pub(crate) fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        HostError::Io {
            path: path.into(),
            source,
        }
    }
}
