//! Four-dimensional tensor shape.

use std::fmt;
use std::str::FromStr;

use halfcl_half::HALF_SIZE;
use serde::{Deserialize, Serialize};

use crate::HostError;

/// NCHW shape of a host tensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dims4d {
    pub n: usize,
    pub c: usize,
    pub h: usize,
    pub w: usize,
}

impl Dims4d {
    pub const fn new(n: usize, c: usize, h: usize, w: usize) -> Self {
        Self { n, c, h, w }
    }

    /// Number of elements, `n * c * h * w`.
    ///
    /// Overflows for shapes that [`checked_byte_len`](Self::checked_byte_len)
    /// rejects; parsed and configured dims are checked before use.
    pub const fn num_elem(&self) -> usize {
        self.n * self.c * self.h * self.w
    }

    /// Size in bytes of the half buffer holding this shape.
    pub const fn byte_len(&self) -> usize {
        self.num_elem() * HALF_SIZE
    }

    /// Number of elements, or `None` if the product overflows `usize`.
    pub fn checked_num_elem(&self) -> Option<usize> {
        self.n
            .checked_mul(self.c)?
            .checked_mul(self.h)?
            .checked_mul(self.w)
    }

    /// Size in bytes, or `None` if it overflows `usize`.
    pub fn checked_byte_len(&self) -> Option<usize> {
        self.checked_num_elem()?.checked_mul(HALF_SIZE)
    }
}

impl fmt::Display for Dims4d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}x{}", self.n, self.c, self.h, self.w)
    }
}

impl FromStr for Dims4d {
    type Err = HostError;

    /// Parses `"NxCxHxW"`, e.g. `"1x3x224x224"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || HostError::InvalidDims(s.to_string());
        let parts = s
            .split('x')
            .map(|p| p.trim().parse::<usize>().map_err(|_| invalid()))
            .collect::<Result<Vec<_>, _>>()?;
        match parts.as_slice() {
            [n, c, h, w] => {
                let dims = Dims4d::new(*n, *c, *h, *w);
                dims.checked_byte_len().ok_or_else(invalid)?;
                Ok(dims)
            }
            _ => Err(invalid()),
        }
    }
}
