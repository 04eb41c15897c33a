//! Little-endian byte layout of half buffers, as written to device memory.

use crate::HalfError;

/// Size of one half element in bytes.
pub const HALF_SIZE: usize = 2;

/// Packs half bit patterns into little-endian bytes.
///
/// # Example
///
/// ```
/// use halfcl_half::to_le_bytes;
///
/// assert_eq!(to_le_bytes(&[0x3C00, 0x0102]), vec![0x00, 0x3C, 0x02, 0x01]);
/// ```
pub fn to_le_bytes(halves: &[u16]) -> Vec<u8> {
    let mut out = Vec::with_capacity(halves.len() * HALF_SIZE);
    for &h in halves {
        out.extend_from_slice(&h.to_le_bytes());
    }
    out
}

/// Unpacks little-endian bytes into half bit patterns.
pub fn from_le_bytes(bytes: &[u8]) -> Result<Vec<u16>, HalfError> {
    if bytes.len() % HALF_SIZE != 0 {
        return Err(HalfError::OddByteLength(bytes.len()));
    }
    Ok(bytes
        .chunks_exact(HALF_SIZE)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_le_bytes() {
        assert_eq!(
            from_le_bytes(&[0x00, 0x3C, 0xFF, 0x7B]),
            Ok(vec![0x3C00, 0x7BFF])
        );
        assert_eq!(from_le_bytes(&[]), Ok(vec![]));
    }

    #[test]
    fn test_from_le_bytes_odd_length() {
        assert_eq!(
            from_le_bytes(&[0x00, 0x3C, 0x01]),
            Err(HalfError::OddByteLength(3))
        );
    }

    #[test]
    fn test_to_le_bytes_len() {
        assert_eq!(to_le_bytes(&[0; 7]).len(), 14);
    }
}
