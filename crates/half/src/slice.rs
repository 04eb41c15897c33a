//! Element-wise conversion of buffers.
//!
//! These are plain loops over the scalar conversions, in element order.

use crate::{decode_f16_to_f32, encode_f32_to_f16, HalfError};

/// Encodes `src` into `dst`, which must have the same length.
///
/// # Example
///
/// ```
/// use halfcl_half::encode_into;
///
/// let mut out = [0u16; 3];
/// encode_into(&[1.0, -2.0, 0.5], &mut out).unwrap();
/// assert_eq!(out, [0x3C00, 0xC000, 0x3800]);
/// ```
pub fn encode_into(src: &[f32], dst: &mut [u16]) -> Result<(), HalfError> {
    if src.len() != dst.len() {
        return Err(HalfError::LengthMismatch {
            src: src.len(),
            dst: dst.len(),
        });
    }
    for (out, &value) in dst.iter_mut().zip(src) {
        *out = encode_f32_to_f16(value);
    }
    Ok(())
}

/// Decodes `src` into `dst`, which must have the same length.
pub fn decode_into(src: &[u16], dst: &mut [f32]) -> Result<(), HalfError> {
    if src.len() != dst.len() {
        return Err(HalfError::LengthMismatch {
            src: src.len(),
            dst: dst.len(),
        });
    }
    for (out, &bits) in dst.iter_mut().zip(src) {
        *out = decode_f16_to_f32(bits);
    }
    Ok(())
}

/// Encodes every element of `src` into a new vector.
pub fn encode_vec(src: &[f32]) -> Vec<u16> {
    src.iter().map(|&value| encode_f32_to_f16(value)).collect()
}

/// Decodes every element of `src` into a new vector.
///
/// # Example
///
/// ```
/// use halfcl_half::decode_vec;
///
/// assert_eq!(decode_vec(&[0x3C00, 0xC000]), vec![1.0, -2.0]);
/// ```
pub fn decode_vec(src: &[u16]) -> Vec<f32> {
    src.iter().map(|&bits| decode_f16_to_f32(bits)).collect()
}
