//! binary16 to binary32 conversion.

use crate::layout::{BINARY16, BINARY32};

const F16_EXP_MAX: u32 = BINARY16.exp_max();

const SIGN_SHIFT: u32 = BINARY32.width - BINARY16.width;
const FRAC_BITS_DIFF: u32 = BINARY32.frac_bits - BINARY16.frac_bits;

/// Quiet NaN with an empty payload apart from the quiet bit.
const F32_QUIET_NAN: u32 = BINARY32.exp_mask() | (1 << (BINARY32.frac_bits - 1));

/// Value of the smallest positive half subnormal, 2^-24.
const SMALLEST_SUBNORMAL: f32 = 5.960_464_5e-8;

/// Converts the bit pattern of a half float to an `f32`.
///
/// Every half value is exactly representable as an `f32`, so the conversion
/// is lossless for everything except NaN payloads: any half NaN becomes the
/// canonical quiet NaN, keeping only the sign bit.
///
/// # Example
///
/// ```
/// use halfcl_half::decode_f16_to_f32;
///
/// // Positive zero
/// assert_eq!(decode_f16_to_f32(0x0000).to_bits(), 0.0f32.to_bits());
///
/// // Negative zero
/// assert_eq!(decode_f16_to_f32(0x8000).to_bits(), (-0.0f32).to_bits());
///
/// // One
/// assert_eq!(decode_f16_to_f32(0x3C00), 1.0);
///
/// // Largest finite half
/// assert_eq!(decode_f16_to_f32(0x7BFF), 65504.0);
///
/// // Infinities
/// assert_eq!(decode_f16_to_f32(0x7C00), f32::INFINITY);
/// assert_eq!(decode_f16_to_f32(0xFC00), f32::NEG_INFINITY);
///
/// // NaN
/// assert!(decode_f16_to_f32(0x7C01).is_nan());
/// ```
pub fn decode_f16_to_f32(bits: u16) -> f32 {
    let bits = bits as u32;
    let negative = BINARY16.is_negative(bits);
    let sign = (bits & BINARY16.sign_mask()) << SIGN_SHIFT;
    let exponent = BINARY16.exponent_field(bits);
    let fraction = BINARY16.fraction_field(bits);

    if exponent == F16_EXP_MAX {
        if fraction == 0 {
            return if negative {
                f32::NEG_INFINITY
            } else {
                f32::INFINITY
            };
        }
        return f32::from_bits(sign | F32_QUIET_NAN);
    }

    if exponent == 0 {
        // Subnormal or zero
        let magnitude = fraction as f32 * SMALLEST_SUBNORMAL;
        return if negative { -magnitude } else { magnitude };
    }

    let rebiased = (exponent as i32 - BINARY16.bias + BINARY32.bias) as u32;
    f32::from_bits(sign | (rebiased << BINARY32.frac_bits) | (fraction << FRAC_BITS_DIFF))
}
