//! binary32 to binary16 conversion.

use crate::layout::{BINARY16, BINARY32};

const F32_SIGN_MASK: u32 = BINARY32.sign_mask();
const F32_ABS_MASK: u32 = BINARY32.abs_mask();
const F32_EXP_MASK: u32 = BINARY32.exp_mask();
const F32_FRAC_MASK: u32 = BINARY32.frac_mask();

const F16_EXP_MASK: u16 = BINARY16.exp_mask() as u16;
const F16_FRAC_MASK: u16 = BINARY16.frac_mask() as u16;

/// Distance between the two sign bits.
const SIGN_SHIFT: u32 = BINARY32.width - BINARY16.width;

/// Number of fraction bits dropped when narrowing.
const FRAC_BITS_DIFF: u32 = BINARY32.frac_bits - BINARY16.frac_bits;

/// Exponent rebias, expressed in the binary32 exponent position.
const BIAS_DIFF: u32 = ((BINARY32.bias - BINARY16.bias) as u32) << BINARY32.frac_bits;

/// Largest binary32 magnitude (65504.0) that lands in the binary16 normal range.
const MAX_NORMAL: u32 = (((BINARY16.max_exp() + BINARY32.bias) as u32) << BINARY32.frac_bits)
    | (BINARY16.frac_mask() << FRAC_BITS_DIFF);

/// Smallest binary16 normal magnitude (2^-14) as binary32 bits.
const MIN_NORMAL: u32 = ((BINARY16.min_exp() + BINARY32.bias) as u32) << BINARY32.frac_bits;

/// Result of a NaN input and of the overflow clamp. Exponent and fraction all ones.
const SATURATED: u16 = F16_EXP_MASK | F16_FRAC_MASK;

/// Converts an `f32` to the bit pattern of a half float.
///
/// The conversion is total. Discarded fraction bits are truncated (round
/// toward zero). NaN inputs and finite magnitudes above 65504.0 both produce
/// `sign | 0x7FFF`; infinities keep their sign; magnitudes below the smallest
/// half subnormal flush to signed zero.
///
/// # Example
///
/// ```
/// use halfcl_half::encode_f32_to_f16;
///
/// assert_eq!(encode_f32_to_f16(0.0), 0x0000);
/// assert_eq!(encode_f32_to_f16(-0.0), 0x8000);
/// assert_eq!(encode_f32_to_f16(1.0), 0x3C00);
/// assert_eq!(encode_f32_to_f16(65504.0), 0x7BFF);
/// assert_eq!(encode_f32_to_f16(f32::INFINITY), 0x7C00);
/// assert_eq!(encode_f32_to_f16(-131008.0), 0xFFFF);
/// ```
#[inline]
pub fn encode_f32_to_f16(value: f32) -> u16 {
    encode_f32_bits(value.to_bits())
}

/// Same as [`encode_f32_to_f16`], taking the raw binary32 bit pattern.
pub fn encode_f32_bits(bits: u32) -> u16 {
    let abs = bits & F32_ABS_MASK;
    let sign = ((bits & F32_SIGN_MASK) >> SIGN_SHIFT) as u16;

    if abs > F32_EXP_MASK {
        // NaN, payload is not carried over
        return sign | SATURATED;
    }
    if abs == F32_EXP_MASK {
        return sign | F16_EXP_MASK;
    }
    if abs > MAX_NORMAL {
        return sign | SATURATED;
    }
    if abs < MIN_NORMAL {
        return sign | encode_subnormal(abs);
    }
    sign | ((abs - BIAS_DIFF) >> FRAC_BITS_DIFF) as u16
}

/// Fraction field of the half subnormal for a binary32 magnitude below 2^-14.
#[inline]
fn encode_subnormal(abs: u32) -> u16 {
    let frac = (abs & F32_FRAC_MASK) | (1 << BINARY32.frac_bits);
    let exponent = (abs >> BINARY32.frac_bits) as i32;
    // At least 1: the exponent field is below MIN_NORMAL's.
    let shift = BINARY16.min_exp() + BINARY32.bias - exponent;
    let shifted = if shift <= BINARY32.frac_bits as i32 {
        frac >> shift
    } else {
        0
    };
    (shifted >> FRAC_BITS_DIFF) as u16
}
