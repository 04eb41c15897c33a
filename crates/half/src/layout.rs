//! Bit layout of the two IEEE 754 binary formats handled by this crate.
//!
//! Every mask, shift and bias used by the encoder and decoder is derived from
//! the [`BINARY32`] and [`BINARY16`] tables below.

use std::fmt;

/// Field layout of an IEEE 754 binary interchange format.
///
/// Bit patterns are carried in a `u32` regardless of width; binary16 patterns
/// occupy the low 16 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloatLayout {
    /// Total number of bits.
    pub width: u32,
    /// Number of (biased) exponent bits.
    pub exp_bits: u32,
    /// Number of fraction (mantissa) bits, excluding the implicit leading 1.
    pub frac_bits: u32,
    /// Exponent bias.
    pub bias: i32,
}

/// IEEE 754 binary32 (`f32`).
pub const BINARY32: FloatLayout = FloatLayout {
    width: 32,
    exp_bits: 8,
    frac_bits: 23,
    bias: 127,
};

/// IEEE 754 binary16 (half float).
pub const BINARY16: FloatLayout = FloatLayout {
    width: 16,
    exp_bits: 5,
    frac_bits: 10,
    bias: 15,
};

impl FloatLayout {
    /// Mask selecting the sign bit.
    #[inline]
    pub const fn sign_mask(&self) -> u32 {
        1 << (self.width - 1)
    }

    /// Mask selecting everything but the sign bit.
    #[inline]
    pub const fn abs_mask(&self) -> u32 {
        self.sign_mask() - 1
    }

    /// Largest value of the exponent field (all ones).
    #[inline]
    pub const fn exp_max(&self) -> u32 {
        (1 << self.exp_bits) - 1
    }

    /// Mask selecting the exponent field in place.
    #[inline]
    pub const fn exp_mask(&self) -> u32 {
        self.exp_max() << self.frac_bits
    }

    /// Mask selecting the fraction field.
    #[inline]
    pub const fn frac_mask(&self) -> u32 {
        (1 << self.frac_bits) - 1
    }

    /// Smallest unbiased exponent of a normal value, `1 - bias`.
    #[inline]
    pub const fn min_exp(&self) -> i32 {
        1 - self.bias
    }

    /// Largest unbiased exponent of a normal value.
    #[inline]
    pub const fn max_exp(&self) -> i32 {
        self.exp_max() as i32 - 1 - self.bias
    }

    /// Biased exponent field of `bits`.
    #[inline]
    pub const fn exponent_field(&self, bits: u32) -> u32 {
        (bits & self.exp_mask()) >> self.frac_bits
    }

    /// Fraction field of `bits`.
    #[inline]
    pub const fn fraction_field(&self, bits: u32) -> u32 {
        bits & self.frac_mask()
    }

    /// Returns `true` when the sign bit of `bits` is set.
    #[inline]
    pub const fn is_negative(&self, bits: u32) -> bool {
        bits & self.sign_mask() != 0
    }

    /// Classifies a bit pattern of this format.
    pub const fn classify(&self, bits: u32) -> Category {
        let exponent = self.exponent_field(bits);
        let fraction = self.fraction_field(bits);
        if exponent == 0 {
            if fraction == 0 {
                Category::Zero
            } else {
                Category::Subnormal
            }
        } else if exponent == self.exp_max() {
            if fraction == 0 {
                Category::Infinite
            } else {
                Category::Nan
            }
        } else {
            Category::Normal
        }
    }
}

/// The category a floating point bit pattern belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Zero,
    Subnormal,
    Normal,
    Infinite,
    Nan,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Zero => "zero",
            Category::Subnormal => "subnormal",
            Category::Normal => "normal",
            Category::Infinite => "infinite",
            Category::Nan => "nan",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies a binary32 value.
///
/// # Example
///
/// ```
/// use halfcl_half::{classify_f32, Category};
///
/// assert_eq!(classify_f32(-0.0), Category::Zero);
/// assert_eq!(classify_f32(1.0e-40), Category::Subnormal);
/// assert_eq!(classify_f32(f32::NAN), Category::Nan);
/// ```
pub fn classify_f32(value: f32) -> Category {
    BINARY32.classify(value.to_bits())
}

/// Classifies a binary16 bit pattern.
///
/// # Example
///
/// ```
/// use halfcl_half::{classify_f16, Category};
///
/// assert_eq!(classify_f16(0x3C00), Category::Normal);
/// assert_eq!(classify_f16(0x0001), Category::Subnormal);
/// assert_eq!(classify_f16(0xFC00), Category::Infinite);
/// ```
pub fn classify_f16(bits: u16) -> Category {
    BINARY16.classify(bits as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary32_masks() {
        assert_eq!(BINARY32.sign_mask(), 0x8000_0000);
        assert_eq!(BINARY32.abs_mask(), 0x7FFF_FFFF);
        assert_eq!(BINARY32.exp_mask(), 0x7F80_0000);
        assert_eq!(BINARY32.frac_mask(), 0x007F_FFFF);
        assert_eq!(BINARY32.min_exp(), -126);
        assert_eq!(BINARY32.max_exp(), 127);
    }

    #[test]
    fn test_binary16_masks() {
        assert_eq!(BINARY16.sign_mask(), 0x8000);
        assert_eq!(BINARY16.abs_mask(), 0x7FFF);
        assert_eq!(BINARY16.exp_mask(), 0x7C00);
        assert_eq!(BINARY16.frac_mask(), 0x03FF);
        assert_eq!(BINARY16.exp_max(), 31);
        assert_eq!(BINARY16.min_exp(), -14);
        assert_eq!(BINARY16.max_exp(), 15);
    }

    #[test]
    fn test_classify_f16_boundaries() {
        assert_eq!(classify_f16(0x0000), Category::Zero);
        assert_eq!(classify_f16(0x8000), Category::Zero);
        assert_eq!(classify_f16(0x03FF), Category::Subnormal);
        assert_eq!(classify_f16(0x0400), Category::Normal);
        assert_eq!(classify_f16(0x7BFF), Category::Normal);
        assert_eq!(classify_f16(0x7C00), Category::Infinite);
        assert_eq!(classify_f16(0x7C01), Category::Nan);
        assert_eq!(classify_f16(0xFFFF), Category::Nan);
    }

    #[test]
    fn test_classify_f32_matches_std() {
        for v in [0.0f32, -0.0, 1.0, f32::MIN_POSITIVE, 1.0e-45, f32::MAX] {
            let expected = match v.classify() {
                std::num::FpCategory::Zero => Category::Zero,
                std::num::FpCategory::Subnormal => Category::Subnormal,
                std::num::FpCategory::Normal => Category::Normal,
                std::num::FpCategory::Infinite => Category::Infinite,
                std::num::FpCategory::Nan => Category::Nan,
            };
            assert_eq!(classify_f32(v), expected, "{v}");
        }
        assert_eq!(classify_f32(f32::NEG_INFINITY), Category::Infinite);
    }

    #[test]
    fn test_every_f16_pattern_has_one_category() {
        let mut counts = [0usize; 5];
        for bits in 0..=u16::MAX {
            let slot = match classify_f16(bits) {
                Category::Zero => 0,
                Category::Subnormal => 1,
                Category::Normal => 2,
                Category::Infinite => 3,
                Category::Nan => 4,
            };
            counts[slot] += 1;
        }
        assert_eq!(counts, [2, 2 * 1023, 2 * 30 * 1024, 2, 2 * 1023]);
    }
}
