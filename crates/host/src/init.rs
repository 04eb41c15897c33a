//! Random initialisation of half host buffers.

use halfcl_half::encode_f32_to_f16;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::{Deserialize, Serialize};

/// Value distribution used to fill a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RandomInit {
    /// Uniform in `[-0.5, 0.499]`.
    #[default]
    Random,
    /// Uniform in `[-1.0, -0.001]`.
    Negative,
    /// Uniform in `[0.001, 1.0]`.
    Positive,
    /// All zeros.
    Zero,
}

/// Reproducible generator for a given seed.
pub fn seeded_rng(seed: u64) -> Xoshiro256PlusPlus {
    Xoshiro256PlusPlus::seed_from_u64(seed)
}

/// Fills `data` with encoded values drawn according to `kind`.
///
/// Draws are on a 1/1000 grid, so every value is known to fit the half range.
///
/// # Example
///
/// ```
/// use halfcl_host::{fill_random, seeded_rng, RandomInit};
/// use halfcl_half::decode_f16_to_f32;
///
/// let mut data = [0u16; 16];
/// fill_random(&mut data, RandomInit::Positive, &mut seeded_rng(1));
/// assert!(data.iter().all(|&h| decode_f16_to_f32(h) > 0.0));
/// ```
pub fn fill_random<R: Rng + ?Sized>(data: &mut [u16], kind: RandomInit, rng: &mut R) {
    for slot in data.iter_mut() {
        let value = match kind {
            RandomInit::Random => draw(rng) - 0.5,
            RandomInit::Negative => -draw(rng) - 0.001,
            RandomInit::Positive => draw(rng) + 0.001,
            RandomInit::Zero => 0.0,
        };
        *slot = encode_f32_to_f16(value);
    }
}

fn draw<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.gen_range(0..1000u32) as f32 / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use halfcl_half::decode_f16_to_f32;

    fn fill(kind: RandomInit, seed: u64) -> Vec<u16> {
        let mut data = vec![0xFFFF; 256];
        fill_random(&mut data, kind, &mut seeded_rng(seed));
        data
    }

    #[test]
    fn test_random_range() {
        for h in fill(RandomInit::Random, 3) {
            let v = decode_f16_to_f32(h);
            assert!((-0.5..0.5).contains(&v), "{v}");
        }
    }

    #[test]
    fn test_signed_ranges() {
        assert!(fill(RandomInit::Negative, 4)
            .into_iter()
            .all(|h| decode_f16_to_f32(h) < 0.0));
        assert!(fill(RandomInit::Positive, 4)
            .into_iter()
            .all(|h| decode_f16_to_f32(h) > 0.0));
    }

    #[test]
    fn test_zero() {
        assert!(fill(RandomInit::Zero, 5).into_iter().all(|h| h == 0));
    }

    #[test]
    fn test_seed_is_reproducible() {
        assert_eq!(fill(RandomInit::Random, 42), fill(RandomInit::Random, 42));
        assert_ne!(fill(RandomInit::Random, 42), fill(RandomInit::Random, 43));
    }
}
