//! Bit-exact conversion between IEEE 754 binary32 (`f32`) and binary16
//! (half float) values.
//!
//! Half floats travel as raw `u16` bit patterns, the form in which they are
//! staged into compute-device buffers.
//!
//! # Overview
//!
//! - [`encode_f32_to_f16`] - `f32` to half bits; truncating, NaN and overflow saturate to `0x7FFF`
//! - [`decode_f16_to_f32`] - half bits to `f32`; exact for every non-NaN pattern
//! - [`FloatLayout`], [`BINARY32`], [`BINARY16`] - the shared field layout tables
//! - [`encode_into`], [`decode_into`], [`encode_vec`], [`decode_vec`] - element-wise buffer helpers
//! - [`to_le_bytes`], [`from_le_bytes`] - device byte layout of half buffers
//!
//! # Example
//!
//! ```
//! use halfcl_half::{decode_f16_to_f32, encode_f32_to_f16};
//!
//! let bits = encode_f32_to_f16(-1.5);
//! assert_eq!(bits, 0xBE00);
//! assert_eq!(decode_f16_to_f32(bits), -1.5);
//! ```

mod decode;
mod encode;
mod error;
mod layout;
mod slice;
mod wire;

pub use decode::decode_f16_to_f32;
pub use encode::{encode_f32_bits, encode_f32_to_f16};
pub use error::HalfError;
pub use layout::{classify_f16, classify_f32, Category, FloatLayout, BINARY16, BINARY32};
pub use slice::{decode_into, decode_vec, encode_into, encode_vec};
pub use wire::{from_le_bytes, to_le_bytes, HALF_SIZE};
