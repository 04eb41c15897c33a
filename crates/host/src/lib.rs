//! Host-side staging of half-precision tensors.
//!
//! Everything here runs on the host before a device write or after a device
//! read: shaping buffers, filling them, ingesting decimal text and producing
//! the little-endian bytes a device buffer expects. Conversion itself is
//! delegated to [`halfcl_half`], one element at a time.
//!
//! # Example
//!
//! ```
//! use halfcl_host::{read_halves_from_text, Dims4d, HostTensor};
//!
//! let dims = Dims4d::new(1, 1, 2, 2);
//! let halves = read_halves_from_text("1 2\n3 4".as_bytes(), dims.num_elem()).unwrap();
//! let tensor = HostTensor::from_halves(dims, halves).unwrap();
//! assert_eq!(tensor.to_f32(), vec![1.0, 2.0, 3.0, 4.0]);
//! assert_eq!(tensor.to_le_bytes().len(), dims.byte_len());
//! ```

mod cli;
mod config;
mod dims;
mod error;
mod init;
mod tensor;
mod text;

pub use cli::{halfcl_cli, inspect, parse_half_hex};
pub use config::{stage, StageConfig};
pub use dims::Dims4d;
pub use error::HostError;
pub use init::{fill_random, seeded_rng, RandomInit};
pub use tensor::HostTensor;
pub use text::{read_halves_from_file, read_halves_from_text, write_halves_as_text};
