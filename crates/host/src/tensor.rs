//! Host-resident tensor of half elements.

use halfcl_half::{decode_vec, encode_into, from_le_bytes, to_le_bytes};

use crate::{Dims4d, HostError};

/// A host buffer of half bit patterns with an NCHW shape.
///
/// The buffer always holds exactly `dims.num_elem()` elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostTensor {
    dims: Dims4d,
    data: Vec<u16>,
}

impl HostTensor {
    /// Allocates a zero-filled tensor.
    pub fn zeroed(dims: Dims4d) -> Self {
        Self {
            dims,
            data: vec![0; dims.num_elem()],
        }
    }

    /// Builds a tensor from half bit patterns.
    pub fn from_halves(dims: Dims4d, data: Vec<u16>) -> Result<Self, HostError> {
        check_count(dims, data.len())?;
        Ok(Self { dims, data })
    }

    /// Builds a tensor by encoding `values` element-wise.
    ///
    /// # Example
    ///
    /// ```
    /// use halfcl_host::{Dims4d, HostTensor};
    ///
    /// let t = HostTensor::from_f32(Dims4d::new(1, 1, 1, 2), &[1.0, -2.0]).unwrap();
    /// assert_eq!(t.as_halves(), &[0x3C00, 0xC000]);
    /// ```
    pub fn from_f32(dims: Dims4d, values: &[f32]) -> Result<Self, HostError> {
        check_count(dims, values.len())?;
        let mut tensor = Self::zeroed(dims);
        encode_into(values, &mut tensor.data)?;
        Ok(tensor)
    }

    /// Rebuilds a tensor from the little-endian bytes read back from a device.
    pub fn from_le_bytes(dims: Dims4d, bytes: &[u8]) -> Result<Self, HostError> {
        Self::from_halves(dims, from_le_bytes(bytes)?)
    }

    pub fn dims(&self) -> Dims4d {
        self.dims
    }

    pub fn num_elem(&self) -> usize {
        self.data.len()
    }

    pub fn as_halves(&self) -> &[u16] {
        &self.data
    }

    pub fn as_mut_halves(&mut self) -> &mut [u16] {
        &mut self.data
    }

    pub fn into_halves(self) -> Vec<u16> {
        self.data
    }

    /// Decodes every element to `f32`.
    pub fn to_f32(&self) -> Vec<f32> {
        decode_vec(&self.data)
    }

    /// Little-endian bytes, ready for a device write.
    pub fn to_le_bytes(&self) -> Vec<u8> {
        to_le_bytes(&self.data)
    }
}

fn check_count(dims: Dims4d, found: usize) -> Result<(), HostError> {
    if dims.num_elem() != found {
        return Err(HostError::ElementCount {
            dims: dims.to_string(),
            expected: dims.num_elem(),
            found,
        });
    }
    Ok(())
}
