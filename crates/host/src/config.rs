//! Staging configuration, loaded from TOML.
//!
//! ```toml
//! seed = 7
//! init = "positive"
//! output = "weights.f16"
//!
//! [dims]
//! n = 1
//! c = 16
//! h = 3
//! w = 3
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};

use crate::{
    fill_random, read_halves_from_file, seeded_rng, Dims4d, HostError, HostTensor, RandomInit,
};

/// Describes how to build one host tensor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StageConfig {
    pub dims: Dims4d,
    /// Distribution used when no `input` file is given.
    #[serde(default)]
    pub init: RandomInit,
    #[serde(default)]
    pub seed: u64,
    /// Decimal text file to ingest instead of generating values.
    #[serde(default)]
    pub input: Option<PathBuf>,
    /// Where the CLI writes the staged little-endian bytes.
    #[serde(default)]
    pub output: Option<PathBuf>,
}

impl StageConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, HostError> {
        let config: StageConfig = toml::from_str(s).map_err(|e| HostError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, HostError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| HostError::io(path.display().to_string(), e))?;
        Self::from_toml_str(&text)
    }

    fn validate(&self) -> Result<(), HostError> {
        match self.dims.checked_byte_len() {
            None => Err(HostError::Config(format!("dims {} are too large", self.dims))),
            Some(0) => Err(HostError::Config(format!("dims {} are empty", self.dims))),
            Some(_) => Ok(()),
        }
    }
}

/// Builds the host tensor described by `config`.
pub fn stage(config: &StageConfig) -> Result<HostTensor, HostError> {
    config.validate()?;
    let dims = config.dims;
    let tensor = match &config.input {
        Some(path) => {
            info!("staging {dims} from {}", path.display());
            HostTensor::from_halves(dims, read_halves_from_file(path, dims.num_elem())?)?
        }
        None => {
            info!("staging {dims} with {:?} init, seed {}", config.init, config.seed);
            let mut tensor = HostTensor::zeroed(dims);
            fill_random(tensor.as_mut_halves(), config.init, &mut seeded_rng(config.seed));
            tensor
        }
    };
    Ok(tensor)
}
