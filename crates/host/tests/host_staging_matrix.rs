//! Staging matrix: text ingestion, random init and config-driven staging,
//! end to end down to device bytes.

use std::fs;
use std::path::PathBuf;

use halfcl_half::{decode_f16_to_f32, encode_f32_to_f16};
use halfcl_host::{
    fill_random, read_halves_from_file, seeded_rng, stage, write_halves_as_text, Dims4d,
    HostError, HostTensor, RandomInit, StageConfig,
};
use proptest::prelude::*;

fn scratch_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("halfcl-{}-{name}", std::process::id()));
    fs::write(&path, contents).unwrap();
    path
}

// ---------------------------------------------------------------------------
// Text ingestion
// ---------------------------------------------------------------------------

#[test]
fn file_ingestion_matches_scalar_encoder() {
    let values = [0.1f32, -0.2, 1.0e-6, 70000.0, -0.0, 3.14159];
    let text: String = values.iter().map(|v| format!("{v}\n")).collect();
    let path = scratch_file("ingest.txt", &text);
    let halves = read_halves_from_file(&path, values.len()).unwrap();
    let expected: Vec<u16> = values.iter().map(|&v| encode_f32_to_f16(v)).collect();
    assert_eq!(halves, expected);
    fs::remove_file(path).ok();
}

#[test]
fn dump_and_reingest_is_stable() {
    let mut data = vec![0u16; 64];
    fill_random(&mut data, RandomInit::Random, &mut seeded_rng(11));
    let mut text = Vec::new();
    write_halves_as_text(&mut text, &data).unwrap();
    let path = scratch_file("dump.txt", std::str::from_utf8(&text).unwrap());
    assert_eq!(read_halves_from_file(&path, data.len()).unwrap(), data);
    fs::remove_file(path).ok();
}

// ---------------------------------------------------------------------------
// Config-driven staging
// ---------------------------------------------------------------------------

#[test]
fn stage_from_input_file() {
    let input = scratch_file("stage-input.txt", "1 2 3 4\n5 6\n");
    let config = StageConfig::from_toml_str(&format!(
        "input = {:?}\n[dims]\nn = 1\nc = 1\nh = 2\nw = 3\n",
        input.display().to_string()
    ))
    .unwrap();
    let tensor = stage(&config).unwrap();
    assert_eq!(tensor.dims(), Dims4d::new(1, 1, 2, 3));
    assert_eq!(tensor.to_f32(), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    fs::remove_file(input).ok();
}

#[test]
fn stage_from_short_input_file_fails() {
    let input = scratch_file("stage-short.txt", "1 2 3\n");
    let config = StageConfig::from_toml_str(&format!(
        "input = {:?}\n[dims]\nn = 1\nc = 1\nh = 2\nw = 2\n",
        input.display().to_string()
    ))
    .unwrap();
    assert!(matches!(
        stage(&config),
        Err(HostError::ShortInput {
            expected: 4,
            found: 3
        })
    ));
    fs::remove_file(input).ok();
}

#[test]
fn stage_config_file_roundtrips_through_device_bytes() {
    let path = scratch_file(
        "stage.toml",
        "seed = 21\ninit = \"negative\"\n[dims]\nn = 2\nc = 3\nh = 2\nw = 2\n",
    );
    let config = StageConfig::load(&path).unwrap();
    let tensor = stage(&config).unwrap();
    let bytes = tensor.to_le_bytes();
    assert_eq!(bytes.len(), config.dims.byte_len());
    let back = HostTensor::from_le_bytes(config.dims, &bytes).unwrap();
    assert_eq!(back, tensor);
    assert!(back.to_f32().iter().all(|&v| (-1.0..0.0).contains(&v)));
    fs::remove_file(path).ok();
}

#[test]
fn missing_config_file_is_io_error() {
    assert!(matches!(
        StageConfig::load("/nonexistent/halfcl/stage.toml"),
        Err(HostError::Io { .. })
    ));
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn host_tensor_decodes_what_it_encoded(values in proptest::collection::vec(-65504.0f32..65504.0, 1..32)) {
        let dims = Dims4d::new(1, 1, 1, values.len());
        let tensor = HostTensor::from_f32(dims, &values).unwrap();
        for (v, h) in tensor.to_f32().iter().zip(tensor.as_halves()) {
            prop_assert_eq!(v.to_bits(), decode_f16_to_f32(*h).to_bits());
        }
    }
}
