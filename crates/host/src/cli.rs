//! The `halfcl` command line.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use halfcl_half::{classify_f16, classify_f32, decode_f16_to_f32, encode_f32_to_f16, BINARY16};
use log::info;
use serde_json::{json, Value};

use crate::{stage, HostError, StageConfig};

#[derive(Parser, Debug)]
#[command(name = "halfcl", version, about = "Half float conversion and host staging", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the half bit pattern of each value.
    Encode {
        #[arg(allow_negative_numbers = true, required = true)]
        values: Vec<f32>,
    },
    /// Print the f32 value of each half bit pattern.
    Decode {
        #[arg(required = true, help = "Bit patterns in hex, with or without a 0x prefix")]
        patterns: Vec<String>,
    },
    /// Print the fields of a value and its half round trip as JSON.
    Inspect {
        #[arg(allow_negative_numbers = true)]
        value: f32,
    },
    /// Build a host tensor from a TOML config and write its device bytes.
    Stage {
        config: PathBuf,

        #[arg(long, help = "Overrides `output` from the config")]
        output: Option<PathBuf>,
    },
}

/// Runs the CLI with the given arguments (including the program name).
pub fn halfcl_cli(args: Vec<String>) -> Result<(), HostError> {
    let cli = Cli::parse_from(args);
    let stdout = io::stdout();
    run(cli, &mut stdout.lock())
}

fn run<W: Write>(cli: Cli, out: &mut W) -> Result<(), HostError> {
    let io_err = |e| HostError::io("<stdout>", e);

    match cli.command {
        Commands::Encode { values } => {
            for value in values {
                writeln!(out, "{:#06x}", encode_f32_to_f16(value)).map_err(io_err)?;
            }
        }
        Commands::Decode { patterns } => {
            for pattern in patterns {
                let bits = parse_half_hex(&pattern)?;
                writeln!(out, "{}", decode_f16_to_f32(bits)).map_err(io_err)?;
            }
        }
        Commands::Inspect { value } => {
            let report = inspect(value);
            let text = serde_json::to_string_pretty(&report)
                .map_err(|e| HostError::io("<stdout>", e.into()))?;
            writeln!(out, "{text}").map_err(io_err)?;
        }
        Commands::Stage { config, output } => {
            let config = StageConfig::load(&config)?;
            let tensor = stage(&config)?;
            let bytes = tensor.to_le_bytes();
            match output.or(config.output) {
                Some(path) => {
                    fs::write(&path, &bytes)
                        .map_err(|e| HostError::io(path.display().to_string(), e))?;
                    info!("wrote {} bytes to {}", bytes.len(), path.display());
                }
                None => {
                    writeln!(out, "{} {} bytes", tensor.dims(), bytes.len()).map_err(io_err)?;
                }
            }
        }
    }
    Ok(())
}

/// Parses a half bit pattern written in hex, e.g. `0x3c00` or `3C00`.
pub fn parse_half_hex(s: &str) -> Result<u16, HostError> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    if digits.is_empty() || digits.len() > 4 {
        return Err(HostError::InvalidHex(s.to_string()));
    }
    u16::from_str_radix(digits, 16).map_err(|_| HostError::InvalidHex(s.to_string()))
}

/// Field breakdown of `value` and of its half encoding.
pub fn inspect(value: f32) -> Value {
    let half = encode_f32_to_f16(value);
    let bits = half as u32;
    let back = decode_f16_to_f32(half);
    json!({
        "value": finite_or_string(value),
        "f32_bits": format!("{:#010x}", value.to_bits()),
        "f32_category": classify_f32(value).as_str(),
        "half_bits": format!("{half:#06x}"),
        "half_category": classify_f16(half).as_str(),
        "sign": BINARY16.is_negative(bits),
        "exponent": BINARY16.exponent_field(bits),
        "fraction": BINARY16.fraction_field(bits),
        "decoded": finite_or_string(back),
        "exact": back.to_bits() == value.to_bits(),
    })
}

// JSON has no literal for infinities or NaN.
fn finite_or_string(v: f32) -> Value {
    if v.is_finite() {
        json!(v)
    } else {
        json!(v.to_string())
    }
}
