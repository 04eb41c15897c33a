//! Decimal text ingestion into half buffers, and the reverse dump.
//!
//! Input is whitespace-separated `f32` literals in any layout (one per line,
//! several per line, or mixed).

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use halfcl_half::{decode_f16_to_f32, encode_f32_to_f16};
use log::debug;

use crate::HostError;

/// Upper bound on the up-front reservation; `count` comes from the caller and
/// the input may be much shorter.
const MAX_PREALLOC: usize = 1 << 16;

/// Reads exactly `count` values from `reader` and encodes them.
///
/// Tokens after the first `count` are ignored.
///
/// # Example
///
/// ```
/// use halfcl_host::read_halves_from_text;
///
/// let halves = read_halves_from_text("1.0 -2\n0.5".as_bytes(), 3).unwrap();
/// assert_eq!(halves, vec![0x3C00, 0xC000, 0x3800]);
/// ```
pub fn read_halves_from_text<R: BufRead>(reader: R, count: usize) -> Result<Vec<u16>, HostError> {
    read_halves(reader, count, "<reader>")
}

/// Opens `path` and reads exactly `count` values from it.
pub fn read_halves_from_file(path: impl AsRef<Path>, count: usize) -> Result<Vec<u16>, HostError> {
    let path = path.as_ref();
    let name = path.display().to_string();
    let file = File::open(path).map_err(|e| HostError::io(&name, e))?;
    read_halves(BufReader::new(file), count, &name)
}

fn read_halves<R: BufRead>(reader: R, count: usize, name: &str) -> Result<Vec<u16>, HostError> {
    let mut halves = Vec::with_capacity(count.min(MAX_PREALLOC));
    let mut trailing = 0usize;
    for line in reader.lines() {
        let line = line.map_err(|e| HostError::io(name, e))?;
        for token in line.split_whitespace() {
            if halves.len() == count {
                trailing += 1;
                continue;
            }
            let value: f32 = token.parse().map_err(|_| HostError::Parse {
                index: halves.len(),
                token: token.to_string(),
            })?;
            halves.push(encode_f32_to_f16(value));
        }
    }
    if halves.len() < count {
        return Err(HostError::ShortInput {
            expected: count,
            found: halves.len(),
        });
    }
    if trailing > 0 {
        debug!("{name}: ignored {trailing} values after the first {count}");
    }
    debug!("{name}: read {count} values");
    Ok(halves)
}

/// Writes one decoded value per line.
pub fn write_halves_as_text<W: Write>(mut writer: W, halves: &[u16]) -> Result<(), HostError> {
    for &h in halves {
        writeln!(writer, "{}", decode_f16_to_f32(h)).map_err(|e| HostError::io("<writer>", e))?;
    }
    writer.flush().map_err(|e| HostError::io("<writer>", e))
}
