//! NumPy `.npy` v1.0 writer for 2-D f32 arrays.
//!
//! Layout: 6-byte magic, 2 version bytes, u16 little-endian header length,
//! ASCII dict header space-padded (plus trailing newline) so the preamble is
//! a multiple of 16 bytes, then the row-major little-endian f32 payload.
//! Output is byte-for-byte reproducible for identical input and readable by
//! any standard `.npy` reader.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

const MAGIC: &[u8; 6] = b"\x93NUMPY";
const VERSION_MAJOR: u8 = 1;
const VERSION_MINOR: u8 = 0;
const HEADER_ALIGN: usize = 16;

/// Serializes `rows` (each exactly `cols` values) into a `.npy` byte buffer.
///
/// Ragged input is a caller contract violation and is rejected before any
/// byte is produced. Zero rows is legal and yields a header declaring shape
/// `(0, cols)` with an empty payload.
pub fn encode_f32_matrix<R: AsRef<[f32]>>(rows: &[R], cols: usize) -> Result<Vec<u8>> {
    for (index, row) in rows.iter().enumerate() {
        let len = row.as_ref().len();
        if len != cols {
            bail!("ragged input: row {index} has {len} columns, expected {cols}");
        }
    }

    let header = build_header(rows.len(), cols)?;

    let mut out = Vec::with_capacity(MAGIC.len() + 4 + header.len() + rows.len() * cols * 4);
    out.extend_from_slice(MAGIC);
    out.push(VERSION_MAJOR);
    out.push(VERSION_MINOR);
    out.extend_from_slice(&(header.len() as u16).to_le_bytes());
    out.extend_from_slice(&header);

    for row in rows {
        for value in row.as_ref() {
            out.extend_from_slice(&value.to_le_bytes());
        }
    }

    Ok(out)
}

/// Serializes and writes the artifact to a caller-chosen path.
pub fn write_npy<R: AsRef<[f32]>>(path: impl AsRef<Path>, rows: &[R], cols: usize) -> Result<()> {
    let path = path.as_ref();
    let bytes = encode_f32_matrix(rows, cols)?;
    fs::write(path, bytes).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

/// Builds the padded dict header: `<f4` descriptor, C order, given shape.
/// The pad is computed so that magic + version + length field + header text
/// (including the trailing newline) lands on a 16-byte multiple.
fn build_header(rows: usize, cols: usize) -> Result<Vec<u8>> {
    let dict = format!("{{'descr': '<f4', 'fortran_order': False, 'shape': ({rows}, {cols}), }}");

    let base = MAGIC.len() + 2 + 2;
    let unpadded = base + dict.len() + 1;
    let pad = (HEADER_ALIGN - unpadded % HEADER_ALIGN) % HEADER_ALIGN;

    let mut header = dict.into_bytes();
    header.extend(std::iter::repeat(b' ').take(pad));
    header.push(b'\n');

    if header.len() > u16::MAX as usize {
        bail!("header length {} exceeds the v1.0 u16 field", header.len());
    }

    Ok(header)
}
