//! 7-bit packing for blobs that are followed by more fields.
//!
//! The raw bytes are read as one big-endian bit stream and cut into 7-bit groups. Each group
//! is written with its high bit set, so no group is `0x00`; the final group is zero-padded on
//! the right and a `0x00` terminates the run. Comparing packed runs compares the raw bytes.

use crate::compound::reader::KeyReader;
use crate::error::CodecError;
use anyhow::Result;

pub fn packed_len(raw_len: usize) -> usize {
    (raw_len * 8 + 6) / 7 + 1
}

pub fn pack_into(raw: &[u8], dst: &mut Vec<u8>) {
    dst.reserve(packed_len(raw.len()));
    let mut acc: u16 = 0;
    let mut n_bits: u32 = 0;
    for &byte in raw {
        acc = (acc << 8) | byte as u16;
        n_bits += 8;
        while n_bits >= 7 {
            n_bits -= 7;
            dst.push(0x80 | ((acc >> n_bits) & 0x7F) as u8);
        }
        acc &= (1u16 << n_bits) - 1;
    }
    if n_bits > 0 {
        dst.push(0x80 | ((acc << (7 - n_bits)) & 0x7F) as u8);
    }
    dst.push(0x00);
}

pub fn unpack(r: &mut KeyReader) -> Result<Vec<u8>> {
    let groups = r.until_zero()?;
    let mut out = Vec::with_capacity(groups.len() * 7 / 8);
    let mut acc: u16 = 0;
    let mut n_bits: u32 = 0;
    for group in groups {
        if group & 0x80 == 0 {
            return Err(CodecError::malformed(format!(
                "Blob group 0x{:02X} lacks its high bit.",
                group
            )));
        }
        acc = (acc << 7) | (group & 0x7F) as u16;
        n_bits += 7;
        if n_bits >= 8 {
            n_bits -= 8;
            out.push((acc >> n_bits) as u8);
            acc &= (1u16 << n_bits) - 1;
        }
    }
    if acc != 0 || n_bits >= 7 {
        return Err(CodecError::malformed("Blob has non-zero or excess padding."));
    }
    Ok(out)
}
