//! Compact variable-length encoding of `u64` magnitudes, after SQLite4's varint.
//!
//! The first byte alone determines the total length:
//!
//! ```text
//! first byte      total len   value
//! 0..=240         1           first
//! 241..=248       2           240 + 256 * (first - 241) + b1
//! 249             3           2288 + be16(b1..=b2)
//! 250             4           be24(b1..=b3)
//! 251             5           be32(b1..=b4)
//! 252             6           be40(b1..=b5)
//! 253             7           be48(b1..=b6)
//! 254             8           be56(b1..=b7)
//! 255             9           be64(b1..=b8)
//! ```

use crate::error::CodecError;
use crate::lengths::WriteLen;
use anyhow::Result;
use std::cmp::Ordering;


pub const MAX_LEN: usize = 9;

/// Total encoded length, given only the first byte.
pub const fn length_varu64(first: u8) -> usize {
    match first {
        0..=240 => 1,
        241..=248 => 2,
        249 => 3,
        250 => 4,
        251 => 5,
        252 => 6,
        253 => 7,
        254 => 8,
        255 => 9,
    }
}

pub fn encoded_len(v: u64) -> usize {
    if v <= 240 {
        1
    } else if v <= 2287 {
        2
    } else if v <= 67823 {
        3
    } else if v < 1 << 24 {
        4
    } else if v < 1 << 32 {
        5
    } else if v < 1 << 40 {
        6
    } else if v < 1 << 48 {
        7
    } else if v < 1 << 56 {
        8
    } else {
        9
    }
}

/// Encode `v` into the front of `dst`, returning the encoded length.
pub fn put_varuint64(dst: &mut [u8], v: u64) -> Result<usize> {
    let mut buf = [0u8; MAX_LEN];
    let len = encode_to_array(v, &mut buf);
    let avail = dst.len();
    let dst = dst.get_mut(..len).ok_or_else(|| {
        CodecError::capacity(format!(
            "Varuint {} needs {} bytes; {} available.",
            v, len, avail
        ))
    })?;
    dst.copy_from_slice(&buf[..len]);
    Ok(len)
}

pub fn encode_into(v: u64, dst: &mut Vec<u8>) -> WriteLen {
    let mut buf = [0u8; MAX_LEN];
    let len = encode_to_array(v, &mut buf);
    dst.extend_from_slice(&buf[..len]);
    WriteLen::new_manual(len)
}

fn encode_to_array(v: u64, buf: &mut [u8; MAX_LEN]) -> usize {
    let len = encoded_len(v);
    match len {
        1 => buf[0] = v as u8,
        2 => {
            let w = v - 240;
            buf[0] = (w / 256 + 241) as u8;
            buf[1] = (w % 256) as u8;
        }
        3 => {
            let w = v - 2288;
            buf[0] = 249;
            buf[1..3].copy_from_slice(&(w as u16).to_be_bytes());
        }
        _ => {
            // 250 carries 3 payload bytes, up to 255 carrying 8.
            buf[0] = (246 + len) as u8;
            let payload = len - 1;
            buf[1..len].copy_from_slice(&v.to_be_bytes()[8 - payload..]);
        }
    }
    len
}

/// Decode a varuint from the front of `src`, returning `(consumed_len, value)`.
pub fn get_varuint64(src: &[u8]) -> Result<(usize, u64)> {
    let first = *src
        .first()
        .ok_or_else(|| CodecError::malformed("Empty input where a varuint is expected."))?;
    let len = length_varu64(first);
    let bytes = src.get(..len).ok_or_else(|| {
        CodecError::malformed(format!(
            "Truncated varuint: {} bytes expected, {} available.",
            len,
            src.len()
        ))
    })?;
    let v = match len {
        1 => first as u64,
        2 => 240 + 256 * (first as u64 - 241) + bytes[1] as u64,
        3 => 2288 + u16::from_be_bytes([bytes[1], bytes[2]]) as u64,
        _ => {
            let mut be = [0u8; 8];
            be[8 - (len - 1)..].copy_from_slice(&bytes[1..]);
            u64::from_be_bytes(be)
        }
    };
    Ok((len, v))
}

/// Compare two `i64`s as unsigned 64-bit magnitudes. The sign bit is just the top bit.
pub fn unsigned_cmp(a: i64, b: i64) -> Ordering {
    (a as u64).cmp(&(b as u64))
}
