//! Terminated text.
//!
//! ```text
//! value:  (utf8_byte + 2)* 0x01
//! null:   0x00 0x01
//! ```
//!
//! Shifting every byte up by two frees `0x00` for null and `0x01` for the terminator, and
//! keeps a shorter string sorting before any extension of it. UTF-8 never produces bytes
//! `0xFE`/`0xFF`, so the shift never wraps.

use crate::codec::Codec;
use crate::error::CodecError;
use crate::lengths::WriteLen;
use crate::order::Order;
use anyhow::Result;
use std::cmp::Ordering;


const NULL: u8 = 0x00;
const TERM: u8 = 0x01;
const SHIFT: u8 = 2;

/// Encoded length, terminator included.
pub fn encoded_len(val: Option<&str>) -> usize {
    match val {
        None => 2,
        Some(s) => s.len() + 1,
    }
}

fn encode_text(val: Option<&str>, order: Order, dst: &mut Vec<u8>) -> WriteLen {
    let start = dst.len();
    match val {
        None => dst.push(NULL),
        Some(s) => dst.extend(s.bytes().map(|b| b.wrapping_add(SHIFT))),
    }
    dst.push(TERM);
    order.apply_all(&mut dst[start..]);
    WriteLen::new_manual(dst.len() - start)
}

/// Decode one value from the front of `src`. With a `limit`, the terminator must lie within
/// the first `limit` bytes.
fn decode_text(src: &[u8], order: Order, limit: Option<usize>) -> Result<(usize, Option<String>)> {
    let window = match limit {
        Some(max) if max < src.len() => &src[..max],
        _ => src,
    };
    let term_pos = match window.iter().position(|b| order.apply(*b) == TERM) {
        Some(pos) => pos,
        None => {
            if let Some(max) = limit {
                if src.len() > max {
                    return Err(CodecError::too_large(format!(
                        "No terminator within {} bytes.",
                        max
                    )));
                }
            }
            return Err(CodecError::malformed("Unterminated text."));
        }
    };
    let body = &src[..term_pos];
    if body.len() == 1 && order.apply(body[0]) == NULL {
        return Ok((term_pos + 1, None));
    }

    let mut bytes = Vec::with_capacity(body.len());
    for b in body {
        let b = order.apply(*b);
        if b == NULL {
            return Err(CodecError::malformed("Stray null marker inside text."));
        }
        bytes.push(b.wrapping_sub(SHIFT));
    }
    let s = String::from_utf8(bytes)
        .map_err(|e| CodecError::malformed(format!("Text is not UTF-8: {}", e)))?;
    Ok((term_pos + 1, Some(s)))
}

/// Unbounded UTF-8 text.
#[derive(Clone, Copy, Default, Debug)]
pub struct Text {
    order: Order,
}

impl Text {
    pub fn new(order: Order) -> Self {
        Self { order }
    }
}

impl Codec for Text {
    type Value = String;

    fn order(&self) -> Order {
        self.order
    }
    fn supports_null(&self) -> bool {
        true
    }

    fn encode_into(&self, val: Option<&String>, dst: &mut Vec<u8>) -> Result<WriteLen> {
        Ok(encode_text(val.map(String::as_str), self.order, dst))
    }

    fn decode_prefix(&self, src: &[u8]) -> Result<(usize, Option<String>)> {
        decode_text(src, self.order, None)
    }

    fn cmp_values(&self, a: &String, b: &String) -> Ordering {
        a.cmp(b)
    }
}

/// Text whose encoding, terminator included, fits within `max_len` bytes.
#[derive(Clone, Copy, Debug)]
pub struct BoundedText {
    order: Order,
    max_len: usize,
}

impl BoundedText {
    pub fn new(order: Order, max_len: usize) -> Self {
        Self { order, max_len }
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }
}

impl Codec for BoundedText {
    type Value = String;

    fn order(&self) -> Order {
        self.order
    }
    fn supports_null(&self) -> bool {
        true
    }

    fn encode_into(&self, val: Option<&String>, dst: &mut Vec<u8>) -> Result<WriteLen> {
        let val = val.map(String::as_str);
        let len = encoded_len(val);
        if len > self.max_len {
            return Err(CodecError::too_large(format!(
                "Encoded value of {} bytes does not fit on {} bytes.",
                len, self.max_len
            )));
        }
        Ok(encode_text(val, self.order, dst))
    }

    fn decode_prefix(&self, src: &[u8]) -> Result<(usize, Option<String>)> {
        decode_text(src, self.order, Some(self.max_len))
    }

    fn cmp_values(&self, a: &String, b: &String) -> Ordering {
        a.cmp(b)
    }
}
