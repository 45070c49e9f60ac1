use crate::error::CodecError;
use crate::varuint;
use anyhow::Result;

/// Reads an encoded compound key front to back, unmasking each byte on the way.
pub struct KeyReader<'a> {
    src: &'a [u8],
    pos: usize,
    mask: u8,
}

impl<'a> KeyReader<'a> {
    pub fn new(src: &'a [u8], mask: u8) -> Self {
        Self { src, pos: 0, mask }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn byte(&mut self) -> Result<u8> {
        let byte = self
            .src
            .get(self.pos)
            .ok_or_else(|| CodecError::malformed("Truncated compound key."))?;
        self.pos += 1;
        Ok(byte ^ self.mask)
    }

    /// Everything not yet read.
    pub fn rest(&mut self) -> Vec<u8> {
        let rest = self.src[self.pos..].iter().map(|b| b ^ self.mask).collect();
        self.pos = self.src.len();
        rest
    }

    /// Bytes up to a `0x00` terminator, which is consumed but not returned.
    pub fn until_zero(&mut self) -> Result<Vec<u8>> {
        let mut out = vec![];
        loop {
            match self.byte() {
                Ok(0x00) => return Ok(out),
                Ok(byte) => out.push(byte),
                Err(_) => return Err(CodecError::malformed("Missing 0x00 terminator.")),
            }
        }
    }

    /// A varuint, with `flip` XORed into each byte on top of the mask.
    pub fn varuint(&mut self, flip: u8) -> Result<u64> {
        let first = self.byte()? ^ flip;
        let len = varuint::length_varu64(first);
        let mut buf = [0u8; varuint::MAX_LEN];
        buf[0] = first;
        for slot in buf.iter_mut().take(len).skip(1) {
            *slot = self.byte()? ^ flip;
        }
        let (_, v) = varuint::get_varuint64(&buf[..len])?;
        if varuint::encoded_len(v) != len {
            return Err(CodecError::malformed(format!(
                "Varuint {} written on {} bytes.",
                v, len
            )));
        }
        Ok(v)
    }
}
