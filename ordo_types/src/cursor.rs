use crate::error::CodecError;
use crate::lengths::WriteLen;
use anyhow::Result;

/// A fixed-capacity byte buffer with a position.
///
/// Codec `write`s append at the position and advance it by exactly the encoded length;
/// `read`s advance it by exactly the consumed length. A failed write or read leaves both the
/// bytes and the position untouched.
///
/// ```text
/// [ written / consumed  |  remaining                  ]
/// 0                   position                    capacity
/// ```
#[derive(Clone, Debug)]
pub struct ByteCursor {
    buf: Vec<u8>,
    pos: usize,
    /// Staging for encoders that append to a `Vec`. Reused across writes.
    scratch: Vec<u8>,
}

impl ByteCursor {
    /// A zero-filled buffer of `capacity` bytes, positioned at the start.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: vec![0u8; capacity],
            pos: 0,
            scratch: vec![],
        }
    }

    /// Wrap existing bytes for reading, positioned at the start.
    pub fn wrap(buf: Vec<u8>) -> Self {
        Self {
            buf,
            pos: 0,
            scratch: vec![],
        }
    }

    pub fn position(&self) -> usize {
        self.pos
    }
    pub fn set_position(&mut self, pos: usize) -> Result<()> {
        if pos > self.buf.len() {
            return Err(CodecError::capacity(format!(
                "Position {} is beyond capacity {}.",
                pos,
                self.buf.len()
            )));
        }
        self.pos = pos;
        Ok(())
    }
    pub fn rewind(&mut self) {
        self.pos = 0;
    }

    pub fn capacity(&self) -> usize {
        self.buf.len()
    }
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Bytes before the position.
    pub fn filled(&self) -> &[u8] {
        &self.buf[..self.pos]
    }
    /// Bytes from the position to the end.
    pub fn unread(&self) -> &[u8] {
        &self.buf[self.pos..]
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.buf
    }

    pub(crate) fn put(&mut self, bytes: &[u8]) -> Result<WriteLen> {
        self.check_room(bytes.len())?;
        self.buf[self.pos..self.pos + bytes.len()].copy_from_slice(bytes);
        self.pos += bytes.len();
        Ok(WriteLen::new_manual(bytes.len()))
    }

    /// Let `encode` append to the cleared scratch buffer, then put what it appended.
    pub(crate) fn put_with<F>(&mut self, encode: F) -> Result<WriteLen>
    where
        F: FnOnce(&mut Vec<u8>) -> Result<WriteLen>,
    {
        let mut scratch = std::mem::take(&mut self.scratch);
        scratch.clear();
        let res = encode(&mut scratch).and_then(|_| self.put(&scratch));
        self.scratch = scratch;
        res
    }

    fn check_room(&self, len: usize) -> Result<()> {
        if len > self.remaining() {
            return Err(CodecError::capacity(format!(
                "Writing {} bytes at position {} exceeds capacity {}.",
                len,
                self.pos,
                self.buf.len()
            )));
        }
        Ok(())
    }

    pub(crate) fn advance(&mut self, len: usize) -> Result<()> {
        self.set_position(self.pos + len)
    }
}
