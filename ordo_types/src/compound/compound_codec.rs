use crate::codec::{require_value, Codec};
use crate::compound::deser::decode_masked;
use crate::compound::{self, cmp_sequences, CompoundField};
use crate::error::CodecError;
use crate::lengths::WriteLen;
use crate::order::Order;
use anyhow::Result;
use std::cmp::Ordering;

/// Compound keys of a fixed arity, as one [`Codec`] value. This is how a compound key
/// becomes a struct field.
///
/// Descending keys are the complement of ascending ones. A final blob cannot be encoded
/// descending, because complementing raw trailing bytes does not reverse prefix order.
#[derive(Clone, Copy, Debug)]
pub struct CompoundCodec {
    order: Order,
    arity: usize,
}

impl CompoundCodec {
    pub fn new(order: Order, arity: usize) -> Self {
        Self { order, arity }
    }

    pub fn arity(&self) -> usize {
        self.arity
    }
}

impl Codec for CompoundCodec {
    type Value = Vec<CompoundField>;

    fn order(&self) -> Order {
        self.order
    }
    fn supports_null(&self) -> bool {
        false
    }

    fn encode_into(&self, val: Option<&Vec<CompoundField>>, dst: &mut Vec<u8>) -> Result<WriteLen> {
        let fields = require_value::<Self, _>(val)?;
        if fields.len() != self.arity {
            return Err(CodecError::unsupported(format!(
                "{} fields for a key of arity {}.",
                fields.len(),
                self.arity
            )));
        }
        if self.order == Order::Descending && !self.is_self_delimiting(fields) {
            return Err(CodecError::unsupported(
                "A final blob cannot be encoded descending.",
            ));
        }
        let start = dst.len();
        let w_len = compound::encode_into(fields, dst)?;
        self.order.apply_all(&mut dst[start..]);
        Ok(w_len)
    }

    fn decode_prefix(&self, src: &[u8]) -> Result<(usize, Option<Vec<CompoundField>>)> {
        let (r_len, fields) = decode_masked(src, self.arity, self.order.mask())?;
        Ok((r_len, Some(fields)))
    }

    fn cmp_values(&self, a: &Vec<CompoundField>, b: &Vec<CompoundField>) -> Ordering {
        cmp_sequences(a, b)
    }

    fn is_self_delimiting(&self, val: &Vec<CompoundField>) -> bool {
        !matches!(val.last(), Some(CompoundField::BlobFinal(_)))
    }
}
