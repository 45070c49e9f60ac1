use crate::codec::Codec;
use crate::error::CodecError;
use crate::lengths::WriteLen;
use crate::order::Order;
use anyhow::Result;
use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use std::cmp::Ordering;

/// The three byte values a boolean can take, before the order mask.
#[repr(u8)]
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, FromPrimitive, Debug)]
pub enum BoolByte {
    Null = 0x00,
    False = 0x01,
    True = 0xFF,
}
impl From<Option<bool>> for BoolByte {
    fn from(val: Option<bool>) -> Self {
        match val {
            None => Self::Null,
            Some(false) => Self::False,
            Some(true) => Self::True,
        }
    }
}
impl From<BoolByte> for Option<bool> {
    fn from(byte: BoolByte) -> Self {
        match byte {
            BoolByte::Null => None,
            BoolByte::False => Some(false),
            BoolByte::True => Some(true),
        }
    }
}

#[derive(Clone, Copy, Default, Debug)]
pub struct Boolean {
    order: Order,
}

impl Boolean {
    pub const WIDTH: usize = 1;

    pub fn new(order: Order) -> Self {
        Self { order }
    }

    /// The masked byte for `val`.
    pub fn byte_for(val: Option<bool>, order: Order) -> u8 {
        order.apply(BoolByte::from(val) as u8)
    }

    pub fn from_byte(byte: u8, order: Order) -> Result<Option<bool>> {
        let unmasked = order.apply(byte);
        let byte = BoolByte::from_u8(unmasked).ok_or_else(|| {
            CodecError::malformed(format!("Boolean byte 0x{:02X} under {:?}.", byte, order))
        })?;
        Ok(byte.into())
    }
}

impl Codec for Boolean {
    type Value = bool;

    fn order(&self) -> Order {
        self.order
    }
    fn supports_null(&self) -> bool {
        true
    }

    fn encode_into(&self, val: Option<&bool>, dst: &mut Vec<u8>) -> Result<WriteLen> {
        dst.push(Self::byte_for(val.copied(), self.order));
        Ok(WriteLen::new_manual(Self::WIDTH))
    }

    fn decode_prefix(&self, src: &[u8]) -> Result<(usize, Option<bool>)> {
        let byte = *src
            .first()
            .ok_or_else(|| CodecError::malformed("Empty input where a boolean is expected."))?;
        let val = Self::from_byte(byte, self.order)?;
        Ok((Self::WIDTH, val))
    }

    fn cmp_values(&self, a: &bool, b: &bool) -> Ordering {
        a.cmp(b)
    }
}
