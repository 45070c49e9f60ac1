use crate::codec::{require_value, Codec};
use crate::lengths::WriteLen;
use crate::order::Order;
use crate::scalar::fixed_prefix;
use anyhow::Result;
use std::any;
use std::cmp::Ordering;
use std::mem;

macro_rules! integer_codec {
    ($(#[$doc:meta])* $name:ident, $int:ty, $uint:ty) => {
        $(#[$doc])*
        #[derive(Clone, Copy, Default, Debug)]
        pub struct $name {
            order: Order,
        }

        impl $name {
            pub const WIDTH: usize = mem::size_of::<$int>();

            pub fn new(order: Order) -> Self {
                Self { order }
            }

            pub fn to_bytes(v: $int, order: Order) -> [u8; mem::size_of::<$int>()] {
                let flipped = (v as $uint) ^ (<$int>::MIN as $uint);
                let mut bytes = flipped.to_be_bytes();
                order.apply_all(&mut bytes);
                bytes
            }

            pub fn from_bytes(mut bytes: [u8; mem::size_of::<$int>()], order: Order) -> $int {
                order.apply_all(&mut bytes);
                let flipped = <$uint>::from_be_bytes(bytes);
                (flipped ^ (<$int>::MIN as $uint)) as $int
            }
        }

        impl Codec for $name {
            type Value = $int;

            fn order(&self) -> Order {
                self.order
            }
            fn supports_null(&self) -> bool {
                false
            }

            fn encode_into(&self, val: Option<&$int>, dst: &mut Vec<u8>) -> Result<WriteLen> {
                let v = require_value::<Self, _>(val)?;
                dst.extend_from_slice(&Self::to_bytes(*v, self.order));
                Ok(WriteLen::new_manual(Self::WIDTH))
            }

            fn decode_prefix(&self, src: &[u8]) -> Result<(usize, Option<$int>)> {
                let bytes = fixed_prefix(src, any::type_name::<Self>())?;
                Ok((Self::WIDTH, Some(Self::from_bytes(bytes, self.order))))
            }

            fn cmp_values(&self, a: &$int, b: &$int) -> Ordering {
                a.cmp(b)
            }
        }
    };
}

integer_codec!(
    /// 16-bit signed integers.
    Short,
    i16,
    u16
);
integer_codec!(
    /// 32-bit signed integers.
    Int,
    i32,
    u32
);
integer_codec!(
    /// 64-bit signed integers.
    Long,
    i64,
    u64
);
