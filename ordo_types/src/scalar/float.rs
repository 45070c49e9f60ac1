use crate::codec::{require_value, Codec};
use crate::lengths::WriteLen;
use crate::order::Order;
use crate::scalar::fixed_prefix;
use anyhow::Result;
use std::any;
use std::cmp::Ordering;
use std::mem;

macro_rules! float_codec {
    ($(#[$doc:meta])* $name:ident, $float:ty, $int:ty, $uint:ty) => {
        $(#[$doc])*
        #[derive(Clone, Copy, Default, Debug)]
        pub struct $name {
            order: Order,
        }

        impl $name {
            pub const WIDTH: usize = mem::size_of::<$float>();
            const SHIFT: u32 = <$int>::BITS - 1;

            pub fn new(order: Order) -> Self {
                Self { order }
            }

            pub fn to_bytes(v: $float, order: Order) -> [u8; mem::size_of::<$float>()] {
                let raw = v.to_bits() as $int;
                // Non-negatives get the sign bit set; negatives get every bit flipped.
                let t = raw ^ ((raw >> Self::SHIFT) | <$int>::MIN);
                let mut bytes = (t as $uint).to_be_bytes();
                order.apply_all(&mut bytes);
                bytes
            }

            pub fn from_bytes(mut bytes: [u8; mem::size_of::<$float>()], order: Order) -> $float {
                order.apply_all(&mut bytes);
                let t = <$uint>::from_be_bytes(bytes) as $int;
                let raw = t ^ ((!t >> Self::SHIFT) | <$int>::MIN);
                <$float>::from_bits(raw as $uint)
            }
        }

        impl Codec for $name {
            type Value = $float;

            fn order(&self) -> Order {
                self.order
            }
            fn supports_null(&self) -> bool {
                false
            }

            fn encode_into(&self, val: Option<&$float>, dst: &mut Vec<u8>) -> Result<WriteLen> {
                let v = require_value::<Self, _>(val)?;
                dst.extend_from_slice(&Self::to_bytes(*v, self.order));
                Ok(WriteLen::new_manual(Self::WIDTH))
            }

            fn decode_prefix(&self, src: &[u8]) -> Result<(usize, Option<$float>)> {
                let bytes = fixed_prefix(src, any::type_name::<Self>())?;
                Ok((Self::WIDTH, Some(Self::from_bytes(bytes, self.order))))
            }

            /// IEEE-754 total order: -NaN < -inf < ... < -0.0 < +0.0 < ... < +inf < +NaN.
            fn cmp_values(&self, a: &$float, b: &$float) -> Ordering {
                a.total_cmp(b)
            }
        }
    };
}

float_codec!(
    /// IEEE-754 binary32.
    Float,
    f32,
    i32,
    u32
);
float_codec!(
    /// IEEE-754 binary64.
    Double,
    f64,
    i64,
    u64
);
