//! The codec traits.
//!
//! [`Codec`] is the statically typed view: one implementation per logical type, each fixed
//! to an [`Order`] at construction. [`FieldCodec`] is the object-safe view over the closed
//! [`FieldValue`] sum type, so heterogeneous codecs can be listed in a schema.
//!
//! Null crosses both traits as `None`.

use crate::cmp::compare_nullable;
use crate::cursor::ByteCursor;
use crate::error::CodecError;
use crate::lengths::WriteLen;
use crate::order::Order;
use anyhow::Result;
use std::any;
use std::cmp::Ordering;
use std::io::Write;

mod field_value;
pub use field_value::*;

pub trait Codec {
    type Value;

    fn order(&self) -> Order;

    /// Whether this codec's own format can represent null.
    fn supports_null(&self) -> bool;

    /// Append the encoding of `val` to `dst`.
    ///
    /// On error, nothing has been appended.
    fn encode_into(&self, val: Option<&Self::Value>, dst: &mut Vec<u8>) -> Result<WriteLen>;

    /// Decode one value from the front of `src`, returning `(consumed_len, value)`.
    fn decode_prefix(&self, src: &[u8]) -> Result<(usize, Option<Self::Value>)>;

    /// The natural order of the type, ignoring [`Codec::order`].
    fn cmp_values(&self, a: &Self::Value, b: &Self::Value) -> Ordering;

    /// Whether `val`'s encoding can be followed by other bytes and still be decoded.
    fn is_self_delimiting(&self, _val: &Self::Value) -> bool {
        true
    }

    fn encode(&self, val: Option<&Self::Value>) -> Result<Vec<u8>> {
        let mut buf = vec![];
        self.encode_into(val, &mut buf)?;
        Ok(buf)
    }

    /// Decode `src`, which must hold exactly one encoded value.
    fn decode(&self, src: &[u8]) -> Result<Option<Self::Value>> {
        let (r_len, val) = self.decode_prefix(src)?;
        if r_len != src.len() {
            return Err(CodecError::malformed(format!(
                "{} consumed {} of {} bytes.",
                any::type_name::<Self>(),
                r_len,
                src.len()
            )));
        }
        Ok(val)
    }

    /// Write at the cursor's position, advancing it by the encoded length.
    fn write(&self, cur: &mut ByteCursor, val: Option<&Self::Value>) -> Result<WriteLen> {
        cur.put_with(|dst| self.encode_into(val, dst))
    }

    /// Read at the cursor's position, advancing it by the consumed length.
    fn read(&self, cur: &mut ByteCursor) -> Result<Option<Self::Value>> {
        let (r_len, val) = self.decode_prefix(cur.unread())?;
        cur.advance(r_len)?;
        Ok(val)
    }

    fn ser<W: Write>(&self, val: Option<&Self::Value>, w: &mut W) -> Result<WriteLen>
    where
        Self: Sized,
    {
        let buf = self.encode(val)?;
        w.write_all(&buf)?;
        Ok(WriteLen::new_manual(buf.len()))
    }

    /// Null-aware comparison in this codec's order. Agrees in sign with comparing the
    /// encodings of `a` and `b`.
    fn compare(&self, a: Option<&Self::Value>, b: Option<&Self::Value>) -> Ordering {
        compare_nullable(self.order(), a, b, |a, b| self.cmp_values(a, b))
    }
}

/// Reject null for a codec whose format has no null.
pub(crate) fn require_value<'a, C: ?Sized, V>(val: Option<&'a V>) -> Result<&'a V> {
    val.ok_or_else(|| {
        CodecError::unsupported(format!("{} cannot encode null.", any::type_name::<C>()))
    })
}

/// A [`Codec`] seen through [`FieldValue`]. Every codec whose value type is a
/// [`FieldType`] is a `FieldCodec`.
pub trait FieldCodec: Send + Sync {
    fn field_supports_null(&self) -> bool;
    fn field_is_self_delimiting(&self, val: &FieldValue) -> bool;
    fn encode_field(&self, val: Option<&FieldValue>, dst: &mut Vec<u8>) -> Result<WriteLen>;
    fn decode_field(&self, src: &[u8]) -> Result<(usize, Option<FieldValue>)>;
    fn compare_field(&self, a: Option<&FieldValue>, b: Option<&FieldValue>) -> Ordering;
}

impl<C> FieldCodec for C
where
    C: Codec + Send + Sync,
    C::Value: FieldType,
{
    fn field_supports_null(&self) -> bool {
        self.supports_null()
    }

    fn field_is_self_delimiting(&self, val: &FieldValue) -> bool {
        match C::Value::from_field(val) {
            Some(v) => self.is_self_delimiting(v),
            None => true,
        }
    }

    fn encode_field(&self, val: Option<&FieldValue>, dst: &mut Vec<u8>) -> Result<WriteLen> {
        let val = match val {
            None => None,
            Some(field) => Some(C::Value::from_field(field).ok_or_else(|| {
                CodecError::unsupported(format!(
                    "{} cannot encode {:?}.",
                    any::type_name::<C>(),
                    field
                ))
            })?),
        };
        self.encode_into(val, dst)
    }

    fn decode_field(&self, src: &[u8]) -> Result<(usize, Option<FieldValue>)> {
        let (r_len, val) = self.decode_prefix(src)?;
        Ok((r_len, val.map(FieldType::into_field)))
    }

    fn compare_field(&self, a: Option<&FieldValue>, b: Option<&FieldValue>) -> Ordering {
        let a_typed = a.map(C::Value::from_field);
        let b_typed = b.map(C::Value::from_field);
        match (a_typed, b_typed) {
            (Some(None), _) | (_, Some(None)) => {
                // Not this codec's type; fall back to the variant order.
                let a_rank = a.map(FieldValue::type_rank);
                let b_rank = b.map(FieldValue::type_rank);
                a_rank.cmp(&b_rank)
            }
            (a_typed, b_typed) => self.compare(a_typed.flatten(), b_typed.flatten()),
        }
    }
}
