//! Rows of heterogeneous fields, encoded by concatenating each field's encoding.
//!
//! A field whose codec has no null of its own is preceded by a marker byte, written with
//! the struct's order through the [`Boolean`] codec's bytes:
//!
//! ```text
//! null       BoolByte::False            (nothing follows)
//! not null   BoolByte::True   field
//! ```
//!
//! so that null sorts first ascending and last descending. Fields whose codec supports
//! null encode it themselves.

use crate::cmp::compare_nullable;
use crate::codec::{require_value, Codec, FieldCodec, FieldValue};
use crate::error::CodecError;
use crate::lengths::WriteLen;
use crate::order::Order;
use crate::scalar::Boolean;
use anyhow::{Context, Result};
use std::cmp::Ordering;


pub type Schema = Vec<Box<dyn FieldCodec>>;
pub type Row = Vec<Option<FieldValue>>;

pub struct StructCodec {
    schema: Schema,
    order: Order,
}

impl StructCodec {
    pub fn new(schema: Schema) -> Self {
        Self::with_order(schema, Order::Ascending)
    }

    /// `order` governs the null markers only; each field keeps its own codec's order.
    pub fn with_order(schema: Schema, order: Order) -> Self {
        Self { schema, order }
    }

    pub fn schema(&self) -> &[Box<dyn FieldCodec>] {
        &self.schema
    }

    pub fn arity(&self) -> usize {
        self.schema.len()
    }

    fn marker(&self, is_null: bool) -> u8 {
        Boolean::byte_for(Some(!is_null), self.order)
    }

    fn encode_fields(&self, row: &Row, dst: &mut Vec<u8>) -> Result<()> {
        if row.len() != self.schema.len() {
            return Err(CodecError::unsupported(format!(
                "Row of {} fields for a schema of {}.",
                row.len(),
                self.schema.len()
            )));
        }
        let last_i = self.schema.len().saturating_sub(1);
        for (i, (codec, val)) in self.schema.iter().zip(row.iter()).enumerate() {
            if let Some(val) = val {
                if i < last_i && !codec.field_is_self_delimiting(val) {
                    return Err(CodecError::unsupported(format!(
                        "Field {} must be the last field to hold {:?}.",
                        i, val
                    )));
                }
            }
            if !codec.field_supports_null() {
                dst.push(self.marker(val.is_none()));
                if val.is_none() {
                    continue;
                }
            }
            codec
                .encode_field(val.as_ref(), dst)
                .with_context(|| format!("Struct field {}", i))?;
        }
        Ok(())
    }
}

impl Codec for StructCodec {
    type Value = Row;

    fn order(&self) -> Order {
        self.order
    }
    fn supports_null(&self) -> bool {
        false
    }

    fn encode_into(&self, val: Option<&Row>, dst: &mut Vec<u8>) -> Result<WriteLen> {
        let row = require_value::<Self, _>(val)?;
        let start = dst.len();
        match self.encode_fields(row, dst) {
            Ok(()) => Ok(WriteLen::new_manual(dst.len() - start)),
            Err(e) => {
                dst.truncate(start);
                Err(e)
            }
        }
    }

    fn decode_prefix(&self, src: &[u8]) -> Result<(usize, Option<Row>)> {
        let null_marker = self.marker(true);
        let value_marker = self.marker(false);

        let mut r_len = 0;
        let mut row = Vec::with_capacity(self.schema.len());
        for (i, codec) in self.schema.iter().enumerate() {
            if !codec.field_supports_null() {
                let marker = *src.get(r_len).ok_or_else(|| {
                    CodecError::malformed(format!("Struct field {} is missing its marker.", i))
                })?;
                r_len += 1;
                if marker == null_marker {
                    row.push(None);
                    continue;
                } else if marker != value_marker {
                    return Err(CodecError::malformed(format!(
                        "Struct field {} has marker 0x{:02X}.",
                        i, marker
                    )));
                }
            }
            let (field_len, val) = codec
                .decode_field(&src[r_len..])
                .with_context(|| format!("Struct field {}", i))?;
            r_len += field_len;
            row.push(val);
        }
        Ok((r_len, Some(row)))
    }

    /// Field by field, each in its own codec's order, so this already agrees with the
    /// encodings and is not adjusted again.
    fn cmp_values(&self, a: &Row, b: &Row) -> Ordering {
        for (i, codec) in self.schema.iter().enumerate() {
            let (a, b) = match (a.get(i), b.get(i)) {
                (Some(a), Some(b)) => (a.as_ref(), b.as_ref()),
                _ => break,
            };
            let ord = match (a, b) {
                (Some(_), Some(_)) => codec.compare_field(a, b),
                _ if codec.field_supports_null() => codec.compare_field(a, b),
                _ => compare_nullable(self.order, a, b, |_, _| Ordering::Equal),
            };
            if ord != Ordering::Equal {
                return ord;
            }
        }
        a.len().cmp(&b.len())
    }

    fn is_self_delimiting(&self, row: &Row) -> bool {
        match (self.schema.last(), row.last()) {
            (Some(codec), Some(Some(val))) => codec.field_is_self_delimiting(val),
            _ => true,
        }
    }

    fn compare(&self, a: Option<&Row>, b: Option<&Row>) -> Ordering {
        compare_nullable(Order::Ascending, a, b, |a, b| self.cmp_values(a, b))
    }
}
