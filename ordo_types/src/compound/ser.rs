use crate::compound::blob;
use crate::compound::numeric::Numeric;
use crate::compound::tag::Tag;
use crate::compound::CompoundField;
use crate::error::CodecError;
use crate::lengths::WriteLen;
use anyhow::Result;
use itertools::{Itertools, Position};

pub fn encode(fields: &[CompoundField]) -> Result<Vec<u8>> {
    let mut dst = vec![];
    encode_into(fields, &mut dst)?;
    Ok(dst)
}

/// Append the key for `fields` to `dst`. On error, nothing has been appended.
pub fn encode_into(fields: &[CompoundField], dst: &mut Vec<u8>) -> Result<WriteLen> {
    for (i, pos) in fields.iter().with_position().enumerate() {
        let is_last = matches!(pos, Position::Last(_) | Position::Only(_));
        validate(pos.into_inner(), is_last).map_err(|e| e.context(format!("Compound field {}", i)))?;
    }

    let start = dst.len();
    for field in fields {
        ser_field(field, dst);
    }
    Ok(WriteLen::new_manual(dst.len() - start))
}

fn validate(field: &CompoundField, is_last: bool) -> Result<()> {
    match field {
        CompoundField::BlobFinal(_) if !is_last => Err(CodecError::unsupported(
            "A final blob must be the last field.",
        )),
        CompoundField::BlobMid(_) if is_last => Err(CodecError::unsupported(
            "The last field's blob must be a final blob.",
        )),
        CompoundField::Text(s) if s.contains('\0') => {
            Err(CodecError::unsupported("Compound text cannot contain NUL."))
        }
        _ => Ok(()),
    }
}

fn ser_field(field: &CompoundField, dst: &mut Vec<u8>) {
    match field {
        CompoundField::Null => dst.push(Tag::Null as u8),
        CompoundField::Integer(i) => Numeric::from_int(i).ser(dst),
        CompoundField::Real(r) => Numeric::from_f64(*r).ser(dst),
        CompoundField::Text(s) => {
            dst.push(Tag::Text as u8);
            dst.extend_from_slice(s.as_bytes());
            dst.push(0x00);
        }
        CompoundField::BlobFinal(b) => {
            dst.push(Tag::Blob as u8);
            dst.extend_from_slice(b);
        }
        CompoundField::BlobMid(b) => {
            dst.push(Tag::Blob as u8);
            blob::pack_into(b, dst);
        }
    }
}
