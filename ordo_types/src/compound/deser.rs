use crate::compound::blob;
use crate::compound::numeric::Numeric;
use crate::compound::reader::KeyReader;
use crate::compound::tag::{Discriminant, Tag};
use crate::compound::CompoundField;
use crate::error::CodecError;
use anyhow::{Context, Result};

/// Decode a key of exactly `arity` fields, which must span all of `src`.
pub fn decode(src: &[u8], arity: usize) -> Result<Vec<CompoundField>> {
    let (r_len, fields) = decode_prefix(src, arity)?;
    if r_len != src.len() {
        return Err(CodecError::malformed(format!(
            "{} fields consumed {} of {} bytes.",
            arity,
            r_len,
            src.len()
        )));
    }
    Ok(fields)
}

/// Decode `arity` fields from the front of `src`, returning `(consumed_len, fields)`.
///
/// A blob in the last position is read as a final blob, so it consumes the rest of `src`.
pub fn decode_prefix(src: &[u8], arity: usize) -> Result<(usize, Vec<CompoundField>)> {
    decode_masked(src, arity, 0x00)
}

pub(crate) fn decode_masked(
    src: &[u8],
    arity: usize,
    mask: u8,
) -> Result<(usize, Vec<CompoundField>)> {
    let mut r = KeyReader::new(src, mask);
    let mut fields = Vec::with_capacity(arity);
    for i in 0..arity {
        let field =
            deser_field(&mut r, i + 1 == arity).with_context(|| format!("Compound field {}", i))?;
        fields.push(field);
    }
    Ok((r.pos(), fields))
}

fn deser_field(r: &mut KeyReader, is_last: bool) -> Result<CompoundField> {
    let byte = r.byte()?;
    let disc = Discriminant::from_byte(byte)
        .ok_or_else(|| CodecError::malformed(format!("Unknown discriminant 0x{:02X}.", byte)))?;
    match disc {
        Discriminant::Tag(Tag::Null) => Ok(CompoundField::Null),
        Discriminant::Tag(Tag::Text) => {
            let bytes = r.until_zero()?;
            let s = String::from_utf8(bytes)
                .map_err(|e| CodecError::malformed(format!("Text is not UTF-8: {}", e)))?;
            Ok(CompoundField::Text(s))
        }
        Discriminant::Tag(Tag::Blob) if is_last => Ok(CompoundField::BlobFinal(r.rest())),
        Discriminant::Tag(Tag::Blob) => Ok(CompoundField::BlobMid(blob::unpack(r)?)),
        _ => Numeric::deser(disc, r)?.to_field(),
    }
}
