//! Heterogeneous compound keys, after SQLite4's key encoding.
//!
//! Each field is a discriminant byte followed by a body:
//!
//! ```text
//! 0x05                       null
//! 0x06 | 0x07 | 0x23         NaN | -inf | +inf
//! 0x15                       zero
//! 0x17 + E  mantissa         positive, 1 <= E <= 10
//! 0x22  varuint(E)  mantissa positive, E > 10
//! 0x16  ~varuint(-E) mantissa positive, E <= 0
//! 0x13 - E | 0x08 | 0x14     negatives: the positive form's body, complemented
//! 0x24  utf8  0x00           text
//! 0x26  raw                  blob, last field only
//! 0x26  7-bit groups  0x00   blob, any other field
//! ```
//!
//! A number is normalized to `0.p1 p2 .. pn * 100^E`. The mantissa holds one byte per
//! base-100 digit pair `p`: `2p + 1`, except `2p` for the last. A real is expanded to the
//! exact decimal value of its double, so an integer and a real of equal value encode alike.

use crate::compound::numeric::Numeric;
use num_bigint::BigInt;
use std::cmp::Ordering;

mod blob;
mod compound_codec;
mod deser;
mod numeric;
mod reader;
mod ser;
mod tag;
pub use compound_codec::*;
pub use deser::*;
pub use ser::*;

#[derive(PartialEq, Clone, Debug)]
pub enum CompoundField {
    Null,
    /// Arbitrary precision.
    Integer(BigInt),
    Real(f64),
    Text(String),
    /// A blob in the last position. Its bytes run to the end of the key.
    BlobFinal(Vec<u8>),
    /// A blob in any position but the last.
    BlobMid(Vec<u8>),
}

impl CompoundField {
    fn type_rank(&self) -> u8 {
        match self {
            Self::Null => 0,
            Self::Integer(_) | Self::Real(_) => 1,
            Self::Text(_) => 2,
            Self::BlobFinal(_) | Self::BlobMid(_) => 3,
        }
    }
}

/// The natural order, which the encoding reproduces.
///
/// Integers and reals share one number line: NaN < -inf < finite < +inf. Numbers compare by
/// exact value, so `Integer(3)` equals `Real(3.0)`.
pub fn cmp_fields(a: &CompoundField, b: &CompoundField) -> Ordering {
    use CompoundField::*;
    match (a, b) {
        (Integer(_) | Real(_), Integer(_) | Real(_)) => Numeric::of(a).cmp(&Numeric::of(b)),
        (Text(a), Text(b)) => a.cmp(b),
        (BlobFinal(a) | BlobMid(a), BlobFinal(b) | BlobMid(b)) => a.cmp(b),
        _ => a.type_rank().cmp(&b.type_rank()),
    }
}

pub fn cmp_sequences(a: &[CompoundField], b: &[CompoundField]) -> Ordering {
    for (a, b) in a.iter().zip(b.iter()) {
        let ord = cmp_fields(a, b);
        if ord != Ordering::Equal {
            return ord;
        }
    }
    a.len().cmp(&b.len())
}
