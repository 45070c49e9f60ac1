//! # Order-preserving key encodings
//!
//! Each codec maps values of one type to bytes such that comparing two encodings as
//! unsigned byte strings gives the same result as comparing the values, in the codec's
//! [`Order`]. A descending encoding is the bytewise complement of the ascending one.
//!
//! ```text
//! Boolean          0x00 null | 0x01 false | 0xFF true
//! Short/Int/Long   be(v ^ sign_bit)
//! Float/Double     be(bits ^ ((bits >> (w-1)) | sign_bit))
//! Timestamp        Long(millis since epoch)
//! Text             (b + 2)* 0x01 | null: 0x00 0x01
//! Compound key     see [`compound`]
//! Struct           per field: [marker] field; see [`schema`]
//! ```
//!
//! Every byte above is XORed with the codec's [`Order::mask`].

pub mod cmp;
pub mod codec;
pub mod compound;
mod cursor;
pub mod error;
mod lengths;
mod order;
pub mod render;
pub mod scalar;
pub mod schema;
pub mod text;
pub mod varuint;

pub use codec::{Codec, FieldCodec, FieldType, FieldValue};
pub use cursor::*;
pub use error::{kind_of, CodecError, ErrorKind};
pub use lengths::*;
pub use order::*;
