//! Fixed-width codecs.
//!
//! Integers flip the sign bit so two's complement sorts as unsigned. Floats additionally
//! flip the magnitude bits of negatives, which yields IEEE-754 total order. Every codec
//! writes big-endian, then applies its [`crate::Order`] mask.

use crate::error::CodecError;
use anyhow::Result;

mod boolean;
mod float;
mod integer;
mod timestamp;
pub use boolean::*;
pub use float::*;
pub use integer::*;
pub use timestamp::*;

/// The first `W` bytes of `src`.
fn fixed_prefix<const W: usize>(src: &[u8], type_name: &str) -> Result<[u8; W]> {
    let mut buf = [0u8; W];
    let prefix = src.get(..W).ok_or_else(|| {
        CodecError::malformed(format!(
            "{} needs {} bytes; {} available.",
            type_name,
            W,
            src.len()
        ))
    })?;
    buf.copy_from_slice(prefix);
    Ok(buf)
}
