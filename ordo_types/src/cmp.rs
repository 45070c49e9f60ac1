//! Comparison helpers for callers that store encoded keys.

use crate::error::CodecError;
use crate::order::Order;
use anyhow::Result;
use std::cmp::Ordering;

/// Unsigned lexicographic comparison of two byte sequences.
pub fn compare(left: &[u8], right: &[u8]) -> Ordering {
    left.cmp(right)
}

/// Unsigned lexicographic comparison of two sub-ranges.
pub fn compare_range(
    left: &[u8],
    loffset: usize,
    llen: usize,
    right: &[u8],
    roffset: usize,
    rlen: usize,
) -> Result<Ordering> {
    let l = sub_range(left, loffset, llen)?;
    let r = sub_range(right, roffset, rlen)?;
    Ok(l.cmp(r))
}

fn sub_range(bytes: &[u8], offset: usize, len: usize) -> Result<&[u8]> {
    offset
        .checked_add(len)
        .and_then(|end| bytes.get(offset..end))
        .ok_or_else(|| {
            CodecError::capacity(format!(
                "Range {}+{} exceeds a buffer of {} bytes.",
                offset,
                len,
                bytes.len()
            ))
        })
}

/// Null-aware comparison, adjusted for `order`.
///
/// Null sorts before every value under [`Order::Ascending`] and after every value under
/// [`Order::Descending`], matching what comparing the encodings would produce.
pub fn compare_nullable<T>(
    order: Order,
    left: Option<&T>,
    right: Option<&T>,
    cmp: impl FnOnce(&T, &T) -> Ordering,
) -> Ordering {
    let ord = match (left, right) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(l), Some(r)) => cmp(l, r),
    };
    order.adjust(ord)
}

pub fn compare_values<T: Ord>(order: Order, left: Option<&T>, right: Option<&T>) -> Ordering {
    compare_nullable(order, left, right, T::cmp)
}
