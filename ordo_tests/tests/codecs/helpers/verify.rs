use anyhow::Result;
use itertools::Itertools;
use ordo_types::{ByteCursor, Codec, Order};
use std::cmp::Ordering;
use std::fmt::Debug;

/// Pairs beyond consecutive ones are checked among this many leading values.
const ALL_PAIRS_PREFIX: usize = 48;

/// Check both orders of a codec, and that they are bytewise complements.
pub fn verify_codec<C, F>(make: F, vals: &[Option<C::Value>]) -> Result<()>
where
    C: Codec,
    C::Value: Debug,
    F: Fn(Order) -> C,
{
    let asc = make(Order::Ascending);
    let dsc = make(Order::Descending);
    let asc_encs = verify_one(&asc, vals)?;
    let dsc_encs = verify_one(&dsc, vals)?;

    for (val, (a, d)) in vals.iter().zip(asc_encs.iter().zip(dsc_encs.iter())) {
        assert_eq!(a.len(), d.len(), "{val:?}");
        assert!(a.iter().zip(d.iter()).all(|(a, d)| a ^ d == 0xFF), "{val:?} {a:?} {d:?}");
    }
    Ok(())
}

/// Check round-trip, order and null placement for one codec; returns the encodings.
pub fn verify_one<C>(codec: &C, vals: &[Option<C::Value>]) -> Result<Vec<Vec<u8>>>
where
    C: Codec,
    C::Value: Debug,
{
    let encs = vals
        .iter()
        .map(|val| codec.encode(val.as_ref()))
        .collect::<Result<Vec<_>>>()?;

    verify_roundtrip(codec, vals, &encs)?;
    verify_order(codec, vals, &encs);
    verify_nulls(codec, vals, &encs)?;
    verify_cursor(codec, vals, &encs)?;

    Ok(encs)
}

fn is_self_delimiting<C: Codec>(codec: &C, val: &Option<C::Value>) -> bool {
    val.as_ref().map_or(true, |v| codec.is_self_delimiting(v))
}

fn verify_roundtrip<C>(codec: &C, vals: &[Option<C::Value>], encs: &[Vec<u8>]) -> Result<()>
where
    C: Codec,
    C::Value: Debug,
{
    for (val, enc) in vals.iter().zip(encs.iter()) {
        let decoded = codec.decode(enc)?;
        assert_eq!(
            Ordering::Equal,
            codec.compare(val.as_ref(), decoded.as_ref()),
            "{val:?} decoded as {decoded:?}"
        );

        if is_self_delimiting(codec, val) {
            let mut extended = enc.clone();
            extended.extend_from_slice(&[0x00, 0x01, 0xFF]);
            let (r_len, _) = codec.decode_prefix(&extended)?;
            assert_eq!(enc.len(), r_len, "{val:?}");
        }
    }
    Ok(())
}

fn verify_order<C>(codec: &C, vals: &[Option<C::Value>], encs: &[Vec<u8>])
where
    C: Codec,
    C::Value: Debug,
{
    let n = vals.len();
    let consecutive = (0..n).zip(1..n);
    let all_pairs = (0..n.min(ALL_PAIRS_PREFIX)).tuple_combinations::<(_, _)>();
    for (i, j) in consecutive.chain(all_pairs) {
        let exp = codec.compare(vals[i].as_ref(), vals[j].as_ref());
        let act = encs[i].cmp(&encs[j]);
        assert_eq!(exp, act, "{:?} vs {:?}", vals[i], vals[j]);
    }
}

fn verify_nulls<C>(codec: &C, vals: &[Option<C::Value>], encs: &[Vec<u8>]) -> Result<()>
where
    C: Codec,
    C::Value: Debug,
{
    if !codec.supports_null() {
        assert!(codec.encode(None).is_err());
        return Ok(());
    }
    let null = codec.encode(None)?;
    let exp = codec.order().adjust(Ordering::Less);
    for (val, enc) in vals.iter().zip(encs.iter()) {
        if val.is_some() {
            assert_eq!(exp, null.cmp(enc), "{val:?}");
        }
    }
    Ok(())
}

/// Write every value back to back through one cursor, then read them all back.
fn verify_cursor<C>(codec: &C, vals: &[Option<C::Value>], encs: &[Vec<u8>]) -> Result<()>
where
    C: Codec,
    C::Value: Debug,
{
    if !vals.iter().all(|val| is_self_delimiting(codec, val)) {
        return Ok(());
    }
    let total = encs.iter().map(Vec::len).sum();
    let mut cur = ByteCursor::with_capacity(total);
    for (val, enc) in vals.iter().zip(encs.iter()) {
        let w_len = codec.write(&mut cur, val.as_ref())?;
        assert_eq!(enc.len(), *w_len);
    }
    assert_eq!(0, cur.remaining());

    cur.rewind();
    for val in vals.iter() {
        let decoded = codec.read(&mut cur)?;
        assert_eq!(
            Ordering::Equal,
            codec.compare(val.as_ref(), decoded.as_ref()),
            "{val:?} read as {decoded:?}"
        );
    }
    assert_eq!(0, cur.remaining());
    Ok(())
}
