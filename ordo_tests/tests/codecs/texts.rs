use super::helpers::config::RandomConfig;
use super::helpers::values::{gen_text, with_nulls};
use super::helpers::verify::verify_codec;
use anyhow::Result;
use ordo_types::text::{self, BoundedText, Text};
use ordo_types::{kind_of, Codec, ErrorKind, Order};

const MAX_LEN: usize = 16;

pub fn test_texts(cfg: &RandomConfig) -> Result<()> {
    let mut rng = cfg.rng();
    let n = cfg.count;

    let vals = (0..n).map(|_| gen_text(&mut rng, 6, true)).collect::<Vec<_>>();
    let vals = with_nulls(&mut rng, vals, 10);
    verify_codec(Text::new, &vals)?;

    let (fitting, oversized): (Vec<_>, Vec<_>) = vals
        .into_iter()
        .partition(|val| text::encoded_len(val.as_deref()) <= MAX_LEN);
    verify_codec(|order| BoundedText::new(order, MAX_LEN), &fitting)?;

    let codec = BoundedText::new(Order::Ascending, MAX_LEN);
    for val in oversized {
        let err = codec.encode(val.as_ref()).unwrap_err();
        assert_eq!(Some(ErrorKind::ValueTooLarge), kind_of(&err), "{val:?}");
    }
    Ok(())
}
