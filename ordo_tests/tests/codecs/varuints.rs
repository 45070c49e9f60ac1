use super::helpers::config::RandomConfig;
use anyhow::Result;
use ordo_types::varuint::{self, encoded_len, get_varuint64, length_varu64, put_varuint64};
use rand::Rng;

pub fn test_varuints(cfg: &RandomConfig) -> Result<()> {
    let mut rng = cfg.rng();
    let mut vals = (0..cfg.count)
        .map(|_| {
            let bits = rng.gen_range(0..=64);
            if bits == 0 {
                0
            } else {
                rng.gen::<u64>() >> (64 - bits)
            }
        })
        .collect::<Vec<_>>();
    vals.sort();

    let mut prev: Option<Vec<u8>> = None;
    for v in vals {
        let mut enc = vec![];
        let w_len = varuint::encode_into(v, &mut enc);
        assert_eq!(encoded_len(v), *w_len);
        assert_eq!(enc.len(), length_varu64(enc[0]), "{v}");

        let mut arr = [0u8; varuint::MAX_LEN];
        assert_eq!(enc.len(), put_varuint64(&mut arr, v)?);
        assert_eq!(&enc[..], &arr[..enc.len()]);

        enc.push(0xFF);
        assert_eq!((enc.len() - 1, v), get_varuint64(&enc)?);
        enc.pop();

        if let Some(prev) = prev {
            assert!(prev <= enc, "{v}");
        }
        prev = Some(enc);
    }
    Ok(())
}
