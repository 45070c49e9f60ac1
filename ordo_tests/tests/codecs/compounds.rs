use super::helpers::config::RandomConfig;
use super::helpers::values::gen_compound_key;
use super::helpers::verify::{verify_codec, verify_one};
use anyhow::Result;
use ordo_types::compound::{self, cmp_sequences, CompoundCodec};
use ordo_types::Order;
use std::cmp::Ordering;

pub fn test_compound_keys(cfg: &RandomConfig) -> Result<()> {
    let mut rng = cfg.rng();
    let n = cfg.count;

    for arity in 0..=4 {
        let keys = (0..n)
            .map(|_| Some(gen_compound_key(&mut rng, arity, false)))
            .collect::<Vec<_>>();
        verify_codec(|order| CompoundCodec::new(order, arity), &keys)?;

        let keys = (0..n)
            .map(|_| Some(gen_compound_key(&mut rng, arity, true)))
            .collect::<Vec<_>>();
        verify_one(&CompoundCodec::new(Order::Ascending, arity), &keys)?;

        // The free functions produce the ascending codec's bytes.
        for key in keys.iter().flatten() {
            let enc = compound::encode(key)?;
            let decoded = compound::decode(&enc, arity)?;
            assert_eq!(Ordering::Equal, cmp_sequences(key, &decoded), "{key:?}");
            assert_eq!(enc, compound::encode(&decoded)?);
        }
    }
    Ok(())
}
