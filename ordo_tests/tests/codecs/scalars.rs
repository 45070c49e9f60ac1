use super::helpers::config::RandomConfig;
use super::helpers::values::{gen_f32, gen_f64, gen_i64, with_nulls};
use super::helpers::verify::verify_codec;
use anyhow::Result;
use ordo_types::scalar::{Boolean, Double, EpochMillis, Float, Int, Long, Short, Timestamp};
use rand::Rng;

pub fn test_scalars(cfg: &RandomConfig) -> Result<()> {
    let mut rng = cfg.rng();
    let n = cfg.count;

    let bools = (0..n).map(|_| rng.gen::<bool>()).collect::<Vec<_>>();
    let bools = with_nulls(&mut rng, bools, 3);
    verify_codec(Boolean::new, &bools)?;

    let shorts = (0..n).map(|_| Some(rng.gen::<i16>())).collect::<Vec<_>>();
    verify_codec(Short::new, &shorts)?;

    let ints = (0..n).map(|_| Some(gen_i64(&mut rng) as i32)).collect::<Vec<_>>();
    verify_codec(Int::new, &ints)?;

    let longs = (0..n).map(|_| Some(gen_i64(&mut rng))).collect::<Vec<_>>();
    verify_codec(Long::new, &longs)?;

    let floats = (0..n).map(|_| Some(gen_f32(&mut rng))).collect::<Vec<_>>();
    verify_codec(Float::new, &floats)?;

    let doubles = (0..n).map(|_| Some(gen_f64(&mut rng))).collect::<Vec<_>>();
    verify_codec(Double::new, &doubles)?;

    let stamps = (0..n)
        .map(|_| Some(EpochMillis::new(gen_i64(&mut rng))))
        .collect::<Vec<_>>();
    verify_codec(Timestamp::new, &stamps)?;

    Ok(())
}
