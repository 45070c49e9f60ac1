use num_bigint::BigInt;
use ordo_types::compound::CompoundField;
use rand::rngs::StdRng;
use rand::Rng;

/// Replace roughly one in `one_in` values with null.
pub fn with_nulls<T>(rng: &mut StdRng, vals: Vec<T>, one_in: u32) -> Vec<Option<T>> {
    vals.into_iter()
        .map(|v| if rng.gen_ratio(1, one_in) { None } else { Some(v) })
        .collect()
}

pub fn gen_f64(rng: &mut StdRng) -> f64 {
    const SPECIALS: [f64; 8] = [
        f64::NAN,
        f64::NEG_INFINITY,
        f64::INFINITY,
        0.0,
        -0.0,
        f64::MIN_POSITIVE,
        f64::MAX,
        f64::MIN,
    ];
    match rng.gen_range(0..4) {
        0 => f64::from_bits(rng.gen()),
        1 => rng.gen_range(-1e6..1e6),
        2 => rng.gen_range(-100i64..100) as f64,
        _ => SPECIALS[rng.gen_range(0..SPECIALS.len())],
    }
}

pub fn gen_f32(rng: &mut StdRng) -> f32 {
    match rng.gen_range(0..3) {
        0 => f32::from_bits(rng.gen()),
        1 => rng.gen_range(-1e3..1e3),
        _ => [f32::NAN, f32::NEG_INFINITY, f32::INFINITY, 0.0, -0.0][rng.gen_range(0..5)],
    }
}

/// Integers skewed toward small magnitudes, where neighbors share prefixes.
pub fn gen_i64(rng: &mut StdRng) -> i64 {
    rng.gen::<i64>() >> rng.gen_range(0..64)
}

/// Up to `max_chars` characters from a small alphabet mixing 1- to 4-byte UTF-8.
pub fn gen_text(rng: &mut StdRng, max_chars: usize, allow_nul: bool) -> String {
    const ALPHABET: [char; 7] = ['a', 'b', 'z', '\u{7F}', 'é', '€', '𝄞'];
    let len = rng.gen_range(0..=max_chars);
    (0..len)
        .map(|_| {
            if allow_nul && rng.gen_ratio(1, 10) {
                '\0'
            } else {
                ALPHABET[rng.gen_range(0..ALPHABET.len())]
            }
        })
        .collect()
}

fn gen_bytes(rng: &mut StdRng, max_len: usize) -> Vec<u8> {
    let len = rng.gen_range(0..=max_len);
    (0..len).map(|_| [0x00, 0x01, 0x7F, 0x80, 0xFF][rng.gen_range(0..5)]).collect()
}

/// Mostly `i64` range, sometimes scaled past it.
fn gen_bigint(rng: &mut StdRng) -> BigInt {
    let int = BigInt::from(gen_i64(rng));
    if rng.gen_ratio(1, 4) {
        int * BigInt::from(10u32).pow(rng.gen_range(1..25)) + rng.gen_range(0..1000u32)
    } else {
        int
    }
}

/// A compound field valid at its position. A blob in the last position becomes a final blob
/// only if `final_blobs`; otherwise null.
pub fn gen_compound_field(rng: &mut StdRng, is_last: bool, final_blobs: bool) -> CompoundField {
    match rng.gen_range(0..6) {
        0 => CompoundField::Null,
        1 => CompoundField::Integer(gen_bigint(rng)),
        2 => CompoundField::Real(gen_f64(rng)),
        3 => CompoundField::Text(gen_text(rng, 3, false)),
        _ => match (is_last, final_blobs) {
            (false, _) => CompoundField::BlobMid(gen_bytes(rng, 4)),
            (true, true) => CompoundField::BlobFinal(gen_bytes(rng, 4)),
            (true, false) => CompoundField::Null,
        },
    }
}

pub fn gen_compound_key(rng: &mut StdRng, arity: usize, final_blobs: bool) -> Vec<CompoundField> {
    (0..arity)
        .map(|i| gen_compound_field(rng, i + 1 == arity, final_blobs))
        .collect()
}
