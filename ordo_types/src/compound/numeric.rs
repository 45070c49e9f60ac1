use crate::compound::reader::KeyReader;
use crate::compound::tag::{Discriminant, Tag, MEDIUM_MAX_EXP};
use crate::compound::CompoundField;
use crate::error::CodecError;
use crate::order::Order;
use crate::varuint;
use anyhow::Result;
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Zero;
use std::cmp::Reverse;

/// Largest exponent decoded into an integer, about two million decimal digits.
const MAX_INTEGER_EXP: i64 = 1 << 20;

const F64_FRACTION_BITS: u32 = 52;
const F64_EXP_BIAS: i64 = 1075;
const F64_SUBNORMAL_EXP: i64 = -1074;

/// A non-zero finite magnitude `0.p1 p2 .. pn * 100^exp`, each `p` a base-100 digit, with
/// `p1` and `pn` non-zero.
///
/// Member order makes the derived `Ord` the numeric order.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Debug)]
pub struct Magnitude {
    exp: i64,
    pairs: Vec<u8>,
}

/// Integers and reals on one number line. The derived `Ord` is the natural order.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Debug)]
pub enum Numeric {
    NaN,
    NegInf,
    Neg(Reverse<Magnitude>),
    Zero,
    Pos(Magnitude),
    PosInf,
}

impl Magnitude {
    /// `digits` are ASCII decimal digits, the first non-zero, for `0.d1 d2 .. * 10^exp10`.
    fn from_digits(digits: &[u8], exp10: i64) -> Self {
        let mut ds = Vec::with_capacity(digits.len() + 2);
        let exp = if exp10.rem_euclid(2) == 0 {
            exp10 / 2
        } else {
            ds.push(0);
            (exp10 + 1) / 2
        };
        ds.extend(digits.iter().map(|d| d - b'0'));
        if ds.len() % 2 == 1 {
            ds.push(0);
        }
        let mut pairs = ds.chunks(2).map(|c| c[0] * 10 + c[1]).collect::<Vec<_>>();
        while pairs.last() == Some(&0) {
            pairs.pop();
        }
        Self { exp, pairs }
    }

    /// The non-zero value `n / 10^scale`.
    fn from_scaled(n: &BigUint, scale: u64) -> Self {
        let digits = n.to_string();
        Self::from_digits(digits.as_bytes(), digits.len() as i64 - scale as i64)
    }

    fn is_integral(&self) -> bool {
        self.exp >= self.pairs.len() as i64
    }

    fn to_integer(&self) -> Result<BigUint> {
        if self.exp > MAX_INTEGER_EXP {
            return Err(CodecError::too_large(format!(
                "Integer exponent {} exceeds {}.",
                self.exp, MAX_INTEGER_EXP
            )));
        }
        let mut digits = self
            .pairs
            .iter()
            .map(|p| format!("{:02}", p))
            .collect::<String>();
        for _ in self.pairs.len() as i64..self.exp {
            digits.push_str("00");
        }
        digits
            .parse::<BigUint>()
            .map_err(|e| CodecError::malformed(format!("Integer {}: {}", digits, e)))
    }

    fn to_field(&self, negative: bool) -> Result<CompoundField> {
        if self.is_integral() {
            let sign = if negative { Sign::Minus } else { Sign::Plus };
            let int = BigInt::from_biguint(sign, self.to_integer()?);
            return Ok(CompoundField::Integer(int));
        }
        // Every fraction written by `Numeric::from_f64` is the exact value of a double, so
        // parsing it is exact.
        let digits = self
            .pairs
            .iter()
            .map(|p| format!("{:02}", p))
            .collect::<String>();
        let sign = if negative { "-" } else { "" };
        let repr = format!("{}0.{}e{}", sign, digits, self.exp.saturating_mul(2));
        let real = repr
            .parse::<f64>()
            .map_err(|e| CodecError::malformed(format!("Number {}: {}", repr, e)))?;
        Ok(CompoundField::Real(real))
    }

    fn ser(&self, negative: bool, dst: &mut Vec<u8>) {
        let disc = match (self.exp, negative) {
            (exp, false) if exp > MEDIUM_MAX_EXP => Discriminant::Tag(Tag::PosLarge),
            (exp, true) if exp > MEDIUM_MAX_EXP => Discriminant::Tag(Tag::NegLarge),
            (exp, false) if exp <= 0 => Discriminant::Tag(Tag::PosSmall),
            (exp, true) if exp <= 0 => Discriminant::Tag(Tag::NegSmall),
            (exp, false) => Discriminant::PosMedium(exp),
            (exp, true) => Discriminant::NegMedium(exp),
        };
        dst.push(disc.to_byte());

        let body_start = dst.len();
        if self.exp > MEDIUM_MAX_EXP {
            varuint::encode_into(self.exp as u64, dst);
        } else if self.exp <= 0 {
            let exp_start = dst.len();
            varuint::encode_into(self.exp.unsigned_abs(), dst);
            // A smaller magnitude has a larger negated exponent.
            Order::Descending.apply_all(&mut dst[exp_start..]);
        }
        for (i, p) in self.pairs.iter().enumerate() {
            let more = (i + 1 < self.pairs.len()) as u8;
            dst.push(2 * p + more);
        }
        if negative {
            Order::Descending.apply_all(&mut dst[body_start..]);
        }
    }
}

impl Numeric {
    pub fn from_int(v: &BigInt) -> Self {
        if v.is_zero() {
            return Self::Zero;
        }
        let mag = Magnitude::from_scaled(v.magnitude(), 0);
        Self::signed(v.sign() == Sign::Minus, mag)
    }

    /// A finite double is `mantissa * 2^exp2`, whose decimal expansion always terminates.
    /// The magnitude holds that expansion in full, so a real and an integer of equal value
    /// normalize identically.
    pub fn from_f64(v: f64) -> Self {
        if v.is_nan() {
            return Self::NaN;
        }
        if v.is_infinite() {
            return if v < 0.0 { Self::NegInf } else { Self::PosInf };
        }
        if v == 0.0 {
            return Self::Zero;
        }
        let bits = v.abs().to_bits();
        let biased = (bits >> F64_FRACTION_BITS) as i64;
        let fraction = bits & ((1u64 << F64_FRACTION_BITS) - 1);
        let (mantissa, exp2) = if biased == 0 {
            (fraction, F64_SUBNORMAL_EXP)
        } else {
            (fraction | 1u64 << F64_FRACTION_BITS, biased - F64_EXP_BIAS)
        };
        let mag = if exp2 >= 0 {
            Magnitude::from_scaled(&(BigUint::from(mantissa) << exp2 as usize), 0)
        } else {
            // m / 2^k == m * 5^k / 10^k
            let scale = exp2.unsigned_abs();
            let n = BigUint::from(mantissa) * BigUint::from(5u32).pow(scale as u32);
            Magnitude::from_scaled(&n, scale)
        };
        Self::signed(v < 0.0, mag)
    }

    fn signed(negative: bool, mag: Magnitude) -> Self {
        if negative {
            Self::Neg(Reverse(mag))
        } else {
            Self::Pos(mag)
        }
    }

    pub fn of(field: &CompoundField) -> Option<Self> {
        match field {
            CompoundField::Integer(i) => Some(Self::from_int(i)),
            CompoundField::Real(r) => Some(Self::from_f64(*r)),
            _ => None,
        }
    }

    /// Integral values become `Integer`; everything else becomes `Real`.
    pub fn to_field(&self) -> Result<CompoundField> {
        let field = match self {
            Self::NaN => CompoundField::Real(f64::NAN),
            Self::NegInf => CompoundField::Real(f64::NEG_INFINITY),
            Self::Neg(Reverse(mag)) => mag.to_field(true)?,
            Self::Zero => CompoundField::Integer(BigInt::zero()),
            Self::Pos(mag) => mag.to_field(false)?,
            Self::PosInf => CompoundField::Real(f64::INFINITY),
        };
        Ok(field)
    }

    pub fn ser(&self, dst: &mut Vec<u8>) {
        match self {
            Self::NaN => dst.push(Tag::NaN as u8),
            Self::NegInf => dst.push(Tag::NegInf as u8),
            Self::Neg(Reverse(mag)) => mag.ser(true, dst),
            Self::Zero => dst.push(Tag::Zero as u8),
            Self::Pos(mag) => mag.ser(false, dst),
            Self::PosInf => dst.push(Tag::PosInf as u8),
        }
    }

    /// Read the rest of a number whose discriminant has already been consumed.
    pub fn deser(disc: Discriminant, r: &mut KeyReader) -> Result<Self> {
        let (negative, exp) = match disc {
            Discriminant::Tag(Tag::NaN) => return Ok(Self::NaN),
            Discriminant::Tag(Tag::NegInf) => return Ok(Self::NegInf),
            Discriminant::Tag(Tag::Zero) => return Ok(Self::Zero),
            Discriminant::Tag(Tag::PosInf) => return Ok(Self::PosInf),
            Discriminant::NegMedium(exp) => (true, exp),
            Discriminant::PosMedium(exp) => (false, exp),
            Discriminant::Tag(Tag::NegLarge) => (true, read_large_exp(r, 0xFF)?),
            Discriminant::Tag(Tag::PosLarge) => (false, read_large_exp(r, 0x00)?),
            Discriminant::Tag(Tag::NegSmall) => (true, -read_exp(r, 0x00)?),
            Discriminant::Tag(Tag::PosSmall) => (false, -read_exp(r, 0xFF)?),
            Discriminant::Tag(tag) => {
                return Err(CodecError::malformed(format!("{:?} is not a number.", tag)))
            }
        };

        let flip = if negative { 0xFF } else { 0x00 };
        let mut pairs = vec![];
        loop {
            let byte = r.byte()? ^ flip;
            let pair = byte >> 1;
            if pair > 99 {
                return Err(CodecError::malformed(format!(
                    "Digit pair byte 0x{:02X} exceeds 99.",
                    byte
                )));
            }
            pairs.push(pair);
            if byte & 1 == 0 {
                break;
            }
        }
        if pairs.first() == Some(&0) || pairs.last() == Some(&0) {
            return Err(CodecError::malformed("Mantissa has a leading or trailing zero pair."));
        }
        Ok(Self::signed(negative, Magnitude { exp, pairs }))
    }
}

fn read_exp(r: &mut KeyReader, flip: u8) -> Result<i64> {
    let exp = r.varuint(flip)?;
    i64::try_from(exp).map_err(|_| CodecError::malformed(format!("Exponent {} is out of range.", exp)))
}

/// Exponents up to `MEDIUM_MAX_EXP` belong in a medium discriminant.
fn read_large_exp(r: &mut KeyReader, flip: u8) -> Result<i64> {
    let exp = read_exp(r, flip)?;
    if exp <= MEDIUM_MAX_EXP {
        return Err(CodecError::malformed(format!(
            "Exponent {} under a large discriminant.",
            exp
        )));
    }
    Ok(exp)
}
