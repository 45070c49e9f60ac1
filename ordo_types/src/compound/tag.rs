use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

/// Discriminant bytes that stand alone, i.e. do not carry an exponent.
///
/// We map members to bytes manually because the medium-exponent ranges
/// (`0x09..=0x12` and `0x18..=0x21`) sit between them.
#[repr(u8)]
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, FromPrimitive, Debug)]
pub enum Tag {
    Null = 0x05,
    NaN = 0x06,
    NegInf = 0x07,
    NegLarge = 0x08,
    NegSmall = 0x14,
    Zero = 0x15,
    PosSmall = 0x16,
    PosLarge = 0x22,
    PosInf = 0x23,
    Text = 0x24,
    Blob = 0x26,
}

/// Largest base-100 exponent that fits in a medium discriminant.
pub const MEDIUM_MAX_EXP: i64 = 10;
const NEG_MEDIUM_BASE: u8 = 0x13;
const POS_MEDIUM_BASE: u8 = 0x17;

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Discriminant {
    Tag(Tag),
    /// Exponent in `1..=MEDIUM_MAX_EXP`.
    NegMedium(i64),
    PosMedium(i64),
}

impl Discriminant {
    pub fn from_byte(byte: u8) -> Option<Self> {
        if let Some(tag) = Tag::from_u8(byte) {
            return Some(Self::Tag(tag));
        }
        match byte {
            0x09..=0x12 => Some(Self::NegMedium((NEG_MEDIUM_BASE - byte) as i64)),
            0x18..=0x21 => Some(Self::PosMedium((byte - POS_MEDIUM_BASE) as i64)),
            _ => None,
        }
    }

    pub fn to_byte(self) -> u8 {
        match self {
            Self::Tag(tag) => tag as u8,
            Self::NegMedium(exp) => NEG_MEDIUM_BASE - exp as u8,
            Self::PosMedium(exp) => POS_MEDIUM_BASE + exp as u8,
        }
    }
}
