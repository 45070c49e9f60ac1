use crate::compound::CompoundField;
use crate::scalar::EpochMillis;
use derive_more::From;

/// A value of any type a [`super::FieldCodec`] can carry.
#[derive(From, PartialEq, Clone, Debug)]
pub enum FieldValue {
    Bool(bool),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Timestamp(EpochMillis),
    Text(String),
    Compound(Vec<CompoundField>),
}

impl FieldValue {
    /// Orders values of different variants, for comparisons a single codec cannot decide.
    pub fn type_rank(&self) -> u8 {
        match self {
            Self::Bool(_) => 0,
            Self::Short(_) => 1,
            Self::Int(_) => 2,
            Self::Long(_) => 3,
            Self::Float(_) => 4,
            Self::Double(_) => 5,
            Self::Timestamp(_) => 6,
            Self::Text(_) => 7,
            Self::Compound(_) => 8,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// A codec value type that is one variant of [`FieldValue`].
pub trait FieldType: Sized {
    fn from_field(field: &FieldValue) -> Option<&Self>;
    fn into_field(self) -> FieldValue;
}

macro_rules! field_type {
    ($typ:ty, $variant:ident) => {
        impl FieldType for $typ {
            fn from_field(field: &FieldValue) -> Option<&Self> {
                match field {
                    FieldValue::$variant(v) => Some(v),
                    _ => None,
                }
            }
            fn into_field(self) -> FieldValue {
                FieldValue::$variant(self)
            }
        }
    };
}

field_type!(bool, Bool);
field_type!(i16, Short);
field_type!(i32, Int);
field_type!(i64, Long);
field_type!(f32, Float);
field_type!(f64, Double);
field_type!(EpochMillis, Timestamp);
field_type!(String, Text);
field_type!(Vec<CompoundField>, Compound);
