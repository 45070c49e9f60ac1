use super::helpers::config::RandomConfig;
use super::helpers::values::{gen_compound_key, gen_f32, gen_f64, gen_i64, gen_text};
use super::helpers::verify::verify_codec;
use anyhow::Result;
use itertools::Itertools;
use ordo_types::compound::CompoundCodec;
use ordo_types::scalar::{Boolean, Double, EpochMillis, Float, Int, Long, Short, Timestamp};
use ordo_types::schema::{Row, StructCodec};
use ordo_types::text::{BoundedText, Text};
use ordo_types::{FieldCodec, FieldValue, Order};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

const KINDS_PER_RUN: usize = 5;
const MIN_ROWS_PER_SCHEMA: usize = 16;

#[derive(Clone, Copy, Debug)]
enum FieldKind {
    Bool,
    Short,
    Int,
    Long,
    Float,
    Double,
    Timestamp,
    Text,
    BoundedText,
    Compound,
}

const ALL_KINDS: [FieldKind; 10] = [
    FieldKind::Bool,
    FieldKind::Short,
    FieldKind::Int,
    FieldKind::Long,
    FieldKind::Float,
    FieldKind::Double,
    FieldKind::Timestamp,
    FieldKind::Text,
    FieldKind::BoundedText,
    FieldKind::Compound,
];

impl FieldKind {
    fn codec(self, order: Order) -> Box<dyn FieldCodec> {
        match self {
            Self::Bool => Box::new(Boolean::new(order)),
            Self::Short => Box::new(Short::new(order)),
            Self::Int => Box::new(Int::new(order)),
            Self::Long => Box::new(Long::new(order)),
            Self::Float => Box::new(Float::new(order)),
            Self::Double => Box::new(Double::new(order)),
            Self::Timestamp => Box::new(Timestamp::new(order)),
            Self::Text => Box::new(Text::new(order)),
            Self::BoundedText => Box::new(BoundedText::new(order, 16)),
            Self::Compound => Box::new(CompoundCodec::new(order, 2)),
        }
    }

    fn gen(self, rng: &mut StdRng) -> Option<FieldValue> {
        if rng.gen_ratio(1, 5) {
            return None;
        }
        let val = match self {
            Self::Bool => FieldValue::Bool(rng.gen()),
            Self::Short => FieldValue::Short(rng.gen_range(-3..3)),
            Self::Int => FieldValue::Int(gen_i64(rng) as i32),
            Self::Long => FieldValue::Long(gen_i64(rng)),
            Self::Float => FieldValue::Float(gen_f32(rng)),
            Self::Double => FieldValue::Double(gen_f64(rng)),
            Self::Timestamp => FieldValue::Timestamp(EpochMillis::new(gen_i64(rng))),
            Self::Text => FieldValue::Text(gen_text(rng, 4, true)),
            Self::BoundedText => FieldValue::Text(gen_text(rng, 3, true)),
            Self::Compound => FieldValue::Compound(gen_compound_key(rng, 2, false)),
        };
        Some(val)
    }
}

/// Every non-empty subset of a random selection of field kinds becomes a schema. All fields
/// and the null markers share one order, so the two orders' rows are complements.
pub fn test_structs(cfg: &RandomConfig) -> Result<()> {
    let mut rng = cfg.rng();

    let mut kinds = ALL_KINDS.to_vec();
    kinds.shuffle(&mut rng);
    kinds.truncate(KINDS_PER_RUN);
    println!("structs: kinds {kinds:?}");

    let schemas = kinds
        .into_iter()
        .powerset()
        .filter(|schema| !schema.is_empty())
        .collect::<Vec<_>>();
    let rows_per_schema = (cfg.count / schemas.len()).max(MIN_ROWS_PER_SCHEMA);

    for schema in schemas {
        let rows: Vec<Option<Row>> = (0..rows_per_schema)
            .map(|_| Some(schema.iter().map(|kind| kind.gen(&mut rng)).collect()))
            .collect();
        let make = |order: Order| {
            let codecs = schema.iter().map(|kind| kind.codec(order)).collect();
            StructCodec::with_order(codecs, order)
        };
        verify_codec(make, &rows)?;
    }
    Ok(())
}
