//! A comma-separated list of compound key fields.
//!
//! ```text
//! null
//! int <integer>
//! real <f64>          also nan, inf, -inf
//! str <text>          no commas
//! blob <hex>          a blob followed by more fields
//! final <hex>         a blob in the last position
//! ```

use anyhow::{anyhow, Context, Result};
use ordo_types::compound::CompoundField;
use ordo_types::render::from_hex_string;
use regex::Regex;

pub fn parse(fields_str: &str) -> Result<Vec<CompoundField>> {
    if fields_str.trim().is_empty() {
        return Ok(vec![]);
    }
    let reg = Regex::new(r"^\s*(null|int|real|str|blob|final)(?:\s+(.*?))?\s*$")?;
    fields_str
        .split(',')
        .enumerate()
        .map(|(i, item)| field(&reg, item).with_context(|| format!("Field {i}: {item:?}")))
        .collect()
}

fn field(reg: &Regex, item: &str) -> Result<CompoundField> {
    let caps = reg
        .captures(item)
        .ok_or_else(|| anyhow!("Expected one of null, int, real, str, blob, final"))?;
    let arg = caps.get(2).map(|m| m.as_str());
    let field = match (&caps[1], arg) {
        ("null", None) => CompoundField::Null,
        ("int", Some(arg)) => CompoundField::Integer(arg.parse()?),
        ("real", Some(arg)) => CompoundField::Real(arg.parse()?),
        ("str", arg) => CompoundField::Text(arg.unwrap_or_default().to_string()),
        ("blob", arg) => CompoundField::BlobMid(hex(arg)?),
        ("final", arg) => CompoundField::BlobFinal(hex(arg)?),
        (kind, arg) => return Err(anyhow!("Bad argument {arg:?} for {kind}")),
    };
    Ok(field)
}

fn hex(arg: Option<&str>) -> Result<Vec<u8>> {
    let arg = arg.unwrap_or_default();
    from_hex_string(arg).ok_or_else(|| anyhow!("Not hex: {arg:?}"))
}
