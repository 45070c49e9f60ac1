use anyhow::{anyhow, Context, Result};
use ordo_types::compound::CompoundCodec;
use ordo_types::render::{from_hex_string, to_hex_string};
use ordo_types::varuint;
use ordo_types::{Codec, Order};
use std::env;

mod fields;

/// `asc` or `desc`, for `key` and `unkey`.
const ENV_VAR_ORDER: &str = "ORDO_ORDER";

const USAGE: &str = "\
usage:
  ordo_tool varint <u64>...
  ordo_tool key <fields>
  ordo_tool unkey <hex> <arity>

<fields> is a comma-separated list of: null, int <integer>, real <f64>, str <text>,
blob <hex>, final <hex>. Set ORDO_ORDER=desc for descending keys.";

fn main() -> Result<()> {
    let args = env::args().skip(1).collect::<Vec<_>>();
    let order = order_from_env()?;
    match args.split_first() {
        Some((cmd, rest)) if cmd == "varint" => print_varints(rest),
        Some((cmd, rest)) if cmd == "key" => print_key(order, &rest.join(" ")),
        Some((cmd, [hex, arity])) if cmd == "unkey" => print_unkey(order, hex, arity),
        _ => {
            eprintln!("{USAGE}");
            Err(anyhow!("Bad arguments {args:?}"))
        }
    }
}

fn order_from_env() -> Result<Order> {
    match env::var(ENV_VAR_ORDER).as_deref() {
        Err(_) | Ok("asc") => Ok(Order::Ascending),
        Ok("desc") => Ok(Order::Descending),
        Ok(other) => Err(anyhow!("{ENV_VAR_ORDER}={other}; expected asc or desc")),
    }
}

fn print_varints(args: &[String]) -> Result<()> {
    for arg in args {
        let v = arg
            .parse::<u64>()
            .with_context(|| format!("Not a u64: {arg}"))?;
        let mut enc = vec![];
        varuint::encode_into(v, &mut enc);
        println!("{v} = {}", to_hex_string(&enc));
    }
    Ok(())
}

fn print_key(order: Order, fields_str: &str) -> Result<()> {
    let fields = fields::parse(fields_str)?;
    let codec = CompoundCodec::new(order, fields.len());
    let enc = codec.encode(Some(&fields))?;
    println!("{}", to_hex_string(&enc));
    Ok(())
}

fn print_unkey(order: Order, hex: &str, arity: &str) -> Result<()> {
    let enc = from_hex_string(hex).ok_or_else(|| anyhow!("Not hex: {hex}"))?;
    let arity = arity
        .parse::<usize>()
        .with_context(|| format!("Not an arity: {arity}"))?;
    let codec = CompoundCodec::new(order, arity);
    let fields = codec.decode(&enc)?.unwrap_or_default();
    for field in fields {
        println!("{field:?}");
    }
    Ok(())
}
