//! Rendering of encoded bytes for diagnostics.

use itertools::Itertools;

pub fn to_hex_string(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).join("")
}

pub fn to_binary_string(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:08b}", b)).join("")
}

pub fn from_hex_string(hex: &str) -> Option<Vec<u8>> {
    if hex.len() % 2 != 0 || !hex.is_ascii() {
        return None;
    }
    (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).ok())
        .collect()
}
