//! Two independent hex tools:
//!
//! - the RTL memory-init encoder/decoder (`encode_row`/`decode_row`), which
//!   bit-packs a clause row at a fixed literal width for Verilog
//!   `$readmemh`-style initialization, and
//! - a standalone pretty-printer (`format_hex_array`) that turns a raw hex
//!   string of packed `[u8, u1]` byte pairs into a readable array literal.
//!   It is not used by the RTL init path; it is a small independent
//!   debugging aid kept here because it shares this module's "hex in,
//!   something readable out" shape.

use satnode::Lit;

#[cfg(feature = "logging")]
use log::warn;

/// Packs one clause row into a single integer: `row_val = sum(lit_j << (j*width))`,
/// little-endian in column order. Returns it pre-formatted as uppercase hex,
/// zero-padded to `ceil(width * row.len() / 4)` digits.
pub fn encode_row(row: &[Lit], width: u32) -> String {
    let mut row_val: u128 = 0;
    for (j, &lit) in row.iter().enumerate() {
        row_val |= (lit as u128) << (j as u32 * width);
    }
    let digits = (width as usize * row.len()).div_ceil(4).max(1);
    format!("{row_val:0width$X}", width = digits)
}

/// Writes one `encode_row` line per clause row.
pub fn write_hex_rows(rows: &[Vec<Lit>], width: u32) -> String {
    let mut out = String::new();
    for row in rows {
        out.push_str(&encode_row(row, width));
        out.push('\n');
    }
    out
}

/// Inverse of [`encode_row`]: unpacks `num_cols` literals of `width` bits
/// each from a hex row.
pub fn decode_row(hex: &str, width: u32, num_cols: usize) -> Vec<Lit> {
    let row_val = u128::from_str_radix(hex.trim(), 16).unwrap_or(0);
    let mask = (1u128 << width) - 1;
    (0..num_cols)
        .map(|j| ((row_val >> (j as u32 * width)) & mask) as Lit)
        .collect()
}

/// Standalone hex pretty-printer: interprets `hex_string` as a run of
/// 4-hex-character `[u8, u1]` byte pairs and renders it as
/// `{ [u8, u1], [u8, u1], ... }`, wrapped to `line_width` columns.
///
/// Malformed input (odd length, or a length not divisible by 4) is warned
/// about and truncated to the largest usable prefix rather than rejected.
pub fn format_hex_array(hex_string: &str, line_width: usize) -> String {
    let mut cleaned = hex_string.trim().to_ascii_uppercase();

    if !cleaned.len().is_multiple_of(2) {
        #[cfg(feature = "logging")]
        warn!(
            "input hex string has an odd length ({}); truncating the last character",
            cleaned.len()
        );
        cleaned.pop();
    }

    let remainder = cleaned.len() % 4;
    if remainder != 0 {
        #[cfg(feature = "logging")]
        warn!(
            "input length ({}) is not divisible by 4; the last {} hex characters will be ignored",
            cleaned.len(),
            remainder
        );
        cleaned.truncate(cleaned.len() - remainder);
    }

    let pairs: Vec<String> = cleaned
        .as_bytes()
        .chunks(4)
        .filter_map(|chunk| {
            let chunk = std::str::from_utf8(chunk).ok()?;
            let u8_val = u8::from_str_radix(&chunk[0..2], 16).ok()?;
            let u1_val = u8::from_str_radix(&chunk[2..4], 16).ok()?;
            Some(format!("[{u8_val}, {u1_val}]"))
        })
        .collect();

    wrap_joined(&pairs, line_width)
}

/// Greedily packs `[u8, u1]` pairs onto lines no wider than `line_width`,
/// joining pairs with `", "` the way `textwrap.wrap` packs whitespace-
/// separated words.
fn wrap_joined(pairs: &[String], line_width: usize) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for pair in pairs {
        let piece_len = if current.is_empty() {
            pair.len()
        } else {
            pair.len() + 2
        };
        if !current.is_empty() && current.len() + piece_len > line_width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push_str(", ");
        }
        current.push_str(pair);
    }
    lines.push(current);

    let body = lines.join(",\n    ");
    format!("{{\n    {body}\n}}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_then_decode_round_trips_a_row() {
        let row = vec![2, 4, 0, 0];
        let hex = encode_row(&row, 6);
        assert_eq!(decode_row(&hex, 6, 4), row);
    }

    #[test]
    fn encode_row_matches_hand_computed_value() {
        // width=6: row_val = 2 | (4 << 6) = 2 + 256 = 258 = 0x102, padded
        // to ceil(6*2/4)=3 digits.
        assert_eq!(encode_row(&[2, 4], 6), "102");
    }

    #[test]
    fn pretty_printer_formats_known_byte_pairs() {
        let out = format_hex_array("00008080", 80);
        assert!(out.contains("[0, 0]"));
        assert!(out.contains("[128, 128]"));
    }

    #[test]
    fn pretty_printer_truncates_odd_length_input() {
        // "000" -> truncate to "00" -> remainder 2 -> truncate to "" -> empty body.
        let out = format_hex_array("000", 80);
        assert_eq!(out, "{\n    \n}");
    }

    #[test]
    fn pretty_printer_truncates_non_divisible_by_four() {
        // "0000FF" (6 chars, even) -> remainder 6%4=2 -> truncate to "0000" -> one pair.
        let out = format_hex_array("0000FF", 80);
        assert_eq!(out, "{\n    [0, 0]\n}");
    }
}
