//! JSON serialization helpers for export files

use anyhow::Result;
use serde_json::Value;
use std::fmt::Write as _;

/// Serialize a value as pretty-printed, ASCII-only JSON
///
/// Pretty printing uses 2-space indentation. Characters outside the ASCII
/// range are escaped as `\uXXXX` (surrogate pairs for characters beyond the
/// BMP), so export files are byte-stable regardless of locale tooling. In
/// serialized JSON non-ASCII characters can only occur inside string
/// literals, so the escape pass runs over the whole document.
pub fn to_ascii_pretty(value: &Value) -> Result<String> {
    let pretty = serde_json::to_string_pretty(value)?;
    let mut out = String::with_capacity(pretty.len());
    let mut units = [0u16; 2];

    for ch in pretty.chars() {
        if ch.is_ascii() {
            out.push(ch);
        } else {
            for unit in ch.encode_utf16(&mut units).iter() {
                write!(out, "\\u{unit:04x}")?;
            }
        }
    }

    Ok(out)
}
