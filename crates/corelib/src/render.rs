//! Text and JSON output for decomposed ranges.

use std::fmt::Write as _;
use std::str::FromStr;

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::entry::{hex_uint, TcamEntry};
use crate::range::FieldRange;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `<value> <mask>` in hex, mask zero-padded to the field's nibble width.
    #[default]
    Hex,
    /// One `0`/`1`/`*` string per entry.
    Ternary,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hex" => Ok(Self::Hex),
            "ternary" => Ok(Self::Ternary),
            "json" => Ok(Self::Json),
            other => Err(format!(
                "unknown output format '{}' (expected hex, ternary or json)",
                other
            )),
        }
    }
}

/// JSON document for one decomposed range.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonRange {
    pub width: u32,
    #[serde(with = "hex_uint")]
    pub min: BigUint,
    #[serde(with = "hex_uint")]
    pub max: BigUint,
    pub entries: Vec<TcamEntry>,
}

impl JsonRange {
    pub fn new(range: &FieldRange, entries: &[TcamEntry]) -> Self {
        Self {
            width: range.width(),
            min: range.min().clone(),
            max: range.max().clone(),
            entries: entries.to_vec(),
        }
    }
}

/// Hex digits needed for a `width`-bit field.
pub fn nibble_width(width: u32) -> usize {
    width.div_ceil(4) as usize
}

pub fn render_entry(
    entry: &TcamEntry,
    width: u32,
    format: OutputFormat,
) -> serde_json::Result<String> {
    Ok(match format {
        OutputFormat::Hex => format!(
            "{:x} {:0pad$x}",
            entry.value,
            entry.mask,
            pad = nibble_width(width)
        ),
        OutputFormat::Ternary => entry.ternary(width),
        OutputFormat::Json => serde_json::to_string(entry)?,
    })
}

/// Render one range. Text formats emit one line per entry; JSON emits a
/// single pretty-printed object.
pub fn render(
    range: &FieldRange,
    entries: &[TcamEntry],
    format: OutputFormat,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(&JsonRange::new(range, entries)),
        text => {
            let mut out = String::new();
            for entry in entries {
                let _ = writeln!(out, "{}", render_entry(entry, range.width(), text)?);
            }
            Ok(out)
        }
    }
}

/// Render several ranges. Text formats separate them with a
/// `# range <min>-<max>/<width>` header; JSON emits an array.
pub fn render_batch(
    results: &[(FieldRange, Vec<TcamEntry>)],
    format: OutputFormat,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => {
            let all: Vec<JsonRange> = results
                .iter()
                .map(|(range, entries)| JsonRange::new(range, entries))
                .collect();
            serde_json::to_string_pretty(&all)
        }
        text => {
            let mut out = String::new();
            for (range, entries) in results {
                let _ = writeln!(
                    out,
                    "# range {:#x}-{:#x}/{}",
                    range.min(),
                    range.max(),
                    range.width()
                );
                out.push_str(&render(range, entries, text)?);
            }
            Ok(out)
        }
    }
}
