use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

use crate::parse::parse_uint;
use crate::range::{check_width, FieldRange};
use crate::render::OutputFormat;

/// User/CLI-selected options for rendering and diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    pub format: OutputFormat,
    /// Raises the log level to debug.
    pub verbose: bool,
    /// Re-verify every decomposition before printing.
    pub check: bool,
}

impl Config {
    pub fn new(format: OutputFormat, verbose: bool, check: bool) -> Self {
        Self {
            format,
            verbose,
            check,
        }
    }
}

/// Batch input: a default width plus a list of ranges.
///
/// ```toml
/// width = 16
///
/// [[range]]
/// min = "0x0010"
/// max = "1000"
///
/// [[range]]
/// width = 8
/// min = "3"
/// max = "3"
/// ```
///
/// Bounds are strings so they can exceed TOML's 64-bit integers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RangeFile {
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default, rename = "range")]
    pub ranges: Vec<RangeItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RangeItem {
    #[serde(default)]
    pub width: Option<u32>,
    pub min: String,
    pub max: String,
}

impl RangeFile {
    pub fn parse(s: &str) -> Result<Self> {
        let file: RangeFile = toml::from_str(s).context("parsing range file")?;
        Ok(file)
    }

    /// Validate every entry into a [`FieldRange`].
    pub fn ranges(&self) -> Result<Vec<FieldRange>> {
        if self.ranges.is_empty() {
            return Err(anyhow!("range file contains no [[range]] entries"));
        }
        self.ranges
            .iter()
            .enumerate()
            .map(|(i, item)| {
                item.resolve(self.width)
                    .with_context(|| format!("range #{} ({} - {})", i + 1, item.min, item.max))
            })
            .collect()
    }
}

impl RangeItem {
    fn resolve(&self, default_width: Option<u32>) -> Result<FieldRange> {
        let width = self
            .width
            .or(default_width)
            .ok_or_else(|| anyhow!("no width given for the range or the file"))?;
        check_width(width)?;
        let min = parse_uint(&self.min)?;
        let max = parse_uint(&self.max)?;
        Ok(FieldRange::new(width, min, max)?)
    }
}

pub fn load_range_file(path: &Path) -> Result<Vec<FieldRange>> {
    let s =
        fs::read_to_string(path).with_context(|| format!("reading range file {}", path.display()))?;
    let file =
        RangeFile::parse(&s).with_context(|| format!("in range file {}", path.display()))?;
    file.ranges()
        .with_context(|| format!("in range file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;

    #[test]
    fn default_config_prints_hex_quietly() {
        let cfg = Config::default();
        assert_eq!(cfg, Config::new(OutputFormat::Hex, false, false));
        assert!(!cfg.verbose && !cfg.check);
    }

    #[test]
    fn per_range_width_overrides_default() {
        let file = RangeFile::parse(
            r#"
            width = 16
            [[range]]
            min = "0x10"
            max = "1000"
            [[range]]
            width = 8
            min = "3"
            max = "3"
            "#,
        )
        .unwrap();
        let ranges = file.ranges().unwrap();
        assert_eq!(ranges.len(), 2);
        assert_eq!(ranges[0].width(), 16);
        assert_eq!(ranges[0].min(), &BigUint::from(16u8));
        assert_eq!(ranges[1].width(), 8);
    }

    #[test]
    fn missing_width_is_an_error() {
        let file = RangeFile::parse("[[range]]\nmin = \"1\"\nmax = \"2\"\n").unwrap();
        let err = file.ranges().unwrap_err();
        assert!(format!("{:#}", err).contains("no width"));
    }

    #[test]
    fn invalid_bounds_name_the_entry() {
        let file = RangeFile::parse("width = 4\n[[range]]\nmin = \"9\"\nmax = \"2\"\n").unwrap();
        let err = file.ranges().unwrap_err();
        let msg = format!("{:#}", err);
        assert!(msg.contains("range #1"), "{msg}");
        assert!(msg.contains("greater"), "{msg}");
    }

    #[test]
    fn empty_file_is_rejected() {
        let file = RangeFile::parse("width = 4\n").unwrap();
        assert!(file.ranges().is_err());
    }
}
