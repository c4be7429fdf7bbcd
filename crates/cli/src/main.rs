use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use num_bigint::BigUint;
use rangetcam_corelib as core;
use rangetcam_corelib::render::{render, render_batch};
use rangetcam_corelib::{Config, FieldRange, OutputFormat};

#[derive(Parser)]
#[command(
    name = "rangetcam",
    version,
    about = "Encode an integer range as ternary (value, mask) TCAM entries"
)]
struct Cli {
    /// The width in bits of the field to match on
    #[arg(
        short = 'w',
        long,
        value_parser = core::parse_width,
        required_unless_present = "ranges_file"
    )]
    bit_width: Option<u32>,

    /// The minimum value of the range to match (decimal, 0x, 0o or 0b)
    #[arg(long, value_parser = core::parse_uint, required_unless_present = "ranges_file")]
    min: Option<BigUint>,

    /// The maximum value of the range to match (decimal, 0x, 0o or 0b)
    #[arg(long, value_parser = core::parse_uint, required_unless_present = "ranges_file")]
    max: Option<BigUint>,

    /// TOML file with a batch of ranges to encode
    #[arg(short = 'f', long, conflicts_with_all = ["bit_width", "min", "max"])]
    ranges_file: Option<PathBuf>,

    /// Output format: hex, ternary or json
    #[arg(long, default_value = "hex")]
    format: OutputFormat,

    /// Verify that the entries cover the range exactly before printing
    #[arg(long)]
    check: bool,

    /// Enable extra debug messages
    #[arg(short, long, visible_alias = "verbose")]
    debug: bool,
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn check(config: &Config, range: &FieldRange, entries: &[core::TcamEntry]) -> Result<()> {
    if config.check {
        core::verify_cover(range, entries).with_context(|| {
            format!(
                "entries for [{:#x}, {:#x}] do not cover the range exactly",
                range.min(),
                range.max()
            )
        })?;
        debug!("verified {} entries", entries.len());
    }
    Ok(())
}

fn run_single(cli: &Cli, config: &Config) -> Result<String> {
    // clap enforces presence when no ranges file is given.
    let (Some(width), Some(min), Some(max)) = (cli.bit_width, &cli.min, &cli.max) else {
        anyhow::bail!("--bit-width, --min and --max are required");
    };
    let range = FieldRange::new(width, min.clone(), max.clone())?;
    let entries = core::decompose_range(&range);
    check(config, &range, &entries)?;
    render(&range, &entries, config.format).context("rendering entries")
}

fn run_batch(path: &Path, config: &Config) -> Result<String> {
    let ranges = core::load_range_file(path)?;
    info!("loaded {} ranges from {}", ranges.len(), path.display());
    let results: Vec<(FieldRange, Vec<core::TcamEntry>)> = ranges
        .iter()
        .cloned()
        .zip(core::decompose_all(&ranges))
        .collect();
    for (range, entries) in &results {
        check(config, range, entries)?;
    }
    render_batch(&results, config.format).context("rendering entries")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::new(cli.format, cli.debug, cli.check);
    init_logging(config.verbose);
    debug!("rangetcam {} config={:?}", core::version(), config);

    let out = match &cli.ranges_file {
        Some(path) => run_batch(path, &config)?,
        None => run_single(&cli, &config)?,
    };
    print!("{}", out);
    Ok(())
}
