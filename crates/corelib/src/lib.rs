//! Core library: encodes inclusive integer ranges over a fixed-width
//! unsigned field as ternary (value, mask) entries for TCAM range matching.
//!
//! ```
//! use num_bigint::BigUint;
//! use rangetcam_corelib::decompose;
//!
//! let entries = decompose(4, &BigUint::from(0u8), &BigUint::from(15u8)).unwrap();
//! assert_eq!(entries.len(), 1);
//! assert_eq!(entries[0].mask, BigUint::from(0u8));
//! ```

pub mod align;
pub mod config;
pub mod decompose;
pub mod entry;
pub mod errors;
pub mod parse;
pub mod range;
pub mod render;
pub mod verify;

pub use align::alignment;
pub use config::{load_range_file, Config, RangeFile};
pub use decompose::{decompose, decompose_all, decompose_range};
pub use entry::TcamEntry;
pub use errors::{CoverError, RangeError};
pub use parse::{parse_uint, parse_width};
pub use range::{FieldRange, MAX_WIDTH};
pub use render::OutputFormat;
pub use verify::verify_cover;

/// Version helper for CLI
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
