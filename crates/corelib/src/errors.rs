use num_bigint::BigUint;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RangeError {
    #[error("invalid bit width '{width}': must be an integer in [1..={max}]", max = crate::range::MAX_WIDTH)]
    InvalidWidth { width: String },
    #[error("invalid range [{min:#x}, {max:#x}] for a {width}-bit field: {reason}")]
    InvalidRange {
        min: BigUint,
        max: BigUint,
        width: u32,
        reason: &'static str,
    },
    #[error("cannot parse '{literal}' as an unsigned integer: {reason}")]
    Parse { literal: String, reason: String },
}

/// A set of entries that fails to encode its range exactly.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoverError {
    #[error("entry {index}: mask {mask:#x} is not a contiguous high-order prefix mask")]
    NotPrefixMask { index: usize, mask: BigUint },
    #[error("entry {index}: value {value:#x} is not aligned to its block size {block:#x}")]
    Misaligned {
        index: usize,
        value: BigUint,
        block: BigUint,
    },
    #[error("entry {index}: block [{first:#x}, {last:#x}] lies outside [{min:#x}, {max:#x}]")]
    OutOfRange {
        index: usize,
        first: BigUint,
        last: BigUint,
        min: BigUint,
        max: BigUint,
    },
    #[error("entries {first} and {second} overlap")]
    Overlap { first: usize, second: usize },
    #[error("values [{from:#x}, {to:#x}] are not covered by any entry")]
    Gap { from: BigUint, to: BigUint },
    #[error("{count} entries exceed the bound of {bound} for a {width}-bit field")]
    TooManyEntries { count: usize, bound: usize, width: u32 },
}
