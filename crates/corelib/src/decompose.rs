//! Greedy range-to-block decomposition.
//!
//! Starting at `min`, each step takes the largest power-of-two block that is
//! aligned at the current bound and still fits in what remains of the range.
//! The result is the canonical prefix cover: at most `2 * width` entries,
//! disjoint and in ascending order.

use log::{debug, trace};
use num_bigint::BigUint;
use num_traits::Zero;
use rayon::prelude::*;

use crate::align::{alignment, block_size};
use crate::entry::TcamEntry;
use crate::errors::RangeError;
use crate::range::FieldRange;

/// Validate `[min, max]` against a `width`-bit field and decompose it.
pub fn decompose(width: u32, min: &BigUint, max: &BigUint) -> Result<Vec<TcamEntry>, RangeError> {
    let range = FieldRange::new(width, min.clone(), max.clone())?;
    Ok(decompose_range(&range))
}

pub fn decompose_range(range: &FieldRange) -> Vec<TcamEntry> {
    let width = range.width();
    let mut current = range.min().clone();
    let mut remaining = range.size();
    let mut entries = Vec::new();

    while !remaining.is_zero() {
        // Largest block that still fits: 2^k <= remaining iff k < bits(remaining).
        let fits = (remaining.bits() - 1).min(u64::from(width)) as u32;
        let k = alignment(&current, width).min(fits);
        let size = block_size(k);
        trace!("block {:#x} / 2^{}", current, k);

        let next = &current + &size;
        entries.push(TcamEntry::for_block(current, k, width));
        current = next;
        remaining -= size;
    }

    debug!(
        "[{:#x}, {:#x}] over {} bits -> {} entries",
        range.min(),
        range.max(),
        width,
        entries.len()
    );
    entries
}

/// Decompose independent ranges in parallel. Output order follows input order;
/// entries of different ranges are never merged.
pub fn decompose_all(ranges: &[FieldRange]) -> Vec<Vec<TcamEntry>> {
    ranges.par_iter().map(decompose_range).collect()
}
