//! Exactness check for a set of entries against the range it should encode.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::align::{block_size, field_mask, prefix_mask};
use crate::entry::TcamEntry;
use crate::errors::CoverError;
use crate::range::FieldRange;

struct Block {
    index: usize,
    first: BigUint,
    last: BigUint,
}

/// Ok when every entry is a prefix-aligned block inside the field, no two
/// entries overlap, and together they match exactly `[min, max]`.
pub fn verify_cover(range: &FieldRange, entries: &[TcamEntry]) -> Result<(), CoverError> {
    let width = range.width();
    let bound = 2 * width as usize;
    if entries.len() > bound {
        return Err(CoverError::TooManyEntries {
            count: entries.len(),
            bound,
            width,
        });
    }

    let mut blocks = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        blocks.push(to_block(range, index, entry)?);
    }
    blocks.sort_by(|a, b| a.first.cmp(&b.first));

    let mut expected = range.min().clone();
    let mut prev: Option<&Block> = None;
    for block in &blocks {
        if block.first < expected {
            // Sorted by start, so only the previous block can reach this far.
            let first = prev.map_or(block.index, |p| p.index);
            return Err(CoverError::Overlap {
                first: first.min(block.index),
                second: first.max(block.index),
            });
        }
        if block.first > expected {
            return Err(CoverError::Gap {
                from: expected,
                to: &block.first - BigUint::one(),
            });
        }
        expected = &block.last + BigUint::one();
        prev = Some(block);
    }

    if &expected <= range.max() {
        return Err(CoverError::Gap {
            from: expected,
            to: range.max().clone(),
        });
    }
    Ok(())
}

fn to_block(range: &FieldRange, index: usize, entry: &TcamEntry) -> Result<Block, CoverError> {
    let width = range.width();
    let k = entry.wildcard_bits(width);
    if entry.mask != prefix_mask(k, width) {
        return Err(CoverError::NotPrefixMask {
            index,
            mask: entry.mask.clone(),
        });
    }
    if !(&entry.value & field_mask(k)).is_zero() {
        return Err(CoverError::Misaligned {
            index,
            value: entry.value.clone(),
            block: block_size(k),
        });
    }

    let first = entry.value.clone();
    let last = entry.last(width);
    if !range.contains(&first) || !range.contains(&last) {
        return Err(CoverError::OutOfRange {
            index,
            first,
            last,
            min: range.min().clone(),
            max: range.max().clone(),
        });
    }
    Ok(Block { index, first, last })
}
