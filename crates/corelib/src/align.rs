//! Power-of-two alignment helpers over arbitrary-precision values.

use num_bigint::BigUint;
use num_traits::One;

/// Largest `k <= width` such that `n` is a multiple of `2^k`.
///
/// Zero is aligned to every block size, so it yields the full `width`.
pub fn alignment(n: &BigUint, width: u32) -> u32 {
    match n.trailing_zeros() {
        Some(tz) => tz.min(u64::from(width)) as u32,
        None => width,
    }
}

/// `2^k`, the number of values in a block aligned to `k` bits.
pub fn block_size(k: u32) -> BigUint {
    BigUint::one() << k
}

/// All-ones mask covering a `width`-bit field.
pub fn field_mask(width: u32) -> BigUint {
    block_size(width) - BigUint::one()
}

/// Mask that fixes the top `width - k` bits and ignores the low `k` bits.
pub fn prefix_mask(k: u32, width: u32) -> BigUint {
    debug_assert!(k <= width);
    // ~(2^k - 1) & (2^width - 1), written without a bitwise NOT on an
    // unbounded integer.
    field_mask(width) ^ field_mask(k)
}
