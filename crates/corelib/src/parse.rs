//! Textual literals for widths and range bounds.

use num_bigint::BigUint;

use crate::errors::RangeError;
use crate::range::check_width;

/// Parse an unsigned integer literal. Decimal by default; `0x`, `0o` and
/// `0b` prefixes select hex, octal and binary. `_` separators are allowed.
pub fn parse_uint(literal: &str) -> Result<BigUint, RangeError> {
    let fail = |reason: &str| RangeError::Parse {
        literal: literal.to_string(),
        reason: reason.to_string(),
    };

    let s = literal.trim();
    if s.starts_with('-') {
        return Err(fail("negative values are not allowed"));
    }
    let s = s.strip_prefix('+').unwrap_or(s);
    let (radix, digits) = match s.get(..2) {
        Some("0x" | "0X") => (16, &s[2..]),
        Some("0o" | "0O") => (8, &s[2..]),
        Some("0b" | "0B") => (2, &s[2..]),
        _ => (10, s),
    };
    if digits.starts_with('_') || digits.ends_with('_') {
        return Err(fail("misplaced digit separator"));
    }
    if !digits.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(fail("unexpected character"));
    }
    let digits: String = digits.chars().filter(|&c| c != '_').collect();
    if digits.is_empty() {
        return Err(fail("no digits"));
    }
    BigUint::parse_bytes(digits.as_bytes(), radix)
        .ok_or_else(|| fail(&format!("invalid digit for base {}", radix)))
}

/// Parse a bit width: a decimal integer in `[1..=MAX_WIDTH]`.
pub fn parse_width(literal: &str) -> Result<u32, RangeError> {
    let invalid = || RangeError::InvalidWidth {
        width: literal.to_string(),
    };
    let width: u32 = literal.trim().parse().map_err(|_| invalid())?;
    check_width(width).map_err(|_| invalid())?;
    Ok(width)
}
