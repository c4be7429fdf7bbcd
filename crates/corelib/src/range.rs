use num_bigint::BigUint;
use num_traits::One;

use crate::align::block_size;
use crate::errors::RangeError;

/// Widest field accepted.
pub const MAX_WIDTH: u32 = 4096;

/// Inclusive range `[min, max]` over a `width`-bit unsigned field.
/// Only constructible through [`FieldRange::new`], so `0 < width`,
/// `min <= max` and `max < 2^width` always hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRange {
    width: u32,
    min: BigUint,
    max: BigUint,
}

impl FieldRange {
    pub fn new(width: u32, min: BigUint, max: BigUint) -> Result<Self, RangeError> {
        check_width(width)?;
        if min > max {
            return Err(RangeError::InvalidRange {
                min,
                max,
                width,
                reason: "min is greater than max",
            });
        }
        if max >= block_size(width) {
            return Err(RangeError::InvalidRange {
                min,
                max,
                width,
                reason: "max does not fit in the field",
            });
        }
        Ok(Self { width, min, max })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn min(&self) -> &BigUint {
        &self.min
    }

    pub fn max(&self) -> &BigUint {
        &self.max
    }

    /// Number of values in the range; never zero.
    pub fn size(&self) -> BigUint {
        &self.max - &self.min + BigUint::one()
    }

    pub fn contains(&self, x: &BigUint) -> bool {
        &self.min <= x && x <= &self.max
    }
}

pub(crate) fn check_width(width: u32) -> Result<(), RangeError> {
    if width == 0 || width > MAX_WIDTH {
        return Err(RangeError::InvalidWidth {
            width: width.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_full_field() {
        let r = FieldRange::new(4, BigUint::from(0u8), BigUint::from(15u8)).unwrap();
        assert_eq!(r.size(), BigUint::from(16u8));
        assert!(r.contains(&BigUint::from(15u8)));
    }

    #[test]
    fn rejects_bad_bounds() {
        let err = FieldRange::new(8, BigUint::from(10u8), BigUint::from(5u8)).unwrap_err();
        assert!(matches!(err, RangeError::InvalidRange { reason, .. } if reason.contains("greater")));

        let err = FieldRange::new(8, BigUint::from(0u8), BigUint::from(256u32)).unwrap_err();
        assert!(matches!(err, RangeError::InvalidRange { .. }));
    }

    #[test]
    fn rejects_bad_widths() {
        assert!(matches!(
            FieldRange::new(0, BigUint::from(0u8), BigUint::from(0u8)),
            Err(RangeError::InvalidWidth { .. })
        ));
        assert!(matches!(
            FieldRange::new(MAX_WIDTH + 1, BigUint::from(0u8), BigUint::from(0u8)),
            Err(RangeError::InvalidWidth { .. })
        ));
    }
}
