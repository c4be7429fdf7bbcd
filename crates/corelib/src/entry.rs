use num_bigint::BigUint;
use num_traits::One;
use serde::{Deserialize, Serialize};

use crate::align::{block_size, prefix_mask};

/// One ternary (value, mask) row. A field value `x` matches when
/// `x & mask == value & mask`.
///
/// Serialized with both fields as `0x`-prefixed hex strings, since JSON and
/// TOML numbers cannot hold arbitrary-precision values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TcamEntry {
    #[serde(with = "hex_uint")]
    pub value: BigUint,
    #[serde(with = "hex_uint")]
    pub mask: BigUint,
}

/// Serde adapter writing a `BigUint` as `0x...`; reading accepts any literal
/// [`parse_uint`](crate::parse::parse_uint) does.
pub mod hex_uint {
    use num_bigint::BigUint;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn to_hex(n: &BigUint) -> String {
        format!("{:#x}", n)
    }

    pub fn serialize<S: Serializer>(n: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&to_hex(n))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigUint, D::Error> {
        let s = String::deserialize(deserializer)?;
        crate::parse::parse_uint(&s).map_err(de::Error::custom)
    }
}

impl TcamEntry {
    pub fn new(value: BigUint, mask: BigUint) -> Self {
        Self { value, mask }
    }

    /// Entry matching the `2^k` values starting at `start`, which must be a
    /// multiple of `2^k`.
    pub fn for_block(start: BigUint, k: u32, width: u32) -> Self {
        Self {
            value: start,
            mask: prefix_mask(k, width),
        }
    }

    pub fn matches(&self, x: &BigUint) -> bool {
        (x & &self.mask) == (&self.value & &self.mask)
    }

    /// Number of bits the entry cares about.
    pub fn prefix_len(&self) -> u32 {
        self.mask.count_ones() as u32
    }

    /// Count of don't-care bits, i.e. `log2` of the block size.
    pub fn wildcard_bits(&self, width: u32) -> u32 {
        width.saturating_sub(self.prefix_len())
    }

    pub fn block_size(&self, width: u32) -> BigUint {
        block_size(self.wildcard_bits(width))
    }

    /// Highest value matched by the entry.
    pub fn last(&self, width: u32) -> BigUint {
        &self.value + self.block_size(width) - BigUint::one()
    }

    /// MSB-first rendering with `*` for don't-care bits, e.g. `01**`.
    pub fn ternary(&self, width: u32) -> String {
        (0..width)
            .rev()
            .map(|bit| {
                let bit = u64::from(bit);
                if !self.mask.bit(bit) {
                    '*'
                } else if self.value.bit(bit) {
                    '1'
                } else {
                    '0'
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(n: u64) -> BigUint {
        BigUint::from(n)
    }

    #[test]
    fn block_entry_shape() {
        let e = TcamEntry::for_block(big(0x40), 4, 8);
        assert_eq!(e.mask, big(0xf0));
        assert_eq!(e.prefix_len(), 4);
        assert_eq!(e.block_size(8), big(16));
        assert_eq!(e.last(8), big(0x4f));
        assert_eq!(e.ternary(8), "0100****");
    }

    #[test]
    fn matching_ignores_wildcard_bits() {
        let e = TcamEntry::for_block(big(8), 2, 4);
        let hits: Vec<u64> = (0..16).filter(|&x| e.matches(&big(x))).collect();
        assert_eq!(hits, vec![8, 9, 10, 11]);
    }

    #[test]
    fn exact_and_wildcard_extremes() {
        let exact = TcamEntry::for_block(big(5), 0, 3);
        assert_eq!(exact.ternary(3), "101");
        assert_eq!(exact.block_size(3), big(1));

        let any = TcamEntry::for_block(big(0), 3, 3);
        assert_eq!(any.ternary(3), "***");
        assert!(any.matches(&big(6)));
    }

    #[test]
    fn serializes_as_hex_strings() {
        let e = TcamEntry::for_block(big(0x40), 4, 8);
        let json = serde_json::to_string(&e).unwrap();
        assert_eq!(json, r#"{"value":"0x40","mask":"0xf0"}"#);

        let back: TcamEntry = serde_json::from_str(r#"{"value":"64","mask":"0xF0"}"#).unwrap();
        assert_eq!(back, e);
        assert!(serde_json::from_str::<TcamEntry>(r#"{"value":"-1","mask":"0"}"#).is_err());
    }
}
