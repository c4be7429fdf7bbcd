use num_bigint::BigUint;
use rangetcam_corelib::{alignment, decompose, RangeError, TcamEntry};

fn big(n: u64) -> BigUint {
    BigUint::from(n)
}

fn entry(value: u64, mask: u64) -> TcamEntry {
    TcamEntry::new(big(value), big(mask))
}

#[test]
fn singleton_matches_all_bits() {
    assert_eq!(decompose(8, &big(5), &big(5)).unwrap(), vec![entry(5, 0xff)]);
    assert_eq!(decompose(8, &big(3), &big(3)).unwrap(), vec![entry(3, 0xff)]);
}

#[test]
fn full_field_constrains_nothing() {
    assert_eq!(decompose(4, &big(0), &big(15)).unwrap(), vec![entry(0, 0)]);
}

#[test]
fn misaligned_range_covers_exactly() {
    let entries = decompose(4, &big(1), &big(14)).unwrap();
    let covered: Vec<u64> = (0..16)
        .filter(|&x| entries.iter().any(|e| e.matches(&big(x))))
        .collect();
    assert_eq!(covered, (1..=14).collect::<Vec<_>>());
}

#[test]
fn inverted_range_fails() {
    let err = decompose(8, &big(10), &big(5)).unwrap_err();
    assert!(matches!(err, RangeError::InvalidRange { .. }));
    assert!(err.to_string().contains("min is greater than max"));
}

#[test]
fn zero_width_fails() {
    let err = decompose(0, &big(0), &big(0)).unwrap_err();
    assert!(matches!(err, RangeError::InvalidWidth { .. }));
}

#[test]
fn alignment_of_zero_is_width() {
    assert_eq!(alignment(&big(0), 12), 12);
    assert_eq!(alignment(&big(96), 12), 5);
}
