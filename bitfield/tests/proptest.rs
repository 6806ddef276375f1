// tests/proptest.rs

use bitfield::{BitFieldError, BitRange, get_bit_field, nth_byte, set_bit_field, swap_bytes};
use proptest::prelude::*;

//
// -----------------------------------------------------------------------------
// Helper Functions
// -----------------------------------------------------------------------------

/// Any `(start, width)` pair that fits in the word.
fn valid_range() -> impl Strategy<Value = (usize, usize)> {
    (1usize..=64).prop_flat_map(|width| (0..=(64 - width), Just(width)))
}

/// A valid range plus a value that fits in its width.
fn range_and_value() -> impl Strategy<Value = (usize, usize, u64)> {
    valid_range().prop_flat_map(|(start, width)| {
        let max = if width == 64 { u64::MAX } else { (1u64 << width) - 1 };
        (Just(start), Just(width), 0..=max)
    })
}

/// Width and start that together run past bit 63.
fn overflowing_range() -> impl Strategy<Value = (usize, usize)> {
    (1usize..=64).prop_flat_map(|width| ((65 - width)..=128, Just(width)))
}

//
// -----------------------------------------------------------------------------
// Round trip
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_set_then_get_roundtrip(buffer in any::<u64>(), (start, width, value) in range_and_value()) {
        let mut data = buffer;
        set_bit_field(&mut data, value, start, width).unwrap();
        prop_assert_eq!(get_bit_field(data, start, width, true).unwrap(), value);
    }

    #[test]
    fn prop_set_preserves_bits_outside_field(
        buffer in any::<u64>(),
        (start, width, value) in range_and_value()
    ) {
        let mut data = buffer;
        set_bit_field(&mut data, value, start, width).unwrap();

        let outside = !BitRange::new(start, width).unwrap().positioned_mask();
        prop_assert_eq!(data & outside, buffer & outside);

        // same check bit by bit, MSB-first
        for bit in (0..64).filter(|b| *b < start || *b >= start + width) {
            prop_assert_eq!(
                get_bit_field(data, bit, 1, true).unwrap(),
                get_bit_field(buffer, bit, 1, true).unwrap()
            );
        }
    }
}

//
// -----------------------------------------------------------------------------
// Endianness and width edge cases
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_little_endian_matches_swapped_big_endian(data in any::<u64>(), (start, width) in valid_range()) {
        prop_assert_eq!(
            get_bit_field(data, start, width, false),
            get_bit_field(swap_bytes(data), start, width, true)
        );
    }

    #[test]
    fn prop_full_width_is_identity(data in any::<u64>()) {
        prop_assert_eq!(get_bit_field(data, 0, 64, true).unwrap(), data);
    }

    #[test]
    fn prop_single_bit_is_zero_or_one(data in any::<u64>(), bit in 0usize..64) {
        let v = get_bit_field(data, bit, 1, true).unwrap();
        prop_assert!(v <= 1);
        prop_assert_eq!(v, (data >> (63 - bit)) & 1);
    }

    #[test]
    fn prop_set_truncates_to_width(
        buffer in any::<u64>(),
        (start, width) in valid_range(),
        value in any::<u64>()
    ) {
        let mut data = buffer;
        set_bit_field(&mut data, value, start, width).unwrap();

        let expected = if width == 64 { value } else { value % (1u64 << width) };
        prop_assert_eq!(get_bit_field(data, start, width, true).unwrap(), expected);
    }

    #[test]
    fn prop_value_never_exceeds_width(data in any::<u64>(), (start, width) in valid_range()) {
        let v = get_bit_field(data, start, width, true).unwrap();
        if width < 64 {
            prop_assert!(v < (1u64 << width));
        }
    }
}

//
// -----------------------------------------------------------------------------
// Bytes
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_nth_byte_matches_be_bytes(source in any::<u64>(), n in 0usize..8) {
        prop_assert_eq!(nth_byte(source, n).unwrap(), source.to_be_bytes()[n]);
    }

    #[test]
    fn prop_nth_byte_is_an_aligned_field(source in any::<u64>(), n in 0usize..8) {
        prop_assert_eq!(
            nth_byte(source, n).unwrap() as u64,
            get_bit_field(source, n * 8, 8, true).unwrap()
        );
    }

    #[test]
    fn prop_nth_byte_rejects_out_of_range(source in any::<u64>(), n in 8usize..1024) {
        prop_assert_eq!(nth_byte(source, n), Err(BitFieldError::InvalidByteIndex(n)));
    }
}

//
// -----------------------------------------------------------------------------
// Range violations
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_overflowing_ranges_are_rejected(data in any::<u64>(), (start, width) in overflowing_range()) {
        let err = BitFieldError::InvalidBitFieldRange { start, width };
        prop_assert_eq!(get_bit_field(data, start, width, true), Err(err));
        prop_assert_eq!(get_bit_field(data, start, width, false), Err(err));

        let mut copy = data;
        prop_assert_eq!(set_bit_field(&mut copy, 1, start, width), Err(err));
        prop_assert_eq!(copy, data);
    }

    #[test]
    fn prop_bad_widths_are_rejected(data in any::<u64>(), start in 0usize..64, width in prop_oneof![Just(0usize), 65usize..256]) {
        prop_assert!(get_bit_field(data, start, width, true).is_err());
    }
}

#[test]
fn literal_value_42_at_bit_14() {
    let mut data = 0u64;
    set_bit_field(&mut data, 0b101010, 14, 6).unwrap();
    assert_eq!(get_bit_field(data, 14, 6, true), Ok(42));
}

#[test]
fn literal_nth_byte() {
    assert_eq!(nth_byte(0x0102030405060708, 0), Ok(0x01));
    assert_eq!(nth_byte(0x0102030405060708, 7), Ok(0x08));
}
