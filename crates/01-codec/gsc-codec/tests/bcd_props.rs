//! Property coverage for the packed-decimal money encoding.

use gsc_codec::{decode, decode_bcd, encode, encode_bcd, Encoding, FieldValue, BCD_MAX};
use proptest::prelude::*;

proptest! {
    #[test]
    fn bcd_roundtrips_in_range(v in 0i64..=BCD_MAX) {
        prop_assert_eq!(decode_bcd(&encode_bcd(v)), v);
    }

    #[test]
    fn negative_values_clamp_to_zero(v in i64::MIN..0) {
        prop_assert_eq!(encode_bcd(v), encode_bcd(0));
    }

    #[test]
    fn large_values_clamp_to_max(v in (BCD_MAX + 1)..i64::MAX) {
        prop_assert_eq!(encode_bcd(v), encode_bcd(BCD_MAX));
    }

    #[test]
    fn every_nibble_is_a_decimal_digit(v in any::<i64>()) {
        for byte in encode_bcd(v) {
            prop_assert!(byte >> 4 <= 9 && byte & 0x0F <= 9);
        }
    }

    #[test]
    fn u16_be_field_roundtrips(v in 0i64..=0xFFFF) {
        let encoded = encode(&FieldValue::Int(v), Encoding::U16Be, 2).unwrap();
        prop_assert_eq!(decode(&encoded, Encoding::U16Be).unwrap(), FieldValue::Int(v));
    }
}
