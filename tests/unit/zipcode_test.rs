// Property-based tests for the zipcode input mask

use proptest::prelude::*;
use storefront::shipping::format_zipcode;
use storefront::shipping::services::is_complete_zipcode;

#[test]
fn test_non_digits_are_dropped() {
    assert_eq!(format_zipcode("22.250-040"), "22250-040");
    assert_eq!(format_zipcode("abc"), "");
    assert_eq!(format_zipcode(""), "");
}

#[test]
fn test_extra_digits_are_truncated() {
    assert_eq!(format_zipcode("123456789012"), "12345-678");
}

proptest! {
    /// Property: the mask never exceeds nine characters and only holds digits and one dash
    #[test]
    fn prop_mask_shape(input in ".{0,32}") {
        let zipcode = format_zipcode(&input);
        let digits = zipcode.chars().filter(|c| c.is_ascii_digit()).count();

        prop_assert!(zipcode.len() <= 9);
        prop_assert!(zipcode.chars().all(|c| c.is_ascii_digit() || c == '-'));
        prop_assert_eq!(zipcode.contains('-'), digits > 5);
        if digits > 5 {
            prop_assert_eq!(zipcode.find('-'), Some(5));
        }
    }

    /// Property: a zipcode is complete exactly when eight digits were typed
    #[test]
    fn prop_complete_after_eight_digits(digits in "[0-9]{0,12}") {
        let zipcode = format_zipcode(&digits);
        prop_assert_eq!(is_complete_zipcode(&zipcode), digits.len() >= 8);
    }

    /// Property: masking is stable when applied to its own output
    #[test]
    fn prop_mask_is_stable(input in "[0-9a-z -]{0,20}") {
        let once = format_zipcode(&input);
        prop_assert_eq!(format_zipcode(&once), once.clone());
    }
}
