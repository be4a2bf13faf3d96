/// Digits kept from the zipcode input
pub const ZIPCODE_MAX_DIGITS: usize = 8;
/// Length of a complete masked zipcode, `12345-678`
pub const ZIPCODE_MASKED_LENGTH: usize = 9;

const PREFIX_DIGITS: usize = 5;

/// Apply the `12345-678` mask to raw zipcode input.
///
/// Non-digits are dropped, the result is truncated to eight digits, and a
/// dash goes after the fifth digit once there are more than five.
pub fn format_zipcode(input: &str) -> String {
    let digits: String = input
        .chars()
        .filter(char::is_ascii_digit)
        .take(ZIPCODE_MAX_DIGITS)
        .collect();

    if digits.len() > PREFIX_DIGITS {
        format!("{}-{}", &digits[..PREFIX_DIGITS], &digits[PREFIX_DIGITS..])
    } else {
        digits
    }
}

/// Whether a masked zipcode is long enough to submit
pub fn is_complete_zipcode(zipcode: &str) -> bool {
    zipcode.len() >= ZIPCODE_MASKED_LENGTH
}
