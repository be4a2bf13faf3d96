// Property-based tests for currency formatting

use proptest::prelude::*;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use std::str::FromStr;
use storefront::core::{format_amount, CurrencyConfig};

fn usd() -> CurrencyConfig {
    CurrencyConfig::new("USD").unwrap()
}

#[test]
fn test_whole_amount_gets_two_digits() {
    assert_eq!(format_amount(dec!(10), &usd()), "$10.00");
}

#[test]
fn test_large_amounts_are_grouped() {
    assert_eq!(format_amount(dec!(1234567.891), &usd()), "$1,234,567.89");
    assert_eq!(
        format_amount(dec!(1234567.891), &CurrencyConfig::new("BRL").unwrap()),
        "R$ 1.234.567,89"
    );
}

#[test]
fn test_negative_amount_rounding_to_zero_keeps_sign() {
    assert_eq!(format_amount(dec!(-0.004), &usd()), "-$0.00");
    assert_eq!(
        format_amount(dec!(-0.001), &CurrencyConfig::new("SEK").unwrap()),
        "-0,00 kr"
    );
}

#[test]
fn test_code_is_case_insensitive() {
    let lower = CurrencyConfig::new("usd").unwrap();
    assert_eq!(format_amount(dec!(5.5), &lower), format_amount(dec!(5.5), &usd()));
}

proptest! {
    /// Property: every USD rendering ends in exactly two fraction digits
    #[test]
    fn prop_two_fraction_digits(units in -10_000_000_000i64..10_000_000_000i64, scale in 0u32..8u32) {
        let amount = Decimal::new(units, scale);
        let formatted = format_amount(amount, &usd());

        let (_, fraction) = formatted.rsplit_once('.').unwrap();
        prop_assert_eq!(fraction.len(), 2);
        prop_assert!(fraction.chars().all(|c| c.is_ascii_digit()));
    }

    /// Property: stripping symbol and separators gives back the rounded amount
    #[test]
    fn prop_digits_match_rounded_amount(units in -10_000_000_000i64..10_000_000_000i64, scale in 0u32..8u32) {
        let amount = Decimal::new(units, scale);
        let formatted = format_amount(amount, &usd());

        let expected = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let negative = formatted.starts_with('-');
        let digits: String = formatted
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.')
            .collect();
        let parsed = Decimal::from_str(&digits).unwrap();

        prop_assert_eq!(if negative { -parsed } else { parsed }, expected);
        prop_assert_eq!(negative, amount < Decimal::ZERO);
    }

    /// Property: formatting has no hidden state
    #[test]
    fn prop_idempotent(units in -1_000_000_000_000_000i64..1_000_000_000_000_000i64, scale in 0u32..10u32) {
        let amount = Decimal::new(units, scale);
        let config = CurrencyConfig::new("EUR").unwrap();
        prop_assert_eq!(format_amount(amount, &config), format_amount(amount, &config));
    }
}
