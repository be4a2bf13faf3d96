use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{AppError, Result};

/// Fraction digits rendered for every currency amount
pub const FRACTION_DIGITS: u32 = 2;

/// Where the currency symbol sits relative to the digits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPosition {
    Prefix,
    Suffix,
}

/// Display conventions for a currency code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyStyle {
    pub symbol: &'static str,
    pub position: SymbolPosition,
    /// Space between symbol and digits
    pub spaced: bool,
    pub group_separator: char,
    pub decimal_separator: char,
}

impl CurrencyStyle {
    const fn prefix(symbol: &'static str, spaced: bool, group: char, decimal: char) -> Self {
        Self {
            symbol,
            position: SymbolPosition::Prefix,
            spaced,
            group_separator: group,
            decimal_separator: decimal,
        }
    }

    const fn suffix(symbol: &'static str, group: char, decimal: char) -> Self {
        Self {
            symbol,
            position: SymbolPosition::Suffix,
            spaced: true,
            group_separator: group,
            decimal_separator: decimal,
        }
    }

    /// Looks up the conventions for a (normalized, uppercase) currency code.
    /// Unknown codes use the code itself as a spaced prefix.
    fn for_code(code: &str) -> Option<Self> {
        let style = match code {
            "USD" => Self::prefix("$", false, ',', '.'),
            "EUR" => Self::prefix("€", false, ',', '.'),
            "GBP" => Self::prefix("£", false, ',', '.'),
            "CAD" => Self::prefix("CA$", false, ',', '.'),
            "MXN" => Self::prefix("MX$", false, ',', '.'),
            "BRL" => Self::prefix("R$", true, '.', ','),
            "ARS" | "CLP" | "COP" => Self::prefix("$", true, '.', ','),
            "SEK" | "NOK" | "DKK" => Self::suffix("kr", ' ', ','),
            _ => return None,
        };
        Some(style)
    }
}

/// Currency settings for one rendering context.
///
/// Always renders exactly two fraction digits. The code is validated on
/// construction: three ASCII letters, stored uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyConfig {
    currency_code: String,
}

impl CurrencyConfig {
    pub fn new(currency_code: &str) -> Result<Self> {
        let code = currency_code.trim();
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(AppError::contract(format!(
                "Invalid currency code: {:?}",
                currency_code
            )));
        }

        Ok(Self {
            currency_code: code.to_ascii_uppercase(),
        })
    }

    pub fn currency_code(&self) -> &str {
        &self.currency_code
    }

    pub fn min_fraction_digits(&self) -> u32 {
        FRACTION_DIGITS
    }

    pub fn max_fraction_digits(&self) -> u32 {
        FRACTION_DIGITS
    }

    pub fn style(&self) -> CurrencyStyle {
        CurrencyStyle::for_code(&self.currency_code).unwrap_or(CurrencyStyle {
            symbol: "",
            position: SymbolPosition::Prefix,
            spaced: true,
            group_separator: ',',
            decimal_separator: '.',
        })
    }

    /// Formats an amount for display, see [`format_amount`]
    pub fn format(&self, amount: Decimal) -> String {
        format_amount(amount, self)
    }
}

impl fmt::Display for CurrencyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.currency_code)
    }
}

impl std::str::FromStr for CurrencyConfig {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for CurrencyConfig {
    type Error = AppError;

    fn try_from(s: String) -> Result<Self> {
        Self::new(&s)
    }
}

impl From<CurrencyConfig> for String {
    fn from(config: CurrencyConfig) -> Self {
        config.currency_code
    }
}

/// Renders `amount` with exactly two fraction digits, grouped thousands and
/// the currency symbol for `config`.
///
/// Midpoints round away from zero. Negative amounts keep a leading `-`, also
/// when they round to zero (`-$0.00`); nothing is clamped.
pub fn format_amount(amount: Decimal, config: &CurrencyConfig) -> String {
    let style = config.style();
    let rounded =
        amount.round_dp_with_strategy(FRACTION_DIGITS, RoundingStrategy::MidpointAwayFromZero);
    let negative = amount.is_sign_negative() && !amount.is_zero();

    let digits = format!("{:.width$}", rounded.abs(), width = FRACTION_DIGITS as usize);
    let (integer, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut number = group_digits(integer, style.group_separator);
    number.push(style.decimal_separator);
    number.push_str(fraction);

    let symbol = if style.symbol.is_empty() {
        config.currency_code()
    } else {
        style.symbol
    };
    let gap = if style.spaced { " " } else { "" };
    let sign = if negative { "-" } else { "" };

    match style.position {
        SymbolPosition::Prefix => format!("{sign}{symbol}{gap}{number}"),
        SymbolPosition::Suffix => format!("{sign}{number}{gap}{symbol}"),
    }
}

fn group_digits(integer: &str, separator: char) -> String {
    let len = integer.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(digit);
    }
    grouped
}
