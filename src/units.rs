//! Token amount conversion at the contract's fixed 18-decimal precision.
//!
//! User-entered amounts are human-scaled decimal strings ("1.5"); the
//! contract works in the smallest integer unit. Display formatting matches
//! the conventional ether formatting: trailing zeros trimmed, at least one
//! fractional digit kept ("1000.0").

use alloy_primitives::utils::{format_units, parse_units};
use alloy_primitives::U256;

use crate::error::WasmErc20Error;

/// Decimal exponent declared by the token contract.
pub const TOKEN_DECIMALS: u8 = 18;

/// Parse a human-scaled decimal amount into the smallest integer unit.
///
/// Rejects empty, non-numeric, and negative input so that no malformed
/// amount ever reaches the wallet.
pub fn parse_amount(amount: &str) -> Result<U256, WasmErc20Error> {
    let trimmed = amount.trim();
    if trimmed.is_empty() {
        return Err(WasmErc20Error::InvalidAmount("empty amount".to_string()));
    }
    let parsed = parse_units(trimmed, TOKEN_DECIMALS)
        .map_err(|e| WasmErc20Error::InvalidAmount(format!("{}: {}", trimmed, e)))?;
    if parsed.is_negative() {
        return Err(WasmErc20Error::InvalidAmount(format!(
            "negative amount: {}",
            trimmed
        )));
    }
    Ok(parsed.get_absolute())
}

/// Format a smallest-unit value as a human-scaled decimal string.
pub fn format_amount(raw: U256) -> Result<String, WasmErc20Error> {
    let full = format_units(raw, TOKEN_DECIMALS)
        .map_err(|e| WasmErc20Error::InvalidAmount(e.to_string()))?;
    Ok(trim_fractional(&full))
}

/// Trim trailing fractional zeros, keeping at least one digit after the dot.
fn trim_fractional(formatted: &str) -> String {
    match formatted.split_once('.') {
        Some((whole, fraction)) => {
            let fraction = fraction.trim_end_matches('0');
            if fraction.is_empty() {
                format!("{}.0", whole)
            } else {
                format!("{}.{}", whole, fraction)
            }
        }
        None => format!("{}.0", formatted),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn wei(value: &str) -> U256 {
        U256::from_str_radix(value, 10).unwrap()
    }

    #[rstest]
    #[case("1", "1000000000000000000")]
    #[case("1.5", "1500000000000000000")]
    #[case("1000.0", "1000000000000000000000")]
    #[case("0.000000000000000001", "1")]
    #[case(" 2 ", "2000000000000000000")]
    fn test_parse_amount(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(parse_amount(input).unwrap(), wei(expected));
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("abc")]
    #[case("1.2.3")]
    #[case("-1.5")]
    #[case("0.0000000000000000001")] // 19 fractional digits
    fn test_parse_amount_rejects(#[case] input: &str) {
        assert!(parse_amount(input).is_err());
    }

    #[rstest]
    #[case("1000000000000000000000", "1000.0")]
    #[case("1500000000000000000", "1.5")]
    #[case("1", "0.000000000000000001")]
    #[case("0", "0.0")]
    fn test_format_amount(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(format_amount(wei(raw)).unwrap(), expected);
    }

    #[rstest]
    #[case("1000.0")]
    #[case("0.5")]
    #[case("123.456")]
    #[case("0.000000000000000001")]
    fn test_round_trip_is_idempotent(#[case] display: &str) {
        let raw = parse_amount(display).unwrap();
        let formatted = format_amount(raw).unwrap();
        assert_eq!(formatted, display);
        assert_eq!(parse_amount(&formatted).unwrap(), raw);
    }
}
