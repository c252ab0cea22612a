//! Amount parsing for user-typed input

use crate::error::{WalletError, WalletResult};
use crate::models::Money;

fn parse(input: &str) -> WalletResult<Money> {
    if input.trim().is_empty() {
        return Err(WalletError::invalid("Please enter an amount"));
    }
    Money::parse(input).map_err(|e| WalletError::invalid(e.to_string()))
}

/// Parse an amount for a deposit, payment or expense
///
/// The amount must be a decimal number strictly greater than zero.
pub fn parse_amount(input: &str) -> WalletResult<Money> {
    let amount = parse(input)?;
    if !amount.is_positive() {
        return Err(WalletError::invalid("Amount must be positive"));
    }
    Ok(amount)
}

/// Parse a monthly spending limit; zero is allowed and clears the limit
pub fn parse_limit(input: &str) -> WalletResult<Money> {
    let limit = parse(input)?;
    if limit.is_negative() {
        return Err(WalletError::invalid("Limit cannot be negative"));
    }
    Ok(limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount_accepts_positive() {
        assert_eq!(parse_amount("100").unwrap(), Money::from_dollars(100));
        assert_eq!(parse_amount(" 12.34 ").unwrap(), Money::from_cents(1234));
    }

    #[test]
    fn test_parse_amount_rejects() {
        for input in ["", "  ", "abc", "0", "-5", "0.00", "1e3"] {
            assert!(
                matches!(parse_amount(input), Err(WalletError::InvalidInput(_))),
                "expected '{}' to be rejected",
                input
            );
        }
    }

    #[test]
    fn test_parse_amount_too_large() {
        let err = parse_amount("99999999999999999999").unwrap_err();
        assert!(err.to_string().contains("too large"));
    }

    #[test]
    fn test_parse_limit() {
        assert_eq!(parse_limit("0").unwrap(), Money::zero());
        assert_eq!(parse_limit("250").unwrap(), Money::from_dollars(250));
        assert!(matches!(
            parse_limit("-1"),
            Err(WalletError::InvalidInput(_))
        ));
        assert!(parse_limit("lots").is_err());
    }
}
