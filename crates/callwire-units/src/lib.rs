//! # callwire-units
//!
//! Lossless conversion between human decimal amount strings and
//! integer base-unit (WEI) amounts. One ETH is 10^18 WEI; amounts are
//! fixed-point with at most 18 fractional digits and are never
//! rounded — excess precision is an error, not a truncation.

#![warn(missing_docs)]
#![warn(clippy::all)]

use std::fmt;
use std::str::FromStr;

use callwire_primitives::U256;
use thiserror::Error;

/// Number of decimal digits between ETH and WEI
pub const DECIMALS: usize = 18;

/// Amount conversion error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitError {
    /// Malformed decimal literal
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// More than 18 fractional digits
    #[error("amount precision exceeds 18 decimal places")]
    PrecisionExceeded,

    /// Unit name is not in the denomination list
    #[error("unknown unit: {0}")]
    UnknownUnit(String),
}

/// Value denomination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// Base unit, the minimal indivisible amount
    Wei,
    /// Decimal unit, 10^18 WEI
    Eth,
}

impl Unit {
    /// All recognized denominations
    pub const ALL: [Unit; 2] = [Unit::Wei, Unit::Eth];

    /// Unit name as displayed after amounts
    pub fn name(&self) -> &'static str {
        match self {
            Unit::Wei => "WEI",
            Unit::Eth => "ETH",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Unit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "WEI" => Ok(Unit::Wei),
            "ETH" => Ok(Unit::Eth),
            _ => Err(UnitError::UnknownUnit(s.to_string())),
        }
    }
}

/// 10^18 as U256
fn wei_per_eth() -> U256 {
    U256::from(10u64).pow(U256::from(DECIMALS))
}

/// Convert a decimal amount string to a WEI amount.
///
/// Empty text converts to zero. WEI amounts must be plain base-10
/// integer literals. ETH amounts may carry a fractional part of up to
/// 18 digits; anything beyond fails with
/// [`UnitError::PrecisionExceeded`].
pub fn to_wei(amount: &str, unit: Unit) -> Result<U256, UnitError> {
    if amount.is_empty() {
        return Ok(U256::zero());
    }
    match unit {
        Unit::Wei => parse_integer(amount),
        Unit::Eth => match amount.find('.') {
            // no dot (or a bare leading dot, which the integer parse
            // rejects): whole ETH amount
            None | Some(0) => {
                let eth = parse_integer(amount)?;
                eth.checked_mul(wei_per_eth())
                    .ok_or_else(|| UnitError::InvalidAmount(amount.to_string()))
            }
            Some(index) => {
                let int_part = &amount[..index];
                let frac_part = &amount[index + 1..];
                if frac_part.len() > DECIMALS {
                    return Err(UnitError::PrecisionExceeded);
                }

                // integer part scaled by 10^18, plus the fractional
                // part right-padded to exactly 18 digits
                let scaled_int = format!("{}{}", int_part, "0".repeat(DECIMALS));
                let padded_frac = format!("{}{}", frac_part, "0".repeat(DECIMALS - frac_part.len()));

                let int_wei =
                    parse_integer(&scaled_int).map_err(|_| UnitError::InvalidAmount(amount.to_string()))?;
                let frac_wei =
                    parse_integer(&padded_frac).map_err(|_| UnitError::InvalidAmount(amount.to_string()))?;

                int_wei
                    .checked_add(frac_wei)
                    .ok_or_else(|| UnitError::InvalidAmount(amount.to_string()))
            }
        },
    }
}

/// Format a WEI amount as a decimal string in the given unit.
///
/// ETH formatting is lossless fixed-point: the fractional part is
/// stripped of trailing zeros and omitted entirely (no trailing dot)
/// when it empties.
pub fn from_wei(amount: U256, unit: Unit) -> String {
    let amount_str = amount.to_string();
    match unit {
        Unit::Wei => amount_str,
        Unit::Eth => {
            let (int_part, frac_part) = if amount_str.len() <= DECIMALS {
                (
                    "0".to_string(),
                    format!("{}{}", "0".repeat(DECIMALS - amount_str.len()), amount_str),
                )
            } else {
                let split = amount_str.len() - DECIMALS;
                (amount_str[..split].to_string(), amount_str[split..].to_string())
            };
            let frac_part = frac_part.trim_end_matches('0');
            if frac_part.is_empty() {
                int_part
            } else {
                format!("{}.{}", int_part, frac_part)
            }
        }
    }
}

/// Render an amount with an auto-picked unit and its name appended:
/// WEI while the amount stays within 18 digits, ETH above.
pub fn display_amount(amount: U256) -> String {
    let unit = if amount.to_string().len() <= DECIMALS {
        Unit::Wei
    } else {
        Unit::Eth
    };
    format!("{} {}", from_wei(amount, unit), unit)
}

fn parse_integer(text: &str) -> Result<U256, UnitError> {
    U256::from_dec_str(text).map_err(|_| UnitError::InvalidAmount(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_unit_from_str() {
        assert_eq!("WEI".parse::<Unit>().unwrap(), Unit::Wei);
        assert_eq!("ETH".parse::<Unit>().unwrap(), Unit::Eth);
        assert_eq!(
            "GWEI".parse::<Unit>().unwrap_err(),
            UnitError::UnknownUnit("GWEI".to_string())
        );
    }

    #[test]
    fn test_to_wei_empty_is_zero() {
        assert_eq!(to_wei("", Unit::Wei).unwrap(), U256::zero());
        assert_eq!(to_wei("", Unit::Eth).unwrap(), U256::zero());
    }

    #[test]
    fn test_to_wei_base_unit() {
        assert_eq!(to_wei("12345", Unit::Wei).unwrap(), U256::from(12345));
        assert!(to_wei("12.5", Unit::Wei).is_err());
        assert!(to_wei("abc", Unit::Wei).is_err());
    }

    #[test]
    fn test_to_wei_whole_eth() {
        assert_eq!(
            to_wei("1", Unit::Eth).unwrap(),
            U256::from(10u128.pow(18))
        );
        assert_eq!(
            to_wei("2", Unit::Eth).unwrap(),
            U256::from(2u128 * 10u128.pow(18))
        );
    }

    #[test]
    fn test_to_wei_fractional_eth() {
        assert_eq!(
            to_wei("1.5", Unit::Eth).unwrap(),
            U256::from(1_500_000_000_000_000_000u128)
        );
        assert_eq!(
            to_wei("0.000000000000000001", Unit::Eth).unwrap(),
            U256::one()
        );
    }

    #[test]
    fn test_to_wei_precision_boundary() {
        // 18 fractional digits is the maximum
        assert_eq!(
            to_wei("1.123456789012345678", Unit::Eth).unwrap(),
            U256::from(1_123_456_789_012_345_678u128)
        );
        // 19 digits fails; no rounding is ever performed
        assert_eq!(
            to_wei("1.1234567890123456789", Unit::Eth).unwrap_err(),
            UnitError::PrecisionExceeded
        );
    }

    #[test]
    fn test_to_wei_trailing_dot() {
        // "1." parses: empty fractional part pads to zero
        assert_eq!(
            to_wei("1.", Unit::Eth).unwrap(),
            U256::from(10u128.pow(18))
        );
    }

    #[test]
    fn test_to_wei_leading_dot_rejected() {
        assert!(matches!(
            to_wei(".5", Unit::Eth),
            Err(UnitError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_to_wei_garbage_fraction_rejected() {
        assert!(to_wei("1.2x", Unit::Eth).is_err());
        assert!(to_wei("x.2", Unit::Eth).is_err());
    }

    #[test]
    fn test_from_wei_base_unit() {
        assert_eq!(from_wei(U256::from(12345), Unit::Wei), "12345");
    }

    #[test]
    fn test_from_wei_eth() {
        assert_eq!(
            from_wei(U256::from(1_500_000_000_000_000_000u128), Unit::Eth),
            "1.5"
        );
        assert_eq!(from_wei(U256::from(10u128.pow(18)), Unit::Eth), "1");
        assert_eq!(from_wei(U256::one(), Unit::Eth), "0.000000000000000001");
        assert_eq!(from_wei(U256::zero(), Unit::Eth), "0");
    }

    #[test]
    fn test_from_wei_no_trailing_dot() {
        let text = from_wei(U256::from(3u128 * 10u128.pow(18)), Unit::Eth);
        assert_eq!(text, "3");
        assert!(!text.ends_with('.'));
    }

    #[test]
    fn test_display_amount_unit_autopick() {
        // 18 digits or fewer shows WEI
        assert_eq!(display_amount(U256::from(1000)), "1000 WEI");
        // beyond 18 digits shows ETH
        assert_eq!(
            display_amount(U256::from(1_500_000_000_000_000_000_0u128)),
            "15 ETH"
        );
    }

    proptest! {
        #[test]
        fn prop_eth_decimal_roundtrip(n in any::<u128>()) {
            let wei = U256::from(n);
            let text = from_wei(wei, Unit::Eth);
            prop_assert_eq!(to_wei(&text, Unit::Eth).unwrap(), wei);
        }

        #[test]
        fn prop_wei_decimal_roundtrip(n in any::<u128>()) {
            let wei = U256::from(n);
            let text = from_wei(wei, Unit::Wei);
            prop_assert_eq!(to_wei(&text, Unit::Wei).unwrap(), wei);
        }
    }
}
