//! Money-related types for product pricing.
//!
//! Amounts are stored as an integer count of the currency's minor unit
//! (øre, cents, pence) so that rounding is exact.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Supported ISO 4217 currencies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Currency {
    /// Danish krone.
    #[default]
    Dkk,
    /// Euro.
    Eur,
    /// United States dollar.
    Usd,
    /// Pound sterling.
    Gbp,
    /// Swedish krona.
    Sek,
    /// Norwegian krone.
    Nok,
}

impl Currency {
    /// Returns the three-letter ISO 4217 code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Dkk => "DKK",
            Self::Eur => "EUR",
            Self::Usd => "USD",
            Self::Gbp => "GBP",
            Self::Sek => "SEK",
            Self::Nok => "NOK",
        }
    }

    /// Number of decimal places between the minor and major unit.
    #[must_use]
    pub const fn minor_exponent(&self) -> u32 {
        2
    }

    /// Number of minor units in one major unit.
    #[must_use]
    pub const fn minor_per_major(&self) -> i64 {
        10_i64.pow(self.minor_exponent())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DKK" => Ok(Self::Dkk),
            "EUR" => Ok(Self::Eur),
            "USD" => Ok(Self::Usd),
            "GBP" => Ok(Self::Gbp),
            "SEK" => Ok(Self::Sek),
            "NOK" => Ok(Self::Nok),
            _ => Err(ConfigError::UnsupportedCurrency {
                code: s.to_string(),
            }),
        }
    }
}

impl Serialize for Currency {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// A fixed-point money amount tagged with its currency.
///
/// # Serialization
///
/// `Money` serializes as an object with the amount as a decimal string,
/// which keeps the value exact for JSON consumers:
///
/// ```rust
/// use storefront::catalog::{Currency, Money};
///
/// let price = Money::from_minor(12_500, Currency::Dkk);
/// let json = serde_json::to_value(&price).unwrap();
/// assert_eq!(json["amount"], "125.00");
/// assert_eq!(json["currency_code"], "DKK");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Money {
    amount_minor: i64,
    currency: Currency,
}

impl Money {
    /// Creates an amount from a count of minor units.
    #[must_use]
    pub const fn from_minor(amount_minor: i64, currency: Currency) -> Self {
        Self {
            amount_minor,
            currency,
        }
    }

    /// Returns the amount in minor units.
    #[must_use]
    pub const fn amount_minor(&self) -> i64 {
        self.amount_minor
    }

    /// Returns the currency.
    #[must_use]
    pub const fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the amount as a decimal string, e.g. `"125.00"`.
    #[must_use]
    pub fn amount(&self) -> String {
        let per_major = self.currency.minor_per_major();
        let sign = if self.amount_minor < 0 { "-" } else { "" };
        let abs = self.amount_minor.unsigned_abs();
        let per_major = per_major.unsigned_abs();
        format!(
            "{sign}{}.{:0width$}",
            abs / per_major,
            abs % per_major,
            width = self.currency.minor_exponent() as usize
        )
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount(), self.currency)
    }
}

#[derive(Serialize, Deserialize)]
struct MoneyRepr {
    amount: String,
    currency_code: Currency,
}

impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        MoneyRepr {
            amount: self.amount(),
            currency_code: self.currency,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let repr = MoneyRepr::deserialize(deserializer)?;
        let exponent = repr.currency_code.minor_exponent() as usize;
        let (major, minor) = repr.amount.split_once('.').unwrap_or((repr.amount.as_str(), ""));
        if minor.len() > exponent || !minor.chars().all(|c| c.is_ascii_digit()) {
            return Err(de::Error::custom(format!(
                "invalid amount '{}' for {}",
                repr.amount, repr.currency_code
            )));
        }
        let negative = major.starts_with('-');
        let major: i64 = major
            .trim_start_matches('-')
            .parse()
            .map_err(de::Error::custom)?;
        let minor: i64 = if minor.is_empty() {
            0
        } else {
            format!("{minor:0<exponent$}")
                .parse()
                .map_err(de::Error::custom)?
        };
        let magnitude = major
            .checked_mul(repr.currency_code.minor_per_major())
            .and_then(|major_minor| major_minor.checked_add(minor))
            .ok_or_else(|| {
                de::Error::custom(format!(
                    "amount '{}' is out of range for {}",
                    repr.amount, repr.currency_code
                ))
            })?;
        Ok(Self::from_minor(
            if negative { -magnitude } else { magnitude },
            repr.currency_code,
        ))
    }
}

/// Rounds `x` up to the nearest multiple of `n`.
///
/// `n` must be positive and `x + n` must not overflow; [`PriceRule::new`]
/// guarantees both for generated prices. Values that are already a
/// multiple are returned unchanged.
///
/// [`PriceRule::new`]: super::PriceRule::new
///
/// ```rust
/// use storefront::catalog::round_up_to_multiple;
///
/// assert_eq!(round_up_to_multiple(12_345, 500), 12_500);
/// assert_eq!(round_up_to_multiple(12_500, 500), 12_500);
/// ```
#[must_use]
pub const fn round_up_to_multiple(x: i64, n: i64) -> i64 {
    (x.div_euclid(n) + (x.rem_euclid(n) != 0) as i64) * n
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_up_to_multiple() {
        assert_eq!(round_up_to_multiple(1, 5), 5);
        assert_eq!(round_up_to_multiple(5, 5), 5);
        assert_eq!(round_up_to_multiple(6, 5), 10);
        assert_eq!(round_up_to_multiple(0, 5), 0);
        assert_eq!(round_up_to_multiple(250_000, 500), 250_000);
        assert_eq!(round_up_to_multiple(5_001, 500), 5_500);
    }

    #[test]
    fn test_amount_formats_minor_units() {
        assert_eq!(Money::from_minor(12_500, Currency::Dkk).amount(), "125.00");
        assert_eq!(Money::from_minor(5, Currency::Eur).amount(), "0.05");
        assert_eq!(Money::from_minor(-150, Currency::Usd).amount(), "-1.50");
    }

    #[test]
    fn test_deserialize_rejects_out_of_range_amount() {
        let result =
            serde_json::from_str::<Money>(r#"{"amount":"99999999999999999","currency_code":"DKK"}"#);
        let error = result.unwrap_err();
        assert!(error.to_string().contains("out of range"), "{error}");

        let result =
            serde_json::from_str::<Money>(r#"{"amount":"92233720368547758.99","currency_code":"DKK"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_largest_amount() {
        let money: Money =
            serde_json::from_str(r#"{"amount":"92233720368547758.07","currency_code":"EUR"}"#)
                .unwrap();
        assert_eq!(money.amount_minor(), i64::MAX);
    }

    #[test]
    fn test_display_includes_currency() {
        let money = Money::from_minor(1_999, Currency::Gbp);
        assert_eq!(money.to_string(), "19.99 GBP");
    }

    #[test]
    fn test_currency_parses_case_insensitively() {
        assert_eq!("dkk".parse::<Currency>().unwrap(), Currency::Dkk);
        assert_eq!(" EUR ".parse::<Currency>().unwrap(), Currency::Eur);
        assert!(matches!(
            "XYZ".parse::<Currency>(),
            Err(ConfigError::UnsupportedCurrency { .. })
        ));
    }

    #[test]
    fn test_money_serialization_shape() {
        let money = Money::from_minor(4_250, Currency::Sek);
        let json = serde_json::to_value(money).unwrap();
        assert_eq!(json, serde_json::json!({"amount": "42.50", "currency_code": "SEK"}));
    }

    #[test]
    fn test_money_deserialization() {
        let money: Money =
            serde_json::from_str(r#"{"amount": "42.5", "currency_code": "NOK"}"#).unwrap();
        assert_eq!(money, Money::from_minor(4_250, Currency::Nok));

        let money: Money =
            serde_json::from_str(r#"{"amount": "7", "currency_code": "DKK"}"#).unwrap();
        assert_eq!(money.amount_minor(), 700);

        let result: Result<Money, _> =
            serde_json::from_str(r#"{"amount": "1.234", "currency_code": "DKK"}"#);
        assert!(result.is_err());
    }
}
