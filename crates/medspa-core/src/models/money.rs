// ABOUTME: Fixed-point currency amount stored as integer cents
// ABOUTME: Serializes as a two-decimal string and accepts strings or JSON numbers on input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Currency amount in cents
///
/// ```rust
/// use medspa_core::models::Money;
///
/// let price: Money = "150.5".parse().unwrap();
/// assert_eq!(price.cents(), 15_050);
/// assert_eq!(price.to_string(), "150.50");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money {
    cents: i64,
}

impl Money {
    /// Amount from a number of cents
    #[must_use]
    pub const fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// Amount from whole currency units
    #[must_use]
    pub const fn from_units(units: i64) -> Self {
        Self { cents: units * 100 }
    }

    /// Amount in cents
    #[must_use]
    pub const fn cents(self) -> i64 {
        self.cents
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.cents < 0 { "-" } else { "" };
        let abs = self.cents.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

/// Error parsing a decimal amount
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid amount '{0}': expected a decimal with at most two fractional digits")]
pub struct ParseMoneyError(String);

impl FromStr for Money {
    type Err = ParseMoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseMoneyError(s.to_owned());
        let trimmed = s.trim();
        let (negative, digits) = trimmed
            .strip_prefix('-')
            .map_or((false, trimmed), |rest| (true, rest));

        let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));
        if whole.is_empty() || fraction.len() > 2 {
            return Err(invalid());
        }
        if !whole.bytes().all(|b| b.is_ascii_digit()) || !fraction.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        let units: i64 = whole.parse().map_err(|_| invalid())?;
        let fraction_cents: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => fraction.parse().map_err(|_| invalid())?,
        };

        let cents = units
            .checked_mul(100)
            .and_then(|c| c.checked_add(fraction_cents))
            .ok_or_else(invalid)?;
        Ok(Self::from_cents(if negative { -cents } else { cents }))
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct MoneyVisitor;

impl Visitor<'_> for MoneyVisitor {
    type Value = Money;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a decimal amount as a string or number")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Money, E> {
        v.parse().map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Money, E> {
        v.checked_mul(100)
            .map(Money::from_cents)
            .ok_or_else(|| E::custom(format!("amount {v} out of range")))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Money, E> {
        i64::try_from(v)
            .map_err(|_| E::custom(format!("amount {v} out of range")))
            .and_then(|v| self.visit_i64(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Money, E> {
        // Amounts finer than a cent are rejected
        let rendered = format!("{v:.2}");
        if (rendered.parse::<f64>().unwrap_or(f64::NAN) - v).abs() > 1e-9 {
            return Err(E::custom(format!("amount {v} has more than two decimals")));
        }
        rendered.parse().map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(MoneyVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        assert_eq!("300".parse::<Money>().unwrap().to_string(), "300.00");
        assert_eq!("300.5".parse::<Money>().unwrap().cents(), 30_050);
        assert_eq!("-1.05".parse::<Money>().unwrap().to_string(), "-1.05");
        assert!("1.005".parse::<Money>().is_err());
        assert!("abc".parse::<Money>().is_err());
        assert!(".50".parse::<Money>().is_err());
    }

    #[test]
    fn test_serde_accepts_strings_and_numbers() {
        let from_str: Money = serde_json::from_str("\"150.00\"").unwrap();
        let from_int: Money = serde_json::from_str("150").unwrap();
        let from_float: Money = serde_json::from_str("150.25").unwrap();

        assert_eq!(from_str, Money::from_units(150));
        assert_eq!(from_int, Money::from_units(150));
        assert_eq!(from_float.cents(), 15_025);
        assert_eq!(serde_json::to_string(&from_float).unwrap(), "\"150.25\"");
    }

    #[test]
    fn test_rejects_sub_cent_floats() {
        assert!(serde_json::from_str::<Money>("1.234").is_err());
    }
}
