//! `total_amount` as it arrives from the store, and its coercion to a decimal.

use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why an amount could not be turned into a decimal.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "raw", rename_all = "snake_case")]
pub enum CoercionError {
    #[error("amount is missing")]
    Missing,

    #[error("amount is not numeric: {0:?}")]
    NotNumeric(String),

    /// Numeric, but outside what a 96-bit decimal can hold.
    #[error("amount is out of range: {0}")]
    OutOfRange(String),
}

/// Raw `total_amount` column value.
///
/// The numeric column is exposed by the REST layer either as a JSON number or
/// as a numeric-formatted string depending on precision, so both shapes are
/// accepted and coerced explicitly. Numbers keep their literal text, so
/// nothing passes through `f64` on the way in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AmountValue {
    Number(serde_json::Number),
    Text(String),
}

impl AmountValue {
    /// Coerce to an exact decimal.
    ///
    /// Blank text reads as zero. Plain and scientific notation are accepted;
    /// `NaN`, infinities and other text are rejected.
    pub fn coerce(&self) -> Result<Decimal, CoercionError> {
        match self {
            AmountValue::Number(n) => parse_decimal(&n.to_string()),
            AmountValue::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return Ok(Decimal::ZERO);
                }
                parse_decimal(trimmed)
            }
        }
    }
}

fn parse_decimal(text: &str) -> Result<Decimal, CoercionError> {
    if !is_numeric_literal(text) {
        return Err(CoercionError::NotNumeric(text.to_string()));
    }
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .map_err(|_| CoercionError::OutOfRange(text.to_string()))
}

/// Signed decimal or scientific literal. Digit separators, `NaN` and
/// infinities do not qualify.
fn is_numeric_literal(text: &str) -> bool {
    text.bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
        && text.parse::<f64>().is_ok()
}

impl From<Decimal> for AmountValue {
    fn from(value: Decimal) -> Self {
        AmountValue::Text(value.to_string())
    }
}

impl From<i64> for AmountValue {
    fn from(value: i64) -> Self {
        AmountValue::Number(value.into())
    }
}

impl From<&str> for AmountValue {
    fn from(value: &str) -> Self {
        AmountValue::Text(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn numbers_and_numeric_strings_coerce() {
        assert_eq!(AmountValue::from(100_i64).coerce().unwrap(), dec!(100));
        assert_eq!(AmountValue::from("5400.02").coerce().unwrap(), dec!(5400.02));
        assert_eq!(AmountValue::from(" 12.5 ").coerce().unwrap(), dec!(12.5));
        assert_eq!(AmountValue::from("-3").coerce().unwrap(), dec!(-3));
        assert_eq!(AmountValue::from("1e3").coerce().unwrap(), dec!(1000));
    }

    #[test]
    fn json_shapes_deserialize() {
        let n: AmountValue = serde_json::from_str("1311750.12").unwrap();
        assert_eq!(n.coerce().unwrap(), dec!(1311750.12));

        let s: AmountValue = serde_json::from_str("\"777733.3\"").unwrap();
        assert_eq!(s, AmountValue::Text("777733.3".to_string()));
        assert_eq!(s.coerce().unwrap(), dec!(777733.3));
    }

    #[test]
    fn blank_text_is_zero() {
        assert_eq!(AmountValue::from("").coerce().unwrap(), Decimal::ZERO);
        assert_eq!(AmountValue::from("   ").coerce().unwrap(), Decimal::ZERO);
    }

    #[test]
    fn non_numeric_text_is_rejected() {
        for raw in ["abc", "NaN", "Infinity", "-inf", "12abc", "$100", "1_000", "1,000", "e5"] {
            match AmountValue::from(raw).coerce() {
                Err(CoercionError::NotNumeric(text)) => assert_eq!(text, raw),
                other => panic!("Expected NotNumeric for {raw:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn huge_numbers_are_out_of_range() {
        let huge = AmountValue::from("1e40");
        assert!(matches!(huge.coerce(), Err(CoercionError::OutOfRange(_))));
    }

    #[test]
    fn json_numbers_keep_every_digit() {
        let precise: AmountValue = serde_json::from_str("12345678901234567.89").unwrap();
        assert_eq!(precise.coerce().unwrap(), dec!(12345678901234567.89));

        let wide: AmountValue = serde_json::from_str("99999999999999999999").unwrap();
        assert_eq!(wide.coerce().unwrap(), dec!(99999999999999999999));

        let small: AmountValue = serde_json::from_str("0.1").unwrap();
        assert_eq!(small.coerce().unwrap(), dec!(0.1));
    }

    #[test]
    fn json_number_beyond_f64_is_out_of_range() {
        let huge: AmountValue = serde_json::from_str("1e400").unwrap();
        assert_eq!(
            huge.coerce(),
            Err(CoercionError::OutOfRange("1e400".to_string()))
        );
    }
}
