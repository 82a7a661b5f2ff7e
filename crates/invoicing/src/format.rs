//! Display helpers. Kept apart from the arithmetic so totals can be asserted
//! as exact decimals rather than rendered strings.

use chrono::{Datelike, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::totals::CURRENCY_SCALE;

/// `$1,311,750.12` (en-US, USD). Negative amounts render as `-$5.00`.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    let text = format!("{:.2}", rounded.abs());
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    format!("{sign}${}.{cents}", group_thousands(whole))
}

/// An amount split for the summary cards: grouped whole part, raw fraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AmountParts {
    pub whole: String,
    /// Fraction digits exactly as stored (`777733.3` -> `3`); `None` if integral.
    pub fraction: Option<String>,
}

/// Split an amount the way the summary cards show it (`$777,733.3`).
///
/// No rounding and no padding of the fraction; trailing zeros are dropped.
pub fn split_amount(amount: Decimal) -> AmountParts {
    let text = amount.normalize().to_string();
    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction.to_string())),
        None => (text.as_str(), None),
    };

    let whole = match whole.strip_prefix('-') {
        Some(digits) => format!("-{}", group_thousands(digits)),
        None => group_thousands(whole),
    };

    AmountParts { whole, fraction }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Up to two uppercase initials from a display name (`"john doe"` -> `JD`).
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

/// `19 May 2023`.
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%-d %B %Y").to_string()
}

/// `19th May, 2023`.
pub fn format_ordinal_date(date: NaiveDate) -> String {
    let day = date.day();
    format!(
        "{day}{} {}, {}",
        ordinal_suffix(day),
        date.format("%B"),
        date.year()
    )
}

pub fn ordinal_suffix(day: u32) -> &'static str {
    if (4..=20).contains(&day) {
        return "th";
    }
    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn currency() {
        assert_eq!(format_currency(dec!(1311750.12)), "$1,311,750.12");
        assert_eq!(format_currency(dec!(5500)), "$5,500.00");
        assert_eq!(format_currency(dec!(0)), "$0.00");
        assert_eq!(format_currency(dec!(999.995)), "$1,000.00");
        assert_eq!(format_currency(dec!(-5)), "-$5.00");
        assert_eq!(format_currency(dec!(-0.001)), "$0.00");
        assert_eq!(format_currency(dec!(123)), "$123.00");
    }

    #[test]
    fn split_for_cards() {
        assert_eq!(
            split_amount(dec!(777733.3)),
            AmountParts { whole: "777,733".to_string(), fraction: Some("3".to_string()) }
        );
        assert_eq!(
            split_amount(dec!(5400.02)),
            AmountParts { whole: "5,400".to_string(), fraction: Some("02".to_string()) }
        );
        assert_eq!(
            split_amount(dec!(120000)),
            AmountParts { whole: "120,000".to_string(), fraction: None }
        );
        assert_eq!(
            split_amount(dec!(5400.00)),
            AmountParts { whole: "5,400".to_string(), fraction: None }
        );
        assert_eq!(split_amount(dec!(-1234.5)).whole, "-1,234");
    }

    #[test]
    fn grouping_edges() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("1234567"), "1,234,567");
    }

    #[test]
    fn initials_from_names() {
        assert_eq!(initials("John Doe"), "JD");
        assert_eq!(initials("  ada   lovelace byron "), "AL");
        assert_eq!(initials("cher"), "C");
        assert_eq!(initials(""), "");
        assert_eq!(initials("   "), "");
    }

    #[test]
    fn dates() {
        let date = NaiveDate::from_ymd_opt(2023, 5, 19).unwrap();
        assert_eq!(format_long_date(date), "19 May 2023");
        assert_eq!(format_ordinal_date(date), "19th May, 2023");

        let date = NaiveDate::from_ymd_opt(2022, 11, 1).unwrap();
        assert_eq!(format_ordinal_date(date), "1st November, 2022");
    }

    #[test]
    fn ordinal_suffixes() {
        let expected = [
            (1, "st"), (2, "nd"), (3, "rd"), (4, "th"), (11, "th"), (12, "th"),
            (13, "th"), (20, "th"), (21, "st"), (22, "nd"), (23, "rd"), (30, "th"), (31, "st"),
        ];
        for (day, suffix) in expected {
            assert_eq!(ordinal_suffix(day), suffix, "day {day}");
        }
    }
}
