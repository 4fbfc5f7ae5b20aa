//! Display formatting for money and percentages.

use rust_decimal::Decimal;

/// "$1,234.56" - two decimal places, thousands separators.
pub(crate) fn money(value: Decimal) -> String {
    let text = format!("{:.2}", value.round_dp(2));
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    format!("{}${}.{}", sign, grouped, frac_part)
}

/// "12.34%" - two decimal places.
pub(crate) fn percent(value: Decimal) -> String {
    format!("{:.2}%", value.round_dp(2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn money_groups_thousands() {
        assert_eq!(money(dec!(2250)), "$2,250.00");
        assert_eq!(money(dec!(1234567.891)), "$1,234,567.89");
        assert_eq!(money(dec!(150)), "$150.00");
        assert_eq!(money(dec!(0)), "$0.00");
    }

    #[test]
    fn money_keeps_sign_outside_the_symbol() {
        assert_eq!(money(dec!(-1234.5)), "-$1,234.50");
    }

    #[test]
    fn percent_uses_two_decimals() {
        assert_eq!(percent(dec!(100)), "100.00%");
        assert_eq!(percent(dec!(33.333)), "33.33%");
        assert_eq!(percent(dec!(0)), "0.00%");
    }
}
