//! pt-BR display formatting for the dashboard surfaces.

use crate::domain::workshop::{Money, Timestamp};
use crate::time_utils::civil_from_millis;

/// Format a monetary amount as Brazilian currency: `R$ 1.234,56`.
/// Negative balances render with a leading minus: `-R$ 500,00`.
pub fn format_currency_brl(amount: Money) -> String {
    let cents = (amount.value().abs() * 100.0).round() as u64;
    let (whole, frac) = (cents / 100, cents % 100);

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    let sign = if amount.is_negative() && cents > 0 { "-" } else { "" };
    format!("{}R$ {},{:02}", sign, grouped, frac)
}

/// Format a timestamp as `DD/MM/YYYY`; absent dates render as `N/A`.
pub fn format_date_br(date: Option<Timestamp>) -> String {
    match date {
        Some(ts) => {
            let (year, month, day) = civil_from_millis(ts.value());
            format!("{:02}/{:02}/{:04}", day, month, year)
        }
        None => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_grouping_and_decimals() {
        assert_eq!(format_currency_brl(Money::from(0.0)), "R$ 0,00");
        assert_eq!(format_currency_brl(Money::from(500.0)), "R$ 500,00");
        assert_eq!(format_currency_brl(Money::from(1234.56)), "R$ 1.234,56");
        assert_eq!(format_currency_brl(Money::from(1_234_567.89)), "R$ 1.234.567,89");
    }

    #[test]
    fn negative_balance_keeps_minus_outside() {
        assert_eq!(format_currency_brl(Money::from(-350.5)), "-R$ 350,50");
        // -0.001 rounds to zero cents, no stray minus
        assert_eq!(format_currency_brl(Money::from(-0.001)), "R$ 0,00");
    }

    #[test]
    fn date_renders_dd_mm_yyyy_or_na() {
        let ts = Timestamp::parse_rfc3339("2024-01-10T15:00:00Z");
        assert_eq!(format_date_br(ts), "10/01/2024");
        assert_eq!(format_date_br(None), "N/A");
    }
}
