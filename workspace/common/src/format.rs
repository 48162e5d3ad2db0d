//! Display formatting for currency amounts.
//!
//! The revenue and sales dashboards deliberately format differently, so the
//! two compact formatters are kept separate.

use rust_decimal::{Decimal, RoundingStrategy};
use rusty_money::iso;

/// Symbol of the dashboards' reporting currency (Thai baht).
pub fn currency_symbol() -> &'static str {
    iso::THB.symbol
}

/// Compact revenue format: `฿1.7M`, `฿450k`, `฿999`.
///
/// Millions keep one decimal, thousands are rounded to a whole number and
/// anything below a thousand is printed as-is. Midpoints round away from zero.
pub fn format_compact(amount: Decimal) -> String {
    let symbol = currency_symbol();
    let million = Decimal::from(1_000_000);
    let thousand = Decimal::from(1_000);

    if amount >= million {
        let mut millions =
            (amount / million).round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
        millions.rescale(1);
        format!("{}{}M", symbol, millions)
    } else if amount >= thousand {
        let thousands =
            (amount / thousand).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        format!("{}{}k", symbol, thousands.normalize())
    } else {
        format!("{}{}", symbol, amount.normalize())
    }
}

/// Sales axis format: whole thousands with a `k` suffix and no symbol.
///
/// There is no magnitude branch, and the fractional thousands are dropped,
/// so `999` renders as `0k`.
pub fn format_thousands(amount: Decimal) -> String {
    let thousands = (amount / Decimal::from(1_000)).trunc();
    format!("{}k", thousands.normalize())
}

/// Full amount with thousands separators: `฿1,250,000`.
pub fn format_full(amount: Decimal) -> String {
    let whole = amount
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .abs()
        .trunc()
        .normalize()
        .to_string();

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if amount.is_sign_negative() && !amount.is_zero() { "-" } else { "" };
    format!("{}{}{}", sign, currency_symbol(), grouped)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(value: i64) -> Decimal {
        Decimal::from(value)
    }

    #[test]
    fn test_currency_symbol_is_baht() {
        assert_eq!(currency_symbol(), "฿");
    }

    #[test]
    fn test_format_compact_below_thousand() {
        assert_eq!(format_compact(d(999)), "฿999");
        assert_eq!(format_compact(d(0)), "฿0");
        assert_eq!(format_compact(Decimal::new(99950, 2)), "฿999.5");
    }

    #[test]
    fn test_format_compact_thousands() {
        assert_eq!(format_compact(d(1_000)), "฿1k");
        assert_eq!(format_compact(d(240_000)), "฿240k");
        assert_eq!(format_compact(d(1_500)), "฿2k");
        assert_eq!(format_compact(d(999_499)), "฿999k");
    }

    #[test]
    fn test_format_compact_millions() {
        assert_eq!(format_compact(d(1_000_000)), "฿1.0M");
        assert_eq!(format_compact(d(1_650_000)), "฿1.7M");
        assert_eq!(format_compact(d(1_516_000)), "฿1.5M");
        assert_eq!(format_compact(d(13_450_000)), "฿13.5M");
    }

    #[test]
    fn test_format_compact_is_stable() {
        let amount = d(1_806_000);
        assert_eq!(format_compact(amount), format_compact(amount));
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(d(450_000)), "450k");
        assert_eq!(format_thousands(d(999)), "0k");
        assert_eq!(format_thousands(d(1_416_000)), "1416k");
        assert_eq!(format_thousands(d(0)), "0k");
    }

    #[test]
    fn test_formatters_differ_for_same_amount() {
        assert_eq!(format_compact(d(450_000)), "฿450k");
        assert_eq!(format_thousands(d(450_000)), "450k");
        assert_ne!(format_compact(d(1_200_000)), format_thousands(d(1_200_000)));
    }

    #[test]
    fn test_format_full_groups_thousands() {
        assert_eq!(format_full(d(1_250_000)), "฿1,250,000");
        assert_eq!(format_full(d(240_000)), "฿240,000");
        assert_eq!(format_full(d(999)), "฿999");
        assert_eq!(format_full(d(0)), "฿0");
        assert_eq!(format_full(Decimal::new(100050, 2)), "฿1,001");
    }
}
