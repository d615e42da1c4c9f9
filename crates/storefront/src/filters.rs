//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Formats a decimal amount as a dollar price string.
///
/// Usage in templates: `{{ product.price|money }}`
#[askama::filter_fn]
pub fn money(amount: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(format_money(&amount.to_string()))
}

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

fn format_money(raw: &str) -> String {
    raw.parse::<rust_decimal::Decimal>().map_or_else(
        |_| format!("${raw}"),
        |value| format!("${}", value.round_dp(2)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money_two_decimal_places() {
        assert_eq!(format_money("699.99"), "$699.99");
        assert_eq!(format_money("1399.980"), "$1399.98");
    }

    #[test]
    fn test_format_money_passes_through_unparseable_input() {
        assert_eq!(format_money("free"), "$free");
    }
}
