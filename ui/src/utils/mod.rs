use rust_decimal::Decimal;

pub mod time;

/// Returns true if the application is running in development mode.
/// Checks if BACKEND_URL contains "localhost".
pub fn is_dev_mode() -> bool {
    option_env!("BACKEND_URL")
        .map(|url| url.contains("localhost"))
        .unwrap_or(false)
}

/// Money with two decimals, e.g. `12.50`.
pub fn format_money(amount: Decimal) -> String {
    format!("{:.2}", amount.round_dp(2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::dec;

    #[test]
    fn money_has_two_decimals() {
        assert_eq!(format_money(dec!(12.5)), "12.50");
        assert_eq!(format_money(dec!(3)), "3.00");
        assert_eq!(format_money(dec!(0.125)), "0.12");
    }
}
