use alloy::primitives::{U256, utils::format_units};
use chrono::DateTime;

pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Renders Unix seconds as a UTC calendar string.
pub fn format_timestamp(seconds: i64) -> Option<String> {
    DateTime::from_timestamp(seconds, 0).map(|date| date.format(DATE_FORMAT).to_string())
}

/// Scales a decimal amount in base units by `decimals`, e.g. `1500000` with 6 gives `1.500000`.
pub fn base_units_to_tokens(value: &str, decimals: u8) -> Option<String> {
    let amount = U256::from_str_radix(value, 10).ok()?;
    format_units(amount, decimals).ok()
}
