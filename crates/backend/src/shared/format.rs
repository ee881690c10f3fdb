use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Округляет денежную сумму до копеек, половину от нуля.
///
/// Rounding is applied to the shortest decimal representation of the `f64`
/// (the one `Display` prints), so `10.005` is treated as written and becomes
/// `10.01` rather than falling victim to its binary expansion.
///
/// # Примеры
/// ```ignore
/// assert_eq!(round_money(33.3333), 33.33);
/// assert_eq!(round_money(10.005), 10.01);
/// ```
pub fn round_money(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }

    match Decimal::from_str(&value.to_string()) {
        Ok(decimal) => decimal
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
            .to_f64()
            .unwrap_or(value),
        // Out of Decimal range: plain float rounding is the best we can do
        Err(_) => (value * 100.0).round() / 100.0,
    }
}
