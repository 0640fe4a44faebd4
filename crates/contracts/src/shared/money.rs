//! Currency formatting for cart prices and totals

use rust_decimal::{Decimal, RoundingStrategy};

/// Default currency symbol used by the storefront
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// Rounds an amount to cents, half away from zero.
pub fn round_to_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats an amount with exactly two decimal places.
///
/// ```
/// use contracts::shared::money::format_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_amount(Decimal::new(575, 2)), "5.75");
/// assert_eq!(format_amount(Decimal::new(4, 0)), "4.00");
/// ```
pub fn format_amount(amount: Decimal) -> String {
    let mut rounded = round_to_cents(amount);
    rounded.rescale(2);
    rounded.to_string()
}

/// Formats an amount with the currency symbol prefix, e.g. `$7.50`
pub fn format_price(currency_symbol: &str, amount: Decimal) -> String {
    format!("{}{}", currency_symbol, format_amount(amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount_pads_to_two_places() {
        assert_eq!(format_amount(Decimal::ZERO), "0.00");
        assert_eq!(format_amount(Decimal::new(35, 1)), "3.50");
        assert_eq!(format_amount(Decimal::new(12, 0)), "12.00");
    }

    #[test]
    fn test_format_amount_rounds_half_away_from_zero() {
        assert_eq!(format_amount(Decimal::new(1005, 3)), "1.01");
        assert_eq!(format_amount(Decimal::new(1004, 3)), "1.00");
        assert_eq!(format_amount(Decimal::new(29999, 4)), "3.00");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price("$", Decimal::new(750, 2)), "$7.50");
        assert_eq!(format_price("€", Decimal::new(1, 0)), "€1.00");
    }
}
