//! Rental price calculator
//!
//! An item rents at its base price for the standard rental window. Each
//! extra hour adds `extra_hour_percentage` percent of the base price:
//!
//! `item_total = quantity * base_price * (1 + pct / 100 * extra_hours)`
//!
//! The reservation total is the cart subtotal plus the delivery zone's
//! transport cost. Every returned amount is rounded to 2 decimal places,
//! half-up.

use rust_decimal::prelude::*;
use thiserror::Error;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Maximum allowed base price per item (€1,000,000)
const MAX_PRICE: f64 = 1_000_000.0;
/// Maximum allowed quantity per line
const MAX_QUANTITY: u32 = 9999;
/// Maximum allowed extra hours per line
const MAX_EXTRA_HOURS: u32 = 168;

#[derive(Debug, Error, PartialEq)]
pub enum PricingError {
    #[error("Invalid pricing input: {0}")]
    InvalidInput(String),
}

/// One cart line, priced from the product snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub base_price: f64,
    /// Percent of base price charged per extra hour, e.g. 15.0
    pub extra_hour_percentage: f64,
    pub quantity: u32,
    pub extra_hours: u32,
}

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Validate that a f64 value is finite (not NaN, not Infinity)
#[inline]
fn require_finite(value: f64, field_name: &str) -> Result<(), PricingError> {
    if !value.is_finite() {
        return Err(PricingError::InvalidInput(format!(
            "{} must be a finite number, got {}",
            field_name, value
        )));
    }
    Ok(())
}

fn validate_line(item: &LineItem) -> Result<(), PricingError> {
    require_finite(item.base_price, "base_price")?;
    if item.base_price < 0.0 {
        return Err(PricingError::InvalidInput(format!(
            "base_price must be non-negative, got {}",
            item.base_price
        )));
    }
    if item.base_price > MAX_PRICE {
        return Err(PricingError::InvalidInput(format!(
            "base_price exceeds maximum allowed ({}), got {}",
            MAX_PRICE, item.base_price
        )));
    }

    require_finite(item.extra_hour_percentage, "extra_hour_percentage")?;
    if item.extra_hour_percentage < 0.0 {
        return Err(PricingError::InvalidInput(format!(
            "extra_hour_percentage must be non-negative, got {}",
            item.extra_hour_percentage
        )));
    }

    if item.quantity == 0 {
        return Err(PricingError::InvalidInput(
            "quantity must be at least 1".to_string(),
        ));
    }
    if item.quantity > MAX_QUANTITY {
        return Err(PricingError::InvalidInput(format!(
            "quantity exceeds maximum allowed ({}), got {}",
            MAX_QUANTITY, item.quantity
        )));
    }
    if item.extra_hours > MAX_EXTRA_HOURS {
        return Err(PricingError::InvalidInput(format!(
            "extra_hours exceeds maximum allowed ({}), got {}",
            MAX_EXTRA_HOURS, item.extra_hours
        )));
    }

    Ok(())
}

/// Total for a single cart line, rounded to 2 decimal places
pub fn item_total(item: &LineItem) -> Result<f64, PricingError> {
    validate_line(item)?;

    let base = to_decimal(item.base_price);
    let pct = to_decimal(item.extra_hour_percentage) / Decimal::ONE_HUNDRED;
    let multiplier = Decimal::ONE + pct * Decimal::from(item.extra_hours);
    let total = Decimal::from(item.quantity) * base * multiplier;

    Ok(to_f64(total))
}

/// Sum of all line totals
///
/// Lines are rounded individually first so the subtotal always equals
/// the sum of the item totals the customer sees.
pub fn cart_subtotal(items: &[LineItem]) -> Result<f64, PricingError> {
    let mut subtotal = Decimal::ZERO;
    for item in items {
        subtotal += to_decimal(item_total(item)?);
    }
    Ok(to_f64(subtotal))
}

/// Final amount: cart subtotal plus the delivery zone transport cost
pub fn reservation_total(subtotal: f64, transport_cost: f64) -> Result<f64, PricingError> {
    require_finite(subtotal, "subtotal")?;
    require_finite(transport_cost, "transport_cost")?;
    if subtotal < 0.0 {
        return Err(PricingError::InvalidInput(format!(
            "subtotal must be non-negative, got {}",
            subtotal
        )));
    }
    if transport_cost < 0.0 {
        return Err(PricingError::InvalidInput(format!(
            "transport_cost must be non-negative, got {}",
            transport_cost
        )));
    }
    Ok(to_f64(to_decimal(subtotal) + to_decimal(transport_cost)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(base_price: f64, pct: f64, quantity: u32, extra_hours: u32) -> LineItem {
        LineItem {
            base_price,
            extra_hour_percentage: pct,
            quantity,
            extra_hours,
        }
    }

    #[test]
    fn base_rental_without_extra_hours() {
        let total = item_total(&line(150.0, 15.0, 2, 0)).unwrap();
        assert_eq!(total, 300.0);
    }

    #[test]
    fn extra_hours_add_percentage_of_base() {
        // 2 * 10000 * (1 + 0.15 * 1) = 23000
        let total = item_total(&line(10_000.0, 15.0, 2, 1)).unwrap();
        assert_eq!(total, 23_000.0);
    }

    #[test]
    fn item_total_rounds_half_up() {
        // 1 * 33.33 * (1 + 0.125 * 1) = 37.49625 -> 37.50
        let total = item_total(&line(33.33, 12.5, 1, 1)).unwrap();
        assert_eq!(total, 37.50);
    }

    #[test]
    fn empty_cart_has_zero_subtotal() {
        assert_eq!(cart_subtotal(&[]).unwrap(), 0.0);
    }

    #[test]
    fn subtotal_is_sum_of_rounded_lines() {
        let items = vec![line(33.33, 12.5, 1, 1), line(150.0, 15.0, 2, 0)];
        let subtotal = cart_subtotal(&items).unwrap();
        assert_eq!(subtotal, 37.50 + 300.0);
    }

    #[test]
    fn total_adds_transport_cost() {
        assert_eq!(reservation_total(300.0, 25.5).unwrap(), 325.5);
        assert_eq!(reservation_total(300.0, 0.0).unwrap(), 300.0);
    }

    #[test]
    fn zero_quantity_is_rejected() {
        let err = item_total(&line(100.0, 15.0, 0, 0)).unwrap_err();
        assert!(matches!(err, PricingError::InvalidInput(_)));
    }

    #[test]
    fn negative_inputs_are_rejected() {
        assert!(item_total(&line(-1.0, 15.0, 1, 0)).is_err());
        assert!(item_total(&line(100.0, -5.0, 1, 0)).is_err());
        assert!(reservation_total(-1.0, 0.0).is_err());
        assert!(reservation_total(100.0, -0.01).is_err());
    }

    #[test]
    fn non_finite_inputs_are_rejected() {
        assert!(item_total(&line(f64::NAN, 15.0, 1, 0)).is_err());
        assert!(item_total(&line(100.0, f64::INFINITY, 1, 0)).is_err());
    }

    #[test]
    fn recomputation_is_idempotent() {
        let items = vec![line(79.99, 10.0, 3, 2), line(42.0, 0.0, 1, 5)];
        let first = cart_subtotal(&items).unwrap();
        let second = cart_subtotal(&items).unwrap();
        assert_eq!(first, second);
    }
}
