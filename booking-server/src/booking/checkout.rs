//! Checkout assembly
//!
//! Turns a submitted cart into reservation line items with prices
//! frozen at booking time, so later catalog edits never change what a
//! customer was quoted.

use thiserror::Error;

use crate::db::models::Product;
use crate::pricing::{self, LineItem, PricingError};
use shared::models::{CartItemRequest, ReservationItem};

#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("Cart is empty")]
    EmptyCart,

    #[error("Unknown product: {0}")]
    UnknownProduct(String),

    #[error("Product is not available: {0}")]
    InactiveProduct(String),

    #[error(transparent)]
    Pricing(#[from] PricingError),
}

/// Resolve cart lines against the catalog and freeze a snapshot per line
///
/// `products` must already contain every product the cart references;
/// the caller loads them by id. Items keep the product name, unit price
/// and surcharge percentage as they were at booking time.
pub fn build_reservation_items(
    cart: &[CartItemRequest],
    products: &[Product],
) -> Result<Vec<ReservationItem>, CheckoutError> {
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    let mut items = Vec::with_capacity(cart.len());
    for line in cart {
        let product = products
            .iter()
            .find(|p| {
                p.id.as_ref()
                    .is_some_and(|t| t.to_string() == line.product || t.id.to_raw() == line.product)
            })
            .ok_or_else(|| CheckoutError::UnknownProduct(line.product.clone()))?;

        if !product.is_active {
            return Err(CheckoutError::InactiveProduct(product.name.clone()));
        }

        let item_total = pricing::item_total(&LineItem {
            base_price: product.base_price,
            extra_hour_percentage: product.extra_hour_percentage,
            quantity: line.quantity,
            extra_hours: line.extra_hours,
        })?;

        items.push(ReservationItem {
            product_id: product
                .id
                .as_ref()
                .map(|t| t.to_string())
                .unwrap_or_default(),
            product_name: product.name.clone(),
            unit_price: product.base_price,
            extra_hour_percentage: product.extra_hour_percentage,
            quantity: line.quantity,
            extra_hours: line.extra_hours,
            item_total,
        });
    }

    Ok(items)
}

/// Subtotal of already-frozen reservation items
pub fn items_subtotal(items: &[ReservationItem]) -> Result<f64, PricingError> {
    let lines: Vec<LineItem> = items
        .iter()
        .map(|i| LineItem {
            base_price: i.unit_price,
            extra_hour_percentage: i.extra_hour_percentage,
            quantity: i.quantity,
            extra_hours: i.extra_hours,
        })
        .collect();
    pricing::cart_subtotal(&lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use surrealdb::sql::Thing;

    fn product(id: &str, name: &str, base_price: f64, pct: f64, active: bool) -> Product {
        Product {
            id: Some(Thing::from(("product", id))),
            name: name.to_string(),
            description: None,
            category: Thing::from(("category", "c1")),
            base_price,
            extra_hour_percentage: pct,
            images: Vec::new(),
            sort_order: 0,
            is_active: active,
        }
    }

    fn cart_line(product: &str, quantity: u32, extra_hours: u32) -> CartItemRequest {
        CartItemRequest {
            product: product.to_string(),
            quantity,
            extra_hours,
        }
    }

    #[test]
    fn freezes_catalog_values_per_line() {
        let products = vec![product("castle", "Bouncy Castle", 150.0, 15.0, true)];
        let items =
            build_reservation_items(&[cart_line("product:castle", 2, 1)], &products).unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].product_name, "Bouncy Castle");
        assert_eq!(items[0].unit_price, 150.0);
        assert_eq!(items[0].item_total, 345.0);
    }

    #[test]
    fn accepts_bare_record_ids() {
        let products = vec![product("castle", "Bouncy Castle", 150.0, 15.0, true)];
        let items = build_reservation_items(&[cart_line("castle", 1, 0)], &products).unwrap();
        assert_eq!(items[0].item_total, 150.0);
    }

    #[test]
    fn rejects_unknown_product() {
        let products = vec![product("castle", "Bouncy Castle", 150.0, 15.0, true)];
        let err = build_reservation_items(&[cart_line("product:slide", 1, 0)], &products)
            .unwrap_err();
        assert!(matches!(err, CheckoutError::UnknownProduct(_)));
    }

    #[test]
    fn rejects_inactive_product() {
        let products = vec![product("castle", "Bouncy Castle", 150.0, 15.0, false)];
        let err =
            build_reservation_items(&[cart_line("product:castle", 1, 0)], &products).unwrap_err();
        assert!(matches!(err, CheckoutError::InactiveProduct(_)));
    }

    #[test]
    fn rejects_empty_cart() {
        let err = build_reservation_items(&[], &[]).unwrap_err();
        assert!(matches!(err, CheckoutError::EmptyCart));
    }

    #[test]
    fn subtotal_matches_sum_of_items() {
        let products = vec![
            product("castle", "Bouncy Castle", 150.0, 15.0, true),
            product("slide", "Water Slide", 90.0, 10.0, true),
        ];
        let items = build_reservation_items(
            &[cart_line("product:castle", 2, 1), cart_line("product:slide", 1, 0)],
            &products,
        )
        .unwrap();
        let subtotal = items_subtotal(&items).unwrap();
        let expected: f64 = items.iter().map(|i| i.item_total).sum();
        assert_eq!(subtotal, expected);
    }
}
