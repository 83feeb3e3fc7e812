//! Price calculation for rental carts
//!
//! All arithmetic is done with `Decimal` internally, then converted to
//! `f64` for storage and serialization.

pub mod calculator;

pub use calculator::{
    LineItem, PricingError, cart_subtotal, item_total, reservation_total, to_decimal, to_f64,
};
