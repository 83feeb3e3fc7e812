//! Booking domain logic
//!
//! Availability matching against published slots and checkout assembly
//! of priced reservations.

pub mod availability;
pub mod checkout;

pub use availability::{available_date_keys, filter_available_hours, local_date_key};
pub use checkout::{CheckoutError, build_reservation_items, items_subtotal};
