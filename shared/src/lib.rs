//! Shared types for the booking platform
//!
//! Wire types exchanged between the booking server and its clients:
//! create/update payloads, the checkout request, frozen reservation
//! line items and the reservation status machine. Nothing in here
//! touches the database layer.

pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};
