//! Data models
//!
//! Shared between booking-server and frontend (via API).
//! Entities live server-side; these are the payloads that cross the wire.

pub mod account;
pub mod availability;
pub mod category;
pub mod product;
pub mod reservation;
pub mod settings;
pub mod zone;

// Re-exports
pub use account::*;
pub use availability::*;
pub use category::*;
pub use product::*;
pub use reservation::*;
pub use settings::*;
pub use zone::*;
