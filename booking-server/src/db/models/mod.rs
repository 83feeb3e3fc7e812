//! Database row types
//!
//! Each entity carries an `Option<Thing>` id serialized as a
//! `"table:id"` string (see [`serde_thing`]). Create/update payloads
//! live in the `shared` crate; these are the authoritative rows.

pub mod serde_thing;

pub mod account;
pub mod availability;
pub mod category;
pub mod product;
pub mod reservation;
pub mod store_settings;
pub mod zone;

// Re-exports
pub use account::*;
pub use availability::*;
pub use category::*;
pub use product::*;
pub use reservation::*;
pub use store_settings::*;
pub use zone::*;
