//! Repository Module
//!
//! CRUD operations against the embedded SurrealDB tables.

// Catalog
pub mod category;
pub mod product;

// Booking
pub mod availability;
pub mod reservation;
pub mod zone;

// Back office
pub mod account;
pub mod store_settings;

// Re-exports
pub use account::AccountRepository;
pub use availability::AvailabilityRepository;
pub use category::CategoryRepository;
pub use product::ProductRepository;
pub use reservation::ReservationRepository;
pub use store_settings::StoreSettingsRepository;
pub use zone::ZoneRepository;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use surrealdb::sql::Thing;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Build a record pointer from a table name and an id that may or may
/// not already carry the `table:` prefix.
pub fn make_thing(table: &str, id: &str) -> Thing {
    let pure_id = strip_table_prefix(table, id);
    Thing::from((table.to_string(), pure_id.to_string()))
}

/// Strip a `table:` prefix so ids are accepted in both forms
pub fn strip_table_prefix<'a>(table: &str, id: &'a str) -> &'a str {
    match id.split_once(':') {
        Some((tb, rest)) if tb == table => rest,
        _ => id,
    }
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn make_thing_accepts_both_id_forms() {
        let a = make_thing("product", "abc");
        let b = make_thing("product", "product:abc");
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "product:abc");
    }
}
