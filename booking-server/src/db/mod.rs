//! Database layer
//!
//! Embedded SurrealDB (RocksDB engine). Repositories own the queries;
//! handlers never touch SurrealQL directly.

pub mod models;
pub mod repository;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

const NAMESPACE: &str = "fiesta";
const DATABASE: &str = "main";

/// Database service owning the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the database at `path`
    pub async fn new(path: &str) -> Result<Self, surrealdb::Error> {
        let db = Surreal::new::<RocksDb>(path).await?;
        db.use_ns(NAMESPACE).use_db(DATABASE).await?;
        tracing::info!(path = %path, "Database ready");
        Ok(Self { db })
    }
}
