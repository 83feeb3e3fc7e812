//! Zone Repository

use super::{BaseRepository, RepoError, RepoResult, make_thing, strip_table_prefix};
use crate::db::models::Zone;
use shared::models::{ZoneCreate, ZoneUpdate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "zone";

#[derive(Clone)]
pub struct ZoneRepository {
    base: BaseRepository,
}

impl ZoneRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Active zones offered to the storefront address step
    pub async fn find_active(&self) -> RepoResult<Vec<Zone>> {
        let zones: Vec<Zone> = self
            .base
            .db()
            .query("SELECT * FROM zone WHERE is_active = true ORDER BY name")
            .await?
            .take(0)?;
        Ok(zones)
    }

    pub async fn find_all(&self) -> RepoResult<Vec<Zone>> {
        let zones: Vec<Zone> = self
            .base
            .db()
            .query("SELECT * FROM zone ORDER BY name")
            .await?
            .take(0)?;
        Ok(zones)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Zone>> {
        let pure_id = strip_table_prefix(TABLE, id);
        let zone: Option<Zone> = self.base.db().select((TABLE, pure_id)).await?;
        Ok(zone)
    }

    pub async fn create(&self, data: ZoneCreate) -> RepoResult<Zone> {
        if data.transport_cost < 0.0 {
            return Err(RepoError::Validation(
                "transport_cost must not be negative".into(),
            ));
        }
        if data.polygon.len() < 3 {
            return Err(RepoError::Validation(
                "polygon needs at least 3 vertices".into(),
            ));
        }

        let zone = Zone {
            id: None,
            name: data.name,
            polygon: data.polygon,
            transport_cost: data.transport_cost,
            is_active: true,
        };

        let created: Option<Zone> = self.base.db().create(TABLE).content(zone).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create zone".to_string()))
    }

    pub async fn update(&self, id: &str, data: ZoneUpdate) -> RepoResult<Zone> {
        if data.transport_cost.is_some_and(|c| c < 0.0) {
            return Err(RepoError::Validation(
                "transport_cost must not be negative".into(),
            ));
        }
        if data.polygon.as_ref().is_some_and(|p| p.len() < 3) {
            return Err(RepoError::Validation(
                "polygon needs at least 3 vertices".into(),
            ));
        }

        let thing = make_thing(TABLE, id);
        let mut result = self
            .base
            .db()
            .query("UPDATE $thing MERGE $data RETURN AFTER")
            .bind(("thing", thing))
            .bind(("data", data))
            .await?;
        let zones: Vec<Zone> = result.take(0)?;
        zones
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Zone {} not found", id)))
    }

    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        let pure_id = strip_table_prefix(TABLE, id);
        let result: Option<Zone> = self.base.db().delete((TABLE, pure_id)).await?;
        if result.is_none() {
            return Err(RepoError::NotFound(format!("Zone {} not found", id)));
        }
        Ok(())
    }
}
