//! Store Settings Repository (singleton row)

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::StoreSettings;
use shared::models::StoreSettingsUpdate;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "store_settings";
const SINGLETON_ID: &str = "main";

#[derive(Clone)]
pub struct StoreSettingsRepository {
    base: BaseRepository,
}

impl StoreSettingsRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Fetch the settings row, creating it with defaults on first run
    pub async fn get_or_create(&self) -> RepoResult<StoreSettings> {
        if let Some(settings) = self.get().await? {
            return Ok(settings);
        }
        let created: Option<StoreSettings> = self
            .base
            .db()
            .create((TABLE, SINGLETON_ID))
            .content(StoreSettings::default())
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to create store settings".to_string()))
    }

    pub async fn get(&self) -> RepoResult<Option<StoreSettings>> {
        let settings: Option<StoreSettings> =
            self.base.db().select((TABLE, SINGLETON_ID)).await?;
        Ok(settings)
    }

    /// Merge a partial update into the singleton row
    pub async fn update(&self, data: StoreSettingsUpdate) -> RepoResult<StoreSettings> {
        // Ensure the row exists so merge never targets nothing
        self.get_or_create().await?;
        let updated: Option<StoreSettings> = self
            .base
            .db()
            .update((TABLE, SINGLETON_ID))
            .merge(data)
            .await?;
        updated.ok_or_else(|| RepoError::Database("Failed to update store settings".to_string()))
    }
}
