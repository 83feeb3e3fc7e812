//! Availability Repository

use super::{BaseRepository, RepoError, RepoResult, strip_table_prefix};
use crate::db::models::AvailabilitySlot;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "availability_slot";

#[derive(Clone)]
pub struct AvailabilityRepository {
    base: BaseRepository,
}

impl AvailabilityRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Every published slot, booking-form order
    pub async fn find_all(&self) -> RepoResult<Vec<AvailabilitySlot>> {
        let slots: Vec<AvailabilitySlot> = self
            .base
            .db()
            .query("SELECT * FROM availability_slot ORDER BY date, hour")
            .await?
            .take(0)?;
        Ok(slots)
    }

    /// Published slots for one calendar day
    pub async fn find_by_date(&self, date: &str) -> RepoResult<Vec<AvailabilitySlot>> {
        let slots: Vec<AvailabilitySlot> = self
            .base
            .db()
            .query("SELECT * FROM availability_slot WHERE date = $date ORDER BY hour")
            .bind(("date", date.to_string()))
            .await?
            .take(0)?;
        Ok(slots)
    }

    /// Whether a (date, hour) pair is published
    pub async fn exists(&self, date: &str, hour: &str) -> RepoResult<bool> {
        let slots: Vec<AvailabilitySlot> = self
            .base
            .db()
            .query("SELECT * FROM availability_slot WHERE date = $date AND hour = $hour LIMIT 1")
            .bind(("date", date.to_string()))
            .bind(("hour", hour.to_string()))
            .await?
            .take(0)?;
        Ok(!slots.is_empty())
    }

    /// Publish one slot; duplicates are rejected
    pub async fn create(&self, date: &str, hour: &str) -> RepoResult<AvailabilitySlot> {
        if self.exists(date, hour).await? {
            return Err(RepoError::Duplicate(format!(
                "Slot {} {} already published",
                date, hour
            )));
        }

        let created: Option<AvailabilitySlot> = self
            .base
            .db()
            .create(TABLE)
            .content(AvailabilitySlot::new(date, hour))
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to create slot".to_string()))
    }

    /// Replace the published hours for a day in one go.
    /// An empty `hours` list unpublishes the day.
    pub async fn replace_day(&self, date: &str, hours: &[String]) -> RepoResult<Vec<AvailabilitySlot>> {
        self.base
            .db()
            .query("DELETE availability_slot WHERE date = $date")
            .bind(("date", date.to_string()))
            .await?;

        let mut created = Vec::with_capacity(hours.len());
        for hour in hours {
            let slot: Option<AvailabilitySlot> = self
                .base
                .db()
                .create(TABLE)
                .content(AvailabilitySlot::new(date, hour.clone()))
                .await?;
            created.push(
                slot.ok_or_else(|| RepoError::Database("Failed to create slot".to_string()))?,
            );
        }
        Ok(created)
    }

    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        let pure_id = strip_table_prefix(TABLE, id);
        let result: Option<AvailabilitySlot> = self.base.db().delete((TABLE, pure_id)).await?;
        if result.is_none() {
            return Err(RepoError::NotFound(format!("Slot {} not found", id)));
        }
        Ok(())
    }
}
