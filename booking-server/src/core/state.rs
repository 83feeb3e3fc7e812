use std::path::PathBuf;
use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::auth::JwtService;
use crate::core::Config;
use crate::db::DbService;
use crate::db::repository::{AccountRepository, StoreSettingsRepository};
use crate::mailer::Mailer;

/// Shared server state, one per process
///
/// Holds the configuration, the embedded database handle and the
/// long-lived services. `Clone` is shallow (Surreal handles and Arcs).
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    /// Embedded database (SurrealDB)
    pub db: Surreal<Db>,
    /// JWT service for the admin back-office
    pub jwt_service: Arc<JwtService>,
    /// Transactional e-mail client
    pub mailer: Arc<Mailer>,
}

impl ServerState {
    /// Initialize state: work dir layout, database, services, seed rows
    pub async fn initialize(config: &Config) -> anyhow::Result<Self> {
        config.ensure_work_dir_structure()?;

        let db_path = config.database_dir().join("fiesta.db");
        let db_service = DbService::new(&db_path.to_string_lossy()).await?;

        let state = Self {
            config: config.clone(),
            db: db_service.db,
            jwt_service: Arc::new(JwtService::with_config(config.jwt.clone())),
            mailer: Arc::new(Mailer::new(config.mail.clone())),
        };

        state.seed_defaults().await?;

        Ok(state)
    }

    /// Ensure the singleton settings row and a first admin account exist
    async fn seed_defaults(&self) -> anyhow::Result<()> {
        let settings_repo = StoreSettingsRepository::new(self.db.clone());
        settings_repo.get_or_create().await?;

        let account_repo = AccountRepository::new(self.db.clone());
        if account_repo.count().await? == 0 {
            account_repo
                .seed_admin(&self.config.admin_username, &self.config.admin_password)
                .await?;
            if self.config.admin_password == "admin" {
                tracing::warn!(
                    username = %self.config.admin_username,
                    "Seeded back-office admin with the default password, change it"
                );
            } else {
                tracing::info!(username = %self.config.admin_username, "Seeded back-office admin");
            }
        }

        Ok(())
    }

    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }

    pub fn work_dir(&self) -> PathBuf {
        PathBuf::from(&self.config.work_dir)
    }

    pub fn uploads_dir(&self) -> PathBuf {
        self.config.uploads_dir()
    }

    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }

    pub fn mailer(&self) -> Arc<Mailer> {
        self.mailer.clone()
    }
}
