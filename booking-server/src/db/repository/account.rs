//! Account Repository

use super::{BaseRepository, RepoError, RepoResult, make_thing, strip_table_prefix};
use crate::auth::password::hash_password;
use crate::db::models::Account;
use crate::utils::time::now_millis;
use shared::models::{AccountCreate, AccountRole, AccountUpdate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "account";

#[derive(Clone)]
pub struct AccountRepository {
    base: BaseRepository,
}

impl AccountRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn count(&self) -> RepoResult<usize> {
        let accounts: Vec<Account> = self.base.db().select(TABLE).await?;
        Ok(accounts.len())
    }

    /// Create the first admin account at startup
    pub async fn seed_admin(&self, username: &str, password: &str) -> RepoResult<Account> {
        let password_hash = hash_password(password)
            .map_err(|e| RepoError::Database(format!("Password hashing failed: {}", e)))?;
        let account = Account {
            id: None,
            username: username.to_string(),
            email: format!("{}@localhost", username),
            password_hash,
            role: AccountRole::Admin,
            is_active: true,
            created_at: now_millis(),
        };
        let created: Option<Account> = self.base.db().create(TABLE).content(account).await?;
        created.ok_or_else(|| RepoError::Database("Failed to seed admin account".to_string()))
    }

    pub async fn find_all(&self) -> RepoResult<Vec<Account>> {
        let accounts: Vec<Account> = self
            .base
            .db()
            .query("SELECT * FROM account ORDER BY username")
            .await?
            .take(0)?;
        Ok(accounts)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Account>> {
        let pure_id = strip_table_prefix(TABLE, id);
        let account: Option<Account> = self.base.db().select((TABLE, pure_id)).await?;
        Ok(account)
    }

    pub async fn find_by_username(&self, username: &str) -> RepoResult<Option<Account>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM account WHERE username = $username LIMIT 1")
            .bind(("username", username.to_string()))
            .await?;
        let accounts: Vec<Account> = result.take(0)?;
        Ok(accounts.into_iter().next())
    }

    pub async fn create(&self, data: AccountCreate) -> RepoResult<Account> {
        if self.find_by_username(&data.username).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Username '{}' is taken",
                data.username
            )));
        }
        let password_hash = hash_password(&data.password)
            .map_err(|e| RepoError::Database(format!("Password hashing failed: {}", e)))?;
        let account = Account {
            id: None,
            username: data.username,
            email: data.email,
            password_hash,
            role: data.role.unwrap_or(AccountRole::Staff),
            is_active: true,
            created_at: now_millis(),
        };
        let created: Option<Account> = self.base.db().create(TABLE).content(account).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create account".to_string()))
    }

    /// Partial update; a new password is re-hashed before storage
    pub async fn update(&self, id: &str, data: AccountUpdate) -> RepoResult<Account> {
        let thing = make_thing(TABLE, id);

        let mut set_parts: Vec<String> = Vec::new();
        let mut query = String::from("UPDATE $thing SET ");

        if data.email.is_some() {
            set_parts.push("email = $email".to_string());
        }
        if data.password.is_some() {
            set_parts.push("password_hash = $password_hash".to_string());
        }
        if data.role.is_some() {
            set_parts.push("role = $role".to_string());
        }
        if data.is_active.is_some() {
            set_parts.push("is_active = $is_active".to_string());
        }

        if set_parts.is_empty() {
            return self
                .find_by_id(id)
                .await?
                .ok_or_else(|| RepoError::NotFound(format!("Account {} not found", id)));
        }

        query.push_str(&set_parts.join(", "));
        query.push_str(" RETURN AFTER");

        let mut q = self.base.db().query(query).bind(("thing", thing));
        if let Some(email) = data.email {
            q = q.bind(("email", email));
        }
        if let Some(password) = data.password {
            let password_hash = hash_password(&password)
                .map_err(|e| RepoError::Database(format!("Password hashing failed: {}", e)))?;
            q = q.bind(("password_hash", password_hash));
        }
        if let Some(role) = data.role {
            q = q.bind(("role", role));
        }
        if let Some(is_active) = data.is_active {
            q = q.bind(("is_active", is_active));
        }

        let accounts: Vec<Account> = q.await?.take(0)?;
        accounts
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Account {} not found", id)))
    }

    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        let pure_id = strip_table_prefix(TABLE, id);
        let result: Option<Account> = self.base.db().delete((TABLE, pure_id)).await?;
        if result.is_none() {
            return Err(RepoError::NotFound(format!("Account {} not found", id)));
        }
        Ok(())
    }
}
