//! Back-office account row

use super::serde_thing;
use serde::{Deserialize, Serialize};
use shared::models::AccountRole;
use surrealdb::sql::Thing;

/// Back-office account entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    #[serde(default, with = "serde_thing::option")]
    pub id: Option<Thing>,
    pub username: String,
    pub email: String,
    /// Argon2 PHC string, never serialized to API responses (see AccountView)
    pub password_hash: String,
    pub role: AccountRole,
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Unix millis
    pub created_at: i64,
}

fn default_true() -> bool {
    true
}

/// API-safe projection of an account (no password hash)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountView {
    pub id: Option<String>,
    pub username: String,
    pub email: String,
    pub role: AccountRole,
    pub is_active: bool,
}

impl From<Account> for AccountView {
    fn from(a: Account) -> Self {
        Self {
            id: a.id.as_ref().map(|t| t.to_string()),
            username: a.username,
            email: a.email,
            role: a.role,
            is_active: a.is_active,
        }
    }
}
