//! Back-office account payloads

use serde::{Deserialize, Serialize};

/// Account role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountRole {
    Admin,
    Staff,
}

impl AccountRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Staff => "staff",
        }
    }
}

/// Create account payload (password is hashed server-side)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountCreate {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Option<AccountRole>,
}

/// Update account payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountUpdate {
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<AccountRole>,
    pub is_active: Option<bool>,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}
