//! Authentication handlers

use axum::{
    Json,
    extract::{Extension, State},
};
use serde::Serialize;

use crate::auth::{CurrentUser, password};
use crate::core::ServerState;
use crate::db::models::AccountView;
use crate::db::repository::AccountRepository;
use crate::utils::{AppError, AppResult};
use shared::models::LoginRequest;

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub account: AccountView,
}

/// POST /api/auth/login - exchange credentials for a JWT
pub async fn login(
    State(state): State<ServerState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let repo = AccountRepository::new(state.db.clone());
    let account = repo
        .find_by_username(&payload.username)
        .await?
        .ok_or_else(AppError::invalid_credentials)?;

    if !account.is_active {
        tracing::warn!(target: "security", username = %payload.username, "Login on disabled account");
        return Err(AppError::invalid_credentials());
    }

    let valid = password::verify_password(&payload.password, &account.password_hash)
        .map_err(|e| AppError::internal(format!("Password verification failed: {}", e)))?;
    if !valid {
        tracing::warn!(target: "security", username = %payload.username, "Failed login attempt");
        return Err(AppError::invalid_credentials());
    }

    let account_id = account
        .id
        .as_ref()
        .map(|t| t.to_string())
        .ok_or_else(|| AppError::internal("Account row has no id"))?;

    let token = state
        .get_jwt_service()
        .generate_token(&account_id, &account.username, account.role.as_str())
        .map_err(|e| AppError::internal(format!("Token generation failed: {}", e)))?;

    tracing::info!(username = %account.username, "Back-office login");

    Ok(Json(LoginResponse {
        token,
        account: account.into(),
    }))
}

/// GET /api/auth/me - identity behind the presented token
pub async fn me(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
) -> AppResult<Json<AccountView>> {
    let repo = AccountRepository::new(state.db.clone());
    let account = repo
        .find_by_id(&current_user.id)
        .await?
        .ok_or_else(|| AppError::not_found("Account no longer exists"))?;
    Ok(Json(account.into()))
}
