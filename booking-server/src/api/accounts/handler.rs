//! Account handlers
//!
//! Staff can log in and use the back office; only admins manage
//! accounts themselves.

use axum::{
    Json,
    extract::{Extension, Path, State},
};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::AccountView;
use crate::db::repository::AccountRepository;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_PASSWORD_LEN, validate_email, validate_required_text,
};
use crate::utils::{AppError, AppResult};
use shared::models::{AccountCreate, AccountUpdate};

fn require_admin(user: &CurrentUser) -> AppResult<()> {
    if !user.is_admin() {
        return Err(AppError::forbidden("Admin role required"));
    }
    Ok(())
}

/// GET /api/accounts
pub async fn list(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
) -> AppResult<Json<Vec<AccountView>>> {
    require_admin(&user)?;
    let repo = AccountRepository::new(state.db.clone());
    let accounts = repo.find_all().await?;
    Ok(Json(accounts.into_iter().map(Into::into).collect()))
}

/// GET /api/accounts/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> AppResult<Json<AccountView>> {
    require_admin(&user)?;
    let repo = AccountRepository::new(state.db.clone());
    let account = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Account {} not found", id)))?;
    Ok(Json(account.into()))
}

/// POST /api/accounts
pub async fn create(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<AccountCreate>,
) -> AppResult<Json<AccountView>> {
    require_admin(&user)?;
    validate_required_text(&payload.username, "username", MAX_NAME_LEN)?;
    validate_email(&payload.email, "email")?;
    validate_required_text(&payload.password, "password", MAX_PASSWORD_LEN)?;

    let repo = AccountRepository::new(state.db.clone());
    let account = repo.create(payload).await?;
    Ok(Json(account.into()))
}

/// PUT /api/accounts/:id
pub async fn update(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<String>,
    Json(payload): Json<AccountUpdate>,
) -> AppResult<Json<AccountView>> {
    require_admin(&user)?;
    if let Some(email) = &payload.email {
        validate_email(email, "email")?;
    }
    if let Some(password) = &payload.password {
        validate_required_text(password, "password", MAX_PASSWORD_LEN)?;
    }
    let repo = AccountRepository::new(state.db.clone());
    let account = repo.update(&id, payload).await?;
    Ok(Json(account.into()))
}

/// DELETE /api/accounts/:id - admins cannot delete themselves
pub async fn delete(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    require_admin(&user)?;
    if user.id == id || user.id.ends_with(&format!(":{}", id)) {
        return Err(AppError::business_rule("Cannot delete your own account"));
    }
    let repo = AccountRepository::new(state.db.clone());
    repo.delete(&id).await?;
    Ok(Json(true))
}
