//! Store settings handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::db::models::StoreSettings;
use crate::db::repository::StoreSettingsRepository;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_email, validate_required_text,
};
use crate::utils::{AppError, AppResult};
use shared::models::StoreSettingsUpdate;

/// GET /api/settings
pub async fn get(State(state): State<ServerState>) -> AppResult<Json<StoreSettings>> {
    let repo = StoreSettingsRepository::new(state.db.clone());
    Ok(Json(repo.get_or_create().await?))
}

/// PUT /api/settings
pub async fn update(
    State(state): State<ServerState>,
    Json(payload): Json<StoreSettingsUpdate>,
) -> AppResult<Json<StoreSettings>> {
    if let Some(name) = &payload.store_name {
        validate_required_text(name, "store_name", MAX_NAME_LEN)?;
    }
    if let Some(email) = &payload.contact_email {
        validate_email(email, "contact_email")?;
    }
    if let Some(currency) = &payload.currency {
        validate_required_text(currency, "currency", MAX_SHORT_TEXT_LEN)?;
    }
    if let Some(max) = payload.max_images_per_product
        && max == 0
    {
        return Err(AppError::validation(
            "max_images_per_product must be at least 1",
        ));
    }
    let repo = StoreSettingsRepository::new(state.db.clone());
    Ok(Json(repo.update(payload).await?))
}
