//! Product handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::models::Product;
use crate::db::repository::{ProductRepository, StoreSettingsRepository};
use crate::utils::validation::{MAX_NAME_LEN, validate_required_text};
use crate::utils::{AppError, AppResult};
use shared::models::{ProductCreate, ProductUpdate};

/// Image count ceiling from the store settings singleton
async fn max_images(state: &ServerState) -> AppResult<usize> {
    let settings = StoreSettingsRepository::new(state.db.clone())
        .get_or_create()
        .await?;
    Ok(settings.max_images_per_product as usize)
}

fn check_image_count(images: &[String], limit: usize) -> AppResult<()> {
    if images.len() > limit {
        return Err(AppError::validation(format!(
            "A product may carry at most {} images, got {}",
            limit,
            images.len()
        )));
    }
    Ok(())
}

/// GET /api/products - active products, storefront order
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Product>>> {
    let repo = ProductRepository::new(state.db.clone());
    Ok(Json(repo.find_all().await?))
}

/// GET /api/products/all - every product, including inactive
pub async fn list_all(State(state): State<ServerState>) -> AppResult<Json<Vec<Product>>> {
    let repo = ProductRepository::new(state.db.clone());
    Ok(Json(repo.find_all_admin().await?))
}

/// GET /api/products/by-category/:id - active products of one category
pub async fn list_by_category(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<Product>>> {
    let repo = ProductRepository::new(state.db.clone());
    Ok(Json(repo.find_by_category(&id).await?))
}

/// GET /api/products/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Product>> {
    let repo = ProductRepository::new(state.db.clone());
    let product = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Product {} not found", id)))?;
    Ok(Json(product))
}

/// POST /api/products
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ProductCreate>,
) -> AppResult<Json<Product>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    if let Some(images) = &payload.images {
        check_image_count(images, max_images(&state).await?)?;
    }
    let repo = ProductRepository::new(state.db.clone());
    Ok(Json(repo.create(payload).await?))
}

/// PUT /api/products/:id
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<ProductUpdate>,
) -> AppResult<Json<Product>> {
    if let Some(name) = &payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    if let Some(images) = &payload.images {
        check_image_count(images, max_images(&state).await?)?;
    }
    let repo = ProductRepository::new(state.db.clone());
    Ok(Json(repo.update(&id, payload).await?))
}

/// DELETE /api/products/:id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = ProductRepository::new(state.db.clone());
    repo.delete(&id).await?;
    Ok(Json(true))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_ceiling_is_inclusive() {
        let images: Vec<String> = (0..3).map(|i| format!("{}.jpg", i)).collect();
        assert!(check_image_count(&images, 3).is_ok());
        let four: Vec<String> = (0..4).map(|i| format!("{}.jpg", i)).collect();
        assert!(check_image_count(&four, 3).is_err());
    }
}
