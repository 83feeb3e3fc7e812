//! Image upload handler
//!
//! Accepts multipart uploads from authenticated back-office users,
//! validates the candidate, then decodes and re-encodes to JPEG for a
//! uniform catalog. Identical content is deduplicated by hash.

use axum::Json;
use axum::extract::{Extension, Multipart, State};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::fs;
use uuid::Uuid;

use super::validate::validate_upload_candidate;
use crate::utils::{AppResponse, ok};
use crate::{AppError, CurrentUser, ServerState};

/// JPEG quality for catalog images
const JPEG_QUALITY: u8 = 85;

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub file_id: String,
    pub filename: String,
    pub original_name: String,
    pub size: usize,
    pub format: String,
    pub url: String,
}

fn calculate_hash(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// Find an existing file with the same content hash
fn find_file_by_hash(images_dir: &Path, hash: &str) -> Option<String> {
    let hash_dir = images_dir.join("by_hash");
    if !hash_dir.exists() {
        return None;
    }

    // First 2 hash chars are the subdirectory (e.g. "ab/abc123...")
    let prefix = &hash[..2];
    let hash_path = hash_dir.join(format!("{}/{}", prefix, hash));

    if hash_path.exists()
        && let Ok(target) = fs::read_link(&hash_path)
    {
        return target.file_name().map(|s| s.to_string_lossy().to_string());
    }
    None
}

/// Create the hash symlink used for deduplication
fn create_hash_symlink(images_dir: &Path, hash: &str, filename: &str) -> Result<(), AppError> {
    let prefix = &hash[..2];
    let hash_subdir = images_dir.join("by_hash").join(prefix);
    fs::create_dir_all(&hash_subdir)
        .map_err(|e| AppError::internal(format!("Failed to create hash dir: {}", e)))?;

    let hash_path = hash_subdir.join(hash);
    let target_path = PathBuf::from("../../").join(filename);

    symlink::symlink_auto(&target_path, &hash_path)
        .map_err(|e| AppError::internal(format!("Failed to create symlink: {}", e)))?;

    Ok(())
}

/// Decode and re-encode as JPEG at the catalog quality
fn recompress_image(data: &[u8]) -> Result<Vec<u8>, AppError> {
    let img = image::load_from_memory(data)
        .map_err(|e| AppError::validation(format!("Invalid image: {}", e)))?;

    let mut buffer = Vec::new();
    {
        let mut cursor = Cursor::new(&mut buffer);
        let rgb_img = img.to_rgb8();
        let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut cursor, JPEG_QUALITY);
        rgb_img
            .write_with_encoder(encoder)
            .map_err(|e| AppError::internal(format!("Failed to compress image: {}", e)))?;
    }

    Ok(buffer)
}

/// POST /api/image/upload
pub async fn upload(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    mut multipart: Multipart,
) -> Result<Json<AppResponse<UploadResponse>>, AppError> {
    let images_dir = state.uploads_dir();
    fs::create_dir_all(&images_dir)
        .map_err(|e| AppError::internal(format!("Failed to create images directory: {}", e)))?;

    // Pull the first "file" field out of the multipart body
    let mut field_data: Option<Vec<u8>> = None;
    let mut original_filename = None;
    let mut declared_type = None;

    while let Some(f) = multipart.next_field().await? {
        let name = f.name().map(|s| s.to_string());
        if name.as_deref() == Some("file") || name.as_deref() == Some("") {
            original_filename = f.file_name().map(|s| s.to_string());
            declared_type = f.content_type().map(|s| s.to_string());
            field_data = Some(f.bytes().await?.to_vec());
            break;
        }
    }

    let data = field_data.ok_or_else(|| {
        AppError::validation("No 'file' field found. Field name must be 'file'".to_string())
    })?;
    let filename = original_filename
        .ok_or_else(|| AppError::validation("No filename provided in file field".to_string()))?;

    // Metadata checks first, byte-level decode second
    let candidate =
        validate_upload_candidate(&filename, declared_type.as_deref(), data.len() as u64)
            .map_err(|e| AppError::validation(e.to_string()))?;

    let compressed_data = recompress_image(&data)?;

    // Content-hash deduplication
    let file_hash = calculate_hash(&compressed_data);
    if let Some(existing_filename) = find_file_by_hash(&images_dir, &file_hash) {
        tracing::info!(
            original_name = %filename,
            existing_file = %existing_filename,
            "Duplicate image detected, returning existing file"
        );

        let file_id = existing_filename
            .strip_suffix(".jpg")
            .map(|s| s.to_string())
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        let url = format!("/api/image/{}", existing_filename);
        return Ok(ok(UploadResponse {
            file_id,
            filename: existing_filename,
            original_name: filename,
            size: compressed_data.len(),
            format: "jpg".to_string(),
            url,
        }));
    }

    let file_id = Uuid::new_v4().to_string();
    let new_filename = format!("{}.jpg", file_id);
    let file_path = images_dir.join(&new_filename);

    fs::write(&file_path, &compressed_data)
        .map_err(|e| AppError::internal(format!("Failed to save file: {}", e)))?;

    create_hash_symlink(&images_dir, &file_hash, &new_filename)?;

    tracing::info!(
        uploaded_by = %current_user.username,
        original_name = %filename,
        declared_extension = %candidate.extension,
        canonical_type = %candidate.content_type,
        size = %compressed_data.len(),
        hash = %file_hash,
        "Image uploaded"
    );

    let url = format!("/api/image/{}", new_filename);
    Ok(ok(UploadResponse {
        file_id,
        filename: new_filename,
        original_name: filename,
        size: compressed_data.len(),
        format: "jpg".to_string(),
        url,
    }))
}
