//! Image upload routes
//!
//! | Path | Method | Auth |
//! |------|--------|------|
//! | /api/image/upload | POST | JWT |
//! | /api/image/{filename} | GET | none |

mod handler;
pub mod validate;

use axum::{
    Router,
    body::Bytes,
    extract::{Path, State},
    response::IntoResponse,
    routing::{get, post},
};
use http::header;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/image/upload", post(handler::upload))
        .route("/api/image/{filename}", get(serve_uploaded_file))
}

enum UploadFileResponse {
    Ok(&'static str, Bytes),
    NotFound,
    BadRequest(&'static str),
}

impl IntoResponse for UploadFileResponse {
    fn into_response(self) -> axum::response::Response {
        match self {
            UploadFileResponse::Ok(content_type, content) => (
                http::StatusCode::OK,
                [(header::CONTENT_TYPE, content_type)],
                content,
            )
                .into_response(),
            UploadFileResponse::NotFound => {
                (http::StatusCode::NOT_FOUND, "File not found").into_response()
            }
            UploadFileResponse::BadRequest(msg) => {
                (http::StatusCode::BAD_REQUEST, msg).into_response()
            }
        }
    }
}

/// Serve an uploaded image by filename
async fn serve_uploaded_file(
    State(state): State<ServerState>,
    Path(filename): Path<String>,
) -> UploadFileResponse {
    // Path traversal guard
    if filename.is_empty()
        || filename.contains("..")
        || filename.contains('/')
        || filename.contains('\\')
    {
        return UploadFileResponse::BadRequest("Invalid filename");
    }

    let file_path = state.uploads_dir().join(&filename);
    match tokio::fs::read(&file_path).await {
        Ok(content) => {
            // Stored files are re-encoded JPEG, but guess from the name
            // in case older uploads survive in the directory
            let content_type = mime_guess::from_path(&filename)
                .first_raw()
                .unwrap_or("image/jpeg");
            UploadFileResponse::Ok(content_type, content.into())
        }
        Err(e) => {
            tracing::debug!(filename = %filename, error = %e, "Image not found");
            UploadFileResponse::NotFound
        }
    }
}
