//! Authentication middleware
//!
//! JWT validation for admin routes; the storefront routes stay public.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use http::Method;

use crate::AppError;
use crate::auth::{CurrentUser, JwtService};
use crate::core::ServerState;

/// Storefront routes that never require a token
///
/// Everything else under `/api/` is back-office and needs a valid JWT.
fn is_public_route(method: &Method, path: &str) -> bool {
    if method == Method::POST {
        return path == "/api/auth/login" || path == "/api/reservations";
    }
    if method != Method::GET {
        return false;
    }
    path == "/api/health"
        || path == "/api/settings"
        || path == "/api/zones"
        || path == "/api/categories"
        || path == "/api/products"
        || path.starts_with("/api/products/by-category/")
        || is_public_product_detail(path)
        || path.starts_with("/api/availability/")
        || path.starts_with("/api/image/")
}

/// `/api/products/{id}` detail reads, excluding the admin `/all` listing
fn is_public_product_detail(path: &str) -> bool {
    match path.strip_prefix("/api/products/") {
        Some(rest) => !rest.is_empty() && rest != "all" && !rest.contains('/'),
        None => false,
    }
}

/// Auth middleware - requires a logged-in back-office user
///
/// Extracts and validates the JWT from `Authorization: Bearer <token>`,
/// then injects [`CurrentUser`] into the request extensions.
pub async fn require_auth(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let path = req.uri().path().to_string();

    // CORS preflight passes through
    if req.method() == Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    // Non-API paths fall through to their own 404
    if !path.starts_with("/api/") {
        return Ok(next.run(req).await);
    }

    if is_public_route(req.method(), &path) {
        return Ok(next.run(req).await);
    }

    let jwt_service = state.get_jwt_service();
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(header) => JwtService::extract_from_header(header)
            .ok_or_else(|| AppError::invalid_token("Invalid authorization header"))?,
        None => {
            tracing::warn!(target: "security", path = %path, "Missing authorization header");
            return Err(AppError::unauthorized());
        }
    };

    match jwt_service.validate_token(token) {
        Ok(claims) => {
            let user = CurrentUser::from(claims);
            req.extensions_mut().insert(user);
            Ok(next.run(req).await)
        }
        Err(e) => {
            tracing::warn!(target: "security", path = %path, error = %e, "Token rejected");
            match e {
                crate::auth::JwtError::ExpiredToken => Err(AppError::TokenExpired),
                other => Err(AppError::invalid_token(other.to_string())),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storefront_reads_are_public() {
        assert!(is_public_route(&Method::GET, "/api/products"));
        assert!(is_public_route(&Method::GET, "/api/products/product:abc"));
        assert!(is_public_route(
            &Method::GET,
            "/api/products/by-category/category:toys"
        ));
        assert!(is_public_route(&Method::GET, "/api/settings"));
        assert!(is_public_route(&Method::GET, "/api/categories"));
        assert!(is_public_route(&Method::GET, "/api/availability/dates"));
        assert!(is_public_route(&Method::GET, "/api/zones"));
        assert!(is_public_route(&Method::GET, "/api/image/some.jpg"));
    }

    #[test]
    fn checkout_and_login_are_public() {
        assert!(is_public_route(&Method::POST, "/api/reservations"));
        assert!(is_public_route(&Method::POST, "/api/auth/login"));
    }

    #[test]
    fn admin_routes_are_protected() {
        assert!(!is_public_route(&Method::POST, "/api/products"));
        assert!(!is_public_route(&Method::GET, "/api/products/all"));
        assert!(!is_public_route(&Method::GET, "/api/products/product:abc/extra"));
        assert!(!is_public_route(&Method::PUT, "/api/settings"));
        assert!(!is_public_route(&Method::GET, "/api/reservations"));
        assert!(!is_public_route(&Method::POST, "/api/image/upload"));
        assert!(!is_public_route(&Method::DELETE, "/api/zones/zone:abc"));
    }
}
