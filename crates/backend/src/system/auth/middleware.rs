use axum::{
    body::Body,
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use contracts::system::auth::TokenClaims;
use contracts::system::navigation::View;

use crate::shared::error::AppError;
use crate::shared::state::AppState;

/// Middleware that requires a valid bearer token
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let token = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .ok_or(AppError::Unauthorized)?;

    let claims = state
        .keys
        .validate_token(token)
        .map_err(|_| AppError::Unauthorized)?;

    // Claims are read by handlers through `CurrentUser`
    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}

/// Middleware that admits only the roles allowed to open `view`.
/// Must run after [`require_auth`].
pub async fn require_view(
    State(view): State<View>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let role = req
        .extensions()
        .get::<TokenClaims>()
        .map(|claims| claims.role)
        .ok_or(AppError::Unauthorized)?;

    if !view.allows(role) {
        tracing::info!("{} denied for role {}", view.path(), role);
        return Err(AppError::Forbidden(role));
    }

    Ok(next.run(req).await)
}
