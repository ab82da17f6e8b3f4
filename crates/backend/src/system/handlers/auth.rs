use axum::extract::State;
use axum::http::StatusCode;
use contracts::system::auth::{LoginRequest, LoginResponse};
use contracts::system::session::Session;
use contracts::system::users::User;

use crate::shared::error::AppError;
use crate::shared::extract::Json;
use crate::shared::state::AppState;
use crate::system::auth::extractor::CurrentUser;

/// POST /api/system/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let session = match Session::login(state.verifier.as_ref(), &request.email, &request.password) {
        Ok(session) => session,
        Err(e) => {
            tracing::info!("Login failed for {}", request.email);
            return Err(e.into());
        }
    };

    let user = session.user().clone();
    let access_token = state.keys.generate_access_token(&user)?;
    tracing::info!("User {} signed in as {}", user.email, user.role);

    Ok(Json(LoginResponse { access_token, user }))
}

/// POST /api/system/auth/logout
///
/// Tokens are not tracked server side; the client drops its copy.
pub async fn logout(CurrentUser(claims): CurrentUser) -> StatusCode {
    tracing::info!("User {} signed out", claims.email);
    StatusCode::NO_CONTENT
}

/// GET /api/system/auth/me
pub async fn current_user(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<Json<User>, AppError> {
    let user = state
        .verifier
        .find_user(current.user_id()?)
        .ok_or(AppError::Unauthorized)?;
    Ok(Json(user))
}
