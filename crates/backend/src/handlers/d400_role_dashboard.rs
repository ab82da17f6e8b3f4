use axum::extract::State;
use chrono::Local;
use contracts::dashboards::d400_role_dashboard::{role_dashboard, RoleDashboard};

use crate::shared::error::AppError;
use crate::shared::extract::Json;
use crate::shared::state::AppState;
use crate::system::auth::extractor::CurrentUser;

/// GET /api/dashboard
pub async fn get_dashboard(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<Json<RoleDashboard>, AppError> {
    let user = state
        .verifier
        .find_user(current.user_id()?)
        .ok_or(AppError::Unauthorized)?;
    Ok(Json(role_dashboard(&user, Local::now().date_naive())))
}
