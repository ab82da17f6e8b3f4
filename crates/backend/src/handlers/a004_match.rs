use axum::extract::State;
use contracts::domain::a004_match::{Match, MatchResult};
use contracts::domain::common::RecordId;

use super::records;
use crate::shared::error::AppError;
use crate::shared::extract::{Json, Path};
use crate::shared::state::AppState;

/// POST /api/matches/:id/kick-off
pub async fn kick_off(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Match>, AppError> {
    let updated = records::transition(&state, RecordId::new(id), |m: &mut Match| {
        m.kick_off()?;
        Ok(m.clone())
    })
    .await?;
    Ok(Json(updated))
}

/// POST /api/matches/:id/result
pub async fn record_result(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(result): Json<MatchResult>,
) -> Result<Json<Match>, AppError> {
    let updated = records::transition(&state, RecordId::new(id), |m: &mut Match| {
        m.record_result(result)?;
        Ok(m.clone())
    })
    .await?;
    tracing::info!(
        "{} finished {}-{}",
        updated.title,
        result.home_score,
        result.away_score
    );
    Ok(Json(updated))
}
