use axum::extract::State;
use contracts::domain::a009_trial::{Decision, Trial, TrialEvaluation};
use contracts::domain::common::RecordId;
use serde::Deserialize;

use super::records;
use crate::shared::error::AppError;
use crate::shared::extract::{Json, Path};
use crate::shared::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DecisionRequest {
    pub decision: Decision,
}

/// POST /api/scouting/:id/complete
pub async fn complete(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(evaluation): Json<TrialEvaluation>,
) -> Result<Json<Trial>, AppError> {
    let trial = records::transition(&state, RecordId::new(id), |trial: &mut Trial| {
        trial.complete(evaluation)?;
        Ok(trial.clone())
    })
    .await?;
    Ok(Json(trial))
}

/// POST /api/scouting/:id/decide
pub async fn decide(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(request): Json<DecisionRequest>,
) -> Result<Json<Trial>, AppError> {
    let trial = records::transition(&state, RecordId::new(id), |trial: &mut Trial| {
        trial.decide(request.decision)?;
        Ok(trial.clone())
    })
    .await?;
    tracing::info!("Trial of {} is now {}", trial.name, trial.status);
    Ok(Json(trial))
}
