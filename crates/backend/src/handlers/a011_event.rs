use axum::extract::State;
use contracts::domain::a011_event::Event;
use contracts::domain::common::RecordId;

use super::records;
use crate::shared::error::AppError;
use crate::shared::extract::{Json, Path};
use crate::shared::state::AppState;

/// POST /api/events/:id/cancel
pub async fn cancel(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Event>, AppError> {
    let event = records::transition(&state, RecordId::new(id), |event: &mut Event| {
        event.cancel()?;
        Ok(event.clone())
    })
    .await?;
    Ok(Json(event))
}
