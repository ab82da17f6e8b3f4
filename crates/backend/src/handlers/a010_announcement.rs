use axum::extract::State;
use chrono::Local;
use contracts::domain::a010_announcement::Announcement;
use contracts::domain::common::RecordId;

use super::records;
use crate::shared::error::AppError;
use crate::shared::extract::{Json, Path};
use crate::shared::state::AppState;

/// POST /api/announcements/:id/publish
///
/// Stamps today's date on the published announcement.
pub async fn publish(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Announcement>, AppError> {
    let today = Local::now().date_naive().format("%Y-%m-%d").to_string();
    let announcement = records::transition(&state, RecordId::new(id), |a: &mut Announcement| {
        a.publish(today)?;
        Ok(a.clone())
    })
    .await?;
    Ok(Json(announcement))
}
