use axum::extract::State;
use contracts::domain::a007_fee::{Fee, PaymentForm, Reminder};
use contracts::domain::common::RecordId;

use super::records;
use crate::shared::error::AppError;
use crate::shared::extract::{Json, Path};
use crate::shared::state::AppState;

/// POST /api/fees/:id/pay
pub async fn record_payment(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(payment): Json<PaymentForm>,
) -> Result<Json<Fee>, AppError> {
    let fee = records::transition(&state, RecordId::new(id), |fee: &mut Fee| {
        fee.record_payment(payment)?;
        Ok(fee.clone())
    })
    .await?;
    Ok(Json(fee))
}

/// POST /api/fees/:id/remind
///
/// Returns the reminder text. Nothing is sent.
pub async fn send_reminder(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Reminder>, AppError> {
    let reminder = records::transition(&state, RecordId::new(id), |fee: &mut Fee| fee.reminder()).await?;
    tracing::info!("Reminder prepared for {} ({})", reminder.guardian, reminder.phone);
    Ok(Json(reminder))
}
