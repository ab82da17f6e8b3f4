use axum::http::header;
use axum::response::IntoResponse;
use chrono::Utc;
use contracts::reports::{
    catalog, export_filename, report_csv, ReportCategory, ReportDefinition, ReportError, ReportKind,
};
use contracts::shared::record::{filter_view, tab_counts, FilterKey, Filterable, TabCount, Tag};

use super::records::ListQuery;
use crate::shared::error::AppError;
use crate::shared::extract::{Json, Path, Query};

/// GET /api/reports?filter=
pub async fn list_reports(
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<ReportDefinition>>, AppError> {
    let key = FilterKey::<ReportCategory>::parse(query.filter.as_deref().unwrap_or_default())?;
    Ok(Json(filter_view(&catalog(), key, |report: &ReportDefinition| report.filter_key())))
}

/// GET /api/reports/tabs
pub async fn report_tabs() -> Json<Vec<TabCount>> {
    Json(tab_counts(&catalog(), |report: &ReportDefinition| report.filter_key()))
}

/// GET /api/reports/:id/export
///
/// CSV download named after the report and today's UTC date.
pub async fn export_report(Path(id): Path<String>) -> Result<impl IntoResponse, AppError> {
    let kind = ReportKind::from_code(&id).ok_or_else(|| ReportError::UnknownReport(id.clone()))?;
    let csv = report_csv(kind.code())?;
    let filename = export_filename(kind.label(), Utc::now().date_naive());
    tracing::info!("Exporting report {} as {}", id, filename);

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        csv,
    ))
}
