//! List/filter/summary/save/delete handlers shared by every record page.
//!
//! Each handler is generic over the record type and is mounted once per
//! page, e.g. `get(records::list_all::<Fee>)`.

use axum::extract::State;
use contracts::domain::common::RecordId;
use contracts::shared::record::{
    tab_counts, Confirmation, DeleteOutcome, EditableRecord, FilterKey, Filterable, ModalEditor,
    SaveOutcome, Summarize, SummaryCard, TabCount, TransitionError,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;
use crate::shared::extract::{Json, Path, Query};
use crate::shared::state::{AppState, StoredRecord};

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// `all` or a tag code
    #[serde(default)]
    pub filter: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DeleteQuery {
    /// Answer to the confirmation prompt; absent means declined
    #[serde(default)]
    pub confirm: bool,
}

/// Body of the modal's save button: no id when creating
#[derive(Debug, Deserialize)]
pub struct SaveRequest<F> {
    #[serde(default)]
    pub id: Option<RecordId>,
    pub form: F,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub outcome: DeleteOutcome,
}

/// GET /api/{page}?filter=
pub async fn list_all<R>(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<R>>, AppError>
where
    R: StoredRecord + Filterable + Serialize,
{
    let key = FilterKey::<R::Key>::parse(query.filter.as_deref().unwrap_or_default())?;
    let store = R::store(&state.stores).read().await;
    Ok(Json(store.filtered(key)))
}

/// GET /api/{page} for pages without filter tabs
pub async fn list_unfiltered<R>(State(state): State<AppState>) -> Json<Vec<R>>
where
    R: StoredRecord + Serialize,
{
    let store = R::store(&state.stores).read().await;
    Json(store.records().to_vec())
}

/// GET /api/{page}/tabs
pub async fn tabs<R>(State(state): State<AppState>) -> Json<Vec<TabCount>>
where
    R: StoredRecord + Filterable,
{
    let store = R::store(&state.stores).read().await;
    Json(tab_counts(store.records(), |record: &R| record.filter_key()))
}

/// GET /api/{page}/summary
pub async fn summary<R>(State(state): State<AppState>) -> Json<Vec<SummaryCard>>
where
    R: StoredRecord + Summarize,
{
    let store = R::store(&state.stores).read().await;
    Json(R::summary(store.records()))
}

/// GET /api/{page}/:id
pub async fn get_by_id<R>(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<R>, AppError>
where
    R: StoredRecord + Serialize,
{
    let id = RecordId::new(id);
    let store = R::store(&state.stores).read().await;
    store
        .get(id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::not_found::<R>(id))
}

/// GET /api/{page}/:id/form
///
/// Edit modal prefill
pub async fn form<R>(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<R::Form>, AppError>
where
    R: StoredRecord + EditableRecord,
    R::Form: Serialize,
{
    let id = RecordId::new(id);
    let store = R::store(&state.stores).read().await;
    let original = store
        .get(id)
        .cloned()
        .ok_or_else(|| AppError::not_found::<R>(id))?;

    let mut editor = ModalEditor::<R>::new();
    editor.open_edit(original);
    editor
        .prefill()
        .map(Json)
        .ok_or_else(|| AppError::not_found::<R>(id))
}

/// POST /api/{page}
///
/// Creates when `id` is absent, otherwise edits that record.
pub async fn save<R>(
    State(state): State<AppState>,
    Json(request): Json<SaveRequest<R::Form>>,
) -> Result<Json<SaveOutcome>, AppError>
where
    R: StoredRecord + EditableRecord,
    R::Form: DeserializeOwned + Send,
{
    let mut store = R::store(&state.stores).write().await;
    let mut editor = ModalEditor::<R>::new();
    match request.id {
        Some(id) => {
            let original = store
                .get(id)
                .cloned()
                .ok_or_else(|| AppError::not_found::<R>(id))?;
            editor.open_edit(original);
        }
        None => editor.open_new(),
    }

    let outcome = editor.save(request.form, &mut store)?;
    tracing::info!("{}: {:?}", R::full_name(), outcome);
    Ok(Json(outcome))
}

/// DELETE /api/{page}/:id?confirm=true
///
/// Without `confirm=true` the prompt counts as declined and nothing changes.
pub async fn delete<R>(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Query(query): Query<DeleteQuery>,
) -> Result<Json<DeleteResponse>, AppError>
where
    R: StoredRecord,
{
    let id = RecordId::new(id);
    let mut store = R::store(&state.stores).write().await;
    match store.delete(id, Confirmation::from_flag(query.confirm)) {
        DeleteOutcome::NotFound => Err(AppError::not_found::<R>(id)),
        outcome => {
            tracing::info!("{} {}: {:?}", R::full_name(), id, outcome);
            Ok(Json(DeleteResponse { outcome }))
        }
    }
}

/// Runs a status transition on one record under the store's write lock
pub async fn transition<R, T>(
    state: &AppState,
    id: RecordId,
    action: impl FnOnce(&mut R) -> Result<T, TransitionError>,
) -> Result<T, AppError>
where
    R: StoredRecord,
{
    let mut store = R::store(&state.stores).write().await;
    let record = store
        .get_mut(id)
        .ok_or_else(|| AppError::not_found::<R>(id))?;
    let result = action(record)?;
    tracing::info!("{} {}: transition applied", R::full_name(), id);
    Ok(result)
}
