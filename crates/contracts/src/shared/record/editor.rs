use serde::{Deserialize, Serialize};

use super::RecordStore;
use crate::domain::common::{Record, RecordId};

/// Record that can be created and edited through a form.
pub trait EditableRecord: Record {
    /// Fields the form exposes
    type Form: Clone;

    /// Builds a new record, filling the fields the form does not carry with
    /// their defaults (e.g. zero attendees, initial status).
    fn create_from_form(id: RecordId, form: Self::Form) -> Self;

    /// Applies an edit. Fields outside the form are taken from `original`.
    fn merge_form(original: &Self, form: Self::Form) -> Self;

    /// Prefills the edit form
    fn to_form(&self) -> Self::Form;
}

#[derive(Debug, Clone, PartialEq)]
pub enum EditorState<R> {
    Closed,
    Creating,
    Editing(R),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "id", rename_all = "snake_case")]
pub enum SaveOutcome {
    Created(RecordId),
    Updated(RecordId),
}

impl SaveOutcome {
    pub fn id(&self) -> RecordId {
        match self {
            SaveOutcome::Created(id) | SaveOutcome::Updated(id) => *id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditorError {
    #[error("editor is not open")]
    NotOpen,
    #[error("record {0} no longer exists")]
    RecordGone(RecordId),
}

/// Create/edit overlay bound to zero or one record.
///
/// `Closed -> Creating | Editing(record)`, and back to `Closed` on cancel or
/// on save (successful or not).
#[derive(Debug, Clone)]
pub struct ModalEditor<R> {
    state: EditorState<R>,
}

impl<R> Default for ModalEditor<R> {
    fn default() -> Self {
        Self {
            state: EditorState::Closed,
        }
    }
}

impl<R: EditableRecord> ModalEditor<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &EditorState<R> {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.state, EditorState::Closed)
    }

    pub fn open_new(&mut self) {
        self.state = EditorState::Creating;
    }

    pub fn open_edit(&mut self, record: R) {
        self.state = EditorState::Editing(record);
    }

    /// Form contents to show: the record's fields when editing
    pub fn prefill(&self) -> Option<R::Form> {
        match &self.state {
            EditorState::Editing(record) => Some(record.to_form()),
            _ => None,
        }
    }

    pub fn cancel(&mut self) {
        self.state = EditorState::Closed;
    }

    pub fn save(
        &mut self,
        form: R::Form,
        store: &mut RecordStore<R>,
    ) -> Result<SaveOutcome, EditorError> {
        match std::mem::replace(&mut self.state, EditorState::Closed) {
            EditorState::Closed => Err(EditorError::NotOpen),
            EditorState::Creating => {
                let id = store.insert_new(|id| R::create_from_form(id, form));
                Ok(SaveOutcome::Created(id))
            }
            EditorState::Editing(original) => {
                let id = original.id();
                let merged = R::merge_form(&original, form);
                if store.replace(merged) {
                    Ok(SaveOutcome::Updated(id))
                } else {
                    Err(EditorError::RecordGone(id))
                }
            }
        }
    }
}
