use serde::{Deserialize, Serialize};

use crate::domain::common::{Record, RecordId};
use crate::shared::record::{closed_tag, EditableRecord, Filterable};

closed_tag! {
    pub enum TrainingStatus {
        Scheduled => ("scheduled", "Scheduled", Blue, Calendar),
        Ongoing => ("ongoing", "Ongoing", Green, Clock),
        Completed => ("completed", "Completed", Gray, CheckCircle),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingSession {
    pub id: RecordId,
    pub title: String,
    pub date: String,
    pub time: String,
    /// Minutes
    pub duration: u32,
    pub category: String,
    pub coach: String,
    pub location: String,
    pub objectives: Vec<String>,
    pub attendees: u32,
    pub max_attendees: u32,
    pub status: TrainingStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingSessionForm {
    pub title: String,
    pub date: String,
    pub time: String,
    #[serde(default)]
    pub duration: u32,
    pub category: String,
    pub coach: String,
    pub location: String,
    #[serde(default)]
    pub objectives: Vec<String>,
    #[serde(default)]
    pub max_attendees: u32,
}

impl Record for TrainingSession {
    fn id(&self) -> RecordId {
        self.id
    }

    fn record_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "training_sessions"
    }

    fn element_name() -> &'static str {
        "Training session"
    }

    fn list_name() -> &'static str {
        "Training sessions"
    }
}

impl EditableRecord for TrainingSession {
    type Form = TrainingSessionForm;

    fn create_from_form(id: RecordId, form: TrainingSessionForm) -> Self {
        Self {
            id,
            title: form.title,
            date: form.date,
            time: form.time,
            duration: form.duration,
            category: form.category,
            coach: form.coach,
            location: form.location,
            objectives: form.objectives,
            attendees: 0,
            max_attendees: form.max_attendees,
            status: TrainingStatus::Scheduled,
        }
    }

    fn merge_form(original: &Self, form: TrainingSessionForm) -> Self {
        Self {
            attendees: original.attendees,
            status: original.status,
            ..Self::create_from_form(original.id, form)
        }
    }

    fn to_form(&self) -> TrainingSessionForm {
        TrainingSessionForm {
            title: self.title.clone(),
            date: self.date.clone(),
            time: self.time.clone(),
            duration: self.duration,
            category: self.category.clone(),
            coach: self.coach.clone(),
            location: self.location.clone(),
            objectives: self.objectives.clone(),
            max_attendees: self.max_attendees,
        }
    }
}

impl Filterable for TrainingSession {
    type Key = TrainingStatus;

    fn filter_key(&self) -> TrainingStatus {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_training_session::seed;
    use crate::shared::record::{classify, DisplayToken, ModalEditor, RecordStore, Tag};

    #[test]
    fn test_seed_statuses_classify() {
        for session in seed::sessions() {
            assert_ne!(
                classify::<TrainingStatus>(session.status.code()),
                DisplayToken::NEUTRAL
            );
        }
    }

    #[test]
    fn test_unchanged_edit_round_trips() {
        let mut store = RecordStore::new(seed::sessions());
        let before = store.records().to_vec();
        for session in &before {
            let mut editor = ModalEditor::new();
            editor.open_edit(session.clone());
            let form = editor.prefill().unwrap();
            editor.save(form, &mut store).unwrap();
        }
        assert_eq!(store.records(), before.as_slice());
    }

    #[test]
    fn test_form_defaults_missing_numbers() {
        let form: TrainingSessionForm = serde_json::from_str(
            r#"{"title":"Set pieces","date":"2024-12-20","time":"10:00",
                "category":"U15","coach":"Mary Wanjiku","location":"Main Field A"}"#,
        )
        .unwrap();
        assert_eq!(form.duration, 0);
        assert_eq!(form.max_attendees, 0);
        assert!(form.objectives.is_empty());
    }
}
