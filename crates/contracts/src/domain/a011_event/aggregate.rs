use serde::{Deserialize, Serialize};

use crate::domain::common::{Record, RecordId};
use crate::shared::record::{closed_tag, EditableRecord, Filterable, Tag, TransitionError};

closed_tag! {
    pub enum EventStatus {
        Upcoming => ("upcoming", "Upcoming", Blue, CalendarDays),
        Ongoing => ("ongoing", "Ongoing", Green, Clock),
        Completed => ("completed", "Completed", Gray, CheckCircle),
        Cancelled => ("cancelled", "Cancelled", Red, XCircle),
    }
}

closed_tag! {
    pub enum EventType {
        Match => ("match", "Match", Green, Trophy),
        Training => ("training", "Training", Blue, Target),
        Meeting => ("meeting", "Meeting", Purple, Users),
        Tournament => ("tournament", "Tournament", Red, Trophy),
        Social => ("social", "Social", Yellow, Heart),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub location: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub attendees: u32,
    /// `None` for events without a head count limit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_attendees: Option<u32>,
    pub organizer: String,
    pub status: EventStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventForm {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub date: String,
    pub time: String,
    pub location: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    #[serde(default)]
    pub max_attendees: Option<u32>,
    pub organizer: String,
}

impl Event {
    pub fn cancel(&mut self) -> Result<(), TransitionError> {
        match self.status {
            EventStatus::Upcoming | EventStatus::Ongoing => {
                self.status = EventStatus::Cancelled;
                Ok(())
            }
            other => Err(TransitionError::new("cancel", other.code())),
        }
    }
}

impl Record for Event {
    fn id(&self) -> RecordId {
        self.id
    }

    fn record_index() -> &'static str {
        "a011"
    }

    fn collection_name() -> &'static str {
        "events"
    }

    fn element_name() -> &'static str {
        "Event"
    }

    fn list_name() -> &'static str {
        "Events"
    }
}

impl EditableRecord for Event {
    type Form = EventForm;

    fn create_from_form(id: RecordId, form: EventForm) -> Self {
        Self {
            id,
            title: form.title,
            description: form.description,
            date: form.date,
            time: form.time,
            location: form.location,
            event_type: form.event_type,
            attendees: 0,
            max_attendees: form.max_attendees,
            organizer: form.organizer,
            status: EventStatus::Upcoming,
        }
    }

    fn merge_form(original: &Self, form: EventForm) -> Self {
        Self {
            attendees: original.attendees,
            status: original.status,
            ..Self::create_from_form(original.id, form)
        }
    }

    fn to_form(&self) -> EventForm {
        EventForm {
            title: self.title.clone(),
            description: self.description.clone(),
            date: self.date.clone(),
            time: self.time.clone(),
            location: self.location.clone(),
            event_type: self.event_type,
            max_attendees: self.max_attendees,
            organizer: self.organizer.clone(),
        }
    }
}

impl Filterable for Event {
    type Key = EventStatus;

    fn filter_key(&self) -> EventStatus {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a011_event::seed;
    use crate::shared::record::{Confirmation, DeleteOutcome, ModalEditor, RecordStore};

    #[test]
    fn test_cancel_only_before_completion() {
        let mut event = seed::events().remove(0);
        event.cancel().unwrap();
        assert_eq!(event.status, EventStatus::Cancelled);
        assert!(event.cancel().is_err());
    }

    #[test]
    fn test_edit_keeps_head_count() {
        let mut store = RecordStore::new(seed::events());
        let meeting = store.records()[0].clone();
        let mut form = meeting.to_form();
        form.max_attendees = Some(40);

        let mut editor = ModalEditor::new();
        editor.open_edit(meeting);
        editor.save(form, &mut store).unwrap();
        assert_eq!(store.records()[0].attendees, 25);
        assert_eq!(store.records()[0].max_attendees, Some(40));
    }

    #[test]
    fn test_delete_then_create_does_not_reuse_id() {
        let mut store = RecordStore::new(seed::events());
        let last = store.records()[1].id;
        assert_eq!(store.delete(last, Confirmation::Accepted), DeleteOutcome::Deleted);
        assert!(store.get(last).is_none());

        let mut editor = ModalEditor::new();
        editor.open_new();
        let form = seed::events()[1].to_form();
        let id = editor.save(form, &mut store).unwrap().id();
        assert!(id > last);
        assert_eq!(store.get(id).map(|e| e.attendees), Some(0));
    }
}
