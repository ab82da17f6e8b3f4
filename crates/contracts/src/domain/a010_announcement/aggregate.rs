use serde::{Deserialize, Serialize};

use crate::domain::common::{Record, RecordId};
use crate::shared::record::{closed_tag, EditableRecord, Filterable, Tag, TransitionError};

closed_tag! {
    pub enum AnnouncementStatus {
        Draft => ("draft", "Draft", Gray, FileText),
        Published => ("published", "Published", Green, Megaphone),
    }
}

closed_tag! {
    pub enum Priority {
        Low => ("low", "Low", Green, Circle),
        Medium => ("medium", "Medium", Yellow, Circle),
        High => ("high", "High", Red, AlertTriangle),
    }
}

closed_tag! {
    pub enum Audience {
        Players => ("players", "Players", Blue, Users),
        Parents => ("parents", "Parents", Purple, Users),
        Coaches => ("coaches", "Coaches", Green, Users),
        Staff => ("staff", "Staff", Gray, Users),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub id: RecordId,
    pub title: String,
    pub content: String,
    pub priority: Priority,
    pub target_audience: Vec<Audience>,
    pub author: String,
    pub date: String,
    pub status: AnnouncementStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnouncementForm {
    pub title: String,
    pub content: String,
    pub priority: Priority,
    #[serde(default)]
    pub target_audience: Vec<Audience>,
    pub author: String,
    pub date: String,
}

impl Announcement {
    /// Publishes a draft, dating it `date`
    pub fn publish(&mut self, date: String) -> Result<(), TransitionError> {
        if self.status != AnnouncementStatus::Draft {
            return Err(TransitionError::new("publish", self.status.code()));
        }
        self.status = AnnouncementStatus::Published;
        self.date = date;
        Ok(())
    }

    pub fn is_addressed_to(&self, audience: Audience) -> bool {
        self.target_audience.contains(&audience)
    }
}

impl Record for Announcement {
    fn id(&self) -> RecordId {
        self.id
    }

    fn record_index() -> &'static str {
        "a010"
    }

    fn collection_name() -> &'static str {
        "announcements"
    }

    fn element_name() -> &'static str {
        "Announcement"
    }

    fn list_name() -> &'static str {
        "Announcements"
    }
}

impl EditableRecord for Announcement {
    type Form = AnnouncementForm;

    fn create_from_form(id: RecordId, form: AnnouncementForm) -> Self {
        Self {
            id,
            title: form.title,
            content: form.content,
            priority: form.priority,
            target_audience: form.target_audience,
            author: form.author,
            date: form.date,
            status: AnnouncementStatus::Draft,
        }
    }

    fn merge_form(original: &Self, form: AnnouncementForm) -> Self {
        Self {
            status: original.status,
            ..Self::create_from_form(original.id, form)
        }
    }

    fn to_form(&self) -> AnnouncementForm {
        AnnouncementForm {
            title: self.title.clone(),
            content: self.content.clone(),
            priority: self.priority,
            target_audience: self.target_audience.clone(),
            author: self.author.clone(),
            date: self.date.clone(),
        }
    }
}

impl Filterable for Announcement {
    type Key = AnnouncementStatus;

    fn filter_key(&self) -> AnnouncementStatus {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a010_announcement::seed;
    use crate::shared::record::{ModalEditor, RecordStore};

    fn draft_form() -> AnnouncementForm {
        AnnouncementForm {
            title: "Kit Collection".into(),
            content: "New kits are ready for collection at the front office.".into(),
            priority: Priority::Low,
            target_audience: vec![Audience::Players, Audience::Parents],
            author: "John Mwangi".into(),
            date: "2024-12-15".into(),
        }
    }

    #[test]
    fn test_new_announcement_is_draft_until_published() {
        let mut store = RecordStore::new(seed::announcements());
        let mut editor = ModalEditor::new();
        editor.open_new();
        let id = editor.save(draft_form(), &mut store).unwrap().id();

        let created = store.get_mut(id).unwrap();
        assert_eq!(created.status, AnnouncementStatus::Draft);
        created.publish("2024-12-16".into()).unwrap();
        assert_eq!(created.status, AnnouncementStatus::Published);
        assert_eq!(created.date, "2024-12-16");

        let err = created.publish("2024-12-17".into()).unwrap_err();
        assert_eq!(err.from, "published");
    }

    #[test]
    fn test_audience() {
        let announcements = seed::announcements();
        assert!(announcements[0].is_addressed_to(Audience::Coaches));
        assert!(!announcements[1].is_addressed_to(Audience::Coaches));
        let json = serde_json::to_value(&announcements[1]).unwrap();
        assert_eq!(json["targetAudience"], serde_json::json!(["players", "parents"]));
    }
}
