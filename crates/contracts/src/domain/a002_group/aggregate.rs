use serde::{Deserialize, Serialize};

use crate::domain::common::{Record, RecordId};
use crate::shared::record::{closed_tag, EditableRecord, Filterable};

closed_tag! {
    pub enum GroupStatus {
        Active => ("active", "Active", Green, CheckCircle),
        Inactive => ("inactive", "Inactive", Gray, Circle),
    }
}

/// Training group (squad) of one age category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: RecordId,
    pub name: String,
    pub category: String,
    pub coach: String,
    pub current_players: u32,
    pub max_players: u32,
    pub description: String,
    pub status: GroupStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupForm {
    pub name: String,
    pub category: String,
    pub coach: String,
    #[serde(default)]
    pub max_players: u32,
    #[serde(default)]
    pub description: String,
}

impl Group {
    /// Free places left in the squad
    pub fn open_slots(&self) -> u32 {
        self.max_players.saturating_sub(self.current_players)
    }
}

impl Record for Group {
    fn id(&self) -> RecordId {
        self.id
    }

    fn record_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "groups"
    }

    fn element_name() -> &'static str {
        "Group"
    }

    fn list_name() -> &'static str {
        "Groups"
    }
}

impl EditableRecord for Group {
    type Form = GroupForm;

    fn create_from_form(id: RecordId, form: GroupForm) -> Self {
        Self {
            id,
            name: form.name,
            category: form.category,
            coach: form.coach,
            current_players: 0,
            max_players: form.max_players,
            description: form.description,
            status: GroupStatus::Active,
        }
    }

    fn merge_form(original: &Self, form: GroupForm) -> Self {
        Self {
            current_players: original.current_players,
            status: original.status,
            ..Self::create_from_form(original.id, form)
        }
    }

    fn to_form(&self) -> GroupForm {
        GroupForm {
            name: self.name.clone(),
            category: self.category.clone(),
            coach: self.coach.clone(),
            max_players: self.max_players,
            description: self.description.clone(),
        }
    }
}

impl Filterable for Group {
    type Key = GroupStatus;

    fn filter_key(&self) -> GroupStatus {
        self.status
    }
}
