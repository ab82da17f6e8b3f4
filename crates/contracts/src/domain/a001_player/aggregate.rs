use serde::{Deserialize, Serialize};

use crate::domain::common::{Record, RecordId};
use crate::shared::record::{closed_tag, EditableRecord, Filterable};

closed_tag! {
    /// Availability of a registered player
    pub enum PlayerStatus {
        Active => ("active", "Active", Green, CheckCircle),
        Injured => ("injured", "Injured", Red, AlertTriangle),
    }
}

closed_tag! {
    /// Playing position, shared with scouting trials
    pub enum Position {
        Goalkeeper => ("goalkeeper", "Goalkeeper", Yellow, Circle),
        Defender => ("defender", "Defender", Blue, Circle),
        Midfielder => ("midfielder", "Midfielder", Green, Circle),
        Forward => ("forward", "Forward", Red, Circle),
    }
}

/// Academy player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: RecordId,
    pub name: String,
    pub age: u32,
    /// Age group, e.g. "U15"
    pub category: String,
    pub position: Position,
    pub guardian: String,
    pub phone: String,
    /// YYYY-MM-DD
    pub join_date: String,
    pub status: PlayerStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerForm {
    pub name: String,
    #[serde(default)]
    pub age: u32,
    pub category: String,
    pub position: Position,
    pub guardian: String,
    pub phone: String,
    pub join_date: String,
}

impl Record for Player {
    fn id(&self) -> RecordId {
        self.id
    }

    fn record_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "players"
    }

    fn element_name() -> &'static str {
        "Player"
    }

    fn list_name() -> &'static str {
        "Players"
    }
}

impl EditableRecord for Player {
    type Form = PlayerForm;

    fn create_from_form(id: RecordId, form: PlayerForm) -> Self {
        Self {
            id,
            name: form.name,
            age: form.age,
            category: form.category,
            position: form.position,
            guardian: form.guardian,
            phone: form.phone,
            join_date: form.join_date,
            status: PlayerStatus::Active,
        }
    }

    /// Status is maintained from medical records, not from the form
    fn merge_form(original: &Self, form: PlayerForm) -> Self {
        Self {
            status: original.status,
            ..Self::create_from_form(original.id, form)
        }
    }

    fn to_form(&self) -> PlayerForm {
        PlayerForm {
            name: self.name.clone(),
            age: self.age,
            category: self.category.clone(),
            position: self.position,
            guardian: self.guardian.clone(),
            phone: self.phone.clone(),
            join_date: self.join_date.clone(),
        }
    }
}

impl Filterable for Player {
    type Key = PlayerStatus;

    fn filter_key(&self) -> PlayerStatus {
        self.status
    }
}
