use serde::{Deserialize, Serialize};

use crate::domain::common::{Record, RecordId};
use crate::shared::record::EditableRecord;

/// Coach's evaluation of one player. Ratings are on a 1..=10 scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub id: RecordId,
    pub player_name: String,
    pub category: String,
    pub assessment_type: String,
    pub date: String,
    pub coach: String,
    pub overall_rating: u8,
    pub technical: u8,
    pub tactical: u8,
    pub physical: u8,
    pub mental: u8,
    pub notes: String,
}

/// Every field of an assessment is editable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentForm {
    pub player_name: String,
    pub category: String,
    pub assessment_type: String,
    pub date: String,
    pub coach: String,
    #[serde(default)]
    pub overall_rating: u8,
    #[serde(default)]
    pub technical: u8,
    #[serde(default)]
    pub tactical: u8,
    #[serde(default)]
    pub physical: u8,
    #[serde(default)]
    pub mental: u8,
    #[serde(default)]
    pub notes: String,
}

impl Record for Assessment {
    fn id(&self) -> RecordId {
        self.id
    }

    fn record_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "assessments"
    }

    fn element_name() -> &'static str {
        "Assessment"
    }

    fn list_name() -> &'static str {
        "Assessments"
    }
}

impl EditableRecord for Assessment {
    type Form = AssessmentForm;

    fn create_from_form(id: RecordId, form: AssessmentForm) -> Self {
        Self {
            id,
            player_name: form.player_name,
            category: form.category,
            assessment_type: form.assessment_type,
            date: form.date,
            coach: form.coach,
            overall_rating: form.overall_rating,
            technical: form.technical,
            tactical: form.tactical,
            physical: form.physical,
            mental: form.mental,
            notes: form.notes,
        }
    }

    fn merge_form(original: &Self, form: AssessmentForm) -> Self {
        Self::create_from_form(original.id, form)
    }

    fn to_form(&self) -> AssessmentForm {
        AssessmentForm {
            player_name: self.player_name.clone(),
            category: self.category.clone(),
            assessment_type: self.assessment_type.clone(),
            date: self.date.clone(),
            coach: self.coach.clone(),
            overall_rating: self.overall_rating,
            technical: self.technical,
            tactical: self.tactical,
            physical: self.physical,
            mental: self.mental,
            notes: self.notes.clone(),
        }
    }
}
