use serde::{Deserialize, Serialize};

use crate::domain::common::{Record, RecordId};
use crate::shared::record::{closed_tag, EditableRecord, Filterable};

closed_tag! {
    pub enum MedicalStatus {
        Active => ("active", "Active", Red, AlertTriangle),
        Recovering => ("recovering", "Recovering", Yellow, Heart),
        Scheduled => ("scheduled", "Scheduled", Blue, Calendar),
        Cleared => ("cleared", "Cleared", Green, CheckCircle),
    }
}

closed_tag! {
    pub enum MedicalType {
        Injury => ("injury", "Injury", Red, AlertTriangle),
        Checkup => ("checkup", "Checkup", Blue, Heart),
        Treatment => ("treatment", "Treatment", Yellow, Heart),
        Clearance => ("clearance", "Clearance", Green, CheckCircle),
    }
}

/// Injury, checkup or treatment entry kept by the medical staff.
///
/// `player_id` is informational only; it is not checked against the player
/// collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalRecord {
    pub id: RecordId,
    pub player_id: RecordId,
    pub player_name: String,
    pub category: String,
    #[serde(rename = "type")]
    pub record_type: MedicalType,
    pub title: String,
    pub description: String,
    pub date: String,
    pub status: MedicalStatus,
    pub medical_staff: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_date: Option<String>,
}

/// Staff set the status directly, so it travels with the form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalForm {
    pub player_id: RecordId,
    pub player_name: String,
    pub category: String,
    #[serde(rename = "type")]
    pub record_type: MedicalType,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub date: String,
    pub status: MedicalStatus,
    pub medical_staff: String,
    #[serde(default)]
    pub return_date: Option<String>,
}

impl MedicalRecord {
    /// An injury that still keeps the player out of training
    pub fn is_active_injury(&self) -> bool {
        self.status == MedicalStatus::Active && self.record_type == MedicalType::Injury
    }

    pub fn is_scheduled_checkup(&self) -> bool {
        self.status == MedicalStatus::Scheduled && self.record_type == MedicalType::Checkup
    }
}

impl Record for MedicalRecord {
    fn id(&self) -> RecordId {
        self.id
    }

    fn record_index() -> &'static str {
        "a008"
    }

    fn collection_name() -> &'static str {
        "medical_records"
    }

    fn element_name() -> &'static str {
        "Medical record"
    }

    fn list_name() -> &'static str {
        "Medical records"
    }
}

impl EditableRecord for MedicalRecord {
    type Form = MedicalForm;

    fn create_from_form(id: RecordId, form: MedicalForm) -> Self {
        Self {
            id,
            player_id: form.player_id,
            player_name: form.player_name,
            category: form.category,
            record_type: form.record_type,
            title: form.title,
            description: form.description,
            date: form.date,
            status: form.status,
            medical_staff: form.medical_staff,
            return_date: form.return_date.filter(|d| !d.is_empty()),
        }
    }

    fn merge_form(original: &Self, form: MedicalForm) -> Self {
        Self::create_from_form(original.id, form)
    }

    fn to_form(&self) -> MedicalForm {
        MedicalForm {
            player_id: self.player_id,
            player_name: self.player_name.clone(),
            category: self.category.clone(),
            record_type: self.record_type,
            title: self.title.clone(),
            description: self.description.clone(),
            date: self.date.clone(),
            status: self.status,
            medical_staff: self.medical_staff.clone(),
            return_date: self.return_date.clone(),
        }
    }
}

impl Filterable for MedicalRecord {
    type Key = MedicalStatus;

    fn filter_key(&self) -> MedicalStatus {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a008_medical_record::seed;
    use crate::shared::record::{classify, DisplayToken, FilterKey, ModalEditor, RecordStore, Tag};

    #[test]
    fn test_seed_tags_classify() {
        for record in seed::records() {
            assert_ne!(classify::<MedicalStatus>(record.status.code()), DisplayToken::NEUTRAL);
            assert_ne!(classify::<MedicalType>(record.record_type.code()), DisplayToken::NEUTRAL);
        }
    }

    #[test]
    fn test_staff_can_clear_through_edit() {
        let mut store = RecordStore::new(seed::records());
        let hamstring = store.get(RecordId::new(3)).cloned().unwrap();
        let mut form = hamstring.to_form();
        form.status = MedicalStatus::Cleared;

        let mut editor = ModalEditor::new();
        editor.open_edit(hamstring);
        editor.save(form, &mut store).unwrap();

        assert_eq!(store.get(RecordId::new(3)).map(|r| r.status), Some(MedicalStatus::Cleared));
        assert_eq!(store.filtered(FilterKey::Only(MedicalStatus::Active)).len(), 0);
    }

    #[test]
    fn test_empty_return_date_is_dropped() {
        let mut form = seed::records()[1].to_form();
        form.return_date = Some(String::new());
        let record = MedicalRecord::create_from_form(RecordId::new(10), form);
        assert_eq!(record.return_date, None);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["type"], "checkup");
        assert!(json.get("returnDate").is_none());
    }
}
