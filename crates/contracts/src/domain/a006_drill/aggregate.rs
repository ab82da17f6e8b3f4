use serde::{Deserialize, Serialize};

use crate::domain::common::{Record, RecordId};
use crate::shared::record::{closed_tag, EditableRecord, Filterable};

closed_tag! {
    /// Drill library sections. Codes are capitalised as shown on the tabs.
    pub enum DrillCategory {
        Technical => ("Technical", "Technical", Blue, Target),
        Tactical => ("Tactical", "Tactical", Purple, Target),
        Physical => ("Physical", "Physical", Orange, Heart),
        Mental => ("Mental", "Mental", Green, Star),
    }
}

closed_tag! {
    pub enum Difficulty {
        Beginner => ("beginner", "Beginner", Green, Circle),
        Intermediate => ("intermediate", "Intermediate", Yellow, Circle),
        Advanced => ("advanced", "Advanced", Red, Circle),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Drill {
    pub id: RecordId,
    pub name: String,
    pub category: DrillCategory,
    /// Minutes
    pub duration: u32,
    pub difficulty: Difficulty,
    pub equipment: String,
    pub description: String,
    pub objectives: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrillForm {
    pub name: String,
    pub category: DrillCategory,
    #[serde(default)]
    pub duration: u32,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub equipment: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub objectives: String,
}

impl Record for Drill {
    fn id(&self) -> RecordId {
        self.id
    }

    fn record_index() -> &'static str {
        "a006"
    }

    fn collection_name() -> &'static str {
        "drills"
    }

    fn element_name() -> &'static str {
        "Drill"
    }

    fn list_name() -> &'static str {
        "Drills"
    }
}

impl EditableRecord for Drill {
    type Form = DrillForm;

    fn create_from_form(id: RecordId, form: DrillForm) -> Self {
        Self {
            id,
            name: form.name,
            category: form.category,
            duration: form.duration,
            difficulty: form.difficulty,
            equipment: form.equipment,
            description: form.description,
            objectives: form.objectives,
        }
    }

    fn merge_form(original: &Self, form: DrillForm) -> Self {
        Self::create_from_form(original.id, form)
    }

    fn to_form(&self) -> DrillForm {
        DrillForm {
            name: self.name.clone(),
            category: self.category,
            duration: self.duration,
            difficulty: self.difficulty,
            equipment: self.equipment.clone(),
            description: self.description.clone(),
            objectives: self.objectives.clone(),
        }
    }
}

impl Filterable for Drill {
    type Key = DrillCategory;

    fn filter_key(&self) -> DrillCategory {
        self.category
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a006_drill::seed;
    use crate::shared::record::{classify, tab_counts, FilterKey, Tag, Tone};

    #[test]
    fn test_category_tabs_use_capitalised_codes() {
        let tabs = tab_counts(&seed::drills(), |d: &Drill| d.category);
        let keys: Vec<_> = tabs.iter().map(|t| (t.key.as_str(), t.count)).collect();
        assert_eq!(
            keys,
            vec![
                ("all", 2),
                ("Technical", 1),
                ("Tactical", 1),
                ("Physical", 0),
                ("Mental", 0)
            ]
        );
        assert_eq!(
            FilterKey::<DrillCategory>::parse("Tactical"),
            Ok(FilterKey::Only(DrillCategory::Tactical))
        );
    }

    #[test]
    fn test_difficulty_colours() {
        assert_eq!(Difficulty::Beginner.tone(), Tone::Green);
        assert_eq!(classify::<Difficulty>("expert").tone, Tone::Gray);
    }
}
