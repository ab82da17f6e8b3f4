use serde::{Deserialize, Serialize};

use crate::domain::a001_player::Position;
use crate::domain::common::{Record, RecordId};
use crate::shared::record::{closed_tag, EditableRecord, Filterable, Tag, TransitionError};

closed_tag! {
    /// `scheduled -> completed -> accepted | rejected`
    pub enum TrialStatus {
        Scheduled => ("scheduled", "Scheduled", Blue, Calendar),
        Completed => ("completed", "Completed", Yellow, Eye),
        Accepted => ("accepted", "Accepted", Green, UserCheck),
        Rejected => ("rejected", "Rejected", Red, UserX),
    }
}

impl TrialStatus {
    /// The candidate has been seen by a scout
    pub fn is_evaluated(&self) -> bool {
        !matches!(self, TrialStatus::Scheduled)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Accept,
    Reject,
}

/// Scouting trial of a prospective player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trial {
    pub id: RecordId,
    pub name: String,
    pub age: u32,
    pub position: Position,
    pub contact_number: String,
    pub trial_date: String,
    pub location: String,
    pub status: TrialStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub scout: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrialForm {
    pub name: String,
    #[serde(default)]
    pub age: u32,
    pub position: Position,
    pub contact_number: String,
    pub trial_date: String,
    pub location: String,
    pub scout: String,
}

/// Scout's verdict after the trial session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialEvaluation {
    pub rating: u8,
    #[serde(default)]
    pub notes: String,
}

impl Trial {
    pub fn complete(&mut self, evaluation: TrialEvaluation) -> Result<(), TransitionError> {
        if self.status != TrialStatus::Scheduled {
            return Err(TransitionError::new("complete", self.status.code()));
        }
        self.status = TrialStatus::Completed;
        self.rating = Some(evaluation.rating);
        self.notes = Some(evaluation.notes);
        Ok(())
    }

    pub fn decide(&mut self, decision: Decision) -> Result<(), TransitionError> {
        if self.status != TrialStatus::Completed {
            let action = match decision {
                Decision::Accept => "accept",
                Decision::Reject => "reject",
            };
            return Err(TransitionError::new(action, self.status.code()));
        }
        self.status = match decision {
            Decision::Accept => TrialStatus::Accepted,
            Decision::Reject => TrialStatus::Rejected,
        };
        Ok(())
    }
}

impl Record for Trial {
    fn id(&self) -> RecordId {
        self.id
    }

    fn record_index() -> &'static str {
        "a009"
    }

    fn collection_name() -> &'static str {
        "trials"
    }

    fn element_name() -> &'static str {
        "Trial"
    }

    fn list_name() -> &'static str {
        "Trials"
    }
}

impl EditableRecord for Trial {
    type Form = TrialForm;

    fn create_from_form(id: RecordId, form: TrialForm) -> Self {
        Self {
            id,
            name: form.name,
            age: form.age,
            position: form.position,
            contact_number: form.contact_number,
            trial_date: form.trial_date,
            location: form.location,
            status: TrialStatus::Scheduled,
            rating: None,
            notes: None,
            scout: form.scout,
        }
    }

    fn merge_form(original: &Self, form: TrialForm) -> Self {
        Self {
            status: original.status,
            rating: original.rating,
            notes: original.notes.clone(),
            ..Self::create_from_form(original.id, form)
        }
    }

    fn to_form(&self) -> TrialForm {
        TrialForm {
            name: self.name.clone(),
            age: self.age,
            position: self.position,
            contact_number: self.contact_number.clone(),
            trial_date: self.trial_date.clone(),
            location: self.location.clone(),
            scout: self.scout.clone(),
        }
    }
}

impl Filterable for Trial {
    type Key = TrialStatus;

    fn filter_key(&self) -> TrialStatus {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a009_trial::seed;

    #[test]
    fn test_full_trial_lifecycle() {
        let mut trial = seed::trials().remove(0);
        assert!(trial.decide(Decision::Accept).is_err());

        trial
            .complete(TrialEvaluation {
                rating: 7,
                notes: "Composed on the ball".into(),
            })
            .unwrap();
        assert_eq!(trial.status, TrialStatus::Completed);
        assert_eq!(trial.rating, Some(7));

        trial.decide(Decision::Reject).unwrap();
        assert_eq!(trial.status, TrialStatus::Rejected);
    }

    #[test]
    fn test_decided_trial_is_final() {
        let mut accepted = seed::trials().remove(2);
        let err = accepted.decide(Decision::Reject).unwrap_err();
        assert_eq!(err.to_string(), "cannot reject a record with status 'accepted'");
        assert!(accepted
            .complete(TrialEvaluation {
                rating: 1,
                notes: String::new(),
            })
            .is_err());
        assert_eq!(accepted.rating, Some(9));
    }

    #[test]
    fn test_edit_keeps_evaluation() {
        let completed = seed::trials().remove(1);
        let mut form = completed.to_form();
        form.location = "Main Field A".into();
        let merged = Trial::merge_form(&completed, form);
        assert_eq!(merged.status, TrialStatus::Completed);
        assert_eq!(merged.rating, Some(8));
        assert_eq!(merged.notes, completed.notes);
    }
}
