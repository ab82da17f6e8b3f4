use serde::{Deserialize, Serialize};

use crate::domain::common::{Record, RecordId};
use crate::shared::record::{closed_tag, EditableRecord, Filterable, Tag, TransitionError};

closed_tag! {
    pub enum MatchStatus {
        Scheduled => ("scheduled", "Scheduled", Blue, Calendar),
        Live => ("live", "Live", Green, Clock),
        Completed => ("completed", "Completed", Gray, CheckCircle),
    }
}

closed_tag! {
    pub enum MatchType {
        Friendly => ("friendly", "Friendly", Yellow, Users),
        League => ("league", "League", Purple, Trophy),
        Tournament => ("tournament", "Tournament", Red, Trophy),
    }
}

/// Fixture of one academy team against an opponent.
///
/// Scores are the academy's (`home_score`) and the opponent's (`away_score`)
/// regardless of venue; they are set once the match is completed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: RecordId,
    pub title: String,
    pub date: String,
    pub time: String,
    pub opponent: String,
    pub location: String,
    pub category: String,
    #[serde(rename = "type")]
    pub match_type: MatchType,
    pub status: MatchStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_score: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub away_score: Option<u32>,
    pub attendance: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchForm {
    pub title: String,
    pub date: String,
    pub time: String,
    pub opponent: String,
    pub location: String,
    pub category: String,
    #[serde(rename = "type")]
    pub match_type: MatchType,
}

/// Final score entered after the whistle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub home_score: u32,
    pub away_score: u32,
    #[serde(default)]
    pub attendance: u32,
}

impl Match {
    pub fn is_won(&self) -> bool {
        matches!(
            (self.status, self.home_score, self.away_score),
            (MatchStatus::Completed, Some(home), Some(away)) if home > away
        )
    }

    pub fn kick_off(&mut self) -> Result<(), TransitionError> {
        if self.status != MatchStatus::Scheduled {
            return Err(TransitionError::new("kick off", self.status.code()));
        }
        self.status = MatchStatus::Live;
        Ok(())
    }

    /// Completes a scheduled or live match with its final score.
    pub fn record_result(&mut self, result: MatchResult) -> Result<(), TransitionError> {
        if self.status == MatchStatus::Completed {
            return Err(TransitionError::new("record a result for", self.status.code()));
        }
        self.status = MatchStatus::Completed;
        self.home_score = Some(result.home_score);
        self.away_score = Some(result.away_score);
        self.attendance = result.attendance;
        Ok(())
    }
}

impl Record for Match {
    fn id(&self) -> RecordId {
        self.id
    }

    fn record_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "matches"
    }

    fn element_name() -> &'static str {
        "Match"
    }

    fn list_name() -> &'static str {
        "Matches"
    }
}

impl EditableRecord for Match {
    type Form = MatchForm;

    fn create_from_form(id: RecordId, form: MatchForm) -> Self {
        Self {
            id,
            title: form.title,
            date: form.date,
            time: form.time,
            opponent: form.opponent,
            location: form.location,
            category: form.category,
            match_type: form.match_type,
            status: MatchStatus::Scheduled,
            home_score: None,
            away_score: None,
            attendance: 0,
        }
    }

    fn merge_form(original: &Self, form: MatchForm) -> Self {
        Self {
            status: original.status,
            home_score: original.home_score,
            away_score: original.away_score,
            attendance: original.attendance,
            ..Self::create_from_form(original.id, form)
        }
    }

    fn to_form(&self) -> MatchForm {
        MatchForm {
            title: self.title.clone(),
            date: self.date.clone(),
            time: self.time.clone(),
            opponent: self.opponent.clone(),
            location: self.location.clone(),
            category: self.category.clone(),
            match_type: self.match_type,
        }
    }
}

impl Filterable for Match {
    type Key = MatchStatus;

    fn filter_key(&self) -> MatchStatus {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a004_match::seed;

    fn scheduled() -> Match {
        seed::matches().remove(0)
    }

    #[test]
    fn test_result_completes_match() {
        let mut fixture = scheduled();
        fixture.kick_off().unwrap();
        assert_eq!(fixture.status, MatchStatus::Live);

        fixture
            .record_result(MatchResult {
                home_score: 3,
                away_score: 0,
                attendance: 90,
            })
            .unwrap();
        assert_eq!(fixture.status, MatchStatus::Completed);
        assert!(fixture.is_won());
        assert_eq!(fixture.attendance, 90);
    }

    #[test]
    fn test_completed_match_rejects_transitions() {
        let mut played = seed::matches().remove(1);
        let err = played.kick_off().unwrap_err();
        assert_eq!(err.to_string(), "cannot kick off a record with status 'completed'");
        assert!(played
            .record_result(MatchResult {
                home_score: 0,
                away_score: 5,
                attendance: 0,
            })
            .is_err());
        assert_eq!(played.home_score, Some(2));
    }

    #[test]
    fn test_edit_keeps_score() {
        let played = seed::matches().remove(1);
        let mut form = played.to_form();
        form.location = "Kasarani Stadium".into();
        let merged = Match::merge_form(&played, form);
        assert_eq!(merged.home_score, Some(2));
        assert_eq!(merged.attendance, 150);
        assert_eq!(merged.location, "Kasarani Stadium");
    }

    #[test]
    fn test_type_serializes_as_type() {
        let json = serde_json::to_value(scheduled()).unwrap();
        assert_eq!(json["type"], "league");
        assert!(json.get("homeScore").is_none());
    }
}
