use super::aggregate::{Match, MatchStatus, MatchType};
use crate::domain::common::RecordId;

pub fn matches() -> Vec<Match> {
    vec![
        Match {
            id: RecordId::new(1),
            title: "Nairobi FC vs Kibera United".into(),
            date: "2024-12-16".into(),
            time: "15:00".into(),
            opponent: "Kibera United".into(),
            location: "Kasarani Stadium".into(),
            category: "U15".into(),
            match_type: MatchType::League,
            status: MatchStatus::Scheduled,
            home_score: None,
            away_score: None,
            attendance: 0,
        },
        Match {
            id: RecordId::new(2),
            title: "Nairobi FC vs Mathare FC".into(),
            date: "2024-12-14".into(),
            time: "16:30".into(),
            opponent: "Mathare FC".into(),
            location: "Home Ground".into(),
            category: "U20".into(),
            match_type: MatchType::Friendly,
            status: MatchStatus::Completed,
            home_score: Some(2),
            away_score: Some(1),
            attendance: 150,
        },
        Match {
            id: RecordId::new(3),
            title: "Nairobi FC vs Eastleigh FC".into(),
            date: "2024-12-18".into(),
            time: "14:00".into(),
            opponent: "Eastleigh FC".into(),
            location: "Away".into(),
            category: "U12".into(),
            match_type: MatchType::Tournament,
            status: MatchStatus::Scheduled,
            home_score: None,
            away_score: None,
            attendance: 0,
        },
    ]
}
