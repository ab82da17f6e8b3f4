use super::aggregate::{Trial, TrialStatus};
use crate::domain::a001_player::Position;
use crate::domain::common::RecordId;

pub fn trials() -> Vec<Trial> {
    vec![
        Trial {
            id: RecordId::new(1),
            name: "David Mwangi".into(),
            age: 15,
            position: Position::Midfielder,
            contact_number: "+254712345678".into(),
            trial_date: "2024-12-16".into(),
            location: "Main Field A".into(),
            status: TrialStatus::Scheduled,
            rating: None,
            notes: None,
            scout: "James Kiprotich".into(),
        },
        Trial {
            id: RecordId::new(2),
            name: "Sarah Njoki".into(),
            age: 14,
            position: Position::Forward,
            contact_number: "+254798765432".into(),
            trial_date: "2024-12-14".into(),
            location: "Training Ground".into(),
            status: TrialStatus::Completed,
            rating: Some(8),
            notes: Some("Excellent ball control and finishing. Shows great potential.".into()),
            scout: "Mary Wanjiku".into(),
        },
        Trial {
            id: RecordId::new(3),
            name: "Kevin Ouma".into(),
            age: 16,
            position: Position::Defender,
            contact_number: "+254711223344".into(),
            trial_date: "2024-12-12".into(),
            location: "Main Field B".into(),
            status: TrialStatus::Accepted,
            rating: Some(9),
            notes: Some("Outstanding defensive skills, good leadership qualities.".into()),
            scout: "James Kiprotich".into(),
        },
    ]
}
