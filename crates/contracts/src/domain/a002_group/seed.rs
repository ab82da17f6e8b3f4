use super::aggregate::{Group, GroupStatus};
use crate::domain::common::RecordId;

pub fn groups() -> Vec<Group> {
    vec![
        Group {
            id: RecordId::new(1),
            name: "Lions Squad".into(),
            category: "U15".into(),
            coach: "Mary Wanjiku".into(),
            current_players: 18,
            max_players: 20,
            description: "Competitive U15 team focusing on technical development".into(),
            status: GroupStatus::Active,
        },
        Group {
            id: RecordId::new(2),
            name: "Eagles Team".into(),
            category: "U12".into(),
            coach: "James Kiprotich".into(),
            current_players: 15,
            max_players: 18,
            description: "Development squad for younger players".into(),
            status: GroupStatus::Active,
        },
    ]
}
