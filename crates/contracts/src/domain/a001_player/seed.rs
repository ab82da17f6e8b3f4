use super::aggregate::{Player, PlayerStatus, Position};
use crate::domain::common::RecordId;

pub fn players() -> Vec<Player> {
    vec![
        Player {
            id: RecordId::new(1),
            name: "John Ochieng".into(),
            age: 16,
            category: "U15".into(),
            position: Position::Forward,
            guardian: "Mary Ochieng".into(),
            phone: "+254712345678".into(),
            join_date: "2024-01-15".into(),
            status: PlayerStatus::Active,
        },
        Player {
            id: RecordId::new(2),
            name: "Grace Wanjiku".into(),
            age: 14,
            category: "U15".into(),
            position: Position::Midfielder,
            guardian: "Peter Wanjiku".into(),
            phone: "+254798765432".into(),
            join_date: "2024-02-20".into(),
            status: PlayerStatus::Active,
        },
        Player {
            id: RecordId::new(3),
            name: "Michael Kamau".into(),
            age: 17,
            category: "U20".into(),
            position: Position::Goalkeeper,
            guardian: "Susan Kamau".into(),
            phone: "+254711223344".into(),
            join_date: "2023-09-10".into(),
            status: PlayerStatus::Injured,
        },
    ]
}
