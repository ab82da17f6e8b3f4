use super::aggregate::{Difficulty, Drill, DrillCategory};
use crate::domain::common::RecordId;

pub fn drills() -> Vec<Drill> {
    vec![
        Drill {
            id: RecordId::new(1),
            name: "Passing Triangle".into(),
            category: DrillCategory::Technical,
            duration: 15,
            difficulty: Difficulty::Beginner,
            equipment: "Cones, Balls".into(),
            description: "Players form triangles and practice short passing with first touch"
                .into(),
            objectives: "Improve passing accuracy and first touch control".into(),
        },
        Drill {
            id: RecordId::new(2),
            name: "4v2 Possession".into(),
            category: DrillCategory::Tactical,
            duration: 20,
            difficulty: Difficulty::Intermediate,
            equipment: "Cones, Balls, Bibs".into(),
            description: "Four players keep possession against two defenders in a small area"
                .into(),
            objectives: "Develop quick decision making and ball retention under pressure".into(),
        },
    ]
}
