use super::aggregate::Assessment;
use crate::domain::common::RecordId;

pub fn assessments() -> Vec<Assessment> {
    vec![Assessment {
        id: RecordId::new(1),
        player_name: "John Ochieng".into(),
        category: "U15".into(),
        assessment_type: "Monthly Review".into(),
        date: "2024-12-10".into(),
        coach: "Mary Wanjiku".into(),
        overall_rating: 8,
        technical: 8,
        tactical: 7,
        physical: 9,
        mental: 8,
        notes: "Excellent progress in technical skills. Needs improvement in tactical awareness."
            .into(),
    }]
}
