use super::aggregate::{MedicalRecord, MedicalStatus, MedicalType};
use crate::domain::common::RecordId;

pub fn records() -> Vec<MedicalRecord> {
    vec![
        MedicalRecord {
            id: RecordId::new(1),
            player_id: RecordId::new(1),
            player_name: "John Ochieng".into(),
            category: "U15".into(),
            record_type: MedicalType::Injury,
            title: "Ankle Sprain".into(),
            description: "Minor ankle sprain during training. Player twisted ankle during drill."
                .into(),
            date: "2024-12-10".into(),
            status: MedicalStatus::Recovering,
            medical_staff: "Dr. Peter Kamau".into(),
            return_date: Some("2024-12-20".into()),
        },
        MedicalRecord {
            id: RecordId::new(2),
            player_id: RecordId::new(2),
            player_name: "Grace Wanjiku".into(),
            category: "U15".into(),
            record_type: MedicalType::Checkup,
            title: "Routine Medical Check".into(),
            description: "Annual fitness and health assessment.".into(),
            date: "2024-12-12".into(),
            status: MedicalStatus::Cleared,
            medical_staff: "Dr. Peter Kamau".into(),
            return_date: None,
        },
        MedicalRecord {
            id: RecordId::new(3),
            player_id: RecordId::new(3),
            player_name: "Michael Kamau".into(),
            category: "U20".into(),
            record_type: MedicalType::Injury,
            title: "Hamstring Strain".into(),
            description: "Grade 1 hamstring strain. Occurred during sprint training.".into(),
            date: "2024-12-08".into(),
            status: MedicalStatus::Active,
            medical_staff: "Dr. Peter Kamau".into(),
            return_date: Some("2024-12-25".into()),
        },
    ]
}
