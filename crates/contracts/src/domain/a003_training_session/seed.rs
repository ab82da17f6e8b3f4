use super::aggregate::{TrainingSession, TrainingStatus};
use crate::domain::common::RecordId;

fn objectives(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn sessions() -> Vec<TrainingSession> {
    vec![
        TrainingSession {
            id: RecordId::new(1),
            title: "Technical Skills Development".into(),
            date: "2024-12-15".into(),
            time: "16:00".into(),
            duration: 90,
            category: "U15".into(),
            coach: "Mary Wanjiku".into(),
            location: "Main Field A".into(),
            objectives: objectives(&["Ball control", "Passing accuracy", "First touch"]),
            attendees: 18,
            max_attendees: 20,
            status: TrainingStatus::Scheduled,
        },
        TrainingSession {
            id: RecordId::new(2),
            title: "Tactical Formation Practice".into(),
            date: "2024-12-16".into(),
            time: "15:30".into(),
            duration: 120,
            category: "U20".into(),
            coach: "James Kiprotich".into(),
            location: "Main Field B".into(),
            objectives: objectives(&["4-3-3 Formation", "Pressing triggers", "Transition play"]),
            attendees: 22,
            max_attendees: 25,
            status: TrainingStatus::Scheduled,
        },
        TrainingSession {
            id: RecordId::new(3),
            title: "Fitness & Conditioning".into(),
            date: "2024-12-14".into(),
            time: "17:00".into(),
            duration: 60,
            category: "U12".into(),
            coach: "Sarah Muthoni".into(),
            location: "Training Ground".into(),
            objectives: objectives(&["Endurance building", "Agility drills", "Core strength"]),
            attendees: 15,
            max_attendees: 16,
            status: TrainingStatus::Completed,
        },
    ]
}
