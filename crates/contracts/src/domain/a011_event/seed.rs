use super::aggregate::{Event, EventStatus, EventType};
use crate::domain::common::RecordId;

pub fn events() -> Vec<Event> {
    vec![
        Event {
            id: RecordId::new(1),
            title: "Parent-Coach Meeting".into(),
            description: "Monthly meeting to discuss player progress and upcoming events".into(),
            date: "2024-12-20".into(),
            time: "18:00".into(),
            location: "Academy Conference Room".into(),
            event_type: EventType::Meeting,
            attendees: 25,
            max_attendees: Some(30),
            organizer: "John Mwangi".into(),
            status: EventStatus::Upcoming,
        },
        Event {
            id: RecordId::new(2),
            title: "Christmas Tournament".into(),
            description: "Annual Christmas tournament featuring all age groups".into(),
            date: "2024-12-23".into(),
            time: "09:00".into(),
            location: "Main Stadium".into(),
            event_type: EventType::Tournament,
            attendees: 150,
            max_attendees: Some(200),
            organizer: "Mary Wanjiku".into(),
            status: EventStatus::Upcoming,
        },
    ]
}
