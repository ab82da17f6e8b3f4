use super::aggregate::{Announcement, AnnouncementStatus, Audience, Priority};
use crate::domain::common::RecordId;

pub fn announcements() -> Vec<Announcement> {
    vec![
        Announcement {
            id: RecordId::new(1),
            title: "Training Schedule Update".into(),
            content: "Please note that this week's training sessions have been moved to the new field due to maintenance work.".into(),
            priority: Priority::High,
            target_audience: vec![Audience::Players, Audience::Parents, Audience::Coaches],
            author: "Mary Wanjiku".into(),
            date: "2024-12-14".into(),
            status: AnnouncementStatus::Published,
        },
        Announcement {
            id: RecordId::new(2),
            title: "End of Year Tournament".into(),
            content: "We are excited to announce our annual end-of-year tournament. Registration is now open.".into(),
            priority: Priority::Medium,
            target_audience: vec![Audience::Players, Audience::Parents],
            author: "John Mwangi".into(),
            date: "2024-12-12".into(),
            status: AnnouncementStatus::Published,
        },
    ]
}
