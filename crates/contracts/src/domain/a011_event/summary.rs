use super::aggregate::{Event, EventStatus};
use crate::shared::record::{count_where, sum_where, Summarize, SummaryCard, Tone};

impl Summarize for Event {
    fn summary(records: &[Self]) -> Vec<SummaryCard> {
        // cancelled events keep their sign-ups but are left out of the total
        let attendees = sum_where(
            records,
            |e| e.status != EventStatus::Cancelled,
            |e| e.attendees as i64,
        );
        vec![
            SummaryCard::count(
                "upcoming",
                "Upcoming",
                count_where(records, |e| e.status == EventStatus::Upcoming),
                Tone::Blue,
            ),
            SummaryCard::count("attendees", "Total Attendees", attendees as usize, Tone::Green),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a011_event::seed;

    #[test]
    fn test_event_cards() {
        let mut events = seed::events();
        let cards = Event::summary(&events);
        assert_eq!(cards[0].display, "2");
        assert_eq!(cards[1].display, "175");

        events[1].cancel().unwrap();
        let cards = Event::summary(&events);
        assert_eq!(cards[0].display, "1");
        assert_eq!(cards[1].display, "25");
    }
}
