use super::aggregate::{TrainingSession, TrainingStatus};
use crate::shared::format::round_percent;
use crate::shared::record::{count_where, sum_where, Summarize, SummaryCard, Tone};

impl Summarize for TrainingSession {
    fn summary(records: &[Self]) -> Vec<SummaryCard> {
        let attended = sum_where(records, |_| true, |s| s.attendees as i64);
        let capacity = sum_where(records, |_| true, |s| s.max_attendees as i64);
        vec![
            SummaryCard::count(
                "scheduled",
                "Scheduled",
                count_where(records, |s| s.status == TrainingStatus::Scheduled),
                Tone::Blue,
            ),
            SummaryCard::count(
                "completed",
                "Completed",
                count_where(records, |s| s.status == TrainingStatus::Completed),
                Tone::Green,
            ),
            SummaryCard::percent(
                "attendance",
                "Attendance",
                round_percent(attended, capacity),
                Tone::Purple,
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_training_session::seed;

    #[test]
    fn test_training_summary() {
        let cards = TrainingSession::summary(&seed::sessions());
        let shown: Vec<_> = cards.iter().map(|c| c.display.clone()).collect();
        // 55 of 61 places filled
        assert_eq!(shown, vec!["2", "1", "90%"]);
    }
}
