use super::aggregate::{MedicalRecord, MedicalStatus};
use crate::shared::record::{count_where, Summarize, SummaryCard, Tone};

impl Summarize for MedicalRecord {
    fn summary(records: &[Self]) -> Vec<SummaryCard> {
        vec![
            SummaryCard::count(
                "active_injuries",
                "Active Injuries",
                count_where(records, MedicalRecord::is_active_injury),
                Tone::Red,
            ),
            SummaryCard::count(
                "recovering",
                "Recovering",
                count_where(records, |r| r.status == MedicalStatus::Recovering),
                Tone::Yellow,
            ),
            SummaryCard::count(
                "scheduled_checkups",
                "Scheduled Checkups",
                count_where(records, MedicalRecord::is_scheduled_checkup),
                Tone::Blue,
            ),
        ]
    }
}
