use super::aggregate::{Player, PlayerStatus};
use crate::shared::record::{count_where, Summarize, SummaryCard, Tone};

impl Summarize for Player {
    fn summary(records: &[Self]) -> Vec<SummaryCard> {
        vec![
            SummaryCard::count("total", "Total Players", records.len(), Tone::Blue),
            SummaryCard::count(
                "active",
                "Active",
                count_where(records, |p| p.status == PlayerStatus::Active),
                Tone::Green,
            ),
            SummaryCard::count(
                "injured",
                "Injured",
                count_where(records, |p| p.status == PlayerStatus::Injured),
                Tone::Red,
            ),
        ]
    }
}
