use super::aggregate::{Trial, TrialStatus};
use crate::shared::format::round_percent;
use crate::shared::record::{count_where, Summarize, SummaryCard, Tone};

impl Summarize for Trial {
    /// Success rate is accepted over every evaluated trial
    fn summary(records: &[Self]) -> Vec<SummaryCard> {
        let accepted = count_where(records, |t| t.status == TrialStatus::Accepted);
        let evaluated = count_where(records, |t| t.status.is_evaluated());
        vec![
            SummaryCard::count(
                "scheduled",
                "Scheduled",
                count_where(records, |t| t.status == TrialStatus::Scheduled),
                Tone::Blue,
            ),
            SummaryCard::count(
                "completed",
                "Completed",
                count_where(records, |t| t.status == TrialStatus::Completed),
                Tone::Yellow,
            ),
            SummaryCard::count("accepted", "Accepted", accepted, Tone::Green),
            SummaryCard::percent(
                "success_rate",
                "Success Rate",
                round_percent(accepted as i64, evaluated as i64),
                Tone::Purple,
            ),
        ]
    }
}
