use super::aggregate::{Match, MatchStatus};
use crate::shared::format::round_percent;
use crate::shared::record::{count_where, sum_where, Summarize, SummaryCard, Tone};

impl Summarize for Match {
    fn summary(records: &[Self]) -> Vec<SummaryCard> {
        let played = count_where(records, |m| m.status == MatchStatus::Completed);
        let wins = count_where(records, Match::is_won);
        let goals = sum_where(
            records,
            |m| m.status == MatchStatus::Completed,
            |m| m.home_score.unwrap_or(0) as i64,
        );
        vec![
            SummaryCard::count("played", "Played", played, Tone::Blue),
            SummaryCard::count("wins", "Wins", wins, Tone::Green),
            SummaryCard::count("goals", "Goals Scored", goals as usize, Tone::Orange),
            SummaryCard::percent(
                "win_rate",
                "Win Rate",
                round_percent(wins as i64, played as i64),
                Tone::Purple,
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a004_match::seed;

    #[test]
    fn test_match_summary() {
        let cards = Match::summary(&seed::matches());
        let shown: Vec<_> = cards.iter().map(|c| c.display.as_str()).collect();
        assert_eq!(shown, vec!["1", "1", "2", "100%"]);
    }

    #[test]
    fn test_no_matches_played() {
        let upcoming: Vec<_> = seed::matches()
            .into_iter()
            .filter(|m| m.status == MatchStatus::Scheduled)
            .collect();
        let cards = Match::summary(&upcoming);
        assert_eq!(cards[3].display, "0%");
    }
}
