use super::aggregate::Group;
use crate::shared::format::round_percent;
use crate::shared::record::{sum_where, Summarize, SummaryCard, Tone};

impl Summarize for Group {
    fn summary(records: &[Self]) -> Vec<SummaryCard> {
        let players = sum_where(records, |_| true, |g| g.current_players as i64);
        let capacity = sum_where(records, |_| true, |g| g.max_players as i64);
        vec![
            SummaryCard::count("groups", "Groups", records.len(), Tone::Blue),
            SummaryCard::count("players", "Players", players as usize, Tone::Green),
            SummaryCard::percent(
                "capacity_used",
                "Capacity Used",
                round_percent(players, capacity),
                Tone::Purple,
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_group::seed;

    #[test]
    fn test_capacity_used() {
        let cards = Group::summary(&seed::groups());
        assert_eq!(cards[1].display, "33");
        // 33 of 38 places
        assert_eq!(cards[2].display, "87%");
    }

    #[test]
    fn test_empty_collection() {
        let cards = Group::summary(&[]);
        assert_eq!(cards[0].display, "0");
        assert_eq!(cards[2].display, "0%");
    }
}
