use serde::{Deserialize, Serialize};

use crate::shared::record::{closed_tag, Filterable, Icon, Tag, Tone};

closed_tag! {
    pub enum ReportCategory {
        Players => ("Players", "Players", Blue, Users),
        Training => ("Training", "Training", Green, Calendar),
        Matches => ("Matches", "Matches", Orange, Trophy),
        Finance => ("Finance", "Finance", Purple, CreditCard),
        Analytics => ("Analytics", "Analytics", Red, BarChart),
    }
}

closed_tag! {
    /// Report identifier. The label is the display name used for the file.
    pub enum ReportKind {
        PlayerRoster => ("player-roster", "Player Roster", Blue, Users),
        AttendanceReport => ("attendance-report", "Attendance Report", Green, Calendar),
        MatchResults => ("match-results", "Match Results", Orange, Trophy),
        FinancialSummary => ("financial-summary", "Financial Summary", Purple, CreditCard),
        PerformanceAnalytics => ("performance-analytics", "Performance Analytics", Red, BarChart),
    }
}

impl ReportKind {
    pub fn description(&self) -> &'static str {
        match self {
            ReportKind::PlayerRoster => {
                "Complete list of all registered players with contact information"
            }
            ReportKind::AttendanceReport => {
                "Training and match attendance statistics by player and group"
            }
            ReportKind::MatchResults => "Comprehensive match results and statistics for all teams",
            ReportKind::FinancialSummary => "Revenue, expenses, and outstanding fees summary",
            ReportKind::PerformanceAnalytics => {
                "Player performance metrics and improvement tracking"
            }
        }
    }

    pub fn category(&self) -> ReportCategory {
        match self {
            ReportKind::PlayerRoster => ReportCategory::Players,
            ReportKind::AttendanceReport => ReportCategory::Training,
            ReportKind::MatchResults => ReportCategory::Matches,
            ReportKind::FinancialSummary => ReportCategory::Finance,
            ReportKind::PerformanceAnalytics => ReportCategory::Analytics,
        }
    }
}

/// Card on the reports page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportDefinition {
    pub id: ReportKind,
    pub name: String,
    pub description: String,
    pub category: ReportCategory,
    pub icon: Icon,
    pub tone: Tone,
}

impl From<ReportKind> for ReportDefinition {
    fn from(kind: ReportKind) -> Self {
        Self {
            id: kind,
            name: kind.label().to_string(),
            description: kind.description().to_string(),
            category: kind.category(),
            icon: kind.icon(),
            tone: kind.tone(),
        }
    }
}

impl Filterable for ReportDefinition {
    type Key = ReportCategory;

    fn filter_key(&self) -> ReportCategory {
        self.category
    }
}

pub fn catalog() -> Vec<ReportDefinition> {
    ReportKind::all()
        .iter()
        .copied()
        .map(ReportDefinition::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::record::{filter_view, FilterKey};

    #[test]
    fn test_catalog_order_and_names() {
        let names: Vec<_> = catalog().into_iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec![
                "Player Roster",
                "Attendance Report",
                "Match Results",
                "Financial Summary",
                "Performance Analytics"
            ]
        );
    }

    #[test]
    fn test_category_filter() {
        let key = FilterKey::<ReportCategory>::parse("Finance").unwrap();
        let finance = filter_view(&catalog(), key, |r| r.filter_key());
        assert_eq!(finance.len(), 1);
        assert_eq!(finance[0].id, ReportKind::FinancialSummary);
        assert_eq!(finance[0].tone, Tone::Purple);

        let all = filter_view(&catalog(), FilterKey::All, |r| r.filter_key());
        assert_eq!(all.len(), 5);
    }

    #[test]
    fn test_definition_json() {
        let json = serde_json::to_value(ReportDefinition::from(ReportKind::MatchResults)).unwrap();
        assert_eq!(json["id"], "match-results");
        assert_eq!(json["category"], "Matches");
        assert_eq!(json["icon"], "trophy");
    }
}
