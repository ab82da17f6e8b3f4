use super::aggregate::Assessment;
use crate::shared::record::{sum_where, Summarize, SummaryCard, SummaryValue, Tone};

impl Summarize for Assessment {
    fn summary(records: &[Self]) -> Vec<SummaryCard> {
        let total = sum_where(records, |_| true, |a| a.overall_rating as i64);
        let average = if records.is_empty() {
            0.0
        } else {
            total as f64 / records.len() as f64
        };
        vec![
            SummaryCard::count("assessments", "Assessments", records.len(), Tone::Blue),
            SummaryCard::new(
                "average_rating",
                "Average Rating",
                SummaryValue::Decimal {
                    value: average,
                    decimals: 1,
                },
                Tone::Yellow,
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a005_assessment::seed;
    use crate::domain::common::RecordId;
    use crate::shared::record::{EditableRecord, RecordStore};

    #[test]
    fn test_average_rating() {
        let mut store = RecordStore::new(seed::assessments());
        let mut form = store.records()[0].to_form();
        form.player_name = "Grace Wanjiku".into();
        form.overall_rating = 9;
        store.insert_new(|id| Assessment::create_from_form(id, form));

        let cards = Assessment::summary(store.records());
        assert_eq!(cards[0].display, "2");
        assert_eq!(cards[1].display, "8.5");
        assert!(store.get(RecordId::new(2)).is_some());
    }

    #[test]
    fn test_average_of_nothing() {
        assert_eq!(Assessment::summary(&[])[1].display, "0.0");
    }
}
