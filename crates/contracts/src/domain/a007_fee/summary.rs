use super::aggregate::{Fee, FeeStatus};
use crate::shared::format::round_percent;
use crate::shared::record::{count_where, sum_where, Summarize, SummaryCard, SummaryValue, Tone};

/// Currency of the money cards. Amounts are summed as entered.
pub const ACADEMY_CURRENCY: &str = "KSh";

fn money(amount: i64) -> SummaryValue {
    SummaryValue::Money {
        currency: ACADEMY_CURRENCY.to_string(),
        amount,
    }
}

impl Fee {
    pub fn outstanding_total(records: &[Fee]) -> i64 {
        sum_where(records, |f| f.status.is_outstanding(), |f| f.amount)
    }

    pub fn collected_total(records: &[Fee]) -> i64 {
        sum_where(records, |f| f.status == FeeStatus::Paid, |f| f.amount)
    }
}

impl Summarize for Fee {
    fn summary(records: &[Self]) -> Vec<SummaryCard> {
        let outstanding = Fee::outstanding_total(records);
        let collected = Fee::collected_total(records);
        vec![
            SummaryCard::new("outstanding", "Outstanding", money(outstanding), Tone::Yellow),
            SummaryCard::new("collected", "Collected", money(collected), Tone::Green),
            SummaryCard::count(
                "overdue",
                "Overdue",
                count_where(records, |f| f.status == FeeStatus::Overdue),
                Tone::Red,
            ),
            SummaryCard::percent(
                "collection_rate",
                "Collection Rate",
                round_percent(collected, collected.saturating_add(outstanding)),
                Tone::Purple,
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a007_fee::seed;
    use crate::domain::common::RecordId;
    use crate::shared::record::{
        Confirmation, EditableRecord, FilterKey, ModalEditor, RecordStore, Tag,
    };

    #[test]
    fn test_fee_scenario() {
        let cards = Fee::summary(&seed::fees());
        assert_eq!(cards[0].value, money(12500));
        assert_eq!(cards[0].display, "KSh 12,500");
        assert_eq!(cards[1].value, money(5000));
        assert_eq!(cards[2].value, SummaryValue::Count { value: 1 });
        assert_eq!(cards[3].value, SummaryValue::Percent { value: 29 });
    }

    #[test]
    fn test_status_partition_covers_total() {
        let mut fees = seed::fees();
        fees.push(Fee {
            id: RecordId::new(9),
            amount: 1250,
            ..fees[0].clone()
        });
        let total: i64 = fees.iter().map(|f| f.amount).sum();
        let partition: i64 = FeeStatus::all()
            .iter()
            .map(|status| sum_where(&fees, |f| f.status == *status, |f| f.amount))
            .sum();
        assert_eq!(partition, total);
        assert_eq!(
            Fee::outstanding_total(&fees) + Fee::collected_total(&fees),
            total
        );
    }

    #[test]
    fn test_summary_ignores_active_filter() {
        let store = RecordStore::new(seed::fees());
        let paid_only = store.filtered(FilterKey::Only(FeeStatus::Paid));
        assert_eq!(paid_only.len(), 1);
        let cards = Fee::summary(store.records());
        assert_eq!(cards[0].display, "KSh 12,500");
        assert_eq!(cards[2].display, "1");
    }

    #[test]
    fn test_deleting_overdue_fee_updates_cards() {
        let mut store = RecordStore::new(seed::fees());
        store.delete(RecordId::new(3), Confirmation::Accepted);
        let cards = Fee::summary(store.records());
        assert_eq!(cards[0].display, "KSh 5,000");
        assert_eq!(cards[2].display, "0");
        assert_eq!(cards[3].display, "50%");
    }

    #[test]
    fn test_huge_amounts_do_not_overflow_totals() {
        let mut store = RecordStore::new(seed::fees());
        for _ in 0..2 {
            let mut form = store.records()[0].to_form();
            form.amount = i64::MAX;
            let mut editor = ModalEditor::<Fee>::new();
            editor.open_new();
            editor.save(form, &mut store).unwrap();
        }
        let cards = Fee::summary(store.records());
        assert_eq!(cards[0].value, money(i64::MAX));
        assert_eq!(cards[1].value, money(5000));
        assert_eq!(cards[3].display, "0%");
    }

    #[test]
    fn test_empty_collection_rate_is_zero() {
        let cards = Fee::summary(&[]);
        assert_eq!(cards[3].display, "0%");
    }
}
