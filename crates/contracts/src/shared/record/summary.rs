use serde::{Deserialize, Serialize};

use super::Tone;
use crate::shared::format::format_number;

/// Value of a summary card, with enough shape for the client to format it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SummaryValue {
    Count { value: usize },
    Money { currency: String, amount: i64 },
    Percent { value: i64 },
    Decimal { value: f64, decimals: u8 },
}

impl SummaryValue {
    pub fn display(&self) -> String {
        match self {
            SummaryValue::Count { value } => value.to_string(),
            SummaryValue::Money { currency, amount } => {
                format!("{} {}", currency, format_number(*amount))
            }
            SummaryValue::Percent { value } => format!("{}%", value),
            SummaryValue::Decimal { value, decimals } => {
                format!("{:.*}", *decimals as usize, value)
            }
        }
    }
}

/// One dashboard card of a page, always computed over the whole collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryCard {
    pub id: String,
    pub label: String,
    pub value: SummaryValue,
    pub display: String,
    pub tone: Tone,
}

impl SummaryCard {
    pub fn new(id: &str, label: &str, value: SummaryValue, tone: Tone) -> Self {
        let display = value.display();
        Self {
            id: id.to_string(),
            label: label.to_string(),
            value,
            display,
            tone,
        }
    }

    pub fn count(id: &str, label: &str, value: usize, tone: Tone) -> Self {
        Self::new(id, label, SummaryValue::Count { value }, tone)
    }

    pub fn percent(id: &str, label: &str, value: i64, tone: Tone) -> Self {
        Self::new(id, label, SummaryValue::Percent { value }, tone)
    }
}

/// Record type that has summary cards on its page.
pub trait Summarize: Sized {
    fn summary(records: &[Self]) -> Vec<SummaryCard>;
}

pub fn count_where<R>(records: &[R], predicate: impl Fn(&R) -> bool) -> usize {
    records.iter().filter(|record| predicate(record)).count()
}

/// Totals `value` over matching records, clamping at the `i64` bounds.
pub fn sum_where<R>(
    records: &[R],
    predicate: impl Fn(&R) -> bool,
    value: impl Fn(&R) -> i64,
) -> i64 {
    records
        .iter()
        .filter(|record| predicate(record))
        .map(value)
        .fold(0i64, i64::saturating_add)
}
