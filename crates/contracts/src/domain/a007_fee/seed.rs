use super::aggregate::{Fee, FeeStatus, PaymentMethod};
use crate::domain::common::RecordId;

pub fn fees() -> Vec<Fee> {
    vec![
        Fee {
            id: RecordId::new(1),
            player_name: "John Ochieng".into(),
            category: "U15".into(),
            amount: 5000,
            currency: "KSh".into(),
            due_date: "2024-12-15".into(),
            paid_date: None,
            status: FeeStatus::Pending,
            payment_method: None,
            payment_reference: None,
            guardian: "Mary Ochieng".into(),
            phone: "+254712345678".into(),
        },
        Fee {
            id: RecordId::new(2),
            player_name: "Grace Wanjiku".into(),
            category: "U15".into(),
            amount: 5000,
            currency: "KSh".into(),
            due_date: "2024-12-10".into(),
            paid_date: Some("2024-12-08".into()),
            status: FeeStatus::Paid,
            payment_method: Some(PaymentMethod::Mpesa),
            payment_reference: None,
            guardian: "Peter Wanjiku".into(),
            phone: "+254798765432".into(),
        },
        Fee {
            id: RecordId::new(3),
            player_name: "Michael Kamau".into(),
            category: "U20".into(),
            amount: 7500,
            currency: "KSh".into(),
            due_date: "2024-12-01".into(),
            paid_date: None,
            status: FeeStatus::Overdue,
            payment_method: None,
            payment_reference: None,
            guardian: "Susan Kamau".into(),
            phone: "+254711223344".into(),
        },
    ]
}
