use serde::{Deserialize, Serialize};

use crate::domain::common::{Record, RecordId};
use crate::shared::format::format_number;
use crate::shared::record::{closed_tag, EditableRecord, Filterable, Tag, TransitionError};

closed_tag! {
    /// Payment state of a fee. Declaration order is the tab order.
    pub enum FeeStatus {
        Pending => ("pending", "Pending", Yellow, Clock),
        Overdue => ("overdue", "Overdue", Red, AlertTriangle),
        Paid => ("paid", "Paid", Green, CheckCircle),
    }
}

impl FeeStatus {
    /// Still owed: counted in "Outstanding" and payable
    pub fn is_outstanding(&self) -> bool {
        matches!(self, FeeStatus::Pending | FeeStatus::Overdue)
    }
}

closed_tag! {
    pub enum PaymentMethod {
        Mpesa => ("M-PESA", "M-PESA", Green, CreditCard),
        BankTransfer => ("Bank Transfer", "Bank Transfer", Blue, CreditCard),
        Cash => ("Cash", "Cash", Yellow, CreditCard),
        PayPal => ("PayPal", "PayPal", Purple, CreditCard),
    }
}

/// Fee owed by a player's guardian
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fee {
    pub id: RecordId,
    pub player_name: String,
    pub category: String,
    /// Whole currency units
    pub amount: i64,
    pub currency: String,
    pub due_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_date: Option<String>,
    pub status: FeeStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_reference: Option<String>,
    pub guardian: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeForm {
    pub player_name: String,
    pub category: String,
    #[serde(default)]
    pub amount: i64,
    pub currency: String,
    pub due_date: String,
    pub guardian: String,
    pub phone: String,
}

/// "Record Payment" dialog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentForm {
    pub payment_method: PaymentMethod,
    pub paid_date: String,
    #[serde(default)]
    pub reference: Option<String>,
}

/// Reminder text addressed to the guardian. Nothing is delivered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub fee_id: RecordId,
    pub guardian: String,
    pub phone: String,
    pub message: String,
}

impl Fee {
    pub fn record_payment(&mut self, payment: PaymentForm) -> Result<(), TransitionError> {
        if !self.status.is_outstanding() {
            return Err(TransitionError::new("record a payment for", self.status.code()));
        }
        self.status = FeeStatus::Paid;
        self.paid_date = Some(payment.paid_date);
        self.payment_method = Some(payment.payment_method);
        self.payment_reference = payment.reference.filter(|r| !r.trim().is_empty());
        Ok(())
    }

    pub fn reminder(&self) -> Result<Reminder, TransitionError> {
        if !self.status.is_outstanding() {
            return Err(TransitionError::new("send a reminder for", self.status.code()));
        }
        let message = match self.status {
            FeeStatus::Overdue => format!(
                "{}'s fee of {} {} was due on {} and is overdue",
                self.player_name,
                self.currency,
                format_number(self.amount),
                self.due_date
            ),
            _ => format!(
                "{}'s fee of {} {} is due on {}",
                self.player_name,
                self.currency,
                format_number(self.amount),
                self.due_date
            ),
        };
        Ok(Reminder {
            fee_id: self.id,
            guardian: self.guardian.clone(),
            phone: self.phone.clone(),
            message,
        })
    }
}

impl Record for Fee {
    fn id(&self) -> RecordId {
        self.id
    }

    fn record_index() -> &'static str {
        "a007"
    }

    fn collection_name() -> &'static str {
        "fees"
    }

    fn element_name() -> &'static str {
        "Fee"
    }

    fn list_name() -> &'static str {
        "Fees"
    }
}

impl EditableRecord for Fee {
    type Form = FeeForm;

    fn create_from_form(id: RecordId, form: FeeForm) -> Self {
        Self {
            id,
            player_name: form.player_name,
            category: form.category,
            amount: form.amount,
            currency: form.currency,
            due_date: form.due_date,
            paid_date: None,
            status: FeeStatus::Pending,
            payment_method: None,
            payment_reference: None,
            guardian: form.guardian,
            phone: form.phone,
        }
    }

    /// Payment details only change through `record_payment`
    fn merge_form(original: &Self, form: FeeForm) -> Self {
        Self {
            status: original.status,
            paid_date: original.paid_date.clone(),
            payment_method: original.payment_method,
            payment_reference: original.payment_reference.clone(),
            ..Self::create_from_form(original.id, form)
        }
    }

    fn to_form(&self) -> FeeForm {
        FeeForm {
            player_name: self.player_name.clone(),
            category: self.category.clone(),
            amount: self.amount,
            currency: self.currency.clone(),
            due_date: self.due_date.clone(),
            guardian: self.guardian.clone(),
            phone: self.phone.clone(),
        }
    }
}

impl Filterable for Fee {
    type Key = FeeStatus;

    fn filter_key(&self) -> FeeStatus {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a007_fee::seed;
    use crate::shared::record::{
        classify, tab_counts, DisplayToken, FilterKey, ModalEditor, RecordStore,
    };

    fn payment() -> PaymentForm {
        PaymentForm {
            payment_method: PaymentMethod::Mpesa,
            paid_date: "2024-12-14".into(),
            reference: Some("QK12AB34".into()),
        }
    }

    #[test]
    fn test_every_seed_status_classifies() {
        for fee in seed::fees() {
            assert_ne!(classify::<FeeStatus>(fee.status.code()), DisplayToken::NEUTRAL);
        }
        assert_eq!(classify::<FeeStatus>("refunded"), DisplayToken::NEUTRAL);
    }

    #[test]
    fn test_tabs_follow_page_order() {
        let tabs = tab_counts(&seed::fees(), |f: &Fee| f.status);
        let keys: Vec<_> = tabs.iter().map(|t| (t.key.as_str(), t.count)).collect();
        assert_eq!(
            keys,
            vec![("all", 3), ("pending", 1), ("overdue", 1), ("paid", 1)]
        );
    }

    #[test]
    fn test_record_payment_marks_paid() {
        let mut fee = seed::fees().remove(2);
        assert_eq!(fee.status, FeeStatus::Overdue);
        fee.record_payment(payment()).unwrap();
        assert_eq!(fee.status, FeeStatus::Paid);
        assert_eq!(fee.paid_date.as_deref(), Some("2024-12-14"));
        assert_eq!(fee.payment_method, Some(PaymentMethod::Mpesa));
        assert_eq!(fee.payment_reference.as_deref(), Some("QK12AB34"));
    }

    #[test]
    fn test_paid_fee_rejects_payment_and_reminder() {
        let mut fee = seed::fees().remove(1);
        let err = fee.record_payment(payment()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "cannot record a payment for a record with status 'paid'"
        );
        assert_eq!(fee.paid_date.as_deref(), Some("2024-12-08"));
        assert!(fee.reminder().is_err());
    }

    #[test]
    fn test_reminder_text() {
        let fees = seed::fees();
        let pending = fees[0].reminder().unwrap();
        assert_eq!(pending.guardian, "Mary Ochieng");
        assert_eq!(
            pending.message,
            "John Ochieng's fee of KSh 5,000 is due on 2024-12-15"
        );
        assert!(fees[2].reminder().unwrap().message.ends_with("is overdue"));
    }

    #[test]
    fn test_edit_cannot_touch_payment_details() {
        let mut store = RecordStore::new(seed::fees());
        let paid = store.get(RecordId::new(2)).cloned().unwrap();
        let mut form = paid.to_form();
        form.amount = 5500;

        let mut editor = ModalEditor::new();
        editor.open_edit(paid);
        editor.save(form, &mut store).unwrap();

        let saved = store.get(RecordId::new(2)).unwrap();
        assert_eq!(saved.amount, 5500);
        assert_eq!(saved.status, FeeStatus::Paid);
        assert_eq!(saved.payment_method, Some(PaymentMethod::Mpesa));
        assert_eq!(store.filtered(FilterKey::Only(FeeStatus::Paid)).len(), 1);
    }

    #[test]
    fn test_payment_method_wire_codes() {
        assert_eq!(
            serde_json::to_string(&PaymentMethod::BankTransfer).unwrap(),
            "\"Bank Transfer\""
        );
        let form: PaymentForm =
            serde_json::from_str(r#"{"paymentMethod":"M-PESA","paidDate":"2024-12-14"}"#).unwrap();
        assert_eq!(form.reference, None);
    }
}
