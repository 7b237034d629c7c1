use crate::domain::payment::{Amount, PaymentRecord, PaymentStatus};
use crate::interfaces::currency::CurrencyFormatter;
use serde::Serialize;

pub const DEFAULT_METHOD: &str = "Credit Card";
pub const DEFAULT_CARD_NUMBER: &str = "**** **** **** 1234";
pub const DEFAULT_PRODUCT_ID: &str = "PRD-001";
pub const DEFAULT_ADDRESS: &str = "123 Main St, City, Country";

/// A payment record with every optional field resolved for display.
///
/// This is the only place the fallback values are applied; both the detail
/// view and the exported documents read from it.
#[derive(Debug, Serialize, PartialEq, Eq, Clone)]
pub struct PaymentDetails {
    pub id: String,
    pub customer: String,
    pub date: String,
    pub status: PaymentStatus,
    pub method: String,
    pub card_number: String,
    pub product_id: String,
    pub address: String,
    pub amount: Amount,
}

impl From<&PaymentRecord> for PaymentDetails {
    fn from(record: &PaymentRecord) -> Self {
        Self {
            id: record.id.clone(),
            customer: record.customer.clone(),
            date: record.date.clone(),
            status: record.status,
            method: or_default(Some(&record.method), DEFAULT_METHOD),
            card_number: or_default(record.card_number.as_ref(), DEFAULT_CARD_NUMBER),
            product_id: or_default(record.product_id.as_ref(), DEFAULT_PRODUCT_ID),
            address: or_default(record.address.as_ref(), DEFAULT_ADDRESS),
            amount: record.amount,
        }
    }
}

// Blank values count as missing.
fn or_default(value: Option<&String>, default: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.clone(),
        _ => default.to_string(),
    }
}

impl PaymentDetails {
    pub fn title(&self) -> String {
        format!("Payment Details for {}", self.customer)
    }

    /// Labelled field lines in document order.
    pub fn lines(&self, formatter: &CurrencyFormatter) -> Vec<String> {
        vec![
            format!("Payment Status: {}", self.status),
            format!("Payment Mode: {}", self.method),
            format!("Card Number: {}", self.card_number),
            format!("Payment ID: {}", self.id),
            format!("Product ID: {}", self.product_id),
            format!("Order Address: {}", self.address),
            format!("Amount: {}", formatter.format(self.amount)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_missing_fields_resolve_to_defaults() {
        let record = PaymentRecord::new(
            "PAY-1",
            "Arjun Mehta",
            "2025-03-15",
            Amount::new(dec!(1250)).unwrap(),
            PaymentStatus::Paid,
            "",
        );
        let details = PaymentDetails::from(&record);

        assert_eq!(details.method, DEFAULT_METHOD);
        assert_eq!(details.card_number, DEFAULT_CARD_NUMBER);
        assert_eq!(details.product_id, DEFAULT_PRODUCT_ID);
        assert_eq!(details.address, DEFAULT_ADDRESS);
    }

    #[test]
    fn test_present_fields_are_kept() {
        let mut record = PaymentRecord::new(
            "PAY-2",
            "Sneha Reddy",
            "2025-03-14",
            Amount::new(dec!(890.5)).unwrap(),
            PaymentStatus::Pending,
            "Net Banking",
        );
        record.card_number = Some("**** **** **** 9876".to_string());
        record.product_id = Some("PRD-042".to_string());

        let details = PaymentDetails::from(&record);
        assert_eq!(details.method, "Net Banking");
        assert_eq!(details.card_number, "**** **** **** 9876");
        assert_eq!(details.product_id, "PRD-042");
        assert_eq!(details.address, DEFAULT_ADDRESS);
    }

    #[test]
    fn test_lines_use_formatter() {
        let record = PaymentRecord::new(
            "PAY-3",
            "Meera",
            "2025-03-10",
            Amount::new(dec!(345)).unwrap(),
            PaymentStatus::Failed,
            "UPI",
        );
        let lines = PaymentDetails::from(&record).lines(&CurrencyFormatter::inr());

        assert_eq!(lines.first().unwrap(), "Payment Status: Failed");
        assert_eq!(lines.last().unwrap(), "Amount: ₹345.00");
    }
}
