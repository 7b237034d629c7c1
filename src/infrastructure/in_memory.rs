use crate::domain::payment::{Amount, PaymentRecord, PaymentStatus};
use crate::domain::ports::PaymentSource;
use crate::error::Result;
use async_trait::async_trait;
use rust_decimal_macros::dec;
use std::time::Duration;

/// Serves a fixed list of payments, optionally after an artificial delay.
///
/// Stands in for a remote API while the dashboard is developed; the delay is
/// only there to exercise the loading state.
#[derive(Debug, Default, Clone)]
pub struct InMemoryPaymentSource {
    records: Vec<PaymentRecord>,
    delay: Option<Duration>,
}

impl InMemoryPaymentSource {
    pub fn new(records: Vec<PaymentRecord>) -> Self {
        Self {
            records,
            delay: None,
        }
    }

    /// The five demo payments shown on the dashboard.
    pub fn sample() -> Self {
        Self::new(sample_payments())
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[async_trait]
impl PaymentSource for InMemoryPaymentSource {
    async fn fetch(&self) -> Result<Vec<PaymentRecord>> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        Ok(self.records.clone())
    }
}

pub fn sample_payments() -> Vec<PaymentRecord> {
    vec![
        PaymentRecord::new(
            "PAY-87654",
            "Arjun Mehta",
            "2025-03-15",
            Amount::new_unchecked(dec!(1250.00)),
            PaymentStatus::Paid,
            "Credit Card",
        ),
        PaymentRecord::new(
            "PAY-76543",
            "Sneha Reddy",
            "2025-03-14",
            Amount::new_unchecked(dec!(890.50)),
            PaymentStatus::Pending,
            "Net Banking",
        ),
        PaymentRecord::new(
            "PAY-65432",
            "Sanjay Patel",
            "2025-03-12",
            Amount::new_unchecked(dec!(1675.75)),
            PaymentStatus::Paid,
            "UPI",
        ),
        PaymentRecord::new(
            "PAY-54321",
            "Meera Sharma",
            "2025-03-10",
            Amount::new_unchecked(dec!(345.00)),
            PaymentStatus::Failed,
            "Credit Card",
        ),
        PaymentRecord::new(
            "PAY-43210",
            "Rajiv Kumar",
            "2025-03-08",
            Amount::new_unchecked(dec!(925.25)),
            PaymentStatus::Paid,
            "Debit Card",
        ),
    ]
}
