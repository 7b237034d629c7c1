#![allow(dead_code)]

use async_trait::async_trait;
use paydesk::domain::payment::{Amount, PaymentRecord, PaymentStatus};
use paydesk::domain::ports::PaymentSource;
use paydesk::error::{PaymentError, Result};
use rust_decimal::Decimal;
use std::sync::Mutex;
use tokio::sync::oneshot;

pub fn payment(id: &str, customer: &str, amount: Decimal, status: PaymentStatus) -> PaymentRecord {
    PaymentRecord::new(id, customer, "2025-03-01", Amount::new(amount).unwrap(), status, "UPI")
}

pub fn ids(records: &[PaymentRecord]) -> Vec<&str> {
    records.iter().map(|r| r.id.as_str()).collect()
}

/// A source whose fetch always fails.
pub struct FailingSource;

#[async_trait]
impl PaymentSource for FailingSource {
    async fn fetch(&self) -> Result<Vec<PaymentRecord>> {
        Err(PaymentError::SourceError("connection refused".to_string()))
    }
}

/// A source that only answers once the test releases it.
pub struct GatedSource {
    gate: Mutex<Option<oneshot::Receiver<Result<Vec<PaymentRecord>>>>>,
}

impl GatedSource {
    pub fn new() -> (Self, oneshot::Sender<Result<Vec<PaymentRecord>>>) {
        let (tx, rx) = oneshot::channel();
        (
            Self {
                gate: Mutex::new(Some(rx)),
            },
            tx,
        )
    }
}

#[async_trait]
impl PaymentSource for GatedSource {
    async fn fetch(&self) -> Result<Vec<PaymentRecord>> {
        let rx = self
            .gate
            .lock()
            .unwrap()
            .take()
            .ok_or_else(|| PaymentError::SourceError("already fetched".to_string()))?;
        rx.await
            .map_err(|_| PaymentError::SourceError("gate dropped".to_string()))?
    }
}
