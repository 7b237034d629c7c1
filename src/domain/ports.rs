use super::payment::PaymentRecord;
use crate::error::Result;
use async_trait::async_trait;

/// Asynchronous provider of the payment list.
///
/// The transport is opaque to the core: a mock, a file, or a remote API can
/// stand behind it. A failed fetch is reported through `Err`.
#[async_trait]
pub trait PaymentSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<PaymentRecord>>;
}

pub type PaymentSourceBox = Box<dyn PaymentSource>;
