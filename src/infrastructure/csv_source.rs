use crate::domain::payment::PaymentRecord;
use crate::domain::ports::PaymentSource;
use crate::error::Result;
use crate::interfaces::csv::payment_reader::PaymentReader;
use async_trait::async_trait;
use std::path::PathBuf;

/// Reads the payment list from a CSV file on every fetch.
///
/// A single malformed row fails the whole fetch.
#[derive(Debug, Clone)]
pub struct CsvPaymentSource {
    path: PathBuf,
}

impl CsvPaymentSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl PaymentSource for CsvPaymentSource {
    async fn fetch(&self) -> Result<Vec<PaymentRecord>> {
        let bytes = tokio::fs::read(&self.path).await?;
        PaymentReader::new(bytes.as_slice()).payments().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_fetch_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "id,customer,date,amount,status,method").unwrap();
        writeln!(file, "PAY-1,Arjun Mehta,2025-03-15,1250.00,Paid,Credit Card").unwrap();

        let records = CsvPaymentSource::new(file.path()).fetch().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "PAY-1");
    }

    #[tokio::test]
    async fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = CsvPaymentSource::new(dir.path().join("missing.csv"));
        assert!(source.fetch().await.is_err());
    }
}
