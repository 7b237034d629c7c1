use crate::domain::payment::{Amount, PaymentRecord, PaymentStatus};
use crate::error::{PaymentError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;
use std::str::FromStr;

// `csv` infers numeric fields as floats, so the amount is taken as text and
// parsed straight into a `Decimal`.
#[derive(Deserialize)]
struct PaymentRow {
    id: String,
    customer: String,
    date: String,
    amount: String,
    status: PaymentStatus,
    method: String,
    #[serde(default)]
    card_number: Option<String>,
    #[serde(default)]
    product_id: Option<String>,
    #[serde(default)]
    address: Option<String>,
}

impl TryFrom<PaymentRow> for PaymentRecord {
    type Error = PaymentError;

    fn try_from(row: PaymentRow) -> Result<Self> {
        let value = Decimal::from_str(&row.amount).map_err(|e| {
            PaymentError::ValidationError(format!("Invalid amount {:?} for {}: {e}", row.amount, row.id))
        })?;
        Ok(Self {
            amount: Amount::new(value)?,
            id: row.id,
            customer: row.customer,
            date: row.date,
            status: row.status,
            method: row.method,
            card_number: row.card_number,
            product_id: row.product_id,
            address: row.address,
        })
    }
}

/// Reads payment records from a CSV source.
///
/// Expected header: `id,customer,date,amount,status,method` followed by the
/// optional `card_number,product_id,address` columns. Empty optional fields
/// are read as missing.
pub struct PaymentReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> PaymentReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily reads and deserializes records.
    pub fn payments(self) -> impl Iterator<Item = Result<PaymentRecord>> {
        self.reader
            .into_deserialize::<PaymentRow>()
            .map(|result| result.map_err(PaymentError::from).and_then(PaymentRecord::try_from))
    }
}
