use crate::domain::payment::PaymentRecord;
use crate::error::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

// Flat row so every line has the same column count.
#[derive(Serialize)]
struct PaymentRow<'a> {
    id: &'a str,
    customer: &'a str,
    date: &'a str,
    amount: Decimal,
    status: &'static str,
    method: &'a str,
    card_number: Option<&'a str>,
    product_id: Option<&'a str>,
    address: Option<&'a str>,
}

impl<'a> From<&'a PaymentRecord> for PaymentRow<'a> {
    fn from(record: &'a PaymentRecord) -> Self {
        Self {
            id: &record.id,
            customer: &record.customer,
            date: &record.date,
            amount: record.amount.value(),
            status: record.status.as_str(),
            method: &record.method,
            card_number: record.card_number.as_deref(),
            product_id: record.product_id.as_deref(),
            address: record.address.as_deref(),
        }
    }
}

/// Writes payment records as CSV, in the same layout `PaymentReader` reads.
pub struct PaymentWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> PaymentWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_payments<'a>(&mut self, payments: impl IntoIterator<Item = &'a PaymentRecord>) -> Result<()> {
        for payment in payments {
            self.writer.serialize(PaymentRow::from(payment))?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
