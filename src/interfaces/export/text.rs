use super::DocumentExporter;
use crate::error::Result;
use crate::interfaces::currency::CurrencyFormatter;
use crate::interfaces::details::PaymentDetails;

/// Plain UTF-8 rendering of the payment details, one field per line.
#[derive(Debug, Default, Clone)]
pub struct TextExporter {
    formatter: CurrencyFormatter,
}

impl TextExporter {
    pub fn new(formatter: CurrencyFormatter) -> Self {
        Self { formatter }
    }
}

impl DocumentExporter for TextExporter {
    fn extension(&self) -> &'static str {
        "txt"
    }

    fn render(&self, details: &PaymentDetails) -> Result<Vec<u8>> {
        let mut out = details.title();
        out.push_str("\n\n");
        for line in details.lines(&self.formatter) {
            out.push_str(&line);
            out.push('\n');
        }
        Ok(out.into_bytes())
    }
}
