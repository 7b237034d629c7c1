//! Detail/export service: renders one payment into a downloadable document.

pub mod pdf;
pub mod text;

use crate::error::Result;
use crate::interfaces::details::PaymentDetails;
use std::path::{Path, PathBuf};

pub use pdf::PdfExporter;
pub use text::TextExporter;

/// A generated document ready to be saved or downloaded.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ExportArtifact {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ExportArtifact {
    /// Writes the artifact into `dir` under its own file name.
    pub async fn save_to(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(&self.file_name);
        tokio::fs::write(&path, &self.bytes).await?;
        Ok(path)
    }
}

pub trait DocumentExporter: Send + Sync {
    /// File extension without the dot, e.g. `pdf`.
    fn extension(&self) -> &'static str;

    fn render(&self, details: &PaymentDetails) -> Result<Vec<u8>>;

    fn export(&self, details: &PaymentDetails) -> Result<ExportArtifact> {
        Ok(ExportArtifact {
            file_name: file_name(&details.id, self.extension()),
            bytes: self.render(details)?,
        })
    }
}

pub type DocumentExporterBox = Box<dyn DocumentExporter>;

/// `Payment_<id>.<ext>`
pub fn file_name(id: &str, extension: &str) -> String {
    format!("Payment_{id}.{extension}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_is_deterministic() {
        assert_eq!(file_name("PAY-87654", "pdf"), "Payment_PAY-87654.pdf");
        assert_eq!(file_name("PAY-1", "txt"), "Payment_PAY-1.txt");
    }
}
