use super::DocumentExporter;
use crate::error::{PaymentError, Result};
use crate::interfaces::currency::{CurrencyFormatter, Grouping};
use crate::interfaces::details::PaymentDetails;
use printpdf::{BuiltinFont, Mm, PdfDocument};

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const LEFT_MARGIN_MM: f32 = 10.0;
const TITLE_TOP_MM: f32 = 20.0;
const FIRST_LINE_TOP_MM: f32 = 35.0;
const LINE_SPACING_MM: f32 = 10.0;
const TITLE_FONT_SIZE: f32 = 16.0;
const BODY_FONT_SIZE: f32 = 12.0;

/// Single-page A4 PDF with a title and one line per detail field.
///
/// The standard PDF fonts only cover WinAnsi, so amounts use an ASCII
/// currency prefix instead of the rupee sign.
#[derive(Debug, Clone)]
pub struct PdfExporter {
    formatter: CurrencyFormatter,
}

impl Default for PdfExporter {
    fn default() -> Self {
        Self::new(CurrencyFormatter::new("INR ", Grouping::Indian))
    }
}

impl PdfExporter {
    pub fn new(formatter: CurrencyFormatter) -> Self {
        Self { formatter }
    }
}

impl DocumentExporter for PdfExporter {
    fn extension(&self) -> &'static str {
        "pdf"
    }

    fn render(&self, details: &PaymentDetails) -> Result<Vec<u8>> {
        let title = details.title();
        let (doc, page, layer) =
            PdfDocument::new(&title, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
        let font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| PaymentError::ExportError(e.to_string()))?;
        let canvas = doc.get_page(page).get_layer(layer);

        // PDF coordinates start at the bottom-left corner.
        let from_top = |top: f32| Mm(PAGE_HEIGHT_MM - top);

        canvas.use_text(
            title.as_str(),
            TITLE_FONT_SIZE,
            Mm(LEFT_MARGIN_MM),
            from_top(TITLE_TOP_MM),
            &font,
        );
        for (i, line) in details.lines(&self.formatter).into_iter().enumerate() {
            let top = FIRST_LINE_TOP_MM + LINE_SPACING_MM * i as f32;
            canvas.use_text(line, BODY_FONT_SIZE, Mm(LEFT_MARGIN_MM), from_top(top), &font);
        }

        doc.save_to_bytes()
            .map_err(|e| PaymentError::ExportError(e.to_string()))
    }
}
