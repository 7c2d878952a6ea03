pub mod pdf_assertions;

use cenik::{ProductRecord, ReportPipeline};
use chrono::NaiveDate;
use lopdf::Document as LopdfDocument;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    /// Create a GeneratedPdf from raw bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    /// Get the number of pages in the PDF
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Extract the text of a single page (1-based)
    pub fn page_text(&self, page: u32) -> Result<String, Box<dyn std::error::Error>> {
        Ok(self.doc.extract_text(&[page])?)
    }
}

/// Build a report over `records` with a pinned date, so the title line is
/// stable in assertions.
pub fn build_report(records: &[ProductRecord]) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let report = ReportPipeline::default().generate_dated(records, date)?;
    GeneratedPdf::from_bytes(report.bytes)
}

/// A record with only the required fields set.
pub fn product(id: i64, name: &str) -> ProductRecord {
    ProductRecord {
        id,
        name: name.to_string(),
        price: 10.0,
        regular_price: None,
        discount_price: None,
        description: None,
    }
}

/// `n` records named `Artikl 001` through `Artikl n`, zero-padded so text
/// assertions cannot collide on prefixes.
pub fn products(n: usize) -> Vec<ProductRecord> {
    (1..=n as i64)
        .map(|i| product(i, &format!("Artikl {i:03}")))
        .collect()
}
