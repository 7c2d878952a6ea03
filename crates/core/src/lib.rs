//! The report pipeline: catalog snapshot in, finished PDF document out.
//!
//! Generation is synchronous and deterministic for a given snapshot and
//! date. Every invocation builds its own layout engine and renderer, so
//! simultaneous requests never share cursor or font state, and a failed
//! build yields an error instead of a partial document.

use cenik_layout::{LayoutEngine, LayoutError};
use cenik_render_core::{DocumentRenderer, RenderError};
use cenik_render_lopdf::LopdfRenderer;
use cenik_types::{PageGeometry, ProductRecord};
use chrono::{Local, NaiveDate};
use thiserror::Error;

/// The main error enum for report generation.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("layout error: {0}")]
    Layout(#[from] LayoutError),
    #[error("render error: {0}")]
    Render(#[from] RenderError),
}

/// A finished report: the complete document byte stream plus the fixed
/// response headers the HTTP layer attaches to it.
#[derive(Debug, Clone)]
pub struct PdfReport {
    pub bytes: Vec<u8>,
}

impl PdfReport {
    pub const CONTENT_TYPE: &'static str = "application/pdf";
    pub const CONTENT_DISPOSITION: &'static str = "attachment; filename=proizvodi.pdf";
}

/// Builds paginated PDF reports over catalog snapshots.
#[derive(Debug, Clone, Default)]
pub struct ReportPipeline {
    geometry: PageGeometry,
}

impl ReportPipeline {
    pub fn new(geometry: PageGeometry) -> Self {
        Self { geometry }
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    /// Render the whole snapshot, stamped with today's date.
    pub fn generate(&self, records: &[ProductRecord]) -> Result<PdfReport, ReportError> {
        self.generate_dated(records, Local::now().date_naive())
    }

    /// Render with an explicit report date. Split out so tests can pin the
    /// title line.
    pub fn generate_dated(
        &self,
        records: &[ProductRecord],
        generated_on: NaiveDate,
    ) -> Result<PdfReport, ReportError> {
        let pages = LayoutEngine::new(self.geometry.clone()).paginate(records, generated_on)?;

        let mut renderer: Box<dyn DocumentRenderer> =
            Box::new(LopdfRenderer::new(self.geometry.clone()));
        renderer.begin_document()?;
        for page in &pages {
            renderer.render_page(page)?;
        }
        let bytes = renderer.finish()?;

        log::debug!(
            "report built: {} records, {} pages, {} bytes",
            records.len(),
            pages.len(),
            bytes.len()
        );
        Ok(PdfReport { bytes })
    }
}
