use crate::LayoutError;
use cenik_translit::to_latin;
use cenik_types::{PageGeometry, ProductRecord};
use chrono::NaiveDate;

/// Hard cutoffs for the name and description cells, in characters.
///
/// Overflow is clipped, not wrapped; that is intentional.
const NAME_WIDTH: usize = 30;
const DESC_WIDTH: usize = 40;

/// One atomic positioned directive for the renderer.
///
/// Coordinates are absolute, in PDF points with the origin at the bottom
/// left, so a backend may replay a page's instructions in any order.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawInstruction {
    Text { text: String, x: f32, y: f32 },
    /// Horizontal rule from `x1` to `x2` at height `y`.
    Rule { x1: f32, x2: f32, y: f32 },
}

/// Instructions for one page, in top-to-bottom emission order.
pub type Page = Vec<DrawInstruction>;

/// Lays product records out into fixed-size pages.
pub struct LayoutEngine {
    geometry: PageGeometry,
}

impl LayoutEngine {
    pub fn new(geometry: PageGeometry) -> Self {
        Self { geometry }
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    /// Paginate the full record snapshot into draw-instruction batches.
    ///
    /// An empty snapshot still produces a single page carrying the title
    /// and the header row. A record with an unusable numeric field aborts
    /// the whole build; there is no partial output.
    pub fn paginate(
        &self,
        records: &[ProductRecord],
        generated_on: NaiveDate,
    ) -> Result<Vec<Page>, LayoutError> {
        let g = &self.geometry;
        let mut pages = Vec::new();

        let mut page = vec![DrawInstruction::Text {
            text: format!("Lista na proizvodi - {}", generated_on.format("%d.%m.%Y")),
            x: g.title_x,
            y: g.title_y,
        }];
        self.push_header(&mut page);
        let mut cursor = g.top_y - g.row_height;

        for record in records {
            if cursor < g.min_y {
                let mut next = Page::new();
                self.push_header(&mut next);
                pages.push(std::mem::replace(&mut page, next));
                cursor = g.top_y - g.row_height;
            }
            self.push_row(&mut page, record, cursor)?;
            cursor -= g.row_height;
        }
        pages.push(page);

        log::debug!(
            "laid out {} records onto {} pages",
            records.len(),
            pages.len()
        );
        Ok(pages)
    }

    /// Header block repeated on every page: column labels on the top
    /// baseline, rule underneath. Continuation pages stay legible on their
    /// own.
    fn push_header(&self, page: &mut Page) {
        let g = &self.geometry;
        for column in &g.columns {
            page.push(DrawInstruction::Text {
                text: column.label.clone(),
                x: column.x,
                y: g.top_y,
            });
        }
        if let Some(first) = g.columns.first() {
            page.push(DrawInstruction::Rule {
                x1: first.x,
                x2: g.rule_end_x,
                y: g.top_y - g.rule_gap,
            });
        }
    }

    fn push_row(
        &self,
        page: &mut Page,
        record: &ProductRecord,
        y: f32,
    ) -> Result<(), LayoutError> {
        let cells = row_cells(record)?;
        for (column, text) in self.geometry.columns.iter().zip(cells) {
            page.push(DrawInstruction::Text { text, x: column.x, y });
        }
        Ok(())
    }
}

/// Format the six cells of one record row.
fn row_cells(record: &ProductRecord) -> Result<[String; 6], LayoutError> {
    let price = require_usable(record, "price", record.price)?;
    // Absent regular/discount prices intentionally render as zero.
    let regular = require_usable(record, "regular_price", record.regular_price.unwrap_or(0.0))?;
    let discount = require_usable(
        record,
        "discount_price",
        record.discount_price.unwrap_or(0.0),
    )?;

    let name = clip(&to_latin(&record.name), NAME_WIDTH);
    let description = clip(
        &to_latin(record.description.as_deref().unwrap_or_default()),
        DESC_WIDTH,
    );

    Ok([
        record.id.to_string(),
        name,
        format!("{price:.2}"),
        format!("{regular:.2}"),
        format!("{discount:.2}"),
        description,
    ])
}

fn require_usable(
    record: &ProductRecord,
    field: &'static str,
    value: f64,
) -> Result<f64, LayoutError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(LayoutError::MalformedRecord {
            id: record.id,
            field,
        })
    }
}

/// Hard character-count cutoff; deliberately not word-aware.
fn clip(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}
