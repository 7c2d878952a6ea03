use serde::{Deserialize, Serialize};

/// Page dimensions in PDF points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const A4: Size = Size {
        width: 595.28,
        height: 841.89,
    };

    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// A named table column anchored at a fixed x offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub label: String,
    pub x: f32,
}

impl Column {
    pub fn new(label: impl Into<String>, x: f32) -> Self {
        Self {
            label: label.into(),
            x,
        }
    }
}

/// The fixed layout constants governing column positions, margins and the
/// page-break threshold. Constructed once per report build and never
/// mutated afterwards, so concurrent builds can share a clone freely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageGeometry {
    pub page_size: Size,
    /// Table columns in drawing order.
    pub columns: Vec<Column>,
    /// Position of the first-page report title.
    pub title_x: f32,
    pub title_y: f32,
    /// Baseline of the header row; data rows start one `row_height` below.
    pub top_y: f32,
    /// Cursor positions below this force a page break.
    pub min_y: f32,
    pub row_height: f32,
    /// Distance between the header baseline and the rule under it.
    pub rule_gap: f32,
    /// Right end of the header rule; the left end is the first column.
    pub rule_end_x: f32,
    pub font_size: f32,
}

impl PageGeometry {
    /// Data rows that fit on one page before the break threshold forces a
    /// new one.
    pub fn rows_per_page(&self) -> usize {
        ((self.top_y - self.min_y) / self.row_height) as usize
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self {
            page_size: Size::A4,
            columns: vec![
                Column::new("ID", 50.0),
                Column::new("Naziv", 90.0),
                Column::new("Prodazna", 230.0),
                Column::new("Redovna", 300.0),
                Column::new("Popust", 380.0),
                Column::new("Opis", 450.0),
            ],
            title_x: 50.0,
            title_y: 820.0,
            top_y: 800.0,
            min_y: 100.0,
            row_height: 20.0,
            rule_gap: 5.0,
            rule_end_x: 550.0,
            font_size: 10.0,
        }
    }
}
