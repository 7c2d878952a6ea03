use serde::{Deserialize, Serialize};

/// One product's catalog data.
///
/// Owned by the catalog store. The layout engine borrows records for the
/// duration of one report build and never mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Unique, immutable once assigned.
    pub id: i64,
    pub name: String,
    /// Sale price. Non-negative, enforced on catalog writes.
    pub price: f64,
    /// Absent values render as 0.00 in reports.
    #[serde(default)]
    pub regular_price: Option<f64>,
    /// Absent values render as 0.00 in reports.
    #[serde(default)]
    pub discount_price: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Input payload for creating or replacing a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub regular_price: Option<f64>,
    #[serde(default)]
    pub discount_price: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
}
