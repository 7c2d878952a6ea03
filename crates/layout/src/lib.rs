//! Pagination of product records into per-page draw instructions.
//!
//! The layout engine is a pure transform: an ordered record snapshot in,
//! pages of absolutely positioned instructions out. It owns no state beyond
//! the immutable page geometry, so concurrent report builds cannot observe
//! each other's cursor.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("malformed record {id}: {field} is not a usable number")]
    MalformedRecord { id: i64, field: &'static str },
}

mod engine;

pub use engine::{DrawInstruction, LayoutEngine, Page};
