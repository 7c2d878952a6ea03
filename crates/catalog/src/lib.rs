//! Product catalog storage.
//!
//! The report engine consumes an ordered snapshot of records; this crate
//! supplies that snapshot and keeps catalog writes honest. Storage sits
//! behind the [`ProductStore`] trait so the bundled in-memory store can be
//! swapped for a database-backed one without touching the rest of the
//! service.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("no product with id {0}")]
    NotFound(i64),

    #[error("invalid product input: {0}")]
    InvalidInput(String),

    #[error("catalog store failure: {0}")]
    Store(String),
}

mod store;

pub use store::{MemoryStore, ProductStore};
