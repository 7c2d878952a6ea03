//! Core rendering abstractions for report generation.
//!
//! This crate provides the seam between the layout engine and the document
//! backends:
//! - `DocumentRenderer` trait for abstracting the PDF-writing primitives
//! - Error types for rendering operations

mod error;
mod traits;

pub use error::RenderError;
pub use traits::DocumentRenderer;
