//! HTTP surface for the catalog service.
//!
//! JSON CRUD over the product store plus the PDF report download. Session
//! handling, rate limiting and HTML views are deliberately absent; callers
//! get the catalog as data and the report as a file attachment.

mod error;
mod handler;

pub use error::ApiError;
pub use handler::{AppState, router, serve};
