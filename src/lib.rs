//! # cenik
//!
//! A small catalog-management service: product records live in a catalog
//! store, are exposed over HTTP as JSON, and can be exported as a paginated
//! PDF price-list report.
//!
//! The interesting part is the report engine, split the way the member
//! crates are split:
//! - **types**: records and the fixed page geometry
//! - **translit**: Cyrillic → Latin normalization of free-text fields
//! - **layout**: pagination into per-page draw instructions
//! - **render-core** / **render-lopdf**: the pluggable PDF backend
//! - **core**: the pipeline tying layout and rendering together
//! - **catalog** / **server**: storage seam and the HTTP surface

// Re-export foundation crates
pub use cenik_catalog as catalog;
pub use cenik_core as pipeline;
pub use cenik_layout as layout;
pub use cenik_render_core as render_core;
pub use cenik_render_lopdf as render_lopdf;
pub use cenik_server as server;
pub use cenik_translit as translit;
pub use cenik_types as types;

// Re-export commonly used types
pub use cenik_catalog::{CatalogError, MemoryStore, ProductStore};
pub use cenik_core::{PdfReport, ReportError, ReportPipeline};
pub use cenik_layout::{DrawInstruction, LayoutEngine, LayoutError, Page};
pub use cenik_render_core::{DocumentRenderer, RenderError};
pub use cenik_render_lopdf::LopdfRenderer;
pub use cenik_server::{ApiError, AppState, router, serve};
pub use cenik_translit::to_latin;
pub use cenik_types::{Column, NewProduct, PageGeometry, ProductRecord, Size};
