//! lopdf rendering backend for the report engine.

mod renderer;

pub use renderer::LopdfRenderer;
