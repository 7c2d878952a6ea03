use crate::error::RenderError;
use cenik_layout::Page;

/// A trait for document renderers, abstracting the PDF-writing primitives.
///
/// Pages arrive as discrete units in sequence; how a page boundary maps
/// onto the backend's begin/end primitives is the backend's business.
/// `finish` consumes the renderer and yields the complete document byte
/// stream, so a failed build can never leak partial output.
pub trait DocumentRenderer {
    fn begin_document(&mut self) -> Result<(), RenderError>;

    fn render_page(&mut self, page: &Page) -> Result<(), RenderError>;

    fn finish(self: Box<Self>) -> Result<Vec<u8>, RenderError>;
}
