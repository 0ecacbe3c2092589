use hilo_render::{CanvasBackend, DomBackend, DrawDelegate};

use crate::error::TextResult;

/// The renderer of the current frame, tagged by backend kind.
///
/// Supporting a new kind of backend means adding a variant here.
pub enum Renderer<'a> {
    /// Immediate pixel surface
    Canvas(&'a mut dyn CanvasBackend),
    /// Retained tree driven through style attributes
    Dom(&'a mut dyn DomBackend),
    /// Anything else; receives the draw call without any layout involvement
    Other(&'a mut dyn DrawDelegate),
}

impl Renderer<'_> {
    pub fn kind(&self) -> &'static str {
        match self {
            Renderer::Canvas(_) => "canvas",
            Renderer::Dom(_) => "dom",
            Renderer::Other(_) => "other",
        }
    }
}

/// Per-frame render entry point of a scene graph node.
pub trait Drawable {
    fn render(&mut self, renderer: Renderer<'_>, delta: f64) -> TextResult<()>;
}
