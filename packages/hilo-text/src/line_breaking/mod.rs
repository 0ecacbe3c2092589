//! Greedy line breaking
//!
//! The module is organized into focused submodules:
//! - `paragraphs`: splitting on explicit break markers (CR, LF, CRLF, `<br>` tags)
//! - `breaker`: character-level packing of each paragraph under a width budget

pub mod breaker;
pub mod paragraphs;

use hilo_render::SurfaceResult;

pub use breaker::LineBreaker;
pub use paragraphs::split_paragraphs;

/// Anything that can report the pixel width of a string.
pub trait MeasureText {
    fn measure(&mut self, text: &str) -> SurfaceResult<f64>;
}

impl<F> MeasureText for F
where
    F: FnMut(&str) -> SurfaceResult<f64>,
{
    fn measure(&mut self, text: &str) -> SurfaceResult<f64> {
        self(text)
    }
}
