//! Text measurement with memoization
//!
//! - `glyph_cache`: per-node character width cache, cleared on every font change
//! - `line_height`: line height estimation through offscreen probes

pub mod glyph_cache;
pub mod line_height;

use hilo_render::{SurfaceResult, TextSurface};

pub use glyph_cache::{GlyphCacheStats, GlyphWidthCache};
pub use line_height::{LineHeightEstimator, PROBE_SAMPLE};

use crate::line_breaking::MeasureText;

/// String measurement backed by a [`GlyphWidthCache`].
///
/// The surface must already carry the font the cache was filled under.
pub struct CachedMeasure<'a, S: TextSurface + ?Sized> {
    glyphs: &'a mut GlyphWidthCache,
    surface: &'a mut S,
}

impl<'a, S: TextSurface + ?Sized> CachedMeasure<'a, S> {
    pub fn new(glyphs: &'a mut GlyphWidthCache, surface: &'a mut S) -> Self {
        Self { glyphs, surface }
    }
}

impl<S: TextSurface + ?Sized> MeasureText for CachedMeasure<'_, S> {
    fn measure(&mut self, text: &str) -> SurfaceResult<f64> {
        self.glyphs.measure(text, &mut *self.surface)
    }
}
