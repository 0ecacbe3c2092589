//! Glyph width memoization
//!
//! Widths are measured one character at a time and summed, so a string is only ever
//! measured through the backend once per distinct character and font. The cache belongs to a
//! single text node; sharing it between nodes would mix font epochs.

use ahash::AHashMap;
use hilo_render::{SurfaceResult, TextSurface};

/// Hit/miss counters of a [`GlyphWidthCache`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GlyphCacheStats {
    pub hits: u64,
    pub misses: u64,
}

/// Character to pixel width, valid for exactly one font epoch.
#[derive(Debug, Clone, Default)]
pub struct GlyphWidthCache {
    widths: AHashMap<char, f64>,
    epoch: u64,
    stats: GlyphCacheStats,
}

impl GlyphWidthCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Width of a single character, measuring it through `surface` on a miss.
    pub fn width<S: TextSurface + ?Sized>(
        &mut self,
        ch: char,
        surface: &mut S,
    ) -> SurfaceResult<f64> {
        if let Some(width) = self.widths.get(&ch) {
            self.stats.hits += 1;
            return Ok(*width);
        }

        let mut buf = [0u8; 4];
        let width = surface.measure_text(ch.encode_utf8(&mut buf))?.max(0.0);
        log::trace!("glyph width miss {:?} -> {} (epoch {})", ch, width, self.epoch);
        self.stats.misses += 1;
        self.widths.insert(ch, width);
        Ok(width)
    }

    /// Width of a string as the sum of its character widths.
    pub fn measure<S: TextSurface + ?Sized>(
        &mut self,
        text: &str,
        surface: &mut S,
    ) -> SurfaceResult<f64> {
        text.chars().try_fold(0.0, |total, ch| -> SurfaceResult<f64> {
            Ok(total + self.width(ch, &mut *surface)?)
        })
    }

    /// Drop every entry and start a new font epoch.
    ///
    /// Must be called synchronously whenever the font changes.
    pub fn reset(&mut self) {
        self.widths.clear();
        self.epoch += 1;
    }

    pub fn get(&self, ch: char) -> Option<f64> {
        self.widths.get(&ch).copied()
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn len(&self) -> usize {
        self.widths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }

    pub fn stats(&self) -> GlyphCacheStats {
        self.stats
    }
}
