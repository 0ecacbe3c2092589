//! Deterministic glyph metrics derived from a CSS font shorthand

use ahash::AHashMap;

/// Font size assumed when the shorthand carries no `px` size (the CSS medium size).
pub const DEFAULT_FONT_PX: f64 = 16.0;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Advance {
    Fixed(f64),
    /// Multiple of the font's pixel size
    Em(f64),
}

impl Advance {
    fn resolve(self, font_px: f64) -> f64 {
        match self {
            Advance::Fixed(value) => value,
            Advance::Em(ratio) => font_px * ratio,
        }
    }
}

/// Synthetic font metrics.
///
/// Every character has the same advance unless overridden, which keeps layout results exact
/// and reproducible without any font data.
#[derive(Debug, Clone)]
pub struct GlyphMetrics {
    advance: Advance,
    line_height: Advance,
    overrides: AHashMap<char, f64>,
}

impl Default for GlyphMetrics {
    fn default() -> Self {
        Self {
            advance: Advance::Em(0.5),
            line_height: Advance::Em(1.25),
            overrides: AHashMap::new(),
        }
    }
}

impl GlyphMetrics {
    /// Advances and line heights scale with the font size.
    pub fn proportional(advance_ratio: f64, line_height_ratio: f64) -> Self {
        Self {
            advance: Advance::Em(advance_ratio),
            line_height: Advance::Em(line_height_ratio),
            overrides: AHashMap::new(),
        }
    }

    /// Advances and line heights ignore the font entirely.
    pub fn fixed(advance: f64, line_height: f64) -> Self {
        Self {
            advance: Advance::Fixed(advance),
            line_height: Advance::Fixed(line_height),
            overrides: AHashMap::new(),
        }
    }

    pub fn with_override(mut self, ch: char, width: f64) -> Self {
        self.overrides.insert(ch, width);
        self
    }

    pub fn char_width(&self, font: &str, ch: char) -> f64 {
        match self.overrides.get(&ch) {
            Some(width) => *width,
            None => self.advance.resolve(font_px(font)),
        }
    }

    pub fn text_width(&self, font: &str, text: &str) -> f64 {
        let px = font_px(font);
        text.chars()
            .map(|ch| match self.overrides.get(&ch) {
                Some(width) => *width,
                None => self.advance.resolve(px),
            })
            .sum()
    }

    pub fn line_height(&self, font: &str) -> f64 {
        self.line_height.resolve(font_px(font))
    }
}

/// Pixel size of a CSS font shorthand such as `"bold 14px/1.5 serif"`.
pub fn font_px(font: &str) -> f64 {
    font.split_whitespace()
        .filter_map(|token| {
            let size = token.split('/').next()?;
            size.strip_suffix("px")?.parse::<f64>().ok()
        })
        .next()
        .unwrap_or(DEFAULT_FONT_PX)
}
