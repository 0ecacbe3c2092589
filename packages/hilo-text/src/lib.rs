//! Text layout for Hilo text nodes
//!
//! This crate turns a string, a font style and a width budget into positioned lines:
//! - Per-character glyph width memoization, reset on every font change
//! - Line height estimation through offscreen probe elements
//! - Greedy character-level line breaking honouring explicit breaks
//! - Memoization of the last layout result
//! - Horizontal and vertical alignment of laid-out lines inside a box
//!
//! Nothing here draws. Measurement goes through [`hilo_render::TextSurface`] and
//! [`hilo_render::ProbeHost`], so any backend can drive it.

pub mod alignment;
pub mod layout_cache;
pub mod line_breaking;
pub mod measurement;
pub mod types;

pub use alignment::{PositionedLine, anchor_x, effective_box, resolve_lines, vertical_shift};
pub use layout_cache::LayoutCache;
pub use line_breaking::{LineBreaker, MeasureText, split_paragraphs};
pub use measurement::{
    CachedMeasure, GlyphCacheStats, GlyphWidthCache, LineHeightEstimator, PROBE_SAMPLE,
};
pub use types::{DrawLine, LayoutResult, TextAlign, TextStyle, TextVAlign};
