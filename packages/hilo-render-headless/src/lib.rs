//! A hilo-render backend that keeps everything in memory.
//!
//! Surfaces record commands into a [`hilo_render::Scene`] instead of rasterizing, glyph
//! widths come from [`GlyphMetrics`] instead of font files, and the retained-tree backend
//! is a map of element style states. This makes layout and cache behaviour of text nodes
//! observable and exact, which is what the tests of the other crates rely on.
mod canvas;
mod dom;
mod metrics;
mod platform;
mod surface;

pub use canvas::{Blit, DelegateCall, HeadlessCanvas, RecordingDelegate};
pub use dom::{HeadlessDom, HeadlessElement};
pub use metrics::{DEFAULT_FONT_PX, GlyphMetrics, font_px};
pub use platform::HeadlessPlatform;
pub use surface::HeadlessSurface;
