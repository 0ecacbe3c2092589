//! Backend capabilities for drawing Hilo text nodes.
//!
//! A text node never talks to a concrete rendering backend. Instead it is handed one of the
//! capability traits defined here and pushes measurement and drawing commands into it:
//!
//!  - [`TextSurface`]: an immediate pixel surface (measure, fill/stroke text, fill rects).
//!  - [`OffscreenSurface`]: a resizable [`TextSurface`] whose output can be captured as a
//!    [`CachedImage`] and reused across frames.
//!  - [`CanvasBackend`]: the per-frame renderer of an immediate-surface backend.
//!  - [`DomBackend`] / [`StyleElement`]: a retained-tree backend driven through style attributes.
//!  - [`DrawDelegate`]: any other backend; it receives the draw call opaquely.
//!  - [`ProbeHost`] / [`Platform`]: the environment that allocates offscreen surfaces and
//!    short-lived probe elements used for line-height measurement.
//!
//! Recorded commands are kept in a [`Scene`], which is also how cached images are represented.

mod error;
mod probe;
mod scene;

use peniko::kurbo::{Point, Rect};
use peniko::Color;
use serde::{Deserialize, Serialize};

pub use error::{SurfaceError, SurfaceResult};
pub use peniko;
pub use peniko::kurbo;
pub use probe::{Probe, ProbeHost, ProbeId, ProbeStyle};
pub use scene::{CachedImage, DrawCommand, Scene};

/// Horizontal anchoring of a text origin, as understood by canvas-like surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Start,
    End,
    Left,
    Right,
    Center,
}

impl TextAlign {
    pub fn as_str(self) -> &'static str {
        match self {
            TextAlign::Start => "start",
            TextAlign::End => "end",
            TextAlign::Left => "left",
            TextAlign::Right => "right",
            TextAlign::Center => "center",
        }
    }
}

/// Vertical reference of a text origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextBaseline {
    Top,
    Hanging,
    Middle,
    #[default]
    Alphabetic,
    Ideographic,
    Bottom,
}

/// Text drawing state applied to a surface before measuring or drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPaint {
    /// CSS font shorthand, e.g. `"12px arial"`
    pub font: String,
    pub align: Option<TextAlign>,
    pub baseline: TextBaseline,
}

/// An immediate pixel surface.
///
/// Measurement is only meaningful under the font of the last applied [`TextPaint`].
pub trait TextSurface {
    fn set_text_paint(&mut self, paint: &TextPaint);

    /// Width of `text` under the current font.
    ///
    /// Surfaces that cannot measure text must return [`SurfaceError::MeasurementUnavailable`]
    /// rather than guess a width.
    fn measure_text(&mut self, text: &str) -> SurfaceResult<f64>;

    fn fill_text(&mut self, text: &str, origin: Point, color: Color);

    fn stroke_text(&mut self, text: &str, origin: Point, color: Color);

    fn fill_rect(&mut self, rect: Rect, color: Color);
}

/// A surface that is drawn once and then captured for reuse.
pub trait OffscreenSurface: TextSurface {
    /// Resizing clears everything drawn so far.
    fn resize(&mut self, width: u32, height: u32);

    fn snapshot(&self) -> CachedImage;
}

/// Per-frame renderer of an immediate-surface backend.
pub trait CanvasBackend {
    /// The surface of the frame currently being drawn.
    fn context(&mut self) -> &mut dyn TextSurface;

    /// Blit a previously captured image into `dest`.
    fn draw_image(&mut self, image: &CachedImage, dest: Rect);
}

/// A style attribute mirrored onto a retained-tree element.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleAttr<'a> {
    Font(&'a str),
    TextAlign(Option<TextAlign>),
    Color(&'a str),
    Width(f64),
    Height(f64),
    LineHeight(f64),
    BackgroundImage(Option<&'a CachedImage>),
}

/// An element of a retained-tree backend.
pub trait StyleElement {
    fn set_style(&mut self, attr: StyleAttr<'_>);

    /// Replace the native text content. An empty string removes it.
    fn set_text_content(&mut self, text: &str);
}

/// Per-frame renderer of a retained-tree backend.
pub trait DomBackend {
    /// The element backing the node `id`, created on first access.
    fn element(&mut self, id: &str) -> &mut dyn StyleElement;

    /// Position the element for this frame.
    fn draw_element(&mut self, id: &str, bounds: Rect);
}

/// Any backend the text node has no specific knowledge of.
pub trait DrawDelegate {
    fn draw(&mut self, id: &str, bounds: Rect, image: Option<&CachedImage>);
}

/// The environment a text node lives in.
pub trait Platform: ProbeHost {
    /// Allocate a fresh offscreen surface, or `None` when the platform has no pixel surfaces.
    fn create_surface(&self) -> Option<Box<dyn OffscreenSurface>>;
}
