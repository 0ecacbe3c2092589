use std::sync::Arc;

use hilo_render::kurbo::Rect;
use hilo_render::{CachedImage, CanvasBackend, DrawDelegate, TextSurface};

use crate::{GlyphMetrics, HeadlessSurface};

/// A blit of a cached image recorded by [`HeadlessCanvas`].
#[derive(Debug, Clone, PartialEq)]
pub struct Blit {
    pub image: CachedImage,
    pub dest: Rect,
}

/// Immediate-surface renderer whose frame surface is a [`HeadlessSurface`].
#[derive(Debug, Clone)]
pub struct HeadlessCanvas {
    context: HeadlessSurface,
    blits: Vec<Blit>,
}

impl HeadlessCanvas {
    pub fn new(metrics: Arc<GlyphMetrics>) -> Self {
        Self {
            context: HeadlessSurface::new(metrics),
            blits: Vec::new(),
        }
    }

    pub fn surface(&self) -> &HeadlessSurface {
        &self.context
    }

    pub fn blits(&self) -> &[Blit] {
        &self.blits
    }

    /// Start a new frame: forget everything drawn and blitted so far.
    pub fn clear(&mut self) {
        self.context.take_scene();
        self.blits.clear();
    }
}

impl CanvasBackend for HeadlessCanvas {
    fn context(&mut self) -> &mut dyn TextSurface {
        &mut self.context
    }

    fn draw_image(&mut self, image: &CachedImage, dest: Rect) {
        log::trace!("blit {}x{} image into {:?}", image.width(), image.height(), dest);
        self.blits.push(Blit {
            image: image.clone(),
            dest,
        });
    }
}

/// A draw call received by [`RecordingDelegate`].
#[derive(Debug, Clone, PartialEq)]
pub struct DelegateCall {
    pub id: String,
    pub bounds: Rect,
    pub image: Option<CachedImage>,
}

/// Stand-in for a backend the text node knows nothing about.
#[derive(Debug, Clone, Default)]
pub struct RecordingDelegate {
    calls: Vec<DelegateCall>,
}

impl RecordingDelegate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[DelegateCall] {
        &self.calls
    }
}

impl DrawDelegate for RecordingDelegate {
    fn draw(&mut self, id: &str, bounds: Rect, image: Option<&CachedImage>) {
        self.calls.push(DelegateCall {
            id: id.to_owned(),
            bounds,
            image: image.cloned(),
        });
    }
}
