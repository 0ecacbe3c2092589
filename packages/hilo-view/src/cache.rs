//! Bitmap caching of a node's drawing
//!
//! Any view kind can capture its drawing once and let renderers reuse the captured image
//! until the view reports itself dirty again.

use hilo_render::{CachedImage, OffscreenSurface};

use crate::error::TextResult;

/// Nodes whose drawing can be captured into a reusable image.
pub trait CacheCapable {
    /// Re-capture when dirty, when nothing is captured yet, or when `force_update` is set.
    fn cache(&mut self, force_update: bool) -> TextResult<()>;

    /// Redraw into the offscreen surface and capture it, unconditionally.
    fn update_cache(&mut self) -> TextResult<()>;

    fn set_cache_dirty(&mut self, dirty: bool);

    fn is_cache_dirty(&self) -> bool;
}

/// Dirty flag plus the last captured image.
#[derive(Debug, Clone)]
pub struct BitmapCache {
    dirty: bool,
    image: Option<CachedImage>,
    captures: u64,
}

impl BitmapCache {
    /// Starts dirty with nothing captured.
    pub fn new() -> Self {
        Self {
            dirty: true,
            image: None,
            captures: 0,
        }
    }

    /// Capture `surface`, or forget the image when there is no surface to capture.
    pub fn capture<S: OffscreenSurface + ?Sized>(&mut self, surface: Option<&S>) {
        self.image = surface.map(|surface| surface.snapshot());
        self.captures += 1;
        match &self.image {
            Some(image) => log::debug!("captured {}x{} image", image.width(), image.height()),
            None => log::debug!("nothing to capture, platform has no offscreen surfaces"),
        }
    }

    pub fn image(&self) -> Option<&CachedImage> {
        self.image.as_ref()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn set_dirty(&mut self, dirty: bool) {
        self.dirty = dirty;
    }

    /// Whether renderers may reuse the captured image.
    pub fn is_reusable(&self) -> bool {
        !self.dirty && self.image.is_some()
    }

    /// Number of captures performed.
    pub fn captures(&self) -> u64 {
        self.captures
    }
}

impl Default for BitmapCache {
    fn default() -> Self {
        Self::new()
    }
}
