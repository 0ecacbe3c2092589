use std::sync::atomic::{AtomicU64, Ordering};

use hilo_render::kurbo::{Rect, Size};

static NEXT_UID: AtomicU64 = AtomicU64::new(1);

/// A process-unique id such as `Text3`.
pub fn next_uid(prefix: &str) -> String {
    format!("{}{}", prefix, NEXT_UID.fetch_add(1, Ordering::Relaxed))
}

/// The part of a display node every view kind shares.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewBase {
    pub id: String,
    pub x: f64,
    pub y: f64,
    /// Declared width; 0 means "size to content"
    pub width: f64,
    /// Declared height; 0 means "size to content"
    pub height: f64,
    pub visible: bool,
    /// CSS color filled behind the content
    pub background: Option<String>,
}

impl ViewBase {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            visible: true,
            background: None,
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size((self.x, self.y), (self.width, self.height))
    }
}
