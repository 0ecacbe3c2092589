//! The text node: properties, layout, drawing and bitmap caching

mod render;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use hilo_render::kurbo::{Rect, Size};
use hilo_render::{OffscreenSurface, Platform, TextBaseline, TextPaint, TextSurface};
use hilo_text::{
    CachedMeasure, GlyphWidthCache, LayoutCache, LayoutResult, LineBreaker, LineHeightEstimator,
    TextAlign, TextStyle, TextVAlign, effective_box, resolve_lines,
};

use crate::cache::{BitmapCache, CacheCapable};
use crate::color::to_surface_color;
use crate::config::TextConfig;
use crate::error::TextResult;
use crate::scheduler::TaskQueue;
use crate::view::{ViewBase, next_uid};

/// Shared handle to a text node; deferred work holds only a weak reference to it.
pub type TextHandle = Rc<RefCell<Text>>;

/// A node displaying styled, possibly multi-line text.
pub struct Text {
    view: ViewBase,
    /// Size as configured; a zero dimension follows the laid-out text on every draw
    declared: Size,
    text: String,
    style: TextStyle,
    text_width: f64,
    text_height: f64,
    font_height: Option<f64>,
    glyphs: GlyphWidthCache,
    line_heights: LineHeightEstimator,
    layout: LayoutCache,
    bitmap: BitmapCache,
    cache_surface: Option<Box<dyn OffscreenSurface>>,
    platform: Rc<dyn Platform>,
    tasks: TaskQueue,
    this: Weak<RefCell<Text>>,
    recache_scheduled: bool,
    destroyed: bool,
}

impl Text {
    /// Build a node from a property bag. Absent properties keep their defaults.
    pub fn new(config: TextConfig, platform: Rc<dyn Platform>, tasks: TaskQueue) -> TextHandle {
        Rc::new_cyclic(|this| {
            let mut view = ViewBase::new(config.id.clone().unwrap_or_else(|| next_uid("Text")));
            config.apply_view(&mut view);
            let mut style = TextStyle::default();
            config.apply_style(&mut style);

            RefCell::new(Self {
                declared: view.size(),
                view,
                text: config.text.clone().unwrap_or_default(),
                style,
                text_width: 0.0,
                text_height: 0.0,
                font_height: None,
                glyphs: GlyphWidthCache::new(),
                line_heights: LineHeightEstimator::new(),
                layout: LayoutCache::new(),
                bitmap: BitmapCache::new(),
                cache_surface: None,
                platform,
                tasks,
                this: this.clone(),
                recache_scheduled: false,
                destroyed: false,
            })
        })
    }

    pub fn id(&self) -> &str {
        &self.view.id
    }

    pub fn view(&self) -> &ViewBase {
        &self.view
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn style(&self) -> &TextStyle {
        &self.style
    }

    /// Read-only; change it with [`Text::set_font`].
    pub fn font(&self) -> &str {
        &self.style.font
    }

    pub fn color(&self) -> &str {
        &self.style.color
    }

    pub fn text_align(&self) -> Option<TextAlign> {
        self.style.text_align
    }

    pub fn text_valign(&self) -> Option<TextVAlign> {
        self.style.text_valign
    }

    pub fn outline(&self) -> bool {
        self.style.outline
    }

    pub fn line_spacing(&self) -> f64 {
        self.style.line_spacing
    }

    pub fn max_width(&self) -> f64 {
        self.style.max_width
    }

    /// Width of the laid-out text. Only meaningful after a pixel-surface draw.
    pub fn text_width(&self) -> f64 {
        self.text_width
    }

    /// Height of the laid-out text. Only meaningful after a pixel-surface draw.
    pub fn text_height(&self) -> f64 {
        self.text_height
    }

    /// The memoized layout, if it is still valid.
    pub fn layout(&self) -> Option<&LayoutResult> {
        self.layout.get()
    }

    /// Number of layout passes run so far.
    pub fn layout_passes(&self) -> u64 {
        self.layout.passes()
    }

    pub fn glyph_cache(&self) -> &GlyphWidthCache {
        &self.glyphs
    }

    pub fn bitmap(&self) -> &BitmapCache {
        &self.bitmap
    }

    pub fn is_recache_scheduled(&self) -> bool {
        self.recache_scheduled
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub fn set_text(&mut self, text: impl Into<String>) -> &mut Self {
        let text = text.into();
        if self.text != text {
            self.text = text;
            self.invalidate(true);
        }
        self
    }

    /// Change the font.
    ///
    /// Glyph widths, line heights and the memoized layout are dropped immediately; the bitmap
    /// is re-captured on the next turn of the task queue, so other properties written in the
    /// same turn are picked up by that single re-capture.
    pub fn set_font(&mut self, font: impl Into<String>) -> &mut Self {
        let font = font.into();
        if self.style.font == font {
            return self;
        }
        self.style.font = font;
        self.glyphs.reset();
        self.line_heights.reset();
        self.font_height = None;
        self.invalidate(true);
        self.schedule_recache();
        self
    }

    pub fn set_color(&mut self, color: impl Into<String>) -> &mut Self {
        let color = color.into();
        if self.style.color != color {
            self.style.color = color;
            self.invalidate(false);
        }
        self
    }

    pub fn set_text_align(&mut self, align: Option<TextAlign>) -> &mut Self {
        if self.style.text_align != align {
            self.style.text_align = align;
            self.invalidate(false);
        }
        self
    }

    pub fn set_text_valign(&mut self, valign: Option<TextVAlign>) -> &mut Self {
        if self.style.text_valign != valign {
            self.style.text_valign = valign;
            self.invalidate(false);
        }
        self
    }

    pub fn set_outline(&mut self, outline: bool) -> &mut Self {
        if self.style.outline != outline {
            self.style.outline = outline;
            self.invalidate(false);
        }
        self
    }

    pub fn set_line_spacing(&mut self, line_spacing: f64) -> &mut Self {
        if self.style.line_spacing != line_spacing {
            self.style.line_spacing = line_spacing;
            self.invalidate(true);
        }
        self
    }

    pub fn set_max_width(&mut self, max_width: f64) -> &mut Self {
        if self.style.max_width != max_width {
            self.style.max_width = max_width;
            self.invalidate(true);
        }
        self
    }

    pub fn set_background(&mut self, background: Option<String>) -> &mut Self {
        if self.view.background != background {
            self.view.background = background;
            self.invalidate(false);
        }
        self
    }

    /// Declared box size; 0 sizes that dimension to the text on the next draw.
    pub fn set_size(&mut self, width: f64, height: f64) -> &mut Self {
        let size = Size::new(width, height);
        if self.declared != size {
            self.declared = size;
            self.view.width = width;
            self.view.height = height;
            self.invalidate(false);
        }
        self
    }

    pub fn set_position(&mut self, x: f64, y: f64) -> &mut Self {
        self.view.x = x;
        self.view.y = y;
        self
    }

    pub fn set_visible(&mut self, visible: bool) -> &mut Self {
        self.view.visible = visible;
        self
    }

    /// Remove the node from the scene. Pending deferred work becomes a no-op.
    pub fn destroy(&mut self) {
        self.destroyed = true;
        self.cache_surface = None;
    }

    /// Pixel height of one line of the current font, without spacing.
    pub fn line_height(&mut self) -> TextResult<f64> {
        if let Some(height) = self.font_height {
            return Ok(height);
        }
        let height = self.line_heights.estimate(&self.style.font, &*self.platform)?;
        self.font_height = Some(height);
        Ok(height)
    }

    fn invalidate(&mut self, relayout: bool) {
        if relayout {
            self.layout.invalidate();
        }
        self.bitmap.set_dirty(true);
    }

    fn schedule_recache(&mut self) {
        if self.recache_scheduled {
            return;
        }
        self.recache_scheduled = true;
        defer_recache(&self.tasks, self.this.clone());
    }

    fn text_paint(&self) -> TextPaint {
        TextPaint {
            font: self.style.font.clone(),
            align: self.style.text_align,
            baseline: TextBaseline::Top,
        }
    }

    /// Lay the text out unless the memoized layout is still valid.
    ///
    /// `surface` must already carry this node's text paint.
    fn ensure_layout<S: TextSurface + ?Sized>(&mut self, surface: &mut S) -> TextResult<()> {
        if self.layout.is_valid() {
            return Ok(());
        }
        let line_height = self.line_height()?;
        let breaker = LineBreaker::new(self.style.max_width, line_height, self.style.line_spacing);
        let text = &self.text;
        let glyphs = &mut self.glyphs;
        self.layout.get_or_try_insert_with(|| {
            breaker.break_lines(text, &mut CachedMeasure::new(glyphs, surface))
        })?;
        Ok(())
    }

    /// Draw every line into `surface`, laying out first if needed.
    fn draw<S: TextSurface + ?Sized>(&mut self, surface: &mut S) -> TextResult<()> {
        if self.text.is_empty() {
            return Ok(());
        }

        surface.set_text_paint(&self.text_paint());
        self.ensure_layout(surface)?;
        let Some(layout) = self.layout.get() else {
            return Ok(());
        };

        self.text_width = layout.width;
        self.text_height = layout.height;
        let size = effective_box(self.declared, layout);
        self.view.width = size.width;
        self.view.height = size.height;

        if let Some(background) = &self.view.background {
            surface.fill_rect(
                Rect::from_origin_size((0.0, 0.0), size),
                to_surface_color(background),
            );
        }

        let color = to_surface_color(&self.style.color);
        for line in resolve_lines(layout, size, self.style.text_align, self.style.text_valign) {
            if self.style.outline {
                surface.stroke_text(line.text, line.origin, color);
            } else {
                surface.fill_text(line.text, line.origin, color);
            }
        }
        Ok(())
    }

    /// Size `surface` to the node's box and draw into it.
    fn draw_offscreen(&mut self, surface: &mut dyn OffscreenSurface) -> TextResult<()> {
        surface.set_text_paint(&self.text_paint());
        self.ensure_layout(&mut *surface)?;
        let size = match self.layout.get() {
            Some(layout) => effective_box(self.declared, layout),
            None => self.declared,
        };
        surface.resize(to_pixels(size.width), to_pixels(size.height));
        self.draw(surface)
    }
}

impl CacheCapable for Text {
    fn cache(&mut self, force_update: bool) -> TextResult<()> {
        if force_update || self.bitmap.is_dirty() || self.bitmap.image().is_none() {
            if force_update {
                self.layout.invalidate();
            }
            self.cache_surface = self.platform.create_surface();
            self.update_cache()?;
        }
        self.bitmap.set_dirty(false);
        Ok(())
    }

    fn update_cache(&mut self) -> TextResult<()> {
        let surface = match self.cache_surface.take() {
            Some(surface) => Some(surface),
            None => self.platform.create_surface(),
        };
        let Some(mut surface) = surface else {
            self.bitmap.capture::<dyn OffscreenSurface>(None);
            return Ok(());
        };

        let drawn = self.draw_offscreen(&mut *surface);
        if drawn.is_ok() {
            self.bitmap.capture(Some(&*surface));
        }
        self.cache_surface = Some(surface);
        drawn
    }

    fn set_cache_dirty(&mut self, dirty: bool) {
        self.bitmap.set_dirty(dirty);
    }

    fn is_cache_dirty(&self) -> bool {
        self.bitmap.is_dirty()
    }
}

impl std::fmt::Debug for Text {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Text")
            .field("view", &self.view)
            .field("text", &self.text)
            .field("style", &self.style)
            .field("dirty", &self.bitmap.is_dirty())
            .field("destroyed", &self.destroyed)
            .finish_non_exhaustive()
    }
}

/// Re-capture the node behind `node` on the next turn of `tasks`.
fn defer_recache(tasks: &TaskQueue, node: Weak<RefCell<Text>>) {
    let queue = tasks.clone();
    tasks.defer(move || {
        let Some(handle) = node.upgrade() else {
            log::debug!("deferred recache skipped, text node was dropped");
            return;
        };
        let Ok(mut text) = handle.try_borrow_mut() else {
            log::debug!("text node busy, deferring recache another turn");
            defer_recache(&queue, node);
            return;
        };

        text.recache_scheduled = false;
        if text.destroyed {
            log::debug!("deferred recache skipped, {} was destroyed", text.view.id);
            return;
        }
        if let Err(err) = text.cache(false) {
            log::warn!("deferred recache of {} failed: {}", text.view.id, err);
        }
    });
}

fn to_pixels(length: f64) -> u32 {
    if length.is_finite() && length > 0.0 {
        length.ceil() as u32
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use hilo_render_headless::{GlyphMetrics, HeadlessPlatform};

    use super::*;

    fn node(config: TextConfig) -> (TextHandle, Rc<HeadlessPlatform>, TaskQueue) {
        let platform = Rc::new(HeadlessPlatform::new(GlyphMetrics::fixed(10.0, 20.0)));
        let tasks = TaskQueue::new();
        let text = Text::new(config, platform.clone(), tasks.clone());
        (text, platform, tasks)
    }

    #[test]
    fn defaults_match_the_scene_graph() {
        let (text, _, _) = node(TextConfig::default());
        let text = text.borrow();
        assert!(text.id().starts_with("Text"));
        assert_eq!(text.font(), "12px arial");
        assert_eq!(text.color(), "#000");
        assert_eq!(text.max_width(), 200.0);
        assert_eq!(text.line_spacing(), 0.0);
        assert!(!text.outline());
        assert_eq!(text.text_align(), None);
        assert!(text.is_cache_dirty());
    }

    #[test]
    fn draw_only_setters_keep_the_layout() {
        let (text, _, _) = node(TextConfig::default().text("hello"));
        let mut text = text.borrow_mut();
        text.cache(false).unwrap();
        assert!(text.layout().is_some());

        text.set_color("red").set_text_align(Some(TextAlign::Center));
        assert!(text.layout().is_some());
        assert!(text.is_cache_dirty());

        text.set_max_width(20.0);
        assert!(text.layout().is_none());
    }

    #[test]
    fn unchanged_values_do_not_dirty() {
        let (text, _, _) = node(TextConfig::default().text("hello"));
        let mut text = text.borrow_mut();
        text.cache(false).unwrap();
        text.set_text("hello").set_color("#000").set_font("12px arial");
        assert!(!text.is_cache_dirty());
        assert!(!text.is_recache_scheduled());
    }

    #[test]
    fn pixel_sizes_round_up() {
        assert_eq!(to_pixels(10.2), 11);
        assert_eq!(to_pixels(0.0), 0);
        assert_eq!(to_pixels(f64::NAN), 0);
    }
}
