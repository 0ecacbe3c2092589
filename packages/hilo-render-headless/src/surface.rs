use std::sync::Arc;

use hilo_render::kurbo::{Point, Rect};
use hilo_render::peniko::Color;
use hilo_render::{
    CachedImage, DrawCommand, OffscreenSurface, Scene, SurfaceError, SurfaceResult, TextBaseline,
    TextPaint, TextSurface,
};

use crate::GlyphMetrics;

/// Drawing state of a freshly created canvas.
fn initial_paint() -> TextPaint {
    TextPaint {
        font: "10px sans-serif".to_owned(),
        align: None,
        baseline: TextBaseline::Alphabetic,
    }
}

/// A surface that records every command into a [`Scene`] and measures with [`GlyphMetrics`].
#[derive(Debug, Clone)]
pub struct HeadlessSurface {
    metrics: Arc<GlyphMetrics>,
    paint: TextPaint,
    scene: Scene,
    width: u32,
    height: u32,
    can_measure: bool,
    measure_calls: u64,
}

impl HeadlessSurface {
    pub fn new(metrics: Arc<GlyphMetrics>) -> Self {
        Self {
            metrics,
            paint: initial_paint(),
            scene: Scene::new(),
            width: 0,
            height: 0,
            can_measure: true,
            measure_calls: 0,
        }
    }

    /// A surface whose measurement primitive is missing, e.g. one that failed to attach.
    pub fn without_measurement(metrics: Arc<GlyphMetrics>) -> Self {
        Self {
            can_measure: false,
            ..Self::new(metrics)
        }
    }

    pub fn paint(&self) -> &TextPaint {
        &self.paint
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn take_scene(&mut self) -> Scene {
        std::mem::take(&mut self.scene)
    }

    /// Number of times [`TextSurface::measure_text`] has been called.
    pub fn measure_calls(&self) -> u64 {
        self.measure_calls
    }
}

impl TextSurface for HeadlessSurface {
    fn set_text_paint(&mut self, paint: &TextPaint) {
        if self.paint != *paint {
            self.paint = paint.clone();
            self.scene.push(DrawCommand::SetTextPaint(paint.clone()));
        }
    }

    fn measure_text(&mut self, text: &str) -> SurfaceResult<f64> {
        self.measure_calls += 1;
        if !self.can_measure {
            return Err(SurfaceError::MeasurementUnavailable);
        }
        Ok(self.metrics.text_width(&self.paint.font, text))
    }

    fn fill_text(&mut self, text: &str, origin: Point, color: Color) {
        self.scene.push(DrawCommand::FillText {
            text: text.to_owned(),
            origin,
            color,
        });
    }

    fn stroke_text(&mut self, text: &str, origin: Point, color: Color) {
        self.scene.push(DrawCommand::StrokeText {
            text: text.to_owned(),
            origin,
            color,
        });
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.scene.push(DrawCommand::FillRect { rect, color });
    }
}

impl OffscreenSurface for HeadlessSurface {
    fn resize(&mut self, width: u32, height: u32) {
        // Like a canvas, resizing wipes the content and the drawing state.
        self.width = width;
        self.height = height;
        self.scene.clear();
        self.paint = initial_paint();
    }

    fn snapshot(&self) -> CachedImage {
        CachedImage::new(self.width, self.height, self.scene.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paint(font: &str) -> TextPaint {
        TextPaint {
            font: font.to_owned(),
            align: None,
            baseline: TextBaseline::Top,
        }
    }

    #[test]
    fn measures_under_current_font() {
        let mut surface = HeadlessSurface::new(Arc::new(GlyphMetrics::proportional(0.5, 1.2)));
        surface.set_text_paint(&paint("20px serif"));
        assert_eq!(surface.measure_text("abc").unwrap(), 30.0);
        surface.set_text_paint(&paint("10px serif"));
        assert_eq!(surface.measure_text("abc").unwrap(), 15.0);
        assert_eq!(surface.measure_calls(), 2);
    }

    #[test]
    fn missing_measurement_fails_loudly() {
        let mut surface = HeadlessSurface::without_measurement(Arc::new(GlyphMetrics::default()));
        assert!(matches!(
            surface.measure_text("a"),
            Err(SurfaceError::MeasurementUnavailable)
        ));
    }

    #[test]
    fn resize_clears_recorded_content() {
        let mut surface = HeadlessSurface::new(Arc::new(GlyphMetrics::default()));
        surface.fill_text("hi", Point::ZERO, Color::BLACK);
        surface.resize(40, 20);
        assert!(surface.scene().is_empty());
        assert_eq!(surface.snapshot().width(), 40);
    }
}
