use std::sync::Arc;

use hilo_render::kurbo::Size;
use hilo_render::{SurfaceResult, TextBaseline, TextPaint, TextSurface};
use hilo_render_headless::{GlyphMetrics, HeadlessSurface};
use hilo_text::{
    CachedMeasure, GlyphWidthCache, LayoutCache, LayoutResult, LineBreaker, TextAlign, TextVAlign,
    resolve_lines,
};

fn surface(metrics: GlyphMetrics) -> HeadlessSurface {
    let mut surface = HeadlessSurface::new(Arc::new(metrics));
    surface.set_text_paint(&TextPaint {
        font: "12px arial".to_owned(),
        align: None,
        baseline: TextBaseline::Top,
    });
    surface
}

fn lay_out(text: &str, max_width: f64, surface: &mut HeadlessSurface) -> LayoutResult {
    let mut glyphs = GlyphWidthCache::new();
    LineBreaker::new(max_width, 20.0, 0.0)
        .break_lines(text, &mut CachedMeasure::new(&mut glyphs, surface))
        .unwrap()
}

fn texts(layout: &LayoutResult) -> Vec<&str> {
    layout.draw_lines.iter().map(|line| line.text.as_str()).collect()
}

#[test]
fn layout_is_deterministic() {
    let mut surface = surface(GlyphMetrics::proportional(0.55, 1.25));
    let text = "The quick brown fox\njumps over the lazy dog<br/>and keeps running";
    let first = lay_out(text, 90.0, &mut surface);
    let second = lay_out(text, 90.0, &mut surface);
    assert_eq!(first, second);
}

#[test]
fn explicit_breaks_produce_verbatim_lines() {
    let mut surface = surface(GlyphMetrics::fixed(10.0, 20.0));
    let layout = lay_out("one\r\ntwo\rthree<br>four<br />five\nsix", 1000.0, &mut surface);
    assert_eq!(texts(&layout), ["one", "two", "three", "four", "five", "six"]);
    assert_eq!(layout.height, 120.0);
    assert_eq!(layout.width, 50.0);
}

#[test]
fn fit_is_judged_per_paragraph() {
    // Each paragraph is checked against its own width. Measuring the whole text for every
    // paragraph, as the JavaScript engine did, would push all three through character
    // packing here, since the paragraphs alone add up to 120px against a 40px budget.
    let mut surface = surface(GlyphMetrics::fixed(10.0, 20.0));
    let layout = lay_out("abcd\nefgh\nijkl", 40.0, &mut surface);
    assert_eq!(texts(&layout), ["abcd", "efgh", "ijkl"]);
}

#[test]
fn single_line_text_keeps_its_measured_width() {
    let mut surface = surface(GlyphMetrics::fixed(10.0, 20.0).with_override('W', 16.0));
    let layout = lay_out("Wow", 200.0, &mut surface);
    assert_eq!(layout.line_count(), 1);
    assert_eq!(layout.width, 36.0);
    assert_eq!(layout.height, 20.0);
}

#[test]
fn every_wrapped_line_fits_unless_it_is_one_glyph() {
    let mut surface = surface(GlyphMetrics::fixed(10.0, 20.0).with_override('M', 45.0));
    let text = "lorem ipsum M dolor sit amet";
    let layout = lay_out(text, 40.0, &mut surface);

    let mut glyphs = GlyphWidthCache::new();
    for line in &layout.draw_lines {
        let width = glyphs.measure(&line.text, &mut surface).unwrap();
        assert!(width <= 40.0 || line.text.chars().count() == 1, "{:?}", line.text);
    }
    assert_eq!(layout.joined_text(), text);
}

#[test]
fn memoized_layout_is_reused_until_invalidated() {
    let mut surface = surface(GlyphMetrics::fixed(10.0, 20.0));
    let mut cache = LayoutCache::new();
    let mut glyphs = GlyphWidthCache::new();
    let breaker = LineBreaker::new(200.0, 20.0, 0.0);

    for _ in 0..3 {
        cache
            .get_or_try_insert_with(|| {
                breaker.break_lines("memo", &mut CachedMeasure::new(&mut glyphs, &mut surface))
            })
            .unwrap();
    }
    assert_eq!(cache.passes(), 1);

    cache.invalidate();
    let result: SurfaceResult<_> = cache.get_or_try_insert_with(|| {
        breaker.break_lines("memo", &mut CachedMeasure::new(&mut glyphs, &mut surface))
    });
    assert_eq!(result.unwrap().width, 40.0);
    assert_eq!(cache.passes(), 2);
}

#[test]
fn aligned_lines_share_one_anchor() {
    let mut surface = surface(GlyphMetrics::fixed(10.0, 20.0));
    let layout = lay_out("short\nmuch longer", 200.0, &mut surface);
    let lines = resolve_lines(
        &layout,
        Size::new(150.0, 100.0),
        Some(TextAlign::End),
        Some(TextVAlign::Middle),
    );
    let origins: Vec<_> = lines.iter().map(|line| (line.origin.x, line.origin.y)).collect();
    assert_eq!(origins, [(150.0, 30.0), (150.0, 50.0)]);
}
