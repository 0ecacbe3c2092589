//! Placement of laid-out lines inside a node's box
//!
//! Horizontal alignment only picks the anchor x; the surface is expected to align each line
//! around it (its text align is set to the same value). Vertical alignment shifts the whole
//! block. Anchors are whole pixels, halves are rounded down.

use hilo_render::kurbo::{Point, Size};

use crate::types::{LayoutResult, TextAlign, TextVAlign};

/// A line ready to be handed to a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionedLine<'a> {
    pub text: &'a str,
    pub origin: Point,
}

/// Box used for alignment: declared dimensions, with unset (zero or invalid) ones replaced by
/// the computed text dimensions.
pub fn effective_box(declared: Size, layout: &LayoutResult) -> Size {
    let pick = |declared: f64, computed: f64| {
        if declared.is_finite() && declared > 0.0 {
            declared
        } else {
            computed
        }
    };
    Size::new(
        pick(declared.width, layout.width),
        pick(declared.height, layout.height),
    )
}

pub fn anchor_x(align: Option<TextAlign>, box_width: f64) -> f64 {
    match align {
        Some(TextAlign::Center) => (box_width / 2.0).floor(),
        Some(TextAlign::Right | TextAlign::End) => box_width,
        _ => 0.0,
    }
}

pub fn vertical_shift(valign: Option<TextVAlign>, box_height: f64, text_height: f64) -> f64 {
    match valign {
        Some(TextVAlign::Middle) => ((box_height - text_height) / 2.0).floor(),
        Some(TextVAlign::Bottom) => box_height - text_height,
        _ => 0.0,
    }
}

/// Per-line draw origins for `layout` inside `box_size`.
pub fn resolve_lines(
    layout: &LayoutResult,
    box_size: Size,
    align: Option<TextAlign>,
    valign: Option<TextVAlign>,
) -> Vec<PositionedLine<'_>> {
    let x = anchor_x(align, box_size.width);
    let shift = vertical_shift(valign, box_size.height, layout.height);
    layout
        .draw_lines
        .iter()
        .map(|line| PositionedLine {
            text: &line.text,
            origin: Point::new(x, shift + line.y),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DrawLine;

    fn layout(lines: &[&str], line_height: f64, width: f64) -> LayoutResult {
        LayoutResult {
            draw_lines: lines
                .iter()
                .enumerate()
                .map(|(i, text)| DrawLine {
                    text: (*text).to_owned(),
                    y: i as f64 * line_height,
                })
                .collect(),
            width,
            height: lines.len() as f64 * line_height,
        }
    }

    #[test]
    fn center_anchors_at_half_width_regardless_of_text() {
        for text in ["", "a", "a much longer line of text"] {
            let layout = layout(&[text], 10.0, 30.0);
            let lines = resolve_lines(
                &layout,
                Size::new(100.0, 10.0),
                Some(TextAlign::Center),
                None,
            );
            assert_eq!(lines[0].origin.x, 50.0);
        }
        assert_eq!(anchor_x(Some(TextAlign::Center), 101.0), 50.0);
    }

    #[test]
    fn right_and_end_anchor_at_box_edge() {
        assert_eq!(anchor_x(Some(TextAlign::Right), 80.0), 80.0);
        assert_eq!(anchor_x(Some(TextAlign::End), 80.0), 80.0);
        assert_eq!(anchor_x(Some(TextAlign::Left), 80.0), 0.0);
        assert_eq!(anchor_x(Some(TextAlign::Start), 80.0), 0.0);
        assert_eq!(anchor_x(None, 80.0), 0.0);
    }

    #[test]
    fn bottom_shifts_every_line_by_the_free_space() {
        let text = layout(&["a", "b"], 25.0, 10.0);
        let unshifted = resolve_lines(&text, Size::new(100.0, 80.0), None, None);
        let shifted = resolve_lines(
            &text,
            Size::new(100.0, 80.0),
            None,
            Some(TextVAlign::Bottom),
        );
        for (before, after) in unshifted.iter().zip(&shifted) {
            assert_eq!(after.origin.y - before.origin.y, 30.0);
        }
    }

    #[test]
    fn middle_rounds_down() {
        assert_eq!(vertical_shift(Some(TextVAlign::Middle), 81.0, 50.0), 15.0);
        assert_eq!(vertical_shift(Some(TextVAlign::Middle), 40.0, 45.0), -3.0);
        assert_eq!(vertical_shift(Some(TextVAlign::Top), 40.0, 10.0), 0.0);
    }

    #[test]
    fn unset_box_dimensions_adopt_the_text_size() {
        let text = layout(&["abc"], 12.0, 36.0);
        assert_eq!(effective_box(Size::ZERO, &text), Size::new(36.0, 12.0));
        assert_eq!(
            effective_box(Size::new(100.0, 0.0), &text),
            Size::new(100.0, 12.0)
        );
    }
}
