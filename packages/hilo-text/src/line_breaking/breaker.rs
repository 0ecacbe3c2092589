//! Character-level greedy packing
//!
//! Wrapping happens between any two characters rather than at word boundaries, so scripts
//! without separating whitespace wrap the same way as everything else.

use hilo_render::SurfaceResult;

use super::{MeasureText, split_paragraphs};
use crate::types::{DrawLine, LayoutResult};

/// Breaks paragraphs into lines no wider than `max_width`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineBreaker {
    max_width: f64,
    line_advance: f64,
}

impl LineBreaker {
    pub fn new(max_width: f64, line_height: f64, line_spacing: f64) -> Self {
        Self {
            max_width,
            line_advance: line_height + line_spacing,
        }
    }

    pub fn max_width(&self) -> f64 {
        self.max_width
    }

    /// Vertical distance between the tops of two consecutive lines.
    pub fn line_advance(&self) -> f64 {
        self.line_advance
    }

    pub fn break_lines<M: MeasureText + ?Sized>(
        &self,
        text: &str,
        measure: &mut M,
    ) -> SurfaceResult<LayoutResult> {
        if text.is_empty() {
            return Ok(LayoutResult::default());
        }

        let mut lines = Vec::new();
        for paragraph in split_paragraphs(text) {
            // Fit is judged on the paragraph itself, never on the whole text.
            if measure.measure(paragraph)? <= self.max_width {
                lines.push(paragraph.to_owned());
            } else {
                self.pack(paragraph, measure, &mut lines)?;
            }
        }

        let mut result = LayoutResult {
            draw_lines: Vec::with_capacity(lines.len()),
            width: 0.0,
            height: 0.0,
        };
        for text in lines {
            // Re-measured rather than trusting the tentative widths from packing.
            let width = measure.measure(&text)?;
            if width > result.width {
                result.width = width;
            }
            result.draw_lines.push(DrawLine {
                text,
                y: result.height,
            });
            result.height += self.line_advance;
        }
        Ok(result)
    }

    fn pack<M: MeasureText + ?Sized>(
        &self,
        paragraph: &str,
        measure: &mut M,
        lines: &mut Vec<String>,
    ) -> SurfaceResult<()> {
        let mut line = String::new();
        for ch in paragraph.chars() {
            line.push(ch);
            let overflows = measure.measure(&line)? > self.max_width;
            // A lone character is kept even when it alone overflows.
            if overflows && line.len() > ch.len_utf8() {
                line.truncate(line.len() - ch.len_utf8());
                lines.push(std::mem::replace(&mut line, String::from(ch)));
            }
        }
        if !line.is_empty() {
            lines.push(line);
        }
        Ok(())
    }
}
