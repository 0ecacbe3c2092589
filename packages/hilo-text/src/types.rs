//! Core data structures for text layout

use serde::{Deserialize, Serialize};

pub use hilo_render::TextAlign;

/// Vertical placement of the text block inside its box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextVAlign {
    Top,
    Middle,
    Bottom,
}

/// Style fields that affect how a text node is laid out and drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// CSS font shorthand
    pub font: String,
    /// CSS color
    pub color: String,
    pub text_align: Option<TextAlign>,
    pub text_valign: Option<TextVAlign>,
    /// Stroke the glyph outlines instead of filling them
    pub outline: bool,
    /// Extra pixels between consecutive lines
    pub line_spacing: f64,
    /// Width budget for line breaking
    pub max_width: f64,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font: "12px arial".to_owned(),
            color: "#000".to_owned(),
            text_align: None,
            text_valign: None,
            outline: false,
            line_spacing: 0.0,
            max_width: 200.0,
        }
    }
}

/// One displayable line and its offset from the top of the text block.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawLine {
    pub text: String,
    pub y: f64,
}

/// Outcome of one line breaking pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutResult {
    pub draw_lines: Vec<DrawLine>,
    /// Widest measured line
    pub width: f64,
    /// Sum of the line advances
    pub height: f64,
}

impl LayoutResult {
    pub fn is_empty(&self) -> bool {
        self.draw_lines.is_empty()
    }

    pub fn line_count(&self) -> usize {
        self.draw_lines.len()
    }

    /// All line texts concatenated in order.
    pub fn joined_text(&self) -> String {
        self.draw_lines.iter().map(|line| line.text.as_str()).collect()
    }
}
