//! Recorded drawing commands

use std::sync::Arc;

use peniko::kurbo::{Point, Rect};
use peniko::Color;

use crate::TextPaint;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    SetTextPaint(TextPaint),
    FillText {
        text: String,
        origin: Point,
        color: Color,
    },
    StrokeText {
        text: String,
        origin: Point,
        color: Color,
    },
    FillRect {
        rect: Rect,
        color: Color,
    },
}

/// An ordered list of drawing commands.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    commands: Vec<DrawCommand>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Text of every fill/stroke command, in drawing order.
    pub fn drawn_text(&self) -> impl Iterator<Item = (&str, Point)> + '_ {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::FillText { text, origin, .. }
            | DrawCommand::StrokeText { text, origin, .. } => Some((text.as_str(), *origin)),
            _ => None,
        })
    }
}

/// A captured offscreen surface.
///
/// Cloning is cheap; the recorded scene is shared.
#[derive(Debug, Clone, PartialEq)]
pub struct CachedImage {
    width: u32,
    height: u32,
    scene: Arc<Scene>,
}

impl CachedImage {
    pub fn new(width: u32, height: u32, scene: Scene) -> Self {
        Self {
            width,
            height,
            scene: Arc::new(scene),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }
}
