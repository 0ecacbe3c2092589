use ahash::AHashMap;
use hilo_render::kurbo::Rect;
use hilo_render::{CachedImage, DomBackend, StyleAttr, StyleElement, TextAlign};

/// Style state of one element of [`HeadlessDom`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeadlessElement {
    pub font: String,
    pub text_align: Option<TextAlign>,
    pub color: String,
    pub width: f64,
    pub height: f64,
    pub line_height: f64,
    pub background_image: Option<CachedImage>,
    pub text_content: String,
    pub bounds: Option<Rect>,
}

impl HeadlessElement {
    /// Whether this element currently shows anything at all.
    pub fn is_showing_text(&self) -> bool {
        !self.text_content.is_empty()
    }
}

impl StyleElement for HeadlessElement {
    fn set_style(&mut self, attr: StyleAttr<'_>) {
        match attr {
            StyleAttr::Font(font) => font.clone_into(&mut self.font),
            StyleAttr::TextAlign(align) => self.text_align = align,
            StyleAttr::Color(color) => color.clone_into(&mut self.color),
            StyleAttr::Width(width) => self.width = width,
            StyleAttr::Height(height) => self.height = height,
            StyleAttr::LineHeight(line_height) => self.line_height = line_height,
            StyleAttr::BackgroundImage(image) => self.background_image = image.cloned(),
        }
    }

    fn set_text_content(&mut self, text: &str) {
        text.clone_into(&mut self.text_content);
    }
}

/// Retained-tree renderer keeping its elements in memory.
#[derive(Debug, Clone, Default)]
pub struct HeadlessDom {
    elements: AHashMap<String, HeadlessElement>,
    frames: u64,
}

impl HeadlessDom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<&HeadlessElement> {
        self.elements.get(id)
    }

    /// Number of `draw_element` calls received.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl DomBackend for HeadlessDom {
    fn element(&mut self, id: &str) -> &mut dyn StyleElement {
        self.elements.entry(id.to_owned()).or_default()
    }

    fn draw_element(&mut self, id: &str, bounds: Rect) {
        self.frames += 1;
        self.elements.entry(id.to_owned()).or_default().bounds = Some(bounds);
    }
}
