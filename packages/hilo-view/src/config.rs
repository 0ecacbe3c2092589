use hilo_text::{TextAlign, TextStyle, TextVAlign};
use serde::Deserialize;

use crate::error::TextResult;
use crate::view::ViewBase;

/// Options used when constructing a [`Text`](crate::Text) node.
///
/// Every present field overrides the node default; absent fields keep it. Keys follow the
/// scene graph's property names (`maxWidth`, `textVAlign`, ...) and unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextConfig {
    pub id: Option<String>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub visible: Option<bool>,
    pub background: Option<String>,

    pub text: Option<String>,
    pub font: Option<String>,
    pub color: Option<String>,
    pub text_align: Option<TextAlign>,
    #[serde(rename = "textVAlign")]
    pub text_valign: Option<TextVAlign>,
    pub outline: Option<bool>,
    pub line_spacing: Option<f64>,
    pub max_width: Option<f64>,
}

impl TextConfig {
    /// Read a property bag from JSON, e.g. `{"text": "hi", "maxWidth": 120}`.
    pub fn from_json(json: &str) -> TextResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn font(mut self, font: impl Into<String>) -> Self {
        self.font = Some(font.into());
        self
    }

    pub fn max_width(mut self, max_width: f64) -> Self {
        self.max_width = Some(max_width);
        self
    }

    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub(crate) fn apply_view(&self, view: &mut ViewBase) {
        if let Some(id) = &self.id {
            view.id.clone_from(id);
        }
        if let Some(x) = self.x {
            view.x = x;
        }
        if let Some(y) = self.y {
            view.y = y;
        }
        if let Some(width) = self.width {
            view.width = width;
        }
        if let Some(height) = self.height {
            view.height = height;
        }
        if let Some(visible) = self.visible {
            view.visible = visible;
        }
        if self.background.is_some() {
            view.background.clone_from(&self.background);
        }
    }

    pub(crate) fn apply_style(&self, style: &mut TextStyle) {
        if let Some(font) = &self.font {
            style.font.clone_from(font);
        }
        if let Some(color) = &self.color {
            style.color.clone_from(color);
        }
        if self.text_align.is_some() {
            style.text_align = self.text_align;
        }
        if self.text_valign.is_some() {
            style.text_valign = self.text_valign;
        }
        if let Some(outline) = self.outline {
            style.outline = outline;
        }
        if let Some(line_spacing) = self.line_spacing {
            style.line_spacing = line_spacing;
        }
        if let Some(max_width) = self.max_width {
            style.max_width = max_width;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bag_values_override_defaults() {
        let config = TextConfig::from_json(
            r#"{"text":"hi","maxWidth":120,"textAlign":"center","textVAlign":"bottom","lineSpacing":4}"#,
        )
        .unwrap();
        let mut style = TextStyle::default();
        config.apply_style(&mut style);

        assert_eq!(style.max_width, 120.0);
        assert_eq!(style.text_align, Some(TextAlign::Center));
        assert_eq!(style.text_valign, Some(TextVAlign::Bottom));
        assert_eq!(style.line_spacing, 4.0);
        assert_eq!(style.font, "12px arial");
        assert_eq!(style.color, "#000");
        assert_eq!(config.text.as_deref(), Some("hi"));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let config = TextConfig::from_json(r#"{"scaleX":2,"color":"red"}"#).unwrap();
        assert_eq!(config.color.as_deref(), Some("red"));
    }

    #[test]
    fn malformed_bag_is_an_error() {
        assert!(TextConfig::from_json(r#"{"textAlign":"diagonal"}"#).is_err());
    }

    #[test]
    fn view_fields_are_applied() {
        let config = TextConfig::default().size(100.0, 40.0);
        let mut view = ViewBase::new("Text1");
        config.apply_view(&mut view);
        assert_eq!((view.width, view.height), (100.0, 40.0));
        assert_eq!(view.id, "Text1");
    }
}
