use hilo_render::kurbo::Rect;
use hilo_render::{CanvasBackend, DomBackend, StyleAttr};

use super::Text;
use crate::error::TextResult;
use crate::render::{Drawable, Renderer};

impl Drawable for Text {
    fn render(&mut self, renderer: Renderer<'_>, _delta: f64) -> TextResult<()> {
        if self.destroyed || !self.view.visible {
            return Ok(());
        }
        log::trace!("render {} via {}", self.view.id, renderer.kind());

        match renderer {
            Renderer::Canvas(canvas) => self.render_canvas(canvas),
            Renderer::Dom(dom) => self.render_dom(dom),
            Renderer::Other(delegate) => {
                let image = self.bitmap.image().filter(|_| self.bitmap.is_reusable());
                delegate.draw(&self.view.id, self.view.bounds(), image);
                Ok(())
            }
        }
    }
}

impl Text {
    fn render_canvas(&mut self, canvas: &mut dyn CanvasBackend) -> TextResult<()> {
        if self.bitmap.is_reusable() {
            if let Some(image) = self.bitmap.image() {
                let dest = Rect::from_origin_size(
                    (self.view.x, self.view.y),
                    (f64::from(image.width()), f64::from(image.height())),
                );
                canvas.draw_image(image, dest);
                return Ok(());
            }
        }
        self.draw(canvas.context())
    }

    /// Mirror the text properties onto the node's element. The element shows either the
    /// captured image or the native text, never both.
    fn render_dom(&mut self, dom: &mut dyn DomBackend) -> TextResult<()> {
        let line_height = self.line_height()? + self.style.line_spacing;
        let reusable = self.bitmap.is_reusable();

        let element = dom.element(&self.view.id);
        element.set_style(StyleAttr::Font(&self.style.font));
        element.set_style(StyleAttr::TextAlign(self.style.text_align));
        element.set_style(StyleAttr::Color(&self.style.color));
        element.set_style(StyleAttr::Width(self.view.width));
        element.set_style(StyleAttr::Height(self.view.height));
        element.set_style(StyleAttr::LineHeight(line_height));
        if reusable {
            element.set_text_content("");
            element.set_style(StyleAttr::BackgroundImage(self.bitmap.image()));
        } else {
            element.set_style(StyleAttr::BackgroundImage(None));
            element.set_text_content(&self.text);
        }

        dom.draw_element(&self.view.id, self.view.bounds());
        Ok(())
    }
}
