use hilo_render::peniko::Color;
use hilo_render::peniko::color::{Srgb, parse_color};

/// Convert a CSS color string for a pixel surface.
///
/// Like a canvas `fillStyle` assignment, an unparsable value does not fail the draw; it falls
/// back to black.
pub(crate) fn to_surface_color(css: &str) -> Color {
    match parse_color(css) {
        Ok(color) => color.to_alpha_color::<Srgb>(),
        Err(err) => {
            log::warn!("Unparsable color {:?} ({:?}), drawing in black", css, err);
            Color::BLACK
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_hex_and_names() {
        assert_eq!(to_surface_color("#000"), Color::BLACK);
        assert_eq!(to_surface_color("white"), Color::WHITE);
        assert_eq!(to_surface_color("not a color"), Color::BLACK);
    }
}
