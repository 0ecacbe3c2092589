use once_cell::sync::Lazy;
use regex::Regex;

/// CRLF, CR, LF, or a `<br>` tag with any run of spaces and slashes before the `>`.
static BREAK_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\r\n|\r|\n|<br(?:[ /])*>").expect("break marker pattern is valid"));

/// Split `text` into paragraphs on explicit break markers.
///
/// Always yields at least one (possibly empty) paragraph; consecutive markers yield empty
/// paragraphs between them.
pub fn split_paragraphs(text: &str) -> impl Iterator<Item = &str> {
    BREAK_MARKER.split(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(text: &str) -> Vec<&str> {
        split_paragraphs(text).collect()
    }

    #[test]
    fn splits_on_every_newline_flavour() {
        assert_eq!(split("a\r\nb\rc\nd"), ["a", "b", "c", "d"]);
    }

    #[test]
    fn crlf_is_a_single_break() {
        assert_eq!(split("a\r\n\r\nb"), ["a", "", "b"]);
    }

    #[test]
    fn splits_on_br_tags() {
        assert_eq!(split("a<br>b<br/>c<br />d<br / >e"), ["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn other_tags_are_kept() {
        assert_eq!(split("<b>bold</b><bra>"), ["<b>bold</b><bra>"]);
    }

    #[test]
    fn text_without_markers_is_one_paragraph() {
        assert_eq!(split("hello world"), ["hello world"]);
        assert_eq!(split(""), [""]);
    }
}
