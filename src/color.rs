//! Colors are stored the way the user picked them (`"red"`, `"#1f77b4"`) and
//! only turned into [`Color32`] when a shape is painted.

use csscolorparser::Color as CssColor;
use egui::Color32;
use std::str::FromStr;

/// Parse a textual color.
///
/// Anything CSS understands is accepted: hex forms, `rgb()`/`hsl()` and the
/// full named color set (case-insensitive). An empty string means "no color"
/// and yields `None`, as does anything unrecognised.
pub fn parse_color(text: &str) -> Option<Color32> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    let [r, g, b, a] = CssColor::from_str(text).ok()?.to_rgba8();
    Some(Color32::from_rgba_unmultiplied(r, g, b, a))
}

/// Whether `text` names a color that can be painted
pub fn is_valid_color(text: &str) -> bool {
    parse_color(text).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_and_names() {
        assert_eq!(parse_color("#ff0000"), Some(Color32::from_rgb(255, 0, 0)));
        assert_eq!(parse_color("Red"), Some(Color32::from_rgb(255, 0, 0)));
        assert_eq!(parse_color("white"), Some(Color32::WHITE));
        assert_eq!(parse_color("#0f0"), Some(Color32::from_rgb(0, 255, 0)));
    }

    #[test]
    fn accepts_the_full_name_set() {
        assert_eq!(parse_color("navy"), Some(Color32::from_rgb(0, 0, 128)));
        assert_eq!(parse_color("SkyBlue"), Some(Color32::from_rgb(135, 206, 235)));
        assert_eq!(parse_color("gold"), Some(Color32::from_rgb(255, 215, 0)));
        assert_eq!(parse_color("rgb(10, 20, 30)"), Some(Color32::from_rgb(10, 20, 30)));
    }

    #[test]
    fn empty_and_unknown_are_none() {
        assert_eq!(parse_color(""), None);
        assert_eq!(parse_color("not-a-color"), None);
        assert!(!is_valid_color("#zzzzzz"));
    }
}
