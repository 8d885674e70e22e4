//! Color representation and CSS color parsing.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// RGBA color with values in the range [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red component [0.0, 1.0]
    pub r: f32,
    /// Green component [0.0, 1.0]
    pub g: f32,
    /// Blue component [0.0, 1.0]
    pub b: f32,
    /// Alpha component [0.0, 1.0]
    pub a: f32,
}

impl Color {
    /// Black color
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    /// White color
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };
    /// Transparent color
    pub const TRANSPARENT: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    /// Create a new color, clamping values to [0.0, 1.0].
    #[must_use]
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Create an opaque color from RGB values.
    #[must_use]
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Create a color from 8-bit channels.
    #[must_use]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
            f32::from(a) / 255.0,
        )
    }

    /// Parse a hex color string (`#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`).
    ///
    /// The leading `#` is optional and digits are case-insensitive.
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let hex = hex.trim().trim_start_matches('#');
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidHex(hex.to_string()));
        }

        let nibble = |i: usize| u8::from_str_radix(&hex[i..=i], 16).map(|v| v * 17);
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
        let parsed = match hex.len() {
            3 => (nibble(0), nibble(1), nibble(2), Ok(255)),
            4 => (nibble(0), nibble(1), nibble(2), nibble(3)),
            6 => (byte(0), byte(2), byte(4), Ok(255)),
            8 => (byte(0), byte(2), byte(4), byte(6)),
            len => return Err(ColorParseError::InvalidLength(len)),
        };

        match parsed {
            (Ok(r), Ok(g), Ok(b), Ok(a)) => Ok(Self::from_rgba8(r, g, b, a)),
            _ => Err(ColorParseError::InvalidHex(hex.to_string())),
        }
    }

    /// Parse a CSS color value.
    ///
    /// Accepts hex notation, `rgb(..)` / `rgba(..)` functions with 0-255
    /// channels and a 0-1 alpha, the CSS named colors and `transparent`.
    pub fn from_css(value: &str) -> Result<Self, ColorParseError> {
        let value = value.trim();
        if value.starts_with('#') {
            return Self::from_hex(value);
        }

        if let Some(named) = Self::from_name(value) {
            return Ok(named);
        }

        let lower = value.to_ascii_lowercase();

        let args = lower
            .strip_prefix("rgba(")
            .or_else(|| lower.strip_prefix("rgb("))
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| ColorParseError::Unsupported(value.to_string()))?;

        let parts: Vec<f32> = args
            .split(',')
            .map(|p| p.trim().parse::<f32>())
            .collect::<Result<_, _>>()
            .map_err(|_| ColorParseError::Unsupported(value.to_string()))?;

        match parts.as_slice() {
            [r, g, b] => Ok(Self::rgb(r / 255.0, g / 255.0, b / 255.0)),
            [r, g, b, a] => Ok(Self::new(r / 255.0, g / 255.0, b / 255.0, *a)),
            _ => Err(ColorParseError::Unsupported(value.to_string())),
        }
    }

    /// Convert to hex string (RGB only).
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}",
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8
        )
    }

    /// Look up a CSS named color (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        if name == "transparent" {
            return Some(Self::TRANSPARENT);
        }
        NAMED_COLORS
            .binary_search_by(|(n, _)| (*n).cmp(name.as_str()))
            .ok()
            .map(|i| {
                let [_, r, g, b] = NAMED_COLORS[i].1.to_be_bytes();
                Self::from_rgba8(r, g, b, 255)
            })
    }
}

/// CSS named colors, sorted by name.
const NAMED_COLORS: [(&str, u32); 148] = [
    ("aliceblue", 0xf0f8ff),
    ("antiquewhite", 0xfaebd7),
    ("aqua", 0x00ffff),
    ("aquamarine", 0x7fffd4),
    ("azure", 0xf0ffff),
    ("beige", 0xf5f5dc),
    ("bisque", 0xffe4c4),
    ("black", 0x000000),
    ("blanchedalmond", 0xffebcd),
    ("blue", 0x0000ff),
    ("blueviolet", 0x8a2be2),
    ("brown", 0xa52a2a),
    ("burlywood", 0xdeb887),
    ("cadetblue", 0x5f9ea0),
    ("chartreuse", 0x7fff00),
    ("chocolate", 0xd2691e),
    ("coral", 0xff7f50),
    ("cornflowerblue", 0x6495ed),
    ("cornsilk", 0xfff8dc),
    ("crimson", 0xdc143c),
    ("cyan", 0x00ffff),
    ("darkblue", 0x00008b),
    ("darkcyan", 0x008b8b),
    ("darkgoldenrod", 0xb8860b),
    ("darkgray", 0xa9a9a9),
    ("darkgreen", 0x006400),
    ("darkgrey", 0xa9a9a9),
    ("darkkhaki", 0xbdb76b),
    ("darkmagenta", 0x8b008b),
    ("darkolivegreen", 0x556b2f),
    ("darkorange", 0xff8c00),
    ("darkorchid", 0x9932cc),
    ("darkred", 0x8b0000),
    ("darksalmon", 0xe9967a),
    ("darkseagreen", 0x8fbc8f),
    ("darkslateblue", 0x483d8b),
    ("darkslategray", 0x2f4f4f),
    ("darkslategrey", 0x2f4f4f),
    ("darkturquoise", 0x00ced1),
    ("darkviolet", 0x9400d3),
    ("deeppink", 0xff1493),
    ("deepskyblue", 0x00bfff),
    ("dimgray", 0x696969),
    ("dimgrey", 0x696969),
    ("dodgerblue", 0x1e90ff),
    ("firebrick", 0xb22222),
    ("floralwhite", 0xfffaf0),
    ("forestgreen", 0x228b22),
    ("fuchsia", 0xff00ff),
    ("gainsboro", 0xdcdcdc),
    ("ghostwhite", 0xf8f8ff),
    ("gold", 0xffd700),
    ("goldenrod", 0xdaa520),
    ("gray", 0x808080),
    ("green", 0x008000),
    ("greenyellow", 0xadff2f),
    ("grey", 0x808080),
    ("honeydew", 0xf0fff0),
    ("hotpink", 0xff69b4),
    ("indianred", 0xcd5c5c),
    ("indigo", 0x4b0082),
    ("ivory", 0xfffff0),
    ("khaki", 0xf0e68c),
    ("lavender", 0xe6e6fa),
    ("lavenderblush", 0xfff0f5),
    ("lawngreen", 0x7cfc00),
    ("lemonchiffon", 0xfffacd),
    ("lightblue", 0xadd8e6),
    ("lightcoral", 0xf08080),
    ("lightcyan", 0xe0ffff),
    ("lightgoldenrodyellow", 0xfafad2),
    ("lightgray", 0xd3d3d3),
    ("lightgreen", 0x90ee90),
    ("lightgrey", 0xd3d3d3),
    ("lightpink", 0xffb6c1),
    ("lightsalmon", 0xffa07a),
    ("lightseagreen", 0x20b2aa),
    ("lightskyblue", 0x87cefa),
    ("lightslategray", 0x778899),
    ("lightslategrey", 0x778899),
    ("lightsteelblue", 0xb0c4de),
    ("lightyellow", 0xffffe0),
    ("lime", 0x00ff00),
    ("limegreen", 0x32cd32),
    ("linen", 0xfaf0e6),
    ("magenta", 0xff00ff),
    ("maroon", 0x800000),
    ("mediumaquamarine", 0x66cdaa),
    ("mediumblue", 0x0000cd),
    ("mediumorchid", 0xba55d3),
    ("mediumpurple", 0x9370db),
    ("mediumseagreen", 0x3cb371),
    ("mediumslateblue", 0x7b68ee),
    ("mediumspringgreen", 0x00fa9a),
    ("mediumturquoise", 0x48d1cc),
    ("mediumvioletred", 0xc71585),
    ("midnightblue", 0x191970),
    ("mintcream", 0xf5fffa),
    ("mistyrose", 0xffe4e1),
    ("moccasin", 0xffe4b5),
    ("navajowhite", 0xffdead),
    ("navy", 0x000080),
    ("oldlace", 0xfdf5e6),
    ("olive", 0x808000),
    ("olivedrab", 0x6b8e23),
    ("orange", 0xffa500),
    ("orangered", 0xff4500),
    ("orchid", 0xda70d6),
    ("palegoldenrod", 0xeee8aa),
    ("palegreen", 0x98fb98),
    ("paleturquoise", 0xafeeee),
    ("palevioletred", 0xdb7093),
    ("papayawhip", 0xffefd5),
    ("peachpuff", 0xffdab9),
    ("peru", 0xcd853f),
    ("pink", 0xffc0cb),
    ("plum", 0xdda0dd),
    ("powderblue", 0xb0e0e6),
    ("purple", 0x800080),
    ("rebeccapurple", 0x663399),
    ("red", 0xff0000),
    ("rosybrown", 0xbc8f8f),
    ("royalblue", 0x4169e1),
    ("saddlebrown", 0x8b4513),
    ("salmon", 0xfa8072),
    ("sandybrown", 0xf4a460),
    ("seagreen", 0x2e8b57),
    ("seashell", 0xfff5ee),
    ("sienna", 0xa0522d),
    ("silver", 0xc0c0c0),
    ("skyblue", 0x87ceeb),
    ("slateblue", 0x6a5acd),
    ("slategray", 0x708090),
    ("slategrey", 0x708090),
    ("snow", 0xfffafa),
    ("springgreen", 0x00ff7f),
    ("steelblue", 0x4682b4),
    ("tan", 0xd2b48c),
    ("teal", 0x008080),
    ("thistle", 0xd8bfd8),
    ("tomato", 0xff6347),
    ("turquoise", 0x40e0d0),
    ("violet", 0xee82ee),
    ("wheat", 0xf5deb3),
    ("white", 0xffffff),
    ("whitesmoke", 0xf5f5f5),
    ("yellow", 0xffff00),
    ("yellowgreen", 0x9acd32),
];

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Error type for color parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// Invalid hex characters
    #[error("invalid hex characters in {0:?}")]
    InvalidHex(String),
    /// Invalid string length
    #[error("invalid hex string length {0} (expected 3, 4, 6 or 8)")]
    InvalidLength(usize),
    /// Not a color notation this parser understands
    #[error("unsupported color value {0:?}")]
    Unsupported(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_color_new_clamps_values() {
        let c = Color::new(1.5, -0.5, 0.5, 2.0);
        assert_eq!(c, Color::new(1.0, 0.0, 0.5, 1.0));
    }

    #[test]
    fn test_color_from_hex_long() {
        let c = Color::from_hex("#2FA8DD").unwrap();
        assert_eq!(c.to_hex(), "#2fa8dd");
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn test_color_from_hex_short() {
        assert_eq!(Color::from_hex("#fff").unwrap(), Color::WHITE);
        assert_eq!(Color::from_hex("000").unwrap(), Color::BLACK);
    }

    #[test]
    fn test_color_from_hex_short_with_alpha() {
        let c = Color::from_hex("#f008").unwrap();
        assert_eq!(c.r, 1.0);
        assert!((c.a - 0.533).abs() < 0.01);
    }

    #[test]
    fn test_color_from_hex_with_alpha() {
        let c = Color::from_hex("#ff000080").unwrap();
        assert!((c.a - 0.502).abs() < 0.01);
    }

    #[test]
    fn test_color_from_hex_invalid() {
        assert!(matches!(
            Color::from_hex("#gg0000"),
            Err(ColorParseError::InvalidHex(_))
        ));
        assert_eq!(
            Color::from_hex("#ff"),
            Err(ColorParseError::InvalidLength(2))
        );
    }

    #[test]
    fn test_color_from_css_rgba() {
        let c = Color::from_css("rgba(0, 0, 0, 0.24)").unwrap();
        assert_eq!(c.r, 0.0);
        assert!((c.a - 0.24).abs() < 1e-6);

        let c = Color::from_css("rgb(115, 115, 115)").unwrap();
        assert_eq!(c.to_hex(), "#737373");
    }

    #[test]
    fn test_color_from_css_keywords() {
        assert_eq!(Color::from_css("White").unwrap(), Color::WHITE);
        assert_eq!(Color::from_css("transparent").unwrap(), Color::TRANSPARENT);
    }

    #[test]
    fn test_color_from_css_unsupported() {
        assert!(matches!(
            Color::from_css("hsl(10, 20%, 30%)"),
            Err(ColorParseError::Unsupported(_))
        ));
        assert!(Color::from_css("rgba(1, 2)").is_err());
        assert!(Color::from_css("").is_err());
    }

    #[test]
    fn test_color_parse_error_display() {
        assert_eq!(
            ColorParseError::InvalidLength(5).to_string(),
            "invalid hex string length 5 (expected 3, 4, 6 or 8)"
        );
    }

    #[test]
    fn test_color_from_css_named() {
        assert_eq!(Color::from_css("red").unwrap(), Color::rgb(1.0, 0.0, 0.0));
        assert_eq!(Color::from_css("RebeccaPurple").unwrap().to_hex(), "#663399");
        assert_eq!(Color::from_css(" grey ").unwrap().to_hex(), "#808080");
        assert!(matches!(
            Color::from_css("reddish"),
            Err(ColorParseError::Unsupported(_))
        ));
    }

    #[test]
    fn test_named_colors_sorted() {
        assert!(NAMED_COLORS.windows(2).all(|w| w[0].0 < w[1].0));
        for (name, rgb) in NAMED_COLORS {
            let hex = format!("#{rgb:06x}");
            assert_named_hex(name, &hex);
        }
    }

    fn assert_named_hex(name: &str, hex: &str) {
        assert_eq!(Color::from_name(name).map(|c| c.to_hex()).as_deref(), Some(hex));
    }

    proptest! {
        #[test]
        fn prop_hex_matches_to_hex(r: u8, g: u8, b: u8) {
            let hex = format!("#{r:02x}{g:02x}{b:02x}");
            let c = Color::from_hex(&hex).unwrap();
            prop_assert_eq!(c.to_hex(), hex);
        }

        #[test]
        fn prop_from_css_never_panics(s in "\\PC{0,16}") {
            let _ = Color::from_css(&s);
        }
    }
}
