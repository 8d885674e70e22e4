//! Draw commands recorded by canvases.
//!
//! All painting reduces to these primitives.

use crate::widget::TextStyle;
use crate::{Color, CornerRadius, Point, Rect};
use serde::{Deserialize, Serialize};

/// Box style for rectangles and circles.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BoxStyle {
    /// Fill color (None = no fill)
    pub fill: Option<Color>,
    /// Drop shadows, painted back to front
    pub shadows: Vec<Shadow>,
}

impl BoxStyle {
    /// Create a box with only fill color.
    #[must_use]
    pub const fn fill(color: Color) -> Self {
        Self {
            fill: Some(color),
            shadows: Vec::new(),
        }
    }

    /// Add a shadow to the box.
    #[must_use]
    pub fn with_shadow(mut self, shadow: Shadow) -> Self {
        self.shadows.push(shadow);
        self
    }
}

/// Drop shadow, equivalent to one entry of a CSS `box-shadow` list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    /// Shadow color
    pub color: Color,
    /// Horizontal offset
    pub offset_x: f32,
    /// Vertical offset
    pub offset_y: f32,
    /// Blur radius
    pub blur: f32,
}

impl Shadow {
    /// Create a shadow.
    #[must_use]
    pub const fn new(offset_x: f32, offset_y: f32, blur: f32, color: Color) -> Self {
        Self {
            color,
            offset_x,
            offset_y,
            blur,
        }
    }

    /// CSS notation, e.g. `0 3px 6px rgba(0, 0, 0, 0.24)`.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!(
            "{} {} {} rgba({}, {}, {}, {})",
            css_px(self.offset_x),
            css_px(self.offset_y),
            css_px(self.blur),
            (self.color.r * 255.0).round() as u8,
            (self.color.g * 255.0).round() as u8,
            (self.color.b * 255.0).round() as u8,
            (self.color.a * 100.0).round() / 100.0,
        )
    }

    /// CSS notation for a list of shadows.
    #[must_use]
    pub fn list_to_css(shadows: &[Self]) -> String {
        shadows
            .iter()
            .map(Self::to_css)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn css_px(v: f32) -> String {
    if v == 0.0 {
        "0".to_string()
    } else {
        format!("{v}px")
    }
}

/// Drawing primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Draw a rectangle
    Rect {
        /// Rectangle bounds
        bounds: Rect,
        /// Corner radius
        radius: CornerRadius,
        /// Box style
        style: BoxStyle,
    },

    /// Draw a circle
    Circle {
        /// Center point
        center: Point,
        /// Radius
        radius: f32,
        /// Box style
        style: BoxStyle,
    },

    /// Draw text
    Text {
        /// Text content
        content: String,
        /// Position of the top-left corner of the text box
        position: Point,
        /// Text style
        style: TextStyle,
    },
}

impl DrawCommand {
    /// Create a filled rectangle.
    #[must_use]
    pub const fn filled_rect(bounds: Rect, color: Color) -> Self {
        Self::Rect {
            bounds,
            radius: CornerRadius::ZERO,
            style: BoxStyle::fill(color),
        }
    }

    /// Create a filled circle.
    #[must_use]
    pub const fn filled_circle(center: Point, radius: f32, color: Color) -> Self {
        Self::Circle {
            center,
            radius,
            style: BoxStyle::fill(color),
        }
    }

    /// Fill color of a shape command.
    #[must_use]
    pub fn fill_color(&self) -> Option<Color> {
        match self {
            Self::Rect { style, .. } | Self::Circle { style, .. } => style.fill,
            Self::Text { .. } => None,
        }
    }
}
