//! Visual values derived from toggle state.
//!
//! Everything that changes when the toggle flips or the pointer moves is
//! computed here from `(config, selected, hover)`. Rendering and painting
//! both read from a [`ToggleAppearance`], so the two can never disagree.

use crate::config::{Icon, ToggleConfig};
use flipswitch_core::{Color, Shadow};

/// Horizontal thumb offset while selected, in pixels.
pub const THUMB_ON_OFFSET: f32 = 20.0;
/// Horizontal thumb offset while not selected, in pixels.
pub const THUMB_OFF_OFFSET: f32 = -10.0;

const fn black(alpha: f32) -> Color {
    Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: alpha,
    }
}

/// Thumb shadow at rest.
pub const THUMB_SHADOW: [Shadow; 2] = [
    Shadow::new(0.0, 0.0, 3.0, black(0.12)),
    Shadow::new(0.0, 3.0, 6.0, black(0.24)),
];

/// Thumb shadow while the track wrapper is hovered.
pub const THUMB_SHADOW_HOVER: [Shadow; 2] = [
    Shadow::new(0.0, 0.0, 5.0, black(0.16)),
    Shadow::new(0.0, 5.0, 10.0, black(0.32)),
];

/// Which parts of the control the pointer is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HoverState {
    /// Pointer is over the outer container or one of its visible parts
    pub container: bool,
    /// Pointer is over the clickable track wrapper
    pub wrapper: bool,
}

/// Derived visual values for one state of the control.
#[derive(Debug, Clone, PartialEq)]
pub struct ToggleAppearance<'a> {
    /// Thumb background (CSS color, as configured)
    pub thumb_color: &'a str,
    /// Track background (CSS color, as configured)
    pub track_color: &'a str,
    /// Horizontal thumb translation in pixels
    pub thumb_offset: f32,
    /// Thumb drop shadows
    pub thumb_shadows: [Shadow; 2],
    /// Icon drawn in the thumb
    pub icon: Option<&'a Icon>,
    /// Whether the tooltip is revealed (only meaningful if enabled)
    pub tooltip_visible: bool,
}

impl<'a> ToggleAppearance<'a> {
    /// Derive the appearance for a selection and hover state.
    #[must_use]
    pub fn derive(config: &'a ToggleConfig, selected: bool, hover: HoverState) -> Self {
        let (thumb_color, track_color, thumb_offset) = if selected {
            (&config.thumb_on_color, &config.track_on_color, THUMB_ON_OFFSET)
        } else {
            (&config.thumb_off_color, &config.track_off_color, THUMB_OFF_OFFSET)
        };

        let icon = config
            .icons()
            .map(|(off, on)| if selected { on } else { off });

        Self {
            thumb_color,
            track_color,
            thumb_offset,
            thumb_shadows: if hover.wrapper {
                THUMB_SHADOW_HOVER
            } else {
                THUMB_SHADOW
            },
            icon,
            tooltip_visible: hover.container,
        }
    }

    /// CSS `transform` value for the thumb.
    #[must_use]
    pub fn thumb_transform(&self) -> String {
        format!("translate({}px)", self.thumb_offset)
    }

    /// CSS `box-shadow` value for the thumb.
    #[must_use]
    pub fn thumb_box_shadow(&self) -> String {
        Shadow::list_to_css(&self.thumb_shadows)
    }
}
