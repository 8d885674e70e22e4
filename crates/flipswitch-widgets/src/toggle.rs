//! Toggle switch control.
//!
//! A clickable track with a sliding thumb, optional per-state icons and an
//! optional hover tooltip. The only state is the selection flag; every
//! visual is derived from it (see [`ToggleAppearance`]).
//!
//! Layout follows the box model of the control's stylesheet: the track
//! wrapper sits 20px into the container with 12px of left padding, the
//! thumb hangs 0.25em above the track and is shifted horizontally by the
//! state offset, and the tooltip is absolutely positioned below the thumb.

use crate::appearance::{HoverState, ToggleAppearance};
use crate::config::{
    ConfigError, ToggleConfig, DEFAULT_THUMB_SIZE, DEFAULT_TRACK_HEIGHT, DEFAULT_TRACK_WIDTH,
};
use flipswitch_core::{
    AccessibleRole, BoxStyle, Canvas, Color, Constraints, CornerRadius, Event, LayoutResult,
    Length, MouseButton, Node, Point, Rect, Size, Style, TextStyle, TypeId, Widget,
    DEFAULT_FONT_SIZE,
};
use std::any::Any;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace, warn};

const WRAPPER_MARGIN_LEFT: f32 = 20.0;
const WRAPPER_MARGIN_RIGHT: f32 = 12.0;
const WRAPPER_PADDING_LEFT: f32 = 12.0;
const TRACK_RADIUS_EM: f32 = 0.5;
const THUMB_MARGIN_TOP_EM: f32 = -0.25;
const TOOLTIP_GAP: f32 = 14.0;
const TOOLTIP_MARGIN_LEFT: f32 = 20.0;
const TOOLTIP_PADDING_X: f32 = 8.0;
const TOOLTIP_PADDING_Y: f32 = 6.0;
const TOOLTIP_FONT_SIZE: f32 = 10.0;
const TOOLTIP_RADIUS: f32 = 2.0;
const TOOLTIP_BACKGROUND: &str = "#737373";
const TOOLTIP_COLOR: &str = "#fff";
const TRANSITION: &str = "150ms cubic-bezier(0.4, 0, 0.2, 1)";

/// Message emitted when the toggle state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleChanged {
    /// The new toggle state
    pub on: bool,
}

/// Callback invoked with the new selection value.
pub type ToggleCallback = Arc<dyn Fn(bool) + Send + Sync>;

/// Pixel sizes resolved from the configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Metrics {
    track_width: f32,
    track_height: f32,
    thumb_size: f32,
}

impl Metrics {
    fn resolve(config: &ToggleConfig) -> Self {
        let length = |raw: &str, fallback: &str| {
            raw.parse::<Length>()
                .or_else(|_| fallback.parse::<Length>())
                .map_or(0.0, |l| l.to_px(DEFAULT_FONT_SIZE))
                .max(0.0)
        };
        let thumb_size = if config.thumb_size.is_finite() && config.thumb_size > 0.0 {
            config.thumb_size
        } else {
            DEFAULT_THUMB_SIZE
        };

        Self {
            track_width: length(&config.track_width, DEFAULT_TRACK_WIDTH),
            track_height: length(&config.track_height, DEFAULT_TRACK_HEIGHT),
            thumb_size,
        }
    }
}

/// Part rectangles from the last layout. The thumb is stored unshifted.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct PartBounds {
    container: Rect,
    wrapper: Rect,
    track: Rect,
    thumb: Rect,
    tooltip: Rect,
}

/// Toggle switch control (on/off).
#[derive(Clone)]
pub struct ToggleControl {
    /// Configuration
    config: ToggleConfig,
    /// Current state
    selected: bool,
    /// Pointer position relative to the parts
    hover: HoverState,
    /// Left button went down inside the click target
    pressed: bool,
    /// Change callback
    on_toggle: Option<ToggleCallback>,
    /// Accessible name
    accessible_name_value: Option<String>,
    /// Test ID
    test_id_value: Option<String>,
    /// Cached layout
    parts: PartBounds,
}

impl fmt::Debug for ToggleControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToggleControl")
            .field("config", &self.config)
            .field("selected", &self.selected)
            .field("hover", &self.hover)
            .field("on_toggle", &self.on_toggle.as_ref().map(|_| ".."))
            .field("test_id", &self.test_id_value)
            .finish_non_exhaustive()
    }
}

impl Default for ToggleControl {
    fn default() -> Self {
        Self::new(ToggleConfig::default())
    }
}

impl ToggleControl {
    /// Mount a toggle.
    ///
    /// Values the painter cannot interpret are reported as warnings and
    /// passed through to the view tree unchanged.
    #[must_use]
    pub fn new(config: ToggleConfig) -> Self {
        for problem in config.problems() {
            warn!(%problem, "toggle configuration value passed through uninterpreted");
        }
        Self::mount(config)
    }

    /// Mount a toggle, rejecting configurations with problems.
    pub fn try_new(config: ToggleConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::mount(config))
    }

    fn mount(config: ToggleConfig) -> Self {
        let mut toggle = Self {
            config,
            selected: false,
            hover: HoverState::default(),
            pressed: false,
            on_toggle: None,
            accessible_name_value: None,
            test_id_value: None,
            parts: PartBounds::default(),
        };
        let size = toggle.measure(Constraints::unbounded());
        toggle.layout(Rect::from_size(size));
        toggle
    }

    /// Set the change callback.
    #[must_use]
    pub fn on_toggle(mut self, callback: impl Fn(bool) + Send + Sync + 'static) -> Self {
        self.on_toggle = Some(Arc::new(callback));
        self
    }

    /// Set the accessible name.
    #[must_use]
    pub fn accessible_name(mut self, name: impl Into<String>) -> Self {
        self.accessible_name_value = Some(name.into());
        self
    }

    /// Set the test ID.
    #[must_use]
    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Get the configuration.
    #[must_use]
    pub const fn config(&self) -> &ToggleConfig {
        &self.config
    }

    /// Get current state.
    #[must_use]
    pub const fn is_selected(&self) -> bool {
        self.selected
    }

    /// Get the hover state.
    #[must_use]
    pub const fn hover(&self) -> HoverState {
        self.hover
    }

    /// Visual values for the current state.
    #[must_use]
    pub fn appearance(&self) -> ToggleAppearance<'_> {
        ToggleAppearance::derive(&self.config, self.selected, self.hover)
    }

    /// Current thumb color.
    #[must_use]
    pub fn thumb_color(&self) -> &str {
        self.appearance().thumb_color
    }

    /// Current track color.
    #[must_use]
    pub fn track_color(&self) -> &str {
        self.appearance().track_color
    }

    /// Current horizontal thumb offset in pixels.
    #[must_use]
    pub fn thumb_offset(&self) -> f32 {
        self.appearance().thumb_offset
    }

    /// Click target (the track wrapper).
    #[must_use]
    pub const fn wrapper_bounds(&self) -> Rect {
        self.parts.wrapper
    }

    /// Thumb rectangle, including the state offset.
    #[must_use]
    pub fn thumb_bounds(&self) -> Rect {
        self.parts.thumb.translate(self.thumb_offset(), 0.0)
    }

    /// Tooltip rectangle, if the tooltip is enabled.
    #[must_use]
    pub fn tooltip_bounds(&self) -> Option<Rect> {
        self.config.tooltip.then_some(self.parts.tooltip)
    }

    /// Flip the selection, as a click on the track does.
    pub fn click(&mut self) -> Option<ToggleChanged> {
        self.transition(!self.selected)
    }

    /// Move to `next`: notify if it differs, then commit.
    fn transition(&mut self, next: bool) -> Option<ToggleChanged> {
        if next == self.selected {
            return None;
        }
        if let Some(callback) = &self.on_toggle {
            callback(next);
        }
        self.selected = next;
        debug!(selected = next, "toggle state changed");
        Some(ToggleChanged { on: next })
    }

    fn tooltip_visible(&self) -> bool {
        self.config.tooltip && self.hover.container
    }

    fn is_click_target(&self, point: &Point) -> bool {
        self.parts.wrapper.contains_point(point) || self.thumb_bounds().contains_point(point)
    }

    fn update_hover(&mut self, point: Option<&Point>) {
        let hover = point.map_or_else(HoverState::default, |p| {
            let wrapper = self.is_click_target(p);
            let over_tooltip =
                self.tooltip_visible() && self.parts.tooltip.contains_point(p);
            HoverState {
                container: wrapper || over_tooltip || self.parts.container.contains_point(p),
                wrapper,
            }
        });
        if hover != self.hover {
            trace!(?hover, "toggle hover changed");
            self.hover = hover;
        }
    }

    fn tooltip_size(&self) -> Size {
        let text_width = self.config.tooltip_text.chars().count() as f32 * TOOLTIP_FONT_SIZE * 0.6;
        Size::new(
            TOOLTIP_PADDING_X.mul_add(2.0, text_width),
            TOOLTIP_PADDING_Y.mul_add(2.0, TOOLTIP_FONT_SIZE * 1.2),
        )
    }

    fn render_thumb(&self, look: &ToggleAppearance<'_>) -> Node {
        let size = format!("{}px", self.config.thumb_size);
        let style = Style::new()
            .with("display", "flex")
            .with("justify-content", "center")
            .with("align-items", "center")
            .with("height", size.clone())
            .with("width", size)
            .with("border-radius", "50%")
            .with("box-shadow", look.thumb_box_shadow())
            .with("position", "absolute")
            .with("margin-top", "-0.25em")
            .with("background-color", look.thumb_color)
            .with("transform", look.thumb_transform())
            .with(
                "transition",
                format!("background-color {TRANSITION}, transform {TRANSITION}"),
            );

        let icon = look.icon.map(|icon| {
            let mut style = Style::new();
            if let Some(color) = &icon.color {
                style.set("color", color.clone());
            }
            Node::new("icon").style(style).text(icon.glyph.clone())
        });

        Node::new("thumb")
            .style(style)
            .bounds(self.thumb_bounds())
            .maybe_child(icon)
    }

    fn render_tooltip(&self, visible: bool) -> Node {
        let style = Style::new()
            .with("padding", "6px 8px")
            .with("border-radius", "2px")
            .with("background-color", TOOLTIP_BACKGROUND)
            .with("color", TOOLTIP_COLOR)
            .with("font-size", "10px")
            .with(
                "margin",
                format!("{}px 12px 0 20px", self.config.thumb_size + TOOLTIP_GAP),
            )
            .with("position", "absolute")
            .with("visibility", if visible { "visible" } else { "hidden" })
            .with("opacity", if visible { "1" } else { "0" })
            .with(
                "transition",
                format!("visibility {TRANSITION}, opacity {TRANSITION}"),
            );

        Node::new("tooltip")
            .style(style)
            .text(self.config.tooltip_text.clone())
            .bounds(self.parts.tooltip)
    }
}

impl Widget for ToggleControl {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let m = Metrics::resolve(&self.config);
        let width = WRAPPER_MARGIN_LEFT + WRAPPER_PADDING_LEFT + m.track_width + WRAPPER_MARGIN_RIGHT;
        constraints.constrain(Size::new(width, m.track_height))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        let m = Metrics::resolve(&self.config);

        let wrapper = Rect::new(
            bounds.x + WRAPPER_MARGIN_LEFT,
            bounds.y + (bounds.height - m.track_height) / 2.0,
            WRAPPER_PADDING_LEFT + m.track_width,
            m.track_height,
        );
        let track = Rect::new(
            wrapper.x + WRAPPER_PADDING_LEFT,
            wrapper.y,
            m.track_width,
            m.track_height,
        );
        let thumb = Rect::new(
            track.x,
            THUMB_MARGIN_TOP_EM.mul_add(DEFAULT_FONT_SIZE, track.y),
            m.thumb_size,
            m.thumb_size,
        );
        let tooltip_size = self.tooltip_size();
        let tooltip = Rect::new(
            bounds.x + TOOLTIP_MARGIN_LEFT,
            bounds.y + m.thumb_size + TOOLTIP_GAP,
            tooltip_size.width,
            tooltip_size.height,
        );

        self.parts = PartBounds {
            container: bounds,
            wrapper,
            track,
            thumb,
            tooltip,
        };
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let look = self.appearance();
        let paint_color = |css: &str| Color::from_css(css).unwrap_or(Color::TRANSPARENT);

        let track_radius = (TRACK_RADIUS_EM * DEFAULT_FONT_SIZE).min(self.parts.track.height / 2.0);
        canvas.draw_box(
            self.parts.track,
            CornerRadius::uniform(track_radius),
            &BoxStyle::fill(paint_color(look.track_color)),
        );

        let thumb = self.thumb_bounds();
        let mut thumb_style = BoxStyle::fill(paint_color(look.thumb_color));
        thumb_style.shadows.extend(look.thumb_shadows);
        canvas.draw_circle(thumb.center(), thumb.width / 2.0, &thumb_style);

        if let Some(icon) = look.icon {
            let size = thumb.width * 0.6;
            let text_style = TextStyle {
                size,
                color: icon
                    .color
                    .as_deref()
                    .map_or(Color::BLACK, paint_color),
            };
            let width = icon.glyph.chars().count() as f32 * size * 0.6;
            let position = Point::new(
                thumb.center().x - width / 2.0,
                thumb.center().y - size / 2.0,
            );
            canvas.draw_text(&icon.glyph, position, &text_style);
        }

        if self.tooltip_visible() {
            let rect = self.parts.tooltip;
            canvas.draw_box(
                rect,
                CornerRadius::uniform(TOOLTIP_RADIUS),
                &BoxStyle::fill(paint_color(TOOLTIP_BACKGROUND)),
            );
            let text_style = TextStyle {
                size: TOOLTIP_FONT_SIZE,
                color: Color::WHITE,
            };
            canvas.draw_text(
                &self.config.tooltip_text,
                Point::new(rect.x + TOOLTIP_PADDING_X, rect.y + TOOLTIP_PADDING_Y),
                &text_style,
            );
        }
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        match event {
            Event::MouseMove { position } => {
                self.update_hover(Some(position));
                None
            }
            Event::MouseLeave => {
                self.update_hover(None);
                self.pressed = false;
                None
            }
            Event::MouseDown {
                position,
                button: MouseButton::Left,
            } => {
                self.update_hover(Some(position));
                self.pressed = self.is_click_target(position);
                None
            }
            Event::MouseUp {
                position,
                button: MouseButton::Left,
            } => {
                self.update_hover(Some(position));
                let clicked = std::mem::take(&mut self.pressed) && self.is_click_target(position);
                if clicked {
                    self.click()
                        .map(|changed| Box::new(changed) as Box<dyn Any + Send>)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    fn render(&self) -> Node {
        let look = self.appearance();

        let container_style = Style::new()
            .with("margin", "auto 0")
            .with("display", "flex")
            .with("align-items", "center");
        let wrapper_style = Style::new()
            .with("cursor", "pointer")
            .with("height", self.config.track_height.clone())
            .with("line-height", "0")
            .with("margin", "0 12px 0 20px")
            .with("outline", "none")
            .with("padding-left", "12px")
            .with("width", self.config.track_width.clone());
        let track_style = Style::new()
            .with("display", "block")
            .with("height", "100%")
            .with("width", self.config.track_width.clone())
            .with("position", "relative")
            .with("border-radius", "0.5em")
            .with("background-color", look.track_color)
            .with("transition", format!("background-color {TRANSITION}"));

        let track = Node::new("track")
            .style(track_style)
            .bounds(self.parts.track)
            .child(self.render_thumb(&look));
        let wrapper = Node::new("track-wrapper")
            .style(wrapper_style)
            .bounds(self.parts.wrapper)
            .child(track);

        let mut container = Node::new("container")
            .style(container_style)
            .bounds(self.parts.container)
            .child(wrapper)
            .maybe_child(
                self.config
                    .tooltip
                    .then(|| self.render_tooltip(look.tooltip_visible)),
            );
        container.test_id.clone_from(&self.test_id_value);
        container
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn accessible_name(&self) -> Option<&str> {
        self.accessible_name_value.as_deref().or_else(|| {
            if self.config.tooltip {
                Some(&self.config.tooltip_text)
            } else {
                None
            }
        })
    }

    fn accessible_description(&self) -> Option<&str> {
        self.appearance().icon.and_then(|icon| icon.label.as_deref())
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Switch
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.parts.container
    }
}
