//! Toggle configuration.
//!
//! [`ToggleConfig`] holds every caller-tunable value of a toggle control.
//! Colors and lengths are kept as CSS strings so they reach the view tree
//! exactly as written; [`ToggleConfig::problems`] reports the ones the
//! painter cannot interpret.
//!
//! Configuration can also be loaded from YAML or JSON. Loading is lenient:
//! a key holding a value of the wrong type is reported with a warning and
//! the default is kept.

use flipswitch_core::{Color, ColorParseError, Length, LengthParseError};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

/// Default track height.
pub const DEFAULT_TRACK_HEIGHT: &str = "1em";
/// Default track width.
pub const DEFAULT_TRACK_WIDTH: &str = "34px";
/// Default thumb diameter in pixels.
pub const DEFAULT_THUMB_SIZE: f32 = 25.0;
/// Default thumb color when off.
pub const DEFAULT_THUMB_OFF_COLOR: &str = "#2FA8DD";
/// Default thumb color when on.
pub const DEFAULT_THUMB_ON_COLOR: &str = "#fff";
/// Default track color when off.
pub const DEFAULT_TRACK_OFF_COLOR: &str = "#2394c4";
/// Default track color when on.
pub const DEFAULT_TRACK_ON_COLOR: &str = "#fafafa";
/// Default tooltip text.
pub const DEFAULT_TOOLTIP_TEXT: &str = "Instructions";

/// A glyph drawn inside the thumb.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Icon {
    /// Text drawn for the icon
    pub glyph: String,
    /// CSS color (inherits when unset)
    #[serde(default)]
    pub color: Option<String>,
    /// Accessible label, reported as the switch's description while shown
    #[serde(default)]
    pub label: Option<String>,
}

impl Icon {
    /// Create an icon from a glyph.
    #[must_use]
    pub fn new(glyph: impl Into<String>) -> Self {
        Self {
            glyph: glyph.into(),
            color: None,
            label: None,
        }
    }

    /// Set the color.
    #[must_use]
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the accessible label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Configuration of a toggle control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToggleConfig {
    /// Track height (CSS length)
    pub track_height: String,
    /// Track width (CSS length)
    pub track_width: String,
    /// Thumb diameter in pixels
    pub thumb_size: f32,
    /// Thumb color when off
    pub thumb_off_color: String,
    /// Thumb color when on
    pub thumb_on_color: String,
    /// Track color when off
    pub track_off_color: String,
    /// Track color when on
    pub track_on_color: String,
    /// Icon shown in the thumb when off
    pub thumb_off_icon: Option<Icon>,
    /// Icon shown in the thumb when on
    pub thumb_on_icon: Option<Icon>,
    /// Tooltip text
    pub tooltip_text: String,
    /// Whether a tooltip is rendered
    pub tooltip: bool,
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            track_height: DEFAULT_TRACK_HEIGHT.to_string(),
            track_width: DEFAULT_TRACK_WIDTH.to_string(),
            thumb_size: DEFAULT_THUMB_SIZE,
            thumb_off_color: DEFAULT_THUMB_OFF_COLOR.to_string(),
            thumb_on_color: DEFAULT_THUMB_ON_COLOR.to_string(),
            track_off_color: DEFAULT_TRACK_OFF_COLOR.to_string(),
            track_on_color: DEFAULT_TRACK_ON_COLOR.to_string(),
            thumb_off_icon: None,
            thumb_on_icon: None,
            tooltip_text: DEFAULT_TOOLTIP_TEXT.to_string(),
            tooltip: false,
        }
    }
}

impl ToggleConfig {
    /// Create a configuration with all defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the track height.
    #[must_use]
    pub fn track_height(mut self, height: impl Into<String>) -> Self {
        self.track_height = height.into();
        self
    }

    /// Set the track width.
    #[must_use]
    pub fn track_width(mut self, width: impl Into<String>) -> Self {
        self.track_width = width.into();
        self
    }

    /// Set the thumb diameter in pixels.
    #[must_use]
    pub const fn thumb_size(mut self, size: f32) -> Self {
        self.thumb_size = size;
        self
    }

    /// Set the thumb color when off.
    #[must_use]
    pub fn thumb_off_color(mut self, color: impl Into<String>) -> Self {
        self.thumb_off_color = color.into();
        self
    }

    /// Set the thumb color when on.
    #[must_use]
    pub fn thumb_on_color(mut self, color: impl Into<String>) -> Self {
        self.thumb_on_color = color.into();
        self
    }

    /// Set the track color when off.
    #[must_use]
    pub fn track_off_color(mut self, color: impl Into<String>) -> Self {
        self.track_off_color = color.into();
        self
    }

    /// Set the track color when on.
    #[must_use]
    pub fn track_on_color(mut self, color: impl Into<String>) -> Self {
        self.track_on_color = color.into();
        self
    }

    /// Set the icon shown when off.
    #[must_use]
    pub fn thumb_off_icon(mut self, icon: Icon) -> Self {
        self.thumb_off_icon = Some(icon);
        self
    }

    /// Set the icon shown when on.
    #[must_use]
    pub fn thumb_on_icon(mut self, icon: Icon) -> Self {
        self.thumb_on_icon = Some(icon);
        self
    }

    /// Set the tooltip text.
    #[must_use]
    pub fn tooltip_text(mut self, text: impl Into<String>) -> Self {
        self.tooltip_text = text.into();
        self
    }

    /// Set whether the tooltip is rendered.
    #[must_use]
    pub const fn tooltip(mut self, tooltip: bool) -> Self {
        self.tooltip = tooltip;
        self
    }

    /// The (off, on) icon pair, present only when both are configured.
    #[must_use]
    pub fn icons(&self) -> Option<(&Icon, &Icon)> {
        self.thumb_off_icon.as_ref().zip(self.thumb_on_icon.as_ref())
    }

    /// Every value the painter cannot interpret.
    #[must_use]
    pub fn problems(&self) -> Vec<ConfigError> {
        let mut problems = Vec::new();

        for (field, value) in [
            ("track_height", &self.track_height),
            ("track_width", &self.track_width),
        ] {
            if let Err(source) = value.parse::<Length>() {
                problems.push(ConfigError::InvalidLength {
                    field,
                    value: value.clone(),
                    source,
                });
            }
        }

        if !(self.thumb_size.is_finite() && self.thumb_size > 0.0) {
            problems.push(ConfigError::InvalidThumbSize(self.thumb_size));
        }

        let icon_colors = [
            ("thumb_off_icon.color", self.thumb_off_icon.as_ref()),
            ("thumb_on_icon.color", self.thumb_on_icon.as_ref()),
        ];
        let colors = [
            ("thumb_off_color", Some(&self.thumb_off_color)),
            ("thumb_on_color", Some(&self.thumb_on_color)),
            ("track_off_color", Some(&self.track_off_color)),
            ("track_on_color", Some(&self.track_on_color)),
        ]
        .into_iter()
        .chain(
            icon_colors
                .into_iter()
                .map(|(field, icon)| (field, icon.and_then(|i| i.color.as_ref()))),
        );

        for (field, value) in colors {
            let Some(value) = value else { continue };
            if let Err(source) = Color::from_css(value) {
                problems.push(ConfigError::InvalidColor {
                    field,
                    value: value.clone(),
                    source,
                });
            }
        }

        problems
    }

    /// Check the configuration, failing on the first problem.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.problems().into_iter().next() {
            Some(problem) => Err(problem),
            None => Ok(()),
        }
    }

    /// Load from a YAML document.
    pub fn from_yaml_str(input: &str) -> Result<Self, ConfigError> {
        if input.trim().is_empty() {
            return Ok(Self::default());
        }
        let value: Value = serde_yaml_ng::from_str(input)?;
        Self::from_value(value)
    }

    /// Load from a JSON document.
    pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
        let value: Value = serde_json::from_str(input)?;
        Self::from_value(value)
    }

    /// Load from an already parsed document.
    ///
    /// Keys may be `snake_case` or `camelCase`. Unknown keys and values of
    /// the wrong type are skipped with a warning.
    pub fn from_value(value: Value) -> Result<Self, ConfigError> {
        let map = match value {
            Value::Object(map) => map,
            Value::Null => return Ok(Self::default()),
            _ => return Err(ConfigError::NotAMapping),
        };

        let mut config = Self::default();
        for (key, value) in map {
            let field = snake_case(&key);
            if let Err(err) = config.apply(&field, value) {
                warn!(key = %key, error = %err, "ignoring toggle configuration value");
            }
        }
        Ok(config)
    }

    fn apply(&mut self, field: &str, value: Value) -> Result<(), FieldError> {
        match field {
            "track_height" => self.track_height = typed(value)?,
            "track_width" => self.track_width = typed(value)?,
            "thumb_size" => self.thumb_size = typed(value)?,
            "thumb_off_color" => self.thumb_off_color = typed(value)?,
            "thumb_on_color" => self.thumb_on_color = typed(value)?,
            "track_off_color" => self.track_off_color = typed(value)?,
            "track_on_color" => self.track_on_color = typed(value)?,
            "thumb_off_icon" => self.thumb_off_icon = typed(value)?,
            "thumb_on_icon" => self.thumb_on_icon = typed(value)?,
            "tooltip_text" => self.tooltip_text = typed(value)?,
            "tooltip" => self.tooltip = typed(value)?,
            _ => return Err(FieldError::Unknown),
        }
        Ok(())
    }
}

fn typed<T: DeserializeOwned>(value: Value) -> Result<T, FieldError> {
    serde_json::from_value(value).map_err(FieldError::WrongType)
}

/// `trackHeight` -> `track_height`; snake case passes through.
fn snake_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push('_');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

#[derive(Debug, Error)]
enum FieldError {
    #[error("unknown key")]
    Unknown,
    #[error("wrong value type: {0}")]
    WrongType(serde_json::Error),
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A length field is not a CSS length.
    #[error("invalid length for `{field}`: {value:?} ({source})")]
    InvalidLength {
        /// Field name
        field: &'static str,
        /// Value as configured
        value: String,
        /// Parse failure
        source: LengthParseError,
    },

    /// A color field is not a CSS color.
    #[error("invalid color for `{field}`: {value:?} ({source})")]
    InvalidColor {
        /// Field name
        field: &'static str,
        /// Value as configured
        value: String,
        /// Parse failure
        source: ColorParseError,
    },

    /// The thumb size is not a positive finite number.
    #[error("thumb size must be a positive finite number, got {0}")]
    InvalidThumbSize(f32),

    /// The document root is not a mapping.
    #[error("toggle configuration must be a mapping")]
    NotAMapping,

    /// YAML syntax error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// JSON syntax error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
