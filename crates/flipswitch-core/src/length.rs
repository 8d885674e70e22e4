//! CSS length values.
//!
//! Sizes in widget configuration are written the way a stylesheet would
//! write them (`"34px"`, `"1em"`). [`Length`] is the parsed form; resolving
//! relative units needs the font size of the element they apply to.
//!
//! Percentages are not accepted: a widget sizes itself from its own
//! configuration and has no containing block to resolve them against.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Default root font size in pixels.
pub const DEFAULT_FONT_SIZE: f32 = 16.0;

/// A parsed CSS length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Length {
    /// Absolute pixels
    Px(f32),
    /// Relative to the element font size
    Em(f32),
    /// Relative to the root font size
    Rem(f32),
}

impl Length {
    /// Resolve to pixels.
    #[must_use]
    pub fn to_px(self, font_size: f32) -> f32 {
        match self {
            Self::Px(v) => v,
            Self::Em(v) => v * font_size,
            Self::Rem(v) => v * DEFAULT_FONT_SIZE,
        }
    }
}

impl FromStr for Length {
    type Err = LengthParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(LengthParseError::Empty);
        }

        let split = s
            .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-' || c == '+'))
            .unwrap_or(s.len());
        let (number, unit) = s.split_at(split);
        let value: f32 = number
            .parse()
            .map_err(|_| LengthParseError::InvalidNumber(s.to_string()))?;
        if !value.is_finite() {
            return Err(LengthParseError::InvalidNumber(s.to_string()));
        }

        match unit.to_ascii_lowercase().as_str() {
            "px" => Ok(Self::Px(value)),
            "em" => Ok(Self::Em(value)),
            "rem" => Ok(Self::Rem(value)),
            // Unitless zero is the only unitless length CSS allows.
            "" if value == 0.0 => Ok(Self::Px(0.0)),
            other => Err(LengthParseError::UnknownUnit(other.to_string())),
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(v) => write!(f, "{v}px"),
            Self::Em(v) => write!(f, "{v}em"),
            Self::Rem(v) => write!(f, "{v}rem"),
        }
    }
}

/// Error type for length parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LengthParseError {
    /// Nothing to parse
    #[error("empty length")]
    Empty,
    /// The numeric part is missing or malformed
    #[error("invalid number in length {0:?}")]
    InvalidNumber(String),
    /// Unit suffix not recognized
    #[error("unknown length unit {0:?}")]
    UnknownUnit(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_px() {
        assert_eq!("34px".parse::<Length>(), Ok(Length::Px(34.0)));
        assert_eq!(" 2.5PX ".parse::<Length>(), Ok(Length::Px(2.5)));
    }

    #[test]
    fn test_parse_relative_units() {
        assert_eq!("1em".parse::<Length>(), Ok(Length::Em(1.0)));
        assert_eq!("0.25rem".parse::<Length>(), Ok(Length::Rem(0.25)));
        assert_eq!("-10px".parse::<Length>(), Ok(Length::Px(-10.0)));
    }

    #[test]
    fn test_parse_unitless_zero() {
        assert_eq!("0".parse::<Length>(), Ok(Length::Px(0.0)));
        assert_eq!(
            "12".parse::<Length>(),
            Err(LengthParseError::UnknownUnit(String::new()))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Length>(), Err(LengthParseError::Empty));
        assert!(matches!(
            "px".parse::<Length>(),
            Err(LengthParseError::InvalidNumber(_))
        ));
        assert_eq!(
            "3vw".parse::<Length>(),
            Err(LengthParseError::UnknownUnit("vw".to_string()))
        );
        assert_eq!(
            "100%".parse::<Length>(),
            Err(LengthParseError::UnknownUnit("%".to_string()))
        );
    }

    #[test]
    fn test_to_px() {
        assert_eq!(Length::Px(34.0).to_px(16.0), 34.0);
        assert_eq!(Length::Em(1.0).to_px(16.0), 16.0);
        assert_eq!(Length::Em(-0.25).to_px(16.0), -4.0);
        assert_eq!(Length::Rem(2.0).to_px(10.0), 32.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Length::Px(20.0).to_string(), "20px");
        assert_eq!(Length::Em(0.5).to_string(), "0.5em");
    }

    proptest! {
        #[test]
        fn prop_px_display_parses_back(v in -1000.0f32..1000.0) {
            let parsed: Length = Length::Px(v).to_string().parse().unwrap();
            prop_assert_eq!(parsed, Length::Px(v));
        }
    }
}
