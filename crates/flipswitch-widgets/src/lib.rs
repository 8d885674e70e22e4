//! Toggle switch widget for the Flipswitch toolkit.
//!
//! A [`ToggleControl`] is an on/off switch made of a track and a sliding
//! thumb. It can show a different icon in the thumb for each state and a
//! tooltip while hovered. Configuration lives in [`ToggleConfig`], which can
//! be built in code or loaded from YAML or JSON.
//!
//! ```
//! use flipswitch_widgets::{ToggleConfig, ToggleControl};
//!
//! let mut toggle = ToggleControl::new(ToggleConfig::new().tooltip(true))
//!     .on_toggle(|on| println!("now {on}"));
//! toggle.click();
//! assert!(toggle.is_selected());
//! ```

pub mod appearance;
pub mod config;
pub mod toggle;

pub use appearance::{HoverState, ToggleAppearance, THUMB_OFF_OFFSET, THUMB_ON_OFFSET};
pub use config::{ConfigError, Icon, ToggleConfig};
pub use toggle::{ToggleCallback, ToggleChanged, ToggleControl};
