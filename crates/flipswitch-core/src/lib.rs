//! Core types and traits for the Flipswitch widget toolkit.
//!
//! This crate provides foundational types used by the widgets:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Style values: [`Color`] and [`Length`] with CSS parsing
//! - Layout constraints: [`Constraints`]
//! - Input: [`Event`]
//! - Output: the [`Node`] view tree and [`DrawCommand`]s recorded by a
//!   [`RecordingCanvas`]

mod canvas;
mod color;
mod constraints;
mod draw;
mod event;
mod geometry;
mod length;
mod view;
pub mod widget;

pub use canvas::RecordingCanvas;
pub use color::{Color, ColorParseError};
pub use constraints::Constraints;
pub use draw::{BoxStyle, DrawCommand, Shadow};
pub use event::{Event, MouseButton};
pub use geometry::{CornerRadius, Point, Rect, Size};
pub use length::{Length, LengthParseError, DEFAULT_FONT_SIZE};
pub use view::{Node, Style};
pub use widget::{
    AccessibleRole, Canvas, LayoutResult, TextStyle, TypeId, Widget,
};
