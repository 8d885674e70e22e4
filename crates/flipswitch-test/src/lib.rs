//! Testing harness for Flipswitch widgets.
//!
//! Widgets are driven through a [`Harness`], which lays them out, sends
//! pointer events at elements of the rendered view tree and collects the
//! messages they return. Elements are found with CSS-like [`Selector`]s.
//!
//! ```ignore
//! use flipswitch_test::Harness;
//!
//! let mut harness = Harness::new(widget);
//! harness.click("track");
//! harness.assert_style("thumb", "transform", "translate(20px)");
//! ```

mod harness;
mod selector;

pub use harness::Harness;
pub use selector::{Selector, SelectorError, SelectorParser};
