//! Test harness for Flipswitch widgets.
//!
//! The harness owns a widget, lays it out in a viewport and drives it with
//! pointer events aimed at elements of its rendered view tree.

use flipswitch_core::{Constraints, Event, MouseButton, Node, Point, Rect, RecordingCanvas, Widget};
use std::any::Any;
use std::collections::VecDeque;

use crate::selector::Selector;

/// Test harness for interacting with a widget.
pub struct Harness<W: Widget> {
    /// Widget being tested
    root: W,
    /// Event queue for simulation
    event_queue: VecDeque<Event>,
    /// Messages returned by the widget, oldest first
    messages: Vec<Box<dyn Any + Send>>,
    /// Current viewport size
    viewport: Rect,
}

impl<W: Widget> Harness<W> {
    /// Create a new harness and lay the widget out in a 1280x720 viewport.
    pub fn new(root: W) -> Self {
        let mut harness = Self {
            root,
            event_queue: VecDeque::new(),
            messages: Vec::new(),
            viewport: Rect::new(0.0, 0.0, 1280.0, 720.0),
        };
        harness.relayout();
        harness
    }

    /// Set the viewport size.
    #[must_use]
    pub fn viewport(mut self, width: f32, height: f32) -> Self {
        self.viewport = Rect::new(0.0, 0.0, width, height);
        self.relayout();
        self
    }

    /// The widget under test.
    #[must_use]
    pub const fn widget(&self) -> &W {
        &self.root
    }

    /// Mutable access to the widget under test.
    pub fn widget_mut(&mut self) -> &mut W {
        &mut self.root
    }

    // === Event Simulation ===

    /// Simulate a click on the element matching the selector.
    pub fn click(&mut self, selector: &str) -> &mut Self {
        if let Some(center) = self.query_center(selector) {
            self.event_queue
                .push_back(Event::MouseMove { position: center });
            self.event_queue.push_back(Event::MouseDown {
                position: center,
                button: MouseButton::Left,
            });
            self.event_queue.push_back(Event::MouseUp {
                position: center,
                button: MouseButton::Left,
            });
            self.process_events();
        }
        self
    }

    /// Move the pointer over the element matching the selector.
    pub fn hover(&mut self, selector: &str) -> &mut Self {
        if let Some(center) = self.query_center(selector) {
            self.event_queue
                .push_back(Event::MouseMove { position: center });
            self.process_events();
        }
        self
    }

    /// Move the pointer to a viewport position.
    pub fn move_to(&mut self, x: f32, y: f32) -> &mut Self {
        self.event_queue.push_back(Event::MouseMove {
            position: Point::new(x, y),
        });
        self.process_events();
        self
    }

    /// Move the pointer out of the widget.
    pub fn unhover(&mut self) -> &mut Self {
        self.event_queue.push_back(Event::MouseLeave);
        self.process_events();
        self
    }

    /// Dispatch an arbitrary event.
    pub fn dispatch(&mut self, event: Event) -> &mut Self {
        self.event_queue.push_back(event);
        self.process_events();
        self
    }

    // === Messages ===

    /// Messages of type `T` returned by the widget so far.
    #[must_use]
    pub fn messages<T: Clone + 'static>(&self) -> Vec<T> {
        self.messages
            .iter()
            .filter_map(|m| m.downcast_ref::<T>())
            .cloned()
            .collect()
    }

    /// Forget all collected messages.
    pub fn clear_messages(&mut self) {
        self.messages.clear();
    }

    // === Queries ===

    /// Render the widget's current view tree.
    #[must_use]
    pub fn render(&self) -> Node {
        self.root.render()
    }

    /// Paint the widget into a fresh recording canvas.
    #[must_use]
    pub fn paint(&self) -> RecordingCanvas {
        let mut canvas = RecordingCanvas::new();
        self.root.paint(&mut canvas);
        canvas
    }

    /// Query for the first element matching the selector.
    #[must_use]
    pub fn query(&self, selector: &str) -> Option<Node> {
        let sel = Selector::parse(selector).ok()?;
        let tree = self.render();
        let found = sel.select(&tree).first().map(|n| (*n).clone());
        found
    }

    /// Query for all elements matching the selector.
    #[must_use]
    pub fn query_all(&self, selector: &str) -> Vec<Node> {
        let Ok(sel) = Selector::parse(selector) else {
            return Vec::new();
        };
        let tree = self.render();
        let found = sel.select(&tree).into_iter().cloned().collect();
        found
    }

    /// Get text content of an element.
    #[must_use]
    pub fn text(&self, selector: &str) -> String {
        self.query(selector)
            .map(|node| node.text_content())
            .unwrap_or_default()
    }

    /// Get a style property of an element.
    #[must_use]
    pub fn style(&self, selector: &str, property: &str) -> Option<String> {
        self.query(selector)?.style.get(property).map(str::to_string)
    }

    /// Check if an element exists.
    #[must_use]
    pub fn exists(&self, selector: &str) -> bool {
        self.query(selector).is_some()
    }

    // === Assertions ===

    /// Assert that an element exists.
    ///
    /// # Panics
    ///
    /// Panics if the element does not exist.
    pub fn assert_exists(&self, selector: &str) -> &Self {
        assert!(
            self.exists(selector),
            "Expected element matching '{selector}' to exist"
        );
        self
    }

    /// Assert that an element does not exist.
    ///
    /// # Panics
    ///
    /// Panics if the element exists.
    pub fn assert_not_exists(&self, selector: &str) -> &Self {
        assert!(
            !self.exists(selector),
            "Expected element matching '{selector}' to not exist"
        );
        self
    }

    /// Assert that text matches exactly.
    ///
    /// # Panics
    ///
    /// Panics if the text does not match.
    pub fn assert_text(&self, selector: &str, expected: &str) -> &Self {
        let actual = self.text(selector);
        assert_eq!(
            actual, expected,
            "Expected text '{expected}' but got '{actual}' for '{selector}'"
        );
        self
    }

    /// Assert that a style property has a value.
    ///
    /// # Panics
    ///
    /// Panics if the element is missing or the value differs.
    pub fn assert_style(&self, selector: &str, property: &str, expected: &str) -> &Self {
        let actual = self.style(selector, property);
        assert_eq!(
            actual.as_deref(),
            Some(expected),
            "Expected '{property}: {expected}' on '{selector}' but got {actual:?}"
        );
        self
    }

    /// Assert the count of matching elements.
    ///
    /// # Panics
    ///
    /// Panics if the count does not match.
    pub fn assert_count(&self, selector: &str, expected: usize) -> &Self {
        let actual = self.query_all(selector).len();
        assert_eq!(
            actual, expected,
            "Expected {expected} elements matching '{selector}' but found {actual}"
        );
        self
    }

    // === Internal ===

    fn relayout(&mut self) {
        let size = self
            .root
            .measure(Constraints::loose(self.viewport.size()));
        self.root.layout(Rect::new(
            self.viewport.x,
            self.viewport.y,
            size.width,
            size.height,
        ));
    }

    fn process_events(&mut self) {
        while let Some(event) = self.event_queue.pop_front() {
            if let Some(message) = self.root.event(&event) {
                self.messages.push(message);
            }
        }
    }

    fn query_center(&self, selector: &str) -> Option<Point> {
        self.query(selector).map(|node| node.bounds.center())
    }
}
