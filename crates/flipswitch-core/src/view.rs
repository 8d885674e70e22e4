//! Declarative view tree.
//!
//! A widget's `render` output: a tree of named elements, each carrying
//! inline style declarations, optional text, and the bounds computed by the
//! last layout pass. Style values are kept as written; turning them into
//! pixels is the painter's job.

use crate::geometry::Rect;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered list of inline style declarations (`property: value`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Style {
    declarations: Vec<(String, String)>,
}

impl Style {
    /// Create an empty style.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            declarations: Vec::new(),
        }
    }

    /// Set a declaration, replacing an earlier value for the same property.
    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) {
        let property = property.into();
        let value = value.into();
        match self.declarations.iter_mut().find(|(p, _)| *p == property) {
            Some(slot) => slot.1 = value,
            None => self.declarations.push((property, value)),
        }
    }

    /// Builder form of [`Style::set`].
    #[must_use]
    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(property, value);
        self
    }

    /// Look up a declaration.
    #[must_use]
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    /// Number of declarations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Whether there are no declarations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Iterate declarations in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.declarations
            .iter()
            .map(|(p, v)| (p.as_str(), v.as_str()))
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (property, value)) in self.declarations.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{property}: {value};")?;
        }
        Ok(())
    }
}

/// One element of a rendered view tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Element name
    pub tag: String,
    /// Test ID
    pub test_id: Option<String>,
    /// Inline style
    pub style: Style,
    /// Text content
    pub text: Option<String>,
    /// Bounds from the most recent layout
    pub bounds: Rect,
    /// Child elements
    pub children: Vec<Node>,
}

impl Node {
    /// Create an empty element.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            test_id: None,
            style: Style::new(),
            text: None,
            bounds: Rect::default(),
            children: Vec::new(),
        }
    }

    /// Set the style.
    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Set the text content.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the test ID.
    #[must_use]
    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id = Some(id.into());
        self
    }

    /// Set the bounds.
    #[must_use]
    pub const fn bounds(mut self, bounds: Rect) -> Self {
        self.bounds = bounds;
        self
    }

    /// Append a child.
    #[must_use]
    pub fn child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Append a child if present.
    #[must_use]
    pub fn maybe_child(self, child: Option<Self>) -> Self {
        match child {
            Some(child) => self.child(child),
            None => self,
        }
    }

    /// Depth-first search for the first element matching `predicate`.
    pub fn find(&self, predicate: &dyn Fn(&Self) -> bool) -> Option<&Self> {
        if predicate(self) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(predicate))
    }

    /// First element with the given tag.
    #[must_use]
    pub fn find_tag(&self, tag: &str) -> Option<&Self> {
        self.find(&|n| n.tag == tag)
    }

    /// All elements in depth-first order, including `self`.
    #[must_use]
    pub fn descendants(&self) -> Vec<&Self> {
        let mut out = vec![self];
        for child in &self.children {
            out.extend(child.descendants());
        }
        out
    }

    /// Concatenated text of this element and its descendants.
    #[must_use]
    pub fn text_content(&self) -> String {
        self.descendants()
            .into_iter()
            .filter_map(|n| n.text.as_deref())
            .collect()
    }
}
