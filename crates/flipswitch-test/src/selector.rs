//! CSS-like selector parsing for view tree queries.
//!
//! Supports:
//! - `"thumb"` - by element tag
//! - `"[data-testid='dark-mode']"` - by test ID
//! - `"[visibility='visible']"` - by style declaration, or `[text='..']`
//! - `"track thumb"` - descendant combinator
//! - `"track > thumb"` - child combinator

use flipswitch_core::Node;

/// Parsed selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Match by element tag
    Type(String),
    /// Match by test ID (e.g., `[data-testid='foo']`)
    TestId(String),
    /// Match by style property or text (e.g., `[opacity='1']`)
    Attribute { name: String, value: String },
    /// Descendant combinator (e.g., `container thumb`)
    Descendant(Box<Selector>, Box<Selector>),
    /// Child combinator (e.g., `track > thumb`)
    Child(Box<Selector>, Box<Selector>),
}

impl Selector {
    /// Parse a selector string.
    ///
    /// # Errors
    ///
    /// Returns an error if the selector is invalid.
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        SelectorParser::new(input).parse()
    }

    /// Check if this selector matches a single node, ignoring ancestry.
    #[must_use]
    pub fn matches(&self, node: &Node) -> bool {
        self.matches_path(&[node])
    }

    /// Check if this selector matches the last node of `path`.
    ///
    /// `path` runs from the root to the candidate node.
    #[must_use]
    pub fn matches_path(&self, path: &[&Node]) -> bool {
        let Some((node, ancestors)) = path.split_last() else {
            return false;
        };
        match self {
            Self::Type(tag) => node.tag == *tag,
            Self::TestId(id) => node.test_id.as_deref() == Some(id.as_str()),
            Self::Attribute { name, value } => {
                let actual = if name == "text" {
                    node.text.as_deref()
                } else {
                    node.style.get(name)
                };
                actual == Some(value.as_str())
            }
            Self::Descendant(ancestor, target) => {
                target.matches_path(path)
                    && (1..=ancestors.len()).any(|end| ancestor.matches_path(&ancestors[..end]))
            }
            Self::Child(parent, target) => {
                target.matches_path(path) && parent.matches_path(ancestors)
            }
        }
    }

    /// All nodes in `root` matching this selector, in document order.
    #[must_use]
    pub fn select<'a>(&self, root: &'a Node) -> Vec<&'a Node> {
        let mut results = Vec::new();
        let mut path = Vec::new();
        self.collect(root, &mut path, &mut results);
        results
    }

    fn collect<'a>(&self, node: &'a Node, path: &mut Vec<&'a Node>, out: &mut Vec<&'a Node>) {
        path.push(node);
        if self.matches_path(path) {
            out.push(node);
        }
        for child in &node.children {
            self.collect(child, path, out);
        }
        path.pop();
    }
}

/// Selector parser.
pub struct SelectorParser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> SelectorParser<'a> {
    /// Create a new parser.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Parse the selector.
    pub fn parse(&mut self) -> Result<Selector, SelectorError> {
        self.skip_whitespace();

        if self.peek_char().is_none() {
            return Err(SelectorError::Empty);
        }

        let mut selector = self.parse_simple()?;
        loop {
            let had_space = self.skip_whitespace();
            match self.peek_char() {
                None => return Ok(selector),
                Some('>') => {
                    self.advance(); // Skip '>'
                    self.skip_whitespace();
                    let target = self.parse_simple()?;
                    selector = Selector::Child(Box::new(selector), Box::new(target));
                }
                Some(_) if had_space => {
                    let target = self.parse_simple()?;
                    selector = Selector::Descendant(Box::new(selector), Box::new(target));
                }
                Some(c) => return Err(SelectorError::UnexpectedChar(c)),
            }
        }
    }

    fn parse_simple(&mut self) -> Result<Selector, SelectorError> {
        let first = self.peek_char().ok_or(SelectorError::DanglingCombinator)?;

        match first {
            '[' => self.parse_attribute(),
            _ if first.is_alphabetic() => self.parse_type(),
            _ => Err(SelectorError::UnexpectedChar(first)),
        }
    }

    fn parse_type(&mut self) -> Result<Selector, SelectorError> {
        let name = self.read_identifier()?;
        Ok(Selector::Type(name))
    }

    fn parse_attribute(&mut self) -> Result<Selector, SelectorError> {
        self.advance(); // Skip '['

        let name = self.read_until_any(&['=', ']']).trim().to_string();
        if name.is_empty() || self.peek_char() != Some('=') {
            return Err(SelectorError::InvalidAttribute);
        }

        self.advance(); // Skip '='

        let quote = self.peek_char().filter(|c| *c == '\'' || *c == '"');
        let value = if let Some(quote) = quote {
            self.advance();
            let value = self.read_until_any(&[quote]);
            if self.peek_char() != Some(quote) {
                return Err(SelectorError::UnclosedAttribute);
            }
            self.advance();
            value
        } else {
            self.read_until_any(&[']']).trim().to_string()
        };

        if self.peek_char() != Some(']') {
            return Err(SelectorError::UnclosedAttribute);
        }
        self.advance();

        if name == "data-testid" {
            Ok(Selector::TestId(value))
        } else {
            Ok(Selector::Attribute { name, value })
        }
    }

    fn read_identifier(&mut self) -> Result<String, SelectorError> {
        let start = self.pos;
        while let Some(c) = self.peek_char() {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                self.advance();
            } else {
                break;
            }
        }

        if self.pos == start {
            return Err(SelectorError::ExpectedIdentifier);
        }

        Ok(self.input[start..self.pos].to_string())
    }

    fn read_until_any(&mut self, stops: &[char]) -> String {
        let start = self.pos;
        while let Some(c) = self.peek_char() {
            if stops.contains(&c) {
                break;
            }
            self.advance();
        }
        self.input[start..self.pos].to_string()
    }

    /// Skip whitespace, reporting whether any was skipped.
    fn skip_whitespace(&mut self) -> bool {
        let start = self.pos;
        while let Some(c) = self.peek_char() {
            if c.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
        self.pos > start
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            self.pos += c.len_utf8();
        }
    }
}

/// Selector parsing error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    /// Empty selector
    Empty,
    /// Unexpected character
    UnexpectedChar(char),
    /// Expected identifier
    ExpectedIdentifier,
    /// Invalid attribute syntax
    InvalidAttribute,
    /// Unclosed attribute bracket
    UnclosedAttribute,
    /// Combinator with nothing after it
    DanglingCombinator,
}

impl std::fmt::Display for SelectorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty selector"),
            Self::UnexpectedChar(c) => write!(f, "unexpected character: '{c}'"),
            Self::ExpectedIdentifier => write!(f, "expected identifier"),
            Self::InvalidAttribute => write!(f, "invalid attribute syntax"),
            Self::UnclosedAttribute => write!(f, "unclosed attribute bracket"),
            Self::DanglingCombinator => write!(f, "combinator without a target"),
        }
    }
}

impl std::error::Error for SelectorError {}
