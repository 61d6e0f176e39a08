// src/data/element.rs

//! Implement [`Element`], the unit of structure found by the
//! [`DataParser`].
//!
//! An `Element` is either a leaf token found by the [`DataScanner`] or a
//! composite owning the child `Element`s a reduction consumed.
//! An `Element` refers to its text by byte offsets into the original line,
//! it does not copy the text.
//!
//! [`DataParser`]: crate::parsers::dataparser::DataParser
//! [`DataScanner`]: crate::parsers::datascanner::DataScanner

use crate::common::{LineIndex, RangeLineIndex};
use crate::data::token::DataToken;

use std::fmt;

use ::more_asserts::{debug_assert_ge, debug_assert_le};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Element
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Sequence of [`Element`s] in textual order.
///
/// [`Element`s]: self::Element
pub type Elements = Vec<Element>;

/// A leaf token or a composite of child `Element`s.
///
/// A leaf has a terminal [`DataToken`] and no children.
/// A composite has a non-terminal `DataToken` and one or more children; its
/// span always runs from the `begin` of the first child to the `end` of the
/// last child.
///
/// [`DataToken`]: crate::data::token::DataToken
#[derive(Clone, PartialEq, Eq)]
pub struct Element {
    /// The kind of this `Element`.
    pub token: DataToken,
    /// Byte offset into the line where this `Element` begins (inclusive).
    begin: LineIndex,
    /// Byte offset into the line one past where this `Element` ends
    /// (exclusive).
    end: LineIndex,
    /// Child `Element`s, empty for a leaf.
    children: Elements,
}

impl fmt::Debug for Element {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        write!(f, "{}@{}‥{}", self.token, self.begin, self.end)?;
        if self.is_leaf() {
            return Ok(());
        }
        f.debug_list()
            .entries(self.children.iter())
            .finish()
    }
}

impl Element {
    /// Create a leaf `Element` for the token found at `begin‥end`.
    pub fn new_leaf(
        token: DataToken,
        begin: LineIndex,
        end: LineIndex,
    ) -> Element {
        debug_assert!(token.is_terminal(), "leaf Element with non-terminal token {}", token);
        debug_assert_le!(begin, end, "bad span {}‥{} for {}", begin, end, token);

        Element {
            token,
            begin,
            end,
            children: Elements::with_capacity(0),
        }
    }

    /// Create a composite `Element` that owns `children`.
    ///
    /// The span is derived from the children.
    pub fn new_composite(
        token: DataToken,
        children: Elements,
    ) -> Element {
        debug_assert!(token.is_nonterminal(), "composite Element with terminal token {}", token);
        debug_assert!(!children.is_empty(), "composite Element {} without children", token);
        let mut element = Element {
            token,
            begin: 0,
            end: 0,
            children,
        };
        element.update_capture();

        element
    }

    /// Recompute `begin` and `end` from the first and last child.
    ///
    /// Does nothing for a leaf.
    pub fn update_capture(&mut self) {
        if let (Some(first), Some(last)) = (self.children.first(), self.children.last()) {
            self.begin = first.begin;
            self.end = last.end;
            debug_assert_ge!(self.end, self.begin, "children out of order in {:?}", self);
        }
    }

    /// Append `child` and update the span.
    pub fn push_child(
        &mut self,
        child: Element,
    ) {
        debug_assert!(!self.is_leaf(), "push_child on leaf {:?}", self);
        self.children.push(child);
        self.update_capture();
    }

    /// Append all `children` and update the span.
    pub fn extend_children(
        &mut self,
        children: Elements,
    ) {
        debug_assert!(!self.is_leaf(), "extend_children on leaf {:?}", self);
        self.children.extend(children);
        self.update_capture();
    }

    /// Mutable access to the last child, e.g. the value of a `Pair`.
    pub(crate) fn last_child_mut(&mut self) -> Option<&mut Element> {
        self.children.last_mut()
    }

    /// Take the children, leaving this `Element` without any.
    pub(crate) fn into_children(self) -> Elements {
        self.children
    }

    #[inline(always)]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    #[inline(always)]
    pub const fn begin(&self) -> LineIndex {
        self.begin
    }

    #[inline(always)]
    pub const fn end(&self) -> LineIndex {
        self.end
    }

    /// The span as a half-open range.
    pub const fn range(&self) -> RangeLineIndex {
        self.begin..self.end
    }

    /// Length of the span in bytes.
    pub const fn len(&self) -> usize {
        self.end - self.begin
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// The text of this `Element` within `line`, the line it was scanned
    /// from.
    ///
    /// Returns an empty `str` if the span does not fit `line`.
    pub fn as_str<'a>(
        &self,
        line: &'a str,
    ) -> &'a str {
        line.get(self.begin..self.end)
            .unwrap_or_default()
    }

    /// The kind of the value this `Element` represents.
    ///
    /// For a `Row` holding exactly one child this is the kind of that child,
    /// for a `Pair` this is the kind of its value, otherwise the `token`.
    pub fn value_token(&self) -> DataToken {
        match self.token {
            DataToken::Row if self.children.len() == 1 => self.children[0].value_token(),
            DataToken::Pair => match self.children.last() {
                Some(value) => value.value_token(),
                None => self.token,
            },
            _ => self.token,
        }
    }

    /// The qualifier of a `Pair`, its first child.
    pub fn pair_key(&self) -> Option<&Element> {
        match self.token {
            DataToken::Pair => self.children.first(),
            _ => None,
        }
    }

    /// The value of a `Pair`, its last child.
    pub fn pair_value(&self) -> Option<&Element> {
        match self.token {
            DataToken::Pair => self.children.last(),
            _ => None,
        }
    }

    /// Depth-first walk over this `Element` and all descendants, in textual
    /// order.
    pub fn walk<'e, F>(
        &'e self,
        f: &mut F,
    ) where
        F: FnMut(&'e Element),
    {
        f(self);
        for child in self.children.iter() {
            child.walk(f);
        }
    }
}
