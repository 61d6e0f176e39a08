// src/parsers/dataparser.rs

//! Implements a [`DataParser`], a shift-reduce parser that consumes the
//! leaf [`Element`s] of a [`DataScanner`] one at a time and folds them into
//! key/value [`Pair`s], [`Row`s] of sibling values, and [`DateTime`s].
//!
//! There is no grammar file. Reductions are hand-written functions that
//! compare short [patterns] against the top of the parser stack. The stack
//! is a [`VecDeque`] where the _front_ is the _top_.
//!
//! Keys are held aside in a separate qualifier queue until their value is
//! complete. A key is removed from the qualifier queue when its `Pair` is
//! built.
//!
//! A `DataParser` is for one line of text. Create a new `DataParser` for
//! each line.
//!
//! [`Element`s]: crate::data::element::Element
//! [`DataScanner`]: crate::parsers::datascanner::DataScanner
//! [`Pair`s]: crate::data::token::DataToken::Pair
//! [`Row`s]: crate::data::token::DataToken::Row
//! [`DateTime`s]: crate::data::token::DataToken::DateTime
//! [patterns]: crate::parsers::patterns
//! [`VecDeque`]: std::collections::VecDeque

#![allow(non_snake_case)]

use crate::common::Count;
use crate::data::element::{Element, Elements};
use crate::data::token::DataToken;
use crate::parsers::patterns::{
    DataTokenPattern,
    PATTERN_DATE_TIME,
    PATTERN_KEY,
    PATTERN_NONTERMINAL_BOUNDARY,
    PATTERN_PAIR,
    PATTERN_QUAL,
    PATTERN_ROW,
    PATTERN_SEPARATOR_BOUNDARY,
};

use std::collections::VecDeque;
use std::fmt;
use std::ops::AddAssign;

use ::more_asserts::debug_assert_le;
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// DataParser
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// The parser stack. The front is the top.
pub type DpStack = VecDeque<Element>;

/// The qualifier queue; keys waiting for their value.
pub type DpQual = VecDeque<Element>;

/// Accumulated statistics of one or more [`DataParser`s].
///
/// For CLI option `--summary`.
///
/// [`DataParser`s]: self::DataParser
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct SummaryDataParser {
    /// count of lines parsed (`Line` tokens reduced)
    pub DataParser_lines: Count,
    /// count of tokens given to `reduce`
    pub DataParser_tokens: Count,
    /// count of `Garbage` tokens dropped
    pub DataParser_garbage: Count,
    /// count of reductions that changed the stack
    pub DataParser_reductions: Count,
}

impl fmt::Debug for SummaryDataParser {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        f.debug_struct("")
            .field("lines", &self.DataParser_lines)
            .field("tokens", &self.DataParser_tokens)
            .field("garbage", &self.DataParser_garbage)
            .field("reductions", &self.DataParser_reductions)
            .finish()
    }
}

impl fmt::Display for SummaryDataParser {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        write!(
            f,
            "lines {}, tokens {}, garbage {}, reductions {}",
            self.DataParser_lines, self.DataParser_tokens, self.DataParser_garbage, self.DataParser_reductions,
        )
    }
}

impl AddAssign for SummaryDataParser {
    fn add_assign(
        &mut self,
        other: SummaryDataParser,
    ) {
        self.DataParser_lines += other.DataParser_lines;
        self.DataParser_tokens += other.DataParser_tokens;
        self.DataParser_garbage += other.DataParser_garbage;
        self.DataParser_reductions += other.DataParser_reductions;
    }
}

/// Shift-reduce parser over the tokens of one line.
///
/// Feed every token of a line, including the final `Line` token, to
/// [`reduce`], then call [`flush`], then take the result from
/// [`into_elements`].
///
/// [`reduce`]: DataParser::reduce
/// [`flush`]: DataParser::flush
/// [`into_elements`]: DataParser::into_elements
pub struct DataParser {
    /// the parser stack, front is top
    dp_stack: DpStack,
    /// keys waiting for a value
    dp_qual: DpQual,
    /// count of lines
    lines: Count,
    /// count of tokens given to `reduce`
    tokens: Count,
    /// count of `Garbage` tokens dropped
    garbage: Count,
    /// count of reductions
    reductions: Count,
}

impl fmt::Debug for DataParser {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        f.debug_struct("DataParser")
            .field("dp_stack", &self.dp_stack)
            .field("dp_qual", &self.dp_qual)
            .field("tokens", &self.tokens)
            .field("reductions", &self.reductions)
            .finish()
    }
}

impl Default for DataParser {
    fn default() -> Self {
        DataParser::new()
    }
}

impl DataParser {
    pub fn new() -> DataParser {
        DataParser {
            dp_stack: DpStack::with_capacity(16),
            dp_qual: DpQual::with_capacity(4),
            lines: 0,
            tokens: 0,
            garbage: 0,
            reductions: 0,
        }
    }

    /// The parser stack, front is top.
    pub fn stack(&self) -> &DpStack {
        &self.dp_stack
    }

    /// The qualifier queue.
    pub fn qual(&self) -> &DpQual {
        &self.dp_qual
    }

    /// Count of reductions so far.
    pub const fn count_reductions(&self) -> Count {
        self.reductions
    }

    /// Push `element` onto the top of the stack without reducing.
    pub fn shift(
        &mut self,
        element: Element,
    ) {
        defñ!("shift {:?}", element);
        self.dp_stack.push_front(element);
    }

    /// Push a run of elements in text order back onto the stack; the last
    /// element of `run` ends on top.
    fn splice_back(
        &mut self,
        run: Elements,
    ) {
        for element in run.into_iter() {
            self.dp_stack.push_front(element);
        }
    }

    /// Does the top of the stack match `pattern` (top-first)?
    ///
    /// An empty `pattern` never matches.
    pub fn stack_matches(
        &self,
        pattern: &DataTokenPattern,
    ) -> bool {
        if pattern.is_empty() || self.dp_stack.len() < pattern.len() {
            return false;
        }

        pattern
            .iter()
            .zip(self.dp_stack.iter())
            .all(|(p, element)| p.matches(element.token))
    }

    /// If the top of the stack matches `pattern` then pop the matched
    /// elements and return them in text order.
    ///
    /// If `repeating` then keep matching and popping while the pattern
    /// matches; only the run popped last is returned, earlier runs are
    /// discarded.
    pub fn reduce_pattern(
        &mut self,
        pattern: &DataTokenPattern,
        repeating: bool,
    ) -> Option<Elements> {
        defn!("({:?}, repeating {})", pattern, repeating);
        let mut matched: Option<Elements> = None;
        while self.stack_matches(pattern) {
            let mut run: Elements = self
                .dp_stack
                .drain(..pattern.len())
                .collect();
            run.reverse();
            matched = Some(run);
            if !repeating {
                break;
            }
        }
        defx!("matched {:?}", matched);

        matched
    }

    /// Pop elements until an element whose kind is in `terms` is on top, or
    /// the stack is empty. The terminating element is not popped.
    ///
    /// Returns the popped elements in text order, `None` if nothing was
    /// popped.
    pub fn reduce_up_to(
        &mut self,
        terms: &DataTokenPattern,
    ) -> Option<Elements> {
        defn!("({:?})", terms);
        let mut run = Elements::new();
        loop {
            match self.dp_stack.front() {
                Some(element) if !terms.contains(&element.token) => {}
                _ => break,
            }
            if let Some(element) = self.dp_stack.pop_front() {
                run.push(element);
            }
        }
        if run.is_empty() {
            defx!("None");
            return None;
        }
        run.reverse();
        defx!("run {:?}", run);

        Some(run)
    }

    /// If the kind of the element on top of the stack is in `kinds` then pop
    /// and return it.
    pub fn reduce_any_of(
        &mut self,
        kinds: &DataTokenPattern,
    ) -> Option<Element> {
        match self.dp_stack.front() {
            Some(element) if kinds.contains(&element.token) => self.dp_stack.pop_front(),
            _ => None,
        }
    }

    /// `String Number Time` becomes `DateTime[String, Number, Time]`.
    pub fn reduce_date_time(&mut self) -> bool {
        match self.reduce_pattern(&PATTERN_DATE_TIME, false) {
            Some(run) => {
                defñ!("DateTime {:?}", run);
                self.dp_stack
                    .push_front(Element::new_composite(DataToken::DateTime, run));
                self.reductions += 1;
                true
            }
            None => false,
        }
    }

    /// `Row Comma x` becomes `Row` with `x` appended. The comma is dropped.
    pub fn reduce_row(&mut self) -> bool {
        let run = match self.reduce_pattern(&PATTERN_ROW, false) {
            Some(run) => run,
            None => return false,
        };
        debug_assert_eq!(run.len(), PATTERN_ROW.len());
        let mut iter = run.into_iter();
        let (mut row, elem) = match (iter.next(), iter.next(), iter.next()) {
            (Some(row), Some(_comma), Some(elem)) => (row, elem),
            _ => return false,
        };
        defñ!("Row {:?} += {:?}", row, elem);
        row.push_child(elem);
        self.dp_stack.push_front(row);
        self.reductions += 1;

        true
    }

    /// Fold the value that follows a separator into a `Row`, then pair that
    /// value with the oldest pending key.
    ///
    /// Returns `true` if the stack changed.
    pub fn reduce_pair(&mut self) -> bool {
        defn!();
        let mut reduced = self.reduce_date_time();
        reduced |= self.reduce_row();

        if let Some(run) = self.reduce_up_to(&PATTERN_SEPARATOR_BOUNDARY) {
            let ends_with_comma = matches!(run.last(), Some(e) if e.token == DataToken::Comma);
            if self.dp_stack.is_empty() || ends_with_comma {
                // no value boundary below, or the value is incomplete
                self.splice_back(run);
            } else if run.len() == 1 && run[0].token == DataToken::Row {
                self.splice_back(run);
            } else if run[0].token == DataToken::Row {
                let mut iter = run.into_iter();
                if let Some(mut row) = iter.next() {
                    row.extend_children(iter.collect());
                    self.dp_stack.push_front(row);
                }
                self.reductions += 1;
                reduced = true;
            } else {
                self.dp_stack
                    .push_front(Element::new_composite(DataToken::Row, run));
                self.reductions += 1;
                reduced = true;
            }
        }

        if let Some(run) = self.reduce_pattern(&PATTERN_PAIR, false) {
            match self.dp_qual.pop_front() {
                Some(key) => {
                    // the separator is dropped, the pair is `[key, row]`
                    let mut children = Elements::with_capacity(2);
                    children.push(key);
                    children.extend(
                        run.into_iter()
                            .filter(|e| e.token != DataToken::Separator),
                    );
                    let pair = Element::new_composite(DataToken::Pair, children);
                    defo!("Pair {:?}", pair);
                    self.dp_stack.push_front(pair);
                    self.reductions += 1;
                    reduced = true;
                }
                None => {
                    // no key for this value
                    self.splice_back(run);
                }
            }
        }
        defx!("reduced {}", reduced);

        reduced
    }

    /// `Key Separator Key` becomes a `Qual` pushed onto the qualifier queue.
    ///
    /// Only when `lookahead` is a `Separator`.
    pub fn reduce_qual(
        &mut self,
        lookahead: &Element,
    ) -> bool {
        if lookahead.token != DataToken::Separator {
            return false;
        }
        match self.reduce_pattern(&PATTERN_QUAL, false) {
            Some(run) => {
                let qual = Element::new_composite(DataToken::Qual, run);
                defñ!("Qual {:?}", qual);
                self.dp_qual.push_back(qual);
                self.reductions += 1;
                true
            }
            None => false,
        }
    }

    /// A `Separator` on top of the stack has no value. Drop it and return the
    /// oldest pending key to the stack as a plain element.
    fn reduce_dangling_separator(&mut self) -> bool {
        match self.dp_stack.front() {
            Some(element) if element.token == DataToken::Separator => {}
            _ => return false,
        }
        let key = match self.dp_qual.pop_front() {
            Some(key) => key,
            None => return false,
        };
        defñ!("dangling key {:?}", key);
        self.dp_stack.pop_front();
        self.dp_stack.push_front(key);
        self.reductions += 1;

        true
    }

    fn reduce_line(&mut self) {
        defn!();
        self.lines += 1;
        self.reduce_date_time();
        self.reduce_row();
        // a comma at end of line precedes nothing
        if matches!(self.dp_stack.front(), Some(e) if e.token == DataToken::Comma) {
            self.dp_stack.pop_front();
        }
        if let Some(run) = self.reduce_up_to(&PATTERN_NONTERMINAL_BOUNDARY) {
            let remainder: Option<Elements> = match self.dp_stack.front_mut() {
                Some(front) if front.token == DataToken::Row => {
                    front.extend_children(run);
                    None
                }
                Some(front)
                    if front.token == DataToken::Pair
                        && front.pair_value().map(|v| v.token) == Some(DataToken::Row) =>
                {
                    if let Some(value) = front.last_child_mut() {
                        value.extend_children(run);
                    }
                    front.update_capture();
                    None
                }
                _ => Some(run),
            };
            if let Some(run) = remainder {
                self.dp_stack
                    .push_front(Element::new_composite(DataToken::Row, run));
            }
            self.reductions += 1;
        }
        self.reduce_pair();
        defx!();
    }

    fn reduce_comma(
        &mut self,
        lookahead: Element,
    ) {
        defn!();
        self.reduce_row();
        match self.dp_stack.front().map(|e| e.token) {
            None | Some(DataToken::Separator) | Some(DataToken::Comma) => {
                defo!("drop comma");
            }
            Some(DataToken::Pair) => {
                // reopen the pair so the value may continue; a zero-width
                // separator at the end of the key marks the value boundary
                if let Some(pair) = self.dp_stack.pop_front() {
                    let mut children = pair.into_children().into_iter();
                    if let Some(key) = children.next() {
                        self.dp_stack
                            .push_front(Element::new_leaf(DataToken::Separator, key.end(), key.end()));
                        self.dp_qual.push_front(key);
                    }
                    for child in children {
                        self.dp_stack.push_front(child);
                    }
                }
                self.dp_stack.push_front(lookahead);
            }
            Some(DataToken::Row) => {
                self.dp_stack.push_front(lookahead);
            }
            Some(_) => {
                if let Some(top) = self.dp_stack.pop_front() {
                    self.dp_stack
                        .push_front(Element::new_composite(DataToken::Row, vec![top]));
                }
                self.dp_stack.push_front(lookahead);
            }
        }
        defx!();
    }

    fn reduce_separator(
        &mut self,
        lookahead: Element,
    ) {
        defn!();
        match self.reduce_any_of(&PATTERN_KEY) {
            Some(key) => {
                // a comma between the previous value and this key
                if matches!(self.dp_stack.front(), Some(e) if e.token == DataToken::Comma) {
                    self.dp_stack.pop_front();
                }
                self.reduce_pair();
                self.reduce_dangling_separator();
                let key = Element::new_composite(DataToken::Key, vec![key]);
                defo!("pending {:?}", key);
                self.dp_qual.push_back(key);
                self.dp_stack.push_front(lookahead);
            }
            None => {
                self.reduce_pair();
                defo!("drop separator");
            }
        }
        defx!();
    }

    /// Consume one lookahead token.
    pub fn reduce(
        &mut self,
        lookahead: Element,
    ) {
        defn!("({:?})", lookahead);
        self.tokens += 1;
        match lookahead.token {
            DataToken::Garbage => {
                self.garbage += 1;
            }
            DataToken::Invalid | DataToken::White => {
                self.reduce_pair();
            }
            DataToken::Line => self.reduce_line(),
            DataToken::Comma => self.reduce_comma(lookahead),
            DataToken::Separator => self.reduce_separator(lookahead),
            _ => self.dp_stack.push_front(lookahead),
        }
        debug_assert_le!(self.dp_qual.len(), self.tokens as usize, "qualifier queue grew beyond tokens");
        defx!("stack {:?}", self.dp_stack);
    }

    /// Apply the remaining reductions until nothing changes.
    ///
    /// Calling `flush` a second time does not change the stack.
    pub fn flush(&mut self) {
        defn!();
        loop {
            let reductions = self.reductions;
            self.reduce_pair();
            self.reduce_dangling_separator();
            if reductions == self.reductions {
                break;
            }
        }
        defx!("stack {:?}", self.dp_stack);
    }

    /// Statistics of this `DataParser`.
    pub fn summary(&self) -> SummaryDataParser {
        SummaryDataParser {
            DataParser_lines: self.lines,
            DataParser_tokens: self.tokens,
            DataParser_garbage: self.garbage,
            DataParser_reductions: self.reductions,
        }
    }

    /// Consume the `DataParser`, returning the stack in text order.
    pub fn into_elements(self) -> Elements {
        let mut elements: Elements = self.dp_stack.into_iter().collect();
        elements.reverse();

        elements
    }
}
