// src/data/parsedline.rs

//! Implement [`ParsedLine`], one line of text with the [`Element`s] the
//! [`DataParser`] derived from it.
//!
//! [`Element`s]: crate::data::element::Element
//! [`DataParser`]: crate::parsers::dataparser::DataParser

use crate::common::{LineIndex, NLc};
use crate::data::element::{Element, Elements};
use crate::data::token::DataToken;
use crate::parsers::columnnamer::ColumnNamer;
use crate::parsers::dataparser::{DataParser, SummaryDataParser};
use crate::parsers::datascanner::{unquote, DataScanner};

use std::fmt;

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};
use ::sha2::{Digest, Sha256};

/// Placeholder for a `Pair` value in [`ParsedLine::msg_format`].
///
/// [`ParsedLine::msg_format`]: self::ParsedLine::msg_format
pub const MSG_FORMAT_VALUE: &str = "#";

/// One column derived from a `Pair`: a unique name, the value text, and the
/// kind of the value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Column<'a> {
    pub name: String,
    pub value: &'a str,
    pub kind: DataToken,
}

/// A line of text and its top-level [`Element`s], in textual order.
///
/// The `Element`s refer to `line` by offsets so the `ParsedLine` borrows
/// `line`.
///
/// [`Element`s]: crate::data::element::Element
pub struct ParsedLine<'a> {
    line: &'a str,
    elements: Elements,
    summary: SummaryDataParser,
}

impl fmt::Debug for ParsedLine<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        f.debug_struct("ParsedLine")
            .field("line", &self.line)
            .field("elements", &self.elements)
            .finish()
    }
}

impl<'a> ParsedLine<'a> {
    /// Scan and parse `line`.
    pub fn parse(line: &'a str) -> ParsedLine<'a> {
        defn!("({:?})", line);
        let mut parser = DataParser::new();
        for token in DataScanner::new(line) {
            parser.reduce(token);
        }
        parser.flush();
        let summary = parser.summary();
        let elements = parser.into_elements();
        defx!("{:?}", elements);

        ParsedLine {
            line,
            elements,
            summary,
        }
    }

    /// The parsed line.
    pub const fn line(&self) -> &'a str {
        self.line
    }

    /// Top-level elements in textual order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// The text spanned by `element`.
    pub fn element_str(
        &self,
        element: &Element,
    ) -> &'a str {
        element.as_str(self.line)
    }

    /// Every `Pair`, depth-first in textual order.
    pub fn pairs(&self) -> Vec<&Element> {
        let mut pairs: Vec<&Element> = Vec::new();
        for element in self.elements.iter() {
            element.walk(&mut |e| {
                if e.token == DataToken::Pair {
                    pairs.push(e);
                }
            });
        }

        pairs
    }

    /// The key text of `pair`, without quotes.
    ///
    /// Empty if `pair` is not a `Pair`.
    pub fn pair_key_str(
        &self,
        pair: &Element,
    ) -> &'a str {
        match pair.pair_key() {
            Some(key) if key.token == DataToken::Key => match key.children().first() {
                Some(name) => unquote(self.element_str(name)),
                None => "",
            },
            Some(key) => self.element_str(key),
            None => "",
        }
    }

    /// The value of `pair`.
    pub fn pair_value<'b>(
        &self,
        pair: &'b Element,
    ) -> Option<&'b Element> {
        pair.pair_value()
    }

    /// Each `Pair` as a [`Column`] with a unique name.
    ///
    /// [`Column`]: self::Column
    pub fn columns(&self) -> Vec<Column<'a>> {
        let mut namer = ColumnNamer::new();

        self.pairs()
            .into_iter()
            .filter_map(|pair| {
                let value = pair.pair_value()?;
                let name = namer.add_column(self.pair_key_str(pair));
                Some(Column {
                    name,
                    value: unquote(self.element_str(value)),
                    kind: value.value_token(),
                })
            })
            .collect()
    }

    /// Hex SHA-256 digest over the keys and value kinds of every `Pair`.
    ///
    /// Lines of the same layout but different values have the same
    /// `schema_id`.
    pub fn schema_id(&self) -> String {
        let mut hasher = Sha256::new();
        for pair in self.pairs().into_iter() {
            hasher.update(self.pair_key_str(pair).as_bytes());
            hasher.update([0]);
            let kind = match pair.pair_value() {
                Some(value) => value.value_token(),
                None => DataToken::Invalid,
            };
            hasher.update(kind.name().as_bytes());
            hasher.update([0]);
        }
        let digest = hasher.finalize();

        digest
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect()
    }

    /// The line with the value of every `Pair` replaced by
    /// [`MSG_FORMAT_VALUE`], e.g. `user=alice port=22` becomes
    /// `user=# port=#`.
    ///
    /// Lines of the same message format differ only in their values.
    /// A value nested in the value of an outer `Pair` is part of the outer
    /// replacement. A trailing `'\n'` is not included.
    ///
    /// [`MSG_FORMAT_VALUE`]: self::MSG_FORMAT_VALUE
    pub fn msg_format(&self) -> String {
        let line: &str = self.line.strip_suffix(NLc).unwrap_or(self.line);
        let mut format = String::with_capacity(line.len());
        let mut at: LineIndex = 0;
        for pair in self.pairs().into_iter() {
            let value = match pair.pair_value() {
                Some(value) => value,
                None => continue,
            };
            if value.begin() < at {
                continue;
            }
            let end = value.end().min(line.len());
            match line.get(at..value.begin()) {
                Some(text) => format.push_str(text),
                None => continue,
            }
            format.push_str(MSG_FORMAT_VALUE);
            at = end.max(value.begin());
        }
        format.push_str(line.get(at..).unwrap_or_default());
        defñ!("{:?}", format);

        format
    }

    /// Statistics of the parse.
    pub const fn summary(&self) -> &SummaryDataParser {
        &self.summary
    }
}
