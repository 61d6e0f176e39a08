// src/parsers/patterns.rs

//! Pattern tables used by the [`DataParser`] reductions.
//!
//! A pattern is a short sequence of [`DataToken`]s compared against the
//! parser stack. Every pattern here is written **top-first**: index `0` is
//! compared with the element on top of the stack, index `1` with the element
//! beneath it, and so on.
//!
//! [`DataParser`]: crate::parsers::dataparser::DataParser
//! [`DataToken`]: crate::data::token::DataToken

use crate::data::token::DataToken;

/// A sequence of `DataToken`, top-first.
pub type DataTokenPattern = [DataToken];

/// Kinds that may act as the key of a key/value pair.
pub const PATTERN_KEY: [DataToken; 3] = [
    DataToken::String,
    DataToken::Number,
    DataToken::HexNumber,
];

/// Boundaries for collecting a value: a separator or end of line.
pub const PATTERN_SEPARATOR_BOUNDARY: [DataToken; 2] = [
    DataToken::Separator,
    DataToken::Line,
];

/// Boundaries for collecting the remainder of a line.
pub const PATTERN_NONTERMINAL_BOUNDARY: [DataToken; 3] = [
    DataToken::Pair,
    DataToken::Row,
    DataToken::Separator,
];

/// `Separator Row` in text order; a value ready to be paired with a key.
pub const PATTERN_PAIR: [DataToken; 2] = [
    DataToken::Row,
    DataToken::Separator,
];

/// `Row Comma <any>` in text order; an element to append to a row.
pub const PATTERN_ROW: [DataToken; 3] = [
    DataToken::Any,
    DataToken::Comma,
    DataToken::Row,
];

/// `String Number Time` in text order, e.g. `Jan 15 12:34:56`.
pub const PATTERN_DATE_TIME: [DataToken; 3] = [
    DataToken::Time,
    DataToken::Number,
    DataToken::String,
];

/// `Key Separator Key` in text order, a qualified name.
pub const PATTERN_QUAL: [DataToken; 3] = [
    DataToken::Key,
    DataToken::Separator,
    DataToken::Key,
];
