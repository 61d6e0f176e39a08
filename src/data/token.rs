// src/data/token.rs

//! Implement [`DataToken`], the closed set of token kinds shared by the
//! [`DataScanner`] and the [`DataParser`].
//!
//! [`DataScanner`]: crate::parsers::datascanner::DataScanner
//! [`DataParser`]: crate::parsers::dataparser::DataParser

use std::fmt;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// DataToken
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Kind of an [`Element`].
///
/// _Terminal_ kinds are produced by the [`DataScanner`] and are always
/// leaves. _Non-terminal_ kinds are produced by reductions in the
/// [`DataParser`] and always own child `Element`s.
///
/// `Any` is only used within pattern tables; it matches any `Element` at
/// its position and is never carried by an `Element`.
///
/// [`Element`]: crate::data::element::Element
/// [`DataScanner`]: crate::parsers::datascanner::DataScanner
/// [`DataParser`]: crate::parsers::dataparser::DataParser
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum DataToken {
    // terminals
    /// A value boundary that is not otherwise meaningful, e.g. `[` or `;`.
    Invalid,
    /// A bare word or a quoted string.
    String,
    /// A decimal number, e.g. `42`, `-3.5`, `1e9`.
    Number,
    /// A hexadecimal number with `0x` prefix.
    HexNumber,
    /// A time of day, e.g. `12:34:56.789`.
    Time,
    /// `,`
    Comma,
    /// `=` or `:`
    Separator,
    /// End of line or end of input.
    Line,
    /// Horizontal whitespace.
    White,
    /// Scanner noise; dropped by the parser.
    Garbage,
    // pattern wildcard
    /// Matches any `Element`, only used in patterns.
    Any,
    // non-terminals
    /// `String Number Time`, e.g. `Jan 15 12:34:56`.
    DateTime,
    /// The key of a key/value pair.
    Key,
    /// A key and its value.
    Pair,
    /// A sequence of sibling elements.
    Row,
    /// A qualified name, `Key Separator Key`.
    Qual,
}

/// All `DataToken` values, in declaration order.
pub const DATA_TOKENS_ALL: [DataToken; 16] = [
    DataToken::Invalid,
    DataToken::String,
    DataToken::Number,
    DataToken::HexNumber,
    DataToken::Time,
    DataToken::Comma,
    DataToken::Separator,
    DataToken::Line,
    DataToken::White,
    DataToken::Garbage,
    DataToken::Any,
    DataToken::DateTime,
    DataToken::Key,
    DataToken::Pair,
    DataToken::Row,
    DataToken::Qual,
];

impl DataToken {
    /// Is this a kind the scanner produces?
    pub const fn is_terminal(&self) -> bool {
        matches!(
            self,
            DataToken::Invalid
                | DataToken::String
                | DataToken::Number
                | DataToken::HexNumber
                | DataToken::Time
                | DataToken::Comma
                | DataToken::Separator
                | DataToken::Line
                | DataToken::White
                | DataToken::Garbage
        )
    }

    /// Is this a kind only a reduction produces?
    pub const fn is_nonterminal(&self) -> bool {
        matches!(
            self,
            DataToken::DateTime | DataToken::Key | DataToken::Pair | DataToken::Row | DataToken::Qual
        )
    }

    /// Does this pattern entry match an element of kind `other`?
    ///
    /// `Any` matches everything.
    #[inline(always)]
    pub const fn matches(
        &self,
        other: DataToken,
    ) -> bool {
        matches!(self, DataToken::Any) || *self as u8 == other as u8
    }

    /// Short upper-case name, used in trace output and the tree printer.
    pub const fn name(&self) -> &'static str {
        match self {
            DataToken::Invalid => "INVALID",
            DataToken::String => "STRING",
            DataToken::Number => "NUMBER",
            DataToken::HexNumber => "HEX_NUMBER",
            DataToken::Time => "TIME",
            DataToken::Comma => "COMMA",
            DataToken::Separator => "SEPARATOR",
            DataToken::Line => "LINE",
            DataToken::White => "WHITE",
            DataToken::Garbage => "GARBAGE",
            DataToken::Any => "ANY",
            DataToken::DateTime => "DATE_TIME",
            DataToken::Key => "KEY",
            DataToken::Pair => "PAIR",
            DataToken::Row => "ROW",
            DataToken::Qual => "QUAL",
        }
    }
}

impl fmt::Display for DataToken {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
