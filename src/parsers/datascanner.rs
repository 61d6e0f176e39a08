// src/parsers/datascanner.rs

//! Implements a [`DataScanner`], the tokenizer that breaks one line of text
//! into leaf [`Element`s] for the [`DataParser`].
//!
//! [`Element`s]: crate::data::element::Element
//! [`DataParser`]: crate::parsers::dataparser::DataParser

use crate::common::{Count, LineIndex};
use crate::data::element::Element;
use crate::data::token::DataToken;
#[cfg(any(debug_assertions, test))]
use crate::debug::printers::str_to_String_noraw;

use ::lazy_static::lazy_static;
use ::more_asserts::debug_assert_le;
use ::regex::Regex;
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// token regular expressions
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Regular expression pattern for horizontal whitespace.
pub const RP_WHITE: &str = r"^[ \t\r\x0B\x0C]+";

/// Regular expression pattern for a double-quoted or single-quoted string.
/// Backslash escapes the next character. A string does not span lines.
pub const RP_QUOTED: &str = r#"^(?:"(?:[^"\\\n]|\\.)*"|'(?:[^'\\\n]|\\.)*')"#;

/// Regular expression pattern for a time of day, e.g. `9:05`, `12:34:56`,
/// `12:34:56.789`, `12:34:56,789`.
pub const RP_TIME: &str = r"^\d{1,2}:\d{2}(?::\d{2}(?:[.,]\d+)?)?";

/// Regular expression pattern for a run of word characters; anything up to
/// whitespace, a control character, a separator, a comma, a quote, or a
/// bracketing character.
pub const RP_WORD: &str = r#"^[^\s\x00-\x1F\x7F=:,;"'\[\](){}<>|]+"#;

/// Regular expression pattern for a whole word that is a hexadecimal number.
pub const RP_HEX_NUMBER: &str = r"^0[xX][0-9a-fA-F]+$";

/// Regular expression pattern for a whole word that is a decimal number.
pub const RP_NUMBER: &str = r"^[-+]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][-+]?\d+)?$";

lazy_static! {
    static ref RE_WHITE: Regex = Regex::new(RP_WHITE).unwrap();
    static ref RE_QUOTED: Regex = Regex::new(RP_QUOTED).unwrap();
    static ref RE_TIME: Regex = Regex::new(RP_TIME).unwrap();
    static ref RE_WORD: Regex = Regex::new(RP_WORD).unwrap();
    static ref RE_HEX_NUMBER: Regex = Regex::new(RP_HEX_NUMBER).unwrap();
    static ref RE_NUMBER: Regex = Regex::new(RP_NUMBER).unwrap();
}

/// Is `c` a character that ends a word (see [`RP_WORD`])?
///
/// [`RP_WORD`]: self::RP_WORD
fn is_word_terminator(c: char) -> bool {
    c.is_whitespace()
        || c.is_control()
        || matches!(c, '=' | ':' | ',' | ';' | '"' | '\'' | '[' | ']' | '(' | ')' | '{' | '}' | '<' | '>' | '|')
}

/// Classify a run of word characters matched by [`RP_WORD`].
///
/// [`RP_WORD`]: self::RP_WORD
pub fn classify_word(word: &str) -> DataToken {
    if RE_HEX_NUMBER.is_match(word) {
        DataToken::HexNumber
    } else if RE_NUMBER.is_match(word) {
        DataToken::Number
    } else {
        DataToken::String
    }
}

/// Remove the surrounding quotes of a quoted string.
///
/// Other `str` are returned as-is.
pub fn unquote(s: &str) -> &str {
    let bytes = s.as_bytes();
    if bytes.len() >= 2 {
        let first = bytes[0];
        let last = bytes[bytes.len() - 1];
        if (first == b'"' || first == b'\'') && first == last {
            return &s[1..s.len() - 1];
        }
    }

    s
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// DataScanner
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Scans one line of text into leaf [`Element`s], in textual order.
///
/// Every character of the line is covered by exactly one token; spans are
/// contiguous. The token stream always ends with a [`DataToken::Line`];
/// if the line does not end with `'\n'` then a zero-width `Line` token is
/// produced at the end.
///
/// A `DataScanner` is an [`Iterator`].
///
/// [`Element`s]: crate::data::element::Element
/// [`DataToken::Line`]: crate::data::token::DataToken::Line
pub struct DataScanner<'a> {
    /// the line being scanned
    line: &'a str,
    /// byte offset of the next token
    at: LineIndex,
    /// kind of the previously returned token
    last_token: Option<DataToken>,
    /// count of tokens returned
    tokens: Count,
}

impl std::fmt::Debug for DataScanner<'_> {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter,
    ) -> std::fmt::Result {
        f.debug_struct("DataScanner")
            .field("line.len", &self.line.len())
            .field("at", &self.at)
            .field("last_token", &self.last_token)
            .field("tokens", &self.tokens)
            .finish()
    }
}

impl<'a> DataScanner<'a> {
    pub fn new(line: &'a str) -> DataScanner<'a> {
        defñ!("DataScanner::new(line len {})", line.len());

        DataScanner {
            line,
            at: 0,
            last_token: None,
            tokens: 0,
        }
    }

    /// The line being scanned.
    pub const fn line(&self) -> &'a str {
        self.line
    }

    /// Count of tokens returned so far.
    pub const fn count_tokens(&self) -> Count {
        self.tokens
    }

    /// Find the kind and byte length of the token at the start of `rest`.
    ///
    /// `rest` must not be empty.
    fn token_at(rest: &str) -> (DataToken, usize) {
        let c: char = match rest.chars().next() {
            Some(c) => c,
            None => return (DataToken::Line, 0),
        };
        match c {
            '\n' => (DataToken::Line, 1),
            ',' => (DataToken::Comma, 1),
            '=' | ':' => (DataToken::Separator, 1),
            '[' | ']' | '(' | ')' | '{' | '}' | '<' | '>' | ';' | '|' => (DataToken::Invalid, 1),
            '"' | '\'' => match RE_QUOTED.find(rest) {
                Some(m) => (DataToken::String, m.end()),
                // unterminated quote
                None => (DataToken::Garbage, c.len_utf8()),
            },
            _ => {
                if let Some(m) = RE_WHITE.find(rest) {
                    return (DataToken::White, m.end());
                }
                if let Some(m) = RE_TIME.find(rest) {
                    // a time must not run into a following word, e.g. `12:34abc`
                    match rest[m.end()..].chars().next() {
                        None => return (DataToken::Time, m.end()),
                        Some(c_next) if is_word_terminator(c_next) => {
                            return (DataToken::Time, m.end());
                        }
                        Some(_) => {}
                    }
                }
                if let Some(m) = RE_WORD.find(rest) {
                    return (classify_word(m.as_str()), m.end());
                }

                (DataToken::Garbage, c.len_utf8())
            }
        }
    }

    /// Return the next token, or `None` after the terminating `Line` token.
    pub fn tokenize(&mut self) -> Option<Element> {
        if self.at >= self.line.len() {
            if self.last_token == Some(DataToken::Line) {
                return None;
            }
            let end = self.line.len();
            self.last_token = Some(DataToken::Line);
            self.tokens += 1;
            defñ!("DataScanner: LINE@{}‥{} (end of input)", end, end);
            return Some(Element::new_leaf(DataToken::Line, end, end));
        }
        let rest: &str = &self.line[self.at..];
        let (token, len) = DataScanner::token_at(rest);
        debug_assert_le!(self.at + len, self.line.len(), "token overruns line");
        let begin = self.at;
        self.at += len;
        if token == DataToken::Line && self.at == self.line.len() {
            // the trailing '\n' is the terminating token
            self.last_token = Some(DataToken::Line);
        } else {
            self.last_token = Some(token);
        }
        self.tokens += 1;
        defñ!(
            "DataScanner: {}@{}‥{} {:?}",
            token,
            begin,
            self.at,
            str_to_String_noraw(&self.line[begin..self.at])
        );

        Some(Element::new_leaf(token, begin, self.at))
    }
}

impl Iterator for DataScanner<'_> {
    type Item = Element;

    fn next(&mut self) -> Option<Element> {
        self.tokenize()
    }
}
