// src/lib.rs

//! _ldplib_ parses one line of unstructured log text into key/value pairs,
//! rows of comma-separated values, and datetimes, without a schema.
//!
//! A [`DataScanner`] breaks the line into tokens, a [`DataParser`] reduces
//! the tokens into a tree of [`Element`s]. [`ParsedLine`] ties them together.
//!
//! ```
//! use ldplib::data::parsedline::ParsedLine;
//!
//! let parsed = ParsedLine::parse("user=alice port=22\n");
//! let pairs = parsed.pairs();
//! assert_eq!(pairs.len(), 2);
//! assert_eq!(parsed.pair_key_str(pairs[0]), "user");
//! ```
//!
//! [`DataScanner`]: crate::parsers::datascanner::DataScanner
//! [`DataParser`]: crate::parsers::dataparser::DataParser
//! [`Element`s]: crate::data::element::Element
//! [`ParsedLine`]: crate::data::parsedline::ParsedLine

pub mod common;
pub mod data;
pub mod debug;
pub mod parsers;
pub mod printer;
pub mod readers;
#[cfg(test)]
pub mod tests;
