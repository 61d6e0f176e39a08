// src/parsers/mod.rs

//! "Parsers" for _ldplib_.
//!
//! ## Overview of parsers
//!
//! * A [`DataScanner`] breaks a line of text into leaf [`Element`s].
//! * A [`DataParser`] reduces those `Element`s, one lookahead at a time,
//!   into `Pair`s, `Row`s, and `DateTime`s using the [patterns].
//! * A [`ColumnNamer`] derives unique column names from `Pair` keys.
//!
//! A [`ParsedLine`] drives a `DataScanner` and a `DataParser` for one line.
//!
//! [`Element`s]: crate::data::element::Element
//! [`DataScanner`]: crate::parsers::datascanner::DataScanner
//! [`DataParser`]: crate::parsers::dataparser::DataParser
//! [`ColumnNamer`]: crate::parsers::columnnamer::ColumnNamer
//! [`ParsedLine`]: crate::data::parsedline::ParsedLine
//! [patterns]: crate::parsers::patterns

pub mod columnnamer;
pub mod dataparser;
pub mod datascanner;
pub mod patterns;
