// src/data/mod.rs

//! The `data` module is data containers for [`DataToken`]s, [`Element`]s,
//! and [`ParsedLine`]s.
//!
//! ## Definitions of data
//!
//! ### Token
//!
//! A "token" is a minimal classified span of a line of text, e.g. a number,
//! a word, a `'='` separator. A token is found by a [`DataScanner`] and is
//! represented by a leaf [`Element`] with a terminal [`DataToken`].
//!
//! ### Element
//!
//! An "element" is either a token or a composite of other elements found by
//! a reduction in the [`DataParser`], e.g. a "row" of comma-separated
//! values or a "pair" of a key and a value.
//!
//! ### ParsedLine
//!
//! A "parsed line" is one line of text and the top-level elements the
//! `DataParser` derived from it. It is represented by a [`ParsedLine`].
//!
//! [`DataScanner`]: crate::parsers::datascanner::DataScanner
//! [`DataParser`]: crate::parsers::dataparser::DataParser
//! [`DataToken`]: crate::data::token::DataToken
//! [`Element`]: crate::data::element::Element
//! [`ParsedLine`]: crate::data::parsedline::ParsedLine

pub mod element;
pub mod parsedline;
pub mod token;
