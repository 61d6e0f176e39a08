// src/readers/mod.rs

//! "Readers" for _ldplib_.
//!
//! A [`LineReader`] reads a file, or STDIN, one line at a time for the
//! _ldp_ program. Each line is then handed to a [`ParsedLine`].
//!
//! _These are not rust "Readers"; these structs do not implement the trait
//! [`Read`]. These are "readers" in an informal sense._
//!
//! [`Read`]: std::io::Read
//! [`LineReader`]: crate::readers::linereader::LineReader
//! [`ParsedLine`]: crate::data::parsedline::ParsedLine

pub mod linereader;
