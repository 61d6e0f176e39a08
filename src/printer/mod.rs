// src/printer/mod.rs

//! The `printer` module is for printing user-facing [`ParsedLine`s]
//! as an element tree, as JSON, as columns, or as scanner tokens,
//! with color per token kind.
//!
//! [`ParsedLine`s]: crate::data::parsedline::ParsedLine

pub mod elementjson;
pub mod printers;
