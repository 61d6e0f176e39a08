// src/tests/mod.rs

//! Tests for _ldplib_.
//!
//! Tests are placed at `src/tests/`, inside the `ldplib`. This is a
//! reasonable trade-off of separation and access.
//!
//! Tests placed at top-level path `tests/` do not have crate-internal
//! visibility.

pub mod common;
pub mod dataparser_tests;
pub mod element_tests;
pub mod printers_tests;
