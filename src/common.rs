// src/common.rs
//
// common imports, type aliases, and other globals (avoids circular imports)

//! Common type aliases and constants shared by the _ldplib_ modules.

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// file-handling, command-line parsing
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// `F`ake `Path` or `F`ile `Path`
pub type FPath = String;
pub type FPaths = Vec<FPath>;

/// user-passed signifier that lines should be read from STDIN
pub const PATH_STDIN: &str = "-";

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Lines and spans
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// A general-purpose counting type, e.g. count of tokens scanned.
pub type Count = u64;

/// A byte offset into one line of text.
pub type LineIndex = usize;

/// Half-open [`Range`] of [`LineIndex`].
///
/// [`Range`]: std::ops::Range
/// [`LineIndex`]: self::LineIndex
pub type RangeLineIndex = std::ops::Range<LineIndex>;

/// NewLine as char
#[allow(non_upper_case_globals)]
pub const NLc: char = '\n';

/// NewLine as `&str`
#[allow(non_upper_case_globals)]
pub const NLs: &str = "\n";
