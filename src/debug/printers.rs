// src/debug/printers.rs

//! Error and warning printing macros, and helpers for showing spans of
//! log text with control characters made visible.

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// stderr macros
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// `e`println! an `err`or, prefixed with `ERROR: `
#[macro_export]
macro_rules! e_err {
    ($($args:tt)*) => {
        eprintln!("ERROR: {}", format_args!($($args)*))
    }
}
pub use e_err;

/// `e`println! a `w`a`rn`ing, prefixed with `WARNING: `
#[macro_export]
macro_rules! e_wrn {
    ($($args:tt)*) => {
        eprintln!("WARNING: {}", format_args!($($args)*))
    }
}
pub use e_wrn;

/// `d`ebug build [`e_err!`], a no-op in release builds
#[macro_export]
macro_rules! de_err {
    ($($args:tt)*) => {
        {
            #[cfg(any(debug_assertions, test))]
            $crate::e_err!($($args)*);
        }
    }
}
pub use de_err;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// visible control characters
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// first codepoint of the Unicode "Control Pictures" block, `'␀'`
const CONTROL_PICTURES: u32 = 0x2400;

/// Map a C0 control character or DEL to its Unicode control picture,
/// e.g. `'\t'` becomes `'␉'`. Any other `char` is returned unchanged.
///
/// The result always has a printing width of one, so a span of text keeps
/// its width when printed.
pub const fn char_to_char_noraw(c: char) -> char {
    let u = c as u32;
    let picture = match u {
        0..=0x1F => CONTROL_PICTURES + u,
        0x7F => CONTROL_PICTURES + 0x21,
        _ => return c,
    };
    match char::from_u32(picture) {
        Some(c_) => c_,
        None => c,
    }
}

/// Copy `s` to a new `String` with every control character passed through
/// [`char_to_char_noraw`].
///
/// Used by the tree printer so a span holding a `'\n'` or `'\t'` does not
/// break the one-element-per-line layout.
#[allow(non_snake_case)]
pub fn str_to_String_noraw(s: &str) -> String {
    s.chars().map(char_to_char_noraw).collect()
}
