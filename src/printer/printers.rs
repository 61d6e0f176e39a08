// src/printer/printers.rs

//! Specialized printer struct [`PrinterElements`] and helper functions
//! for printing [`ParsedLine`s].
//!
//! [`ParsedLine`s]: crate::data::parsedline::ParsedLine

use crate::common::{Count, NLs};
use crate::data::element::Element;
use crate::data::parsedline::ParsedLine;
use crate::data::token::DataToken;
use crate::debug::printers::{de_err, str_to_String_noraw};
use crate::parsers::datascanner::DataScanner;

use std::io::{Result, Write};

#[doc(hidden)]
pub use ::termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// globals and constants
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// [`Color`] for printing element text.
///
/// [`Color`]: https://docs.rs/termcolor/1.4.1/termcolor/enum.Color.html
pub const COLOR_DEFAULT: Color = Color::White;

/// [`Color`] for printing some user-facing error messages.
///
/// [`Color`]: https://docs.rs/termcolor/1.4.1/termcolor/enum.Color.html
pub const COLOR_ERROR: Color = Color::Red;

/// [`Color`] for printing element spans.
pub const COLOR_SPAN: Color = Color::Rgb(127, 127, 127);

/// Indentation per tree depth.
pub const INDENT: &str = "  ";

/// The [`Color`] of a token kind.
/// Chosen for a dark background console.
///
/// [`Color`]: https://docs.rs/termcolor/1.4.1/termcolor/enum.Color.html
pub const fn color_token(token: DataToken) -> Color {
    match token {
        DataToken::String => Color::Green,
        DataToken::Number | DataToken::HexNumber => Color::Cyan,
        DataToken::Time | DataToken::DateTime => Color::Magenta,
        DataToken::Comma | DataToken::Separator => Color::Rgb(153, 153, 0),
        DataToken::Line | DataToken::White => Color::Rgb(102, 102, 102),
        DataToken::Invalid | DataToken::Garbage => Color::Red,
        DataToken::Key | DataToken::Qual => Color::Yellow,
        DataToken::Pair => Color::Rgb(230, 127, 127),
        DataToken::Row => Color::Rgb(127, 127, 230),
        DataToken::Any => COLOR_DEFAULT,
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// PrinterElements
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Statistics about printing activity.
/// Used with CLI option `--summary`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SummaryPrinted {
    /// count of `ParsedLine`s printed
    pub lines: Count,
    /// count of `Element`s printed
    pub elements: Count,
    /// count of bytes printed
    pub bytes: Count,
}

/// A printer specialized for [`ParsedLine`s] in the various output modes.
///
/// Writes to any [`WriteColor`], usually a [`StandardStream`] for stdout.
///
/// [`ParsedLine`s]: crate::data::parsedline::ParsedLine
/// [`WriteColor`]: https://docs.rs/termcolor/1.4.1/termcolor/trait.WriteColor.html
/// [`StandardStream`]: https://docs.rs/termcolor/1.4.1/termcolor/struct.StandardStream.html
pub struct PrinterElements<W: WriteColor> {
    out: W,
    color_spec_default: ColorSpec,
    color_spec_span: ColorSpec,
    summary: SummaryPrinted,
}

impl PrinterElements<StandardStream> {
    /// Create a `PrinterElements` for stdout.
    pub fn stdout(color_choice: ColorChoice) -> PrinterElements<StandardStream> {
        PrinterElements::new(StandardStream::stdout(color_choice))
    }
}

impl<W: WriteColor> PrinterElements<W> {
    pub fn new(out: W) -> PrinterElements<W> {
        let mut color_spec_default: ColorSpec = ColorSpec::new();
        color_spec_default.set_fg(Some(COLOR_DEFAULT));
        let mut color_spec_span: ColorSpec = ColorSpec::new();
        color_spec_span.set_fg(Some(COLOR_SPAN));
        color_spec_span.set_dimmed(true);

        PrinterElements {
            out,
            color_spec_default,
            color_spec_span,
            summary: SummaryPrinted::default(),
        }
    }

    /// Consume the printer and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    pub const fn summary(&self) -> SummaryPrinted {
        self.summary
    }

    fn write_spec(
        &mut self,
        spec: &ColorSpec,
        value: &str,
    ) -> Result<()> {
        if let Err(err) = self.out.set_color(spec) {
            de_err!("set_color({:?}) returned error {}", spec, err);
            return Err(err);
        }
        self.out.write_all(value.as_bytes())?;
        self.summary.bytes += value.len() as Count;

        Ok(())
    }

    fn write_colored(
        &mut self,
        color: Color,
        value: &str,
    ) -> Result<()> {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(color));

        self.write_spec(&spec, value)
    }

    fn write_plain(
        &mut self,
        value: &str,
    ) -> Result<()> {
        let spec = self.color_spec_default.clone();

        self.write_spec(&spec, value)
    }

    /// Write one tree line for `element`, then for each of its children.
    fn print_element(
        &mut self,
        parsed: &ParsedLine,
        element: &Element,
        depth: usize,
    ) -> Result<()> {
        for _ in 0..depth {
            self.write_plain(INDENT)?;
        }
        self.write_colored(color_token(element.token), element.token.name())?;
        let span = format!(" {}‥{} ", element.begin(), element.end());
        let spec = self.color_spec_span.clone();
        self.write_spec(&spec, &span)?;
        let text = format!("{:?}", str_to_String_noraw(parsed.element_str(element)));
        self.write_plain(&text)?;
        self.write_plain(NLs)?;
        self.summary.elements += 1;
        for child in element.children().iter() {
            self.print_element(parsed, child, depth + 1)?;
        }

        Ok(())
    }

    /// Print the element tree of `parsed`, one element per line, children
    /// indented beneath their parent.
    pub fn print_tree(
        &mut self,
        parsed: &ParsedLine,
    ) -> Result<()> {
        defn!("({:?})", parsed.line());
        for element in parsed.elements().iter() {
            self.print_element(parsed, element, 0)?;
        }
        self.finish_line()?;
        defx!();

        Ok(())
    }

    /// Print the scanner tokens of `line` as `KIND "text"`, space-separated,
    /// without parsing.
    pub fn print_tokens(
        &mut self,
        line: &str,
    ) -> Result<()> {
        let mut scanner = DataScanner::new(line);
        while let Some(token) = scanner.next() {
            if scanner.count_tokens() > 1 {
                self.write_plain(" ")?;
            }
            self.write_colored(color_token(token.token), token.token.name())?;
            let text = format!(" {:?}", str_to_String_noraw(token.as_str(line)));
            self.write_plain(&text)?;
        }
        self.summary.elements += scanner.count_tokens();
        self.write_plain(NLs)?;
        self.finish_line()
    }

    /// Print each pair of `parsed` as `name<TAB>kind<TAB>value`.
    pub fn print_columns(
        &mut self,
        parsed: &ParsedLine,
    ) -> Result<()> {
        for column in parsed.columns().into_iter() {
            self.write_colored(color_token(DataToken::Key), &column.name)?;
            self.write_plain("\t")?;
            self.write_colored(color_token(column.kind), column.kind.name())?;
            self.write_plain("\t")?;
            self.write_plain(&str_to_String_noraw(column.value))?;
            self.write_plain(NLs)?;
            self.summary.elements += 1;
        }
        self.finish_line()
    }

    /// Print `value` as one line of JSON.
    pub fn print_json(
        &mut self,
        value: &serde_json::Value,
    ) -> Result<()> {
        let text = value.to_string();
        self.write_plain(&text)?;
        self.write_plain(NLs)?;
        self.finish_line()
    }

    fn finish_line(&mut self) -> Result<()> {
        self.summary.lines += 1;
        self.out.reset()?;

        self.out.flush()
    }
}
