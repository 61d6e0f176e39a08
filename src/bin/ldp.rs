// src/bin/ldp.rs

//! Driver program _ldp_ (log data parser).
//!
//! Processes user-passed command-line arguments.
//! Reads each line of each passed file, or STDIN, parses it with
//! [`ParsedLine`], and prints the result in the chosen output mode.
//!
//! [`ParsedLine`]: ldplib::data::parsedline::ParsedLine

#![allow(non_camel_case_types)]

use std::process::ExitCode;

use ::anyhow::{self, Context};
use ::clap::{Parser, ValueEnum};
use ::const_format::concatcp;
use ::termcolor::{ColorChoice, WriteColor};

use ::ldplib::common::{FPath, FPaths, PATH_STDIN};
use ::ldplib::data::parsedline::ParsedLine;
use ::ldplib::debug::printers::{e_err, e_wrn};
use ::ldplib::parsers::dataparser::SummaryDataParser;
use ::ldplib::printer::elementjson::elements_to_json;
use ::ldplib::printer::printers::{PrinterElements, SummaryPrinted};
use ::ldplib::readers::linereader::{LineReader, SummaryLineReader};

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};
use ::si_trace_print::stack::stack_offset_set;

// --------------------
// command-line parsing

/// CLI enum that maps to [`termcolor::ColorChoice`].
///
/// [`termcolor::ColorChoice`]: https://docs.rs/termcolor/1.4.1/termcolor/enum.ColorChoice.html
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    ValueEnum, // from `clap`
)]
enum CLI_Color_Choice {
    always,
    auto,
    never,
}

/// CLI enum for the output mode.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    ValueEnum, // from `clap`
)]
enum CLI_Output {
    /// element tree, one element per line
    tree,
    /// one JSON value per line
    json,
    /// one column per pair, `name<TAB>kind<TAB>value`
    columns,
    /// scanner tokens only, no parsing
    tokens,
}

/// `--help` _afterword_ message.
const CLI_HELP_AFTER: &str = "\
Each line is parsed independently. A key is a word followed by '=' or ':'.
Comma-separated values become a ROW. \"Mon DD HH:MM:SS\" becomes a DATE_TIME.

Output mode \"columns\" prints each pair as name, value kind, and value
separated by tabs. Column names are made unique and never an SQL keyword,
e.g. a second \"user\" becomes \"user_0\".";

/// clap command-line arguments build-time definitions.
//
// Note:
// * the `about` is taken from `Cargo.toml:[package]:description`.
#[derive(Parser, Debug)]
#[clap(
    about = env!("CARGO_PKG_DESCRIPTION"),
    author = env!("CARGO_PKG_AUTHORS"),
    name = "ldp",
    // write expanded information for the `--version` output
    version = concatcp!(
        "(Log Data Parser)\n",
        "Version: ",
        env!("CARGO_PKG_VERSION_MAJOR"), ".",
        env!("CARGO_PKG_VERSION_MINOR"), ".",
        env!("CARGO_PKG_VERSION_PATCH"), "\n",
        "MSRV: ", env!("CARGO_PKG_RUST_VERSION"), "\n",
        "License: ", env!("CARGO_PKG_LICENSE"), "\n",
    ),
    after_help = CLI_HELP_AFTER,
    verbatim_doc_comment,
)]
struct CLI_Args {
    /// Path(s) of log files.
    /// Pass "-" to read lines from STDIN.
    #[clap(
        required = true,
        verbatim_doc_comment,
    )]
    paths: Vec<String>,

    /// Output mode.
    #[clap(
        short = 'o',
        long = "output",
        verbatim_doc_comment,
        value_enum,
        default_value_t = CLI_Output::tree,
    )]
    output: CLI_Output,

    /// Choose to print using colors.
    #[clap(
        required = false,
        short = 'c',
        long = "color",
        verbatim_doc_comment,
        value_enum,
        default_value_t = CLI_Color_Choice::auto,
    )]
    color_choice: CLI_Color_Choice,

    /// Print a summary of lines parsed to stderr.
    /// Most useful for developers.
    #[clap(
        short,
        long,
        verbatim_doc_comment,
    )]
    summary: bool,
}

/// Process user-passed CLI argument strings into the values used by
/// `main`.
fn cli_process_args() -> (FPaths, CLI_Output, ColorChoice, bool) {
    let args = CLI_Args::parse();
    defo!("args {:?}", args);

    // map `CLI_Color_Choice` to `ColorChoice`
    let color_choice: ColorChoice = match args.color_choice {
        CLI_Color_Choice::always => ColorChoice::Always,
        CLI_Color_Choice::auto => ColorChoice::Auto,
        CLI_Color_Choice::never => ColorChoice::Never,
    };
    let paths: FPaths = args
        .paths
        .into_iter()
        .map(FPath::from)
        .collect();

    (paths, args.output, color_choice, args.summary)
}

// --------------------
// processing

/// Accumulated statistics for `--summary`.
#[derive(Debug, Default)]
struct Summary {
    paths_ok: usize,
    paths_err: usize,
    linereader: SummaryLineReader,
    dataparser: SummaryDataParser,
    pairs: u64,
}

/// Parse and print every line of `path`.
fn process_path<W: WriteColor>(
    path: &FPath,
    output: CLI_Output,
    printer: &mut PrinterElements<W>,
    summary: &mut Summary,
) -> anyhow::Result<()> {
    defn!("({:?}, {:?})", path, output);
    let mut reader = LineReader::new(path).with_context(|| format!("cannot open {:?}", path))?;
    loop {
        let line = match reader
            .read_line()
            .with_context(|| format!("cannot read {:?}", path))?
        {
            Some(line) => line,
            None => break,
        };
        if output == CLI_Output::tokens {
            printer
                .print_tokens(line)
                .context("cannot write output")?;
            continue;
        }
        let parsed = ParsedLine::parse(line);
        summary.dataparser += *parsed.summary();
        summary.pairs += parsed.pairs().len() as u64;
        let printed = match output {
            CLI_Output::tree => printer.print_tree(&parsed),
            CLI_Output::json => printer.print_json(&elements_to_json(&parsed)),
            CLI_Output::columns => printer.print_columns(&parsed),
            CLI_Output::tokens => Ok(()),
        };
        printed.context("cannot write output")?;
    }
    let linereader = reader.summary();
    summary.linereader.LineReader_lines += linereader.LineReader_lines;
    summary.linereader.LineReader_bytes += linereader.LineReader_bytes;
    summary.linereader.LineReader_lines_lossy += linereader.LineReader_lines_lossy;
    defx!("{:?}", linereader);

    Ok(())
}

/// Print the `--summary` to stderr.
fn print_summary(
    summary: &Summary,
    printed: &SummaryPrinted,
) {
    eprintln!();
    eprintln!("Paths processed: {}, failed: {}", summary.paths_ok, summary.paths_err);
    eprintln!(
        "Lines read: {}, bytes read: {}, lines not UTF-8: {}",
        summary.linereader.LineReader_lines,
        summary.linereader.LineReader_bytes,
        summary.linereader.LineReader_lines_lossy,
    );
    eprintln!("Parsed: {}, pairs {}", summary.dataparser, summary.pairs);
    eprintln!(
        "Printed: lines {}, elements {}, bytes {}",
        printed.lines, printed.elements, printed.bytes,
    );
}

/// Process the user-passed command-line arguments.
/// Parse every line of every path.
/// Determine a process return code.
pub fn main() -> ExitCode {
    if cfg!(debug_assertions) {
        stack_offset_set(Some(0));
    }
    defn!();

    let (paths, output, color_choice, cli_opt_summary) = cli_process_args();

    let mut printer = PrinterElements::stdout(color_choice);
    let mut summary = Summary::default();
    let mut stdin_seen = false;
    for path in paths.iter() {
        if path.as_str() == PATH_STDIN {
            if stdin_seen {
                e_wrn!("STDIN passed more than once; skipping");
                continue;
            }
            stdin_seen = true;
        }
        match process_path(path, output, &mut printer, &mut summary) {
            Ok(_) => summary.paths_ok += 1,
            Err(err) => {
                e_err!("{:#}", err);
                summary.paths_err += 1;
            }
        }
    }

    if cli_opt_summary {
        print_summary(&summary, &printer.summary());
    }

    let exitcode = if summary.paths_err == 0 { ExitCode::SUCCESS } else { ExitCode::FAILURE };
    defx!("exitcode {:?}", exitcode);

    exitcode
}
