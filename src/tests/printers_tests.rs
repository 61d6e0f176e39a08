// src/tests/printers_tests.rs

//! tests for `src/printer/printers.rs`

#![allow(non_snake_case)]

use crate::data::parsedline::ParsedLine;
use crate::data::token::{DataToken, DATA_TOKENS_ALL};
use crate::printer::elementjson::elements_to_json;
use crate::printer::printers::{color_token, ColorChoice, PrinterElements, COLOR_DEFAULT};

use ::termcolor::{Buffer, NoColor};

fn new_printer() -> PrinterElements<NoColor<Vec<u8>>> {
    PrinterElements::new(NoColor::new(Vec::new()))
}

fn printed(printer: PrinterElements<NoColor<Vec<u8>>>) -> String {
    String::from_utf8(printer.into_inner().into_inner()).unwrap()
}

#[test]
fn test_PrinterElements_stdout() {
    let printer = PrinterElements::stdout(ColorChoice::Never);
    assert_eq!(printer.summary().lines, 0);
}

#[test]
fn test_PrinterElements_print_tree() {
    let parsed = ParsedLine::parse("a=1\n");
    let mut printer = new_printer();
    printer.print_tree(&parsed).unwrap();
    let summary = printer.summary();
    assert_eq!(summary.lines, 1);
    assert_eq!(summary.elements, 5);
    let expect = "\
PAIR 0‥3 \"a=1\"
  KEY 0‥1 \"a\"
    STRING 0‥1 \"a\"
  ROW 2‥3 \"1\"
    NUMBER 2‥3 \"1\"
";
    assert_eq!(printed(printer), expect);
}

#[test]
fn test_PrinterElements_print_tree_noraw() {
    let parsed = ParsedLine::parse("a\tb\n");
    let mut printer = new_printer();
    printer.print_tree(&parsed).unwrap();
    let out = printed(printer);
    assert!(out.starts_with("ROW 0‥3 \"a␉b\"\n"), "{:?}", out);
}

#[test]
fn test_PrinterElements_print_tokens() {
    let mut printer = new_printer();
    printer.print_tokens("a=1").unwrap();
    let summary = printer.summary();
    assert_eq!(summary.lines, 1);
    assert_eq!(summary.elements, 4);
    assert_eq!(printed(printer), "STRING \"a\" SEPARATOR \"=\" NUMBER \"1\" LINE \"\"\n");
}

#[test]
fn test_PrinterElements_print_columns() {
    let parsed = ParsedLine::parse("a=1 b=x\n");
    let mut printer = new_printer();
    printer.print_columns(&parsed).unwrap();
    assert_eq!(printed(printer), "a\tNUMBER\t1\nb\tSTRING\tx\n");
}

#[test]
fn test_PrinterElements_print_json() {
    let parsed = ParsedLine::parse("a=1\n");
    let mut printer = new_printer();
    printer
        .print_json(&elements_to_json(&parsed))
        .unwrap();
    assert_eq!(printed(printer), "{\"a\":1}\n");
}

#[test]
fn test_PrinterElements_color_buffer() {
    let parsed = ParsedLine::parse("a=1\n");
    let mut printer = PrinterElements::new(Buffer::ansi());
    printer.print_tree(&parsed).unwrap();
    let out = printer.into_inner().into_inner();
    // ANSI escape sequences are present
    assert!(out.contains(&0x1B));
}

#[test]
fn test_color_token() {
    for token in DATA_TOKENS_ALL.iter() {
        let _ = color_token(*token);
    }
    assert_eq!(color_token(DataToken::Any), COLOR_DEFAULT);
    assert_ne!(color_token(DataToken::Pair), color_token(DataToken::Row));
}

#[test]
fn test_char_to_char_noraw() {
    use crate::debug::printers::char_to_char_noraw;

    assert_eq!(char_to_char_noraw('\0'), '␀');
    assert_eq!(char_to_char_noraw('\n'), '␊');
    assert_eq!(char_to_char_noraw('\u{1F}'), '␟');
    assert_eq!(char_to_char_noraw('\u{7F}'), '␡');
    assert_eq!(char_to_char_noraw(' '), ' ');
    assert_eq!(char_to_char_noraw('é'), 'é');
}
