// src/tests/dataparser_tests.rs

//! tests for `dataparser.rs`

#![allow(non_snake_case)]

use crate::data::element::{Element, Elements};
use crate::data::token::DataToken;
use crate::parsers::dataparser::DataParser;
use crate::parsers::datascanner::DataScanner;
use crate::parsers::patterns::{
    PATTERN_DATE_TIME,
    PATTERN_KEY,
    PATTERN_PAIR,
    PATTERN_SEPARATOR_BOUNDARY,
};
use crate::tests::common::{assert_span_coverage, shape, shape_elements};

use ::test_case::test_case;

fn leaf(
    token: DataToken,
    begin: usize,
    end: usize,
) -> Element {
    Element::new_leaf(token, begin, end)
}

fn row(children: Elements) -> Element {
    Element::new_composite(DataToken::Row, children)
}

/// Feed every token of `line` then flush.
fn parser_for(line: &str) -> DataParser {
    let mut parser = DataParser::new();
    for token in DataScanner::new(line) {
        parser.reduce(token);
    }
    parser.flush();

    parser
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// engine primitives
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[test]
fn test_reduce_pattern_no_match_leaves_stack() {
    let mut parser = DataParser::new();
    parser.shift(leaf(DataToken::String, 0, 3));
    assert!(parser
        .reduce_pattern(&PATTERN_DATE_TIME, false)
        .is_none());
    assert_eq!(parser.stack().len(), 1);
}

#[test]
fn test_reduce_pattern_returns_text_order() {
    //          0123456789012345
    // line = "Jan 15 12:00:00"
    let mut parser = DataParser::new();
    parser.shift(leaf(DataToken::String, 0, 3));
    parser.shift(leaf(DataToken::Number, 4, 6));
    parser.shift(leaf(DataToken::Time, 7, 15));
    let run = parser
        .reduce_pattern(&PATTERN_DATE_TIME, false)
        .unwrap();
    let tokens: Vec<DataToken> = run.iter().map(|e| e.token).collect();
    assert_eq!(tokens, vec![DataToken::String, DataToken::Number, DataToken::Time]);
    assert!(parser.stack().is_empty());
}

/// An element between otherwise matching elements prevents a match.
#[test]
fn test_reduce_pattern_prefix_only() {
    //          01234567890123456
    // line = "Jan 15 [12:00:00"
    let mut parser = DataParser::new();
    parser.shift(leaf(DataToken::String, 0, 3));
    parser.shift(leaf(DataToken::Number, 4, 6));
    parser.shift(leaf(DataToken::Invalid, 7, 8));
    parser.shift(leaf(DataToken::Time, 8, 16));
    assert!(parser
        .reduce_pattern(&PATTERN_DATE_TIME, false)
        .is_none());
    assert_eq!(parser.stack().len(), 4);
    assert!(!parser.reduce_date_time());
}

#[test]
fn test_reduce_pattern_empty_pattern() {
    let mut parser = DataParser::new();
    parser.shift(leaf(DataToken::String, 0, 1));
    assert!(parser.reduce_pattern(&[], true).is_none());
    assert_eq!(parser.stack().len(), 1);
}

//          0123
// line = "=a=b"
fn stack_two_values() -> DataParser {
    let mut parser = DataParser::new();
    parser.shift(leaf(DataToken::Separator, 0, 1));
    parser.shift(row(vec![leaf(DataToken::String, 1, 2)]));
    parser.shift(leaf(DataToken::Separator, 2, 3));
    parser.shift(row(vec![leaf(DataToken::String, 3, 4)]));

    parser
}

#[test]
fn test_reduce_pattern_once() {
    let mut parser = stack_two_values();
    let run = parser
        .reduce_pattern(&PATTERN_PAIR, false)
        .unwrap();
    assert_eq!(run[0].range(), 2..3);
    assert_eq!(run[1].range(), 3..4);
    assert_eq!(parser.stack().len(), 2);
}

/// Repeating keeps only the last matched run.
#[test]
fn test_reduce_pattern_repeating_keeps_last() {
    let mut parser = stack_two_values();
    let run = parser
        .reduce_pattern(&PATTERN_PAIR, true)
        .unwrap();
    assert_eq!(run.len(), 2);
    assert_eq!(run[0].range(), 0..1);
    assert_eq!(run[1].range(), 1..2);
    assert!(parser.stack().is_empty());
}

#[test]
fn test_reduce_up_to() {
    //          012
    // line = "=ab"
    let mut parser = DataParser::new();
    parser.shift(leaf(DataToken::Separator, 0, 1));
    parser.shift(leaf(DataToken::String, 1, 2));
    parser.shift(leaf(DataToken::String, 2, 3));
    let run = parser
        .reduce_up_to(&PATTERN_SEPARATOR_BOUNDARY)
        .unwrap();
    assert_eq!(run.len(), 2);
    assert_eq!(run[0].range(), 1..2);
    assert_eq!(run[1].range(), 2..3);
    // the terminator is not consumed
    assert_eq!(parser.stack().len(), 1);
    assert_eq!(parser.stack()[0].token, DataToken::Separator);
    assert!(parser
        .reduce_up_to(&PATTERN_SEPARATOR_BOUNDARY)
        .is_none());
}

#[test]
fn test_reduce_up_to_without_terminator_drains() {
    let mut parser = DataParser::new();
    parser.shift(leaf(DataToken::String, 0, 1));
    parser.shift(leaf(DataToken::Number, 2, 3));
    let run = parser
        .reduce_up_to(&PATTERN_SEPARATOR_BOUNDARY)
        .unwrap();
    assert_eq!(run.len(), 2);
    assert!(parser.stack().is_empty());
}

#[test]
fn test_reduce_any_of() {
    let mut parser = DataParser::new();
    parser.shift(leaf(DataToken::Time, 0, 5));
    assert!(parser.reduce_any_of(&PATTERN_KEY).is_none());
    parser.shift(leaf(DataToken::HexNumber, 6, 10));
    let key = parser.reduce_any_of(&PATTERN_KEY).unwrap();
    assert_eq!(key.token, DataToken::HexNumber);
    assert_eq!(parser.stack().len(), 1);
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// grammar reducers
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[test]
fn test_reduce_row() {
    //          0123
    // line = "a,b"
    let mut parser = DataParser::new();
    parser.shift(row(vec![leaf(DataToken::String, 0, 1)]));
    parser.shift(leaf(DataToken::Comma, 1, 2));
    parser.shift(leaf(DataToken::String, 2, 3));
    assert!(parser.reduce_row());
    assert_eq!(parser.stack().len(), 1);
    let r = &parser.stack()[0];
    assert_eq!(r.token, DataToken::Row);
    assert_eq!(r.children().len(), 2);
    assert_eq!(r.range(), 0..3);
    assert!(!parser.reduce_row());
}

#[test]
fn test_reduce_qual() {
    //          012
    // line = "a:b"
    let key_a = Element::new_composite(DataToken::Key, vec![leaf(DataToken::String, 0, 1)]);
    let key_b = Element::new_composite(DataToken::Key, vec![leaf(DataToken::String, 2, 3)]);
    let sep = leaf(DataToken::Separator, 1, 2);
    let lookahead = leaf(DataToken::Separator, 3, 4);

    let mut parser = DataParser::new();
    parser.shift(key_a.clone());
    parser.shift(sep.clone());
    parser.shift(key_b.clone());
    assert!(!parser.reduce_qual(&leaf(DataToken::White, 3, 4)));
    assert_eq!(parser.stack().len(), 3);
    assert!(parser.qual().is_empty());

    assert!(parser.reduce_qual(&lookahead));
    assert!(parser.stack().is_empty());
    assert_eq!(parser.qual().len(), 1);
    let qual = &parser.qual()[0];
    assert_eq!(qual.token, DataToken::Qual);
    assert_eq!(qual.range(), 0..3);
    assert_eq!(qual.children(), &[key_a, sep, key_b]);
}

#[test]
fn test_reduce_pair_without_key_splices_back() {
    //          01
    // line = "=a"
    let mut parser = DataParser::new();
    parser.shift(leaf(DataToken::Separator, 0, 1));
    parser.shift(leaf(DataToken::String, 1, 2));
    assert!(parser.reduce_pair());
    // the value became a Row but no Pair without a pending key
    assert_eq!(parser.stack().len(), 2);
    assert_eq!(parser.stack()[0].token, DataToken::Row);
    assert_eq!(parser.stack()[1].token, DataToken::Separator);
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// driver
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[test_case("A, B, C\n", "ROW(A B C)"; "comma folded row")]
#[test_case("key = value\n", "PAIR(KEY(key) ROW(value))"; "key value")]
#[test_case("a=1 b=2\n", "PAIR(KEY(a) ROW(1)) PAIR(KEY(b) ROW(2))"; "two pairs")]
#[test_case("msg: hello world\n", "PAIR(KEY(msg) ROW(hello world))"; "multi word value")]
#[test_case(
    "a=1, b=2, c=3\n",
    "PAIR(KEY(a) ROW(1)) PAIR(KEY(b) ROW(2)) PAIR(KEY(c) ROW(3))";
    "comma separated pairs"
)]
#[test_case("key: 1, 2, 3\n", "PAIR(KEY(key) ROW(1 2 3))"; "row value")]
#[test_case("a=1 ,2\n", "PAIR(KEY(a) ROW(1 2))"; "pair reopened by comma")]
#[test_case(
    "Jan 15 12:00:00 host sshd: accepted\n",
    "DATE_TIME(Jan 15 12:00:00) host PAIR(KEY(sshd) ROW(accepted))";
    "syslog"
)]
#[test_case("Jan 15 12:00:00\n", "ROW(DATE_TIME(Jan 15 12:00:00))"; "date time alone")]
#[test_case("a=\n", "KEY(a)"; "key without value")]
#[test_case("a= b=2", "KEY(a) PAIR(KEY(b) ROW(2))"; "dangling separator")]
#[test_case("hello world\n", "ROW(hello world)"; "words")]
#[test_case(", a\n", "ROW(a)"; "leading comma")]
#[test_case("a,,b\n", "ROW(a b)"; "double comma")]
#[test_case("=5\n", "ROW(5)"; "separator without key")]
#[test_case("[a=1]\n", "PAIR(KEY(a) ROW(1))"; "bracketed")]
#[test_case("addr=0x1F\n", "PAIR(KEY(addr) ROW(0x1F))"; "hex value")]
#[test_case("user=\"John Smith\" id=5\n", "PAIR(KEY(user) ROW(\"John Smith\")) PAIR(KEY(id) ROW(5))"; "quoted value")]
#[test_case("a=x,\n", "PAIR(KEY(a) ROW(x))"; "trailing comma")]
#[test_case("", ""; "empty")]
#[test_case("\n", ""; "newline")]
fn test_DataParser_shapes(
    line: &str,
    expect: &str,
) {
    assert_eq!(shape(line), expect, "line {:?}", line);
}

#[test]
fn test_DataParser_key_value_span() {
    let line = "key = value\n";
    let elements = parser_for(line).into_elements();
    assert_eq!(elements.len(), 1);
    assert_eq!(elements[0].token, DataToken::Pair);
    assert_eq!(elements[0].as_str(line), "key = value");
    let children = elements[0].children();
    // the separator is not a child but stays within the span
    assert_eq!(children.len(), 2);
    assert_eq!(children[0].token, DataToken::Key);
    assert_eq!(children[1].token, DataToken::Row);
    assert_eq!(&line[children[0].end()..children[1].begin()], " = ");
}

#[test]
fn test_DataParser_pair_reopened_by_comma_has_two_children() {
    let line = "a=1 , 2 b=3\n";
    let elements = parser_for(line).into_elements();
    assert_eq!(shape_elements(line, &elements), "PAIR(KEY(a) ROW(1 2)) PAIR(KEY(b) ROW(3))");
    for pair in elements.iter() {
        let kinds: Vec<DataToken> = pair
            .children()
            .iter()
            .map(|e| e.token)
            .collect();
        assert_eq!(kinds, vec![DataToken::Key, DataToken::Row]);
        assert_span_coverage(pair);
    }
}

#[test]
fn test_DataParser_date_time_children() {
    let line = "Jan 15 12:34:56 kernel: boot\n";
    let elements = parser_for(line).into_elements();
    let dt = &elements[0];
    assert_eq!(dt.token, DataToken::DateTime);
    let kinds: Vec<DataToken> = dt
        .children()
        .iter()
        .map(|e| e.token)
        .collect();
    assert_eq!(kinds, vec![DataToken::String, DataToken::Number, DataToken::Time]);
    assert_eq!(dt.as_str(line), "Jan 15 12:34:56");
}

#[test_case("a=1 b=2\n"; "pairs")]
#[test_case("a= b=2"; "dangling")]
#[test_case("A, B, C\n"; "row")]
#[test_case("Jan 15 12:00:00 host sshd[99]: x=1, y=2 done\n"; "syslog")]
#[test_case("k: v: w:\n"; "separators")]
fn test_DataParser_flush_idempotent(line: &str) {
    let mut parser = parser_for(line);
    let stack_before = parser.stack().clone();
    let reductions_before = parser.count_reductions();
    parser.flush();
    assert_eq!(parser.stack(), &stack_before);
    assert_eq!(parser.count_reductions(), reductions_before);
}

#[test_case("key = value\n"; "key value")]
#[test_case("a=1, b=2, c=3\n"; "pairs")]
#[test_case("msg: hello world, again\n"; "row")]
#[test_case("Jan 15 12:00:00 host sshd[99]: accepted password for bob from 10.0.0.1 port 22\n"; "syslog")]
#[test_case("time=12:00:01.5 level=info msg=\"it works\" items=1, 2, 3\n"; "mixed")]
fn test_DataParser_span_coverage(line: &str) {
    for element in parser_for(line)
        .into_elements()
        .iter()
    {
        assert_span_coverage(element);
    }
}

/// `Garbage` tokens anywhere do not change the result.
#[test_case("a=1, b=2\n"; "pairs")]
#[test_case("A, B, C\n"; "row")]
#[test_case("Jan 15 12:00:00 host: up\n"; "syslog")]
fn test_DataParser_garbage_invisible(line: &str) {
    let tokens: Vec<Element> = DataScanner::new(line).collect();
    let expect = {
        let mut parser = DataParser::new();
        for token in tokens.iter() {
            parser.reduce(token.clone());
        }
        parser.flush();
        parser.into_elements()
    };
    for at in 0..tokens.len() {
        let mut parser = DataParser::new();
        for (index, token) in tokens.iter().enumerate() {
            if index == at {
                parser.reduce(leaf(DataToken::Garbage, token.begin(), token.begin()));
            }
            parser.reduce(token.clone());
        }
        parser.flush();
        let summary = parser.summary();
        assert_eq!(summary.DataParser_garbage, 1);
        let result = parser.into_elements();
        assert_eq!(
            result,
            expect,
            "garbage at {} changed {:?} to {:?}",
            at,
            shape_elements(line, &expect),
            shape_elements(line, &result)
        );
    }
}

#[test]
fn test_DataParser_summary() {
    // tokens: a, =, 1, LINE
    let parser = parser_for("a=1");
    let summary = parser.summary();
    assert_eq!(summary.DataParser_tokens, 4);
    assert_eq!(summary.DataParser_lines, 1);
    assert_eq!(summary.DataParser_garbage, 0);
    assert!(summary.DataParser_reductions > 0);
}

#[test]
fn test_DataParser_qualifier_queue_empty_after_flush() {
    let parser = parser_for("a=1 b= c=3\n");
    assert!(parser.qual().is_empty(), "{:?}", parser.qual());
}
