// src/tests/element_tests.rs

//! tests for `element.rs`

#![allow(non_snake_case)]

use crate::data::element::Element;
use crate::data::token::DataToken;

//   0123456789
// "key = 0x1F"
const LINE: &str = "key = 0x1F";

fn new_pair() -> Element {
    let key = Element::new_composite(DataToken::Key, vec![Element::new_leaf(DataToken::String, 0, 3)]);
    let value = Element::new_composite(DataToken::Row, vec![Element::new_leaf(DataToken::HexNumber, 6, 10)]);

    Element::new_composite(DataToken::Pair, vec![key, value])
}

#[test]
fn test_Element_new_leaf() {
    let e = Element::new_leaf(DataToken::String, 0, 3);
    assert!(e.is_leaf());
    assert_eq!(e.range(), 0..3);
    assert_eq!(e.len(), 3);
    assert_eq!(e.as_str(LINE), "key");
}

#[test]
fn test_Element_new_composite_span() {
    let pair = new_pair();
    assert!(!pair.is_leaf());
    assert_eq!(pair.begin(), 0);
    assert_eq!(pair.end(), 10);
    assert_eq!(pair.as_str(LINE), LINE);
    assert_eq!(pair.children().len(), 2);
}

#[test]
fn test_Element_push_child_updates_span() {
    //             0123456
    let line = "a, b, c";
    let mut row = Element::new_composite(DataToken::Row, vec![Element::new_leaf(DataToken::String, 0, 1)]);
    assert_eq!(row.as_str(line), "a");
    row.push_child(Element::new_leaf(DataToken::String, 3, 4));
    assert_eq!(row.as_str(line), "a, b");
    row.extend_children(vec![Element::new_leaf(DataToken::String, 6, 7)]);
    assert_eq!(row.as_str(line), line);
    assert_eq!(row.children().len(), 3);
}

#[test]
fn test_Element_pair_key_value() {
    let pair = new_pair();
    assert_eq!(pair.pair_key().map(|e| e.token), Some(DataToken::Key));
    assert_eq!(pair.pair_value().map(|e| e.token), Some(DataToken::Row));
    assert_eq!(pair.value_token(), DataToken::HexNumber);

    let leaf = Element::new_leaf(DataToken::String, 0, 3);
    assert!(leaf.pair_key().is_none());
    assert!(leaf.pair_value().is_none());
    assert_eq!(leaf.value_token(), DataToken::String);
}

#[test]
fn test_Element_as_str_out_of_range() {
    let e = Element::new_leaf(DataToken::String, 5, 50);
    assert_eq!(e.as_str(LINE), "");
}

#[test]
fn test_Element_walk_order() {
    let pair = new_pair();
    let mut tokens: Vec<DataToken> = Vec::new();
    pair.walk(&mut |e: &Element| tokens.push(e.token));
    assert_eq!(
        tokens,
        vec![
            DataToken::Pair,
            DataToken::Key,
            DataToken::String,
            DataToken::Row,
            DataToken::HexNumber,
        ]
    );
}
