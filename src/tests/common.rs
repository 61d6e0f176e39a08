// src/tests/common.rs

//! Common helpers for tests.

use crate::data::element::Element;
use crate::data::parsedline::ParsedLine;

/// Compact rendering of an `Element` tree for comparisons.
///
/// A leaf is its text, a composite is `KIND(children…)`, e.g.
/// `PAIR(KEY(a) ROW(1))`.
pub fn shape_element(
    line: &str,
    element: &Element,
) -> String {
    if element.is_leaf() {
        return element.as_str(line).to_string();
    }
    let children: Vec<String> = element
        .children()
        .iter()
        .map(|child| shape_element(line, child))
        .collect();

    format!("{}({})", element.token, children.join(" "))
}

/// Compact rendering of all top-level elements, space-separated.
pub fn shape_elements(
    line: &str,
    elements: &[Element],
) -> String {
    elements
        .iter()
        .map(|element| shape_element(line, element))
        .collect::<Vec<String>>()
        .join(" ")
}

/// Parse `line` and return the compact rendering.
pub fn shape(line: &str) -> String {
    let parsed = ParsedLine::parse(line);

    shape_elements(line, parsed.elements())
}

/// Panic if any composite in `element` does not span exactly from its first
/// child to its last child, or if children overlap.
pub fn assert_span_coverage(element: &Element) {
    if element.is_leaf() {
        return;
    }
    let children = element.children();
    let first = &children[0];
    let last = &children[children.len() - 1];
    assert_eq!(element.begin(), first.begin(), "begin mismatch in {:?}", element);
    assert_eq!(element.end(), last.end(), "end mismatch in {:?}", element);
    for pair in children.windows(2) {
        assert!(pair[0].end() <= pair[1].begin(), "children overlap in {:?}", element);
    }
    for child in children.iter() {
        assert_span_coverage(child);
    }
}
