// src/printer/elementjson.rs

//! Convert the [`Element`s] of a [`ParsedLine`] into a [`serde_json::Value`].
//!
//! [`Element`s]: crate::data::element::Element
//! [`ParsedLine`]: crate::data::parsedline::ParsedLine
//! [`serde_json::Value`]: https://docs.rs/serde_json/1/serde_json/enum.Value.html

use crate::data::element::Element;
use crate::data::parsedline::ParsedLine;
use crate::data::token::DataToken;
use crate::parsers::datascanner::unquote;

use std::collections::HashSet;

use ::serde_json::{Map, Number, Value};
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

/// Convert the text of a `Number` token. A leading `+` is ignored.
///
/// Falls back to a JSON string when the number is not representable.
pub fn number_to_json(text: &str) -> Value {
    let digits = text.strip_prefix('+').unwrap_or(text);
    if let Ok(i) = digits.parse::<i64>() {
        return Value::from(i);
    }
    if let Ok(f) = digits.parse::<f64>() {
        if let Some(n) = Number::from_f64(f) {
            return Value::Number(n);
        }
    }

    Value::String(text.to_string())
}

/// Convert the text of a `String` token. `true`, `false`, and `null`
/// become JSON constants, quotes are removed.
pub fn string_to_json(text: &str) -> Value {
    match text {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        "null" => Value::Null,
        _ => Value::String(unquote(text).to_string()),
    }
}

/// Convert one `Element`.
pub fn element_to_json(
    parsed: &ParsedLine,
    element: &Element,
) -> Value {
    match element.token {
        DataToken::Number => number_to_json(parsed.element_str(element)),
        DataToken::String => string_to_json(parsed.element_str(element)),
        DataToken::Row => match element.children() {
            [only] => element_to_json(parsed, only),
            children => list_to_json(parsed, children, false),
        },
        DataToken::Pair => {
            let key = parsed.pair_key_str(element);
            let value = match element.pair_value() {
                Some(value) => element_to_json(parsed, value),
                None => Value::Null,
            };
            let mut map = Map::new();
            map.insert(key.to_string(), value);
            Value::Object(map)
        }
        _ => Value::String(parsed.element_str(element).to_string()),
    }
}

/// Convert a list of `Pair`s into an object, if every element is a `Pair`
/// with a unique non-empty key, otherwise into an array.
fn pairs_to_json(
    parsed: &ParsedLine,
    elements: &[Element],
) -> Value {
    let mut names: HashSet<&str> = HashSet::with_capacity(elements.len());
    let mut unique_names = elements.len() > 1;
    for element in elements.iter() {
        if element.token != DataToken::Pair {
            unique_names = false;
            break;
        }
        let key = parsed.pair_key_str(element);
        if key.is_empty() {
            continue;
        }
        if !names.insert(key) {
            unique_names = false;
            break;
        }
    }
    if !unique_names {
        return Value::Array(
            elements
                .iter()
                .map(|e| element_to_json(parsed, e))
                .collect(),
        );
    }

    let mut map = Map::new();
    for (index, element) in elements.iter().enumerate() {
        let key = parsed.pair_key_str(element);
        let name = if key.is_empty() { format!("col_{}", index) } else { key.to_string() };
        let value = match element.pair_value() {
            Some(value) => element_to_json(parsed, value),
            None => Value::Null,
        };
        map.insert(name, value);
    }

    Value::Object(map)
}

fn list_to_json(
    parsed: &ParsedLine,
    elements: &[Element],
    root: bool,
) -> Value {
    match elements.first() {
        None => Value::Null,
        Some(first) if first.token == DataToken::Pair => {
            if root && elements.len() == 1 {
                let key = parsed.pair_key_str(first);
                let name = if key.is_empty() { String::from("col_0") } else { key.to_string() };
                let value = match first.pair_value() {
                    Some(value) => element_to_json(parsed, value),
                    None => Value::Null,
                };
                let mut map = Map::new();
                map.insert(name, value);
                Value::Object(map)
            } else {
                pairs_to_json(parsed, elements)
            }
        }
        Some(_) => Value::Array(
            elements
                .iter()
                .map(|e| element_to_json(parsed, e))
                .collect(),
        ),
    }
}

/// Convert the top-level elements of `parsed`.
pub fn elements_to_json(parsed: &ParsedLine) -> Value {
    defn!("({:?})", parsed.line());
    let value = list_to_json(parsed, parsed.elements(), true);
    defx!("{}", value);

    value
}
