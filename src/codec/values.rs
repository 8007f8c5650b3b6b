//! Lossless text encodings for scalar and array values.
//!
//! Booleans are `true`/`false`, integer and double arrays are separated by
//! whitespace, and doubles use the shortest representation that parses back
//! to the same bits (`NaN`, `Infinity` and `-Infinity` for non-finite values).

use super::{CodecError, Element};

/// Element holding text
pub fn text_element(name: &str, value: &str) -> Element {
    Element::new(name).with_text(value)
}

/// Element holding a boolean
pub fn bool_element(name: &str, value: bool) -> Element {
    Element::new(name).with_text(if value { "true" } else { "false" })
}

/// Element holding an integer
pub fn int_element(name: &str, value: i64) -> Element {
    Element::new(name).with_text(value.to_string())
}

/// Element holding whitespace-separated integers
pub fn int_array_element(name: &str, values: &[i32]) -> Element {
    let text = values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    Element::new(name).with_text(text)
}

/// Element holding whitespace-separated unsigned 64-bit integers
pub fn long_array_element(name: &str, values: &[u64]) -> Element {
    let text = values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    Element::new(name).with_text(text)
}

/// Element holding a double
pub fn double_element(name: &str, value: f64) -> Element {
    Element::new(name).with_text(format_double(value))
}

/// Element holding whitespace-separated doubles
pub fn double_array_element(name: &str, values: &[f64]) -> Element {
    let text = values
        .iter()
        .map(|v| format_double(*v))
        .collect::<Vec<_>>()
        .join(" ");
    Element::new(name).with_text(text)
}

/// Shortest round-trip text for a double
pub fn format_double(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "Infinity".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else {
        format!("{:?}", value)
    }
}

fn malformed(element: &str, value: &str, expected: &'static str) -> CodecError {
    CodecError::MalformedValue {
        element: element.to_string(),
        value: value.to_string(),
        expected,
    }
}

/// Parse a boolean (case-insensitive `true`/`false`)
pub fn parse_bool(element: &str, text: &str) -> Result<bool, CodecError> {
    let t = text.trim();
    if t.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if t.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(malformed(element, text, "boolean"))
    }
}

/// Parse a double, accepting the non-finite spellings written by [`format_double`]
pub fn parse_double(element: &str, text: &str) -> Result<f64, CodecError> {
    let t = text.trim();
    match t {
        "Infinity" | "+Infinity" => Ok(f64::INFINITY),
        "-Infinity" => Ok(f64::NEG_INFINITY),
        _ => t.parse::<f64>().map_err(|_| malformed(element, text, "double")),
    }
}

/// Parse a 32-bit integer
pub fn parse_int(element: &str, text: &str) -> Result<i32, CodecError> {
    text.trim()
        .parse::<i32>()
        .map_err(|_| malformed(element, text, "integer"))
}

/// Parse whitespace-separated 32-bit integers
pub fn parse_int_array(element: &str, text: &str) -> Result<Vec<i32>, CodecError> {
    text.split_whitespace()
        .map(|v| v.parse::<i32>().map_err(|_| malformed(element, text, "integer array")))
        .collect()
}

/// Parse whitespace-separated unsigned 64-bit integers
pub fn parse_long_array(element: &str, text: &str) -> Result<Vec<u64>, CodecError> {
    text.split_whitespace()
        .map(|v| v.parse::<u64>().map_err(|_| malformed(element, text, "unsigned integer array")))
        .collect()
}

/// Parse whitespace-separated doubles
pub fn parse_double_array(element: &str, text: &str) -> Result<Vec<f64>, CodecError> {
    text.split_whitespace()
        .map(|v| parse_double(element, v).map_err(|_| malformed(element, text, "double array")))
        .collect()
}

/// Text of a required child
pub fn get_text<'a>(parent: &'a Element, name: &str) -> Result<&'a str, CodecError> {
    Ok(parent.require_child(name)?.text())
}

/// Boolean held by a required child
pub fn get_bool(parent: &Element, name: &str) -> Result<bool, CodecError> {
    parse_bool(name, get_text(parent, name)?)
}

/// Integer held by a required child
pub fn get_int(parent: &Element, name: &str) -> Result<i32, CodecError> {
    parse_int(name, get_text(parent, name)?)
}

/// Integer array held by a required child
pub fn get_int_array(parent: &Element, name: &str) -> Result<Vec<i32>, CodecError> {
    parse_int_array(name, get_text(parent, name)?)
}

/// Unsigned 64-bit integer array held by a required child
pub fn get_long_array(parent: &Element, name: &str) -> Result<Vec<u64>, CodecError> {
    parse_long_array(name, get_text(parent, name)?)
}

/// Double held by a required child
pub fn get_double(parent: &Element, name: &str) -> Result<f64, CodecError> {
    parse_double(name, get_text(parent, name)?)
}

/// Double array held by a required child
pub fn get_double_array(parent: &Element, name: &str) -> Result<Vec<f64>, CodecError> {
    parse_double_array(name, get_text(parent, name)?)
}
