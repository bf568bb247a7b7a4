//! Conversion between element trees and generic values
//!
//! Decoding classifies each element by shape (see [`Shape`]) and maps it
//! onto a [`Value`]. Encoding goes the other way without building an
//! element tree: arrays and objects are written straight to a [`Writer`].

use std::fmt;

use indexmap::IndexSet;
use tracing::trace;

use crate::error::{ErrorKind, Result};
use crate::value::{Array, Object, Value};
use crate::xml::model::{Attribute, Element};
use crate::xml::reader::Config;
use crate::xml::writer::Writer;

/// Tag name used for every entry when writing an array
pub const ARRAY_ELEMENT_TAG: &str = "solaire_array_element";

/// Root tag used by [`crate::to_xml_string`] for arrays
pub const DEFAULT_ARRAY_ROOT: &str = "array";

/// Root tag used by [`crate::to_xml_string`] for objects
pub const DEFAULT_OBJECT_ROOT: &str = "object";

const NO_ATTRIBUTES: &[Attribute] = &[];

/// How an element is interpreted as a value
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    /// No body, attributes or children
    Null,
    /// Body text only
    Scalar,
    /// Attributes and/or children with distinct names
    Object,
    /// Attributes and/or children where some name repeats
    Array,
    /// Body text next to attributes or children
    Ambiguous,
}

/// Options for reading values
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConvertOptions {
    pub reader: Config,
    /// Decode `solaire_array_element` children by their `type` attribute
    /// and treat an element holding only such children as an array
    pub recognize_array_elements: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            reader: Config::default(),
            recognize_array_elements: true,
        }
    }
}

impl ConvertOptions {
    pub const fn with_reader(mut self, reader: Config) -> Self {
        self.reader = reader;
        self
    }

    pub const fn with_array_elements(mut self, recognize: bool) -> Self {
        self.recognize_array_elements = recognize;
        self
    }
}

/// Classify an element with the default options
pub fn classify(element: &Element) -> Shape {
    classify_with(element, &ConvertOptions::default())
}

pub fn classify_with(element: &Element, options: &ConvertOptions) -> Shape {
    let has_body = !element.body.is_empty();
    let has_entries = !element.attributes.is_empty() || !element.children.is_empty();

    match (has_body, has_entries) {
        (false, false) => Shape::Null,
        (true, false) => Shape::Scalar,
        (true, true) => Shape::Ambiguous,
        (false, true) => {
            let synthetic = options.recognize_array_elements && holds_array_elements(element);
            if synthetic || has_repeated_name(element) {
                Shape::Array
            } else {
                Shape::Object
            }
        }
    }
}

/// Convert an element to a value with the default options
pub fn element_to_value(element: &Element) -> Value {
    element_to_value_with(element, &ConvertOptions::default())
}

pub fn element_to_value_with(element: &Element, options: &ConvertOptions) -> Value {
    let shape = classify_with(element, options);
    trace!(name = %element.name, ?shape, "classified element");

    match shape {
        Shape::Null | Shape::Ambiguous => Value::Null,
        Shape::Scalar => parse_scalar(&element.body),
        Shape::Object => {
            let mut object =
                Object::with_capacity(element.attributes.len() + element.children.len());
            for attribute in &element.attributes {
                object.insert(attribute.name.clone(), parse_scalar(&attribute.value));
            }
            for child in &element.children {
                object.insert(child.name.clone(), child_to_value(child, options));
            }
            Value::Object(object)
        }
        Shape::Array => element
            .attributes
            .iter()
            .map(|attribute| parse_scalar(&attribute.value))
            .chain(
                element
                    .children
                    .iter()
                    .map(|child| child_to_value(child, options)),
            )
            .collect::<Array>()
            .into(),
    }
}

/// Classify untyped text as a scalar value.
///
/// `""` and `null` are null, `true`/`false` are booleans, text made of an
/// optional `-` followed by digits, `.`, `e` and `E` is a double when it
/// parses as one, a single character is a char, anything else a string.
pub fn parse_scalar(text: &str) -> Value {
    match text {
        "" | "null" => return Value::Null,
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        _ => {}
    }

    if has_number_shape(text) {
        if let Ok(number) = text.parse::<f64>() {
            return Value::Double(number);
        }
    }

    match single_char(text) {
        Some(c) => Value::Char(c),
        None => Value::String(text.to_owned()),
    }
}

/// Write an array or object as a tag named `name`.
///
/// Scalars cannot be a document root and fail with
/// [`ErrorKind::ScalarRoot`].
pub fn write_value<W: fmt::Write>(writer: &mut Writer<W>, name: &str, value: &Value) -> Result<()> {
    if value.is_scalar() {
        return Err(writer.error(ErrorKind::ScalarRoot));
    }
    write_node(writer, name, value)
}

/// Write any value as a tag named `name`.
///
/// Arrays and objects recurse through here; scalars only reach this point
/// as array entries and become `<name type=".." value=".."/>`.
fn write_node<W: fmt::Write>(writer: &mut Writer<W>, name: &str, value: &Value) -> Result<()> {
    match value {
        Value::Array(array) => write_array(writer, name, array),
        Value::Object(object) => write_object(writer, name, object),
        scalar => {
            let mut attributes = vec![Attribute::new("type", type_name(scalar))];
            if let Some(text) = scalar_text(scalar).filter(|_| !scalar.is_null()) {
                attributes.push(Attribute {
                    name: "value".to_string(),
                    value: text,
                });
            }
            writer.open_tag(name, &attributes)?;
            writer.end_empty_tag()
        }
    }
}

fn write_array<W: fmt::Write>(writer: &mut Writer<W>, name: &str, array: &Array) -> Result<()> {
    writer.open_tag(name, NO_ATTRIBUTES)?;
    if array.is_empty() {
        return writer.end_empty_tag();
    }
    writer.end_open_tag()?;
    for item in array {
        write_node(writer, ARRAY_ELEMENT_TAG, item)?;
    }
    writer.close_tag(name)
}

fn write_object<W: fmt::Write>(writer: &mut Writer<W>, name: &str, object: &Object) -> Result<()> {
    let attributes: Vec<Attribute> = object
        .iter()
        .filter_map(|(key, value)| {
            scalar_text(value).map(|text| Attribute {
                name: key.clone(),
                value: text,
            })
        })
        .collect();
    writer.open_tag(name, &attributes)?;

    let mut nested = object.iter().filter(|(_, value)| !value.is_scalar()).peekable();
    if nested.peek().is_none() {
        return writer.end_empty_tag();
    }
    writer.end_open_tag()?;
    for (key, value) in nested {
        write_node(writer, key, value)?;
    }
    writer.close_tag(name)
}

/// Text form of a scalar, `None` for arrays and objects
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => Some("null".to_string()),
        Value::Char(c) => Some(c.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Unsigned(n) => Some(n.to_string()),
        Value::Signed(n) => Some(n.to_string()),
        Value::Double(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// `type` attribute of an array entry
fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Char(_) => "char",
        Value::Bool(_) => "bool",
        Value::Unsigned(_) | Value::Signed(_) | Value::Double(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn child_to_value(child: &Element, options: &ConvertOptions) -> Value {
    if options.recognize_array_elements && child.name == ARRAY_ELEMENT_TAG {
        if let Some(value) = typed_array_element(child) {
            return value;
        }
    }
    element_to_value_with(child, options)
}

/// Decode `<solaire_array_element type=".." value=".."/>`.
///
/// Returns `None` when the element carries anything besides a known
/// `type` and an optional `value`.
fn typed_array_element(element: &Element) -> Option<Value> {
    if !element.body.is_empty() || !element.children.is_empty() {
        return None;
    }

    let mut declared = None;
    let mut value = None;
    for attribute in &element.attributes {
        match attribute.name.as_str() {
            "type" if declared.is_none() => declared = Some(attribute.value.as_str()),
            "value" if value.is_none() => value = Some(attribute.value.as_str()),
            _ => return None,
        }
    }
    let text = value.unwrap_or_default();

    let decoded = match declared? {
        "null" => Value::Null,
        "string" => Value::String(text.to_owned()),
        "char" => single_char(text).map_or_else(|| parse_scalar(text), Value::Char),
        "bool" => match text {
            "true" => Value::Bool(true),
            "false" => Value::Bool(false),
            _ => parse_scalar(text),
        },
        "number" => text
            .parse::<f64>()
            .map_or_else(|_| parse_scalar(text), Value::Double),
        _ => return None,
    };
    Some(decoded)
}

fn holds_array_elements(element: &Element) -> bool {
    element.attributes.is_empty()
        && !element.children.is_empty()
        && element
            .children
            .iter()
            .all(|child| child.name == ARRAY_ELEMENT_TAG)
}

/// Attribute and child names share one pool
fn has_repeated_name(element: &Element) -> bool {
    let mut seen = IndexSet::new();
    element
        .attributes
        .iter()
        .map(|attribute| attribute.name.as_str())
        .chain(element.children.iter().map(|child| child.name.as_str()))
        .any(|name| !seen.insert(name))
}

fn has_number_shape(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    digits
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E'))
}

fn single_char(text: &str) -> Option<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
