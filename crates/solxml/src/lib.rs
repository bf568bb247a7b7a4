//! solxml - simple tag/attribute markup bridged to a generic value tree
//!
//! # Quick Start
//!
//! ```
//! use solxml::{read_value, to_xml_string, Value};
//! # fn main() -> Result<(), solxml::Error> {
//! let value = read_value(r#"<point x="1" y="2"/>"#)?;
//! let x = value
//!     .as_object()
//!     .and_then(|obj| obj.get("x"))
//!     .and_then(Value::as_double);
//! assert_eq!(x, Some(1.0));
//!
//! let xml = to_xml_string(&value)?;
//! assert_eq!(xml, r#"<object x="1" y="2"/>"#);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

use tracing::{debug, instrument};

pub mod error;
pub use error::{Category, Error, ErrorKind, Pos, Result};

pub mod cursor;
pub use cursor::Cursor;

pub mod value;
pub use value::{Array, Object, Value, ValueKind};

pub mod xml;
pub use xml::{Attribute, Config, Element, Parser, Writer};

pub mod convert;
pub use convert::{
    classify, classify_with, element_to_value, element_to_value_with, parse_scalar, write_value,
    ConvertOptions, Shape, ARRAY_ELEMENT_TAG,
};

/// Parse a document from a string
pub fn from_str(s: &str) -> Result<Element> {
    from_bytes(s.as_bytes())
}

/// Parse a document from bytes
pub fn from_bytes(bytes: &[u8]) -> Result<Element> {
    from_bytes_with_config(bytes, Config::default())
}

/// Parse a document with custom limits
pub fn from_str_with_config(s: &str, config: Config) -> Result<Element> {
    from_bytes_with_config(s.as_bytes(), config)
}

#[instrument(level = "debug", skip_all, fields(len = bytes.len()))]
fn from_bytes_with_config(bytes: &[u8], config: Config) -> Result<Element> {
    let mut parser = Parser::with_config(bytes, config);
    let result = parser.parse();
    match &result {
        Ok(root) => debug!(root = %root.name, "parsed document"),
        Err(err) => debug!(%err, "failed to parse document"),
    }
    result
}

/// Parse a document and convert its root element to a value
pub fn read_value(s: &str) -> Result<Value> {
    read_value_with(s, &ConvertOptions::default())
}

pub fn read_value_with(s: &str, options: &ConvertOptions) -> Result<Value> {
    let root = from_str_with_config(s, options.reader)?;
    Ok(element_to_value_with(&root, options))
}

/// Serialize an element tree
pub fn to_string(element: &Element) -> Result<String> {
    let mut writer = Writer::string();
    writer.write_element(element)?;
    Ok(writer.into_inner())
}

/// Serialize an array or object, using `array` or `object` as the root tag
pub fn to_xml_string(value: &Value) -> Result<String> {
    let name = match value {
        Value::Array(_) => convert::DEFAULT_ARRAY_ROOT,
        _ => convert::DEFAULT_OBJECT_ROOT,
    };
    to_xml_string_named(name, value)
}

/// Serialize an array or object under the given root tag
#[instrument(level = "debug", skip(value), fields(kind = ?value.kind()))]
pub fn to_xml_string_named(name: &str, value: &Value) -> Result<String> {
    let mut writer = Writer::string();
    write_value(&mut writer, name, value)?;
    debug!(bytes = writer.written(), "wrote value");
    Ok(writer.into_inner())
}
