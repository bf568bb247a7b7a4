//! Element tree data model

use std::fmt;

/// Name/value pair attached to an element's start tag
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    /// Create an attribute, stringifying the value.
    ///
    /// Numbers, booleans and chars are stored in their `Display` form, so
    /// `Attribute::new("on", true)` holds the value `true`.
    pub fn new(name: impl Into<String>, value: impl fmt::Display) -> Self {
        Self {
            name: name.into(),
            value: value.to_string(),
        }
    }
}

/// A parsed or hand-built element.
///
/// `body` and `children` are not expected to be populated at the same
/// time; the writer rejects such elements.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Element {
    pub name: String,
    pub body: String,
    pub attributes: Vec<Attribute>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Add an attribute
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl fmt::Display) -> Self {
        self.attributes.push(Attribute::new(name, value));
        self
    }

    /// Add a child element
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Replace the body text
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// True when the element has no body, attributes or children
    pub fn is_empty(&self) -> bool {
        self.body.is_empty() && self.attributes.is_empty() && self.children.is_empty()
    }

    /// True when the element would be written as a self-closing tag
    pub fn is_self_closing(&self) -> bool {
        self.body.is_empty() && self.children.is_empty()
    }

    /// First attribute value with the given name
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| attr.value.as_str())
    }

    /// First child element with the given name
    pub fn child(&self, name: &str) -> Option<&Self> {
        self.children.iter().find(|child| child.name == name)
    }
}
