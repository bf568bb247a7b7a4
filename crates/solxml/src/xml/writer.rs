//! Element writer
//!
//! Output is written without any escaping: attribute values and bodies
//! are emitted exactly as stored.

use std::fmt;

use crate::error::{Error, ErrorKind, Pos, Result};
use crate::xml::model::{Attribute, Element};

/// Writes elements and attributes to any [`fmt::Write`] sink, counting the
/// bytes written so errors can report the output offset
#[derive(Debug)]
pub struct Writer<W> {
    out: W,
    written: usize,
}

impl Writer<String> {
    /// Writer into a fresh `String`
    pub const fn string() -> Self {
        Self::new(String::new())
    }
}

impl<W> Writer<W> {
    pub const fn new(out: W) -> Self {
        Self { out, written: 0 }
    }

    /// Bytes written so far
    pub const fn written(&self) -> usize {
        self.written
    }

    pub const fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub(crate) fn error(&self, kind: ErrorKind) -> Error {
        Error::new(kind, Pos::at_offset(self.written))
    }
}

impl<W: fmt::Write> Writer<W> {
    /// Write `name="value"`
    pub fn write_attribute(&mut self, attribute: &Attribute) -> Result<()> {
        self.push_str(&attribute.name)?;
        self.push_str("=\"")?;
        self.push_str(&attribute.value)?;
        self.push('"')
    }

    /// Write an element tree.
    ///
    /// An element with neither body nor children is written self-closing.
    /// An element with both fails with [`ErrorKind::BodyWithChildren`]
    /// before anything is written for it.
    pub fn write_element(&mut self, element: &Element) -> Result<()> {
        if !element.body.is_empty() && !element.children.is_empty() {
            return Err(self.error(ErrorKind::BodyWithChildren {
                name: element.name.clone(),
            }));
        }

        self.open_tag(&element.name, &element.attributes)?;
        if element.is_self_closing() {
            return self.end_empty_tag();
        }
        self.end_open_tag()?;

        if element.children.is_empty() {
            self.push_str(&element.body)?;
        } else {
            for child in &element.children {
                self.write_element(child)?;
            }
        }
        self.close_tag(&element.name)
    }

    /// `<name` followed by ` attr="value"` for each attribute
    pub(crate) fn open_tag<'b>(
        &mut self,
        name: &str,
        attributes: impl IntoIterator<Item = &'b Attribute>,
    ) -> Result<()> {
        self.push('<')?;
        self.push_str(name)?;
        for attribute in attributes {
            self.push(' ')?;
            self.write_attribute(attribute)?;
        }
        Ok(())
    }

    pub(crate) fn end_open_tag(&mut self) -> Result<()> {
        self.push('>')
    }

    pub(crate) fn end_empty_tag(&mut self) -> Result<()> {
        self.push_str("/>")
    }

    pub(crate) fn close_tag(&mut self, name: &str) -> Result<()> {
        self.push_str("</")?;
        self.push_str(name)?;
        self.push('>')
    }

    fn push_str(&mut self, s: &str) -> Result<()> {
        self.out
            .write_str(s)
            .map_err(|_| self.error(ErrorKind::Fmt))?;
        self.written += s.len();
        Ok(())
    }

    fn push(&mut self, c: char) -> Result<()> {
        self.out
            .write_char(c)
            .map_err(|_| self.error(ErrorKind::Fmt))?;
        self.written += c.len_utf8();
        Ok(())
    }
}
