//! Element reader
//!
//! Recursive descent over a byte [`Cursor`] with one byte of lookahead.
//! Every failure is reported as an [`Error`] carrying the position where
//! it was detected; no partial tree is ever returned.

use tracing::trace;

use crate::cursor::{is_whitespace, Cursor};
use crate::error::{Error, ErrorKind, Pos, Result};
use crate::xml::model::{Attribute, Element};

/// Default maximum nesting depth
pub const DEFAULT_MAX_DEPTH: u16 = 128;
/// Default maximum input size in bytes (10 MB)
pub const DEFAULT_MAX_SIZE: usize = 10 * 1024 * 1024;

/// Limits applied while reading
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Maximum element nesting depth (0 means unlimited)
    pub max_depth: u16,
    /// Maximum input size in bytes (0 means unlimited)
    pub max_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH, DEFAULT_MAX_SIZE)
    }
}

impl Config {
    /// Create a new config with unlimited depth and size
    pub const fn unlimited() -> Self {
        Self {
            max_depth: 0,
            max_size: 0,
        }
    }

    /// Create a new config with specific limits
    pub const fn new(max_depth: u16, max_size: usize) -> Self {
        Self {
            max_depth,
            max_size,
        }
    }
}

/// Element reader
#[derive(Debug)]
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    config: Config,
    depth: u16,
}

impl<'a> Parser<'a> {
    /// Create a new reader with default limits
    pub const fn new(input: &'a [u8]) -> Self {
        Self::with_config(input, Config::new(DEFAULT_MAX_DEPTH, DEFAULT_MAX_SIZE))
    }

    /// Create a new reader with custom limits
    pub const fn with_config(input: &'a [u8], config: Config) -> Self {
        Self {
            cursor: Cursor::new(input),
            config,
            depth: 0,
        }
    }

    pub const fn config(&self) -> Config {
        self.config
    }

    /// Current position in the input
    pub const fn position(&self) -> Pos {
        self.cursor.position()
    }

    /// Skip whitespace and report whether any input is left
    pub fn has_more(&mut self) -> bool {
        self.cursor.skip_whitespace();
        !self.cursor.is_eof()
    }

    /// Parse a document: exactly one element, optionally surrounded by
    /// whitespace
    pub fn parse(&mut self) -> Result<Element> {
        let root = self.parse_element()?;
        if self.has_more() {
            return Err(self.error_here(ErrorKind::TrailingContent));
        }
        Ok(root)
    }

    /// Parse one element and leave the cursor right after its end tag
    pub fn parse_element(&mut self) -> Result<Element> {
        self.check_size()?;
        self.read_element()
    }

    /// Parse one `name="value"` attribute
    pub fn parse_attribute(&mut self) -> Result<Attribute> {
        self.check_size()?;
        self.read_attribute()
    }

    fn read_element(&mut self) -> Result<Element> {
        self.cursor.skip_whitespace();
        self.enter()?;
        let element = self.read_element_inner();
        self.depth = self.depth.saturating_sub(1);
        element
    }

    fn read_element_inner(&mut self) -> Result<Element> {
        self.expect_byte(b'<')?;
        let name = self.read_name(|b| is_whitespace(b) || b == b'/' || b == b'>')?;
        let mut element = Element::new(name);

        loop {
            self.cursor.skip_whitespace();
            match self.cursor.current() {
                Some(b'/') => {
                    self.cursor.advance();
                    self.expect_byte(b'>')?;
                    trace!(name = %element.name, "read self-closing element");
                    return Ok(element);
                }
                Some(b'>') => {
                    self.cursor.advance();
                    break;
                }
                Some(_) => {
                    let attribute = self.read_attribute()?;
                    element.attributes.push(attribute);
                }
                None => return Err(self.error_here(ErrorKind::UnexpectedEof)),
            }
        }

        self.read_content(&mut element)?;
        self.read_end_tag(&element.name)?;
        trace!(
            name = %element.name,
            children = element.children.len(),
            "read element"
        );
        Ok(element)
    }

    /// Body text and child elements, up to (not including) the `</`
    fn read_content(&mut self, element: &mut Element) -> Result<()> {
        loop {
            match self.cursor.current() {
                None => return Err(self.error_here(ErrorKind::UnexpectedEof)),
                Some(b'<') if self.cursor.peek(1) == Some(b'/') => return Ok(()),
                Some(b'<') => {
                    let child = self.read_element()?;
                    element.children.push(child);
                }
                Some(_) => {
                    let start = self.cursor.pos();
                    self.cursor.advance_while(|b| b != b'<');
                    let raw = self.cursor.slice_from(start);
                    // whitespace-only runs are layout between tags
                    if !raw.iter().copied().all(is_whitespace) {
                        element.body.push_str(self.utf8(raw)?);
                    }
                }
            }
        }
    }

    fn read_end_tag(&mut self, open: &str) -> Result<()> {
        self.expect_byte(b'<')?;
        self.expect_byte(b'/')?;
        let close = self.read_name(|b| is_whitespace(b) || b == b'>')?;
        if close != open {
            return Err(self.error_here(ErrorKind::MismatchedTag {
                open: open.to_string(),
                close,
            }));
        }
        self.cursor.skip_whitespace();
        self.expect_byte(b'>')
    }

    fn read_attribute(&mut self) -> Result<Attribute> {
        self.cursor.skip_whitespace();
        let start = self.cursor.pos();
        self.cursor
            .advance_while(|b| b != b'=' && !ends_attribute_name(b));
        match self.cursor.current() {
            Some(b'=') => {}
            Some(found) => return Err(self.expected(b'=', found)),
            None => return Err(self.error_here(ErrorKind::UnexpectedEof)),
        }
        let raw = self.cursor.slice_from(start);
        if raw.is_empty() {
            return Err(self.error_here(ErrorKind::EmptyName));
        }
        let name = self.utf8(raw)?.to_owned();
        self.cursor.advance();

        self.expect_byte(b'"')?;
        let start = self.cursor.pos();
        self.cursor.advance_while(|b| b != b'"');
        if self.cursor.is_eof() {
            return Err(self.error_here(ErrorKind::UnterminatedValue));
        }
        let value = self.utf8(self.cursor.slice_from(start))?.to_owned();
        self.cursor.advance();

        Ok(Attribute { name, value })
    }

    fn read_name(&mut self, is_end: impl Fn(u8) -> bool) -> Result<String> {
        let start = self.cursor.pos();
        self.cursor.advance_while(|b| !is_end(b));
        if self.cursor.is_eof() {
            return Err(self.error_here(ErrorKind::UnexpectedEof));
        }
        let raw = self.cursor.slice_from(start);
        if raw.is_empty() {
            return Err(self.error_here(ErrorKind::EmptyName));
        }
        Ok(self.utf8(raw)?.to_owned())
    }

    fn enter(&mut self) -> Result<()> {
        let max = self.config.max_depth;
        if max > 0 && self.depth >= max {
            return Err(self.error_here(ErrorKind::MaxDepthExceeded { max }));
        }
        self.depth = self.depth.saturating_add(1);
        Ok(())
    }

    fn check_size(&self) -> Result<()> {
        let max = self.config.max_size;
        if max > 0 && self.cursor.len() > max {
            return Err(Error::new(
                ErrorKind::MaxSizeExceeded { max },
                Pos::at_offset(max),
            ));
        }
        Ok(())
    }

    fn expect_byte(&mut self, expected: u8) -> Result<()> {
        if self.cursor.consume(expected) {
            return Ok(());
        }
        match self.cursor.current() {
            Some(found) => Err(self.expected(expected, found)),
            None => Err(self.error_here(ErrorKind::UnexpectedEof)),
        }
    }

    fn utf8(&self, raw: &'a [u8]) -> Result<&'a str> {
        std::str::from_utf8(raw).map_err(|_| self.error_here(ErrorKind::InvalidUtf8))
    }

    fn expected(&self, expected: u8, found: u8) -> Error {
        self.error_here(ErrorKind::Expected {
            expected: describe_byte(expected),
            found: describe_byte(found),
        })
    }

    fn error_here(&self, kind: ErrorKind) -> Error {
        Error::new(kind, self.cursor.position())
    }
}

const fn ends_attribute_name(b: u8) -> bool {
    is_whitespace(b) || matches!(b, b'/' | b'>' | b'<' | b'"')
}

fn describe_byte(b: u8) -> String {
    if b.is_ascii_graphic() || b == b' ' {
        format!("'{}'", char::from(b))
    } else {
        format!("byte 0x{b:02x}")
    }
}
