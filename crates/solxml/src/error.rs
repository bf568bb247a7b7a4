//! Error types for solxml

use std::fmt;
use thiserror::Error;

/// Position in the input (reads) or in the output (writes)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pos {
    pub offset: usize,
    pub line: u32,
    pub col: u32,
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.offset, self.line, self.col)
    }
}

impl Pos {
    pub const fn new(offset: usize, line: u32, col: u32) -> Self {
        Self { offset, line, col }
    }

    /// Position that only knows a byte offset, used by the writer
    pub const fn at_offset(offset: usize) -> Self {
        Self {
            offset,
            line: 0,
            col: 0,
        }
    }
}

/// Broad family an [`ErrorKind`] belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    /// Malformed or oversized input
    Structural,
    /// A tree or value that cannot be written
    Write,
}

/// Error kind for detailed categorization
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    #[error("unexpected end of input")]
    UnexpectedEof,
    #[error("expected {expected}, found {found}")]
    Expected { expected: String, found: String },
    #[error("empty name")]
    EmptyName,
    #[error("mismatched closing tag: expected </{open}>, found </{close}>")]
    MismatchedTag { open: String, close: String },
    #[error("unterminated attribute value")]
    UnterminatedValue,
    #[error("trailing content after root element")]
    TrailingContent,
    #[error("invalid utf-8")]
    InvalidUtf8,
    #[error("max depth exceeded: {max}")]
    MaxDepthExceeded { max: u16 },
    #[error("max size exceeded: {max}")]
    MaxSizeExceeded { max: usize },
    #[error("element <{name}> has both a body and child elements")]
    BodyWithChildren { name: String },
    #[error("only arrays and objects can be written as a document root")]
    ScalarRoot,
    #[error("output sink failed")]
    Fmt,
}

impl ErrorKind {
    pub const fn category(&self) -> Category {
        match self {
            Self::BodyWithChildren { .. } | Self::ScalarRoot | Self::Fmt => Category::Write,
            _ => Category::Structural,
        }
    }
}

/// Main error type for solxml
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("error at {pos}: {message}")]
pub struct Error {
    kind: ErrorKind,
    pos: Pos,
    message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, pos: Pos) -> Self {
        let message = kind.to_string();
        Self { kind, pos, message }
    }

    pub fn with_message(kind: ErrorKind, pos: Pos, message: impl Into<String>) -> Self {
        Self {
            kind,
            pos,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn pos(&self) -> Pos {
        self.pos
    }

    /// Byte offset at which the error was detected
    pub fn offset(&self) -> usize {
        self.pos.offset
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Create error at specific position
    pub fn at(kind: ErrorKind, offset: usize, line: u32, col: u32) -> Self {
        Self::new(kind, Pos::new(offset, line, col))
    }
}

/// Result type alias for solxml
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pos_display() {
        let pos = Pos::new(42, 10, 5);
        assert_eq!(pos.to_string(), "42:10:5");
    }

    #[test]
    fn test_error_creation() {
        let err = Error::at(ErrorKind::UnexpectedEof, 7, 1, 8);
        assert_eq!(err.kind(), &ErrorKind::UnexpectedEof);
        assert_eq!(err.offset(), 7);
    }

    #[test]
    fn test_error_display() {
        let err = Error::at(
            ErrorKind::MismatchedTag {
                open: "a".to_string(),
                close: "b".to_string(),
            },
            5,
            1,
            6,
        );
        let display = err.to_string();
        assert!(display.contains("error at 5:1:6"));
        assert!(display.contains("expected </a>, found </b>"));
    }

    #[test]
    fn test_error_categories() {
        assert_eq!(ErrorKind::UnexpectedEof.category(), Category::Structural);
        assert_eq!(
            ErrorKind::MaxDepthExceeded { max: 4 }.category(),
            Category::Structural
        );
        assert_eq!(ErrorKind::ScalarRoot.category(), Category::Write);
        assert_eq!(
            ErrorKind::BodyWithChildren {
                name: "x".to_string()
            }
            .category(),
            Category::Write
        );
    }
}
