//! Parse errors
//!
//! Every failure aborts the current parse. The error carries the byte offset
//! in the original buffer where the violation was detected.

use thiserror::Error;

/// What went wrong
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    #[error("unexpected end")]
    UnexpectedEnd,

    /// A literal token (`=`, `>`, `?>`, `<`, a quote) was required
    #[error("expected {0}")]
    Expected(&'static str),

    #[error("expected element type")]
    ExpectedElementType,

    #[error("expected PI target")]
    ExpectedPiTarget,

    #[error("expected space")]
    ExpectedSpace,

    #[error("expected version")]
    ExpectedVersion,

    #[error("unexpected character")]
    UnexpectedCharacter,

    /// End tag does not repeat the start tag name byte for byte
    #[error("unmatched element type")]
    UnmatchedElementType,

    #[error("malformed reference")]
    MalformedReference,

    /// Numeric reference names a value that is not a character
    #[error("invalid character reference")]
    InvalidCharacterReference,

    /// DOCTYPE declarations are recognized but never supported
    #[error("not implemented")]
    NotImplemented,

    #[error("nesting too deep")]
    NestingTooDeep,
}

/// Error returned by a failed parse
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{kind} at offset {offset}")]
pub struct ParseError {
    kind: ErrorKind,
    offset: usize,
}

impl ParseError {
    pub fn new(kind: ErrorKind, offset: usize) -> Self {
        ParseError { kind, offset }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Byte offset into the buffer passed to the parser
    pub fn offset(&self) -> usize {
        self.offset
    }
}

pub type Result<T> = std::result::Result<T, ParseError>;
