//! Top-level driver
//!
//! Skips an optional byte-order mark, parses an optional XML declaration,
//! then loops over top-level comments, processing instructions and elements
//! until the end of input.

use super::chars;
use super::scanner::Scanner;
use crate::error::{ErrorKind, ParseError, Result};
use crate::options::ParseOptions;
use crate::sax::Handler;
use log::{debug, trace};

const BOM: &[u8] = b"\xEF\xBB\xBF";

/// In-place parser for one buffer
///
/// The parser borrows the buffer exclusively and rewrites it while parsing:
/// tokens are NUL-terminated where their delimiter was, and decoded or
/// collapsed text is shifted left over the bytes it replaces.
pub struct Parser<'a> {
    pub(crate) scanner: Scanner<'a>,
    pub(crate) options: ParseOptions,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a mut [u8], options: ParseOptions) -> Self {
        Parser {
            scanner: Scanner::new(input),
            options,
        }
    }

    /// Parse the whole buffer, delivering events to `handler` in document order
    ///
    /// The first error aborts the parse; events already delivered stay
    /// delivered.
    pub fn parse<H: Handler>(mut self, handler: &mut H) -> Result<()> {
        trace!(
            "parsing {} bytes with flags {:?}",
            self.scanner.end(),
            self.options.flags
        );
        let result = self.parse_document(handler);
        match &result {
            Ok(()) => trace!("document complete"),
            Err(err) => debug!("parse aborted: {}", err),
        }
        result
    }

    fn parse_document<H: Handler>(&mut self, handler: &mut H) -> Result<()> {
        handler.start_document();

        if self.scanner.starts_with(BOM) {
            self.scanner.advance(BOM.len());
        }
        if self.scanner.starts_with(b"<?xml") && chars::is_space(self.scanner.peek_at(5)) {
            self.scanner.advance(6);
            self.parse_declaration(handler)?;
        }

        loop {
            self.scanner.skip_space();
            if self.scanner.is_eof() {
                break;
            }
            if self.scanner.peek() != b'<' {
                return Err(self.error(ErrorKind::Expected("<")));
            }
            self.scanner.advance(1);

            match self.scanner.peek() {
                b'!' => {
                    self.scanner.advance(1);
                    if self.scanner.starts_with(b"--") {
                        self.scanner.advance(2);
                        self.parse_comment(handler)?;
                    } else if self.scanner.starts_with(b"DOCTYPE") {
                        self.scanner.advance(7);
                        self.parse_doctype(handler)?;
                    } else {
                        return Err(self.error(ErrorKind::UnexpectedCharacter));
                    }
                }
                b'?' => {
                    self.scanner.advance(1);
                    self.parse_processing_instruction(handler)?;
                }
                _ => self.parse_element(handler, 1)?,
            }
        }

        handler.end_document();
        Ok(())
    }

    /// Error of `kind` at the cursor
    #[inline]
    pub(crate) fn error(&self, kind: ErrorKind) -> ParseError {
        ParseError::new(kind, self.scanner.position())
    }

    /// Fail with `UnexpectedEnd` if the cursor has reached the end of input
    #[inline]
    pub(crate) fn require_more(&self) -> Result<()> {
        if self.scanner.is_eof() {
            return Err(self.error(ErrorKind::UnexpectedEnd));
        }
        Ok(())
    }

    /// Consume `byte` or fail
    pub(crate) fn expect(&mut self, byte: u8, what: &'static str) -> Result<()> {
        match self.scanner.peek() {
            b if b == byte => {
                self.scanner.advance(1);
                Ok(())
            }
            0 => Err(self.error(ErrorKind::UnexpectedEnd)),
            _ => Err(self.error(ErrorKind::Expected(what))),
        }
    }

    /// Consume an opening quote, returning it
    pub(crate) fn open_quote(&mut self) -> Result<u8> {
        match self.scanner.peek() {
            quote @ (b'"' | b'\'') => {
                self.scanner.advance(1);
                Ok(quote)
            }
            0 => Err(self.error(ErrorKind::UnexpectedEnd)),
            _ => Err(self.error(ErrorKind::Expected("\" or '"))),
        }
    }
}
