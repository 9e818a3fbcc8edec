//! Comments, processing instructions, CDATA sections and the XML declaration
//!
//! Each construct is scanned up to its literal terminator without looking
//! at the content. The content is NUL-terminated where the terminator
//! starts and reported with a single event.

use super::chars;
use super::parser::Parser;
use crate::error::{ErrorKind, ParseError, Result};
use crate::sax::Handler;
use std::ops::Range;

impl<'a> Parser<'a> {
    /// Cursor just past `<!--`
    pub(crate) fn parse_comment<H: Handler>(&mut self, handler: &mut H) -> Result<()> {
        let content = self.scan_to_terminator(b"-->")?;
        handler.comment(self.scanner.slice(content));
        Ok(())
    }

    /// Cursor just past `<![CDATA[`
    pub(crate) fn parse_cdata<H: Handler>(&mut self, handler: &mut H) -> Result<()> {
        let content = self.scan_to_terminator(b"]]>")?;
        handler.cdata(self.scanner.slice(content));
        Ok(())
    }

    /// Cursor just past `<?`
    pub(crate) fn parse_processing_instruction<H: Handler>(
        &mut self,
        handler: &mut H,
    ) -> Result<()> {
        let target_start = self.scanner.position();
        if self.scanner.scan(chars::NAME) == 0 {
            self.require_more()?;
            return Err(self.error(ErrorKind::ExpectedPiTarget));
        }
        let target = target_start..self.scanner.position();

        if !self.scanner.starts_with(b"?>") && self.scanner.skip_space() == 0 {
            self.require_more()?;
            return Err(self.error(ErrorKind::ExpectedSpace));
        }
        let content = self.scan_to_terminator(b"?>")?;
        self.scanner.terminate(target.end);

        handler.processing_instruction(self.scanner.slice(target), self.scanner.slice(content));
        Ok(())
    }

    /// Cursor just past `<!DOCTYPE`
    pub(crate) fn parse_doctype<H: Handler>(&mut self, _handler: &mut H) -> Result<()> {
        Err(self.error(ErrorKind::NotImplemented))
    }

    /// Cursor just past `<?xml` and one whitespace byte
    ///
    /// `version` is mandatory; `encoding` and `standalone` are optional but
    /// must appear in that order.
    pub(crate) fn parse_declaration<H: Handler>(&mut self, handler: &mut H) -> Result<()> {
        self.scanner.skip_space();
        if !self.scanner.starts_with(b"version") {
            self.require_more()?;
            return Err(self.error(ErrorKind::ExpectedVersion));
        }
        self.scanner.advance(7);
        let version = self.parse_declaration_value()?;
        self.expect_declaration_separator()?;
        self.scanner.skip_space();

        let encoding = if self.scanner.starts_with(b"encoding") {
            self.scanner.advance(8);
            let value = self.parse_declaration_value()?;
            self.expect_declaration_separator()?;
            self.scanner.skip_space();
            Some(value)
        } else {
            None
        };

        let standalone = if self.scanner.starts_with(b"standalone") {
            self.scanner.advance(10);
            Some(self.parse_declaration_value()?)
        } else {
            None
        };
        self.scanner.skip_space();

        if !self.scanner.starts_with(b"?>") {
            self.require_more()?;
            return Err(self.error(ErrorKind::Expected("?>")));
        }
        self.scanner.advance(2);

        handler.xml_declaration(
            self.scanner.slice(version),
            encoding.map(|r| self.scanner.slice(r)),
            standalone.map(|r| self.scanner.slice(r)),
        );
        Ok(())
    }

    /// `= "value"` with optional whitespace around `=`
    fn parse_declaration_value(&mut self) -> Result<Range<usize>> {
        self.scanner.skip_space();
        self.expect(b'=', "=")?;
        self.scanner.skip_space();

        let quote = self.open_quote()?;
        let (class, closing) = if quote == b'"' {
            (chars::ATTRIBUTE_VALUE_DQ, "\"")
        } else {
            (chars::ATTRIBUTE_VALUE_SQ, "'")
        };
        let start = self.scanner.position();
        self.scanner.scan(class);
        let end = self.scanner.position();
        self.expect(quote, closing)?;
        self.scanner.terminate(end);
        Ok(start..end)
    }

    fn expect_declaration_separator(&self) -> Result<()> {
        match self.scanner.peek() {
            b'?' => Ok(()),
            b if chars::is_space(b) => Ok(()),
            0 => Err(self.error(ErrorKind::UnexpectedEnd)),
            _ => Err(self.error(ErrorKind::UnexpectedCharacter)),
        }
    }

    /// Find `terminator`, NUL-terminate the content before it and step past it
    fn scan_to_terminator(&mut self, terminator: &[u8]) -> Result<Range<usize>> {
        let start = self.scanner.position();
        let end = self
            .scanner
            .find(terminator)
            .ok_or_else(|| ParseError::new(ErrorKind::UnexpectedEnd, self.scanner.end()))?;
        self.scanner.terminate(end);
        self.scanner.set_position(end + terminator.len());
        Ok(start..end)
    }
}
