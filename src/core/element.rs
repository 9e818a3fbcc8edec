//! Element parsing
//!
//! Recursive descent over start tag, attribute list, content and end tag.
//! Recursion depth follows element nesting and is capped by
//! `ParseOptions::max_depth`.

use super::chars;
use super::entities::decode_reference;
use super::parser::Parser;
use crate::error::{ErrorKind, Result};
use crate::sax::Handler;
use std::ops::Range;

impl<'a> Parser<'a> {
    /// Cursor just past the `<` of a start tag
    pub(crate) fn parse_element<H: Handler>(
        &mut self,
        handler: &mut H,
        depth: usize,
    ) -> Result<()> {
        if depth > self.options.max_depth {
            return Err(self.error(ErrorKind::NestingTooDeep));
        }

        let name_start = self.scanner.position();
        if self.scanner.scan(chars::NAME) == 0 {
            self.require_more()?;
            return Err(self.error(ErrorKind::ExpectedElementType));
        }
        let name = name_start..self.scanner.position();

        let empty = match self.scanner.peek() {
            b'>' => {
                self.scanner.advance(1);
                self.start_element(handler, &name);
                false
            }
            b'/' => {
                self.scanner.advance(1);
                self.expect(b'>', ">")?;
                self.start_element(handler, &name);
                true
            }
            b if chars::is_space(b) => {
                self.scanner.advance(1);
                self.start_element(handler, &name);
                self.parse_attributes(handler)?
            }
            0 => return Err(self.error(ErrorKind::UnexpectedEnd)),
            _ => return Err(self.error(ErrorKind::UnexpectedCharacter)),
        };
        handler.end_attributes();

        if empty {
            handler.end_element(self.scanner.slice(name));
            return Ok(());
        }
        self.parse_content(handler, name, depth)
    }

    fn start_element<H: Handler>(&mut self, handler: &mut H, name: &Range<usize>) {
        self.scanner.terminate(name.end);
        handler.start_element(self.scanner.slice(name.clone()));
    }

    /// Attribute list up to and including `>` or `/>`
    ///
    /// Returns true for a self-closing tag.
    fn parse_attributes<H: Handler>(&mut self, handler: &mut H) -> Result<bool> {
        self.scanner.skip_space();

        while chars::is(self.scanner.peek(), chars::ATTRIBUTE_NAME) {
            let name_start = self.scanner.position();
            self.scanner.scan(chars::ATTRIBUTE_NAME);
            let name = name_start..self.scanner.position();

            self.scanner.skip_space();
            self.expect(b'=', "=")?;
            self.scanner.terminate(name.end);
            self.scanner.skip_space();

            let quote = self.open_quote()?;
            let value = self.parse_attribute_value(quote)?;
            handler.attribute(self.scanner.slice(name), self.scanner.slice(value));

            self.scanner.skip_space();
        }

        match self.scanner.peek() {
            b'>' => {
                self.scanner.advance(1);
                Ok(false)
            }
            b'/' => {
                self.scanner.advance(1);
                self.expect(b'>', ">")?;
                Ok(true)
            }
            0 => Err(self.error(ErrorKind::UnexpectedEnd)),
            _ => Err(self.error(ErrorKind::UnexpectedCharacter)),
        }
    }

    /// Value up to the closing `quote`, which is consumed
    fn parse_attribute_value(&mut self, quote: u8) -> Result<Range<usize>> {
        let (class, class_no_ref) = if quote == b'"' {
            (chars::ATTRIBUTE_VALUE_DQ, chars::ATTRIBUTE_VALUE_DQ_NO_REF)
        } else {
            (chars::ATTRIBUTE_VALUE_SQ, chars::ATTRIBUTE_VALUE_SQ_NO_REF)
        };
        let start = self.scanner.position();

        let end = if self.options.entity_translation() {
            let mut dest = start;
            loop {
                let run = self.scanner.position();
                let len = self.scanner.scan(class_no_ref);
                self.require_more()?;
                self.scanner.compact(run..run + len, dest);
                dest += len;
                if self.scanner.peek() != b'&' {
                    break dest;
                }
                dest = decode_reference(&mut self.scanner, dest)?;
            }
        } else {
            self.scanner.scan(class);
            self.require_more()?;
            self.scanner.position()
        };

        self.scanner.terminate(end);
        self.scanner.advance(1);
        Ok(start..end)
    }

    /// Text and child constructs up to and including the end tag
    fn parse_content<H: Handler>(
        &mut self,
        handler: &mut H,
        name: Range<usize>,
        depth: usize,
    ) -> Result<()> {
        loop {
            if self.options.trim_space() {
                self.scanner.skip_space();
            }
            if self.scanner.peek() != b'<' {
                self.parse_text(handler)?;
            }
            // past the '<' that ended the text; its byte may now be NUL
            self.scanner.advance(1);

            match self.scanner.peek() {
                b'!' => {
                    self.scanner.advance(1);
                    if self.scanner.starts_with(b"--") {
                        self.scanner.advance(2);
                        self.parse_comment(handler)?;
                    } else if self.scanner.starts_with(b"[CDATA[") {
                        self.scanner.advance(7);
                        self.parse_cdata(handler)?;
                    } else {
                        return Err(self.error(ErrorKind::UnexpectedCharacter));
                    }
                }
                b'/' => {
                    self.scanner.advance(1);
                    return self.parse_end_tag(handler, name);
                }
                b'?' => {
                    self.scanner.advance(1);
                    self.parse_processing_instruction(handler)?;
                }
                _ => self.parse_element(handler, depth + 1)?,
            }
        }
    }

    /// Cursor just past `</`
    ///
    /// With `CLOSING_TAG_VALIDATE` the name is scanned and reported as
    /// written; otherwise it must repeat the start tag name byte for byte.
    fn parse_end_tag<H: Handler>(&mut self, handler: &mut H, name: Range<usize>) -> Result<()> {
        let start = self.scanner.position();

        if self.options.closing_tag_validate() {
            self.scanner.scan(chars::NAME);
        } else {
            let len = name.len();
            let matches = start + len <= self.scanner.end()
                && self.scanner.slice(start..start + len) == self.scanner.slice(name);
            if !matches {
                return Err(self.error(ErrorKind::UnmatchedElementType));
            }
            self.scanner.advance(len);
        }
        let end = self.scanner.position();

        self.scanner.skip_space();
        self.expect(b'>', ">")?;
        self.scanner.terminate(end);
        handler.end_element(self.scanner.slice(start..end));
        Ok(())
    }
}
