//! Text extraction
//!
//! Four strategies, picked by entity translation and space normalization.
//! Strategies that rewrite the text keep a destination index that trails
//! the cursor: decoded references and collapsed whitespace are written
//! there, shifting the text left. Every strategy stops on the `<` that ends
//! the run; reaching the end of input first is an error.

use super::chars;
use super::entities::decode_reference;
use super::parser::Parser;
use crate::error::Result;
use crate::sax::Handler;

impl<'a> Parser<'a> {
    /// Extract one text run and report it
    ///
    /// Leaves the cursor on the closing `<`, which may have been overwritten
    /// by the text's NUL terminator.
    pub(crate) fn parse_text<H: Handler>(&mut self, handler: &mut H) -> Result<()> {
        let start = self.scanner.position();
        let normalize = self.options.normalize_space();

        let mut stop = match (self.options.entity_translation(), normalize) {
            (false, false) => self.scan_raw_text()?,
            (false, true) => self.scan_normalized_text(start)?,
            (true, false) => self.scan_translated_text(start)?,
            (true, true) => self.scan_translated_normalized_text(start)?,
        };

        if self.options.trim_space() {
            if normalize {
                // at most one collapsed space can trail
                if stop > start && self.scanner.byte_at(stop - 1) == b' ' {
                    stop -= 1;
                }
            } else {
                while stop > start && chars::is_space(self.scanner.byte_at(stop - 1)) {
                    stop -= 1;
                }
            }
        }

        self.scanner.terminate(stop);
        if stop > start {
            handler.text(self.scanner.slice(start..stop));
        }
        Ok(())
    }

    fn scan_raw_text(&mut self) -> Result<usize> {
        self.scanner.scan(chars::TEXT);
        self.require_more()?;
        Ok(self.scanner.position())
    }

    fn scan_normalized_text(&mut self, mut dest: usize) -> Result<usize> {
        loop {
            let run = self.scanner.position();
            let len = self.scanner.scan(chars::TEXT_NO_SPACE);
            self.require_more()?;
            self.scanner.compact(run..run + len, dest);
            dest += len;

            if self.scanner.peek() == b'<' {
                return Ok(dest);
            }
            dest = self.collapse_space(dest);
        }
    }

    fn scan_translated_text(&mut self, mut dest: usize) -> Result<usize> {
        loop {
            let run = self.scanner.position();
            let len = self.scanner.scan(chars::TEXT_NO_REF);
            self.require_more()?;
            self.scanner.compact(run..run + len, dest);
            dest += len;

            if self.scanner.peek() != b'&' {
                return Ok(dest);
            }
            dest = decode_reference(&mut self.scanner, dest)?;
        }
    }

    fn scan_translated_normalized_text(&mut self, mut dest: usize) -> Result<usize> {
        loop {
            let run = self.scanner.position();
            let len = self.scanner.scan(chars::TEXT_NO_SPACE_REF);
            self.require_more()?;
            self.scanner.compact(run..run + len, dest);
            dest += len;

            match self.scanner.peek() {
                b'<' => return Ok(dest),
                b'&' => dest = decode_reference(&mut self.scanner, dest)?,
                _ => dest = self.collapse_space(dest),
            }
        }
    }

    /// Skip a whitespace run at the cursor, writing one space at `dest`
    fn collapse_space(&mut self, dest: usize) -> usize {
        self.scanner.skip_space();
        self.scanner.write(dest, b" ");
        dest + 1
    }
}
