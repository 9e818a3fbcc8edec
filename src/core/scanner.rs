//! Cursor over the mutable input buffer
//!
//! The scanner holds the exclusive borrow of the buffer for one parse call.
//! Input ends at the first NUL byte or at the end of the slice, whichever
//! comes first; every read past that point yields NUL. Terminator searches use
//! memchr (SIMD where available) on the first byte of the pattern.

use super::chars;
use memchr::memchr;
use std::ops::Range;

/// Scanner over a buffer that the parser rewrites in place
pub struct Scanner<'a> {
    input: &'a mut [u8],
    end: usize,
    pos: usize,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner for the given buffer
    #[inline]
    pub fn new(input: &'a mut [u8]) -> Self {
        let end = memchr(0, input).unwrap_or(input.len());
        Scanner { input, end, pos: 0 }
    }

    /// Get the current position
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Set the current position
    #[inline]
    pub fn set_position(&mut self, pos: usize) {
        self.pos = pos;
    }

    /// Offset of the end of input (first NUL or slice length)
    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.end
    }

    /// Byte at an absolute index, NUL past the end of input
    #[inline]
    pub fn byte_at(&self, index: usize) -> u8 {
        if index < self.end {
            self.input[index]
        } else {
            0
        }
    }

    /// Peek at current byte without advancing
    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos)
    }

    /// Peek at byte at offset from current position
    #[inline]
    pub fn peek_at(&self, offset: usize) -> u8 {
        self.byte_at(self.pos + offset)
    }

    /// Advance by n bytes
    #[inline]
    pub fn advance(&mut self, n: usize) {
        self.pos += n;
    }

    /// Check if input starts with a byte sequence at current position
    #[inline]
    pub fn starts_with(&self, needle: &[u8]) -> bool {
        self.starts_with_at(self.pos, needle)
    }

    #[inline]
    pub fn starts_with_at(&self, index: usize, needle: &[u8]) -> bool {
        index <= self.end && self.input[index..self.end].starts_with(needle)
    }

    /// Advance over the maximal run of bytes in `class`, returning its length
    #[inline]
    pub fn scan(&mut self, class: u16) -> usize {
        let start = self.pos;
        while chars::is(self.byte_at(self.pos), class) {
            self.pos += 1;
        }
        self.pos - start
    }

    #[inline]
    pub fn skip_space(&mut self) -> usize {
        self.scan(chars::SPACE)
    }

    /// Find the next occurrence of `terminator` at or after the cursor
    pub fn find(&self, terminator: &[u8]) -> Option<usize> {
        let first = *terminator.first()?;
        let mut from = self.pos;
        while from < self.end {
            let found = from + memchr(first, &self.input[from..self.end])?;
            if self.starts_with_at(found, terminator) {
                return Some(found);
            }
            from = found + 1;
        }
        None
    }

    /// Null-terminate a token in place
    #[inline]
    pub fn terminate(&mut self, index: usize) {
        if let Some(b) = self.input.get_mut(index) {
            *b = 0;
        }
    }

    /// Shift a run of bytes left so it starts at `dest`
    #[inline]
    pub fn compact(&mut self, run: Range<usize>, dest: usize) {
        if run.start != dest {
            self.input.copy_within(run, dest);
        }
    }

    /// Overwrite bytes starting at `dest`, which must lie behind the cursor
    #[inline]
    pub fn write(&mut self, dest: usize, bytes: &[u8]) {
        self.input[dest..dest + bytes.len()].copy_from_slice(bytes);
    }

    #[inline]
    pub fn slice(&self, range: Range<usize>) -> &[u8] {
        &self.input[range]
    }
}
