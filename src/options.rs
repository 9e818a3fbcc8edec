//! Parser configuration
//!
//! Options are fixed for the duration of one parse call.

use bitflags::bitflags;

/// Default limit on the number of simultaneously open elements
pub const DEFAULT_MAX_DEPTH: usize = 1024;

bitflags! {
    /// Text and tag handling switches
    pub struct Flags: u32 {
        /// Strip leading and trailing whitespace from text runs
        const TRIM_SPACE = 0x0000_0001;
        /// Collapse every internal whitespace run to a single space
        const NORMALIZE_SPACE = 0x0000_0002;
        /// Decode `&...;` references in text and attribute values
        const ENTITY_TRANSLATION = 0x0000_0004;
        /// Scan end tag names and report them as written instead of
        /// requiring a byte-exact match with the start tag
        const CLOSING_TAG_VALIDATE = 0x0000_0008;
    }
}

impl Default for Flags {
    fn default() -> Self {
        Flags::TRIM_SPACE | Flags::ENTITY_TRANSLATION
    }
}

/// Options for a single parse call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    pub flags: Flags,
    /// Maximum element nesting depth before the parse fails
    pub max_depth: usize,
}

impl ParseOptions {
    pub fn new(flags: Flags) -> Self {
        ParseOptions {
            flags,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_flags(mut self, flags: Flags) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[inline]
    pub(crate) fn trim_space(&self) -> bool {
        self.flags.contains(Flags::TRIM_SPACE)
    }

    #[inline]
    pub(crate) fn normalize_space(&self) -> bool {
        self.flags.contains(Flags::NORMALIZE_SPACE)
    }

    #[inline]
    pub(crate) fn entity_translation(&self) -> bool {
        self.flags.contains(Flags::ENTITY_TRANSLATION)
    }

    #[inline]
    pub(crate) fn closing_tag_validate(&self) -> bool {
        self.flags.contains(Flags::CLOSING_TAG_VALIDATE)
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions::new(Flags::default())
    }
}

impl From<Flags> for ParseOptions {
    fn from(flags: Flags) -> Self {
        ParseOptions::new(flags)
    }
}
