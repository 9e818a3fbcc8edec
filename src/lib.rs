//! insitu-xml - destructive in-place SAX parsing
//!
//! The parser walks a single mutable byte buffer and reports structure to a
//! [`Handler`] as it goes, without building a tree. Tokens are handed out as
//! views into the buffer, which is rewritten along the way:
//!
//! - each token is NUL-terminated where its delimiter was
//! - entity references are decoded over the bytes they occupied
//! - whitespace runs are collapsed in place when normalization is on
//!
//! Input ends at the first NUL byte or at the end of the slice.
//!
//! ```
//! use insitu_xml::{parse, Handler};
//!
//! #[derive(Default)]
//! struct Names(Vec<String>);
//!
//! impl Handler for Names {
//!     fn start_element(&mut self, name: &[u8]) {
//!         self.0.push(String::from_utf8_lossy(name).into_owned());
//!     }
//!     fn attribute(&mut self, _name: &[u8], _value: &[u8]) {}
//!     fn end_attributes(&mut self) {}
//!     fn text(&mut self, _data: &[u8]) {}
//!     fn end_element(&mut self, _name: &[u8]) {}
//! }
//!
//! let mut buf = b"<a><b/><c>text</c></a>".to_vec();
//! let mut names = Names::default();
//! parse(&mut buf, &mut names).unwrap();
//! assert_eq!(names.0, ["a", "b", "c"]);
//! ```

mod core;
mod error;
mod options;
pub mod sax;

pub use crate::core::parser::Parser;
pub use error::{ErrorKind, ParseError, Result};
pub use options::{Flags, ParseOptions, DEFAULT_MAX_DEPTH};
pub use sax::{parse_events, EventCollector, Handler, SaxEvent};

/// Parse `input` in place with the default options
/// (`TRIM_SPACE | ENTITY_TRANSLATION`)
pub fn parse<H: Handler>(input: &mut [u8], handler: &mut H) -> Result<()> {
    parse_with(input, ParseOptions::default(), handler)
}

/// Parse `input` in place
pub fn parse_with<H: Handler>(
    input: &mut [u8],
    options: ParseOptions,
    handler: &mut H,
) -> Result<()> {
    Parser::new(input, options).parse(handler)
}
