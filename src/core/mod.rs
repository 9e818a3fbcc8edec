//! Core XML parsing primitives
//!
//! This module contains the building blocks of the in-place parser:
//! - Chars: compile-time byte classification tables
//! - Scanner: cursor over the mutable buffer, memchr terminator search
//! - Entities: reference decoding with in-place compaction
//! - Markup: comments, PIs, CDATA, XML declaration, DOCTYPE
//! - Text: the four text extraction strategies
//! - Element: recursive start tag / content / end tag parsing
//! - Parser: top-level document driver

pub mod chars;
pub mod element;
pub mod entities;
pub mod markup;
pub mod parser;
pub mod scanner;
pub mod text;
