//! SAX (Simple API for XML) Module
//!
//! ## Architecture
//!
//! The parser pushes events into any [`Handler`] implementation:
//!
//! ```text
//! Parser ---> Handler (your type)
//!   |
//!   +-------> EventCollector ---> Vec<SaxEvent>
//! ```
//!
//! ## Event Order
//!
//! - `start_document`, then the optional `xml_declaration`
//! - per element: `start_element`, zero or more `attribute`,
//!   `end_attributes`, content events, `end_element`
//! - content events: `text`, `comment`, `processing_instruction`, `cdata`
//!   and nested elements, in document order
//! - `end_document` once the input is exhausted without error
//!
//! ## Memory
//!
//! Handler arguments are views into the buffer being parsed. Nothing is
//! copied unless the handler copies it, as [`EventCollector`] does.

pub mod collector;
pub mod events;
pub mod handler;

pub use collector::{parse_events, EventCollector};
pub use events::SaxEvent;
pub use handler::Handler;
