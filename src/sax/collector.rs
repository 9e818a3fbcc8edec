//! SAX Collector
//!
//! Implements Handler to record events as owned values.

use super::events::SaxEvent;
use super::handler::Handler;
use crate::core::parser::Parser;
use crate::error::Result;
use crate::options::ParseOptions;

/// Collector that gathers SAX events during parsing
pub struct EventCollector {
    events: Vec<SaxEvent>,
}

impl EventCollector {
    /// Create a new collector
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(256),
        }
    }

    /// Create with estimated capacity
    pub fn with_capacity(events: usize) -> Self {
        Self {
            events: Vec::with_capacity(events),
        }
    }

    /// Take the collected events
    pub fn take_events(&mut self) -> Vec<SaxEvent> {
        std::mem::take(&mut self.events)
    }

    /// Get the collected events as a slice
    pub fn events(&self) -> &[SaxEvent] {
        &self.events
    }

    /// Get number of collected events
    pub fn event_count(&self) -> usize {
        self.events.len()
    }
}

impl Default for EventCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl Handler for EventCollector {
    fn start_document(&mut self) {
        self.events.push(SaxEvent::StartDocument);
    }

    fn end_document(&mut self) {
        self.events.push(SaxEvent::EndDocument);
    }

    fn xml_declaration(
        &mut self,
        version: &[u8],
        encoding: Option<&[u8]>,
        standalone: Option<&[u8]>,
    ) {
        self.events.push(SaxEvent::XmlDeclaration {
            version: version.to_vec(),
            encoding: encoding.map(<[u8]>::to_vec),
            standalone: standalone.map(<[u8]>::to_vec),
        });
    }

    fn start_element(&mut self, name: &[u8]) {
        self.events.push(SaxEvent::start_element(name));
    }

    fn attribute(&mut self, name: &[u8], value: &[u8]) {
        self.events.push(SaxEvent::attribute(name, value));
    }

    fn end_attributes(&mut self) {
        self.events.push(SaxEvent::EndAttributes);
    }

    fn text(&mut self, data: &[u8]) {
        self.events.push(SaxEvent::text(data));
    }

    fn end_element(&mut self, name: &[u8]) {
        self.events.push(SaxEvent::end_element(name));
    }

    fn comment(&mut self, data: &[u8]) {
        self.events.push(SaxEvent::comment(data));
    }

    fn processing_instruction(&mut self, target: &[u8], content: &[u8]) {
        self.events
            .push(SaxEvent::processing_instruction(target, content));
    }

    fn cdata(&mut self, data: &[u8]) {
        self.events.push(SaxEvent::cdata(data));
    }
}

/// Parse `input` in place and return the recorded events
pub fn parse_events(input: &mut [u8], options: ParseOptions) -> Result<Vec<SaxEvent>> {
    let mut collector = EventCollector::new();
    Parser::new(input, options).parse(&mut collector)?;
    Ok(collector.take_events())
}
