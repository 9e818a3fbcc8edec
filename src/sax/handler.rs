//! Handler trait
//!
//! Implement this trait to receive parse events. The parser calls these
//! methods synchronously, in document order, passing views into the buffer
//! being parsed. A view is only borrowed for the duration of the call: later
//! events may be produced by rewriting the same bytes.

pub trait Handler {
    /// Called once before anything else
    fn start_document(&mut self) {}

    /// Called once after the last top-level construct, only on success
    fn end_document(&mut self) {}

    /// Called for the XML declaration, if present
    ///
    /// # Arguments
    /// * `version` - Value of the mandatory `version` pseudo-attribute
    /// * `encoding` - Value of `encoding`, if given
    /// * `standalone` - Value of `standalone`, if given
    fn xml_declaration(
        &mut self,
        _version: &[u8],
        _encoding: Option<&[u8]>,
        _standalone: Option<&[u8]>,
    ) {
    }

    /// Called when a start tag is opened
    fn start_element(&mut self, name: &[u8]);

    /// Called for each attribute, between `start_element` and `end_attributes`
    ///
    /// The value has references decoded when entity translation is enabled.
    fn attribute(&mut self, name: &[u8], value: &[u8]);

    /// Called exactly once per element after its last attribute
    fn end_attributes(&mut self);

    /// Called for each non-empty text run between child constructs
    fn text(&mut self, data: &[u8]);

    /// Called when an element ends
    ///
    /// For self-closing tags this follows `end_attributes` immediately.
    fn end_element(&mut self, name: &[u8]);

    /// Called for comments (content excludes `<!--` and `-->`)
    fn comment(&mut self, _data: &[u8]) {}

    /// Called for processing instructions
    ///
    /// # Arguments
    /// * `target` - The PI target name
    /// * `content` - Everything after the whitespace that follows the target
    fn processing_instruction(&mut self, _target: &[u8], _content: &[u8]) {}

    /// Called for CDATA sections (content excludes `<![CDATA[` and `]]>`)
    fn cdata(&mut self, _data: &[u8]) {}
}
