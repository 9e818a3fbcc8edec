//! SAX Event Types
//!
//! Owned copies of the events a [`Handler`](super::Handler) receives, for
//! callers that want to keep events past the lifetime of the buffer.

/// A SAX parsing event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaxEvent {
    StartDocument,

    EndDocument,

    /// XML declaration
    XmlDeclaration {
        version: Vec<u8>,
        encoding: Option<Vec<u8>>,
        standalone: Option<Vec<u8>>,
    },

    /// Start of an element
    StartElement { name: Vec<u8> },

    /// One attribute of the element most recently started
    Attribute { name: Vec<u8>, value: Vec<u8> },

    /// End of the attribute list
    EndAttributes,

    /// Text content
    Text { data: Vec<u8> },

    /// Comment
    Comment { data: Vec<u8> },

    /// Processing instruction
    ProcessingInstruction { target: Vec<u8>, content: Vec<u8> },

    /// CDATA section
    CData { data: Vec<u8> },

    /// End of an element
    EndElement { name: Vec<u8> },
}

impl SaxEvent {
    pub fn start_element(name: impl AsRef<[u8]>) -> Self {
        SaxEvent::StartElement {
            name: name.as_ref().to_vec(),
        }
    }

    pub fn attribute(name: impl AsRef<[u8]>, value: impl AsRef<[u8]>) -> Self {
        SaxEvent::Attribute {
            name: name.as_ref().to_vec(),
            value: value.as_ref().to_vec(),
        }
    }

    pub fn text(data: impl AsRef<[u8]>) -> Self {
        SaxEvent::Text {
            data: data.as_ref().to_vec(),
        }
    }

    pub fn comment(data: impl AsRef<[u8]>) -> Self {
        SaxEvent::Comment {
            data: data.as_ref().to_vec(),
        }
    }

    pub fn processing_instruction(target: impl AsRef<[u8]>, content: impl AsRef<[u8]>) -> Self {
        SaxEvent::ProcessingInstruction {
            target: target.as_ref().to_vec(),
            content: content.as_ref().to_vec(),
        }
    }

    pub fn cdata(data: impl AsRef<[u8]>) -> Self {
        SaxEvent::CData {
            data: data.as_ref().to_vec(),
        }
    }

    pub fn end_element(name: impl AsRef<[u8]>) -> Self {
        SaxEvent::EndElement {
            name: name.as_ref().to_vec(),
        }
    }

    pub fn xml_declaration(
        version: impl AsRef<[u8]>,
        encoding: Option<&str>,
        standalone: Option<&str>,
    ) -> Self {
        SaxEvent::XmlDeclaration {
            version: version.as_ref().to_vec(),
            encoding: encoding.map(|e| e.as_bytes().to_vec()),
            standalone: standalone.map(|s| s.as_bytes().to_vec()),
        }
    }

    /// Check if this is a start element event
    #[inline]
    pub fn is_start_element(&self) -> bool {
        matches!(self, SaxEvent::StartElement { .. })
    }

    /// Check if this is an end element event
    #[inline]
    pub fn is_end_element(&self) -> bool {
        matches!(self, SaxEvent::EndElement { .. })
    }

    /// Check if this is a text event
    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self, SaxEvent::Text { .. })
    }

    /// Get the element name if this is a start or end element
    pub fn element_name(&self) -> Option<&[u8]> {
        match self {
            SaxEvent::StartElement { name } | SaxEvent::EndElement { name } => {
                Some(name.as_slice())
            }
            _ => None,
        }
    }
}
