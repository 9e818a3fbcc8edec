//! End-to-end behaviour of the in-place parser through the public API

use insitu_xml::{
    parse, parse_events, parse_with, ErrorKind, Flags, Handler, ParseOptions, SaxEvent,
};
use proptest::prelude::*;

fn events(input: &str, flags: Flags) -> Vec<SaxEvent> {
    let mut buf = input.as_bytes().to_vec();
    parse_events(&mut buf, ParseOptions::new(flags)).unwrap()
}

fn texts(input: &str, flags: Flags) -> Vec<Vec<u8>> {
    events(input, flags)
        .into_iter()
        .filter_map(|e| match e {
            SaxEvent::Text { data } => Some(data),
            _ => None,
        })
        .collect()
}

#[test]
fn minimal_document() {
    assert_eq!(
        events("<a/>", Flags::default()),
        vec![
            SaxEvent::StartDocument,
            SaxEvent::start_element("a"),
            SaxEvent::EndAttributes,
            SaxEvent::end_element("a"),
            SaxEvent::EndDocument,
        ]
    );
}

#[test]
fn attribute_and_nested_element() {
    let events = events("<a x=\"1\"><b>hi</b></a>", Flags::default());
    let start_a = events.iter().position(|e| *e == SaxEvent::start_element("a")).unwrap();
    let attr = events.iter().position(|e| *e == SaxEvent::attribute("x", "1")).unwrap();
    let end_attrs = events.iter().position(|e| *e == SaxEvent::EndAttributes).unwrap();
    assert!(start_a < attr && attr < end_attrs);

    let b = &events[end_attrs + 1..end_attrs + 5];
    assert_eq!(
        b,
        &[
            SaxEvent::start_element("b"),
            SaxEvent::EndAttributes,
            SaxEvent::text("hi"),
            SaxEvent::end_element("b"),
        ]
    );
}

#[test]
fn predefined_references() {
    assert_eq!(texts("<t>&lt;&amp;&gt;</t>", Flags::ENTITY_TRANSLATION), vec![b"<&>".to_vec()]);
}

#[test]
fn numeric_references() {
    assert_eq!(texts("<t>&#65;</t>", Flags::default()), vec![b"A".to_vec()]);
    assert_eq!(texts("<t>&#x41;</t>", Flags::default()), vec![b"A".to_vec()]);
}

#[test]
fn numeric_reference_above_latin1_is_utf8() {
    assert_eq!(
        texts("<t>caf&#xE9; &#8364;</t>", Flags::default()),
        vec!["café €".as_bytes().to_vec()]
    );
}

#[test]
fn trim_space_only() {
    assert_eq!(texts("<t>  hi  </t>", Flags::TRIM_SPACE), vec![b"hi".to_vec()]);
}

#[test]
fn mismatched_end_tag() {
    let mut buf = b"<a></b>".to_vec();
    let err = parse_events(&mut buf, ParseOptions::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnmatchedElementType);
    assert_eq!(err.offset(), 5);
    assert_eq!(err.to_string(), "unmatched element type at offset 5");
}

#[test]
fn unterminated_comment() {
    let mut buf = b"<!--abc".to_vec();
    let err = parse_events(&mut buf, ParseOptions::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnexpectedEnd);
}

#[test]
fn self_closing_has_no_text() {
    let events = events("<r> <a/> </r>", Flags::default());
    assert!(!events.iter().any(SaxEvent::is_text));
    let end_attrs = events.iter().rposition(|e| *e == SaxEvent::EndAttributes).unwrap();
    assert_eq!(events[end_attrs + 1], SaxEvent::end_element("a"));
    assert_eq!(events.iter().filter(|e| **e == SaxEvent::end_element("a")).count(), 1);
}

#[test]
fn mixed_document() {
    let input = "\u{FEFF}<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
                 <!-- catalogue -->\n\
                 <catalog lang='en'>\n  \
                   <book id=\"b1\" title=\"Tom &amp; Jerry\">\n    \
                     Some   &lt;intro&gt;\n    \
                     <![CDATA[raw <b>]]>\n    \
                     <?render fast?>\n  \
                   </book>\n\
                 </catalog>\n";
    let events = events(input, Flags::default());
    assert_eq!(
        events,
        vec![
            SaxEvent::StartDocument,
            SaxEvent::xml_declaration("1.0", Some("UTF-8"), None),
            SaxEvent::comment(" catalogue "),
            SaxEvent::start_element("catalog"),
            SaxEvent::attribute("lang", "en"),
            SaxEvent::EndAttributes,
            SaxEvent::start_element("book"),
            SaxEvent::attribute("id", "b1"),
            SaxEvent::attribute("title", "Tom & Jerry"),
            SaxEvent::EndAttributes,
            SaxEvent::text("Some   <intro>"),
            SaxEvent::cdata("raw <b>"),
            SaxEvent::processing_instruction("render", "fast"),
            SaxEvent::end_element("book"),
            SaxEvent::end_element("catalog"),
            SaxEvent::EndDocument,
        ]
    );
}

#[test]
fn standalone_without_encoding() {
    let events = events("<?xml version='1.0' standalone='yes'?><a/>", Flags::default());
    assert_eq!(events[1], SaxEvent::xml_declaration("1.0", None, Some("yes")));
}

#[test]
fn tokens_are_nul_terminated_in_place() {
    let mut buf = b"<a k='v'>x &amp; y</a>".to_vec();
    parse_events(&mut buf, ParseOptions::default()).unwrap();
    assert_eq!(&buf[..9], b"<a\0k\0'v\0>");
    assert_eq!(&buf[9..15], b"x & y\0");
}

/// Handler that borrows the buffer's views only long enough to measure them
#[derive(Default)]
struct Depth {
    current: usize,
    max: usize,
}

impl Handler for Depth {
    fn start_element(&mut self, _name: &[u8]) {
        self.current += 1;
        self.max = self.max.max(self.current);
    }
    fn attribute(&mut self, _name: &[u8], _value: &[u8]) {}
    fn end_attributes(&mut self) {}
    fn text(&mut self, _data: &[u8]) {}
    fn end_element(&mut self, _name: &[u8]) {
        self.current -= 1;
    }
}

#[test]
fn custom_handler_and_depth_limit() {
    let deep = "<e>".repeat(40) + &"</e>".repeat(40);

    let mut depth = Depth::default();
    parse(&mut deep.clone().into_bytes(), &mut depth).unwrap();
    assert_eq!((depth.current, depth.max), (0, 40));

    let mut depth = Depth::default();
    let options = ParseOptions::default().with_max_depth(39);
    let err = parse_with(&mut deep.into_bytes(), options, &mut depth).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NestingTooDeep);
    assert_eq!(err.offset(), 39 * 3 + 1);
}

proptest! {
    #[test]
    fn normalize_is_idempotent_on_single_spaced_text(text in "[a-z]{1,8}( [a-z]{1,8}){0,6}") {
        for flags in [
            Flags::NORMALIZE_SPACE,
            Flags::NORMALIZE_SPACE | Flags::TRIM_SPACE,
            Flags::NORMALIZE_SPACE | Flags::ENTITY_TRANSLATION,
        ] {
            let got = texts(&format!("<t>{text}</t>"), flags);
            prop_assert_eq!(got, vec![text.as_bytes().to_vec()]);
        }
    }

    #[test]
    fn normalized_trimmed_text_has_no_space_runs(text in "[a-z \t\r\n]{1,40}") {
        let got = texts(&format!("<t>{text}</t>"), Flags::NORMALIZE_SPACE | Flags::TRIM_SPACE);
        for data in got {
            prop_assert!(!data.is_empty());
            prop_assert!(!data.windows(2).any(|w| w[0] == b' ' && w[1] == b' '));
            prop_assert!(data[0] != b' ' && data[data.len() - 1] != b' ');
            prop_assert!(!data.iter().any(|b| matches!(b, b'\t' | b'\r' | b'\n')));
        }
    }

    #[test]
    fn escaped_text_decodes_to_original(text in "\\PC{1,40}") {
        let escaped = text
            .replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;");

        let got = texts(&format!("<t>{escaped}</t>"), Flags::ENTITY_TRANSLATION);
        prop_assert_eq!(got, vec![text.as_bytes().to_vec()]);

        let got = events(&format!("<t v=\"{escaped}\"/>"), Flags::ENTITY_TRANSLATION);
        prop_assert_eq!(&got[2], &SaxEvent::attribute("v", &text));
    }
}
