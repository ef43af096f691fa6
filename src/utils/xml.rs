//! XML body writing and reading

use crate::errors::DtoResult;

use std::fmt::Display;
use std::io;

use quick_xml::errors::IllFormedError;
use quick_xml::events::Event;
use quick_xml::Reader;
use xml::writer::{EventWriter, Result as XmlResult, XmlEvent};

/// Extension methods over an `xml-rs` event writer
pub(crate) trait XmlWriterExt {
    /// write `<name>data</name>`
    fn element(&mut self, name: &str, data: &str) -> XmlResult<()>;

    /// write `<name>data</name>` if `data` is present
    fn opt_element<T: Display>(&mut self, name: &str, data: Option<T>) -> XmlResult<()>;

    /// write `<name>` .. `</name>` around `f`
    fn stack(&mut self, name: &str, f: impl FnOnce(&mut Self) -> XmlResult<()>) -> XmlResult<()>;

    /// like `stack`, declaring `ns` as the default namespace
    fn stack_ns(
        &mut self,
        name: &str,
        ns: &str,
        f: impl FnOnce(&mut Self) -> XmlResult<()>,
    ) -> XmlResult<()>;

    /// like `stack`, only if `data` is present
    fn opt_stack<T>(
        &mut self,
        name: &str,
        data: Option<T>,
        f: impl FnOnce(&mut Self, T) -> XmlResult<()>,
    ) -> XmlResult<()>;
}

impl<W: io::Write> XmlWriterExt for EventWriter<W> {
    fn element(&mut self, name: &str, data: &str) -> XmlResult<()> {
        self.write(XmlEvent::start_element(name))?;
        self.write(XmlEvent::characters(data))?;
        self.write(XmlEvent::end_element())
    }

    fn opt_element<T: Display>(&mut self, name: &str, data: Option<T>) -> XmlResult<()> {
        match data {
            Some(data) => self.element(name, &data.to_string()),
            None => Ok(()),
        }
    }

    fn stack(&mut self, name: &str, f: impl FnOnce(&mut Self) -> XmlResult<()>) -> XmlResult<()> {
        self.write(XmlEvent::start_element(name))?;
        f(self)?;
        self.write(XmlEvent::end_element())
    }

    fn stack_ns(
        &mut self,
        name: &str,
        ns: &str,
        f: impl FnOnce(&mut Self) -> XmlResult<()>,
    ) -> XmlResult<()> {
        self.write(XmlEvent::start_element(name).default_ns(ns))?;
        f(self)?;
        self.write(XmlEvent::end_element())
    }

    fn opt_stack<T>(
        &mut self,
        name: &str,
        data: Option<T>,
        f: impl FnOnce(&mut Self, T) -> XmlResult<()>,
    ) -> XmlResult<()> {
        match data {
            Some(data) => self.stack(name, |w| f(w, data)),
            None => Ok(()),
        }
    }
}

/// Writes an XML document into a buffer of `capacity` bytes
pub(crate) fn write_xml_body(
    capacity: usize,
    f: impl FnOnce(&mut EventWriter<Vec<u8>>) -> XmlResult<()>,
) -> DtoResult<Vec<u8>> {
    let mut w = EventWriter::new(Vec::with_capacity(capacity));
    f(&mut w)?;
    Ok(w.into_inner())
}

/// The root element of an XML document and the text of its direct children
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElements {
    /// local name of the root element, empty for an empty document
    root: String,
    /// (local name, text) of each direct child, in document order
    children: Vec<(String, String)>,
}

impl XmlElements {
    /// Reads `doc`. Text of grandchildren is not collected.
    /// Child text is kept exactly as written, surrounding whitespace included.
    /// An empty document has no root and no children.
    ///
    /// # Errors
    /// Returns an `Err` if `doc` is not well-formed, including a document
    /// that ends before its open elements are closed
    pub fn parse(doc: &str) -> DtoResult<Self> {
        let mut reader = Reader::from_str(doc);

        let mut out = Self::default();
        // local names of the open elements, root first
        let mut open: Vec<String> = Vec::new();
        let mut text = String::new();
        let mut nested = false;

        loop {
            match reader.read_event()? {
                Event::Start(e) => {
                    let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                    match open.len() {
                        0 => out.root.clone_from(&name),
                        1 => {
                            text.clear();
                            nested = false;
                        }
                        _ => nested = true,
                    }
                    open.push(name);
                }
                Event::Empty(e) => {
                    let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                    match open.len() {
                        0 => out.root = name,
                        1 => out.children.push((name, String::new())),
                        _ => nested = true,
                    }
                }
                Event::Text(t) if open.len() == 2 => text.push_str(&t.unescape()?),
                Event::CData(c) if open.len() == 2 => {
                    text.push_str(&String::from_utf8_lossy(&c.into_inner()));
                }
                Event::End(_) => {
                    let name = open.pop();
                    if open.len() == 1 {
                        if let Some(name) = name {
                            // indentation around grandchildren is not a value
                            if nested && text.trim().is_empty() {
                                text.clear();
                            }
                            out.children.push((name, std::mem::take(&mut text)));
                        }
                    }
                }
                Event::Eof => {
                    if let Some(name) = open.pop() {
                        let err = quick_xml::Error::IllFormed(IllFormedError::MissingEndTag(name));
                        return Err(err.into());
                    }
                    break;
                }
                _ => {}
            }
        }
        Ok(out)
    }

    /// Local name of the root element
    #[must_use]
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Text of the first direct child named `name`
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.children
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, text)| text.as_str())
    }

    /// Number of direct children
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether the root has no children
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DtoError;

    #[test]
    fn writes_nested_elements() {
        let body = write_xml_body(256, |w| {
            w.stack_ns("Root", "urn:test", |w| {
                w.opt_stack("Item", Some(7), |w, n| w.opt_element("N", Some(n)))?;
                w.opt_element::<i32>("Skipped", None)?;
                w.element("Escaped", "a<b")
            })
        })
        .unwrap();
        let body = String::from_utf8(body).unwrap();

        assert!(body.contains(r#"<Root xmlns="urn:test">"#), "{body}");
        assert!(body.contains("<Item><N>7</N></Item>"), "{body}");
        assert!(body.contains("<Escaped>a&lt;b</Escaped>"), "{body}");
        assert!(!body.contains("Skipped"), "{body}");
    }

    #[test]
    fn reads_direct_children() {
        let doc = r#"<?xml version="1.0" encoding="UTF-8"?>
<Result xmlns="urn:test">
    <Location>https://example.com/a&amp;b</Location>
    <Nested><Location>inner</Location></Nested>
    <Empty/>
    <Data><![CDATA[x<y]]></Data>
</Result>"#;
        let elements = XmlElements::parse(doc).unwrap();

        assert_eq!(elements.root(), "Result");
        assert_eq!(elements.get("Location"), Some("https://example.com/a&b"));
        assert_eq!(elements.get("Nested"), Some(""));
        assert_eq!(elements.get("Empty"), Some(""));
        assert_eq!(elements.get("Data"), Some("x<y"));
        assert_eq!(elements.get("Missing"), None);
        assert_eq!(elements.len(), 4);
    }

    #[test]
    fn empty_document_has_no_children() {
        let elements = XmlElements::parse("").unwrap();
        assert!(elements.is_empty());
        assert_eq!(elements.root(), "");
    }

    #[test]
    fn rejects_mismatched_tags() {
        assert!(XmlElements::parse("<A><B></A>").is_err());
    }

    #[test]
    fn rejects_truncated_documents() {
        for doc in ["<R><Key>k</Key>", "<R><Key>k", "<R><Nested><Key>k</Key>"] {
            match XmlElements::parse(doc) {
                Err(DtoError::Xml(quick_xml::Error::IllFormed(
                    IllFormedError::MissingEndTag(_),
                ))) => {}
                other => panic!("{doc}: unexpected {other:?}"),
            }
        }
    }

    #[test]
    fn keeps_whitespace_in_child_text() {
        let elements = XmlElements::parse(
            "<R>\n  <Key>photo </Key>\n  <Blank>   </Blank>\n  <Padded>\n a \n</Padded>\n</R>",
        )
        .unwrap();

        assert_eq!(elements.get("Key"), Some("photo "));
        assert_eq!(elements.get("Blank"), Some("   "));
        assert_eq!(elements.get("Padded"), Some("\n a \n"));
        assert_eq!(elements.len(), 3);
    }

    #[test]
    fn indented_nested_child_has_no_text() {
        let elements =
            XmlElements::parse("<R>\n  <Nested>\n    <A>1</A>\n  </Nested>\n</R>").unwrap();
        assert_eq!(elements.get("Nested"), Some(""));
        assert_eq!(elements.get("A"), None);
    }
}
