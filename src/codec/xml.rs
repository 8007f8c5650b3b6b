//! Rendering and parsing of [`Element`] trees as XML text.

use std::io::{Read, Write};

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::encoding::Decoder;
use quick_xml::{Reader, Writer};

use super::{CodecError, Element};

/// Render a tree as an XML document with a UTF-8 declaration.
///
/// `indent` is the number of spaces per nesting level; 0 writes everything
/// on one line.
pub fn to_xml_string(element: &Element, indent: usize) -> Result<String, CodecError> {
    let mut buf = Vec::new();
    write_xml(&mut buf, element, indent)?;
    String::from_utf8(buf).map_err(|e| CodecError::Utf8Error(e.utf8_error()))
}

/// Write a tree as an XML document
pub fn write_xml<W: Write>(out: W, element: &Element, indent: usize) -> Result<(), CodecError> {
    let mut writer = if indent > 0 {
        Writer::new_with_indent(out, b' ', indent)
    } else {
        Writer::new(out)
    };
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    write_element(&mut writer, element)
}

fn write_element<W: Write>(writer: &mut Writer<W>, element: &Element) -> Result<(), CodecError> {
    let mut start = BytesStart::new(element.name());
    for (key, value) in element.attributes() {
        start.push_attribute((key, value));
    }

    let text = element.text();
    if text.is_empty() && element.children().is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    if !text.is_empty() {
        writer.write_event(Event::Text(BytesText::new(text)))?;
    }
    for child in element.children() {
        write_element(writer, child)?;
    }
    writer.write_event(Event::End(BytesEnd::new(element.name())))?;
    Ok(())
}

/// Parse an XML document into a tree.
///
/// Text is kept verbatim, except that whitespace-only text of an element
/// with children (indentation) is dropped. Comments, processing
/// instructions and the declaration are dropped.
pub fn from_xml_str(xml: &str) -> Result<Element, CodecError> {
    let mut reader = Reader::from_str(xml);

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => stack.push(start_element(&e, reader.decoder())?),
            Event::Empty(e) => {
                let element = start_element(&e, reader.decoder())?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::End(_) => {
                let mut element = stack.pop().ok_or_else(|| {
                    CodecError::InvalidStructure("unbalanced end tag".to_string())
                })?;
                if !element.children().is_empty() && element.text().trim().is_empty() {
                    element.set_text("");
                }
                attach(&mut stack, &mut root, element)?;
            }
            Event::Text(t) => {
                if let Some(top) = stack.last_mut() {
                    top.append_text(&t.unescape()?);
                }
            }
            Event::CData(c) => {
                if let Some(top) = stack.last_mut() {
                    top.append_text(std::str::from_utf8(&c)?);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(CodecError::InvalidStructure(format!(
            "unclosed element <{}>",
            open.name()
        )));
    }
    root.ok_or_else(|| CodecError::InvalidStructure("document has no root element".to_string()))
}

/// Read and parse an XML document
pub fn read_xml<R: Read>(mut input: R) -> Result<Element, CodecError> {
    let mut xml = String::new();
    input.read_to_string(&mut xml)?;
    from_xml_str(&xml)
}

fn start_element(e: &BytesStart, decoder: Decoder) -> Result<Element, CodecError> {
    let qname = e.name();
    let mut element = Element::new(std::str::from_utf8(qname.as_ref())?);
    for attr in e.attributes() {
        let attr = attr.map_err(|e| CodecError::XmlError(quick_xml::Error::from(e)))?;
        let key = std::str::from_utf8(attr.key.as_ref())?.to_string();
        let value = attr.decode_and_unescape_value(decoder)?.into_owned();
        element.set_attribute(key, value);
    }
    Ok(element)
}

fn attach(
    stack: &mut [Element],
    root: &mut Option<Element>,
    element: Element,
) -> Result<(), CodecError> {
    if let Some(parent) = stack.last_mut() {
        parent.push(element);
    } else if root.is_none() {
        *root = Some(element);
    } else {
        return Err(CodecError::InvalidStructure(
            "multiple root elements".to_string(),
        ));
    }
    Ok(())
}
