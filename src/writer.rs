//! The cdx binary writer: walks an element tree whose attributes are in the
//! cdxml textual form and emits the tagged byte stream, inverting the
//! structural mismatches between the two forms.

use crate::catalog::Catalog;
use crate::document::HEADER;
use crate::error::{CdxStreamError, MissingChildNodeError};
use crate::types::{CdxColorTable, CdxFontStyle, CdxFontTable, CdxString, CdxValue, Result, DEFAULT_FONT_SIZE};
use crate::xml::XmlNode;
use byteorder::{ByteOrder, LittleEndian};
use log::{debug, error, warn};

/// Hands out identifiers for objects that carry none in the cdxml source.
#[derive(Debug, Clone)]
pub(crate) struct IdSequence {
    next: u32,
}

impl IdSequence {
    pub(crate) fn new() -> Self {
        Self { next: 5000 }
    }

    fn next_id(&mut self) -> u32 {
        let id = self.next;
        self.next += 1;
        id
    }
}

/// Child elements that are folded into their parent instead of being written
/// as objects of their own.
const SUPPRESSED_CHILDREN: &[&str] = &["s", "font", "color", "fonttable", "colortable"];

pub(crate) fn write_document(root: &XmlNode, ids: &mut IdSequence) -> Result<Vec<u8>> {
    let mut stream = Vec::with_capacity(1024);
    stream.extend_from_slice(&HEADER);

    if !element_to_stream(root, &mut stream, ids)? {
        return Err(CdxStreamError::new(format!(
            "document root element '{}' has no object tag",
            root.name
        ))
        .into());
    }

    // font and color tables live as child elements in cdxml but are document
    // properties in cdx; they must precede the first child object
    for child in &root.child_nodes {
        match child.name.as_str() {
            "fonttable" => {
                let table = CdxFontTable::from_element(child)?;
                write_named_property("fonttable", &table.to_bytes()?, &mut stream)?;
            }
            "colortable" => {
                let table = CdxColorTable::from_element(child)?;
                write_named_property("colortable", &table.to_bytes(), &mut stream)?;
            }
            _ => {}
        }
    }

    for child in &root.child_nodes {
        traverse_tree(child, &mut stream, ids)?;
    }

    // end of document and end of file
    stream.extend_from_slice(&[0, 0, 0, 0]);
    Ok(stream)
}

fn traverse_tree(node: &XmlNode, stream: &mut Vec<u8>, ids: &mut IdSequence) -> Result<()> {
    if SUPPRESSED_CHILDREN.contains(&node.name.as_str()) {
        // s elements are folded into their t parent, fonts and colors into the
        // document level tables
        return Ok(());
    }
    if !element_to_stream(node, stream, ids)? {
        // an element without an object tag is dropped whole, terminator included
        return Ok(());
    }
    for child in &node.child_nodes {
        traverse_tree(child, stream, ids)?;
    }
    push_u16(stream, 0);
    Ok(())
}

/// Writes the object tag, id and attributes of one element. Returns false when
/// the element name has no object tag and nothing was written.
fn element_to_stream(element: &XmlNode, stream: &mut Vec<u8>, ids: &mut IdSequence) -> Result<bool> {
    let object = match Catalog::global().object_by_element_name(&element.name) {
        Some(object) => object,
        None => {
            error!("Missing implementation for element: {}. Ignoring element.", element.name);
            return Ok(false);
        }
    };
    push_u16(stream, object.tag);

    let id = match element.attribute("id") {
        Some(id) => id.parse()?,
        None => ids.next_id(),
    };
    push_u32(stream, id);

    let mut has_label_style = false;
    let mut has_caption_style = false;
    for (attr, value) in &element.attributes {
        match attr.as_str() {
            "LabelFont" | "LabelSize" | "LabelFace" => has_label_style = true,
            "CaptionFont" | "CaptionSize" | "CaptionFace" => has_caption_style = true,
            "id" => {}
            _ => attribute_to_stream(attr, value, stream)?,
        }
    }

    if element.name == "t" {
        if !element.child_nodes.iter().any(|child| child.name == "s") {
            return Err(MissingChildNodeError::new("t", "s").into());
        }
        let text = CdxString::from_element(element)?;
        write_named_property("Text", &text.to_bytes(), stream)?;
    }

    if has_label_style {
        let style = font_style_from_attributes(element, "LabelFont", "LabelSize", "LabelFace");
        write_named_property("LabelStyle", &style.to_bytes(), stream)?;
    }
    if has_caption_style {
        let style = font_style_from_attributes(element, "CaptionFont", "CaptionSize", "CaptionFace");
        write_named_property("CaptionStyle", &style.to_bytes(), stream)?;
    }

    Ok(true)
}

fn attribute_to_stream(attr: &str, value: &str, stream: &mut Vec<u8>) -> Result<()> {
    let property = match Catalog::global().property_by_name(attr) {
        Some(property) => property,
        None => {
            warn!("Found unknown attribute {}. Ignoring this attribute.", attr);
            return Ok(());
        }
    };
    let parsed = CdxValue::from_attribute(property.kind, value)?;
    if let CdxValue::BooleanImplied(false) = parsed {
        // an implied boolean is false by absence and must not appear in the stream
        return Ok(());
    }
    push_u16(stream, property.tag);
    write_property_payload(&parsed.to_bytes()?, stream);
    debug!("Writing attribute {} with value '{}'.", attr, value);
    Ok(())
}

/// Folds a font/size/face attribute triple back into one 8 byte style property.
/// Color on label and caption styles is ignored by the format.
fn font_style_from_attributes(
    element: &XmlNode,
    font_attr: &str,
    size_attr: &str,
    face_attr: &str,
) -> CdxFontStyle {
    let font_id = match element.attribute(font_attr).and_then(|v| v.parse().ok()) {
        Some(font_id) => font_id,
        None => {
            warn!(
                "Setting default {} to 1. This might cause an issue if no font with id 1 exists.",
                font_attr
            );
            1
        }
    };
    let face = element
        .attribute(face_attr)
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);
    let size = match element.attribute(size_attr).and_then(|v| v.parse::<f64>().ok()) {
        Some(points) => (points * 20.0) as u16,
        None => DEFAULT_FONT_SIZE,
    };
    CdxFontStyle {
        font_id,
        face,
        size,
        color: 0,
    }
}

fn write_named_property(name: &str, payload: &[u8], stream: &mut Vec<u8>) -> Result<()> {
    let property = Catalog::global()
        .property_by_name(name)
        .ok_or_else(|| CdxStreamError::new(format!("property '{}' missing from the catalog", name)))?;
    push_u16(stream, property.tag);
    write_property_payload(payload, stream);
    Ok(())
}

fn write_property_payload(payload: &[u8], stream: &mut Vec<u8>) {
    if payload.len() <= 65534 {
        push_u16(stream, payload.len() as u16);
    } else {
        push_u16(stream, 0xFFFF);
        push_u32(stream, payload.len() as u32);
    }
    stream.extend_from_slice(payload);
}

fn push_u16(stream: &mut Vec<u8>, value: u16) {
    let mut word = [0u8; 2];
    LittleEndian::write_u16(&mut word, value);
    stream.extend_from_slice(&word);
}

fn push_u32(stream: &mut Vec<u8>, value: u32) {
    let mut word = [0u8; 4];
    LittleEndian::write_u32(&mut word, value);
    stream.extend_from_slice(&word);
}
