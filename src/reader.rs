//! The cdx binary reader: walks the tagged byte stream and builds the element
//! tree, interleaving object pushes and pops with attribute decoding.

use crate::catalog::{Catalog, CdxTag, DOCUMENT_TAG};
use crate::document::HEADER;
use crate::error::{CdxStreamError, NotACdxFileError};
use crate::types::{CdxValue, Result};
use crate::xml::XmlNode;
use byteorder::{LittleEndian, ReadBytesExt};
use log::{debug, info, warn};
use std::io::{Cursor, Read, Seek, SeekFrom};

pub(crate) fn read_document(bytes: &[u8]) -> Result<XmlNode> {
    let mut cdx = Cursor::new(bytes);

    let mut header = [0u8; 22];
    cdx.read_exact(&mut header)?;
    if header != HEADER {
        return Err(NotACdxFileError {}.into());
    }

    let document_tag = cdx.read_u16::<LittleEndian>()?;
    let mut legacy_doc = false;
    if document_tag != DOCUMENT_TAG {
        // legacy registration files have no document tag and one additional pad
        // byte before the document id
        warn!("Document tag not found. File seems to be a legacy cdx file.");
        cdx.seek(SeekFrom::Current(1))?;
        legacy_doc = true;
    }

    let object_id = cdx.read_u32::<LittleEndian>()?;
    debug!("Reading document with id: {}", object_id);
    let mut root = XmlNode::new("CDXML");
    root.set_attribute("id", object_id.to_string());
    if legacy_doc {
        // legacy documents carry 23 additional bytes of unknown meaning
        let mut unknown = [0u8; 23];
        cdx.read_exact(&mut unknown)?;
    }

    read_attributes(&mut cdx, &mut root)?;

    // Nodes under construction; the last entry is the current parent. Popping the
    // root means the document object was closed.
    let mut parent_stack: Vec<XmlNode> = vec![root];
    loop {
        let raw = cdx.read_u16::<LittleEndian>()?;
        match CdxTag::classify(raw) {
            CdxTag::EndOfObject => {
                let finished = match parent_stack.pop() {
                    Some(node) => node,
                    None => return Err(CdxStreamError::new("end-of-object sentinel with no open object").into()),
                };
                match parent_stack.last_mut() {
                    Some(parent) => parent.child_nodes.push(finished),
                    None => {
                        info!("Finished reading document.");
                        return Ok(finished);
                    }
                }
            }
            CdxTag::Object(tag) => {
                // objects carry no length prefix, so an unknown object cannot be
                // skipped without desynchronizing the stream
                let object = Catalog::global().object_by_tag(tag).ok_or_else(|| {
                    CdxStreamError::new(format!("unknown object tag {:#06X}", tag))
                })?;
                let id = cdx.read_u32::<LittleEndian>()?;
                let mut element = XmlNode::new(object.element_name);
                element.set_attribute("id", id.to_string());
                read_attributes(&mut cdx, &mut element)?;
                debug!("Created element of type {} with id: {}", element.name, id);
                parent_stack.push(element);
            }
            CdxTag::Property(tag) => {
                return Err(CdxStreamError::new(format!(
                    "attribute tag {:#06X} found where an object tag or end-of-object was expected",
                    tag
                ))
                .into());
            }
        }
    }
}

/// Reads properties until the next object tag or end-of-object sentinel, which
/// is left in the stream for the object loop to re-read. Unknown attribute tags
/// are skipped over via their length prefix.
fn read_attributes(cdx: &mut Cursor<&[u8]>, element: &mut XmlNode) -> Result<()> {
    loop {
        let raw = cdx.read_u16::<LittleEndian>()?;
        let tag = match CdxTag::classify(raw) {
            CdxTag::EndOfObject | CdxTag::Object(_) => {
                cdx.seek(SeekFrom::Current(-2))?;
                debug!("Successfully finished reading attributes.");
                return Ok(());
            }
            CdxTag::Property(tag) => tag,
        };

        match Catalog::global().property_by_tag(tag) {
            None => {
                let length = cdx.read_u16::<LittleEndian>()? as usize;
                let mut skipped = vec![0u8; length];
                cdx.read_exact(&mut skipped)?;
                warn!(
                    "Found unknown property {:#06X} with length {}. Ignoring this property.",
                    tag, length
                );
            }
            Some(property) => {
                let length = read_property_length(cdx)?;
                let mut payload = vec![0u8; length];
                cdx.read_exact(&mut payload)?;
                apply_property(property.name, property.kind, payload, element)?;
            }
        }
    }
}

fn read_property_length(cdx: &mut Cursor<&[u8]>) -> Result<usize> {
    let length = cdx.read_u16::<LittleEndian>()?;
    if length == 0xFFFF {
        // long form for properties bigger than 65534 bytes
        Ok(cdx.read_u32::<LittleEndian>()? as usize)
    } else {
        Ok(length as usize)
    }
}

fn apply_property(
    name: &'static str,
    kind: crate::types::ValueKind,
    mut payload: Vec<u8>,
    element: &mut XmlNode,
) -> Result<()> {
    // a color property observed in a real file carried 4 bytes for a UINT16,
    // with the correct value in the first two
    if name == "color" && payload.len() == 4 {
        warn!(
            "Property color of type UINT16 found with length 4 instead of required length 2. \
             Fixed by taking only first 2 bytes into account."
        );
        payload.truncate(2);
    }

    debug!("Reading property {} of kind {:?}.", name, kind);
    let value = CdxValue::from_bytes(kind, &payload)?;

    match (name, value) {
        ("LabelStyle", CdxValue::FontStyle(style)) => {
            element.set_attribute("LabelFont", style.font_id.to_string());
            element.set_attribute("LabelSize", crate::types::format_float(style.font_size_points()));
            element.set_attribute("LabelFace", style.face.to_string());
        }
        ("CaptionStyle", CdxValue::FontStyle(style)) => {
            element.set_attribute("CaptionFont", style.font_id.to_string());
            element.set_attribute("CaptionSize", crate::types::format_float(style.font_size_points()));
            element.set_attribute("CaptionFace", style.face.to_string());
        }
        // the tables are document properties in cdx but child elements in cdxml
        ("fonttable", CdxValue::FontTable(table)) => {
            element.child_nodes.push(table.to_element());
        }
        ("colortable", CdxValue::ColorTable(table)) => {
            element.child_nodes.push(table.to_element());
        }
        // styled text becomes <s> children of the current <t> element
        ("Text", CdxValue::String(text)) => {
            if text.styles.is_empty() {
                warn!("Ignoring text property without style runs.");
            } else {
                let style_count = text.styles.len();
                text.to_element_children(element)?;
                debug!("Added {} styles to text object.", style_count);
            }
        }
        // utf-8 mirror of the Text property, decoded but not stored
        ("UTF8Text", CdxValue::String(_)) => {}
        (name, value) => {
            element.set_attribute(name, value.to_attribute_value());
        }
    }
    Ok(())
}
