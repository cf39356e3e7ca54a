//! The document entry points: a ChemDraw drawing held as an element tree that
//! can be read from and written to both of its serialized forms.

use crate::reader;
use crate::types::Result;
use crate::writer::{self, IdSequence};
use crate::xml::XmlNode;
use std::str::FromStr;

/// The 22 byte header every cdx file starts with.
pub const HEADER: [u8; 22] = [
    b'V', b'j', b'C', b'D', b'0', b'1', b'0', b'0', 0x04, 0x03, 0x02, 0x01, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// A ChemDraw document, equivalent to its cdx and cdxml serializations.
///
/// The tree is immutable through this type; objects read from cdxml without an
/// identifier are assigned one from a monotonic per-document sequence when
/// written to binary.
#[derive(Debug, Clone)]
pub struct ChemDrawDocument {
    pub cdxml: XmlNode,
    id_sequence: IdSequence,
}

impl ChemDrawDocument {
    pub fn new(cdxml: XmlNode) -> Self {
        Self {
            cdxml,
            id_sequence: IdSequence::new(),
        }
    }

    /// Decodes a cdx byte stream.
    pub fn from_bytes(cdx: &[u8]) -> Result<Self> {
        Ok(Self::new(reader::read_document(cdx)?))
    }

    /// Parses a cdxml document.
    pub fn from_cdxml(cdxml: &str) -> Result<Self> {
        Ok(Self::new(XmlNode::from_str(cdxml)?))
    }

    /// Encodes the document as a cdx byte stream.
    pub fn to_bytes(&mut self) -> Result<Vec<u8>> {
        writer::write_document(&self.cdxml, &mut self.id_sequence)
    }

    /// Serializes the document as cdxml text.
    pub fn to_cdxml(&self) -> String {
        self.cdxml.to_cdxml()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NotACdxFileError;

    fn empty_document_bytes() -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&HEADER);
        bytes.extend_from_slice(&[0x00, 0x80]); // document tag
        bytes.extend_from_slice(&[0x01, 0x00, 0x00, 0x00]); // document id
        bytes.extend_from_slice(&[0x00, 0x00]); // end of document object
        bytes.extend_from_slice(&[0x00, 0x00]); // end of file
        bytes
    }

    #[test]
    fn test_rejects_foreign_header() {
        let bytes = [b'A'; 22];
        let err = ChemDrawDocument::from_bytes(&bytes).unwrap_err();
        assert!(err.downcast_ref::<NotACdxFileError>().is_some());
    }

    #[test]
    fn test_empty_document_roundtrip() {
        let bytes = empty_document_bytes();
        let mut document = ChemDrawDocument::from_bytes(&bytes).unwrap();
        assert_eq!(document.cdxml.name, "CDXML");
        assert_eq!(document.cdxml.attribute("id"), Some("1"));
        assert!(document.cdxml.child_nodes.is_empty());
        assert!(document.to_cdxml().ends_with("<CDXML id=\"1\"/>"));
        assert_eq!(document.to_bytes().unwrap(), bytes);
    }

    #[test]
    fn test_truncated_stream_is_an_error() {
        let mut bytes = empty_document_bytes();
        bytes.truncate(25);
        assert!(ChemDrawDocument::from_bytes(&bytes).is_err());
    }

    #[test]
    fn test_document_attributes_roundtrip() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&HEADER);
        bytes.extend_from_slice(&[0x00, 0x80]);
        bytes.extend_from_slice(&[0x01, 0x00, 0x00, 0x00]);
        // BondSpacing property, INT16 180 -> "18"
        bytes.extend_from_slice(&[0x04, 0x08, 0x02, 0x00, 0xB4, 0x00]);
        // WindowIsZoomed, implied boolean, zero length
        bytes.extend_from_slice(&[0x00, 0x09, 0x00, 0x00]);
        bytes.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);

        let mut document = ChemDrawDocument::from_bytes(&bytes).unwrap();
        assert_eq!(document.cdxml.attribute("BondSpacing"), Some("18"));
        assert_eq!(document.cdxml.attribute("WindowIsZoomed"), Some("yes"));
        assert_eq!(document.to_bytes().unwrap(), bytes);
    }

    #[test]
    fn test_unknown_attribute_tag_is_skipped() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&HEADER);
        bytes.extend_from_slice(&[0x00, 0x80]);
        bytes.extend_from_slice(&[0x01, 0x00, 0x00, 0x00]);
        // tag 0x7ABC is not in the catalog, three payload bytes to skip
        bytes.extend_from_slice(&[0xBC, 0x7A, 0x03, 0x00, 0xAA, 0xBB, 0xCC]);
        // a known property afterwards proves the stream stayed in sync
        bytes.extend_from_slice(&[0x04, 0x08, 0x02, 0x00, 0xB4, 0x00]);
        bytes.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);

        let document = ChemDrawDocument::from_bytes(&bytes).unwrap();
        assert_eq!(document.cdxml.attribute("BondSpacing"), Some("18"));
    }

    #[test]
    fn test_unknown_object_tag_is_fatal() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&HEADER);
        bytes.extend_from_slice(&[0x00, 0x80]);
        bytes.extend_from_slice(&[0x01, 0x00, 0x00, 0x00]);
        // object tag 0xFFF0 does not exist
        bytes.extend_from_slice(&[0xF0, 0xFF, 0x02, 0x00, 0x00, 0x00]);
        assert!(ChemDrawDocument::from_bytes(&bytes).is_err());
    }

    #[test]
    fn test_legacy_document_header() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&HEADER);
        // no document tag: two arbitrary bytes, one pad byte
        bytes.extend_from_slice(&[0x00, 0x00, 0x00]);
        bytes.extend_from_slice(&[0x03, 0x00, 0x00, 0x00]); // document id
        bytes.extend_from_slice(&[0u8; 23]); // unknown legacy block
        bytes.extend_from_slice(&[0x04, 0x08, 0x02, 0x00, 0xB4, 0x00]);
        bytes.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);

        let document = ChemDrawDocument::from_bytes(&bytes).unwrap();
        assert_eq!(document.cdxml.attribute("id"), Some("3"));
        assert_eq!(document.cdxml.attribute("BondSpacing"), Some("18"));
    }

    #[test]
    fn test_long_property_uses_extended_length() {
        let text: String = ::std::iter::repeat('x').take(69_998).collect();
        let mut root = XmlNode::new("CDXML");
        root.set_attribute("id", "1");
        root.set_attribute("Name", text);
        let mut document = ChemDrawDocument::new(root);
        let bytes = document.to_bytes().unwrap();

        // Name tag, escape length, then 70000 as u32 (0x00011170)
        let offset = HEADER.len() + 2 + 4;
        assert_eq!(&bytes[offset..offset + 2], &[0x08, 0x00]);
        assert_eq!(&bytes[offset + 2..offset + 4], &[0xFF, 0xFF]);
        assert_eq!(&bytes[offset + 4..offset + 8], &[0x70, 0x11, 0x01, 0x00]);

        let decoded = ChemDrawDocument::from_bytes(&bytes).unwrap();
        assert_eq!(decoded.cdxml.attribute("Name").map(str::len), Some(69_998));
    }

    #[test]
    fn test_missing_ids_are_assigned_from_5000() {
        let mut root = XmlNode::new("CDXML");
        root.set_attribute("id", "1");
        let mut page = XmlNode::new("page");
        page.child_nodes.push(XmlNode::new("fragment"));
        root.child_nodes.push(page);

        let mut document = ChemDrawDocument::new(root);
        let bytes = document.to_bytes().unwrap();
        let decoded = ChemDrawDocument::from_bytes(&bytes).unwrap();
        assert_eq!(decoded.cdxml.child_nodes[0].attribute("id"), Some("5000"));
        assert_eq!(
            decoded.cdxml.child_nodes[0].child_nodes[0].attribute("id"),
            Some("5001")
        );
    }
}
