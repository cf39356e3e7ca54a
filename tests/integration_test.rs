extern crate cdxml;

use cdxml::xml::XmlNode;
use cdxml::{CdxmlStyler, ChemDrawDocument, Style};
use std::str::FromStr;

/// A small but complete drawing: document styling, font and color tables, one
/// page with a two atom fragment, an atom label and a caption.
fn methanol_cdxml() -> String {
    concat!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" ?>\n",
        "<!DOCTYPE CDXML SYSTEM \"http://www.cambridgesoft.com/xml/cdxml.dtd\" >\n",
        "<CDXML id=\"1\" CreationProgram=\"ChemDraw 18.0\" BondSpacing=\"18\"",
        " BondLength=\"14.4\" LabelFont=\"3\" LabelSize=\"10\" LabelFace=\"96\"",
        " HideImplicitHydrogens=\"no\">",
        "<colortable>",
        "<color r=\"1\" g=\"1\" b=\"1\"/>",
        "<color r=\"0\" g=\"0\" b=\"0\"/>",
        "</colortable>",
        "<fonttable>",
        "<font id=\"3\" charset=\"iso-8859-1\" name=\"Arial\"/>",
        "</fonttable>",
        "<page id=\"2\">",
        "<fragment id=\"3\" BoundingBox=\"0 0 14.4 0\">",
        "<n id=\"4\" p=\"0 0\"/>",
        "<n id=\"5\" p=\"14.4 0\" Element=\"8\" NumHydrogens=\"1\" AS=\"N\">",
        "<t id=\"6\" p=\"14.4 0\" LabelJustification=\"Left\">",
        "<s font=\"3\" size=\"10\" face=\"96\" color=\"0\">OH</s>",
        "</t>",
        "</n>",
        "<b id=\"7\" B=\"4\" E=\"5\" Order=\"1\"/>",
        "</fragment>",
        "<t id=\"8\" p=\"2 20\">",
        "<s font=\"3\" size=\"12\" face=\"0\" color=\"0\">methanol</s>",
        "</t>",
        "</page>",
        "</CDXML>"
    )
    .to_string()
}

#[test]
fn test_cdxml_format_is_stable_under_reparse() {
    let document = ChemDrawDocument::from_cdxml(&methanol_cdxml()).unwrap();
    let first = document.to_cdxml();
    let reparsed = ChemDrawDocument::from_cdxml(&first).unwrap();
    assert_eq!(reparsed.to_cdxml(), first);
}

#[test]
fn test_binary_roundtrip_is_byte_stable() {
    let mut document = ChemDrawDocument::from_cdxml(&methanol_cdxml()).unwrap();
    let bytes = document.to_bytes().unwrap();

    let mut decoded = ChemDrawDocument::from_bytes(&bytes).unwrap();
    let reencoded = decoded.to_bytes().unwrap();
    assert_eq!(reencoded, bytes);

    // a detour through the text form does not change the binary form either
    let mut through_text = ChemDrawDocument::from_cdxml(&decoded.to_cdxml()).unwrap();
    assert_eq!(through_text.to_bytes().unwrap(), bytes);
}

#[test]
fn test_binary_form_rehomes_tables_and_text() {
    let mut document = ChemDrawDocument::from_cdxml(&methanol_cdxml()).unwrap();
    let bytes = document.to_bytes().unwrap();
    let decoded = ChemDrawDocument::from_bytes(&bytes).unwrap();

    // tables come back as children of the root, in their original order
    let root = &decoded.cdxml;
    assert_eq!(root.child_nodes[0].name, "colortable");
    assert_eq!(root.child_nodes[0].child_nodes.len(), 2);
    assert_eq!(root.child_nodes[1].name, "fonttable");
    assert_eq!(
        root.child_nodes[1].child_nodes[0].attribute("name"),
        Some("Arial")
    );

    // styled text came back as <s> runs with their style attributes
    let page = &root.child_nodes[2];
    let caption = &page.child_nodes[1];
    assert_eq!(caption.name, "t");
    assert_eq!(caption.child_nodes[0].name, "s");
    assert_eq!(caption.child_nodes[0].text.as_deref(), Some("methanol"));
    assert_eq!(caption.child_nodes[0].attribute("font"), Some("3"));
    assert_eq!(caption.child_nodes[0].attribute("size"), Some("12"));
}

#[test]
fn test_every_written_tag_respects_the_bit15_partition() {
    let mut document = ChemDrawDocument::from_cdxml(&methanol_cdxml()).unwrap();
    let bytes = document.to_bytes().unwrap();

    // walk the stream the same way a reader would and check the invariant on
    // every tag word encountered at object or attribute position
    let mut pos = 22 + 2 + 4; // header, document tag, document id
    let mut depth = 1;
    while depth > 0 {
        let tag = u16::from(bytes[pos]) | (u16::from(bytes[pos + 1]) << 8);
        pos += 2;
        if tag == 0 {
            depth -= 1;
            continue;
        }
        if tag & 0x8000 != 0 {
            depth += 1;
            pos += 4; // object id
            continue;
        }
        let short_len = usize::from(bytes[pos]) | (usize::from(bytes[pos + 1]) << 8);
        pos += 2;
        let len = if short_len == 0xFFFF {
            let long = u32::from_le_bytes([bytes[pos], bytes[pos + 1], bytes[pos + 2], bytes[pos + 3]]);
            pos += 4;
            long as usize
        } else {
            short_len
        };
        pos += len;
    }
    // the end marker remains
    assert_eq!(&bytes[pos..], &[0x00, 0x00]);
}

#[test]
fn test_styled_document_still_roundtrips_to_binary() {
    let styler = CdxmlStyler::new(Style::acs_1996());
    let styled = styler.apply_to_string(&methanol_cdxml()).unwrap();

    let root = XmlNode::from_str(&styled).unwrap();
    assert_eq!(root.attribute("BondLength"), Some("14.40"));
    assert_eq!(root.attribute("CaptionSize"), Some("10"));

    let mut document = ChemDrawDocument::from_cdxml(&styled).unwrap();
    let bytes = document.to_bytes().unwrap();
    let mut decoded = ChemDrawDocument::from_bytes(&bytes).unwrap();
    assert_eq!(decoded.to_bytes().unwrap(), bytes);
}

#[test]
fn test_styler_normalizes_mean_bond_length() {
    let styler = CdxmlStyler::new(Style::wiley());
    let styled = styler.apply_to_string(&methanol_cdxml()).unwrap();
    let root = XmlNode::from_str(&styled).unwrap();

    let fragment = &root.child_nodes[2].child_nodes[0];
    let first: Vec<f64> = fragment.child_nodes[0]
        .attribute("p")
        .unwrap()
        .split_whitespace()
        .map(|v| v.parse().unwrap())
        .collect();
    let second: Vec<f64> = fragment.child_nodes[1]
        .attribute("p")
        .unwrap()
        .split_whitespace()
        .map(|v| v.parse().unwrap())
        .collect();
    let length = ((second[0] - first[0]).powi(2) + (second[1] - first[1]).powi(2)).sqrt();
    assert!((length - 17.0).abs() < 0.1);
}
