use crate::error::InvalidXmlError;
use quick_xml::{
    events::{BytesStart, Event},
    Reader,
};
use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

/// The fixed preamble every cdxml document starts with.
pub const CDXML_HEADER: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" ?>\n<!DOCTYPE CDXML SYSTEM \"http://www.cambridgesoft.com/xml/cdxml.dtd\" >\n";

/// Represents an implementation independent xml node.
///
/// Attributes are kept in document order: cdx properties are written back in the
/// order they were read, so the attribute sequence is part of the data model and
/// an unordered map would break byte-exact round-trips.
#[derive(Debug, Clone, PartialEq)]
pub struct XmlNode {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub child_nodes: Vec<XmlNode>,
    pub text: Option<String>,
}

impl Display for XmlNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> ::std::fmt::Result {
        write!(f, "name: {}", self.name)
    }
}

impl XmlNode {
    pub fn new<T: Into<String>>(name: T) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            child_nodes: Vec::new(),
            text: None,
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Sets an attribute, replacing an existing one in place so its position is kept.
    pub fn set_attribute<K, V>(&mut self, name: K, value: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        let name = name.into();
        match self.attributes.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) => entry.1 = value.into(),
            None => self.attributes.push((name, value.into())),
        }
    }

    pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
        let idx = self.attributes.iter().position(|(key, _)| key == name)?;
        Some(self.attributes.remove(idx).1)
    }

    pub fn find_child(&self, name: &str) -> Option<&XmlNode> {
        self.child_nodes.iter().find(|child| child.name == name)
    }

    /// Text content of this node, with a missing text node read as the empty string.
    pub fn text_or_empty(&self) -> &str {
        self.text.as_ref().map(String::as_str).unwrap_or("")
    }

    fn from_quick_xml_element(xml_element: &BytesStart<'_>) -> Result<Self, InvalidXmlError> {
        let name = ::std::str::from_utf8(xml_element.name()).map_err(|_| InvalidXmlError {})?;
        let mut node = Self::new(name);

        for attr in xml_element.attributes() {
            let a = attr.map_err(|_| InvalidXmlError {})?;
            let key = ::std::str::from_utf8(&a.key).map_err(|_| InvalidXmlError {})?;
            let value = a.unescaped_value().map_err(|_| InvalidXmlError {})?;
            let value = ::std::str::from_utf8(&value).map_err(|_| InvalidXmlError {})?;
            node.attributes.push((String::from(key), String::from(value)));
        }

        Ok(node)
    }

    fn parse_child_elements(
        xml_node: &mut Self,
        xml_element: &BytesStart<'_>,
        xml_reader: &mut Reader<&[u8]>,
    ) -> Result<Vec<Self>, InvalidXmlError> {
        let mut child_nodes = Vec::new();

        let mut buffer = Vec::new();
        loop {
            match xml_reader.read_event(&mut buffer) {
                Ok(Event::Start(ref element)) => {
                    let mut node = Self::from_quick_xml_element(element)?;
                    node.child_nodes = Self::parse_child_elements(&mut node, element, xml_reader)?;
                    child_nodes.push(node);
                }
                Ok(Event::Text(text)) => {
                    // whitespace between elements carries no cdxml meaning
                    if let Ok(content) = text.unescape_and_decode(xml_reader) {
                        if !content.trim().is_empty() {
                            xml_node.text = Some(content);
                        }
                    }
                }
                Ok(Event::Empty(ref element)) => {
                    let node = Self::from_quick_xml_element(element)?;
                    child_nodes.push(node);
                }
                Ok(Event::End(ref element)) => {
                    if element.name() == xml_element.name() {
                        break;
                    }
                }
                Ok(Event::Eof) => {
                    break;
                }
                Err(_) => return Err(InvalidXmlError {}),
                _ => (),
            }

            buffer.clear();
        }

        Ok(child_nodes)
    }

    /// Serializes the tree into the cdxml text form, preamble included.
    pub fn to_cdxml(&self) -> String {
        let mut out = String::from(CDXML_HEADER);
        self.serialize_into(&mut out);
        out
    }

    /// Serializes this subtree alone, without the document preamble.
    pub fn to_xml(&self) -> String {
        let mut out = String::new();
        self.serialize_into(&mut out);
        out
    }

    fn serialize_into(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.name);
        for (key, value) in &self.attributes {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            escape_into(value, true, out);
            out.push('"');
        }
        if self.child_nodes.is_empty() && self.text.is_none() {
            out.push_str("/>");
        } else {
            out.push('>');
            if let Some(text) = &self.text {
                escape_into(text, false, out);
            }
            for child in &self.child_nodes {
                child.serialize_into(out);
            }
            out.push_str("</");
            out.push_str(&self.name);
            out.push('>');
        }
    }
}

impl FromStr for XmlNode {
    type Err = InvalidXmlError;

    fn from_str(xml_string: &str) -> Result<Self, Self::Err> {
        let mut xml_reader = Reader::from_str(xml_string);
        let mut buffer = Vec::new();
        loop {
            match xml_reader.read_event(&mut buffer) {
                Ok(Event::Start(ref element)) => {
                    let mut root_node = Self::from_quick_xml_element(element)?;
                    root_node.child_nodes =
                        Self::parse_child_elements(&mut root_node, element, &mut xml_reader)?;
                    return Ok(root_node);
                }
                Ok(Event::Empty(ref element)) => {
                    return Self::from_quick_xml_element(element);
                }
                Ok(Event::Eof) => break,
                Err(_) => return Err(InvalidXmlError {}),
                _ => (),
            }

            buffer.clear();
        }

        Err(InvalidXmlError {})
    }
}

fn escape_into(value: &str, is_attribute: bool, out: &mut String) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if is_attribute => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::XmlNode;
    use std::str::FromStr;

    #[test]
    fn test_parse_keeps_element_and_attribute_order() {
        let source = concat!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\" ?>\n",
            "<!DOCTYPE CDXML SYSTEM \"http://www.cambridgesoft.com/xml/cdxml.dtd\" >\n",
            "<CDXML BondLength=\"14.40\" LabelFont=\"3\">",
            "<colortable><color r=\"1\" g=\"1\" b=\"1\"/></colortable>",
            "<page id=\"76\"><t id=\"5\"><s font=\"3\" size=\"10\">CH4</s></t></page>",
            "</CDXML>"
        );

        let root = XmlNode::from_str(source).expect("couldn't parse cdxml");
        assert_eq!(root.name, "CDXML");
        assert_eq!(root.attributes[0], ("BondLength".to_string(), "14.40".to_string()));
        assert_eq!(root.attributes[1], ("LabelFont".to_string(), "3".to_string()));
        assert_eq!(root.child_nodes[0].name, "colortable");
        assert_eq!(root.child_nodes[1].name, "page");

        let t = &root.child_nodes[1].child_nodes[0];
        assert_eq!(t.name, "t");
        assert_eq!(t.child_nodes[0].text.as_deref(), Some("CH4"));
    }

    #[test]
    fn test_serialize_is_stable_under_reparse() {
        let mut root = XmlNode::new("CDXML");
        root.set_attribute("id", "1");
        let mut t = XmlNode::new("t");
        let mut s = XmlNode::new("s");
        s.set_attribute("font", "3");
        s.text = Some("R&D <\"stuff\">".to_string());
        t.child_nodes.push(s);
        root.child_nodes.push(t);

        let serialized = root.to_cdxml();
        let reparsed = XmlNode::from_str(&serialized).unwrap();
        assert_eq!(reparsed, root);
        assert_eq!(reparsed.to_cdxml(), serialized);
    }

    #[test]
    fn test_empty_element_roundtrip() {
        let root = XmlNode::from_str("<CDXML id=\"1\"/>").unwrap();
        assert_eq!(root.attribute("id"), Some("1"));
        assert!(root.to_cdxml().ends_with("<CDXML id=\"1\"/>"));
    }
}
