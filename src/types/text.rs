use super::{expect_len, format_float, Result};
use crate::error::{CdxStreamError, CharsetError, InvalidLengthError, MissingAttributeError};
use crate::xml::XmlNode;
use byteorder::{ByteOrder, LittleEndian, ReadBytesExt};
use log::{debug, error};
use std::io::{Cursor, Read};

/// Charset identifiers appearing in cdx font tables, with the names used for the
/// charset attribute of cdxml font elements.
static CHARSETS: &[(u16, &str)] = &[
    (437, "x-ibm437"),
    (932, "Shift_JIS"),
    (936, "gb2312"),
    (949, "ks_c_5601-1987"),
    (950, "big5"),
    (1250, "iso-8859-2"),
    (1251, "iso-8859-5"),
    (1252, "iso-8859-1"),
    (1253, "iso-8859-7"),
    (1254, "iso-8859-9"),
    (10000, "x-mac-roman"),
    (65001, "utf-8"),
];

fn charset_name(charset: u16) -> Option<&'static str> {
    CHARSETS.iter().find(|(id, _)| *id == charset).map(|(_, name)| *name)
}

fn charset_id(name: &str) -> Option<u16> {
    CHARSETS.iter().find(|(_, n)| *n == name).map(|(id, _)| *id)
}

/// The 8 byte font style tuple attached to label and caption style properties and
/// to every run of a styled string.
///
/// Font size is measured in 20ths of a point, so cdx files cannot store font
/// sizes more accurately than the nearest 0.05 of a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CdxFontStyle {
    pub font_id: u16,
    pub face: u16,
    pub size: u16,
    pub color: u16,
}

pub const DEFAULT_FONT_SIZE: u16 = 12 * 20;

impl CdxFontStyle {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        expect_len("CDXFontStyle", bytes, 8)?;
        Ok(Self {
            font_id: LittleEndian::read_u16(&bytes[0..2]),
            face: LittleEndian::read_u16(&bytes[2..4]),
            size: LittleEndian::read_u16(&bytes[4..6]),
            color: LittleEndian::read_u16(&bytes[6..8]),
        })
    }

    /// Reads the style attributes of an `<s>` element. Only the font id is
    /// required, the face is plain, the size 12 points and the color black
    /// when not given.
    pub fn from_element(s: &XmlNode) -> Result<Self> {
        let font_id = s
            .attribute("font")
            .ok_or_else(|| MissingAttributeError::new(s.name.clone(), "font"))?
            .parse()?;
        let face = match s.attribute("face") {
            Some(value) => value.parse()?,
            None => 0,
        };
        let size = match s.attribute("size") {
            Some(value) => (value.parse::<f64>()? * 20.0) as u16,
            None => DEFAULT_FONT_SIZE,
        };
        let color = match s.attribute("color") {
            Some(value) => value.parse()?,
            None => 0,
        };
        Ok(Self {
            font_id,
            face,
            size,
            color,
        })
    }

    pub fn font_size_points(&self) -> f64 {
        f64::from(self.size) / 20.0
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = [0u8; 8];
        LittleEndian::write_u16(&mut buf[0..2], self.font_id);
        LittleEndian::write_u16(&mut buf[2..4], self.face);
        LittleEndian::write_u16(&mut buf[4..6], self.size);
        LittleEndian::write_u16(&mut buf[6..8], self.color);
        buf.to_vec()
    }

    pub fn to_element(&self) -> XmlNode {
        let mut s = XmlNode::new("s");
        s.set_attribute("font", self.font_id.to_string());
        s.set_attribute("size", format_float(self.font_size_points()));
        s.set_attribute("face", self.face.to_string());
        s.set_attribute("color", self.color.to_string());
        s
    }

    pub fn to_attribute_value(&self) -> String {
        format!(
            "font=\"{}\" size=\"{}\" face=\"{}\" color=\"{}\"",
            self.font_id,
            format_float(self.font_size_points()),
            self.face,
            self.color
        )
    }
}

/// A string with parallel style runs.
///
/// The binary layout is a UINT16 run count, then per run a UINT16 start index
/// and an 8 byte font style, then the text. In cdxml the same data is a `<t>`
/// element with one `<s>` child per run. Both directions preserve run
/// boundaries as they are, including zero length runs.
#[derive(Debug, Clone, PartialEq)]
pub struct CdxString {
    pub value: String,
    pub style_starts: Vec<u16>,
    pub styles: Vec<CdxFontStyle>,
    utf8: bool,
}

const BYTES_PER_STYLE: usize = 10;

impl CdxString {
    /// Decodes a styled string. Text bytes are iso-8859-1 unless `utf8` is set,
    /// which is only the case for the UTF8Text property.
    pub fn from_bytes(bytes: &[u8], utf8: bool) -> Result<Self> {
        let mut cursor = Cursor::new(bytes);
        let style_runs = cursor.read_u16::<LittleEndian>()? as usize;
        let mut style_starts = Vec::with_capacity(style_runs);
        let mut styles = Vec::with_capacity(style_runs);
        for _ in 0..style_runs {
            style_starts.push(cursor.read_u16::<LittleEndian>()?);
            let mut style_bytes = [0u8; 8];
            cursor.read_exact(&mut style_bytes)?;
            styles.push(CdxFontStyle::from_bytes(&style_bytes)?);
        }
        let text_length = bytes
            .len()
            .checked_sub(BYTES_PER_STYLE * style_runs + 2)
            .ok_or_else(|| InvalidLengthError::new("CDXString", BYTES_PER_STYLE * style_runs + 2, bytes.len()))?;
        let mut text_bytes = vec![0u8; text_length];
        cursor.read_exact(&mut text_bytes)?;
        let value = if utf8 {
            String::from_utf8(text_bytes).map_err(|_| CharsetError::new("utf-8"))?
        } else {
            text_bytes.iter().map(|&b| char::from(b)).collect()
        };
        debug!("Read string '{}' with {} different styles.", value, styles.len());
        Ok(Self {
            value,
            style_starts,
            styles,
            utf8,
        })
    }

    /// A plain property value carries no style runs.
    pub fn from_attribute(value: &str) -> Self {
        Self {
            value: String::from(value),
            style_starts: Vec::new(),
            styles: Vec::new(),
            utf8: false,
        }
    }

    /// Builds a styled string from the `<s>` children of a `<t>` element.
    pub fn from_element(t: &XmlNode) -> Result<Self> {
        let mut style_starts = Vec::new();
        let mut styles = Vec::new();
        let mut value = String::new();
        for s in t.child_nodes.iter().filter(|child| child.name == "s") {
            style_starts.push(value.chars().count() as u16);
            value.push_str(s.text_or_empty());
            styles.push(CdxFontStyle::from_element(s)?);
        }
        Ok(Self {
            value,
            style_starts,
            styles,
            utf8: false,
        })
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        let mut word = [0u8; 2];
        LittleEndian::write_u16(&mut word, self.styles.len() as u16);
        buf.extend_from_slice(&word);
        for (start, style) in self.style_starts.iter().zip(&self.styles) {
            LittleEndian::write_u16(&mut word, *start);
            buf.extend_from_slice(&word);
            buf.extend_from_slice(&style.to_bytes());
        }
        buf.extend_from_slice(&self.encode_text());
        buf
    }

    fn encode_text(&self) -> Vec<u8> {
        if self.utf8 {
            return self.value.as_bytes().to_vec();
        }
        let mut buf = Vec::with_capacity(self.value.len());
        for c in self.value.chars() {
            let code_point = c as u32;
            if code_point <= 0xFF {
                buf.push(code_point as u8);
            } else {
                error!(
                    "Text '{}' cannot be encoded as iso-8859-1. Retrying with UTF-8.",
                    self.value
                );
                return self.value.as_bytes().to_vec();
            }
        }
        buf
    }

    /// Appends the style runs of this string as `<s>` children of a `<t>` element.
    /// Only valid for strings that actually carry runs: plain property values
    /// must use the string value directly.
    pub fn to_element_children(&self, t: &mut XmlNode) -> Result<()> {
        if self.styles.is_empty() {
            return Err(CdxStreamError::new(
                "a text property without style runs cannot be expanded into style elements",
            )
            .into());
        }
        let chars: Vec<char> = self.value.chars().collect();
        for (idx, style) in self.styles.iter().enumerate() {
            let start = self.style_starts[idx] as usize;
            let end = match self.style_starts.get(idx + 1) {
                Some(next_start) => *next_start as usize,
                None => chars.len(),
            };
            let mut s = style.to_element();
            let run_text: String = chars[start.min(chars.len())..end.min(chars.len())].iter().collect();
            if !run_text.is_empty() {
                s.text = Some(run_text);
            }
            t.child_nodes.push(s);
        }
        Ok(())
    }
}

/// A font table entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    pub id: u16,
    pub charset: u16,
    pub name: String,
}

/// The document font table. A root level property in cdx files, a `<fonttable>`
/// child element with `<font>` children in cdxml.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CdxFontTable {
    pub platform: u16,
    pub fonts: Vec<Font>,
}

impl CdxFontTable {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut cursor = Cursor::new(bytes);
        let platform = cursor.read_u16::<LittleEndian>()?;
        let num_fonts = cursor.read_u16::<LittleEndian>()?;
        let mut fonts = Vec::with_capacity(num_fonts as usize);
        for _ in 0..num_fonts {
            let id = cursor.read_u16::<LittleEndian>()?;
            let charset = cursor.read_u16::<LittleEndian>()?;
            let name_length = cursor.read_u16::<LittleEndian>()? as usize;
            let mut name_bytes = vec![0u8; name_length];
            cursor.read_exact(&mut name_bytes)?;
            if !name_bytes.is_ascii() {
                return Err(CharsetError::new("ascii").into());
            }
            let name = String::from_utf8(name_bytes).map_err(|_| CharsetError::new("ascii"))?;
            fonts.push(Font { id, charset, name });
        }
        Ok(Self { platform, fonts })
    }

    pub fn from_element(fonttable: &XmlNode) -> Result<Self> {
        let mut fonts = Vec::new();
        for font in fonttable.child_nodes.iter().filter(|child| child.name == "font") {
            debug!("Reading font {:?}.", font.attributes);
            let id = font
                .attribute("id")
                .ok_or_else(|| MissingAttributeError::new("font", "id"))?
                .parse()?;
            let charset_attr = font
                .attribute("charset")
                .ok_or_else(|| MissingAttributeError::new("font", "charset"))?;
            let charset = match charset_id(charset_attr) {
                Some(id) => id,
                None => charset_attr
                    .parse()
                    .map_err(|_| CharsetError::new(charset_attr))?,
            };
            let name = font
                .attribute("name")
                .ok_or_else(|| MissingAttributeError::new("font", "name"))?;
            fonts.push(Font {
                id,
                charset,
                name: String::from(name),
            });
        }
        // platform is not represented in cdxml, windows is assumed
        Ok(Self {
            platform: 0x0001,
            fonts,
        })
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        let mut word = [0u8; 2];
        LittleEndian::write_u16(&mut word, self.platform);
        buf.extend_from_slice(&word);
        LittleEndian::write_u16(&mut word, self.fonts.len() as u16);
        buf.extend_from_slice(&word);
        for font in &self.fonts {
            if !font.name.is_ascii() {
                return Err(CharsetError::new("ascii").into());
            }
            LittleEndian::write_u16(&mut word, font.id);
            buf.extend_from_slice(&word);
            LittleEndian::write_u16(&mut word, font.charset);
            buf.extend_from_slice(&word);
            LittleEndian::write_u16(&mut word, font.name.len() as u16);
            buf.extend_from_slice(&word);
            buf.extend_from_slice(font.name.as_bytes());
        }
        Ok(buf)
    }

    pub fn to_element(&self) -> XmlNode {
        let mut fonttable = XmlNode::new("fonttable");
        for font in &self.fonts {
            let mut node = XmlNode::new("font");
            node.set_attribute("id", font.id.to_string());
            let charset = match charset_name(font.charset) {
                Some(name) => String::from(name),
                None => font.charset.to_string(),
            };
            node.set_attribute("charset", charset);
            node.set_attribute("name", font.name.clone());
            fonttable.child_nodes.push(node);
        }
        fonttable
    }
}

/// An RGB color with 16 bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u16,
    pub g: u16,
    pub b: u16,
}

pub const COLOR_MAX_VALUE: f64 = 65535.0;

/// The document color table. Components are 16 bit integers in cdx files and
/// floats in [0, 1] in cdxml.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CdxColorTable {
    pub colors: Vec<Color>,
}

impl CdxColorTable {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut cursor = Cursor::new(bytes);
        let num_colors = cursor.read_u16::<LittleEndian>()?;
        let mut colors = Vec::with_capacity(num_colors as usize);
        for _ in 0..num_colors {
            let r = cursor.read_u16::<LittleEndian>()?;
            let g = cursor.read_u16::<LittleEndian>()?;
            let b = cursor.read_u16::<LittleEndian>()?;
            colors.push(Color { r, g, b });
        }
        Ok(Self { colors })
    }

    pub fn from_element(colortable: &XmlNode) -> Result<Self> {
        let mut colors = Vec::new();
        for color in colortable.child_nodes.iter().filter(|child| child.name == "color") {
            colors.push(Color {
                r: Self::component_from_attribute(color, "r")?,
                g: Self::component_from_attribute(color, "g")?,
                b: Self::component_from_attribute(color, "b")?,
            });
        }
        Ok(Self { colors })
    }

    fn component_from_attribute(color: &XmlNode, attr: &'static str) -> Result<u16> {
        let value: f64 = color
            .attribute(attr)
            .ok_or_else(|| MissingAttributeError::new("color", attr))?
            .parse()?;
        // rounding keeps every component stable across the float transit
        Ok((value * COLOR_MAX_VALUE).round().max(0.0).min(COLOR_MAX_VALUE) as u16)
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(2 + self.colors.len() * 6);
        let mut word = [0u8; 2];
        LittleEndian::write_u16(&mut word, self.colors.len() as u16);
        buf.extend_from_slice(&word);
        for color in &self.colors {
            for component in &[color.r, color.g, color.b] {
                LittleEndian::write_u16(&mut word, *component);
                buf.extend_from_slice(&word);
            }
        }
        buf
    }

    pub fn to_element(&self) -> XmlNode {
        let mut colortable = XmlNode::new("colortable");
        for color in &self.colors {
            let mut node = XmlNode::new("color");
            node.set_attribute("r", format_float(f64::from(color.r) / COLOR_MAX_VALUE));
            node.set_attribute("g", format_float(f64::from(color.g) / COLOR_MAX_VALUE));
            node.set_attribute("b", format_float(f64::from(color.b) / COLOR_MAX_VALUE));
            colortable.child_nodes.push(node);
        }
        colortable
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_plain_string_roundtrip() {
        let value = CdxString::from_attribute("ChemDraw 18.0");
        let bytes = value.to_bytes();
        assert_eq!(&bytes[0..2], &[0, 0]);
        assert_eq!(&bytes[2..], b"ChemDraw 18.0");
        let decoded = CdxString::from_bytes(&bytes, false).unwrap();
        assert_eq!(decoded.value, "ChemDraw 18.0");
        assert!(decoded.styles.is_empty());
    }

    #[test]
    fn test_styled_string_from_element_keeps_run_boundaries() {
        let t = XmlNode::from_str(concat!(
            "<t><s font=\"3\" size=\"10\" face=\"96\">CH</s>",
            "<s font=\"3\" size=\"10\" face=\"96\"></s>",
            "<s font=\"3\" size=\"7.5\" face=\"32\">3</s></t>"
        ))
        .unwrap();
        let value = CdxString::from_element(&t).unwrap();
        assert_eq!(value.value, "CH3");
        assert_eq!(value.style_starts, vec![0, 2, 2]);
        assert_eq!(value.styles.len(), 3);
        assert_eq!(value.styles[2].size, 150);

        let mut back = XmlNode::new("t");
        value.to_element_children(&mut back).unwrap();
        assert_eq!(back.child_nodes.len(), 3);
        assert_eq!(back.child_nodes[0].text.as_deref(), Some("CH"));
        assert_eq!(back.child_nodes[1].text, None);
        assert_eq!(back.child_nodes[2].text.as_deref(), Some("3"));
    }

    #[test]
    fn test_styled_string_binary_roundtrip() {
        let style = CdxFontStyle {
            font_id: 3,
            face: 96,
            size: 200,
            color: 0,
        };
        let value = CdxString {
            value: String::from("OH"),
            style_starts: vec![0],
            styles: vec![style],
            utf8: false,
        };
        let bytes = value.to_bytes();
        assert_eq!(bytes.len(), 2 + 10 + 2);
        assert_eq!(CdxString::from_bytes(&bytes, false).unwrap(), value);
    }

    #[test]
    fn test_latin1_fallback_to_utf8() {
        let value = CdxString::from_attribute("50 \u{00B0}C");
        // degree sign is in latin-1, stays a single byte
        assert_eq!(value.to_bytes().len(), 2 + 5);
        let wide = CdxString::from_attribute("\u{0394}H");
        // greek delta is not, the whole text falls back to utf-8
        assert_eq!(wide.to_bytes().len(), 2 + 3);
    }

    #[test]
    fn test_font_table_roundtrip() {
        let table = CdxFontTable {
            platform: 1,
            fonts: vec![
                Font {
                    id: 3,
                    charset: 1252,
                    name: String::from("Arial"),
                },
                Font {
                    id: 4,
                    charset: 1252,
                    name: String::from("Times New Roman"),
                },
            ],
        };
        let bytes = table.to_bytes().unwrap();
        assert_eq!(CdxFontTable::from_bytes(&bytes).unwrap(), table);

        let element = table.to_element();
        assert_eq!(element.child_nodes[0].attribute("charset"), Some("iso-8859-1"));
        let back = CdxFontTable::from_element(&element).unwrap();
        assert_eq!(back, table);
    }

    #[test]
    fn test_color_table_float_transit() {
        let table = CdxColorTable {
            colors: vec![
                Color { r: 65535, g: 65535, b: 65535 },
                Color { r: 0, g: 0, b: 0 },
                Color { r: 1, g: 32768, b: 65534 },
            ],
        };
        let element = table.to_element();
        assert_eq!(element.child_nodes[0].attribute("r"), Some("1"));
        let back = CdxColorTable::from_element(&element).unwrap();
        assert_eq!(back, table);

        let bytes = table.to_bytes();
        assert_eq!(bytes[0..2], [3, 0]);
        assert_eq!(CdxColorTable::from_bytes(&bytes).unwrap(), table);
    }

    #[test]
    fn test_font_style_defaults_from_element() {
        let s = XmlNode::from_str("<s font=\"1\">x</s>").unwrap();
        let style = CdxFontStyle::from_element(&s).unwrap();
        assert_eq!(style.size, DEFAULT_FONT_SIZE);
        assert_eq!(style.face, 0);
        assert_eq!(style.color, 0);
    }
}
