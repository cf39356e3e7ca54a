use super::{expect_len, Result};
use crate::error::{InvalidLengthError, UnknownEnumValueError};
use byteorder::{ByteOrder, LittleEndian};

/// An array of object identifiers, stored as consecutive UINT32 values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CdxObjectIdArray {
    pub ids: Vec<u32>,
}

impl CdxObjectIdArray {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() % 4 != 0 {
            return Err(InvalidLengthError::new("CDXObjectIDArray", bytes.len() / 4 * 4, bytes.len()).into());
        }
        let ids = bytes.chunks_exact(4).map(LittleEndian::read_u32).collect();
        Ok(Self { ids })
    }

    pub fn from_attribute(value: &str) -> Result<Self> {
        let ids = value
            .split_whitespace()
            .map(str::parse)
            .collect::<::std::result::Result<Vec<u32>, _>>()?;
        Ok(Self { ids })
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.ids.len() * 4);
        for id in &self.ids {
            let mut word = [0u8; 4];
            LittleEndian::write_u32(&mut word, *id);
            buf.extend_from_slice(&word);
        }
        buf
    }

    pub fn to_attribute_value(&self) -> String {
        join_numbers(self.ids.iter())
    }
}

/// A series of UINT16 values prefixed by a UINT16 count in the binary form.
/// The cdxml form is a plain space separated list without the count.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CdxInt16List {
    pub values: Vec<u16>,
}

impl CdxInt16List {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < 2 {
            return Err(InvalidLengthError::new("INT16ListWithCounts", 2, bytes.len()).into());
        }
        let count = LittleEndian::read_u16(&bytes[0..2]) as usize;
        expect_len("INT16ListWithCounts", &bytes[2..], count * 2)?;
        let values = bytes[2..].chunks_exact(2).map(LittleEndian::read_u16).collect();
        Ok(Self { values })
    }

    pub fn from_attribute(value: &str) -> Result<Self> {
        let values = value
            .split_whitespace()
            .map(str::parse)
            .collect::<::std::result::Result<Vec<u16>, _>>()?;
        Ok(Self { values })
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(2 + self.values.len() * 2);
        let mut word = [0u8; 2];
        LittleEndian::write_u16(&mut word, self.values.len() as u16);
        buf.extend_from_slice(&word);
        for value in &self.values {
            LittleEndian::write_u16(&mut word, *value);
            buf.extend_from_slice(&word);
        }
        buf
    }

    pub fn to_attribute_value(&self) -> String {
        join_numbers(self.values.iter())
    }
}

/// An opaque payload carried through as raw bytes, hex encoded in cdxml.
/// Used for print info blobs and other properties without a published layout.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CdxUnformatted {
    pub bytes: Vec<u8>,
}

impl CdxUnformatted {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self { bytes: bytes.to_vec() }
    }

    pub fn from_attribute(value: &str) -> Result<Self> {
        if value.len() % 2 != 0 {
            return Err(UnknownEnumValueError::new("Unformatted", value).into());
        }
        let mut bytes = Vec::with_capacity(value.len() / 2);
        for idx in (0..value.len()).step_by(2) {
            let byte = u8::from_str_radix(&value[idx..idx + 2], 16)
                .map_err(|_| UnknownEnumValueError::new("Unformatted", value))?;
            bytes.push(byte);
        }
        Ok(Self { bytes })
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    pub fn to_attribute_value(&self) -> String {
        let mut out = String::with_capacity(self.bytes.len() * 2);
        for byte in &self.bytes {
            out.push_str(&format!("{:02x}", byte));
        }
        out
    }
}

/// Bond spacing is stored multiplied by ten in cdx files.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CdxBondSpacing {
    pub value: i16,
}

impl CdxBondSpacing {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        expect_len("CDXBondSpacing", bytes, 2)?;
        Ok(Self {
            value: LittleEndian::read_i16(bytes),
        })
    }

    pub fn from_attribute(value: &str) -> Result<Self> {
        let spacing: f64 = value.parse()?;
        Ok(Self {
            value: (spacing * 10.0) as i16,
        })
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = [0u8; 2];
        LittleEndian::write_i16(&mut buf, self.value);
        buf.to_vec()
    }

    pub fn to_attribute_value(&self) -> String {
        (self.value / 10).to_string()
    }
}

/// Line height in points. The values 0 and 1 are reserved and take the string
/// forms "variable" and "auto" in cdxml.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CdxLineHeight {
    pub value: i16,
}

impl CdxLineHeight {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        expect_len("CDXLineHeight", bytes, 2)?;
        Ok(Self {
            value: LittleEndian::read_i16(bytes),
        })
    }

    pub fn from_attribute(value: &str) -> Result<Self> {
        let value = match value {
            "auto" => 1,
            "variable" => 0,
            other => other.parse()?,
        };
        Ok(Self { value })
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = [0u8; 2];
        LittleEndian::write_i16(&mut buf, self.value);
        buf.to_vec()
    }

    pub fn to_attribute_value(&self) -> String {
        match self.value {
            0 => String::from("variable"),
            1 => String::from("auto"),
            other => other.to_string(),
        }
    }
}

fn join_numbers<'a, T, I>(values: I) -> String
where
    T: ToString + 'a,
    I: Iterator<Item = &'a T>,
{
    values.map(ToString::to_string).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_id_array_roundtrip() {
        let bytes = [5u8, 0, 0, 0, 7, 0, 0, 0];
        let array = CdxObjectIdArray::from_bytes(&bytes).unwrap();
        assert_eq!(array.ids, vec![5, 7]);
        assert_eq!(array.to_attribute_value(), "5 7");
        assert_eq!(array.to_bytes(), bytes.to_vec());
        assert_eq!(CdxObjectIdArray::from_attribute("5 7").unwrap(), array);
    }

    #[test]
    fn test_object_id_array_rejects_odd_length() {
        assert!(CdxObjectIdArray::from_bytes(&[1, 2, 3]).is_err());
    }

    #[test]
    fn test_int16_list_has_count_prefix() {
        let list = CdxInt16List::from_attribute("0 4 9").unwrap();
        assert_eq!(list.to_bytes(), vec![3, 0, 0, 0, 4, 0, 9, 0]);
        let decoded = CdxInt16List::from_bytes(&[3, 0, 0, 0, 4, 0, 9, 0]).unwrap();
        assert_eq!(decoded.to_attribute_value(), "0 4 9");
    }

    #[test]
    fn test_unformatted_hex_transit() {
        let blob = CdxUnformatted::from_bytes(&[0xDE, 0xAD, 0x01]);
        assert_eq!(blob.to_attribute_value(), "dead01");
        assert_eq!(CdxUnformatted::from_attribute("dead01").unwrap(), blob);
        assert!(CdxUnformatted::from_attribute("abc").is_err());
    }

    #[test]
    fn test_bond_spacing_scale() {
        let spacing = CdxBondSpacing::from_attribute("18").unwrap();
        assert_eq!(spacing.value, 180);
        assert_eq!(spacing.to_attribute_value(), "18");
    }

    #[test]
    fn test_line_height_reserved_values() {
        assert_eq!(CdxLineHeight::from_attribute("auto").unwrap().value, 1);
        assert_eq!(CdxLineHeight::from_attribute("variable").unwrap().value, 0);
        assert_eq!(CdxLineHeight { value: 14 }.to_attribute_value(), "14");
        assert_eq!(CdxLineHeight { value: 1 }.to_attribute_value(), "auto");
    }
}
