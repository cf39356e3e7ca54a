use super::{expect_len, format_float, round2, Result};
use byteorder::{ByteOrder, LittleEndian};
use log::warn;

/// A coordinate in cdx units of 1/65536 point, stored as a signed INT32.
///
/// The cdxml form is scaled so that one unit is one point and is written as a
/// decimal number with at most two decimal places. ChemDraw has been observed to
/// write cdxml coordinates outside the INT32 range (WindowPosition on multi
/// display setups); those saturate to the representable range when converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CdxCoordinate {
    pub units: i32,
}

const CDXML_CONVERSION_FACTOR: f64 = 65536.0;

impl CdxCoordinate {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        expect_len("CDXCoordinate", bytes, 4)?;
        Ok(Self {
            units: LittleEndian::read_i32(bytes),
        })
    }

    pub fn from_attribute(value: &str) -> Result<Self> {
        let points: f64 = value.parse()?;
        let units = points * CDXML_CONVERSION_FACTOR;
        let units = if units > f64::from(i32::max_value()) {
            warn!(
                "Coordinate value '{}' exceeds maximum value for cdx files. Reducing value to maximum allowed value.",
                value
            );
            i32::max_value()
        } else if units < f64::from(i32::min_value()) {
            warn!(
                "Coordinate value '{}' exceeds minimum value for cdx files. Reducing value to minimum allowed value.",
                value
            );
            i32::min_value()
        } else {
            units as i32
        };
        Ok(Self { units })
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = [0u8; 4];
        LittleEndian::write_i32(&mut buf, self.units);
        buf.to_vec()
    }

    pub fn to_attribute_value(&self) -> String {
        format_float(round2(f64::from(self.units) / CDXML_CONVERSION_FACTOR))
    }
}

/// A 2D point. The cdx form stores the y coordinate before the x coordinate,
/// the cdxml form is "x y". The inversion is the documented wire contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CdxPoint2D {
    pub x: CdxCoordinate,
    pub y: CdxCoordinate,
}

impl CdxPoint2D {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        expect_len("CDXPoint2D", bytes, 8)?;
        Ok(Self {
            y: CdxCoordinate::from_bytes(&bytes[0..4])?,
            x: CdxCoordinate::from_bytes(&bytes[4..8])?,
        })
    }

    pub fn from_attribute(value: &str) -> Result<Self> {
        let coords = split_coordinates("CDXPoint2D", value, 2)?;
        Ok(Self {
            x: CdxCoordinate::from_attribute(coords[0])?,
            y: CdxCoordinate::from_attribute(coords[1])?,
        })
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = self.y.to_bytes();
        buf.extend_from_slice(&self.x.to_bytes());
        buf
    }

    pub fn to_attribute_value(&self) -> String {
        format!("{} {}", self.x.to_attribute_value(), self.y.to_attribute_value())
    }
}

/// A 3D point, stored z, y, x in cdx files and written "x y z" in cdxml.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CdxPoint3D {
    pub x: CdxCoordinate,
    pub y: CdxCoordinate,
    pub z: CdxCoordinate,
}

impl CdxPoint3D {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        expect_len("CDXPoint3D", bytes, 12)?;
        Ok(Self {
            z: CdxCoordinate::from_bytes(&bytes[0..4])?,
            y: CdxCoordinate::from_bytes(&bytes[4..8])?,
            x: CdxCoordinate::from_bytes(&bytes[8..12])?,
        })
    }

    pub fn from_attribute(value: &str) -> Result<Self> {
        let coords = split_coordinates("CDXPoint3D", value, 3)?;
        Ok(Self {
            x: CdxCoordinate::from_attribute(coords[0])?,
            y: CdxCoordinate::from_attribute(coords[1])?,
            z: CdxCoordinate::from_attribute(coords[2])?,
        })
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = self.z.to_bytes();
        buf.extend_from_slice(&self.y.to_bytes());
        buf.extend_from_slice(&self.x.to_bytes());
        buf
    }

    pub fn to_attribute_value(&self) -> String {
        format!(
            "{} {} {}",
            self.x.to_attribute_value(),
            self.y.to_attribute_value(),
            self.z.to_attribute_value()
        )
    }
}

/// A rectangle, stored top, left, bottom, right in cdx files and written
/// "left top right bottom" in cdxml.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CdxRectangle {
    pub top: CdxCoordinate,
    pub left: CdxCoordinate,
    pub bottom: CdxCoordinate,
    pub right: CdxCoordinate,
}

impl CdxRectangle {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        expect_len("CDXRectangle", bytes, 16)?;
        Ok(Self {
            top: CdxCoordinate::from_bytes(&bytes[0..4])?,
            left: CdxCoordinate::from_bytes(&bytes[4..8])?,
            bottom: CdxCoordinate::from_bytes(&bytes[8..12])?,
            right: CdxCoordinate::from_bytes(&bytes[12..16])?,
        })
    }

    pub fn from_attribute(value: &str) -> Result<Self> {
        let coords = split_coordinates("CDXRectangle", value, 4)?;
        Ok(Self {
            left: CdxCoordinate::from_attribute(coords[0])?,
            top: CdxCoordinate::from_attribute(coords[1])?,
            right: CdxCoordinate::from_attribute(coords[2])?,
            bottom: CdxCoordinate::from_attribute(coords[3])?,
        })
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = self.top.to_bytes();
        buf.extend_from_slice(&self.left.to_bytes());
        buf.extend_from_slice(&self.bottom.to_bytes());
        buf.extend_from_slice(&self.right.to_bytes());
        buf
    }

    pub fn to_attribute_value(&self) -> String {
        format!(
            "{} {} {} {}",
            self.left.to_attribute_value(),
            self.top.to_attribute_value(),
            self.right.to_attribute_value(),
            self.bottom.to_attribute_value()
        )
    }
}

fn split_coordinates<'a>(type_name: &'static str, value: &'a str, expected: usize) -> Result<Vec<&'a str>> {
    let coords: Vec<&str> = value.split_whitespace().collect();
    if coords.len() != expected {
        return Err(crate::error::UnknownEnumValueError::new(type_name, value).into());
    }
    Ok(coords)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_one_inch() {
        // 72 points, the documented example
        let coord = CdxCoordinate::from_attribute("72").unwrap();
        assert_eq!(coord.units, 4_718_592);
        assert_eq!(coord.to_bytes(), vec![0x00, 0x00, 0x48, 0x00]);
        assert_eq!(coord.to_attribute_value(), "72");
    }

    #[test]
    fn test_coordinate_saturates_out_of_range() {
        let coord = CdxCoordinate::from_attribute("99999999").unwrap();
        assert_eq!(coord.units, i32::max_value());
        let coord = CdxCoordinate::from_attribute("-99999999").unwrap();
        assert_eq!(coord.units, i32::min_value());
    }

    #[test]
    fn test_point2d_axis_inversion() {
        let point = CdxPoint2D::from_attribute("72 144").unwrap();
        assert_eq!(
            point.to_bytes(),
            vec![0x00, 0x00, 0x90, 0x00, 0x00, 0x00, 0x48, 0x00]
        );
        let decoded =
            CdxPoint2D::from_bytes(&[0x00, 0x00, 0x90, 0x00, 0x00, 0x00, 0x48, 0x00]).unwrap();
        assert_eq!(decoded.to_attribute_value(), "72 144");
    }

    #[test]
    fn test_point3d_binary_order_is_z_y_x() {
        let point = CdxPoint3D::from_attribute("72 144 216").unwrap();
        let bytes = point.to_bytes();
        assert_eq!(&bytes[0..4], &[0x00, 0x00, 0xD8, 0x00]);
        assert_eq!(&bytes[8..12], &[0x00, 0x00, 0x48, 0x00]);
        assert_eq!(
            CdxPoint3D::from_bytes(&bytes).unwrap().to_attribute_value(),
            "72 144 216"
        );
    }

    #[test]
    fn test_rectangle_order_inversion() {
        // top 1 inch, left 2, bottom 3, right 4
        let bytes = [
            0x00, 0x00, 0x48, 0x00, 0x00, 0x00, 0x90, 0x00, 0x00, 0x00, 0xD8, 0x00, 0x00, 0x00,
            0x20, 0x01,
        ];
        let rect = CdxRectangle::from_bytes(&bytes).unwrap();
        assert_eq!(rect.to_attribute_value(), "144 72 288 216");
        assert_eq!(CdxRectangle::from_attribute("144 72 288 216").unwrap().to_bytes(), bytes.to_vec());
    }

    #[test]
    fn test_coordinate_two_decimal_rounding() {
        let coord = CdxCoordinate { units: 100_000 };
        assert_eq!(coord.to_attribute_value(), "1.53");
    }
}
