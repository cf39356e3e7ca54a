//! Value kinds of the cdx format: every property payload is decoded into one of
//! the types in this module and can be converted both to its binary form and to
//! the textual form used for cdxml attributes.

pub mod enums;
pub mod geometry;
pub mod numeric;
pub mod text;

pub use self::enums::*;
pub use self::geometry::{CdxCoordinate, CdxPoint2D, CdxPoint3D, CdxRectangle};
pub use self::numeric::{CdxBondSpacing, CdxInt16List, CdxLineHeight, CdxObjectIdArray, CdxUnformatted};
pub use self::text::{CdxColorTable, CdxFontStyle, CdxFontTable, CdxString, Color, Font, DEFAULT_FONT_SIZE};

use crate::error::{InvalidBooleanError, InvalidLengthError, UnknownEnumValueError};
use byteorder::{ByteOrder, LittleEndian};
use std::{error::Error, str::FromStr};

pub type Result<T> = ::std::result::Result<T, Box<dyn Error>>;

/// Discriminant for every value kind a property descriptor can reference.
///
/// The tag catalog stores one of these per attribute tag; dispatch over the kind
/// is exhaustive, so adding a kind without wiring its codec does not compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Int8,
    Uint8,
    Int16,
    Uint16,
    Int32,
    Uint32,
    Coordinate,
    Point2D,
    Point3D,
    Rectangle,
    Boolean,
    BooleanImplied,
    String,
    Utf8String,
    ObjectIdArray,
    Int16ListWithCounts,
    Unformatted,
    FontStyle,
    FontTable,
    ColorTable,
    BondSpacing,
    LineHeight,
    BracketUsage,
    BondOrder,
    BondDisplay,
    DoubleBondPosition,
    AtomStereo,
    BondStereo,
    NodeType,
    AtomGeometry,
    Justification,
    LabelAlignment,
    GraphicType,
    ArrowType,
    ArrowHeadType,
    ArrowHeadPosition,
    FillType,
    OvalType,
    RectangleType,
    LineType,
    OrbitalType,
    SymbolType,
    BracketType,
    TagType,
    PositioningType,
    PolymerRepeatPattern,
    PolymerFlipType,
    ConstraintType,
    AminoAcidTermini,
    AutonumberStyle,
}

/// A decoded property value of any kind.
#[derive(Debug, Clone, PartialEq)]
pub enum CdxValue {
    Int8(i8),
    Uint8(u8),
    Int16(i16),
    Uint16(u16),
    Int32(i32),
    Uint32(u32),
    Coordinate(CdxCoordinate),
    Point2D(CdxPoint2D),
    Point3D(CdxPoint3D),
    Rectangle(CdxRectangle),
    Boolean(bool),
    BooleanImplied(bool),
    String(CdxString),
    ObjectIdArray(CdxObjectIdArray),
    Int16List(CdxInt16List),
    Unformatted(CdxUnformatted),
    FontStyle(CdxFontStyle),
    FontTable(CdxFontTable),
    ColorTable(CdxColorTable),
    BondSpacing(CdxBondSpacing),
    LineHeight(CdxLineHeight),
    BracketUsage(CdxBracketUsage),
    BondOrder(CdxBondOrder),
    BondDisplay(CdxBondDisplay),
    DoubleBondPosition(CdxDoubleBondPosition),
    AtomStereo(CdxAtomStereo),
    BondStereo(CdxBondStereo),
    NodeType(CdxNodeType),
    AtomGeometry(CdxAtomGeometry),
    Justification(CdxJustification),
    LabelAlignment(CdxLabelAlignment),
    GraphicType(CdxGraphicType),
    ArrowType(CdxArrowType),
    ArrowHeadType(CdxArrowHeadType),
    ArrowHeadPosition(CdxArrowHeadPosition),
    FillType(CdxFillType),
    OvalType(CdxOvalType),
    RectangleType(CdxRectangleType),
    LineType(CdxLineType),
    OrbitalType(CdxOrbitalType),
    SymbolType(CdxSymbolType),
    BracketType(CdxBracketType),
    TagType(CdxTagType),
    PositioningType(CdxPositioningType),
    PolymerRepeatPattern(CdxPolymerRepeatPattern),
    PolymerFlipType(CdxPolymerFlipType),
    ConstraintType(CdxConstraintType),
    AminoAcidTermini(CdxAminoAcidTermini),
    AutonumberStyle(CdxAutonumberStyle),
}

pub(crate) fn expect_len(type_name: &'static str, bytes: &[u8], expected: usize) -> Result<()> {
    if bytes.len() != expected {
        Err(InvalidLengthError::new(type_name, expected, bytes.len()).into())
    } else {
        Ok(())
    }
}

fn read_enum8(type_name: &'static str, bytes: &[u8]) -> Result<i64> {
    expect_len(type_name, bytes, 1)?;
    Ok(i64::from(bytes[0] as i8))
}

fn read_enum16(type_name: &'static str, bytes: &[u8]) -> Result<i64> {
    expect_len(type_name, bytes, 2)?;
    Ok(i64::from(LittleEndian::read_i16(bytes)))
}

/// ChemDraw 8 wrote some 2-byte enums as a single byte, so both widths are accepted.
fn read_enum16_lenient(type_name: &'static str, bytes: &[u8]) -> Result<i64> {
    match bytes.len() {
        1 => Ok(i64::from(bytes[0] as i8)),
        2 => Ok(i64::from(LittleEndian::read_i16(bytes))),
        found => Err(InvalidLengthError::new(type_name, 2, found).into()),
    }
}

fn enum8_bytes(value: i64) -> Vec<u8> {
    vec![value as i8 as u8]
}

fn enum16_bytes(value: i64) -> Vec<u8> {
    let mut buf = [0u8; 2];
    LittleEndian::write_i16(&mut buf, value as i16);
    buf.to_vec()
}

fn parse_enum<T>(type_name: &'static str, value: &str) -> Result<T>
where
    T: FromStr,
{
    T::from_str(value).map_err(|_| UnknownEnumValueError::new(type_name, value).into())
}

fn parse_bool(value: &str) -> Result<bool> {
    match value {
        "yes" => Ok(true),
        "no" => Ok(false),
        other => Err(InvalidBooleanError::new(other).into()),
    }
}

impl CdxValue {
    /// Decodes a property payload. The payload slice is exactly the length-prefixed
    /// span from the stream; decoding never reads beyond it.
    pub fn from_bytes(kind: ValueKind, bytes: &[u8]) -> Result<CdxValue> {
        let value = match kind {
            ValueKind::Int8 => {
                expect_len("INT8", bytes, 1)?;
                CdxValue::Int8(bytes[0] as i8)
            }
            ValueKind::Uint8 => {
                expect_len("UINT8", bytes, 1)?;
                CdxValue::Uint8(bytes[0])
            }
            ValueKind::Int16 => {
                expect_len("INT16", bytes, 2)?;
                CdxValue::Int16(LittleEndian::read_i16(bytes))
            }
            ValueKind::Uint16 => {
                expect_len("UINT16", bytes, 2)?;
                CdxValue::Uint16(LittleEndian::read_u16(bytes))
            }
            ValueKind::Int32 => {
                expect_len("INT32", bytes, 4)?;
                CdxValue::Int32(LittleEndian::read_i32(bytes))
            }
            ValueKind::Uint32 => {
                expect_len("UINT32", bytes, 4)?;
                CdxValue::Uint32(LittleEndian::read_u32(bytes))
            }
            ValueKind::Coordinate => CdxValue::Coordinate(CdxCoordinate::from_bytes(bytes)?),
            ValueKind::Point2D => CdxValue::Point2D(CdxPoint2D::from_bytes(bytes)?),
            ValueKind::Point3D => CdxValue::Point3D(CdxPoint3D::from_bytes(bytes)?),
            ValueKind::Rectangle => CdxValue::Rectangle(CdxRectangle::from_bytes(bytes)?),
            ValueKind::Boolean => {
                expect_len("CDXBoolean", bytes, 1)?;
                CdxValue::Boolean(bytes[0] != 0)
            }
            ValueKind::BooleanImplied => {
                expect_len("CDXBooleanImplied", bytes, 0)?;
                CdxValue::BooleanImplied(true)
            }
            ValueKind::String => CdxValue::String(CdxString::from_bytes(bytes, false)?),
            ValueKind::Utf8String => CdxValue::String(CdxString::from_bytes(bytes, true)?),
            ValueKind::ObjectIdArray => CdxValue::ObjectIdArray(CdxObjectIdArray::from_bytes(bytes)?),
            ValueKind::Int16ListWithCounts => CdxValue::Int16List(CdxInt16List::from_bytes(bytes)?),
            ValueKind::Unformatted => CdxValue::Unformatted(CdxUnformatted::from_bytes(bytes)),
            ValueKind::FontStyle => CdxValue::FontStyle(CdxFontStyle::from_bytes(bytes)?),
            ValueKind::FontTable => CdxValue::FontTable(CdxFontTable::from_bytes(bytes)?),
            ValueKind::ColorTable => CdxValue::ColorTable(CdxColorTable::from_bytes(bytes)?),
            ValueKind::BondSpacing => CdxValue::BondSpacing(CdxBondSpacing::from_bytes(bytes)?),
            ValueKind::LineHeight => CdxValue::LineHeight(CdxLineHeight::from_bytes(bytes)?),
            ValueKind::BracketUsage => CdxValue::BracketUsage(CdxBracketUsage::from_bytes(bytes)?),
            ValueKind::BondOrder => CdxValue::BondOrder(CdxBondOrder::from_bytes(bytes)?),
            ValueKind::BondDisplay => CdxValue::BondDisplay(CdxBondDisplay::from_value(read_enum16(
                "CDXBondDisplay",
                bytes,
            )?)?),
            ValueKind::DoubleBondPosition => CdxValue::DoubleBondPosition(
                CdxDoubleBondPosition::from_value(read_enum16("CDXDoubleBondPosition", bytes)?)?,
            ),
            ValueKind::AtomStereo => {
                CdxValue::AtomStereo(CdxAtomStereo::from_value(read_enum8("CDXAtomStereo", bytes)?)?)
            }
            ValueKind::BondStereo => {
                CdxValue::BondStereo(CdxBondStereo::from_value(read_enum8("CDXBondStereo", bytes)?)?)
            }
            ValueKind::NodeType => {
                CdxValue::NodeType(CdxNodeType::from_value(read_enum16("CDXNodeType", bytes)?)?)
            }
            ValueKind::AtomGeometry => CdxValue::AtomGeometry(CdxAtomGeometry::from_value(read_enum8(
                "CDXAtomGeometry",
                bytes,
            )?)?),
            ValueKind::Justification => CdxValue::Justification(CdxJustification::from_value(
                read_enum8("CDXJustification", bytes)?,
            )?),
            ValueKind::LabelAlignment => CdxValue::LabelAlignment(CdxLabelAlignment::from_value(
                read_enum8("CDXLabelAlignment", bytes)?,
            )?),
            ValueKind::GraphicType => CdxValue::GraphicType(CdxGraphicType::from_value(read_enum16(
                "CDXGraphicType",
                bytes,
            )?)?),
            ValueKind::ArrowType => {
                CdxValue::ArrowType(CdxArrowType::from_value(read_enum16("CDXArrowType", bytes)?)?)
            }
            ValueKind::ArrowHeadType => CdxValue::ArrowHeadType(CdxArrowHeadType::from_value(
                read_enum16("CDXArrowHeadType", bytes)?,
            )?),
            ValueKind::ArrowHeadPosition => CdxValue::ArrowHeadPosition(
                CdxArrowHeadPosition::from_value(read_enum16("CDXArrowHeadPosition", bytes)?)?,
            ),
            ValueKind::FillType => {
                CdxValue::FillType(CdxFillType::from_value(read_enum16("CDXFillType", bytes)?)?)
            }
            ValueKind::OvalType => CdxValue::OvalType(CdxOvalType::from_value(read_enum16_lenient(
                "CDXOvalType",
                bytes,
            )?)?),
            ValueKind::RectangleType => CdxValue::RectangleType(CdxRectangleType::from_value(
                read_enum16("CDXRectangleType", bytes)?,
            )?),
            ValueKind::LineType => {
                CdxValue::LineType(CdxLineType::from_value(read_enum16("CDXLineType", bytes)?)?)
            }
            ValueKind::OrbitalType => CdxValue::OrbitalType(CdxOrbitalType::from_value(read_enum16(
                "CDXOrbitalType",
                bytes,
            )?)?),
            ValueKind::SymbolType => {
                CdxValue::SymbolType(CdxSymbolType::from_value(read_enum16("CDXSymbolType", bytes)?)?)
            }
            ValueKind::BracketType => CdxValue::BracketType(CdxBracketType::from_value(read_enum16(
                "CDXBracketType",
                bytes,
            )?)?),
            ValueKind::TagType => {
                CdxValue::TagType(CdxTagType::from_value(read_enum16("CDXTagType", bytes)?)?)
            }
            ValueKind::PositioningType => CdxValue::PositioningType(CdxPositioningType::from_value(
                read_enum16("CDXPositioningType", bytes)?,
            )?),
            ValueKind::PolymerRepeatPattern => CdxValue::PolymerRepeatPattern(
                CdxPolymerRepeatPattern::from_value(read_enum8("CDXPolymerRepeatPattern", bytes)?)?,
            ),
            ValueKind::PolymerFlipType => CdxValue::PolymerFlipType(CdxPolymerFlipType::from_value(
                read_enum8("CDXPolymerFlipType", bytes)?,
            )?),
            ValueKind::ConstraintType => CdxValue::ConstraintType(CdxConstraintType::from_value(
                read_enum8("CDXConstraintType", bytes)?,
            )?),
            ValueKind::AminoAcidTermini => CdxValue::AminoAcidTermini(CdxAminoAcidTermini::from_value(
                read_enum8("CDXAminoAcidTermini", bytes)?,
            )?),
            ValueKind::AutonumberStyle => CdxValue::AutonumberStyle(CdxAutonumberStyle::from_value(
                read_enum8("CDXAutonumberStyle", bytes)?,
            )?),
        };
        Ok(value)
    }

    /// Parses the cdxml attribute text form of a value.
    pub fn from_attribute(kind: ValueKind, value: &str) -> Result<CdxValue> {
        let parsed = match kind {
            ValueKind::Int8 => CdxValue::Int8(value.parse()?),
            ValueKind::Uint8 => CdxValue::Uint8(value.parse()?),
            ValueKind::Int16 => CdxValue::Int16(value.parse()?),
            ValueKind::Uint16 => CdxValue::Uint16(value.parse()?),
            ValueKind::Int32 => CdxValue::Int32(value.parse()?),
            ValueKind::Uint32 => CdxValue::Uint32(value.parse()?),
            ValueKind::Coordinate => CdxValue::Coordinate(CdxCoordinate::from_attribute(value)?),
            ValueKind::Point2D => CdxValue::Point2D(CdxPoint2D::from_attribute(value)?),
            ValueKind::Point3D => CdxValue::Point3D(CdxPoint3D::from_attribute(value)?),
            ValueKind::Rectangle => CdxValue::Rectangle(CdxRectangle::from_attribute(value)?),
            ValueKind::Boolean => CdxValue::Boolean(parse_bool(value)?),
            ValueKind::BooleanImplied => CdxValue::BooleanImplied(parse_bool(value)?),
            ValueKind::String => CdxValue::String(CdxString::from_attribute(value)),
            ValueKind::Utf8String => CdxValue::String(CdxString::from_attribute(value)),
            ValueKind::ObjectIdArray => CdxValue::ObjectIdArray(CdxObjectIdArray::from_attribute(value)?),
            ValueKind::Int16ListWithCounts => CdxValue::Int16List(CdxInt16List::from_attribute(value)?),
            ValueKind::Unformatted => CdxValue::Unformatted(CdxUnformatted::from_attribute(value)?),
            ValueKind::FontStyle => return Err(UnknownEnumValueError::new("CDXFontStyle", value).into()),
            ValueKind::FontTable => return Err(UnknownEnumValueError::new("CDXFontTable", value).into()),
            ValueKind::ColorTable => {
                return Err(UnknownEnumValueError::new("CDXColorTable", value).into())
            }
            ValueKind::BondSpacing => CdxValue::BondSpacing(CdxBondSpacing::from_attribute(value)?),
            ValueKind::LineHeight => CdxValue::LineHeight(CdxLineHeight::from_attribute(value)?),
            ValueKind::BracketUsage => CdxValue::BracketUsage(CdxBracketUsage::from_attribute(value)?),
            ValueKind::BondOrder => CdxValue::BondOrder(CdxBondOrder::from_attribute(value)?),
            ValueKind::BondDisplay => CdxValue::BondDisplay(parse_enum("CDXBondDisplay", value)?),
            ValueKind::DoubleBondPosition => {
                CdxValue::DoubleBondPosition(parse_enum("CDXDoubleBondPosition", value)?)
            }
            ValueKind::AtomStereo => CdxValue::AtomStereo(parse_enum("CDXAtomStereo", value)?),
            ValueKind::BondStereo => CdxValue::BondStereo(parse_enum("CDXBondStereo", value)?),
            ValueKind::NodeType => CdxValue::NodeType(parse_enum("CDXNodeType", value)?),
            ValueKind::AtomGeometry => CdxValue::AtomGeometry(parse_enum("CDXAtomGeometry", value)?),
            ValueKind::Justification => CdxValue::Justification(parse_enum("CDXJustification", value)?),
            ValueKind::LabelAlignment => {
                CdxValue::LabelAlignment(parse_enum("CDXLabelAlignment", value)?)
            }
            ValueKind::GraphicType => CdxValue::GraphicType(parse_enum("CDXGraphicType", value)?),
            ValueKind::ArrowType => CdxValue::ArrowType(parse_enum("CDXArrowType", value)?),
            ValueKind::ArrowHeadType => CdxValue::ArrowHeadType(parse_enum("CDXArrowHeadType", value)?),
            ValueKind::ArrowHeadPosition => {
                CdxValue::ArrowHeadPosition(parse_enum("CDXArrowHeadPosition", value)?)
            }
            ValueKind::FillType => CdxValue::FillType(parse_enum("CDXFillType", value)?),
            ValueKind::OvalType => CdxValue::OvalType(parse_enum("CDXOvalType", value)?),
            ValueKind::RectangleType => {
                CdxValue::RectangleType(parse_enum("CDXRectangleType", value)?)
            }
            ValueKind::LineType => CdxValue::LineType(parse_enum("CDXLineType", value)?),
            ValueKind::OrbitalType => CdxValue::OrbitalType(parse_enum("CDXOrbitalType", value)?),
            ValueKind::SymbolType => CdxValue::SymbolType(parse_enum("CDXSymbolType", value)?),
            ValueKind::BracketType => CdxValue::BracketType(parse_enum("CDXBracketType", value)?),
            ValueKind::TagType => CdxValue::TagType(parse_enum("CDXTagType", value)?),
            ValueKind::PositioningType => {
                CdxValue::PositioningType(parse_enum("CDXPositioningType", value)?)
            }
            ValueKind::PolymerRepeatPattern => {
                CdxValue::PolymerRepeatPattern(parse_enum("CDXPolymerRepeatPattern", value)?)
            }
            ValueKind::PolymerFlipType => {
                CdxValue::PolymerFlipType(parse_enum("CDXPolymerFlipType", value)?)
            }
            ValueKind::ConstraintType => {
                CdxValue::ConstraintType(parse_enum("CDXConstraintType", value)?)
            }
            ValueKind::AminoAcidTermini => {
                CdxValue::AminoAcidTermini(parse_enum("CDXAminoAcidTermini", value)?)
            }
            ValueKind::AutonumberStyle => {
                CdxValue::AutonumberStyle(parse_enum("CDXAutonumberStyle", value)?)
            }
        };
        Ok(parsed)
    }

    /// Serializes the value to its binary payload.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let bytes = match self {
            CdxValue::Int8(v) => vec![*v as u8],
            CdxValue::Uint8(v) => vec![*v],
            CdxValue::Int16(v) => {
                let mut buf = [0u8; 2];
                LittleEndian::write_i16(&mut buf, *v);
                buf.to_vec()
            }
            CdxValue::Uint16(v) => {
                let mut buf = [0u8; 2];
                LittleEndian::write_u16(&mut buf, *v);
                buf.to_vec()
            }
            CdxValue::Int32(v) => {
                let mut buf = [0u8; 4];
                LittleEndian::write_i32(&mut buf, *v);
                buf.to_vec()
            }
            CdxValue::Uint32(v) => {
                let mut buf = [0u8; 4];
                LittleEndian::write_u32(&mut buf, *v);
                buf.to_vec()
            }
            CdxValue::Coordinate(v) => v.to_bytes(),
            CdxValue::Point2D(v) => v.to_bytes(),
            CdxValue::Point3D(v) => v.to_bytes(),
            CdxValue::Rectangle(v) => v.to_bytes(),
            CdxValue::Boolean(v) => vec![if *v { 1 } else { 0 }],
            CdxValue::BooleanImplied(v) => {
                if !*v {
                    // presence marks the true value, a false value must be omitted
                    return Err(InvalidBooleanError::new("no").into());
                }
                Vec::new()
            }
            CdxValue::String(v) => v.to_bytes(),
            CdxValue::ObjectIdArray(v) => v.to_bytes(),
            CdxValue::Int16List(v) => v.to_bytes(),
            CdxValue::Unformatted(v) => v.to_bytes(),
            CdxValue::FontStyle(v) => v.to_bytes(),
            CdxValue::FontTable(v) => v.to_bytes()?,
            CdxValue::ColorTable(v) => v.to_bytes(),
            CdxValue::BondSpacing(v) => v.to_bytes(),
            CdxValue::LineHeight(v) => v.to_bytes(),
            CdxValue::BracketUsage(v) => v.to_bytes(),
            CdxValue::BondOrder(v) => v.to_bytes(),
            CdxValue::BondDisplay(v) => enum16_bytes(v.value()),
            CdxValue::DoubleBondPosition(v) => enum16_bytes(v.value()),
            CdxValue::AtomStereo(v) => enum8_bytes(v.value()),
            CdxValue::BondStereo(v) => enum8_bytes(v.value()),
            CdxValue::NodeType(v) => enum16_bytes(v.value()),
            CdxValue::AtomGeometry(v) => enum8_bytes(v.value()),
            CdxValue::Justification(v) => enum8_bytes(v.value()),
            CdxValue::LabelAlignment(v) => enum8_bytes(v.value()),
            CdxValue::GraphicType(v) => enum16_bytes(v.value()),
            CdxValue::ArrowType(v) => enum16_bytes(v.value()),
            CdxValue::ArrowHeadType(v) => enum16_bytes(v.value()),
            CdxValue::ArrowHeadPosition(v) => enum16_bytes(v.value()),
            CdxValue::FillType(v) => enum16_bytes(v.value()),
            CdxValue::OvalType(v) => enum16_bytes(v.value()),
            CdxValue::RectangleType(v) => enum16_bytes(v.value()),
            CdxValue::LineType(v) => enum16_bytes(v.value()),
            CdxValue::OrbitalType(v) => enum16_bytes(v.value()),
            CdxValue::SymbolType(v) => enum16_bytes(v.value()),
            CdxValue::BracketType(v) => enum16_bytes(v.value()),
            CdxValue::TagType(v) => enum16_bytes(v.value()),
            CdxValue::PositioningType(v) => enum16_bytes(v.value()),
            CdxValue::PolymerRepeatPattern(v) => enum8_bytes(v.value()),
            CdxValue::PolymerFlipType(v) => enum8_bytes(v.value()),
            CdxValue::ConstraintType(v) => enum8_bytes(v.value()),
            CdxValue::AminoAcidTermini(v) => enum8_bytes(v.value()),
            CdxValue::AutonumberStyle(v) => enum8_bytes(v.value()),
        };
        Ok(bytes)
    }

    /// Formats the value as cdxml attribute text.
    pub fn to_attribute_value(&self) -> String {
        match self {
            CdxValue::Int8(v) => v.to_string(),
            CdxValue::Uint8(v) => v.to_string(),
            CdxValue::Int16(v) => v.to_string(),
            CdxValue::Uint16(v) => v.to_string(),
            CdxValue::Int32(v) => v.to_string(),
            CdxValue::Uint32(v) => v.to_string(),
            CdxValue::Coordinate(v) => v.to_attribute_value(),
            CdxValue::Point2D(v) => v.to_attribute_value(),
            CdxValue::Point3D(v) => v.to_attribute_value(),
            CdxValue::Rectangle(v) => v.to_attribute_value(),
            CdxValue::Boolean(v) | CdxValue::BooleanImplied(v) => {
                String::from(if *v { "yes" } else { "no" })
            }
            CdxValue::String(v) => v.value.clone(),
            CdxValue::ObjectIdArray(v) => v.to_attribute_value(),
            CdxValue::Int16List(v) => v.to_attribute_value(),
            CdxValue::Unformatted(v) => v.to_attribute_value(),
            CdxValue::FontStyle(v) => v.to_attribute_value(),
            CdxValue::FontTable(v) => v.to_element().to_xml(),
            CdxValue::ColorTable(v) => v.to_element().to_xml(),
            CdxValue::BondSpacing(v) => v.to_attribute_value(),
            CdxValue::LineHeight(v) => v.to_attribute_value(),
            CdxValue::BracketUsage(v) => String::from(v.as_attribute_value()),
            CdxValue::BondOrder(v) => String::from(v.as_attribute_value()),
            CdxValue::BondDisplay(v) => String::from(v.as_attribute_value()),
            CdxValue::DoubleBondPosition(v) => String::from(v.as_attribute_value()),
            CdxValue::AtomStereo(v) => String::from(v.as_attribute_value()),
            CdxValue::BondStereo(v) => String::from(v.as_attribute_value()),
            CdxValue::NodeType(v) => String::from(v.as_attribute_value()),
            CdxValue::AtomGeometry(v) => String::from(v.as_attribute_value()),
            CdxValue::Justification(v) => String::from(v.as_attribute_value()),
            CdxValue::LabelAlignment(v) => String::from(v.as_attribute_value()),
            CdxValue::GraphicType(v) => String::from(v.as_attribute_value()),
            CdxValue::ArrowType(v) => String::from(v.as_attribute_value()),
            CdxValue::ArrowHeadType(v) => String::from(v.as_attribute_value()),
            CdxValue::ArrowHeadPosition(v) => String::from(v.as_attribute_value()),
            CdxValue::FillType(v) => String::from(v.as_attribute_value()),
            CdxValue::OvalType(v) => String::from(v.as_attribute_value()),
            CdxValue::RectangleType(v) => String::from(v.as_attribute_value()),
            CdxValue::LineType(v) => String::from(v.as_attribute_value()),
            CdxValue::OrbitalType(v) => String::from(v.as_attribute_value()),
            CdxValue::SymbolType(v) => String::from(v.as_attribute_value()),
            CdxValue::BracketType(v) => String::from(v.as_attribute_value()),
            CdxValue::TagType(v) => String::from(v.as_attribute_value()),
            CdxValue::PositioningType(v) => String::from(v.as_attribute_value()),
            CdxValue::PolymerRepeatPattern(v) => String::from(v.as_attribute_value()),
            CdxValue::PolymerFlipType(v) => String::from(v.as_attribute_value()),
            CdxValue::ConstraintType(v) => String::from(v.as_attribute_value()),
            CdxValue::AminoAcidTermini(v) => String::from(v.as_attribute_value()),
            CdxValue::AutonumberStyle(v) => String::from(v.as_attribute_value()),
        }
    }
}

/// Formats a float the way cdxml attributes expect it: shortest representation,
/// no trailing zeros, so 72.0 becomes "72" and 14.4 stays "14.4".
pub(crate) fn format_float(value: f64) -> String {
    if value == value.trunc() && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Rounds to two decimal places, the resolution used for coordinates in cdxml.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_width_ints_roundtrip() {
        let value = CdxValue::from_bytes(ValueKind::Int16, &[0x2C, 0x01]).unwrap();
        assert_eq!(value, CdxValue::Int16(300));
        assert_eq!(value.to_attribute_value(), "300");
        assert_eq!(value.to_bytes().unwrap(), vec![0x2C, 0x01]);

        let reparsed = CdxValue::from_attribute(ValueKind::Int16, "300").unwrap();
        assert_eq!(reparsed, value);
    }

    #[test]
    fn test_wrong_length_is_rejected() {
        assert!(CdxValue::from_bytes(ValueKind::Int16, &[1]).is_err());
        assert!(CdxValue::from_bytes(ValueKind::Uint32, &[1, 2, 3]).is_err());
        assert!(CdxValue::from_bytes(ValueKind::Boolean, &[]).is_err());
    }

    #[test]
    fn test_implied_boolean_contract() {
        let value = CdxValue::from_bytes(ValueKind::BooleanImplied, &[]).unwrap();
        assert_eq!(value, CdxValue::BooleanImplied(true));
        assert_eq!(value.to_attribute_value(), "yes");
        assert!(value.to_bytes().unwrap().is_empty());

        let absent = CdxValue::from_attribute(ValueKind::BooleanImplied, "no").unwrap();
        assert!(absent.to_bytes().is_err());
    }

    #[test]
    fn test_boolean_text_forms() {
        assert_eq!(
            CdxValue::from_attribute(ValueKind::Boolean, "yes").unwrap(),
            CdxValue::Boolean(true)
        );
        assert!(CdxValue::from_attribute(ValueKind::Boolean, "true").is_err());
    }

    #[test]
    fn test_format_float_trims_trailing_zeros() {
        assert_eq!(format_float(72.0), "72");
        assert_eq!(format_float(14.4), "14.4");
        assert_eq!(format_float(-2.25), "-2.25");
    }
}
