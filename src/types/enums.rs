//! Enumerated value kinds. Binary forms are fixed width little endian integers,
//! cdxml forms are the symbolic names listed in the format specification. The
//! handful of spelling quirks (manual double bond positions, the second lone
//! pair symbol, `None` values) follow the published cdxml vocabulary.

use super::Result;
use crate::error::UnknownEnumValueError;
use log::warn;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, EnumString)]
pub enum CdxAminoAcidTermini {
    HOH = 1,
    NH2COOH = 2,
}

impl CdxAminoAcidTermini {
    pub fn from_value(value: i64) -> Result<Self> {
        let termini = match value {
            1 => CdxAminoAcidTermini::HOH,
            2 => CdxAminoAcidTermini::NH2COOH,
            other => return Err(UnknownEnumValueError::new("CDXAminoAcidTermini", other.to_string()).into()),
        };
        Ok(termini)
    }

    pub fn value(self) -> i64 {
        self as i64
    }

    pub fn as_attribute_value(self) -> &'static str {
        match self {
            CdxAminoAcidTermini::HOH => "HOH",
            CdxAminoAcidTermini::NH2COOH => "NH2COOH",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, EnumString)]
pub enum CdxAutonumberStyle {
    Roman = 0,
    Arabic = 1,
    Alphabetic = 2,
}

impl CdxAutonumberStyle {
    pub fn from_value(value: i64) -> Result<Self> {
        let style = match value {
            0 => CdxAutonumberStyle::Roman,
            1 => CdxAutonumberStyle::Arabic,
            2 => CdxAutonumberStyle::Alphabetic,
            other => return Err(UnknownEnumValueError::new("CDXAutonumberStyle", other.to_string()).into()),
        };
        Ok(style)
    }

    pub fn value(self) -> i64 {
        self as i64
    }

    pub fn as_attribute_value(self) -> &'static str {
        match self {
            CdxAutonumberStyle::Roman => "Roman",
            CdxAutonumberStyle::Arabic => "Arabic",
            CdxAutonumberStyle::Alphabetic => "Alphabetic",
        }
    }
}

/// Double bond positioning. Values above 255 mark positions placed manually by
/// the user; cdxml only knows the three base spellings, so the manual variants
/// print without the manual marker.
#[derive(Debug, Clone, Copy, PartialEq, EnumString)]
pub enum CdxDoubleBondPosition {
    Center = 0,
    Right = 1,
    Left = 2,
    CenterManual = 256,
    RightManual = 257,
    LeftManual = 258,
}

impl CdxDoubleBondPosition {
    pub fn from_value(value: i64) -> Result<Self> {
        let position = match value {
            0 => CdxDoubleBondPosition::Center,
            1 => CdxDoubleBondPosition::Right,
            2 => CdxDoubleBondPosition::Left,
            256 => CdxDoubleBondPosition::CenterManual,
            257 => CdxDoubleBondPosition::RightManual,
            258 => CdxDoubleBondPosition::LeftManual,
            other => {
                return Err(UnknownEnumValueError::new("CDXDoubleBondPosition", other.to_string()).into())
            }
        };
        Ok(position)
    }

    pub fn value(self) -> i64 {
        self as i64
    }

    pub fn as_attribute_value(self) -> &'static str {
        match self {
            CdxDoubleBondPosition::Center | CdxDoubleBondPosition::CenterManual => "Center",
            CdxDoubleBondPosition::Right | CdxDoubleBondPosition::RightManual => "Right",
            CdxDoubleBondPosition::Left | CdxDoubleBondPosition::LeftManual => "Left",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, EnumString)]
pub enum CdxBondDisplay {
    Solid = 0,
    Dash = 1,
    Hash = 2,
    WedgedHashBegin = 3,
    WedgedHashEnd = 4,
    Bold = 5,
    WedgeBegin = 6,
    WedgeEnd = 7,
    Wavy = 8,
    HollowWedgeBegin = 9,
    HollowWedgeEnd = 10,
    WavyWedgeBegin = 11,
    WavyWedgeEnd = 12,
    Dot = 13,
    DashDot = 14,
}

impl CdxBondDisplay {
    pub fn from_value(value: i64) -> Result<Self> {
        let display = match value {
            0 => CdxBondDisplay::Solid,
            1 => CdxBondDisplay::Dash,
            2 => CdxBondDisplay::Hash,
            3 => CdxBondDisplay::WedgedHashBegin,
            4 => CdxBondDisplay::WedgedHashEnd,
            5 => CdxBondDisplay::Bold,
            6 => CdxBondDisplay::WedgeBegin,
            7 => CdxBondDisplay::WedgeEnd,
            8 => CdxBondDisplay::Wavy,
            9 => CdxBondDisplay::HollowWedgeBegin,
            10 => CdxBondDisplay::HollowWedgeEnd,
            11 => CdxBondDisplay::WavyWedgeBegin,
            12 => CdxBondDisplay::WavyWedgeEnd,
            13 => CdxBondDisplay::Dot,
            14 => CdxBondDisplay::DashDot,
            other => return Err(UnknownEnumValueError::new("CDXBondDisplay", other.to_string()).into()),
        };
        Ok(display)
    }

    pub fn value(self) -> i64 {
        self as i64
    }

    pub fn as_attribute_value(self) -> &'static str {
        match self {
            CdxBondDisplay::Solid => "Solid",
            CdxBondDisplay::Dash => "Dash",
            CdxBondDisplay::Hash => "Hash",
            CdxBondDisplay::WedgedHashBegin => "WedgedHashBegin",
            CdxBondDisplay::WedgedHashEnd => "WedgedHashEnd",
            CdxBondDisplay::Bold => "Bold",
            CdxBondDisplay::WedgeBegin => "WedgeBegin",
            CdxBondDisplay::WedgeEnd => "WedgeEnd",
            CdxBondDisplay::Wavy => "Wavy",
            CdxBondDisplay::HollowWedgeBegin => "HollowWedgeBegin",
            CdxBondDisplay::HollowWedgeEnd => "HollowWedgeEnd",
            CdxBondDisplay::WavyWedgeBegin => "WavyWedgeBegin",
            CdxBondDisplay::WavyWedgeEnd => "WavyWedgeEnd",
            CdxBondDisplay::Dot => "Dot",
            CdxBondDisplay::DashDot => "DashDot",
        }
    }
}

/// Atom CIP stereochemistry descriptor.
#[derive(Debug, Clone, Copy, PartialEq, EnumString)]
pub enum CdxAtomStereo {
    /// Undetermined
    U = 0,
    /// Determined to be symmetric
    N = 1,
    /// Asymmetric: (R)
    R = 2,
    /// Asymmetric: (S)
    S = 3,
    /// Pseudoasymmetric: (r)
    #[strum(serialize = "r")]
    PseudoR = 4,
    /// Pseudoasymmetric: (s)
    #[strum(serialize = "s")]
    PseudoS = 5,
    /// Not symmetric but lacking a hash or wedge, so no absolute configuration
    #[strum(serialize = "u")]
    Unspecified = 6,
}

impl CdxAtomStereo {
    pub fn from_value(value: i64) -> Result<Self> {
        let stereo = match value {
            0 => CdxAtomStereo::U,
            1 => CdxAtomStereo::N,
            2 => CdxAtomStereo::R,
            3 => CdxAtomStereo::S,
            4 => CdxAtomStereo::PseudoR,
            5 => CdxAtomStereo::PseudoS,
            6 => CdxAtomStereo::Unspecified,
            other => return Err(UnknownEnumValueError::new("CDXAtomStereo", other.to_string()).into()),
        };
        Ok(stereo)
    }

    pub fn value(self) -> i64 {
        self as i64
    }

    pub fn as_attribute_value(self) -> &'static str {
        match self {
            CdxAtomStereo::U => "U",
            CdxAtomStereo::N => "N",
            CdxAtomStereo::R => "R",
            CdxAtomStereo::S => "S",
            CdxAtomStereo::PseudoR => "r",
            CdxAtomStereo::PseudoS => "s",
            CdxAtomStereo::Unspecified => "u",
        }
    }
}

/// Bond CIP stereochemistry descriptor.
#[derive(Debug, Clone, Copy, PartialEq, EnumString)]
pub enum CdxBondStereo {
    U = 0,
    N = 1,
    E = 2,
    Z = 3,
}

impl CdxBondStereo {
    pub fn from_value(value: i64) -> Result<Self> {
        let stereo = match value {
            0 => CdxBondStereo::U,
            1 => CdxBondStereo::N,
            2 => CdxBondStereo::E,
            3 => CdxBondStereo::Z,
            other => return Err(UnknownEnumValueError::new("CDXBondStereo", other.to_string()).into()),
        };
        Ok(stereo)
    }

    pub fn value(self) -> i64 {
        self as i64
    }

    pub fn as_attribute_value(self) -> &'static str {
        match self {
            CdxBondStereo::U => "U",
            CdxBondStereo::N => "N",
            CdxBondStereo::E => "E",
            CdxBondStereo::Z => "Z",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, EnumString)]
pub enum BracketUsage {
    Unspecified = 0,
    Unused1 = 1,
    Unused2 = 2,
    SRU = 3,
    Monomer = 4,
    Mer = 5,
    Copolymer = 6,
    CopolymerAlternating = 7,
    CopolymerRandom = 8,
    CopolymerBlock = 9,
    Crosslink = 10,
    Graft = 11,
    Modification = 12,
    Component = 13,
    MixtureUnordered = 14,
    MixtureOrdered = 15,
    MultipleGroup = 16,
    Generic = 17,
    Anypolymer = 18,
}

impl BracketUsage {
    fn from_value(value: i64) -> Result<Self> {
        let usage = match value {
            0 => BracketUsage::Unspecified,
            1 => BracketUsage::Unused1,
            2 => BracketUsage::Unused2,
            3 => BracketUsage::SRU,
            4 => BracketUsage::Monomer,
            5 => BracketUsage::Mer,
            6 => BracketUsage::Copolymer,
            7 => BracketUsage::CopolymerAlternating,
            8 => BracketUsage::CopolymerRandom,
            9 => BracketUsage::CopolymerBlock,
            10 => BracketUsage::Crosslink,
            11 => BracketUsage::Graft,
            12 => BracketUsage::Modification,
            13 => BracketUsage::Component,
            14 => BracketUsage::MixtureUnordered,
            15 => BracketUsage::MixtureOrdered,
            16 => BracketUsage::MultipleGroup,
            17 => BracketUsage::Generic,
            18 => BracketUsage::Anypolymer,
            other => return Err(UnknownEnumValueError::new("CDXBracketUsage", other.to_string()).into()),
        };
        Ok(usage)
    }

    fn name(self) -> &'static str {
        match self {
            BracketUsage::Unspecified => "Unspecified",
            BracketUsage::Unused1 => "Unused1",
            BracketUsage::Unused2 => "Unused2",
            BracketUsage::SRU => "SRU",
            BracketUsage::Monomer => "Monomer",
            BracketUsage::Mer => "Mer",
            BracketUsage::Copolymer => "Copolymer",
            BracketUsage::CopolymerAlternating => "CopolymerAlternating",
            BracketUsage::CopolymerRandom => "CopolymerRandom",
            BracketUsage::CopolymerBlock => "CopolymerBlock",
            BracketUsage::Crosslink => "Crosslink",
            BracketUsage::Graft => "Graft",
            BracketUsage::Modification => "Modification",
            BracketUsage::Component => "Component",
            BracketUsage::MixtureUnordered => "MixtureUnordered",
            BracketUsage::MixtureOrdered => "MixtureOrdered",
            BracketUsage::MultipleGroup => "MultipleGroup",
            BracketUsage::Generic => "Generic",
            BracketUsage::Anypolymer => "Anypolymer",
        }
    }
}

/// Bracket usage is a one byte enum, but files written by some ChemDraw versions
/// carry a second, zero byte. The extra bytes are kept and re-emitted verbatim
/// so such files survive a round trip.
#[derive(Debug, Clone, PartialEq)]
pub struct CdxBracketUsage {
    pub usage: BracketUsage,
    extra: Vec<u8>,
}

impl CdxBracketUsage {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.is_empty() {
            return Err(crate::error::InvalidLengthError::new("CDXBracketUsage", 1, 0).into());
        }
        if bytes.len() > 1 {
            warn!(
                "Passed bytes value of length {} to CDXBracketUsage which is an INT8 enum and should be only 1-byte.",
                bytes.len()
            );
        }
        Ok(Self {
            usage: BracketUsage::from_value(i64::from(bytes[0] as i8))?,
            extra: bytes[1..].to_vec(),
        })
    }

    pub fn from_attribute(value: &str) -> Result<Self> {
        let usage = BracketUsage::from_str(value)
            .map_err(|_| UnknownEnumValueError::new("CDXBracketUsage", value))?;
        Ok(Self {
            usage,
            extra: Vec::new(),
        })
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = vec![self.usage as i64 as i8 as u8];
        buf.extend_from_slice(&self.extra);
        buf
    }

    pub fn as_attribute_value(&self) -> &'static str {
        self.usage.name()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, EnumString)]
pub enum CdxBracketType {
    RoundPair = 0,
    SquarePair = 1,
    CurlyPair = 2,
    Square = 3,
    Curly = 4,
    Round = 5,
}

impl CdxBracketType {
    pub fn from_value(value: i64) -> Result<Self> {
        let bracket = match value {
            0 => CdxBracketType::RoundPair,
            1 => CdxBracketType::SquarePair,
            2 => CdxBracketType::CurlyPair,
            3 => CdxBracketType::Square,
            4 => CdxBracketType::Curly,
            5 => CdxBracketType::Round,
            other => return Err(UnknownEnumValueError::new("CDXBracketType", other.to_string()).into()),
        };
        Ok(bracket)
    }

    pub fn value(self) -> i64 {
        self as i64
    }

    pub fn as_attribute_value(self) -> &'static str {
        match self {
            CdxBracketType::RoundPair => "RoundPair",
            CdxBracketType::SquarePair => "SquarePair",
            CdxBracketType::CurlyPair => "CurlyPair",
            CdxBracketType::Square => "Square",
            CdxBracketType::Curly => "Curly",
            CdxBracketType::Round => "Round",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, EnumString)]
pub enum CdxGraphicType {
    Undefined = 0,
    Line = 1,
    Arc = 2,
    Rectangle = 3,
    Oval = 4,
    Orbital = 5,
    Bracket = 6,
    Symbol = 7,
}

impl CdxGraphicType {
    pub fn from_value(value: i64) -> Result<Self> {
        let graphic = match value {
            0 => CdxGraphicType::Undefined,
            1 => CdxGraphicType::Line,
            2 => CdxGraphicType::Arc,
            3 => CdxGraphicType::Rectangle,
            4 => CdxGraphicType::Oval,
            5 => CdxGraphicType::Orbital,
            6 => CdxGraphicType::Bracket,
            7 => CdxGraphicType::Symbol,
            other => return Err(UnknownEnumValueError::new("CDXGraphicType", other.to_string()).into()),
        };
        Ok(graphic)
    }

    pub fn value(self) -> i64 {
        self as i64
    }

    pub fn as_attribute_value(self) -> &'static str {
        match self {
            CdxGraphicType::Undefined => "Undefined",
            CdxGraphicType::Line => "Line",
            CdxGraphicType::Arc => "Arc",
            CdxGraphicType::Rectangle => "Rectangle",
            CdxGraphicType::Oval => "Oval",
            CdxGraphicType::Orbital => "Orbital",
            CdxGraphicType::Bracket => "Bracket",
            CdxGraphicType::Symbol => "Symbol",
        }
    }
}

/// Arrow type flags. Each value is a single flag bit; the cdxml form is the
/// spelled name of the matching flag.
#[derive(Debug, Clone, Copy, PartialEq, EnumString)]
pub enum CdxArrowType {
    NoHead = 0,
    HalfHead = 1,
    FullHead = 2,
    Resonance = 4,
    Equilibrium = 8,
    Hollow = 16,
    RetroSynthetic = 32,
    NoGo = 64,
    Dipole = 128,
}

impl CdxArrowType {
    pub fn from_value(value: i64) -> Result<Self> {
        let arrow = match value {
            0 => CdxArrowType::NoHead,
            1 => CdxArrowType::HalfHead,
            2 => CdxArrowType::FullHead,
            4 => CdxArrowType::Resonance,
            8 => CdxArrowType::Equilibrium,
            16 => CdxArrowType::Hollow,
            32 => CdxArrowType::RetroSynthetic,
            64 => CdxArrowType::NoGo,
            128 => CdxArrowType::Dipole,
            other => return Err(UnknownEnumValueError::new("CDXArrowType", other.to_string()).into()),
        };
        Ok(arrow)
    }

    pub fn value(self) -> i64 {
        self as i64
    }

    pub fn as_attribute_value(self) -> &'static str {
        match self {
            CdxArrowType::NoHead => "NoHead",
            CdxArrowType::HalfHead => "HalfHead",
            CdxArrowType::FullHead => "FullHead",
            CdxArrowType::Resonance => "Resonance",
            CdxArrowType::Equilibrium => "Equilibrium",
            CdxArrowType::Hollow => "Hollow",
            CdxArrowType::RetroSynthetic => "RetroSynthetic",
            CdxArrowType::NoGo => "NoGo",
            CdxArrowType::Dipole => "Dipole",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, EnumString)]
pub enum CdxArrowHeadType {
    Unspecified = 0,
    Solid = 1,
    Hollow = 2,
    Angle = 3,
}

impl CdxArrowHeadType {
    pub fn from_value(value: i64) -> Result<Self> {
        let head = match value {
            0 => CdxArrowHeadType::Unspecified,
            1 => CdxArrowHeadType::Solid,
            2 => CdxArrowHeadType::Hollow,
            3 => CdxArrowHeadType::Angle,
            other => return Err(UnknownEnumValueError::new("CDXArrowHeadType", other.to_string()).into()),
        };
        Ok(head)
    }

    pub fn value(self) -> i64 {
        self as i64
    }

    pub fn as_attribute_value(self) -> &'static str {
        match self {
            CdxArrowHeadType::Unspecified => "Unspecified",
            CdxArrowHeadType::Solid => "Solid",
            CdxArrowHeadType::Hollow => "Hollow",
            CdxArrowHeadType::Angle => "Angle",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, EnumString)]
pub enum CdxArrowHeadPosition {
    Unspecified = 0,
    #[strum(serialize = "None")]
    NoPosition = 1,
    Full = 2,
    HalfLeft = 3,
    HalfRight = 4,
}

impl CdxArrowHeadPosition {
    pub fn from_value(value: i64) -> Result<Self> {
        let position = match value {
            0 => CdxArrowHeadPosition::Unspecified,
            1 => CdxArrowHeadPosition::NoPosition,
            2 => CdxArrowHeadPosition::Full,
            3 => CdxArrowHeadPosition::HalfLeft,
            4 => CdxArrowHeadPosition::HalfRight,
            other => {
                return Err(UnknownEnumValueError::new("CDXArrowHeadPosition", other.to_string()).into())
            }
        };
        Ok(position)
    }

    pub fn value(self) -> i64 {
        self as i64
    }

    pub fn as_attribute_value(self) -> &'static str {
        match self {
            CdxArrowHeadPosition::Unspecified => "Unspecified",
            CdxArrowHeadPosition::NoPosition => "None",
            CdxArrowHeadPosition::Full => "Full",
            CdxArrowHeadPosition::HalfLeft => "HalfLeft",
            CdxArrowHeadPosition::HalfRight => "HalfRight",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, EnumString)]
pub enum CdxFillType {
    Unspecified = 0,
    #[strum(serialize = "None")]
    NoFill = 1,
    Solid = 2,
    Shaded = 4,
    Gradient = 8,
    Pattern = 16,
}

impl CdxFillType {
    pub fn from_value(value: i64) -> Result<Self> {
        let fill = match value {
            0 => CdxFillType::Unspecified,
            1 => CdxFillType::NoFill,
            2 => CdxFillType::Solid,
            4 => CdxFillType::Shaded,
            8 => CdxFillType::Gradient,
            16 => CdxFillType::Pattern,
            other => return Err(UnknownEnumValueError::new("CDXFillType", other.to_string()).into()),
        };
        Ok(fill)
    }

    pub fn value(self) -> i64 {
        self as i64
    }

    pub fn as_attribute_value(self) -> &'static str {
        match self {
            CdxFillType::Unspecified => "Unspecified",
            CdxFillType::NoFill => "None",
            CdxFillType::Solid => "Solid",
            CdxFillType::Shaded => "Shaded",
            CdxFillType::Gradient => "Gradient",
            CdxFillType::Pattern => "Pattern",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, EnumString)]
pub enum CdxJustification {
    Right = -1,
    Left = 0,
    Center = 1,
    Full = 2,
    Above = 3,
    Below = 4,
    Auto = 5,
    Best = 6,
}

impl CdxJustification {
    pub fn from_value(value: i64) -> Result<Self> {
        let justification = match value {
            -1 => CdxJustification::Right,
            0 => CdxJustification::Left,
            1 => CdxJustification::Center,
            2 => CdxJustification::Full,
            3 => CdxJustification::Above,
            4 => CdxJustification::Below,
            5 => CdxJustification::Auto,
            6 => CdxJustification::Best,
            other => return Err(UnknownEnumValueError::new("CDXJustification", other.to_string()).into()),
        };
        Ok(justification)
    }

    pub fn value(self) -> i64 {
        self as i64
    }

    pub fn as_attribute_value(self) -> &'static str {
        match self {
            CdxJustification::Right => "Right",
            CdxJustification::Left => "Left",
            CdxJustification::Center => "Center",
            CdxJustification::Full => "Full",
            CdxJustification::Above => "Above",
            CdxJustification::Below => "Below",
            CdxJustification::Auto => "Auto",
            CdxJustification::Best => "Best",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, EnumString)]
pub enum CdxLabelAlignment {
    Auto = 0,
    Left = 1,
    Center = 2,
    Right = 3,
    Above = 4,
    Below = 5,
    Best = 6,
}

impl CdxLabelAlignment {
    pub fn from_value(value: i64) -> Result<Self> {
        let alignment = match value {
            0 => CdxLabelAlignment::Auto,
            1 => CdxLabelAlignment::Left,
            2 => CdxLabelAlignment::Center,
            3 => CdxLabelAlignment::Right,
            4 => CdxLabelAlignment::Above,
            5 => CdxLabelAlignment::Below,
            6 => CdxLabelAlignment::Best,
            other => return Err(UnknownEnumValueError::new("CDXLabelAlignment", other.to_string()).into()),
        };
        Ok(alignment)
    }

    pub fn value(self) -> i64 {
        self as i64
    }

    pub fn as_attribute_value(self) -> &'static str {
        match self {
            CdxLabelAlignment::Auto => "Auto",
            CdxLabelAlignment::Left => "Left",
            CdxLabelAlignment::Center => "Center",
            CdxLabelAlignment::Right => "Right",
            CdxLabelAlignment::Above => "Above",
            CdxLabelAlignment::Below => "Below",
            CdxLabelAlignment::Best => "Best",
        }
    }
}

/// Bond order flags, stored as an unsigned 16 bit value so that the
/// `Unspecified` (0xFFFF) and `threecenter` (0x8000) orders survive. Plain
/// orders print numerically in cdxml, the special orders by name.
#[derive(Debug, Clone, Copy, PartialEq, EnumString)]
pub enum CdxBondOrder {
    #[strum(serialize = "Unspecified")]
    Unspecified = 0xFFFF,
    #[strum(serialize = "Single", serialize = "1")]
    Single = 0x0001,
    #[strum(serialize = "Double", serialize = "2")]
    Double = 0x0002,
    #[strum(serialize = "Triple", serialize = "3")]
    Triple = 0x0004,
    #[strum(serialize = "Quadruple", serialize = "4")]
    Quadruple = 0x0008,
    #[strum(serialize = "Quintuple", serialize = "5")]
    Quintuple = 0x0010,
    #[strum(serialize = "Hextuple", serialize = "6")]
    Hextuple = 0x0020,
    #[strum(serialize = "OneHalf", serialize = "0.5")]
    OneHalf = 0x0040,
    #[strum(serialize = "OneAndAHalf", serialize = "1.5")]
    OneAndAHalf = 0x0080,
    #[strum(serialize = "TwoAndAHalf", serialize = "2.5")]
    TwoAndAHalf = 0x0100,
    #[strum(serialize = "ThreeAndAHalf", serialize = "3.5")]
    ThreeAndAHalf = 0x0200,
    #[strum(serialize = "FourAndAHalf", serialize = "4.5")]
    FourAndAHalf = 0x0400,
    #[strum(serialize = "FiveAndAHalf", serialize = "5.5")]
    FiveAndAHalf = 0x0800,
    #[strum(serialize = "dative")]
    Dative = 0x1000,
    #[strum(serialize = "ionic")]
    Ionic = 0x2000,
    #[strum(serialize = "hydrogen")]
    Hydrogen = 0x4000,
    #[strum(serialize = "threecenter")]
    ThreeCenter = 0x8000,
}

impl CdxBondOrder {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        super::expect_len("CDXBondOrder", bytes, 2)?;
        let value = u16::from(bytes[0]) | (u16::from(bytes[1]) << 8);
        Self::from_value(i64::from(value))
    }

    pub fn from_value(value: i64) -> Result<Self> {
        let order = match value {
            0xFFFF => CdxBondOrder::Unspecified,
            0x0001 => CdxBondOrder::Single,
            0x0002 => CdxBondOrder::Double,
            0x0004 => CdxBondOrder::Triple,
            0x0008 => CdxBondOrder::Quadruple,
            0x0010 => CdxBondOrder::Quintuple,
            0x0020 => CdxBondOrder::Hextuple,
            0x0040 => CdxBondOrder::OneHalf,
            0x0080 => CdxBondOrder::OneAndAHalf,
            0x0100 => CdxBondOrder::TwoAndAHalf,
            0x0200 => CdxBondOrder::ThreeAndAHalf,
            0x0400 => CdxBondOrder::FourAndAHalf,
            0x0800 => CdxBondOrder::FiveAndAHalf,
            0x1000 => CdxBondOrder::Dative,
            0x2000 => CdxBondOrder::Ionic,
            0x4000 => CdxBondOrder::Hydrogen,
            0x8000 => CdxBondOrder::ThreeCenter,
            other => return Err(UnknownEnumValueError::new("CDXBondOrder", other.to_string()).into()),
        };
        Ok(order)
    }

    /// Accepts both the numeric ("1", "1.5") and the symbolic ("Single",
    /// "OneAndAHalf") cdxml spellings.
    pub fn from_attribute(value: &str) -> Result<Self> {
        if let Ok(numeric) = value.parse::<f64>() {
            let order = match (numeric * 2.0) as i64 {
                2 => Some(CdxBondOrder::Single),
                4 => Some(CdxBondOrder::Double),
                6 => Some(CdxBondOrder::Triple),
                8 => Some(CdxBondOrder::Quadruple),
                10 => Some(CdxBondOrder::Quintuple),
                12 => Some(CdxBondOrder::Hextuple),
                1 => Some(CdxBondOrder::OneHalf),
                3 => Some(CdxBondOrder::OneAndAHalf),
                5 => Some(CdxBondOrder::TwoAndAHalf),
                7 => Some(CdxBondOrder::ThreeAndAHalf),
                9 => Some(CdxBondOrder::FourAndAHalf),
                11 => Some(CdxBondOrder::FiveAndAHalf),
                _ => None,
            };
            if let Some(order) = order {
                return Ok(order);
            }
        }
        Self::from_str(value).map_err(|_| UnknownEnumValueError::new("CDXBondOrder", value).into())
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let value = *self as i64 as u16;
        vec![value as u8, (value >> 8) as u8]
    }

    pub fn as_attribute_value(&self) -> &'static str {
        match self {
            CdxBondOrder::Unspecified => "Unspecified",
            CdxBondOrder::Single => "1",
            CdxBondOrder::Double => "2",
            CdxBondOrder::Triple => "3",
            CdxBondOrder::Quadruple => "4",
            CdxBondOrder::Quintuple => "5",
            CdxBondOrder::Hextuple => "6",
            CdxBondOrder::OneHalf => "0.5",
            CdxBondOrder::OneAndAHalf => "1.5",
            CdxBondOrder::TwoAndAHalf => "2.5",
            CdxBondOrder::ThreeAndAHalf => "3.5",
            CdxBondOrder::FourAndAHalf => "4.5",
            CdxBondOrder::FiveAndAHalf => "5.5",
            CdxBondOrder::Dative => "dative",
            CdxBondOrder::Ionic => "ionic",
            CdxBondOrder::Hydrogen => "hydrogen",
            CdxBondOrder::ThreeCenter => "threecenter",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, EnumString)]
pub enum CdxAtomGeometry {
    Unknown = 0,
    #[strum(serialize = "1")]
    Coordination1 = 1,
    Linear = 2,
    Bent = 3,
    TrigonalPlanar = 4,
    TrigonalPyramidal = 5,
    SquarePlanar = 6,
    Tetrahedral = 7,
    TrigonalBipyramidal = 8,
    SquarePyramidal = 9,
    #[strum(serialize = "5")]
    Coordination5 = 10,
    Octahedral = 11,
    #[strum(serialize = "6")]
    Coordination6 = 12,
    #[strum(serialize = "7")]
    Coordination7 = 13,
    #[strum(serialize = "8")]
    Coordination8 = 14,
    #[strum(serialize = "9")]
    Coordination9 = 15,
    #[strum(serialize = "10")]
    Coordination10 = 16,
}

impl CdxAtomGeometry {
    pub fn from_value(value: i64) -> Result<Self> {
        let geometry = match value {
            0 => CdxAtomGeometry::Unknown,
            1 => CdxAtomGeometry::Coordination1,
            2 => CdxAtomGeometry::Linear,
            3 => CdxAtomGeometry::Bent,
            4 => CdxAtomGeometry::TrigonalPlanar,
            5 => CdxAtomGeometry::TrigonalPyramidal,
            6 => CdxAtomGeometry::SquarePlanar,
            7 => CdxAtomGeometry::Tetrahedral,
            8 => CdxAtomGeometry::TrigonalBipyramidal,
            9 => CdxAtomGeometry::SquarePyramidal,
            10 => CdxAtomGeometry::Coordination5,
            11 => CdxAtomGeometry::Octahedral,
            12 => CdxAtomGeometry::Coordination6,
            13 => CdxAtomGeometry::Coordination7,
            14 => CdxAtomGeometry::Coordination8,
            15 => CdxAtomGeometry::Coordination9,
            16 => CdxAtomGeometry::Coordination10,
            other => return Err(UnknownEnumValueError::new("CDXAtomGeometry", other.to_string()).into()),
        };
        Ok(geometry)
    }

    pub fn value(self) -> i64 {
        self as i64
    }

    pub fn as_attribute_value(self) -> &'static str {
        match self {
            CdxAtomGeometry::Unknown => "Unknown",
            CdxAtomGeometry::Coordination1 => "1",
            CdxAtomGeometry::Linear => "Linear",
            CdxAtomGeometry::Bent => "Bent",
            CdxAtomGeometry::TrigonalPlanar => "TrigonalPlanar",
            CdxAtomGeometry::TrigonalPyramidal => "TrigonalPyramidal",
            CdxAtomGeometry::SquarePlanar => "SquarePlanar",
            CdxAtomGeometry::Tetrahedral => "Tetrahedral",
            CdxAtomGeometry::TrigonalBipyramidal => "TrigonalBipyramidal",
            CdxAtomGeometry::SquarePyramidal => "SquarePyramidal",
            CdxAtomGeometry::Coordination5 => "5",
            CdxAtomGeometry::Octahedral => "Octahedral",
            CdxAtomGeometry::Coordination6 => "6",
            CdxAtomGeometry::Coordination7 => "7",
            CdxAtomGeometry::Coordination8 => "8",
            CdxAtomGeometry::Coordination9 => "9",
            CdxAtomGeometry::Coordination10 => "10",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, EnumString)]
pub enum CdxNodeType {
    Unspecified = 0,
    Element = 1,
    ElementList = 2,
    ElementListNickname = 3,
    Nickname = 4,
    Fragment = 5,
    Formula = 6,
    GenericNickname = 7,
    AnonymousAlternativeGroup = 8,
    NamedAlternativeGroup = 9,
    MultiAttachment = 10,
    VariableAttachment = 11,
    ExternalConnectionPoint = 12,
    LinkNode = 13,
}

impl CdxNodeType {
    pub fn from_value(value: i64) -> Result<Self> {
        let node_type = match value {
            0 => CdxNodeType::Unspecified,
            1 => CdxNodeType::Element,
            2 => CdxNodeType::ElementList,
            3 => CdxNodeType::ElementListNickname,
            4 => CdxNodeType::Nickname,
            5 => CdxNodeType::Fragment,
            6 => CdxNodeType::Formula,
            7 => CdxNodeType::GenericNickname,
            8 => CdxNodeType::AnonymousAlternativeGroup,
            9 => CdxNodeType::NamedAlternativeGroup,
            10 => CdxNodeType::MultiAttachment,
            11 => CdxNodeType::VariableAttachment,
            12 => CdxNodeType::ExternalConnectionPoint,
            13 => CdxNodeType::LinkNode,
            other => return Err(UnknownEnumValueError::new("CDXNodeType", other.to_string()).into()),
        };
        Ok(node_type)
    }

    pub fn value(self) -> i64 {
        self as i64
    }

    pub fn as_attribute_value(self) -> &'static str {
        match self {
            CdxNodeType::Unspecified => "Unspecified",
            CdxNodeType::Element => "Element",
            CdxNodeType::ElementList => "ElementList",
            CdxNodeType::ElementListNickname => "ElementListNickname",
            CdxNodeType::Nickname => "Nickname",
            CdxNodeType::Fragment => "Fragment",
            CdxNodeType::Formula => "Formula",
            CdxNodeType::GenericNickname => "GenericNickname",
            CdxNodeType::AnonymousAlternativeGroup => "AnonymousAlternativeGroup",
            CdxNodeType::NamedAlternativeGroup => "NamedAlternativeGroup",
            CdxNodeType::MultiAttachment => "MultiAttachment",
            CdxNodeType::VariableAttachment => "VariableAttachment",
            CdxNodeType::ExternalConnectionPoint => "ExternalConnectionPoint",
            CdxNodeType::LinkNode => "LinkNode",
        }
    }
}

/// Chemical symbol glyphs. The format has two lone pair values; cdxml spells
/// both of them LonePair.
#[derive(Debug, Clone, Copy, PartialEq, EnumString)]
pub enum CdxSymbolType {
    LonePair = 0,
    Electron = 1,
    RadicalCation = 2,
    RadicalAnion = 3,
    CirclePlus = 4,
    CircleMinus = 5,
    Dagger = 6,
    DoubleDagger = 7,
    Plus = 8,
    Minus = 9,
    Racemic = 10,
    Absolute = 11,
    Relative = 12,
    LonePair2 = 13,
}

impl CdxSymbolType {
    pub fn from_value(value: i64) -> Result<Self> {
        let symbol = match value {
            0 => CdxSymbolType::LonePair,
            1 => CdxSymbolType::Electron,
            2 => CdxSymbolType::RadicalCation,
            3 => CdxSymbolType::RadicalAnion,
            4 => CdxSymbolType::CirclePlus,
            5 => CdxSymbolType::CircleMinus,
            6 => CdxSymbolType::Dagger,
            7 => CdxSymbolType::DoubleDagger,
            8 => CdxSymbolType::Plus,
            9 => CdxSymbolType::Minus,
            10 => CdxSymbolType::Racemic,
            11 => CdxSymbolType::Absolute,
            12 => CdxSymbolType::Relative,
            13 => CdxSymbolType::LonePair2,
            other => return Err(UnknownEnumValueError::new("CDXSymbolType", other.to_string()).into()),
        };
        Ok(symbol)
    }

    pub fn value(self) -> i64 {
        self as i64
    }

    pub fn as_attribute_value(self) -> &'static str {
        match self {
            CdxSymbolType::LonePair | CdxSymbolType::LonePair2 => "LonePair",
            CdxSymbolType::Electron => "Electron",
            CdxSymbolType::RadicalCation => "RadicalCation",
            CdxSymbolType::RadicalAnion => "RadicalAnion",
            CdxSymbolType::CirclePlus => "CirclePlus",
            CdxSymbolType::CircleMinus => "CircleMinus",
            CdxSymbolType::Dagger => "Dagger",
            CdxSymbolType::DoubleDagger => "DoubleDagger",
            CdxSymbolType::Plus => "Plus",
            CdxSymbolType::Minus => "Minus",
            CdxSymbolType::Racemic => "Racemic",
            CdxSymbolType::Absolute => "Absolute",
            CdxSymbolType::Relative => "Relative",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, EnumString)]
pub enum CdxTagType {
    Unknown = 0,
    Double = 1,
    Long = 2,
    String = 3,
}

impl CdxTagType {
    pub fn from_value(value: i64) -> Result<Self> {
        let tag_type = match value {
            0 => CdxTagType::Unknown,
            1 => CdxTagType::Double,
            2 => CdxTagType::Long,
            3 => CdxTagType::String,
            other => return Err(UnknownEnumValueError::new("CDXTagType", other.to_string()).into()),
        };
        Ok(tag_type)
    }

    pub fn value(self) -> i64 {
        self as i64
    }

    pub fn as_attribute_value(self) -> &'static str {
        match self {
            CdxTagType::Unknown => "Unknown",
            CdxTagType::Double => "Double",
            CdxTagType::Long => "Long",
            CdxTagType::String => "String",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, EnumString)]
pub enum CdxPositioningType {
    #[strum(serialize = "auto")]
    Auto = 0,
    #[strum(serialize = "angle")]
    Angle = 1,
    #[strum(serialize = "offset")]
    Offset = 2,
    #[strum(serialize = "absolute")]
    Absolute = 3,
}

impl CdxPositioningType {
    pub fn from_value(value: i64) -> Result<Self> {
        let positioning = match value {
            0 => CdxPositioningType::Auto,
            1 => CdxPositioningType::Angle,
            2 => CdxPositioningType::Offset,
            3 => CdxPositioningType::Absolute,
            other => return Err(UnknownEnumValueError::new("CDXPositioningType", other.to_string()).into()),
        };
        Ok(positioning)
    }

    pub fn value(self) -> i64 {
        self as i64
    }

    pub fn as_attribute_value(self) -> &'static str {
        match self {
            CdxPositioningType::Auto => "auto",
            CdxPositioningType::Angle => "angle",
            CdxPositioningType::Offset => "offset",
            CdxPositioningType::Absolute => "absolute",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, EnumString)]
pub enum CdxOvalType {
    Circle = 1,
    Shaded = 2,
    Filled = 4,
    Dashed = 8,
    Bold = 16,
    Shadowed = 32,
}

impl CdxOvalType {
    pub fn from_value(value: i64) -> Result<Self> {
        let oval = match value {
            1 => CdxOvalType::Circle,
            2 => CdxOvalType::Shaded,
            4 => CdxOvalType::Filled,
            8 => CdxOvalType::Dashed,
            16 => CdxOvalType::Bold,
            32 => CdxOvalType::Shadowed,
            other => return Err(UnknownEnumValueError::new("CDXOvalType", other.to_string()).into()),
        };
        Ok(oval)
    }

    pub fn value(self) -> i64 {
        self as i64
    }

    pub fn as_attribute_value(self) -> &'static str {
        match self {
            CdxOvalType::Circle => "Circle",
            CdxOvalType::Shaded => "Shaded",
            CdxOvalType::Filled => "Filled",
            CdxOvalType::Dashed => "Dashed",
            CdxOvalType::Bold => "Bold",
            CdxOvalType::Shadowed => "Shadowed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, EnumString)]
pub enum CdxOrbitalType {
    #[strum(serialize = "s")]
    S = 0,
    #[strum(serialize = "oval")]
    Oval = 1,
    #[strum(serialize = "lobe")]
    Lobe = 2,
    #[strum(serialize = "p")]
    P = 3,
    #[strum(serialize = "hybridPlus")]
    HybridPlus = 4,
    #[strum(serialize = "hybridMinus")]
    HybridMinus = 5,
    #[strum(serialize = "dz2Plus")]
    Dz2Plus = 6,
    #[strum(serialize = "dz2Minus")]
    Dz2Minus = 7,
    #[strum(serialize = "dxy")]
    Dxy = 8,
    #[strum(serialize = "sShaded")]
    SShaded = 256,
    #[strum(serialize = "ovalShaded")]
    OvalShaded = 257,
    #[strum(serialize = "lobeShaded")]
    LobeShaded = 258,
    #[strum(serialize = "pShaded")]
    PShaded = 259,
    #[strum(serialize = "sFilled")]
    SFilled = 512,
    #[strum(serialize = "ovalFilled")]
    OvalFilled = 513,
    #[strum(serialize = "lobeFilled")]
    LobeFilled = 514,
    #[strum(serialize = "pFilled")]
    PFilled = 515,
    #[strum(serialize = "hybridPlusFilled")]
    HybridPlusFilled = 516,
    #[strum(serialize = "hybridMinusFilled")]
    HybridMinusFilled = 517,
    #[strum(serialize = "dz2PlusFilled")]
    Dz2PlusFilled = 518,
    #[strum(serialize = "dz2MinusFilled")]
    Dz2MinusFilled = 519,
    #[strum(serialize = "dxyFilled")]
    DxyFilled = 520,
}

impl CdxOrbitalType {
    pub fn from_value(value: i64) -> Result<Self> {
        let orbital = match value {
            0 => CdxOrbitalType::S,
            1 => CdxOrbitalType::Oval,
            2 => CdxOrbitalType::Lobe,
            3 => CdxOrbitalType::P,
            4 => CdxOrbitalType::HybridPlus,
            5 => CdxOrbitalType::HybridMinus,
            6 => CdxOrbitalType::Dz2Plus,
            7 => CdxOrbitalType::Dz2Minus,
            8 => CdxOrbitalType::Dxy,
            256 => CdxOrbitalType::SShaded,
            257 => CdxOrbitalType::OvalShaded,
            258 => CdxOrbitalType::LobeShaded,
            259 => CdxOrbitalType::PShaded,
            512 => CdxOrbitalType::SFilled,
            513 => CdxOrbitalType::OvalFilled,
            514 => CdxOrbitalType::LobeFilled,
            515 => CdxOrbitalType::PFilled,
            516 => CdxOrbitalType::HybridPlusFilled,
            517 => CdxOrbitalType::HybridMinusFilled,
            518 => CdxOrbitalType::Dz2PlusFilled,
            519 => CdxOrbitalType::Dz2MinusFilled,
            520 => CdxOrbitalType::DxyFilled,
            other => return Err(UnknownEnumValueError::new("CDXOrbitalType", other.to_string()).into()),
        };
        Ok(orbital)
    }

    pub fn value(self) -> i64 {
        self as i64
    }

    pub fn as_attribute_value(self) -> &'static str {
        match self {
            CdxOrbitalType::S => "s",
            CdxOrbitalType::Oval => "oval",
            CdxOrbitalType::Lobe => "lobe",
            CdxOrbitalType::P => "p",
            CdxOrbitalType::HybridPlus => "hybridPlus",
            CdxOrbitalType::HybridMinus => "hybridMinus",
            CdxOrbitalType::Dz2Plus => "dz2Plus",
            CdxOrbitalType::Dz2Minus => "dz2Minus",
            CdxOrbitalType::Dxy => "dxy",
            CdxOrbitalType::SShaded => "sShaded",
            CdxOrbitalType::OvalShaded => "ovalShaded",
            CdxOrbitalType::LobeShaded => "lobeShaded",
            CdxOrbitalType::PShaded => "pShaded",
            CdxOrbitalType::SFilled => "sFilled",
            CdxOrbitalType::OvalFilled => "ovalFilled",
            CdxOrbitalType::LobeFilled => "lobeFilled",
            CdxOrbitalType::PFilled => "pFilled",
            CdxOrbitalType::HybridPlusFilled => "hybridPlusFilled",
            CdxOrbitalType::HybridMinusFilled => "hybridMinusFilled",
            CdxOrbitalType::Dz2PlusFilled => "dz2PlusFilled",
            CdxOrbitalType::Dz2MinusFilled => "dz2MinusFilled",
            CdxOrbitalType::DxyFilled => "dxyFilled",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, EnumString)]
pub enum CdxRectangleType {
    Plain = 0,
    RoundEdge = 1,
    Shadow = 2,
    Shaded = 4,
    Filled = 8,
    Dashed = 16,
    Bold = 32,
}

impl CdxRectangleType {
    pub fn from_value(value: i64) -> Result<Self> {
        let rectangle = match value {
            0 => CdxRectangleType::Plain,
            1 => CdxRectangleType::RoundEdge,
            2 => CdxRectangleType::Shadow,
            4 => CdxRectangleType::Shaded,
            8 => CdxRectangleType::Filled,
            16 => CdxRectangleType::Dashed,
            32 => CdxRectangleType::Bold,
            other => return Err(UnknownEnumValueError::new("CDXRectangleType", other.to_string()).into()),
        };
        Ok(rectangle)
    }

    pub fn value(self) -> i64 {
        self as i64
    }

    pub fn as_attribute_value(self) -> &'static str {
        match self {
            CdxRectangleType::Plain => "Plain",
            CdxRectangleType::RoundEdge => "RoundEdge",
            CdxRectangleType::Shadow => "Shadow",
            CdxRectangleType::Shaded => "Shaded",
            CdxRectangleType::Filled => "Filled",
            CdxRectangleType::Dashed => "Dashed",
            CdxRectangleType::Bold => "Bold",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, EnumString)]
pub enum CdxLineType {
    Solid = 0,
    Dashed = 1,
    Bold = 2,
    Wavy = 4,
}

impl CdxLineType {
    pub fn from_value(value: i64) -> Result<Self> {
        let line = match value {
            0 => CdxLineType::Solid,
            1 => CdxLineType::Dashed,
            2 => CdxLineType::Bold,
            4 => CdxLineType::Wavy,
            other => return Err(UnknownEnumValueError::new("CDXLineType", other.to_string()).into()),
        };
        Ok(line)
    }

    pub fn value(self) -> i64 {
        self as i64
    }

    pub fn as_attribute_value(self) -> &'static str {
        match self {
            CdxLineType::Solid => "Solid",
            CdxLineType::Dashed => "Dashed",
            CdxLineType::Bold => "Bold",
            CdxLineType::Wavy => "Wavy",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, EnumString)]
pub enum CdxPolymerRepeatPattern {
    HeadToTail = 0,
    HeadToHead = 1,
    EitherUnknown = 2,
}

impl CdxPolymerRepeatPattern {
    pub fn from_value(value: i64) -> Result<Self> {
        let pattern = match value {
            0 => CdxPolymerRepeatPattern::HeadToTail,
            1 => CdxPolymerRepeatPattern::HeadToHead,
            2 => CdxPolymerRepeatPattern::EitherUnknown,
            other => {
                return Err(UnknownEnumValueError::new("CDXPolymerRepeatPattern", other.to_string()).into())
            }
        };
        Ok(pattern)
    }

    pub fn value(self) -> i64 {
        self as i64
    }

    pub fn as_attribute_value(self) -> &'static str {
        match self {
            CdxPolymerRepeatPattern::HeadToTail => "HeadToTail",
            CdxPolymerRepeatPattern::HeadToHead => "HeadToHead",
            CdxPolymerRepeatPattern::EitherUnknown => "EitherUnknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, EnumString)]
pub enum CdxPolymerFlipType {
    Unspecified = 0,
    NoFlip = 1,
    Flip = 2,
}

impl CdxPolymerFlipType {
    pub fn from_value(value: i64) -> Result<Self> {
        let flip = match value {
            0 => CdxPolymerFlipType::Unspecified,
            1 => CdxPolymerFlipType::NoFlip,
            2 => CdxPolymerFlipType::Flip,
            other => return Err(UnknownEnumValueError::new("CDXPolymerFlipType", other.to_string()).into()),
        };
        Ok(flip)
    }

    pub fn value(self) -> i64 {
        self as i64
    }

    pub fn as_attribute_value(self) -> &'static str {
        match self {
            CdxPolymerFlipType::Unspecified => "Unspecified",
            CdxPolymerFlipType::NoFlip => "NoFlip",
            CdxPolymerFlipType::Flip => "Flip",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, EnumString)]
pub enum CdxConstraintType {
    Undefined = 0,
    Distance = 1,
    Angle = 2,
    ExclusionSphere = 3,
}

impl CdxConstraintType {
    pub fn from_value(value: i64) -> Result<Self> {
        let constraint = match value {
            0 => CdxConstraintType::Undefined,
            1 => CdxConstraintType::Distance,
            2 => CdxConstraintType::Angle,
            3 => CdxConstraintType::ExclusionSphere,
            other => return Err(UnknownEnumValueError::new("CDXConstraintType", other.to_string()).into()),
        };
        Ok(constraint)
    }

    pub fn value(self) -> i64 {
        self as i64
    }

    pub fn as_attribute_value(self) -> &'static str {
        match self {
            CdxConstraintType::Undefined => "Undefined",
            CdxConstraintType::Distance => "Distance",
            CdxConstraintType::Angle => "Angle",
            CdxConstraintType::ExclusionSphere => "ExclusionSphere",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bond_order_accepts_numeric_and_symbolic() {
        assert_eq!(CdxBondOrder::from_attribute("1").unwrap(), CdxBondOrder::Single);
        assert_eq!(CdxBondOrder::from_attribute("1.5").unwrap(), CdxBondOrder::OneAndAHalf);
        assert_eq!(CdxBondOrder::from_attribute("Single").unwrap(), CdxBondOrder::Single);
        assert_eq!(CdxBondOrder::from_attribute("dative").unwrap(), CdxBondOrder::Dative);
        assert!(CdxBondOrder::from_attribute("7").is_err());
    }

    #[test]
    fn test_bond_order_survives_high_bit_values() {
        assert_eq!(
            CdxBondOrder::from_bytes(&[0xFF, 0xFF]).unwrap(),
            CdxBondOrder::Unspecified
        );
        assert_eq!(
            CdxBondOrder::from_bytes(&[0x00, 0x80]).unwrap(),
            CdxBondOrder::ThreeCenter
        );
        assert_eq!(CdxBondOrder::ThreeCenter.to_bytes(), vec![0x00, 0x80]);
    }

    #[test]
    fn test_double_bond_position_drops_manual_marker() {
        let manual = CdxDoubleBondPosition::from_value(257).unwrap();
        assert_eq!(manual.as_attribute_value(), "Right");
        assert_eq!(manual.value(), 257);
    }

    #[test]
    fn test_bracket_usage_preserves_legacy_extra_byte() {
        let usage = CdxBracketUsage::from_bytes(&[3, 0]).unwrap();
        assert_eq!(usage.usage, BracketUsage::SRU);
        assert_eq!(usage.as_attribute_value(), "SRU");
        assert_eq!(usage.to_bytes(), vec![3, 0]);

        let plain = CdxBracketUsage::from_attribute("SRU").unwrap();
        assert_eq!(plain.to_bytes(), vec![3]);
    }

    #[test]
    fn test_stereo_lowercase_spellings() {
        use std::str::FromStr;
        assert_eq!(CdxAtomStereo::from_str("r").unwrap(), CdxAtomStereo::PseudoR);
        assert_eq!(CdxAtomStereo::PseudoS.as_attribute_value(), "s");
    }

    #[test]
    fn test_symbol_type_lone_pair_spelling() {
        assert_eq!(CdxSymbolType::from_value(13).unwrap().as_attribute_value(), "LonePair");
    }

    #[test]
    fn test_fill_type_none_spelling() {
        use std::str::FromStr;
        assert_eq!(CdxFillType::from_value(1).unwrap().as_attribute_value(), "None");
        assert_eq!(CdxFillType::from_str("None").unwrap(), CdxFillType::NoFill);
    }

    #[test]
    fn test_justification_negative_value() {
        assert_eq!(CdxJustification::from_value(-1).unwrap(), CdxJustification::Right);
        assert_eq!(CdxJustification::Right.value(), -1);
    }

    #[test]
    fn test_atom_geometry_numeric_spellings() {
        use std::str::FromStr;
        assert_eq!(CdxAtomGeometry::from_str("5").unwrap(), CdxAtomGeometry::Coordination5);
        assert_eq!(CdxAtomGeometry::from_str("Tetrahedral").unwrap(), CdxAtomGeometry::Tetrahedral);
        assert_eq!(CdxAtomGeometry::Coordination5.as_attribute_value(), "5");
    }

    #[test]
    fn test_unknown_value_is_rejected() {
        assert!(CdxBondDisplay::from_value(99).is_err());
        assert!(CdxNodeType::from_value(-2).is_err());
    }
}
