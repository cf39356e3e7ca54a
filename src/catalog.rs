//! The tag catalog: static lookup tables mapping cdx object tags to cdxml
//! element names and cdx property tags to attribute names and value kinds.
//! The original catalogs ship as external data tables; here they are compiled
//! in and materialized once into forward and inverse maps.

use crate::types::ValueKind;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Describes an object tag: a 16 bit identifier with bit 15 set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectDef {
    pub tag: u16,
    pub element_name: &'static str,
}

/// Describes a property tag: a 16 bit identifier with bit 15 clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyDef {
    pub tag: u16,
    pub name: &'static str,
    pub kind: ValueKind,
}

/// The sentinel closing the current object.
pub const END_OF_OBJECT: u16 = 0x0000;

/// The object tag of the document itself.
pub const DOCUMENT_TAG: u16 = 0x8000;

/// Objects and properties share one 16 bit tag space, split by the top bit.
/// This type is the single classification point for raw tag words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CdxTag {
    EndOfObject,
    Object(u16),
    Property(u16),
}

impl CdxTag {
    pub fn classify(raw: u16) -> CdxTag {
        if raw == END_OF_OBJECT {
            CdxTag::EndOfObject
        } else if raw & 0x8000 != 0 {
            CdxTag::Object(raw)
        } else {
            CdxTag::Property(raw)
        }
    }
}

static OBJECTS: &[ObjectDef] = &[
    ObjectDef { tag: 0x8000, element_name: "CDXML" },
    ObjectDef { tag: 0x8001, element_name: "page" },
    ObjectDef { tag: 0x8002, element_name: "group" },
    ObjectDef { tag: 0x8003, element_name: "fragment" },
    ObjectDef { tag: 0x8004, element_name: "n" },
    ObjectDef { tag: 0x8005, element_name: "b" },
    ObjectDef { tag: 0x8006, element_name: "t" },
    ObjectDef { tag: 0x8007, element_name: "graphic" },
    ObjectDef { tag: 0x8008, element_name: "curve" },
    ObjectDef { tag: 0x8009, element_name: "embeddedobject" },
    ObjectDef { tag: 0x800A, element_name: "altgroup" },
    ObjectDef { tag: 0x800B, element_name: "templategrid" },
    ObjectDef { tag: 0x800C, element_name: "regnum" },
    ObjectDef { tag: 0x800D, element_name: "scheme" },
    ObjectDef { tag: 0x800E, element_name: "step" },
    ObjectDef { tag: 0x800F, element_name: "objectdefinition" },
    ObjectDef { tag: 0x8010, element_name: "spectrum" },
    ObjectDef { tag: 0x8011, element_name: "objecttag" },
    ObjectDef { tag: 0x8012, element_name: "sequence" },
    ObjectDef { tag: 0x8013, element_name: "crossreference" },
    ObjectDef { tag: 0x8014, element_name: "splitter" },
    ObjectDef { tag: 0x8015, element_name: "table" },
    ObjectDef { tag: 0x8016, element_name: "bracketedgroup" },
    ObjectDef { tag: 0x8017, element_name: "bracketattachment" },
    ObjectDef { tag: 0x8018, element_name: "crossingbond" },
    ObjectDef { tag: 0x8019, element_name: "border" },
    ObjectDef { tag: 0x801A, element_name: "geometry" },
    ObjectDef { tag: 0x801B, element_name: "constraint" },
    ObjectDef { tag: 0x801C, element_name: "tlcplate" },
    ObjectDef { tag: 0x801D, element_name: "tlclane" },
    ObjectDef { tag: 0x801E, element_name: "tlcspot" },
    ObjectDef { tag: 0x801F, element_name: "chemicalproperty" },
    ObjectDef { tag: 0x8020, element_name: "arrow" },
    ObjectDef { tag: 0x8021, element_name: "stoichiometrygrid" },
    ObjectDef { tag: 0x8022, element_name: "sgcomponent" },
    ObjectDef { tag: 0x8023, element_name: "sgdatum" },
    ObjectDef { tag: 0x8024, element_name: "bioshape" },
    ObjectDef { tag: 0x8025, element_name: "plasmidmap" },
    ObjectDef { tag: 0x8026, element_name: "plasmidmarker" },
    ObjectDef { tag: 0x8027, element_name: "plasmidregion" },
    ObjectDef { tag: 0x8028, element_name: "rlogic" },
    ObjectDef { tag: 0x8029, element_name: "rlogicitem" },
    ObjectDef { tag: 0x802A, element_name: "annotation" },
];

static PROPERTIES: &[PropertyDef] = &[
    PropertyDef { tag: 0x0001, name: "CreationUserName", kind: ValueKind::String },
    PropertyDef { tag: 0x0002, name: "CreationDate", kind: ValueKind::Unformatted },
    PropertyDef { tag: 0x0003, name: "CreationProgram", kind: ValueKind::String },
    PropertyDef { tag: 0x0004, name: "ModificationUserName", kind: ValueKind::String },
    PropertyDef { tag: 0x0005, name: "ModificationDate", kind: ValueKind::Unformatted },
    PropertyDef { tag: 0x0006, name: "ModificationProgram", kind: ValueKind::String },
    PropertyDef { tag: 0x0008, name: "Name", kind: ValueKind::String },
    PropertyDef { tag: 0x0009, name: "Comment", kind: ValueKind::String },
    PropertyDef { tag: 0x000A, name: "Z", kind: ValueKind::Int16 },
    PropertyDef { tag: 0x000B, name: "RegistryNumber", kind: ValueKind::String },
    PropertyDef { tag: 0x000C, name: "RegistryAuthority", kind: ValueKind::String },
    PropertyDef { tag: 0x000F, name: "IgnoreWarnings", kind: ValueKind::BooleanImplied },
    PropertyDef { tag: 0x0010, name: "ChemicalWarning", kind: ValueKind::String },
    PropertyDef { tag: 0x0011, name: "Visible", kind: ValueKind::Boolean },
    PropertyDef { tag: 0x0100, name: "fonttable", kind: ValueKind::FontTable },
    PropertyDef { tag: 0x0200, name: "p", kind: ValueKind::Point2D },
    PropertyDef { tag: 0x0201, name: "xyz", kind: ValueKind::Point3D },
    PropertyDef { tag: 0x0204, name: "BoundingBox", kind: ValueKind::Rectangle },
    PropertyDef { tag: 0x0205, name: "RotationAngle", kind: ValueKind::Int32 },
    PropertyDef { tag: 0x0206, name: "BoundsInParent", kind: ValueKind::Rectangle },
    PropertyDef { tag: 0x0207, name: "Head3D", kind: ValueKind::Point3D },
    PropertyDef { tag: 0x0208, name: "Tail3D", kind: ValueKind::Point3D },
    PropertyDef { tag: 0x0209, name: "TopLeft", kind: ValueKind::Point2D },
    PropertyDef { tag: 0x020A, name: "TopRight", kind: ValueKind::Point2D },
    PropertyDef { tag: 0x020B, name: "BottomRight", kind: ValueKind::Point2D },
    PropertyDef { tag: 0x020C, name: "BottomLeft", kind: ValueKind::Point2D },
    PropertyDef { tag: 0x0300, name: "colortable", kind: ValueKind::ColorTable },
    PropertyDef { tag: 0x0301, name: "color", kind: ValueKind::Uint16 },
    PropertyDef { tag: 0x0302, name: "bgcolor", kind: ValueKind::Uint16 },
    PropertyDef { tag: 0x0400, name: "NodeType", kind: ValueKind::NodeType },
    PropertyDef { tag: 0x0401, name: "LabelDisplay", kind: ValueKind::Justification },
    PropertyDef { tag: 0x0402, name: "Element", kind: ValueKind::Int16 },
    PropertyDef { tag: 0x0403, name: "ElementList", kind: ValueKind::Int16ListWithCounts },
    PropertyDef { tag: 0x0404, name: "Formula", kind: ValueKind::String },
    PropertyDef { tag: 0x0420, name: "Isotope", kind: ValueKind::Int16 },
    PropertyDef { tag: 0x0421, name: "Charge", kind: ValueKind::Int8 },
    PropertyDef { tag: 0x0422, name: "Radical", kind: ValueKind::Uint8 },
    PropertyDef { tag: 0x042B, name: "NumHydrogens", kind: ValueKind::Uint16 },
    PropertyDef { tag: 0x0430, name: "Geometry", kind: ValueKind::AtomGeometry },
    PropertyDef { tag: 0x0431, name: "BondOrdering", kind: ValueKind::ObjectIdArray },
    PropertyDef { tag: 0x0432, name: "Attachments", kind: ValueKind::ObjectIdArray },
    PropertyDef { tag: 0x0433, name: "GenericNickname", kind: ValueKind::String },
    PropertyDef { tag: 0x0434, name: "AltGroupID", kind: ValueKind::Uint32 },
    PropertyDef { tag: 0x0437, name: "AS", kind: ValueKind::AtomStereo },
    PropertyDef { tag: 0x0439, name: "AtomNumber", kind: ValueKind::String },
    PropertyDef { tag: 0x043C, name: "ShowAtomNumber", kind: ValueKind::BooleanImplied },
    PropertyDef { tag: 0x0441, name: "NeedsClean", kind: ValueKind::BooleanImplied },
    PropertyDef { tag: 0x0500, name: "Racemic", kind: ValueKind::BooleanImplied },
    PropertyDef { tag: 0x0501, name: "Absolute", kind: ValueKind::BooleanImplied },
    PropertyDef { tag: 0x0502, name: "Relative", kind: ValueKind::BooleanImplied },
    PropertyDef { tag: 0x0505, name: "ConnectionOrder", kind: ValueKind::ObjectIdArray },
    PropertyDef { tag: 0x0600, name: "Order", kind: ValueKind::BondOrder },
    PropertyDef { tag: 0x0601, name: "Display", kind: ValueKind::BondDisplay },
    PropertyDef { tag: 0x0602, name: "Display2", kind: ValueKind::BondDisplay },
    PropertyDef { tag: 0x0603, name: "DoublePosition", kind: ValueKind::DoubleBondPosition },
    PropertyDef { tag: 0x0604, name: "B", kind: ValueKind::Uint32 },
    PropertyDef { tag: 0x0605, name: "E", kind: ValueKind::Uint32 },
    PropertyDef { tag: 0x060A, name: "BS", kind: ValueKind::BondStereo },
    PropertyDef { tag: 0x060B, name: "BondCircularOrdering", kind: ValueKind::ObjectIdArray },
    PropertyDef { tag: 0x0700, name: "Text", kind: ValueKind::String },
    PropertyDef { tag: 0x0701, name: "Justification", kind: ValueKind::Justification },
    PropertyDef { tag: 0x0702, name: "LineHeight", kind: ValueKind::LineHeight },
    PropertyDef { tag: 0x0703, name: "WordWrapWidth", kind: ValueKind::Int16 },
    PropertyDef { tag: 0x0704, name: "LineStarts", kind: ValueKind::Int16ListWithCounts },
    PropertyDef { tag: 0x0705, name: "LabelAlignment", kind: ValueKind::LabelAlignment },
    PropertyDef { tag: 0x0706, name: "LabelLineHeight", kind: ValueKind::LineHeight },
    PropertyDef { tag: 0x0707, name: "CaptionLineHeight", kind: ValueKind::LineHeight },
    // documented as implied booleans, but real files carry a value byte
    PropertyDef { tag: 0x0708, name: "InterpretChemically", kind: ValueKind::Boolean },
    PropertyDef { tag: 0x0800, name: "MacPrintInfo", kind: ValueKind::Unformatted },
    PropertyDef { tag: 0x0801, name: "WinPrintInfo", kind: ValueKind::Unformatted },
    PropertyDef { tag: 0x0802, name: "PrintMargins", kind: ValueKind::Rectangle },
    PropertyDef { tag: 0x0803, name: "ChainAngle", kind: ValueKind::Int32 },
    PropertyDef { tag: 0x0804, name: "BondSpacing", kind: ValueKind::BondSpacing },
    PropertyDef { tag: 0x0805, name: "BondLength", kind: ValueKind::Coordinate },
    PropertyDef { tag: 0x0806, name: "BoldWidth", kind: ValueKind::Coordinate },
    PropertyDef { tag: 0x0807, name: "LineWidth", kind: ValueKind::Coordinate },
    PropertyDef { tag: 0x0808, name: "MarginWidth", kind: ValueKind::Coordinate },
    PropertyDef { tag: 0x0809, name: "HashSpacing", kind: ValueKind::Coordinate },
    PropertyDef { tag: 0x080A, name: "LabelStyle", kind: ValueKind::FontStyle },
    PropertyDef { tag: 0x080B, name: "CaptionStyle", kind: ValueKind::FontStyle },
    PropertyDef { tag: 0x080C, name: "CaptionJustification", kind: ValueKind::Justification },
    PropertyDef { tag: 0x080D, name: "FractionalWidths", kind: ValueKind::Boolean },
    PropertyDef { tag: 0x080E, name: "Magnification", kind: ValueKind::Int16 },
    PropertyDef { tag: 0x080F, name: "WidthPages", kind: ValueKind::Int16 },
    PropertyDef { tag: 0x0810, name: "HeightPages", kind: ValueKind::Int16 },
    PropertyDef { tag: 0x0822, name: "BondSpacingAbs", kind: ValueKind::Coordinate },
    PropertyDef { tag: 0x0823, name: "LabelJustification", kind: ValueKind::Justification },
    PropertyDef { tag: 0x0827, name: "HideImplicitHydrogens", kind: ValueKind::Boolean },
    PropertyDef { tag: 0x0900, name: "WindowIsZoomed", kind: ValueKind::BooleanImplied },
    PropertyDef { tag: 0x0901, name: "WindowPosition", kind: ValueKind::Point2D },
    PropertyDef { tag: 0x0902, name: "WindowSize", kind: ValueKind::Point2D },
    PropertyDef { tag: 0x0A00, name: "GraphicType", kind: ValueKind::GraphicType },
    PropertyDef { tag: 0x0A01, name: "LineType", kind: ValueKind::LineType },
    PropertyDef { tag: 0x0A02, name: "ArrowType", kind: ValueKind::ArrowType },
    PropertyDef { tag: 0x0A03, name: "RectangleType", kind: ValueKind::RectangleType },
    PropertyDef { tag: 0x0A04, name: "OvalType", kind: ValueKind::OvalType },
    PropertyDef { tag: 0x0A05, name: "OrbitalType", kind: ValueKind::OrbitalType },
    PropertyDef { tag: 0x0A06, name: "BracketType", kind: ValueKind::BracketType },
    PropertyDef { tag: 0x0A07, name: "SymbolType", kind: ValueKind::SymbolType },
    PropertyDef { tag: 0x0A09, name: "FillType", kind: ValueKind::FillType },
    PropertyDef { tag: 0x0A20, name: "HeadSize", kind: ValueKind::Int16 },
    PropertyDef { tag: 0x0A21, name: "AngularSize", kind: ValueKind::Int16 },
    PropertyDef { tag: 0x0A22, name: "LipSize", kind: ValueKind::Int16 },
    PropertyDef { tag: 0x0A24, name: "BracketUsage", kind: ValueKind::BracketUsage },
    PropertyDef { tag: 0x0A25, name: "PolymerRepeatPattern", kind: ValueKind::PolymerRepeatPattern },
    PropertyDef { tag: 0x0A26, name: "PolymerFlipType", kind: ValueKind::PolymerFlipType },
    PropertyDef { tag: 0x0A27, name: "BracketedObjectIDs", kind: ValueKind::ObjectIdArray },
    PropertyDef { tag: 0x0A29, name: "ComponentOrder", kind: ValueKind::Int16 },
    PropertyDef { tag: 0x0A2A, name: "SRULabel", kind: ValueKind::String },
    PropertyDef { tag: 0x0A2B, name: "GraphicID", kind: ValueKind::Uint32 },
    PropertyDef { tag: 0x0A2C, name: "BondID", kind: ValueKind::Uint32 },
    PropertyDef { tag: 0x0A2D, name: "InnerAtomID", kind: ValueKind::Uint32 },
    PropertyDef { tag: 0x0B00, name: "ConstraintType", kind: ValueKind::ConstraintType },
    PropertyDef { tag: 0x0C00, name: "AminoAcidTermini", kind: ValueKind::AminoAcidTermini },
    PropertyDef { tag: 0x0C01, name: "ShowSequenceTermini", kind: ValueKind::Boolean },
    PropertyDef { tag: 0x0C02, name: "ShowSequenceBonds", kind: ValueKind::Boolean },
    PropertyDef { tag: 0x0D00, name: "PositioningType", kind: ValueKind::PositioningType },
    PropertyDef { tag: 0x0D01, name: "PositioningAngle", kind: ValueKind::Int32 },
    PropertyDef { tag: 0x0D02, name: "PositioningOffset", kind: ValueKind::Point2D },
    PropertyDef { tag: 0x0E00, name: "TagType", kind: ValueKind::TagType },
    PropertyDef { tag: 0x0E01, name: "ArrowheadType", kind: ValueKind::ArrowHeadType },
    PropertyDef { tag: 0x0E02, name: "ArrowheadHead", kind: ValueKind::ArrowHeadPosition },
    PropertyDef { tag: 0x0E03, name: "ArrowheadTail", kind: ValueKind::ArrowHeadPosition },
    PropertyDef { tag: 0x0E04, name: "ArrowheadCenterSize", kind: ValueKind::Uint16 },
    PropertyDef { tag: 0x0E05, name: "ArrowheadWidth", kind: ValueKind::Uint16 },
    // not in the published specification, carries the text of a t object as utf-8
    PropertyDef { tag: 0x0E10, name: "UTF8Text", kind: ValueKind::Utf8String },
    PropertyDef { tag: 0x0F00, name: "AutonumberStyle", kind: ValueKind::AutonumberStyle },
];

/// Forward and inverse lookups over the static tag tables. Built once, then
/// read only and freely shareable between threads.
#[derive(Debug)]
pub struct Catalog {
    object_by_tag: HashMap<u16, &'static ObjectDef>,
    object_by_element_name: HashMap<&'static str, &'static ObjectDef>,
    property_by_tag: HashMap<u16, &'static PropertyDef>,
    property_by_name: HashMap<&'static str, &'static PropertyDef>,
}

impl Catalog {
    fn build() -> Self {
        let mut object_by_tag = HashMap::with_capacity(OBJECTS.len());
        let mut object_by_element_name = HashMap::with_capacity(OBJECTS.len());
        for object in OBJECTS {
            object_by_tag.insert(object.tag, object);
            object_by_element_name.insert(object.element_name, object);
        }
        let mut property_by_tag = HashMap::with_capacity(PROPERTIES.len());
        let mut property_by_name = HashMap::with_capacity(PROPERTIES.len());
        for property in PROPERTIES {
            property_by_tag.insert(property.tag, property);
            property_by_name.insert(property.name, property);
        }
        Self {
            object_by_tag,
            object_by_element_name,
            property_by_tag,
            property_by_name,
        }
    }

    pub fn global() -> &'static Catalog {
        static CATALOG: OnceLock<Catalog> = OnceLock::new();
        CATALOG.get_or_init(Catalog::build)
    }

    pub fn object_by_tag(&self, tag: u16) -> Option<&'static ObjectDef> {
        self.object_by_tag.get(&tag).copied()
    }

    pub fn object_by_element_name(&self, name: &str) -> Option<&'static ObjectDef> {
        self.object_by_element_name.get(name).copied()
    }

    pub fn property_by_tag(&self, tag: u16) -> Option<&'static PropertyDef> {
        self.property_by_tag.get(&tag).copied()
    }

    pub fn property_by_name(&self, name: &str) -> Option<&'static PropertyDef> {
        self.property_by_name.get(name).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_space_partition() {
        for object in OBJECTS {
            assert_ne!(object.tag & 0x8000, 0, "object tag {:#06X} has bit 15 clear", object.tag);
        }
        for property in PROPERTIES {
            assert_eq!(property.tag & 0x8000, 0, "property tag {:#06X} has bit 15 set", property.tag);
            assert_ne!(property.tag, END_OF_OBJECT);
        }
    }

    #[test]
    fn test_no_duplicate_tags_or_names() {
        let catalog = Catalog::global();
        assert_eq!(catalog.object_by_tag.len(), OBJECTS.len());
        assert_eq!(catalog.object_by_element_name.len(), OBJECTS.len());
        assert_eq!(catalog.property_by_tag.len(), PROPERTIES.len());
        assert_eq!(catalog.property_by_name.len(), PROPERTIES.len());
    }

    #[test]
    fn test_inverse_lookups_agree() {
        let catalog = Catalog::global();
        let fragment = catalog.object_by_element_name("fragment").unwrap();
        assert_eq!(catalog.object_by_tag(fragment.tag).unwrap().element_name, "fragment");

        let position = catalog.property_by_name("p").unwrap();
        assert_eq!(position.kind, crate::types::ValueKind::Point2D);
        assert_eq!(catalog.property_by_tag(position.tag).unwrap().name, "p");
    }

    #[test]
    fn test_classify() {
        assert_eq!(CdxTag::classify(0x0000), CdxTag::EndOfObject);
        assert_eq!(CdxTag::classify(0x8003), CdxTag::Object(0x8003));
        assert_eq!(CdxTag::classify(0x0200), CdxTag::Property(0x0200));
    }
}
