use std::{
    error::Error,
    fmt::{Display, Formatter, Result},
};

/// An error indicating that the input bytes do not start with the cdx file header
#[derive(Debug, Clone, Copy, Default)]
pub struct NotACdxFileError {}

impl Display for NotACdxFileError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "File is not a valid cdx file. Invalid header found.")
    }
}

impl Error for NotACdxFileError {}

/// An error indicating that the cdx byte stream violates the tagged object structure
/// in a way the reader cannot recover from
#[derive(Debug, Clone, PartialEq)]
pub struct CdxStreamError {
    pub detail: String,
}

impl CdxStreamError {
    pub fn new<T>(detail: T) -> Self
    where
        T: Into<String>,
    {
        Self { detail: detail.into() }
    }
}

impl Display for CdxStreamError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "Malformed cdx stream: {}", self.detail)
    }
}

impl Error for CdxStreamError {}

/// An error indicating that a property payload has the wrong length for its value kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvalidLengthError {
    pub type_name: &'static str,
    pub expected: usize,
    pub found: usize,
}

impl InvalidLengthError {
    pub fn new(type_name: &'static str, expected: usize, found: usize) -> Self {
        Self {
            type_name,
            expected,
            found,
        }
    }
}

impl Display for InvalidLengthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "{} should consist of exactly {} bytes but {} were found",
            self.type_name, self.expected, self.found
        )
    }
}

impl Error for InvalidLengthError {}

/// An error indicating that a value is not a member of an enumerated value kind.
/// The offending value is kept in its textual form, which covers both the numeric
/// binary representation and the cdxml attribute spelling.
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownEnumValueError {
    pub enum_name: &'static str,
    pub value: String,
}

impl UnknownEnumValueError {
    pub fn new<T>(enum_name: &'static str, value: T) -> Self
    where
        T: Into<String>,
    {
        Self {
            enum_name,
            value: value.into(),
        }
    }
}

impl Display for UnknownEnumValueError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "Value '{}' is not a valid {}", self.value, self.enum_name)
    }
}

impl Error for UnknownEnumValueError {}

/// Error indicating that a cdxml attribute is not a valid boolean value.
/// Valid boolean values are: yes, no
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidBooleanError {
    pub attr_value: String,
}

impl InvalidBooleanError {
    pub fn new<T>(attr_value: T) -> Self
    where
        T: Into<String>,
    {
        Self {
            attr_value: attr_value.into(),
        }
    }
}

impl Display for InvalidBooleanError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "Found invalid value '{}' for boolean type. Allowed are 'yes' and 'no'.",
            self.attr_value
        )
    }
}

impl Error for InvalidBooleanError {}

/// An error indicating that text could not be represented in the declared charset
#[derive(Debug, Clone, PartialEq)]
pub struct CharsetError {
    pub charset: String,
}

impl CharsetError {
    pub fn new<T>(charset: T) -> Self
    where
        T: Into<String>,
    {
        Self {
            charset: charset.into(),
        }
    }
}

impl Display for CharsetError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "Text cannot be represented in charset '{}'", self.charset)
    }
}

impl Error for CharsetError {}

/// An error indicating that an xml element doesn't have an attribute required by the format
#[derive(Debug, Clone, PartialEq)]
pub struct MissingAttributeError {
    pub node_name: String,
    pub attr: &'static str,
}

impl MissingAttributeError {
    pub fn new<T>(node_name: T, attr: &'static str) -> Self
    where
        T: Into<String>,
    {
        Self {
            node_name: node_name.into(),
            attr,
        }
    }
}

impl Display for MissingAttributeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "Xml element '{}' is missing a required attribute: {}",
            self.node_name, self.attr
        )
    }
}

impl Error for MissingAttributeError {}

/// An error indicating that an xml element doesn't have a child node required by the format
#[derive(Debug, Clone, PartialEq)]
pub struct MissingChildNodeError {
    pub node_name: String,
    pub child_node: &'static str,
}

impl MissingChildNodeError {
    pub fn new<T>(node_name: T, child_node: &'static str) -> Self
    where
        T: Into<String>,
    {
        Self {
            node_name: node_name.into(),
            child_node,
        }
    }
}

impl Display for MissingChildNodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "Xml element '{}' is missing a required child element: {}",
            self.node_name, self.child_node
        )
    }
}

impl Error for MissingChildNodeError {}

/// An error indicating that the parsed xml document is invalid
#[derive(Debug, Clone, Copy, Default)]
pub struct InvalidXmlError {}

impl Display for InvalidXmlError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "Invalid xml document")
    }
}

impl Error for InvalidXmlError {}

/// An error indicating that a fragment has nodes without coordinates and can not be styled
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCoordinatesError {}

impl Display for NoCoordinatesError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "Molecule has no coordinates")
    }
}

impl Error for NoCoordinatesError {}

/// An error indicating that a fragment contains no atoms and can not be styled
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAtomsError {}

impl Display for NoAtomsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "Molecule has no atoms")
    }
}

impl Error for NoAtomsError {}

/// An error indicating that a named style preset does not exist
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownStyleError {
    pub name: String,
}

impl UnknownStyleError {
    pub fn new<T>(name: T) -> Self
    where
        T: Into<String>,
    {
        Self { name: name.into() }
    }
}

impl Display for UnknownStyleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "'{}' is not a valid style", self.name)
    }
}

impl Error for UnknownStyleError {}
