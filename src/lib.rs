#![forbid(unsafe_code)]

pub mod catalog;
pub mod document;
pub mod error;
mod reader;
#[cfg(any(test, feature = "styler"))]
pub mod styler;
pub mod types;
mod writer;
pub mod xml;

extern crate strum;
#[macro_use]
extern crate strum_macros;

pub use crate::document::ChemDrawDocument;
#[cfg(any(test, feature = "styler"))]
pub use crate::styler::{CdxmlStyler, Style};
