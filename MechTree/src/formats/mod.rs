//! Source document formats
//!
//! Each reader turns one of the game's XML files into ordered, owned records.
//! Nothing here assigns ids or joins documents; that happens in [`crate::extract`].

pub mod definition;
pub mod display;
pub mod external;
pub mod spreadsheet;

pub use definition::{BaseNodeDef, DefinitionDocument, Dimension, parse_definition, read_definition};
pub use display::{DisplayDocument, DisplayNode, parse_display, read_display};
pub use external::{CategoryMap, LinkMap, NodeRef, read_categories, read_links};
pub use spreadsheet::{Cell, CellRef, Row, Workbook, parse_workbook, read_workbook};

use crate::error::{Error, Result};
use quick_xml::events::BytesStart;
use std::fs;
use std::path::Path;

/// Read a source file to a string, keeping the path in the error
pub(crate) fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::FileAccess {
        path: path.to_path_buf(),
        source,
    })
}

/// Look up an attribute by its (unprefixed) key
pub(crate) fn attribute(e: &BytesStart<'_>, key: &str) -> Result<Option<String>> {
    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.local_name().as_ref() == key.as_bytes() {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

/// Look up an attribute that the element cannot do without
pub(crate) fn required_attribute(
    e: &BytesStart<'_>,
    element: &'static str,
    key: &'static str,
) -> Result<String> {
    attribute(e, key)?.ok_or(Error::MissingAttribute {
        element,
        attribute: key,
    })
}
