//! Error types for `MechTree`

use std::path::PathBuf;

use thiserror::Error;

/// The error type for `MechTree` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error tied to a specific input or output file.
    #[error("failed to access {path}: {source}")]
    FileAccess {
        /// The file being read or written.
        path: PathBuf,
        /// The underlying IO error.
        source: std::io::Error,
    },

    // ==================== Parsing Errors ====================
    /// XML parsing error.
    #[error("XML parse error: {0}")]
    XmlError(#[from] quick_xml::Error),

    /// XML attribute error.
    #[error("XML attribute error: {0}")]
    XmlAttrError(String),

    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// JSON error tied to a specific input file.
    #[error("invalid JSON in {path}: {source}")]
    JsonFile {
        /// The file being parsed.
        path: PathBuf,
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    /// TOML configuration error.
    #[error("invalid config {path}: {source}")]
    Config {
        /// The configuration file.
        path: PathBuf,
        /// The underlying TOML error.
        source: toml::de::Error,
    },

    // ==================== Source Document Errors ====================
    /// A required attribute is missing from an element.
    #[error("<{element}> is missing required attribute '{attribute}'")]
    MissingAttribute {
        /// The element name.
        element: &'static str,
        /// The attribute name.
        attribute: &'static str,
    },

    /// An attribute that must be an integer is not one.
    #[error("<{element} name=\"{name}\"> has non-integer {attribute}: {value:?}")]
    InvalidInteger {
        /// The element name.
        element: &'static str,
        /// The `name` attribute of the element.
        name: String,
        /// The attribute name.
        attribute: &'static str,
        /// The raw attribute value.
        value: String,
    },

    /// An effect or discriminator value that is not a number.
    #[error("'{name}' has non-numeric value {value:?}")]
    InvalidNumber {
        /// The `name` attribute of the element.
        name: String,
        /// The raw attribute value.
        value: String,
    },

    // ==================== Localization Errors ====================
    /// A label cell whose row has no translation cell.
    #[error("locale label '{label}' (row {row}) has no translation cell")]
    MissingTranslationCell {
        /// The label text.
        label: String,
        /// Zero-based row index in the workbook.
        row: usize,
    },

    /// A description entry with no matching name entry.
    #[error("description for '{key}' has no matching name entry")]
    OrphanDescription {
        /// The upper-cased node key.
        key: String,
    },

    // ==================== Join Errors ====================
    /// A variant with no localization entry.
    #[error("node '{name}' has no localization entry '{key}'")]
    MissingLocalization {
        /// The variant name.
        name: String,
        /// The upper-cased lookup key.
        key: String,
    },

    /// A localization entry with no description.
    #[error("localization entry '{key}' has no description")]
    MissingDescription {
        /// The upper-cased lookup key.
        key: String,
    },

    /// A variant with no display location.
    #[error("node '{name}' has no display location")]
    MissingLocation {
        /// The variant name.
        name: String,
    },

    /// A variant referencing a base node that does not exist.
    #[error("node '{name}' references base node {base} (only {count} defined)")]
    BaseNodeOutOfRange {
        /// The variant name.
        name: String,
        /// The referenced base index.
        base: usize,
        /// Number of base nodes defined.
        count: usize,
    },

    /// A variant not listed in any category.
    #[error("node '{name}' (id {id}) is not a member of any category")]
    Uncategorized {
        /// The variant name.
        name: String,
        /// The variant id.
        id: u32,
    },

    /// A variant listed in more than one category.
    #[error("node id {id} is listed in both '{first}' and '{second}'")]
    ConflictingCategory {
        /// The variant id.
        id: u32,
        /// The category that listed it first.
        first: String,
        /// The category that listed it again.
        second: String,
    },

    /// A category with no entry in the root table.
    #[error("category '{0}' has no root node configured")]
    UnknownCategory(String),

    /// A node id in an external JSON file that is not a non-negative integer.
    #[error("invalid node id {value} in {path}")]
    InvalidNodeRef {
        /// The offending JSON value.
        value: String,
        /// The file it came from.
        path: PathBuf,
    },

    /// A link or root pointing at a node that is not in the skill tree.
    #[error("category '{category}' references unknown node {id}")]
    UnknownNode {
        /// The category being processed.
        category: String,
        /// The missing node id.
        id: String,
    },
}

// Add conversion from quick_xml::events::attributes::AttrError
impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Error::XmlAttrError(err.to_string())
    }
}

/// A specialized Result type for `MechTree` operations.
pub type Result<T> = std::result::Result<T, Error>;
