//! Externally produced skill tree data (`NodeLinks.json`, `NodeCategories.json`)
//!
//! Both files are keyed by stringified variant ids. Ids inside the lists may
//! be JSON strings or integers; either way they must name a non-negative
//! integer, and a string must be spelled the way the id prints (`"5"`, never
//! `"05"` or `"+5"`), since links are looked up by that spelling. The original
//! JSON form is kept so the aggregate output passes the values through
//! untouched.

use super::read_source;
use crate::error::{Error, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Link graph: variant id string -> linked variant ids
pub type LinkMap = IndexMap<String, Vec<NodeRef>>;

/// Category membership: category name -> member variant ids
pub type CategoryMap = IndexMap<String, Vec<NodeRef>>;

/// A variant id as written in an external JSON file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeRef {
    Index(u32),
    Text(String),
}

impl NodeRef {
    /// The numeric variant id, if this reference is well formed
    pub fn id(&self) -> Option<u32> {
        match self {
            NodeRef::Index(id) => Some(*id),
            NodeRef::Text(text) => parse_id(text),
        }
    }
}

/// Parse a variant id written as text; only the canonical spelling is accepted
pub fn parse_id(text: &str) -> Option<u32> {
    text.parse::<u32>()
        .ok()
        .filter(|id| id.to_string() == text)
}

impl From<u32> for NodeRef {
    fn from(id: u32) -> Self {
        NodeRef::Text(id.to_string())
    }
}

impl fmt::Display for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeRef::Index(id) => write!(f, "{id}"),
            NodeRef::Text(text) => f.write_str(text),
        }
    }
}

/// Read and validate the link graph
///
/// # Errors
/// Returns an error if the file is missing, is not an object of id lists,
/// or contains an id that is not a non-negative integer.
pub fn read_links<P: AsRef<Path>>(path: P) -> Result<LinkMap> {
    let path = path.as_ref();
    let links: LinkMap = read_json(path)?;

    for (key, targets) in &links {
        if parse_id(key).is_none() {
            return Err(invalid(key, path));
        }
        validate_refs(targets, path)?;
    }

    tracing::debug!("Loaded links for {} nodes from {}", links.len(), path.display());
    Ok(links)
}

/// Read and validate category membership
///
/// # Errors
/// Returns an error if the file is missing, is not an object of id lists,
/// or contains an id that is not a non-negative integer.
pub fn read_categories<P: AsRef<Path>>(path: P) -> Result<CategoryMap> {
    let path = path.as_ref();
    let categories: CategoryMap = read_json(path)?;

    for members in categories.values() {
        validate_refs(members, path)?;
    }

    tracing::debug!("Loaded {} categories from {}", categories.len(), path.display());
    Ok(categories)
}

pub(crate) fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let content = read_source(path)?;
    serde_json::from_str(&content).map_err(|source| Error::JsonFile {
        path: path.to_path_buf(),
        source,
    })
}

fn validate_refs(refs: &[NodeRef], path: &Path) -> Result<()> {
    match refs.iter().find(|r| r.id().is_none()) {
        Some(bad) => Err(invalid(&format!("{bad:?}"), path)),
        None => Ok(()),
    }
}

fn invalid(value: &str, path: &Path) -> Error {
    Error::InvalidNodeRef {
        value: value.to_string(),
        path: path.to_path_buf(),
    }
}
