//! Category membership from the link graph (`NodeCategories.json`)
//!
//! Each category owns every node reachable from its root.

use super::graph::depth_first;
use super::{CATEGORIES_FILE, LINKS_FILE, write_json};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::formats::external::{CategoryMap, LinkMap, NodeRef, read_links};
use indexmap::IndexMap;
use std::path::PathBuf;

/// Walk the link graph from each category root.
///
/// Members are listed in visit order, root first, as id strings. A root that
/// has no entry in the link graph forms a category of its own.
///
/// # Errors
/// Returns [`Error::UnknownNode`] if a root is not a valid variant id.
pub fn generate_categories(links: &LinkMap, roots: &IndexMap<String, NodeRef>) -> Result<CategoryMap> {
    let mut categories = CategoryMap::with_capacity(roots.len());

    for (category, root) in roots {
        let root_id = root.id().ok_or_else(|| Error::UnknownNode {
            category: category.clone(),
            id: root.to_string(),
        })?;

        let members = depth_first(root_id, |id| {
            let next = links
                .get(&id.to_string())
                .map(|targets| targets.iter().filter_map(NodeRef::id).collect())
                .unwrap_or_default();
            Ok(next)
        })?;

        tracing::debug!("Category {} has {} nodes", category, members.len());
        categories.insert(category.clone(), members.into_iter().map(NodeRef::from).collect());
    }

    Ok(categories)
}

/// Generate category membership from `NodeLinks.json` and write it next to it
///
/// # Errors
/// Returns an error if the link graph cannot be read, a root is invalid, or
/// the output cannot be written.
pub fn export_categories(config: &Config) -> Result<PathBuf> {
    tracing::info!("Generating node categories");
    let links = read_links(config.output_path(LINKS_FILE))?;
    let categories = generate_categories(&links, &config.roots)?;

    let path = config.output_path(CATEGORIES_FILE);
    write_json(&path, &categories)?;
    Ok(path)
}
