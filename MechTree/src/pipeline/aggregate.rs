//! Aggregate export: the joined skill tree (`SkillTree.json`)
//!
//! ```json
//! {
//!   "Firepower": {
//!     "root": "0",
//!     "nodes": {
//!       "0": {"name": "...", "desc": "...", "col": 8, "row": 0, "effects": [...], "links": [...]}
//!     }
//!   }
//! }
//! ```

use super::{CATEGORIES_FILE, Extracted, LINKS_FILE, SKILL_TREE_FILE, SkillData, write_json};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::formats::external::{CategoryMap, LinkMap, NodeRef, read_categories, read_links};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Category name -> subtree
pub type SkillTree = IndexMap<String, CategoryTree>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTree {
    pub root: NodeRef,
    /// Variant id -> node
    pub nodes: IndexMap<u32, TreeNode>,
}

/// One variant as shown in the planner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    pub name: String,
    pub desc: String,
    pub col: i32,
    pub row: i32,
    pub effects: Vec<String>,
    pub links: Vec<NodeRef>,
}

/// Variant id -> owning category, built once from the membership lists
#[derive(Debug, Clone, Default)]
pub struct CategoryIndex {
    by_id: HashMap<u32, String>,
}

impl CategoryIndex {
    /// Invert category membership.
    ///
    /// # Errors
    /// Returns [`Error::ConflictingCategory`] if an id is listed under two
    /// different categories.
    pub fn build(categories: &CategoryMap) -> Result<Self> {
        let mut by_id: HashMap<u32, String> = HashMap::new();

        for (category, members) in categories {
            for id in members.iter().filter_map(NodeRef::id) {
                match by_id.get(&id) {
                    Some(first) if first != category => {
                        return Err(Error::ConflictingCategory {
                            id,
                            first: first.clone(),
                            second: category.clone(),
                        });
                    }
                    Some(_) => {}
                    None => {
                        by_id.insert(id, category.clone());
                    }
                }
            }
        }

        Ok(Self { by_id })
    }

    pub fn category_of(&self, id: u32) -> Option<&str> {
        self.by_id.get(&id).map(String::as_str)
    }
}

/// Join extractor output with the link graph and category membership.
///
/// Categories appear in membership-file order; nodes appear in variant order.
///
/// # Errors
/// Returns an error if any variant cannot be fully resolved (no base node,
/// location, localization, description or category), or if a category has
/// no root configured.
pub fn build_skill_tree(
    extracted: &Extracted,
    categories: &CategoryMap,
    links: &LinkMap,
    roots: &IndexMap<String, NodeRef>,
) -> Result<SkillTree> {
    let index = CategoryIndex::build(categories)?;

    let mut tree = SkillTree::with_capacity(categories.len());
    for category in categories.keys() {
        let root = roots
            .get(category)
            .ok_or_else(|| Error::UnknownCategory(category.clone()))?;
        tree.insert(
            category.clone(),
            CategoryTree {
                root: root.clone(),
                nodes: IndexMap::new(),
            },
        );
    }

    for (name, variant) in &extracted.variants {
        let key = name.to_uppercase();

        let effects = extracted
            .effects
            .get(&variant.base)
            .ok_or_else(|| Error::BaseNodeOutOfRange {
                name: name.clone(),
                base: variant.base,
                count: extracted.effects.len(),
            })?;
        let location = extracted
            .locations
            .get(name)
            .ok_or_else(|| Error::MissingLocation { name: name.clone() })?;
        let local = extracted
            .localizations
            .get(&key)
            .ok_or_else(|| Error::MissingLocalization {
                name: name.clone(),
                key: key.clone(),
            })?;
        let desc = local
            .desc
            .clone()
            .ok_or_else(|| Error::MissingDescription { key: key.clone() })?;
        let subtree = index
            .category_of(variant.id)
            .and_then(|category| tree.get_mut(category))
            .ok_or_else(|| Error::Uncategorized {
                name: name.clone(),
                id: variant.id,
            })?;
        let node_links = links
            .get(&variant.id.to_string())
            .cloned()
            .unwrap_or_default();

        subtree.nodes.insert(
            variant.id,
            TreeNode {
                name: local.name.clone(),
                desc,
                col: location.col,
                row: location.row,
                effects: effects.clone(),
                links: node_links,
            },
        );
    }

    Ok(tree)
}

/// Build the skill tree from the loaded documents and the external link and
/// category files, and write it to the output directory.
///
/// # Errors
/// Returns an error if an input is missing or invalid, the join fails, or
/// the output cannot be written.
pub fn export_skill_tree(data: &SkillData, config: &Config) -> Result<PathBuf> {
    tracing::info!("Exporting aggregate skill tree data");
    let extracted = Extracted::run(data)?;

    let links = read_links(config.output_path(LINKS_FILE))?;
    let categories = read_categories(config.output_path(CATEGORIES_FILE))?;
    let tree = build_skill_tree(&extracted, &categories, &links, &config.roots)?;

    let node_count: usize = tree.values().map(|c| c.nodes.len()).sum();
    tracing::debug!("Joined {} nodes into {} categories", node_count, tree.len());

    let path = config.output_path(SKILL_TREE_FILE);
    write_json(&path, &tree)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::{Localization, Location, Variant};
    use pretty_assertions::assert_eq;

    fn refs(ids: &[&str]) -> Vec<NodeRef> {
        ids.iter().map(|id| NodeRef::Text((*id).to_string())).collect()
    }

    fn extracted() -> Extracted {
        Extracted {
            effects: IndexMap::from([(0, vec!["E1".to_string()]), (1, vec![])]),
            values: IndexMap::new(),
            variants: IndexMap::from([
                ("Foo".to_string(), Variant { id: 0, base: 0 }),
                ("Bar".to_string(), Variant { id: 1, base: 0 }),
                ("baz".to_string(), Variant { id: 2, base: 1 }),
            ]),
            locations: IndexMap::from([
                ("Foo".to_string(), Location { col: 8, row: 0 }),
                ("Bar".to_string(), Location { col: 9, row: 1 }),
                ("baz".to_string(), Location { col: 3, row: 0 }),
            ]),
            discriminators: IndexMap::new(),
            localizations: IndexMap::from([
                ("FOO".to_string(), localization("Foo", "Foo desc")),
                ("BAR".to_string(), localization("Bar", "Bar desc")),
                ("BAZ".to_string(), localization("Baz", "Baz desc")),
            ]),
        }
    }

    fn localization(name: &str, desc: &str) -> Localization {
        Localization {
            name: name.to_string(),
            desc: Some(desc.to_string()),
        }
    }

    fn roots() -> IndexMap<String, NodeRef> {
        IndexMap::from([
            ("Firepower".to_string(), NodeRef::from(0)),
            ("Survival".to_string(), NodeRef::from(2)),
        ])
    }

    #[test]
    fn test_join() {
        let categories = IndexMap::from([
            ("Survival".to_string(), refs(&["2"])),
            ("Firepower".to_string(), refs(&["0", "1"])),
        ]);
        let links = IndexMap::from([("0".to_string(), refs(&["1"]))]);

        let tree = build_skill_tree(&extracted(), &categories, &links, &roots()).unwrap();

        let names: Vec<_> = tree.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["Survival", "Firepower"]);

        let firepower = &tree["Firepower"];
        assert_eq!(firepower.root, NodeRef::Text("0".to_string()));
        assert_eq!(
            firepower.nodes[&0],
            TreeNode {
                name: "Foo".to_string(),
                desc: "Foo desc".to_string(),
                col: 8,
                row: 0,
                effects: vec!["E1".to_string()],
                links: refs(&["1"]),
            }
        );
        // Shares Foo's base node; not in the link map
        assert_eq!(firepower.nodes[&1].effects, vec!["E1".to_string()]);
        assert!(firepower.nodes[&1].links.is_empty());

        // Lower-case variant name is looked up upper-cased
        assert_eq!(tree["Survival"].nodes[&2].name, "Baz");
    }

    #[test]
    fn test_conflicting_category() {
        let categories = IndexMap::from([
            ("Firepower".to_string(), refs(&["0", "1"])),
            ("Survival".to_string(), refs(&["1", "2"])),
        ]);
        let err = CategoryIndex::build(&categories).unwrap_err();
        assert!(matches!(err, Error::ConflictingCategory { id: 1, .. }));
    }

    #[test]
    fn test_uncategorized_node() {
        let categories = IndexMap::from([("Firepower".to_string(), refs(&["0", "1"]))]);
        let err = build_skill_tree(&extracted(), &categories, &IndexMap::new(), &roots())
            .unwrap_err();
        assert!(matches!(err, Error::Uncategorized { id: 2, .. }));
    }

    #[test]
    fn test_non_canonical_member_does_not_claim_node() {
        // "01" is not how id 1 is spelled, so Bar belongs nowhere
        let categories = IndexMap::from([
            ("Firepower".to_string(), refs(&["0", "01"])),
            ("Survival".to_string(), refs(&["2"])),
        ]);
        let index = CategoryIndex::build(&categories).unwrap();
        assert_eq!(index.category_of(1), None);

        let err = build_skill_tree(&extracted(), &categories, &IndexMap::new(), &roots())
            .unwrap_err();
        assert!(matches!(err, Error::Uncategorized { id: 1, .. }));
    }

    #[test]
    fn test_missing_localization_and_description() {
        let categories = IndexMap::from([
            ("Firepower".to_string(), refs(&["0", "1"])),
            ("Survival".to_string(), refs(&["2"])),
        ]);

        let mut data = extracted();
        data.localizations.shift_remove("BAR");
        let err = build_skill_tree(&data, &categories, &IndexMap::new(), &roots()).unwrap_err();
        assert!(matches!(err, Error::MissingLocalization { key, .. } if key == "BAR"));

        let mut data = extracted();
        data.localizations["FOO"].desc = None;
        let err = build_skill_tree(&data, &categories, &IndexMap::new(), &roots()).unwrap_err();
        assert!(matches!(err, Error::MissingDescription { key } if key == "FOO"));
    }

    #[test]
    fn test_base_out_of_range_and_unknown_category() {
        let categories = IndexMap::from([
            ("Firepower".to_string(), refs(&["0", "1"])),
            ("Survival".to_string(), refs(&["2"])),
        ]);

        let mut data = extracted();
        data.variants["baz"].base = 7;
        let err = build_skill_tree(&data, &categories, &IndexMap::new(), &roots()).unwrap_err();
        assert!(matches!(err, Error::BaseNodeOutOfRange { base: 7, count: 2, .. }));

        let categories = IndexMap::from([("Cooking".to_string(), refs(&["0"]))]);
        let err = build_skill_tree(&extracted(), &categories, &IndexMap::new(), &roots())
            .unwrap_err();
        assert!(matches!(err, Error::UnknownCategory(name) if name == "Cooking"));
    }
}
