//! Re-centering pass (`SkillTreeFinal.json`)
//!
//! The game lays every category out on one wide hex grid. The planner draws
//! each category on its own canvas, so each one is shifted horizontally until
//! the middle of its reachable column span lands on [`CENTER_COLUMN`]. Shifts
//! keep column parity (hex rows are staggered by column), so odd midpoints
//! land one column to the right.

use super::graph::depth_first;
use super::{SKILL_TREE_FILE, SKILL_TREE_FINAL_FILE, SkillTree, TreeNode, write_json};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::formats::external::{NodeRef, read_json};
use indexmap::IndexMap;
use std::collections::HashMap;
use std::path::PathBuf;

/// Target column for the middle of each category
pub const CENTER_COLUMN: i32 = 8;

/// Column shift for every category, in tree order.
///
/// Bounds come from the nodes reachable from the category root over node
/// links. Nodes are looked up across the whole tree, so links may cross
/// category boundaries.
///
/// # Errors
/// Returns [`Error::UnknownNode`] if a root or link names a node that is not
/// in the tree.
pub fn category_offsets(tree: &SkillTree) -> Result<IndexMap<String, i32>> {
    let mut nodes: HashMap<u32, &TreeNode> = HashMap::new();
    for subtree in tree.values() {
        nodes.extend(subtree.nodes.iter().map(|(id, node)| (*id, node)));
    }

    let mut offsets = IndexMap::with_capacity(tree.len());
    for (category, subtree) in tree {
        let unknown = |id: &NodeRef| Error::UnknownNode {
            category: category.clone(),
            id: id.to_string(),
        };
        let root = subtree.root.id().ok_or_else(|| unknown(&subtree.root))?;

        let mut left = i32::MAX;
        let mut right = i32::MIN;
        depth_first(root, |id| {
            let node = nodes
                .get(&id)
                .ok_or_else(|| unknown(&NodeRef::Index(id)))?;
            left = left.min(node.col);
            right = right.max(node.col);
            node.links
                .iter()
                .map(|link| link.id().ok_or_else(|| unknown(link)))
                .collect()
        })?;

        let mid = (left + right).div_euclid(2);
        let offset = mid - (CENTER_COLUMN + (mid & 1));
        tracing::debug!("Category {} spans columns {}..={}, offset {}", category, left, right, offset);
        offsets.insert(category.clone(), offset);
    }

    Ok(offsets)
}

/// Shift every node of each category left by its offset
pub fn apply_offsets(tree: &mut SkillTree, offsets: &IndexMap<String, i32>) {
    for (category, subtree) in tree.iter_mut() {
        let Some(offset) = offsets.get(category) else {
            continue;
        };
        for node in subtree.nodes.values_mut() {
            node.col -= offset;
        }
    }
}

/// Read `SkillTree.json`, re-center each category and write `SkillTreeFinal.json`
///
/// # Errors
/// Returns an error if the skill tree cannot be read, references unknown
/// nodes, or the output cannot be written.
pub fn export_offset_tree(config: &Config) -> Result<PathBuf> {
    tracing::info!("Applying tree offsets");
    let mut tree: SkillTree = read_json(&config.output_path(SKILL_TREE_FILE))?;

    let offsets = category_offsets(&tree)?;
    apply_offsets(&mut tree, &offsets);

    let path = config.output_path(SKILL_TREE_FINAL_FILE);
    write_json(&path, &tree)?;
    Ok(path)
}
